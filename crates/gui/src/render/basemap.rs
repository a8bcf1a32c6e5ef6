//! Basemap styles and per-style tile pipelines (walkers slippy tiles).

use std::collections::HashMap;

use walkers::sources::{Attribution, TileSource};
use walkers::{lon_lat, HttpTiles, MapMemory, Position, TileId};

/// The five selectable basemap styles, in dropdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasemapStyle {
    Streets,
    Topographic,
    Imagery,
    NightStreets,
    OpenStreetMap,
}

impl BasemapStyle {
    pub const ALL: &'static [BasemapStyle] = &[
        BasemapStyle::Streets,
        BasemapStyle::Topographic,
        BasemapStyle::Imagery,
        BasemapStyle::NightStreets,
        BasemapStyle::OpenStreetMap,
    ];

    /// Display name for the dropdown.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Streets => "World Street Map",
            Self::Topographic => "World Topographic Map",
            Self::Imagery => "World Imagery",
            Self::NightStreets => "Night Streets Basemap",
            Self::OpenStreetMap => "Open Street Map Basemap",
        }
    }

    /// Map a list position to a style.
    ///
    /// Anything past the fourth entry, including out-of-range indices,
    /// resolves to [`BasemapStyle::OpenStreetMap`].
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Self::OpenStreetMap)
    }
}

impl TileSource for BasemapStyle {
    fn tile_url(&self, tile_id: TileId) -> String {
        match self {
            // Esri tile services address tiles as z/y/x.
            Self::Streets => format!(
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Street_Map/MapServer/tile/{}/{}/{}",
                tile_id.zoom, tile_id.y, tile_id.x
            ),
            Self::Topographic => format!(
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Topo_Map/MapServer/tile/{}/{}/{}",
                tile_id.zoom, tile_id.y, tile_id.x
            ),
            Self::Imagery => format!(
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{}/{}/{}",
                tile_id.zoom, tile_id.y, tile_id.x
            ),
            // The night-streets vector style has no public raster endpoint;
            // CARTO's dark basemap is the raster stand-in.
            Self::NightStreets => format!(
                "https://basemaps.cartocdn.com/dark_all/{}/{}/{}.png",
                tile_id.zoom, tile_id.x, tile_id.y
            ),
            Self::OpenStreetMap => format!(
                "https://tile.openstreetmap.org/{}/{}/{}.png",
                tile_id.zoom, tile_id.x, tile_id.y
            ),
        }
    }

    fn attribution(&self) -> Attribution {
        match self {
            Self::Streets | Self::Topographic | Self::Imagery => Attribution {
                text: "Esri, Maxar, Earthstar Geographics",
                url: "https://www.esri.com",
                logo_light: None,
                logo_dark: None,
            },
            Self::NightStreets => Attribution {
                text: "© OpenStreetMap contributors, © CARTO",
                url: "https://carto.com/attributions",
                logo_light: None,
                logo_dark: None,
            },
            Self::OpenStreetMap => Attribution {
                text: "© OpenStreetMap contributors",
                url: "https://www.openstreetmap.org/copyright",
                logo_light: None,
                logo_dark: None,
            },
        }
    }
}

/// Persistent basemap state (survives between frames).
///
/// One tile pipeline per style, created lazily, so switching styles back and
/// forth reuses already-fetched tiles. Pan/zoom state is shared across
/// styles through the single [`MapMemory`].
pub struct BasemapState {
    style: BasemapStyle,
    pipelines: HashMap<BasemapStyle, HttpTiles>,
    pub memory: MapMemory,
    /// Fallback center position when the view is not detached.
    pub home: Position,
}

impl BasemapState {
    /// Create basemap state with the given style, centred at WGS-84 lon/lat.
    pub fn new(ctx: &egui::Context, style: BasemapStyle, lon: f64, lat: f64) -> Self {
        let mut pipelines = HashMap::new();
        pipelines.insert(style, HttpTiles::new(style, ctx.clone()));

        Self {
            style,
            pipelines,
            memory: MapMemory::default(),
            home: lon_lat(lon, lat),
        }
    }

    /// The active style.
    pub fn style(&self) -> BasemapStyle {
        self.style
    }

    /// Swap the active style, creating its tile pipeline on first use.
    pub fn set_style(&mut self, ctx: &egui::Context, style: BasemapStyle) {
        self.pipelines
            .entry(style)
            .or_insert_with(|| HttpTiles::new(style, ctx.clone()));
        self.style = style;
    }

    /// Tile pipeline of the active style plus the shared pan/zoom memory,
    /// borrowed together for the map widget.
    pub fn tiles_and_memory(&mut self) -> (&mut HttpTiles, &mut MapMemory) {
        let tiles = self
            .pipelines
            .get_mut(&self.style)
            .expect("active style always has a pipeline");
        (tiles, &mut self.memory)
    }

    /// Re-centre the view on the given WGS-84 lon/lat.
    pub fn center_on(&mut self, lon: f64, lat: f64) {
        self.memory.center_at(lon_lat(lon, lat));
    }

    /// Return to the home position and default zoom.
    pub fn reset_view(&mut self) {
        self.memory = MapMemory::default();
        let _ = self.memory.set_zoom(3.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_maps_to_style() {
        assert_eq!(BasemapStyle::from_index(0), BasemapStyle::Streets);
        assert_eq!(BasemapStyle::from_index(1), BasemapStyle::Topographic);
        assert_eq!(BasemapStyle::from_index(2), BasemapStyle::Imagery);
        assert_eq!(BasemapStyle::from_index(3), BasemapStyle::NightStreets);
        assert_eq!(BasemapStyle::from_index(4), BasemapStyle::OpenStreetMap);
    }

    #[test]
    fn out_of_range_falls_back_to_osm() {
        assert_eq!(BasemapStyle::from_index(5), BasemapStyle::OpenStreetMap);
        assert_eq!(
            BasemapStyle::from_index(usize::MAX),
            BasemapStyle::OpenStreetMap
        );
    }

    #[test]
    fn five_styles_round_trip_the_dropdown() {
        assert_eq!(BasemapStyle::ALL.len(), 5);
        for (i, &style) in BasemapStyle::ALL.iter().enumerate() {
            assert_eq!(BasemapStyle::from_index(i), style);
        }
    }

    #[test]
    fn tile_urls_substitute_coordinates() {
        let id = TileId { x: 4, y: 7, zoom: 3 };

        let esri = BasemapStyle::Streets.tile_url(id);
        assert!(esri.contains("World_Street_Map"));
        assert!(esri.ends_with("/tile/3/7/4"), "{esri}");

        let osm = BasemapStyle::OpenStreetMap.tile_url(id);
        assert_eq!(osm, "https://tile.openstreetmap.org/3/4/7.png");

        let dark = BasemapStyle::NightStreets.tile_url(id);
        assert_eq!(dark, "https://basemaps.cartocdn.com/dark_all/3/4/7.png");
    }

    #[test]
    fn every_style_has_attribution() {
        for &style in BasemapStyle::ALL {
            assert!(!style.attribution().text.is_empty());
        }
    }
}
