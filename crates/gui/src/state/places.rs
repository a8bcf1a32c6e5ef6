//! Preset locations: five fixed entries, immutable for the program's life.

/// A named map location in WGS-84.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    pub name: &'static str,
    pub lon: f64,
    pub lat: f64,
}

/// The five preset locations, in list order.
pub const PLACES: [Place; 5] = [
    Place {
        name: "Canada",
        lon: -113.712785,
        lat: 54.6985831,
    },
    Place {
        name: "Thailand",
        lon: 96.9946297,
        lat: 13.0003408,
    },
    Place {
        name: "Iceland",
        lon: -23.7277777,
        lat: 64.7967723,
    },
    Place {
        name: "India",
        lon: 73.7293199,
        lat: 20.7505273,
    },
    Place {
        name: "Rock of Gibraltar",
        lon: -5.3504789,
        lat: 36.1440926,
    },
];

impl Place {
    /// Look up a place by list position.
    pub fn by_index(index: usize) -> Option<&'static Place> {
        PLACES.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_entries_in_order() {
        let names: Vec<&str> = PLACES.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["Canada", "Thailand", "Iceland", "India", "Rock of Gibraltar"]
        );
    }

    #[test]
    fn index_maps_to_coordinates() {
        let canada = Place::by_index(0).unwrap();
        assert!((canada.lon - -113.712785).abs() < 1e-9);
        assert!((canada.lat - 54.6985831).abs() < 1e-9);

        let gibraltar = Place::by_index(4).unwrap();
        assert!((gibraltar.lon - -5.3504789).abs() < 1e-9);
        assert!((gibraltar.lat - 36.1440926).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_is_none() {
        assert!(Place::by_index(5).is_none());
    }

    #[test]
    fn coordinates_are_plausible() {
        for place in &PLACES {
            assert!(place.lon >= -180.0 && place.lon <= 180.0, "{}", place.name);
            assert!(place.lat >= -90.0 && place.lat <= 90.0, "{}", place.name);
        }
    }
}
