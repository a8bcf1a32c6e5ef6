pub mod basemap;
pub mod overlay;
