pub mod format;
pub mod leaflet;
