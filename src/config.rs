/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Decimal places used when reporting coordinates picked on the map
    pub const COORD_PRECISION: usize = 6;

    /// Initial map view before the user picks anything (lat, lng)
    pub const MAP_CENTER: (f64, f64) = (20.5937, 78.9629);

    /// Initial map zoom level
    pub const MAP_ZOOM: u8 = 5;
}
