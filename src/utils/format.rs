use chrono::{DateTime, Utc};

/// Timestamp label used on cards and table rows.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Numeric display for sensor and weather readings.
pub fn format_reading(value: f64) -> String {
    format!("{value:.1}")
}
