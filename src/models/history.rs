use super::decision::{IrrigationPlan, SensorData, WeatherData};
use super::error::AppError;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One logged decision: the response fields plus the inputs that produced it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub crop_type: String,
    pub soil_type: String,
    pub sensor_data: SensorData,
    pub weather_data: WeatherData,
    pub decision: IrrigationPlan,
    pub timestamp: DateTime<Utc>,
}

/// Chart-ready projection of the history: one label per entry plus the
/// three plotted series, all index-aligned.
#[derive(Clone, Debug, PartialEq)]
pub struct HistorySeries {
    pub labels: Vec<String>,
    pub water_amount: Vec<f64>,
    pub soil_moisture: Vec<f64>,
    pub rain_probability: Vec<f64>,
}

/// The full decision log as fetched from the backend.
///
/// The server returns newest-first; the table renders that order as-is
/// while the chart re-sorts ascending.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by ascending timestamp, regardless of server order.
    pub fn sorted_by_time(&self) -> Vec<HistoryEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        sorted
    }

    /// Derives the chart series. Errors on an empty log so callers render
    /// the placeholder instead of an empty chart.
    pub fn series_data(&self) -> Result<HistorySeries, AppError> {
        if self.entries.is_empty() {
            return Err(AppError::DataError("No history data available".to_string()));
        }

        let sorted = self.sorted_by_time();

        let labels = sorted
            .iter()
            .map(|e| e.timestamp.format("%Y-%m-%d %H:%M").to_string())
            .collect();
        let water_amount = sorted.iter().map(|e| e.decision.water_amount).collect();
        let soil_moisture = sorted.iter().map(|e| e.sensor_data.soil_moisture).collect();
        let rain_probability = sorted
            .iter()
            .map(|e| e.weather_data.rain_probability)
            .collect();

        Ok(HistorySeries {
            labels,
            water_amount,
            soil_moisture,
            rain_probability,
        })
    }
}
