use super::error::AppError;
use crate::config::Config;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Field-sensor snapshot returned with every decision.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SensorData {
    pub soil_moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
}

/// Weather conditions the backend factored into the decision.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherData {
    pub temperature: f64,
    pub humidity: f64,
    pub rain_probability: f64,
}

/// Whether irrigation should proceed, as decided server-side.
///
/// The backend only emits the three named states today; anything else
/// deserializes to `Unknown` rather than failing, and renders with the
/// neutral badge style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum DecisionStatus {
    Active,
    Pending,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl DecisionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }

    /// CSS class for the status badge. Each recognized state maps to a
    /// fixed color; unrecognized states fall back to the neutral style.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Active => "status-active",
            Self::Pending => "status-pending",
            Self::Cancelled => "status-cancelled",
            Self::Unknown => "status-neutral",
        }
    }
}

impl std::fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The server-computed irrigation recommendation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IrrigationPlan {
    pub water_amount: f64,
    pub duration: f64,
    pub status: DecisionStatus,
}

impl IrrigationPlan {
    /// One-sentence summary of the plan for the decision card footer.
    pub fn summary(&self) -> String {
        match self.status {
            DecisionStatus::Active => format!(
                "Irrigate with {} liters per hour for {} hours.",
                self.water_amount, self.duration
            ),
            DecisionStatus::Pending => format!(
                "Irrigation pending due to high rain probability. Recommended amount: {} liters per hour for {} hours.",
                self.water_amount, self.duration
            ),
            DecisionStatus::Cancelled => {
                "Irrigation not needed at this time. Soil moisture is sufficient.".to_string()
            }
            DecisionStatus::Unknown => "Awaiting decision status.".to_string(),
        }
    }
}

/// Response of `POST /api/irrigation/decision/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DecisionResponse {
    pub sensor_data: SensorData,
    pub weather_data: WeatherData,
    pub decision: IrrigationPlan,
    pub timestamp: DateTime<Utc>,
}

/// A validated decision request, ready to submit.
///
/// Coordinates stay as the strings the user entered; the backend owns all
/// numeric interpretation and range checking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub crop_type: String,
    pub soil_type: String,
    pub latitude: String,
    pub longitude: String,
}

/// The in-progress form value: same fields as a request, all optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionDraft {
    pub crop_type: String,
    pub soil_type: String,
    pub latitude: String,
    pub longitude: String,
}

impl DecisionDraft {
    /// Checks required fields and produces a submittable request.
    ///
    /// Fails with the first missing field: crop type, then soil type,
    /// then the coordinate pair (checked together). No bounds are
    /// enforced on the coordinates beyond non-empty.
    pub fn validate(&self) -> Result<DecisionRequest, AppError> {
        if self.crop_type.is_empty() {
            return Err(AppError::Validation("Please select a crop type".to_string()));
        }
        if self.soil_type.is_empty() {
            return Err(AppError::Validation("Please select a soil type".to_string()));
        }
        if self.latitude.is_empty() || self.longitude.is_empty() {
            return Err(AppError::Validation("Please select a location".to_string()));
        }

        Ok(DecisionRequest {
            crop_type: self.crop_type.clone(),
            soil_type: self.soil_type.clone(),
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
        })
    }

    /// Fills the coordinate fields from a map click, formatted to the
    /// fixed display precision.
    pub fn set_location(&mut self, latitude: f64, longitude: f64) {
        self.latitude = format!("{latitude:.prec$}", prec = Config::COORD_PRECISION);
        self.longitude = format!("{longitude:.prec$}", prec = Config::COORD_PRECISION);
    }
}
