#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use irrigation_dashboard::hooks::use_catalog::CatalogState;
    use irrigation_dashboard::hooks::use_decision::DecisionView;
    use irrigation_dashboard::hooks::use_history::HistoryState;
    use irrigation_dashboard::models::{
        auth::User,
        catalog::{Catalog, Crop},
        decision::{
            DecisionDraft, DecisionResponse, DecisionStatus, IrrigationPlan, SensorData,
            WeatherData,
        },
        error::AppError,
        history::{History, HistoryEntry},
    };
    use irrigation_dashboard::utils::format::{format_reading, format_timestamp};
    use std::rc::Rc;

    // Helper function to create a complete draft
    fn complete_draft() -> DecisionDraft {
        DecisionDraft {
            crop_type: "wheat".to_string(),
            soil_type: "loamy".to_string(),
            latitude: "20.5937".to_string(),
            longitude: "78.9629".to_string(),
        }
    }

    // Helper function to create a history entry at the given hour
    fn entry_at(hour: u32, water: f64, moisture: f64, rain: f64) -> HistoryEntry {
        HistoryEntry {
            crop_type: "wheat".to_string(),
            soil_type: "loamy".to_string(),
            sensor_data: SensorData {
                soil_moisture: moisture,
                temperature: 28.0,
                humidity: 60.0,
            },
            weather_data: WeatherData {
                temperature: 31.0,
                humidity: 55.0,
                rain_probability: rain,
            },
            decision: IrrigationPlan {
                water_amount: water,
                duration: 2.0,
                status: DecisionStatus::Active,
            },
            timestamp: Utc.with_ymd_and_hms(2026, 5, 4, hour, 0, 0).unwrap(),
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_validation_error_displays_bare_message() {
        let error = AppError::Validation("Please select a crop type".to_string());
        assert_eq!(error.to_string(), "Please select a crop type");
    }

    #[test]
    fn test_api_error_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_user_message_passes_server_text_through() {
        let error = AppError::ApiError("Crop type 'kale' not found".to_string());
        assert_eq!(error.user_message(), "Crop type 'kale' not found");
    }

    #[test]
    fn test_user_message_generic_for_internal_errors() {
        let error = AppError::DataError("No history data available".to_string());
        assert_eq!(error.user_message(), "An error occurred");
    }

    // ===== Draft Validation Tests =====

    #[test]
    fn test_validation_reports_missing_crop_first() {
        let draft = DecisionDraft::default();
        let error = draft.validate().unwrap_err();
        assert_eq!(error.to_string(), "Please select a crop type");
    }

    #[test]
    fn test_validation_reports_missing_soil_second() {
        let draft = DecisionDraft {
            crop_type: "wheat".to_string(),
            ..DecisionDraft::default()
        };
        let error = draft.validate().unwrap_err();
        assert_eq!(error.to_string(), "Please select a soil type");
    }

    #[test]
    fn test_validation_checks_coordinates_together() {
        let mut draft = complete_draft();
        draft.latitude.clear();
        assert_eq!(
            draft.validate().unwrap_err().to_string(),
            "Please select a location"
        );

        let mut draft = complete_draft();
        draft.longitude.clear();
        assert_eq!(
            draft.validate().unwrap_err().to_string(),
            "Please select a location"
        );
    }

    #[test]
    fn test_validation_success_preserves_fields_verbatim() {
        let request = complete_draft().validate().unwrap();

        assert_eq!(request.crop_type, "wheat");
        assert_eq!(request.soil_type, "loamy");
        assert_eq!(request.latitude, "20.5937");
        assert_eq!(request.longitude, "78.9629");
    }

    #[test]
    fn test_validation_enforces_no_coordinate_bounds() {
        let mut draft = complete_draft();
        draft.latitude = "999.9".to_string();
        draft.longitude = "not-a-number".to_string();

        // Presence is the only client-side rule; interpretation is
        // server-side.
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_set_location_formats_six_decimal_places() {
        let mut draft = DecisionDraft::default();
        draft.set_location(12.3456789, 98.7);

        assert_eq!(draft.latitude, "12.345679");
        assert_eq!(draft.longitude, "98.700000");
    }

    // ===== Decision Status Tests =====

    #[test]
    fn test_status_deserializes_known_values() {
        assert_eq!(
            serde_json::from_str::<DecisionStatus>(r#""Active""#).unwrap(),
            DecisionStatus::Active
        );
        assert_eq!(
            serde_json::from_str::<DecisionStatus>(r#""Pending""#).unwrap(),
            DecisionStatus::Pending
        );
        assert_eq!(
            serde_json::from_str::<DecisionStatus>(r#""Cancelled""#).unwrap(),
            DecisionStatus::Cancelled
        );
    }

    #[test]
    fn test_unrecognized_status_falls_back_to_unknown() {
        let status: DecisionStatus = serde_json::from_str(r#""Paused""#).unwrap();
        assert_eq!(status, DecisionStatus::Unknown);
        assert_eq!(status.css_class(), "status-neutral");
    }

    #[test]
    fn test_status_badge_classes_are_fixed() {
        assert_eq!(DecisionStatus::Active.css_class(), "status-active");
        assert_eq!(DecisionStatus::Pending.css_class(), "status-pending");
        assert_eq!(DecisionStatus::Cancelled.css_class(), "status-cancelled");
    }

    // ===== Decision Response Tests =====

    #[test]
    fn test_decision_response_deserialization() {
        let json = r#"{
            "sensor_data": {"soil_moisture": 32.5, "temperature": 28.1, "humidity": 61.0},
            "weather_data": {"temperature": 31.4, "humidity": 55.0, "rain_probability": 20.0},
            "decision": {"water_amount": 25.0, "duration": 2.0, "status": "Active"},
            "timestamp": "2026-05-04T10:30:00Z"
        }"#;

        let response: DecisionResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.sensor_data.soil_moisture, 32.5);
        assert_eq!(response.weather_data.rain_probability, 20.0);
        assert_eq!(response.decision.water_amount, 25.0);
        assert_eq!(response.decision.duration, 2.0);
        assert_eq!(response.decision.status, DecisionStatus::Active);
        assert_eq!(
            response.timestamp,
            Utc.with_ymd_and_hms(2026, 5, 4, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_plan_summary_per_status() {
        let mut plan = IrrigationPlan {
            water_amount: 25.0,
            duration: 2.0,
            status: DecisionStatus::Active,
        };
        assert_eq!(
            plan.summary(),
            "Irrigate with 25 liters per hour for 2 hours."
        );

        plan.status = DecisionStatus::Pending;
        assert!(plan.summary().contains("rain probability"));

        plan.status = DecisionStatus::Cancelled;
        assert!(plan.summary().contains("Soil moisture is sufficient"));
    }

    // ===== History Tests =====

    #[test]
    fn test_history_series_sorts_ascending_regardless_of_input_order() {
        // Newest first, as the server returns it
        let history = History::new(vec![
            entry_at(12, 30.0, 20.0, 10.0),
            entry_at(8, 10.0, 40.0, 60.0),
            entry_at(10, 20.0, 30.0, 35.0),
        ]);

        let series = history.series_data().unwrap();

        assert_eq!(series.water_amount, vec![10.0, 20.0, 30.0]);
        assert_eq!(series.soil_moisture, vec![40.0, 30.0, 20.0]);
        assert_eq!(series.rain_probability, vec![60.0, 35.0, 10.0]);
        assert!(series.labels[0].contains("08:00"));
        assert!(series.labels[2].contains("12:00"));
    }

    #[test]
    fn test_history_series_vectors_stay_aligned() {
        let history = History::new(vec![entry_at(8, 10.0, 40.0, 60.0), entry_at(9, 15.0, 35.0, 50.0)]);

        let series = history.series_data().unwrap();

        assert_eq!(series.labels.len(), 2);
        assert_eq!(series.water_amount.len(), 2);
        assert_eq!(series.soil_moisture.len(), 2);
        assert_eq!(series.rain_probability.len(), 2);
    }

    #[test]
    fn test_empty_history_yields_no_series() {
        let history = History::default();
        assert!(history.is_empty());
        assert!(matches!(
            history.series_data(),
            Err(AppError::DataError(_))
        ));
    }

    #[test]
    fn test_history_table_order_is_preserved() {
        let history = History::new(vec![entry_at(12, 30.0, 20.0, 10.0), entry_at(8, 10.0, 40.0, 60.0)]);

        // entries() keeps server order; only the chart re-sorts
        assert_eq!(history.entries()[0].decision.water_amount, 30.0);
        assert_eq!(history.sorted_by_time()[0].decision.water_amount, 10.0);
    }

    #[test]
    fn test_history_entry_deserialization() {
        let json = r#"{
            "crop_type": "rice",
            "soil_type": "clay",
            "sensor_data": {"soil_moisture": 45.0, "temperature": 26.0, "humidity": 70.0},
            "weather_data": {"temperature": 29.0, "humidity": 65.0, "rain_probability": 80.0},
            "decision": {"water_amount": 0.0, "duration": 0.0, "status": "Cancelled"},
            "timestamp": "2026-05-03T06:00:00Z"
        }"#;

        let entry: HistoryEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.crop_type, "rice");
        assert_eq!(entry.soil_type, "clay");
        assert_eq!(entry.decision.status, DecisionStatus::Cancelled);
    }

    // ===== Catalog Tests =====

    #[test]
    fn test_catalog_deserialization() {
        let json = r#"{
            "crops": [{"name": "wheat"}, {"name": "rice"}],
            "soils": [{"name": "loamy"}]
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();

        assert_eq!(catalog.crops.len(), 2);
        assert_eq!(catalog.soils.len(), 1);
        assert_eq!(catalog.crops[0].name, "wheat");
    }

    #[test]
    fn test_crop_display_name_capitalizes() {
        let crop = Crop {
            name: "wheat".to_string(),
        };
        assert_eq!(crop.display_name(), "Wheat");

        let empty = Crop {
            name: String::new(),
        };
        assert_eq!(empty.display_name(), "");
    }

    // ===== Auth Model Tests =====

    #[test]
    fn test_anonymous_user_response_has_empty_username() {
        let user: User = serde_json::from_str("{}").unwrap();
        assert!(user.username.is_empty());
    }

    #[test]
    fn test_user_deserialization() {
        let user: User = serde_json::from_str(r#"{"username": "farmer"}"#).unwrap();
        assert_eq!(user.username, "farmer");
    }

    // ===== Hook State Tests =====

    #[test]
    fn test_catalog_state_data_extraction() {
        let catalog = Rc::new(Catalog::default());
        let loaded = CatalogState::Loaded(catalog.clone());

        assert!(loaded.data().is_some());
        assert!(!loaded.is_loading());

        assert!(CatalogState::Loading.data().is_none());
        assert!(CatalogState::Error("boom".to_string()).data().is_none());
    }

    #[test]
    fn test_history_state_equality() {
        let entries = Rc::new(History::new(vec![entry_at(8, 10.0, 40.0, 60.0)]));

        let state1 = HistoryState::Loaded(entries.clone());
        let state2 = HistoryState::Loaded(entries);
        assert_eq!(state1, state2);

        assert_eq!(HistoryState::Loading, HistoryState::Loading);
        assert_ne!(
            HistoryState::Error("a".to_string()),
            HistoryState::Error("b".to_string())
        );
    }

    #[test]
    fn test_decision_view_default_is_idle() {
        let view = DecisionView::default();

        assert!(view.decision.is_none());
        assert!(view.error.is_none());
        assert!(!view.submitting);
    }

    // ===== Formatting Tests =====

    #[test]
    fn test_format_timestamp() {
        let timestamp = Utc.with_ymd_and_hms(2026, 5, 4, 10, 30, 0).unwrap();
        assert_eq!(format_timestamp(&timestamp), "2026-05-04 10:30:00");
    }

    #[test]
    fn test_format_reading() {
        assert_eq!(format_reading(32.56), "32.6");
        assert_eq!(format_reading(60.0), "60.0");
    }
}
