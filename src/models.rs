use serde::{Deserialize, Serialize};

/// One leaderboard row. The API returns rows already ranked; position in
/// `data` is the display rank.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Validator {
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    pub incidents: u64,
    pub minutes: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Metadata {
    pub total_validators: u64,
    pub time_window: String,
    pub as_of: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiResponse {
    pub data: Vec<Validator>,
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_payload() {
        let payload = r#"{
            "data": [
                {"name": "Nimbus One", "website": "https://nimbus.one", "incidents": 3, "minutes": 125.0},
                {"name": "Quiet Node", "website": null, "incidents": 0, "minutes": 0}
            ],
            "metadata": {"total_validators": 2, "time_window": "30 days", "as_of": "2026-08-01T00:00:00Z"}
        }"#;

        let board: ApiResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(board.data.len(), 2);
        assert_eq!(board.data[0].name, "Nimbus One");
        assert_eq!(board.data[0].website.as_deref(), Some("https://nimbus.one"));
        assert_eq!(board.data[1].website, None);
        assert_eq!(board.metadata.time_window, "30 days");
    }

    #[test]
    fn absent_website_decodes_as_none() {
        let payload = r#"{"name": "Bare", "incidents": 1, "minutes": 7.5}"#;
        let validator: Validator = serde_json::from_str(payload).unwrap();
        assert_eq!(validator.website, None);
    }

    #[test]
    fn empty_data_is_a_valid_payload() {
        let payload = r#"{
            "data": [],
            "metadata": {"total_validators": 0, "time_window": "7 days", "as_of": "2026-08-01T00:00:00Z"}
        }"#;
        let board: ApiResponse = serde_json::from_str(payload).unwrap();
        assert!(board.data.is_empty());
    }
}
