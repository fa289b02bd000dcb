use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A study template row as selected in the wizard. Field names follow the
/// CRM property names; the platform returns every value as a string.
///
/// `opportunity_title` is display-only and never copied onto a created deal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hs_object_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_discipline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpq_quote_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_title: Option<String>,
}

impl StudyRow {
    /// Properties copied onto a created deal. The display-only title is
    /// stripped; absent fields are omitted rather than sent as null.
    pub fn payload_properties(&self) -> HashMap<String, Value> {
        let mut properties: HashMap<String, Value> = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map.into_iter().collect(),
            _ => HashMap::new(),
        };
        properties.remove("opportunity_title");
        properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_properties_strip_display_title() {
        let row: StudyRow = serde_json::from_value(json!({
            "species": "Rat",
            "lead_site": "Site A",
            "opportunity_title": "Acute Tox"
        }))
        .unwrap();

        let properties = row.payload_properties();
        assert_eq!(properties.get("species"), Some(&json!("Rat")));
        assert_eq!(properties.get("lead_site"), Some(&json!("Site A")));
        assert!(!properties.contains_key("opportunity_title"));
    }

    #[test]
    fn payload_properties_omit_absent_fields() {
        let row = StudyRow {
            species: Some("Dog".to_string()),
            ..StudyRow::default()
        };

        let properties = row.payload_properties();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties.get("species"), Some(&json!("Dog")));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        // Selected rows arrive from the wizard; stray keys must not fail the
        // create operation.
        let row: StudyRow = serde_json::from_value(json!({
            "species": "Mouse",
            "dealname": "should not survive"
        }))
        .unwrap();

        assert!(!row.payload_properties().contains_key("dealname"));
    }
}
