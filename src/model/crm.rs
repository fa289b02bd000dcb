use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub type Id = String;

/// One allowed value of a picklist property, as the property catalog
/// returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
    #[serde(default)]
    pub hidden: bool,
}

/// Property definition envelope; only the options matter to this service.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDefinition {
    #[serde(default)]
    pub options: Vec<PropertyOption>,
}

/// A CRM record: id plus an open property map. Property values are scalars
/// (the platform hands most of them back as strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub id: Id,
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

/// Search endpoint response body.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<ObjectRecord>,
}

/// One association edge on an expanded object fetch. The `type` label
/// carries the role, e.g. "primary_contact".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRef {
    pub id: Id,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssociationResults {
    #[serde(default)]
    pub results: Vec<AssociationRef>,
}

/// A record fetched with its association edges expanded. A relation the
/// record does not have is simply absent from the map.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectWithAssociations {
    pub id: Id,
    #[serde(default)]
    pub properties: HashMap<String, Value>,
    #[serde(default)]
    pub associations: HashMap<String, AssociationResults>,
}

/// Batch-create endpoint response body.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchCreateResponse {
    #[serde(default)]
    pub results: Vec<ObjectRecord>,
}
