use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::crm::Id;

/// Category of an association type, as the platform names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssociationCategory {
    HubspotDefined,
    UserDefined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationType {
    pub association_category: AssociationCategory,
    pub association_type_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationTarget {
    pub id: Id,
}

/// One typed association edge on a create payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    pub to: AssociationTarget,
    pub types: Vec<AssociationType>,
}

impl Association {
    pub fn new(target: &str, category: AssociationCategory, type_id: &str) -> Self {
        Self {
            to: AssociationTarget {
                id: target.to_string(),
            },
            types: vec![AssociationType {
                association_category: category,
                association_type_id: type_id.to_string(),
            }],
        }
    }
}

/// One record in the batch-create request: merged properties plus the
/// association edges back to contact, parent deal and companies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealPayload {
    pub properties: HashMap<String, Value>,
    pub associations: Vec<Association>,
}

/// Companies and primary contact resolved from the parent deal's edges.
/// `company_ids` is deduplicated; a parent without a primary contact is a
/// valid end state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAssociations {
    pub company_ids: Vec<Id>,
    pub primary_contact_id: Option<Id>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn association_edge_serializes_platform_wire_shape() {
        let edge = Association::new("123", AssociationCategory::UserDefined, "35");

        assert_eq!(
            serde_json::to_value(&edge).unwrap(),
            json!({
                "to": {"id": "123"},
                "types": [{
                    "associationCategory": "USER_DEFINED",
                    "associationTypeId": "35"
                }]
            })
        );
    }

    #[test]
    fn hubspot_defined_category_screams() {
        let edge = Association::new("10", AssociationCategory::HubspotDefined, "341");
        let value = serde_json::to_value(&edge).unwrap();

        assert_eq!(
            value["types"][0]["associationCategory"],
            json!("HUBSPOT_DEFINED")
        );
    }
}
