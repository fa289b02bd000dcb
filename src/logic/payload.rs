use serde_json::Value;
use std::collections::HashMap;

use crate::config::AssociationTypeConfig;
use crate::model::{Association, AssociationCategory, DealPayload, ResolvedAssociations, StudyRow};

/// Flags stamped onto every deal created through a package.
pub fn generated_flags() -> HashMap<String, Value> {
    HashMap::from([
        ("package_document__dsa_".to_string(), Value::Bool(true)),
        ("opp_created_by_package".to_string(), Value::Bool(true)),
    ])
}

/// Last-write-wins merge over an ordered list of property sources. Later
/// sources overwrite earlier ones on key collision.
pub fn merge_properties(sources: &[&HashMap<String, Value>]) -> HashMap<String, Value> {
    sources.iter().fold(HashMap::new(), |mut merged, source| {
        merged.extend(source.iter().map(|(key, value)| (key.clone(), value.clone())));
        merged
    })
}

/// `{parent}_{study}` deal name. A missing side contributes the empty
/// string; the separator always survives.
pub fn combined_deal_name(parent: &HashMap<String, Value>, study: &StudyRow) -> String {
    let parent_name = parent.get("dealname").map(property_string).unwrap_or_default();
    let study_title = study.opportunity_title.clone().unwrap_or_default();
    format!("{}_{}", parent_name, study_title)
}

/// Scalar property rendered as the string the platform expects in ids and
/// names. Null contributes nothing.
pub fn property_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Build one create payload per selected study, in selection order.
///
/// Property precedence is parent < study (display title stripped) <
/// generated flags < combined deal name. The association list is the
/// primary contact (when resolved), the parent deal, then one edge per
/// resolved company. Inputs are never mutated.
pub fn build_payloads(
    parent: &HashMap<String, Value>,
    associations: &ResolvedAssociations,
    studies: &[StudyRow],
    flags: &HashMap<String, Value>,
    association_types: &AssociationTypeConfig,
) -> Vec<DealPayload> {
    let parent_id = parent
        .get("hs_object_id")
        .map(property_string)
        .unwrap_or_default();

    studies
        .iter()
        .map(|study| {
            let mut edges = Vec::with_capacity(associations.company_ids.len() + 2);

            if let Some(contact_id) = &associations.primary_contact_id {
                edges.push(Association::new(
                    contact_id,
                    AssociationCategory::UserDefined,
                    &association_types.primary_contact,
                ));
            }

            edges.push(Association::new(
                &parent_id,
                AssociationCategory::UserDefined,
                &association_types.child_deal,
            ));

            for company_id in &associations.company_ids {
                edges.push(Association::new(
                    company_id,
                    AssociationCategory::HubspotDefined,
                    &association_types.deal_to_company,
                ));
            }

            let study_properties = study.payload_properties();
            let mut properties = merge_properties(&[parent, &study_properties, flags]);
            properties.insert(
                "dealname".to_string(),
                Value::String(combined_deal_name(parent, study)),
            );

            DealPayload {
                properties,
                associations: edges,
            }
        })
        .collect()
}
