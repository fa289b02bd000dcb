use itertools::Itertools;

use crate::error::ServiceResult;
use crate::model::{ObjectWithAssociations, ResolvedAssociations};
use crate::store::{CrmStore, COMPANIES_OBJECT_TYPE, CONTACTS_OBJECT_TYPE};

/// Role label marking the parent deal's primary contact edge.
pub const PRIMARY_CONTACT_ROLE: &str = "primary_contact";

const COMPANIES_RELATION: &str = "companies";
const CONTACTS_RELATION: &str = "contacts";

/// Fetch the parent deal with its contact and company edges in one call and
/// reduce them to the association inputs of the payload builder.
pub async fn resolve_for_deal<S: CrmStore>(
    store: &S,
    deal_id: &str,
) -> ServiceResult<ResolvedAssociations> {
    let deal = store
        .get_deal_with_associations(deal_id, &[CONTACTS_OBJECT_TYPE, COMPANIES_OBJECT_TYPE])
        .await?;
    Ok(extract_associations(&deal))
}

/// Pure reduction of an expanded deal record. A missing relation is an
/// empty set, not an error; the first contact carrying the primary role
/// wins when duplicates exist.
pub fn extract_associations(deal: &ObjectWithAssociations) -> ResolvedAssociations {
    let company_ids = deal
        .associations
        .get(COMPANIES_RELATION)
        .map(|relation| {
            relation
                .results
                .iter()
                .map(|edge| edge.id.clone())
                .unique()
                .collect()
        })
        .unwrap_or_default();

    let primary_contact_id = deal
        .associations
        .get(CONTACTS_RELATION)
        .and_then(|relation| {
            relation
                .results
                .iter()
                .find(|edge| edge.kind.as_deref() == Some(PRIMARY_CONTACT_ROLE))
        })
        .map(|edge| edge.id.clone());

    ResolvedAssociations {
        company_ids,
        primary_contact_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AssociationRef, AssociationResults};
    use std::collections::HashMap;

    fn deal_with(
        companies: Vec<&str>,
        contacts: Vec<(&str, Option<&str>)>,
    ) -> ObjectWithAssociations {
        let mut associations = HashMap::new();
        associations.insert(
            COMPANIES_RELATION.to_string(),
            AssociationResults {
                results: companies
                    .into_iter()
                    .map(|id| AssociationRef {
                        id: id.to_string(),
                        kind: Some("deal_to_company".to_string()),
                    })
                    .collect(),
            },
        );
        associations.insert(
            CONTACTS_RELATION.to_string(),
            AssociationResults {
                results: contacts
                    .into_iter()
                    .map(|(id, kind)| AssociationRef {
                        id: id.to_string(),
                        kind: kind.map(str::to_string),
                    })
                    .collect(),
            },
        );

        ObjectWithAssociations {
            id: "100".to_string(),
            properties: HashMap::new(),
            associations,
        }
    }

    #[test]
    fn company_ids_are_deduplicated() {
        let deal = deal_with(vec!["10", "20", "10", "10"], vec![]);

        let resolved = extract_associations(&deal);
        assert_eq!(resolved.company_ids, vec!["10", "20"]);
    }

    #[test]
    fn first_primary_contact_wins() {
        let deal = deal_with(
            vec![],
            vec![
                ("4", Some("billing_contact")),
                ("5", Some(PRIMARY_CONTACT_ROLE)),
                ("6", Some(PRIMARY_CONTACT_ROLE)),
            ],
        );

        let resolved = extract_associations(&deal);
        assert_eq!(resolved.primary_contact_id.as_deref(), Some("5"));
    }

    #[test]
    fn absent_primary_contact_is_not_an_error() {
        let deal = deal_with(vec!["10"], vec![("4", Some("billing_contact")), ("7", None)]);

        let resolved = extract_associations(&deal);
        assert_eq!(resolved.primary_contact_id, None);
    }

    #[test]
    fn missing_relations_resolve_empty() {
        let deal = ObjectWithAssociations {
            id: "100".to_string(),
            properties: HashMap::new(),
            associations: HashMap::new(),
        };

        let resolved = extract_associations(&deal);
        assert!(resolved.company_ids.is_empty());
        assert_eq!(resolved.primary_contact_id, None);
    }
}
