use serde_json::Value;

use crate::model::ObjectRecord;

/// Picklist property the wizard filters on.
pub const PACKAGE_TYPE_PROPERTY: &str = "package_type";

/// Properties requested for every study template row.
pub const SEARCH_PROPERTIES: &[&str] = &[
    "hs_object_id",
    "package_type",
    "discipline",
    "sub_discipline",
    "sub_group",
    "species",
    "lead_site",
    "sort_order",
    "cpq_quote_title",
    "main_duration",
    "recovery_duration",
];

/// Server-side page cap on the study search; rows past it are out of scope.
pub const SEARCH_LIMIT: u32 = 100;

/// Order study rows for display: numeric `sort_order` ascending. Rows
/// without a parseable value sort after every keyed row and keep the
/// store's relative order.
pub fn sort_studies(mut rows: Vec<ObjectRecord>) -> Vec<ObjectRecord> {
    rows.sort_by_key(sort_order_key);
    rows
}

fn sort_order_key(row: &ObjectRecord) -> (bool, i64) {
    let parsed = row.properties.get("sort_order").and_then(|value| match value {
        Value::String(raw) => raw.trim().parse::<i64>().ok(),
        Value::Number(number) => number.as_i64(),
        _ => None,
    });

    match parsed {
        Some(order) => (false, order),
        None => (true, 0),
    }
}
