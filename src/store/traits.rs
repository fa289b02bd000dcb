use crate::error::ServiceResult;
use crate::model::{DealPayload, ObjectRecord, ObjectWithAssociations, PropertyOption};

/// The remote CRM object store seam. One method per upstream call site; no
/// retries, no chunking, no caching anywhere behind it.
#[async_trait::async_trait]
pub trait CrmStore: Send + Sync {
    /// Allowed values of a picklist property, in the store's order.
    async fn list_property_options(
        &self,
        object_type: &str,
        property_name: &str,
    ) -> ServiceResult<Vec<PropertyOption>>;

    /// Records of `object_type` whose `property_name` equals `value`
    /// exactly, carrying `properties`, capped at `limit`.
    async fn search_by_property(
        &self,
        object_type: &str,
        property_name: &str,
        value: &str,
        properties: &[&str],
        limit: u32,
    ) -> ServiceResult<Vec<ObjectRecord>>;

    /// A deal expanded with its association edges to the given object types.
    async fn get_deal_with_associations(
        &self,
        deal_id: &str,
        associated_types: &[&str],
    ) -> ServiceResult<ObjectWithAssociations>;

    /// Create every payload in one atomic batch. All-or-nothing; an
    /// over-limit batch receives the store's own rejection.
    async fn create_deals_batch(&self, payloads: &[DealPayload]) -> ServiceResult<Vec<ObjectRecord>>;
}
