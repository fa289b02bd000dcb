use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response, Url};
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::{ServiceError, ServiceResult};
use crate::model::{
    BatchCreateResponse, DealPayload, ObjectRecord, ObjectWithAssociations, PropertyDefinition,
    PropertyOption, SearchResponse,
};
use crate::store::traits::CrmStore;

/// Platform short ids for the standard object types.
pub const DEALS_OBJECT_TYPE: &str = "0-3";
pub const CONTACTS_OBJECT_TYPE: &str = "0-1";
pub const COMPANIES_OBJECT_TYPE: &str = "0-2";

/// HubSpot-backed implementation of [`CrmStore`]. The access token is
/// installed as a default header at construction; every call is a single
/// request surfaced verbatim on failure.
#[derive(Clone)]
pub struct HubSpotStore {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for HubSpotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubSpotStore")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HubSpotStore {
    pub fn new(base_url: &str, access_token: &str, timeout_ms: u64) -> anyhow::Result<Self> {
        // Validate early; a bad base URL should fail startup, not a request.
        Url::parse(base_url)?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", access_token))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Turn a non-success response into the verbatim upstream error.
    async fn upstream_error(message: &str, response: Response) -> ServiceError {
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = match response.text().await {
            Ok(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
            Err(_) => Value::Null,
        };
        ServiceError::upstream(message, status.as_u16(), status_text, body)
    }
}

#[async_trait::async_trait]
impl CrmStore for HubSpotStore {
    async fn list_property_options(
        &self,
        object_type: &str,
        property_name: &str,
    ) -> ServiceResult<Vec<PropertyOption>> {
        let url = format!(
            "{}/crm/v3/properties/{}/{}?archived=false",
            self.base_url, object_type, property_name
        );
        debug!("fetching picklist options for {}/{}", object_type, property_name);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Self::upstream_error("HubSpot API Error", response).await);
        }

        let definition: PropertyDefinition = response.json().await?;
        Ok(definition.options)
    }

    async fn search_by_property(
        &self,
        object_type: &str,
        property_name: &str,
        value: &str,
        properties: &[&str],
        limit: u32,
    ) -> ServiceResult<Vec<ObjectRecord>> {
        let url = format!("{}/crm/v3/objects/{}/search", self.base_url, object_type);
        let request = json!({
            "filterGroups": [{
                "filters": [{
                    "propertyName": property_name,
                    "operator": "EQ",
                    "value": value,
                }],
            }],
            "properties": properties,
            "limit": limit,
        });
        debug!("searching {} where {} = {}", object_type, property_name, value);

        let response = self.client.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(Self::upstream_error("HubSpot API Error", response).await);
        }

        let search: SearchResponse = response.json().await?;
        Ok(search.results)
    }

    async fn get_deal_with_associations(
        &self,
        deal_id: &str,
        associated_types: &[&str],
    ) -> ServiceResult<ObjectWithAssociations> {
        let url = format!(
            "{}/crm/v3/objects/{}/{}?associations={}",
            self.base_url,
            DEALS_OBJECT_TYPE,
            deal_id,
            associated_types.join(",")
        );
        debug!("fetching deal {} with associations", deal_id);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Self::upstream_error("HubSpot API Error", response).await);
        }

        Ok(response.json().await?)
    }

    async fn create_deals_batch(&self, payloads: &[DealPayload]) -> ServiceResult<Vec<ObjectRecord>> {
        let url = format!("{}/crm/v3/objects/deals/batch/create", self.base_url);
        info!("batch-creating {} deals", payloads.len());

        let response = self
            .client
            .post(&url)
            .json(&json!({ "inputs": payloads }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::upstream_error("HubSpot Bulk Create API Error", response).await);
        }

        let created: BatchCreateResponse = response.json().await?;
        Ok(created.results)
    }
}
