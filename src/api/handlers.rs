use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::AssociationTypeConfig;
use crate::error::ServiceError;
use crate::logic::{associations, catalog, payload};
use crate::model::{ObjectRecord, PropertyOption, StudyRow};
use crate::store::CrmStore;

/// Shared handler state: the CRM store plus the package-catalog settings.
#[derive(Debug)]
pub struct ServiceState<S> {
    pub store: S,
    pub settings: PackageSettings,
}

#[derive(Debug, Clone)]
pub struct PackageSettings {
    pub package_object_type: String,
    pub association_types: AssociationTypeConfig,
}

pub type AppState<S> = Arc<ServiceState<S>>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Error body surfaced to the wizard, mirroring the upstream failure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
    pub status_text: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub body: Value,
}

/// Map a pipeline failure onto the boundary: upstream failures answer with
/// the upstream's own status where representable, anything else is a 500.
fn error_response(error: ServiceError) -> (StatusCode, Json<ErrorResponse>) {
    match error {
        ServiceError::Upstream {
            message,
            status,
            status_text,
            body,
        } => {
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (
                code,
                Json(ErrorResponse {
                    message,
                    status,
                    status_text,
                    body,
                }),
            )
        }
        ServiceError::Unexpected(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: error.to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                status_text: "Internal Server Error".to_string(),
                body: Value::Null,
            }),
        ),
    }
}

/// Package types offered on the wizard's first screen: the allowed values
/// of the package-type picklist, in the store's order.
pub async fn get_package_types<S: CrmStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<PropertyOption>>, (StatusCode, Json<ErrorResponse>)> {
    let options = state
        .store
        .list_property_options(
            &state.settings.package_object_type,
            catalog::PACKAGE_TYPE_PROPERTY,
        )
        .await
        .map_err(error_response)?;

    Ok(Json(options))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagesQuery {
    pub package_type: String,
}

/// Study templates of the chosen package type, sorted for display.
pub async fn get_packages_by_type<S: CrmStore>(
    State(state): State<AppState<S>>,
    Query(query): Query<PackagesQuery>,
) -> Result<Json<Vec<ObjectRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let results = state
        .store
        .search_by_property(
            &state.settings.package_object_type,
            catalog::PACKAGE_TYPE_PROPERTY,
            &query.package_type,
            catalog::SEARCH_PROPERTIES,
            catalog::SEARCH_LIMIT,
        )
        .await
        .map_err(error_response)?;

    Ok(Json(catalog::sort_studies(results)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChildDealsRequest {
    pub properties_to_send: HashMap<String, Value>,
    pub parameters: CreateChildDealsParameters,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChildDealsParameters {
    pub selected_studies: Vec<StudyRow>,
}

#[derive(Debug, Serialize)]
pub struct CreateChildDealsResponse {
    pub success: bool,
    pub message: String,
    pub data: Vec<ObjectRecord>,
}

/// The wizard's finish step: resolve the parent deal's associations, build
/// one payload per selected study and create them in a single batch.
pub async fn create_child_deals<S: CrmStore>(
    State(state): State<AppState<S>>,
    Json(request): Json<CreateChildDealsRequest>,
) -> Result<Json<CreateChildDealsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let studies = &request.parameters.selected_studies;
    debug!("selected studies: {:?}", studies);

    let parent_id = request
        .properties_to_send
        .get("hs_object_id")
        .map(payload::property_string)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            error_response(ServiceError::Unexpected(anyhow::anyhow!(
                "propertiesToSend.hs_object_id is required"
            )))
        })?;

    let resolved = associations::resolve_for_deal(&state.store, &parent_id)
        .await
        .map_err(error_response)?;

    let flags = payload::generated_flags();
    let payloads = payload::build_payloads(
        &request.properties_to_send,
        &resolved,
        studies,
        &flags,
        &state.settings.association_types,
    );
    debug!(
        "deal names: {:?}",
        payloads
            .iter()
            .map(|p| p.properties.get("dealname"))
            .collect::<Vec<_>>()
    );
    info!(
        "creating {} child deals under deal {}",
        payloads.len(),
        parent_id
    );

    let created = state
        .store
        .create_deals_batch(&payloads)
        .await
        .map_err(error_response)?;

    Ok(Json(CreateChildDealsResponse {
        success: true,
        message: "Deals created successfully".to_string(),
        data: created,
    }))
}
