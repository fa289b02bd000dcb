use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::{self, AppState};
use crate::store::CrmStore;

pub fn create_router<S: CrmStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Wizard step 1: package type picklist
        .route("/package-types", get(handlers::get_package_types::<S>))
        // Wizard step 2: study templates for the chosen type
        .route("/packages", get(handlers::get_packages_by_type::<S>))
        // Wizard finish: batch-create the child deals
        .route("/deals/children", post(handlers::create_child_deals::<S>))
}
