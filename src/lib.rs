pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export error types
pub use error::{ServiceError, ServiceResult};

// Export logic functions
pub use logic::{build_payloads, extract_associations, generated_flags, merge_properties, sort_studies};

// Export all model types
pub use model::*;

// Export store types
pub use store::{CrmStore, HubSpotStore};

/// Start the service with configuration from the environment. Used by the
/// binary and by integration setups that want the real server.
pub async fn run_server() -> anyhow::Result<()> {
    use axum::serve;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with INFO level only (suppress DEBUG logs)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    // Load configuration
    let config = crate::config::AppConfig::load()?;

    let store = crate::store::HubSpotStore::new(
        &config.crm.base_url,
        &config.access_token()?,
        config.crm.timeout_ms,
    )?;

    let state = Arc::new(crate::api::handlers::ServiceState {
        store,
        settings: crate::api::handlers::PackageSettings {
            package_object_type: config.package_object_type()?,
            association_types: config.crm.associations.clone(),
        },
    });

    // Create router with state
    let app = crate::api::routes::create_router().with_state(state);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;

    serve(listener, app).await?;

    Ok(())
}
