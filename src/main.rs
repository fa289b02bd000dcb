use axum::serve;
use opp_package_service::api::handlers::{PackageSettings, ServiceState};
use opp_package_service::api::routes::create_router;
use opp_package_service::config::AppConfig;
use opp_package_service::store::HubSpotStore;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Opportunity Package Service");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    let store = HubSpotStore::new(
        &config.crm.base_url,
        &config.access_token()?,
        config.crm.timeout_ms,
    )?;

    let state = Arc::new(ServiceState {
        store,
        settings: PackageSettings {
            package_object_type: config.package_object_type()?,
            association_types: config.crm.associations.clone(),
        },
    });

    let app = create_router().with_state(state);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Package service running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
