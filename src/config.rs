use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub crm: CrmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrmConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub package_object_type: Option<String>,
    pub timeout_ms: u64,
    pub associations: AssociationTypeConfig,
}

/// Association-type ids are opaque platform constants, configured per portal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssociationTypeConfig {
    pub primary_contact: String,
    pub child_deal: String,
    pub deal_to_company: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            crm: CrmConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hubapi.com".to_string(),
            access_token: None,
            package_object_type: None,
            timeout_ms: 30_000,
            associations: AssociationTypeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file, and
    /// environment variables
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Add environment variables with prefix "PKG"
        config = config.add_source(
            config::Environment::with_prefix("PKG")
                .separator("__")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // Conventional variable names from the platform's private-app setup
        if let Ok(value) = std::env::var("OPP_PACKAGES_ID") {
            app_config.crm.package_object_type = Some(value);
        }
        if let Ok(value) = std::env::var("PRIMARY_CONTACT_ASSOC_ID") {
            app_config.crm.associations.primary_contact = value;
        }
        if let Ok(value) = std::env::var("CHILD_DEAL_ASSOC_ID") {
            app_config.crm.associations.child_deal = value;
        }
        if let Ok(value) = std::env::var("DEAL_TO_COMPANY_ASSOC_ID") {
            app_config.crm.associations.deal_to_company = value;
        }

        Ok(app_config)
    }

    /// Get the access token from config or environment
    pub fn access_token(&self) -> anyhow::Result<String> {
        if let Some(token) = &self.crm.access_token {
            return Ok(token.clone());
        }

        // Fall back to the platform's conventional variable name
        if let Ok(token) = std::env::var("PRIVATE_APP_ACCESS_TOKEN") {
            return Ok(token);
        }

        anyhow::bail!("CRM access token not configured (set PKG_CRM__ACCESS_TOKEN or PRIVATE_APP_ACCESS_TOKEN)")
    }

    /// Get the object-type id of the package catalog
    pub fn package_object_type(&self) -> anyhow::Result<String> {
        if let Some(object_type) = &self.crm.package_object_type {
            return Ok(object_type.clone());
        }

        anyhow::bail!("package object type not configured (set PKG_CRM__PACKAGE_OBJECT_TYPE or OPP_PACKAGES_ID)")
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
