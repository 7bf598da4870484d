use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub registry: RegistryConfig,
    pub audit: AuditConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Managed object document (`managed.json` or YAML)
    pub managed_config_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    pub enable_activity_log: bool,
    /// Include the full authorization map in activity records
    pub log_full_objects: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("IDM_MANAGED_CONFIG") {
            self.registry.managed_config_path = PathBuf::from(v);
        }

        if let Ok(v) = env::var("AUDIT_ENABLE_ACTIVITY_LOG") {
            self.audit.enable_activity_log = v.parse().unwrap_or(self.audit.enable_activity_log);
        }
        if let Ok(v) = env::var("AUDIT_LOG_FULL_OBJECTS") {
            self.audit.log_full_objects = v.parse().unwrap_or(self.audit.log_full_objects);
        }

        if let Ok(v) = env::var("LOG_FILTER") {
            self.logging.filter = v;
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            registry: RegistryConfig {
                managed_config_path: PathBuf::from("conf/managed.json"),
            },
            audit: AuditConfig {
                enable_activity_log: true,
                log_full_objects: false,
            },
            logging: LoggingConfig {
                filter: "debug".to_string(),
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            registry: RegistryConfig {
                managed_config_path: PathBuf::from("conf/managed.json"),
            },
            audit: AuditConfig {
                enable_activity_log: true,
                log_full_objects: false,
            },
            logging: LoggingConfig {
                filter: "info".to_string(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            registry: RegistryConfig {
                managed_config_path: PathBuf::from("/opt/openidm/conf/managed.json"),
            },
            audit: AuditConfig {
                enable_activity_log: true,
                log_full_objects: false,
            },
            logging: LoggingConfig {
                filter: "warn".to_string(),
            },
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enable_activity_log: true,
            log_full_objects: false,
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}
