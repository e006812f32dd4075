//! Configuration for the press hub

use press_policy::AbilityOptions;
use serde::{Deserialize, Serialize};

/// Main hub configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Seed data configuration
    #[serde(default)]
    pub seed: SeedConfig,

    /// Ability switches
    #[serde(default)]
    pub policy: AbilityOptions,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Seed data configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// JSON seed file; an empty registry when unset
    #[serde(default)]
    pub path: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl HubConfig {
    /// Load configuration: defaults, then the optional file, then
    /// `PRESS_`-prefixed environment variables
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&HubConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PRESS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Loading reads the process environment
    static ENV: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = HubConfig::default();
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
        assert!(config.seed.path.is_none());
        assert!(!config.policy.publish_for_press_admins);
    }

    #[test]
    fn test_load_without_file() {
        let _env = ENV.lock().unwrap_or_else(|e| e.into_inner());
        let config = HubConfig::load(None).unwrap();
        assert!(!config.policy.publish_for_press_admins);
    }

    #[test]
    fn test_load_from_file() {
        let _env = ENV.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[logging]\nlevel = \"debug\"\n\n[seed]\npath = \"seed.json\"\n\n[policy]\npublish_for_press_admins = true"
        )
        .unwrap();

        let config = HubConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.seed.path.as_deref(), Some("seed.json"));
        assert!(config.policy.publish_for_press_admins);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _env = ENV.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[policy]\npublish_for_press_admins = false").unwrap();

        std::env::set_var("PRESS_POLICY__PUBLISH_FOR_PRESS_ADMINS", "true");
        std::env::set_var("PRESS_LOGGING__LEVEL", "trace");
        std::env::set_var("PRESS_SEED_FILE", "ignored.json");
        let loaded = HubConfig::load(file.path().to_str());
        std::env::remove_var("PRESS_POLICY__PUBLISH_FOR_PRESS_ADMINS");
        std::env::remove_var("PRESS_LOGGING__LEVEL");
        std::env::remove_var("PRESS_SEED_FILE");

        let config = loaded.unwrap();
        assert!(config.policy.publish_for_press_admins);
        assert_eq!(config.logging.level, "trace");
        assert!(config.seed.path.is_none());
    }
}
