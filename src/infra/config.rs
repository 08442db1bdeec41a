//! For reading application configuration.
//!
//! Values are layered: built-in defaults, then an optional `config.toml`,
//! then environment variables such as `APP__LOGGING__FILTER`.

use serde::Deserialize;

/// Application configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Catalog configuration.
    pub catalog: CatalogConfig,
}

/// Logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives, used when `RUST_LOG` is not set.
    pub filter: String,
    /// Where to write hourly JSON log files, if anywhere.
    pub directory: Option<String>,
}

/// Catalog configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct CatalogConfig {
    /// Preload the reference products.
    pub seed: bool,
    /// A JSON file of new products to import on startup.
    pub import: Option<String>,
}

/// Retrieve [`Config`] from the default configuration file.
#[tracing::instrument]
pub fn load_config() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .set_default("logging.filter", "info,product_catalog=debug")?
        .set_default("catalog.seed", true)?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("app").separator("__"))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let config: Config = config::Config::builder()
            .set_default("logging.filter", "info")
            .unwrap()
            .set_default("catalog.seed", false)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!("info", config.logging.filter);
        assert!(config.logging.directory.is_none());
        assert!(!config.catalog.seed);
        assert!(config.catalog.import.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let config: Config = config::Config::builder()
            .set_default("logging.filter", "info")
            .unwrap()
            .set_default("catalog.seed", true)
            .unwrap()
            .add_source(config::File::from_str(
                "[logging]\nfilter = \"debug\"\ndirectory = \"./logs\"\n\n[catalog]\nseed = false\nimport = \"products.json\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!("debug", config.logging.filter);
        assert_eq!(Some("./logs".to_string()), config.logging.directory);
        assert!(!config.catalog.seed);
        assert_eq!(Some("products.json".to_string()), config.catalog.import);
    }
}
