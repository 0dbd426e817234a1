use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, server::ServerConfig};
use std::str::FromStr;

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Where books are kept
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreBackend {
    #[default]
    MongoDb,
    /// Process-local store, lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidValue {
                key: "BOOKS_STORE".to_string(),
                value: other.to_string(),
                expected: "mongodb or memory".to_string(),
            }),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `BOOKS_COLLECTION`, default `books`
    pub books_collection: String,
    /// `BOOKS_STORE`, default `mongodb`
    pub store: StoreBackend,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let books_collection = env_or_default(
            "BOOKS_COLLECTION",
            domain_books::mongodb::DEFAULT_COLLECTION,
        );
        let store = env_or_default("BOOKS_STORE", "mongodb").parse()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            books_collection,
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("BOOKS_COLLECTION", None::<&str>),
                ("BOOKS_STORE", None),
                ("PORT", None),
                ("MONGODB_URL", None),
                ("MONGO_URL", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.books_collection, "books");
                assert_eq!(config.store, StoreBackend::MongoDb);
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.mongodb.url, "mongodb://localhost:27017");
                assert_eq!(config.app.name, "bookshelf_api");
            },
        );
    }

    #[test]
    fn test_config_memory_store_and_collection() {
        temp_env::with_vars(
            [
                ("BOOKS_COLLECTION", Some("library")),
                ("BOOKS_STORE", Some("Memory")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.books_collection, "library");
                assert_eq!(config.store, StoreBackend::Memory);
            },
        );
    }

    #[test]
    fn test_config_rejects_unknown_store() {
        temp_env::with_var("BOOKS_STORE", Some("postgres"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("BOOKS_STORE"));
        });
    }

    #[test]
    fn test_config_rejects_bad_port() {
        temp_env::with_var("PORT", Some("eighty"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }
}
