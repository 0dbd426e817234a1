//! Application state management.
//!
//! The state passed to the app's route builders:
//! - Configuration
//! - MongoDB client and database, when books are stored in MongoDB

use mongodb::{Client, Database};
use tracing::info;

use crate::config::{Config, StoreBackend};

/// MongoDB handles (cloneable, sharing the driver's connection pool)
#[derive(Clone)]
pub struct MongoState {
    pub client: Client,
    pub db: Database,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// Present unless `BOOKS_STORE=memory`
    pub mongo: Option<MongoState>,
}

impl AppState {
    /// Build the state, connecting to MongoDB when it is the configured store.
    ///
    /// Fails when the startup connectivity check does not pass within the
    /// configured retries.
    pub async fn from_config(config: Config) -> eyre::Result<Self> {
        let mongo = match config.store {
            StoreBackend::MongoDb => {
                info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

                let client =
                    database::mongodb::connect_from_config_with_retry(&config.mongodb, None)
                        .await?;
                let db = client.database(config.mongodb.database());

                info!(
                    "Successfully connected to MongoDB database: {}",
                    config.mongodb.database()
                );
                Some(MongoState { client, db })
            }
            StoreBackend::Memory => {
                info!("Using in-memory book store; data is lost on restart");
                None
            }
        };

        Ok(Self { config, mongo })
    }
}
