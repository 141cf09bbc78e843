//! Store configuration from the environment.

use crate::error::StoreError;
use crate::memory::{MemoryOrderStore, MemoryProductStore};
use crate::stores::{OrderStore, ProductStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Default poll interval for product subscriptions.
const DEFAULT_PRODUCT_POLL: Duration = Duration::from_secs(30);
/// Default poll interval for order subscriptions.
const DEFAULT_ORDER_POLL: Duration = Duration::from_secs(10);

/// Which backing store to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Seeded in-memory store.
    Memory,
    /// Remote table store at the given URL.
    Remote { url: String },
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: Backend,
    pub product_poll_interval: Duration,
    pub order_poll_interval: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
            product_poll_interval: DEFAULT_PRODUCT_POLL,
            order_poll_interval: DEFAULT_ORDER_POLL,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// - `MANDI_STORE_BACKEND`: `memory` (default) or `remote`
    /// - `MANDI_STORE_URL`: backend URL, required when remote
    /// - `MANDI_PRODUCT_POLL_MS` / `MANDI_ORDER_POLL_MS`: poll intervals
    pub fn from_env() -> Result<Self, StoreError> {
        let mut config = Self::default();

        match std::env::var("MANDI_STORE_BACKEND").ok().as_deref() {
            None | Some("memory") => {}
            Some("remote") => {
                let url = std::env::var("MANDI_STORE_URL").map_err(|_| {
                    StoreError::Config(
                        "MANDI_STORE_URL is required for the remote backend".to_string(),
                    )
                })?;
                config.backend = Backend::Remote { url };
            }
            Some(other) => {
                return Err(StoreError::Config(format!(
                    "unknown store backend '{other}'"
                )));
            }
        }

        if let Some(ms) = read_millis("MANDI_PRODUCT_POLL_MS")? {
            config.product_poll_interval = ms;
        }
        if let Some(ms) = read_millis("MANDI_ORDER_POLL_MS")? {
            config.order_poll_interval = ms;
        }

        Ok(config)
    }
}

fn read_millis(var: &str) -> Result<Option<Duration>, StoreError> {
    match std::env::var(var) {
        Ok(raw) => {
            let ms: u64 = raw
                .parse()
                .map_err(|_| StoreError::Config(format!("{var} must be an integer, got '{raw}'")))?;
            if ms == 0 {
                return Err(StoreError::Config(format!("{var} must be positive")));
            }
            Ok(Some(Duration::from_millis(ms)))
        }
        Err(_) => Ok(None),
    }
}

/// Open the configured product store.
pub fn open_product_store(config: &StoreConfig) -> Result<Arc<dyn ProductStore>, StoreError> {
    match &config.backend {
        Backend::Memory => {
            info!("opening seeded in-memory product store");
            Ok(Arc::new(
                MemoryProductStore::seeded().with_poll_interval(config.product_poll_interval),
            ))
        }
        Backend::Remote { url } => Err(StoreError::Config(format!(
            "remote product store is not available in this build (url: {url})"
        ))),
    }
}

/// Open the configured order store.
pub fn open_order_store(config: &StoreConfig) -> Result<Arc<dyn OrderStore>, StoreError> {
    match &config.backend {
        Backend::Memory => {
            info!("opening seeded in-memory order store");
            Ok(Arc::new(
                MemoryOrderStore::seeded().with_poll_interval(config.order_poll_interval),
            ))
        }
        Backend::Remote { url } => Err(StoreError::Config(format!(
            "remote order store is not available in this build (url: {url})"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.backend, Backend::Memory);
        assert_eq!(config.product_poll_interval, Duration::from_secs(30));
        assert_eq!(config.order_poll_interval, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_memory_stores_open_seeded() {
        let config = StoreConfig::default();
        let products = open_product_store(&config).unwrap();
        assert!(!products.list().await.unwrap().is_empty());

        let orders = open_order_store(&config).unwrap();
        assert!(!orders.list().await.unwrap().is_empty());
    }

    #[test]
    fn test_remote_backend_rejected_without_implementation() {
        let config = StoreConfig {
            backend: Backend::Remote {
                url: "https://db.example.com".to_string(),
            },
            ..StoreConfig::default()
        };
        assert!(matches!(
            open_product_store(&config),
            Err(StoreError::Config(_))
        ));
    }
}
