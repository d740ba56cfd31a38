use crate::error::Result;
use async_trait::async_trait;

/// String key-value storage port.
///
/// Stands in for whatever the host environment offers (browser local
/// storage in the original product, a file or database elsewhere).
/// Collaborators receive it injected rather than reaching for a global.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn put(&self, key: &str, value: String) -> Result<()>;
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn remove(&self, key: &str) -> Result<()>;
}

pub type KeyValueStoreBox = Box<dyn KeyValueStore>;
