mod inmemory;

pub use inmemory::InMemoryKVStore;

/// Opaque text storage the host offers for small pieces of app state
#[async_trait::async_trait]
pub trait IKVStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
