mod inmemory;

pub use inmemory::StaticPermissionGate;

/// Asks the host for permission to deliver notifications
#[async_trait::async_trait]
pub trait IPermissionGate: Send + Sync {
    async fn request_permission(&self) -> bool;
}
