use super::IPermissionGate;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Permission gate whose answer is decided up front
pub struct StaticPermissionGate {
    granted: AtomicBool,
    requests: AtomicUsize,
}

impl StaticPermissionGate {
    pub fn granted() -> Self {
        Self {
            granted: AtomicBool::new(true),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn denied() -> Self {
        let gate = Self::granted();
        gate.set_granted(false);
        gate
    }

    pub fn set_granted(&self, granted: bool) {
        self.granted.store(granted, Ordering::SeqCst);
    }

    /// How many times permission has been asked for
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl IPermissionGate for StaticPermissionGate {
    async fn request_permission(&self) -> bool {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.granted.load(Ordering::SeqCst)
    }
}
