use super::IKVStore;
use std::{collections::HashMap, sync::Mutex};

pub struct InMemoryKVStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryKVStore {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKVStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IKVStore for InMemoryKVStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let values = self.values.lock().unwrap();
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut values = self.values.lock().unwrap();
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
