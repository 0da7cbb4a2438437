use std::collections::HashMap;

use anyhow::Result;

use super::Storage;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn with_value(key: &str, value: &str) -> Self {
        MemoryStorage {
            values: HashMap::from([(key.to_string(), value.to_string())]),
        }
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|value| value.as_str())
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
