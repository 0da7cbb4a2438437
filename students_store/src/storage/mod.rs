pub mod file;
pub mod memory;

use anyhow::Result;

/// Durable string-keyed storage holding whole snapshots.
pub trait Storage {
    /// `Ok(None)` when nothing was ever saved under `key`.
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}
