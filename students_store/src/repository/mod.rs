pub mod store;

use anyhow::Result;

use crate::record::{RecordId, Student, StudentFields};

pub const DEFAULT_STORAGE_KEY: &str = "students";

/// Ordered student collection. Every mutation rewrites the persisted snapshot.
///
/// `update` and `remove` of an unknown id change nothing and still succeed.
pub trait StudentsRepository {
    fn get_records(&self) -> &[Student];
    fn get(&self, record_id: &RecordId) -> Option<&Student>;
    fn add(&mut self, fields: StudentFields) -> Result<RecordId>;
    fn update(&mut self, record_id: &RecordId, fields: StudentFields) -> Result<()>;
    fn remove(&mut self, record_id: &RecordId) -> Result<()>;
}
