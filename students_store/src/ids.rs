use uuid::Uuid;

use crate::record::RecordId;

pub trait IdGenerator {
    fn generate(&mut self) -> RecordId;
}

#[derive(Debug, Clone, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&mut self) -> RecordId {
        Uuid::new_v4().to_string().into()
    }
}

/// Yields `student-1`, `student-2`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    issued: u64,
}

impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> RecordId {
        self.issued += 1;
        format!("student-{}", self.issued).into()
    }
}
