use anyhow::{Context, Result};

use crate::ids::IdGenerator;
use crate::record::{RecordId, Student, StudentFields};
use crate::storage::Storage;

use super::StudentsRepository;

#[derive(Debug)]
pub struct StudentsStore<S, G> {
    storage: S,
    ids: G,
    key: String,
    students: Vec<Student>,
}

impl<S, G> StudentsStore<S, G>
where
    S: Storage,
    G: IdGenerator,
{
    /// Rehydrates the collection saved under `key`.
    ///
    /// A missing, unreadable or malformed snapshot yields an empty store.
    pub fn load(storage: S, ids: G, key: impl Into<String>) -> Self {
        let key = key.into();
        let students = match storage.load(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Student>>(&raw) {
                Ok(students) => students,
                Err(err) => {
                    log::warn!("Snapshot '{}' is corrupted, starting empty: {}", key, err);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("Failed snapshot '{}' read, starting empty: {:#}", key, err);
                Vec::new()
            }
        };
        log::info!("Loaded {} students from '{}'", students.len(), key);

        StudentsStore {
            storage,
            ids,
            key,
            students,
        }
    }

    pub fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.students)
            .with_context(|| format!("Failed snapshot '{}' serialisation", self.key))?;
        self.storage
            .save(&self.key, &raw)
            .with_context(|| format!("Failed snapshot '{}' saving", self.key))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persists the current collection, restoring `previous` when the write fails.
    fn commit(&mut self, previous: Vec<Student>) -> Result<()> {
        if let Err(err) = self.persist() {
            self.students = previous;
            return Err(err);
        }
        Ok(())
    }

    fn position(&self, record_id: &RecordId) -> Option<usize> {
        self.students
            .iter()
            .position(|student| student.id() == record_id)
    }
}

impl<S, G> StudentsRepository for StudentsStore<S, G>
where
    S: Storage,
    G: IdGenerator,
{
    fn get_records(&self) -> &[Student] {
        &self.students
    }

    fn get(&self, record_id: &RecordId) -> Option<&Student> {
        self.position(record_id).map(|idx| &self.students[idx])
    }

    fn add(&mut self, fields: StudentFields) -> Result<RecordId> {
        let record_id = self.ids.generate();
        let previous = self.students.clone();
        self.students.push(Student::new(record_id.clone(), fields));
        self.commit(previous)?;

        log::debug!("Added student {}", record_id);
        Ok(record_id)
    }

    fn update(&mut self, record_id: &RecordId, fields: StudentFields) -> Result<()> {
        let previous = self.students.clone();
        match self.position(record_id) {
            Some(idx) => self.students[idx].assign(fields),
            None => log::debug!("Update of missing student {} ignored", record_id),
        }
        self.commit(previous)
    }

    fn remove(&mut self, record_id: &RecordId) -> Result<()> {
        let previous = self.students.clone();
        self.students.retain(|student| student.id() != record_id);
        if self.students.len() == previous.len() {
            log::debug!("Removal of missing student {} ignored", record_id);
        }
        self.commit(previous)
    }
}
