use anyhow::Result;
use students_store::{
    record::{Country, RecordId, Score, Student, StudentFields},
    repository::StudentsRepository,
};
use thiserror::Error;

use crate::notifications::{Notification, Notifier};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Score must be a number between 0 and 100.")]
    InvalidScore,
    #[error("Unknown country '{0}'.")]
    UnknownCountry(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Surname,
    Date,
    Score,
    Country,
}

/// Raw text typed into the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub surname: String,
    pub date: String,
    pub score: String,
    pub country: String,
}

impl FormValues {
    pub fn validate(&self) -> Result<StudentFields, ValidationError> {
        let name = self.name.trim();
        let surname = self.surname.trim();
        let date = self.date.as_str();
        let country = self.country.trim();

        if name.is_empty() || surname.is_empty() || country.is_empty() || date.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let score = self
            .score
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|value| Score::try_from(value).ok())
            .ok_or(ValidationError::InvalidScore)?;

        let country = country
            .parse::<Country>()
            .map_err(|err| ValidationError::UnknownCountry(err.0))?;

        Ok(StudentFields {
            name: name.to_string(),
            surname: surname.to_string(),
            date: date.to_string(),
            score,
            country,
        })
    }
}

impl From<&Student> for FormValues {
    fn from(student: &Student) -> Self {
        FormValues {
            name: student.name.clone(),
            surname: student.surname.clone(),
            date: student.date.clone(),
            score: student.score.to_string(),
            country: student.country.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Added(RecordId),
    Updated(RecordId),
    Rejected(ValidationError),
}

pub struct FormController<R, N> {
    repo: R,
    notifier: N,
    mode: FormMode,
    form: FormValues,
}

impl<R, N> FormController<R, N>
where
    R: StudentsRepository,
    N: Notifier,
{
    pub fn new(repo: R, notifier: N) -> Self {
        FormController {
            repo,
            notifier,
            mode: FormMode::Create,
            form: FormValues::default(),
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn form(&self) -> &FormValues {
        &self.form
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.form.name = value,
            FormField::Surname => self.form.surname = value,
            FormField::Date => self.form.date = value,
            FormField::Score => self.form.score = value,
            FormField::Country => self.form.country = value,
        }
    }

    /// Adds or updates a student from the current form.
    ///
    /// Rejected input leaves both the form and the mode untouched. `Err` is
    /// only returned when the snapshot could not be written.
    pub fn submit(&mut self) -> Result<Submission> {
        let fields = match self.form.validate() {
            Ok(fields) => fields,
            Err(err) => {
                log::debug!("Form rejected: {:?}", err);
                self.notifier.notify(Notification::Invalid(err.clone()));
                return Ok(Submission::Rejected(err));
            }
        };

        let submission = match self.mode.clone() {
            FormMode::Edit(record_id) => {
                self.repo.update(&record_id, fields)?;
                self.mode = FormMode::Create;
                self.notifier.notify(Notification::Updated);
                Submission::Updated(record_id)
            }
            FormMode::Create => {
                let record_id = self.repo.add(fields)?;
                self.notifier.notify(Notification::Added);
                Submission::Added(record_id)
            }
        };
        self.form = FormValues::default();

        Ok(submission)
    }

    pub fn begin_edit(&mut self, student: &Student) {
        self.form = FormValues::from(student);
        self.mode = FormMode::Edit(student.id().clone());
        self.notifier.notify(Notification::EditStarted);
    }

    pub fn delete(&mut self, record_id: &RecordId) -> Result<()> {
        self.repo.remove(record_id)?;
        self.notifier.notify(Notification::Deleted);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};
    use students_store::{
        ids::SequentialIds,
        record::{Country, RecordId, Score},
        repository::{store::StudentsStore, StudentsRepository, DEFAULT_STORAGE_KEY},
        storage::{memory::MemoryStorage, Storage},
    };

    use crate::notifications::{Notification, NotificationKind, NotificationQueue};

    use super::{FormController, FormField, FormMode, FormValues, Submission, ValidationError};

    type Controller =
        FormController<StudentsStore<MemoryStorage, SequentialIds>, NotificationQueue>;

    fn controller() -> Controller {
        FormController::new(
            StudentsStore::load(
                MemoryStorage::default(),
                SequentialIds::default(),
                DEFAULT_STORAGE_KEY,
            ),
            NotificationQueue::default(),
        )
    }

    fn fill(
        controller: &mut Controller,
        name: &str,
        surname: &str,
        date: &str,
        score: &str,
        country: &str,
    ) {
        controller.set_field(FormField::Name, name);
        controller.set_field(FormField::Surname, surname);
        controller.set_field(FormField::Date, date);
        controller.set_field(FormField::Score, score);
        controller.set_field(FormField::Country, country);
    }

    #[test]
    fn test_submit_adds_trimmed_student() -> Result<()> {
        let mut controller = controller();
        fill(&mut controller, "  Ali ", " Vali", "2024-01-01", "85", " USA ");

        let submission = controller.submit()?;

        assert_eq!(submission, Submission::Added(RecordId::from("student-1")));
        let records = controller.repo().get_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Ali");
        assert_eq!(records[0].surname, "Vali");
        assert_eq!(records[0].date, "2024-01-01");
        assert_eq!(records[0].score.value(), 85);
        assert_eq!(records[0].country, Country::Usa);
        assert_eq!(controller.form(), &FormValues::default());
        assert_eq!(controller.mode(), &FormMode::Create);
        assert_eq!(controller.notifier().pending(), &[Notification::Added]);

        Ok(())
    }

    #[test]
    fn test_out_of_range_score_is_rejected() -> Result<()> {
        let mut controller = controller();
        fill(&mut controller, "Ali", "Vali", "2024-01-01", "85", "USA");
        controller.submit()?;
        controller.notifier_mut().drain();

        fill(&mut controller, "Ali", "Vali", "2024-01-01", "150", "USA");
        let submission = controller.submit()?;

        assert_eq!(submission, Submission::Rejected(ValidationError::InvalidScore));
        assert_eq!(controller.repo().get_records().len(), 1);
        assert_eq!(controller.form().score, "150");
        assert_eq!(
            controller.notifier().pending(),
            &[Notification::Invalid(ValidationError::InvalidScore)]
        );

        Ok(())
    }

    #[test]
    fn test_score_boundaries() -> Result<()> {
        for (score, accepted) in [("0", true), ("100", true), ("-1", false), ("101", false)] {
            let mut controller = controller();
            fill(&mut controller, "Ali", "Vali", "2024-01-01", score, "UK");

            let submission = controller.submit()?;

            match accepted {
                true => assert!(matches!(submission, Submission::Added(_))),
                false => {
                    assert_eq!(submission, Submission::Rejected(ValidationError::InvalidScore));
                    assert_eq!(
                        controller.notifier().pending()[0].kind(),
                        NotificationKind::Error
                    );
                }
            }
        }

        Ok(())
    }

    #[test]
    fn test_non_numeric_score() {
        let values = FormValues {
            name: "Ali".into(),
            surname: "Vali".into(),
            date: "2024-01-01".into(),
            score: "eighty".into(),
            country: "UK".into(),
        };

        assert_eq!(values.validate(), Err(ValidationError::InvalidScore));
    }

    #[test]
    fn test_missing_fields() -> Result<()> {
        let mut controller = controller();
        fill(&mut controller, "Ali", "   ", "2024-01-01", "150", "USA");

        let submission = controller.submit()?;

        assert_eq!(submission, Submission::Rejected(ValidationError::MissingFields));
        assert!(controller.repo().get_records().is_empty());
        assert_eq!(controller.form().name, "Ali");

        Ok(())
    }

    #[test]
    fn test_unknown_country() {
        let values = FormValues {
            name: "Ali".into(),
            surname: "Vali".into(),
            date: "2024-01-01".into(),
            score: "10".into(),
            country: "Atlantis".into(),
        };

        assert_eq!(
            values.validate(),
            Err(ValidationError::UnknownCountry("Atlantis".to_string()))
        );
    }

    #[test]
    fn test_edit_flow() -> Result<()> {
        let mut controller = controller();
        fill(&mut controller, "Ali", "Vali", "2024-01-01", "85", "USA");
        controller.submit()?;
        fill(&mut controller, "Olim", "Karimov", "2023-05-05", "60", "UK");
        controller.submit()?;
        controller.notifier_mut().drain();

        let student = controller.repo().get_records()[0].clone();
        controller.begin_edit(&student);

        assert_eq!(controller.mode(), &FormMode::Edit(student.id().clone()));
        assert_eq!(controller.form().name, "Ali");
        assert_eq!(controller.form().score, "85");
        assert_eq!(controller.form().country, "USA");

        controller.set_field(FormField::Name, " Aziz ");
        controller.set_field(FormField::Score, "99");
        let submission = controller.submit()?;

        assert_eq!(submission, Submission::Updated(student.id().clone()));
        assert_eq!(controller.mode(), &FormMode::Create);
        assert_eq!(controller.repo().get_records().len(), 2);

        let updated = controller.repo().get(student.id()).unwrap();
        assert_eq!(updated.name, "Aziz");
        assert_eq!(updated.surname, "Vali");
        assert_eq!(updated.score, Score::try_from(99).unwrap());
        assert_eq!(
            controller.notifier().pending(),
            &[Notification::EditStarted, Notification::Updated]
        );

        Ok(())
    }

    #[test]
    fn test_rejected_edit_stays_in_edit_mode() -> Result<()> {
        let mut controller = controller();
        fill(&mut controller, "Ali", "Vali", "2024-01-01", "85", "USA");
        controller.submit()?;

        let student = controller.repo().get_records()[0].clone();
        controller.begin_edit(&student);
        controller.set_field(FormField::Score, "abc");

        controller.submit()?;

        assert_eq!(controller.mode(), &FormMode::Edit(student.id().clone()));
        assert_eq!(controller.repo().get(student.id()), Some(&student));

        Ok(())
    }

    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn load(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("read-only file system"))
        }
    }

    #[test]
    fn test_failed_save_does_not_duplicate_on_resubmit() {
        let mut controller = FormController::new(
            StudentsStore::load(ReadOnlyStorage, SequentialIds::default(), DEFAULT_STORAGE_KEY),
            NotificationQueue::default(),
        );
        controller.set_field(FormField::Name, "Ali");
        controller.set_field(FormField::Surname, "Vali");
        controller.set_field(FormField::Date, "2024-01-01");
        controller.set_field(FormField::Score, "85");
        controller.set_field(FormField::Country, "USA");

        assert!(controller.submit().is_err());
        assert!(controller.submit().is_err());

        assert!(controller.repo().get_records().is_empty());
        assert_eq!(controller.form().name, "Ali");
        assert_eq!(controller.mode(), &FormMode::Create);
        assert!(controller.notifier().pending().is_empty());
    }

    #[test]
    fn test_date_is_kept_verbatim() -> Result<()> {
        let mut controller = controller();
        fill(&mut controller, "Ali", "Vali", " 2024-01-01 ", "85", "USA");

        controller.submit()?;

        assert_eq!(controller.repo().get_records()[0].date, " 2024-01-01 ");

        Ok(())
    }

    #[test]
    fn test_delete() -> Result<()> {
        let mut controller = controller();
        fill(&mut controller, "Ali", "Vali", "2024-01-01", "85", "USA");
        controller.submit()?;
        controller.notifier_mut().drain();

        let record_id = controller.repo().get_records()[0].id().clone();
        controller.delete(&record_id)?;
        controller.delete(&RecordId::from("missing"))?;

        assert!(controller.repo().get_records().is_empty());
        assert_eq!(
            controller.notifier().pending(),
            &[Notification::Deleted, Notification::Deleted]
        );

        Ok(())
    }
}
