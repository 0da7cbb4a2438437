use std::str::FromStr;

use thiserror::Error;

use crate::record::{Country, Student};

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unknown filter field '{0}', expected 'name' or 'surname'")]
pub struct UnknownFilterField(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Name,
    Surname,
}

impl FilterField {
    fn value_of<'a>(&self, student: &'a Student) -> &'a str {
        match self {
            FilterField::Name => &student.name,
            FilterField::Surname => &student.surname,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Surname => "surname",
        }
    }
}

impl FromStr for FilterField {
    type Err = UnknownFilterField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "name" => Ok(FilterField::Name),
            "surname" => Ok(FilterField::Surname),
            _ => Err(UnknownFilterField(value.to_string())),
        }
    }
}

/// Criteria for the displayed table. Applying it never touches the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewFilter {
    pub field: FilterField,
    pub search: String,
    pub country: Option<Country>,
}

impl ViewFilter {
    /// Keeps students whose selected field contains `search` (ignoring case)
    /// and, when set, whose country matches. Highest score first; equal
    /// scores keep their collection order.
    ///
    /// A student with an empty selected field counts as missing it and is
    /// never shown.
    pub fn apply<'a>(&self, students: &'a [Student]) -> Vec<&'a Student> {
        let needle = self.search.to_lowercase();

        let mut view: Vec<&Student> = students
            .iter()
            .filter(|student| {
                let value = self.field.value_of(student);
                !value.is_empty() && value.to_lowercase().contains(&needle)
            })
            .filter(|student| {
                self.country
                    .map_or(true, |country| student.country == country)
            })
            .collect();
        view.sort_by(|a, b| b.score.cmp(&a.score));

        view
    }
}
