use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RecordId(String);

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unknown country '{0}'")]
pub struct UnknownCountry(pub String);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Uzbekistan,
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
    Germany,
    Russia,
}

/// Selectable countries in display order.
pub const COUNTRIES: [Country; 5] = [
    Country::Uzbekistan,
    Country::Usa,
    Country::Uk,
    Country::Germany,
    Country::Russia,
];

impl Country {
    pub fn name(&self) -> &'static str {
        match self {
            Country::Uzbekistan => "Uzbekistan",
            Country::Usa => "USA",
            Country::Uk => "UK",
            Country::Germany => "Germany",
            Country::Russia => "Russia",
        }
    }
}

impl Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Country {
    type Err = UnknownCountry;

    /// Matches a display name ignoring ASCII case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        COUNTRIES
            .into_iter()
            .find(|country| country.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownCountry(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Score {0} is outside 0..=100")]
pub struct ScoreOutOfRange(pub i64);

/// A score that is always within `Score::MIN..=Score::MAX`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Score {
    type Error = ScoreOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (Score::MIN as i64..=Score::MAX as i64).contains(&value) {
            Ok(Score(value as u8))
        } else {
            Err(ScoreOutOfRange(value))
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every student attribute except the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentFields {
    pub name: String,
    pub surname: String,
    pub date: String,
    pub score: Score,
    pub country: Country,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Student {
    id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    pub date: String,
    pub score: Score,
    pub country: Country,
}

impl Student {
    pub fn new(id: RecordId, fields: StudentFields) -> Student {
        Student {
            id,
            name: fields.name,
            surname: fields.surname,
            date: fields.date,
            score: fields.score,
            country: fields.country,
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn fields(&self) -> StudentFields {
        StudentFields {
            name: self.name.clone(),
            surname: self.surname.clone(),
            date: self.date.clone(),
            score: self.score,
            country: self.country,
        }
    }

    /// Overwrites every attribute, keeping the identifier.
    pub fn assign(&mut self, fields: StudentFields) {
        self.name = fields.name;
        self.surname = fields.surname;
        self.date = fields.date;
        self.score = fields.score;
        self.country = fields.country;
    }
}
