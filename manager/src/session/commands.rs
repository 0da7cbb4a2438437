use std::str::FromStr;

use students_store::{
    record::{Country, UnknownCountry},
    view::{FilterField, UnknownFilterField},
};
use thiserror::Error;

use crate::form::FormField;

pub const HELP: &str = "\
Form:
  name <value>              set the name field
  surname <value>           set the surname field
  date <value>              set the date field (YYYY-MM-DD)
  score <value>             set the score field (0-100)
  country <value>           set the country field
  form                      show the form
  submit                    add or update the student
Table:
  list                      show the table
  edit <row>                load a row into the form
  delete <row>              delete a row
Filters:
  by name|surname           choose the searched field
  search [text]             search text, empty clears it
  filter-country <c>|all    show one country only
Other:
  help                      show this help
  quit                      exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(FormField, String),
    ShowForm,
    Submit,
    List,
    Edit(usize),
    Delete(usize),
    FilterBy(FilterField),
    Search(String),
    FilterCountry(Option<Country>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}', type 'help'")]
    Unknown(String),
    #[error("'{0}' is not a row number")]
    InvalidRow(String),
    #[error(transparent)]
    FilterField(#[from] UnknownFilterField),
    #[error(transparent)]
    Country(#[from] UnknownCountry),
}

fn parse_row(value: &str) -> Result<usize, CommandError> {
    match value.trim().parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(CommandError::InvalidRow(value.trim().to_string())),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Field values keep their surrounding spaces, trimming is up to the form.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line.trim_end(), ""));

        match word {
            "" => Err(CommandError::Empty),
            "name" => Ok(Command::Set(FormField::Name, rest.to_string())),
            "surname" => Ok(Command::Set(FormField::Surname, rest.to_string())),
            "date" => Ok(Command::Set(FormField::Date, rest.to_string())),
            "score" => Ok(Command::Set(FormField::Score, rest.to_string())),
            "country" => Ok(Command::Set(FormField::Country, rest.to_string())),
            "form" => Ok(Command::ShowForm),
            "submit" => Ok(Command::Submit),
            "list" => Ok(Command::List),
            "edit" => Ok(Command::Edit(parse_row(rest)?)),
            "delete" => Ok(Command::Delete(parse_row(rest)?)),
            "by" => Ok(Command::FilterBy(rest.trim().parse()?)),
            "search" => Ok(Command::Search(rest.trim().to_string())),
            "filter-country" => match rest.trim() {
                "" | "all" => Ok(Command::FilterCountry(None)),
                country => Ok(Command::FilterCountry(Some(country.parse()?))),
            },
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            unknown => Err(CommandError::Unknown(unknown.to_string())),
        }
    }
}
