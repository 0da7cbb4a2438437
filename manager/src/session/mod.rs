pub mod commands;
pub mod table;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use students_store::{record::RecordId, repository::StudentsRepository, view::ViewFilter};

use crate::{
    form::{FormController, FormMode, Submission},
    notifications::{NotificationKind, NotificationQueue},
};

use self::commands::{Command, HELP};

/// Line oriented front-end: form, filters and the numbered table.
pub struct Session<R> {
    controller: FormController<R, NotificationQueue>,
    filter: ViewFilter,
}

impl<R> Session<R>
where
    R: StudentsRepository,
{
    pub fn new(controller: FormController<R, NotificationQueue>) -> Self {
        Session {
            controller,
            filter: ViewFilter::default(),
        }
    }

    pub fn controller(&self) -> &FormController<R, NotificationQueue> {
        &self.controller
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    /// Processes commands until `quit` or the end of `input`.
    pub fn run<I, O>(&mut self, input: I, output: &mut O) -> Result<()>
    where
        I: BufRead,
        O: Write,
    {
        writeln!(output, "Student manager, type 'help' for commands.")?;
        self.show_table(output)?;
        self.prompt(output)?;

        for line in input.lines() {
            let line = line.context("Failed input reading")?;
            let keep_going = match line.parse::<Command>() {
                Ok(command) => self.handle(command, output)?,
                Err(commands::CommandError::Empty) => true,
                Err(err) => {
                    writeln!(output, "{}", err)?;
                    true
                }
            };
            self.flush_notifications(output)?;
            if !keep_going {
                break;
            }
            self.prompt(output)?;
        }

        Ok(())
    }

    fn prompt<O: Write>(&self, output: &mut O) -> Result<()> {
        let action = match self.controller.mode() {
            FormMode::Create => "add",
            FormMode::Edit(_) => "update",
        };
        write!(output, "[{}]> ", action)?;
        output.flush()?;
        Ok(())
    }

    fn handle<O: Write>(&mut self, command: Command, output: &mut O) -> Result<bool> {
        match command {
            Command::Set(field, value) => self.controller.set_field(field, value),
            Command::ShowForm => self.show_form(output)?,
            Command::Submit => match self.controller.submit() {
                Ok(Submission::Rejected(_)) => {}
                Ok(_) => self.show_table(output)?,
                Err(err) => report_failure(output, err)?,
            },
            Command::List => self.show_table(output)?,
            Command::Edit(row) => match self.row_student(row) {
                Some(record_id) => {
                    if let Some(student) = self.controller.repo().get(&record_id).cloned() {
                        self.controller.begin_edit(&student);
                        self.show_form(output)?;
                    }
                }
                None => writeln!(output, "No row {} in the table.", row)?,
            },
            Command::Delete(row) => match self.row_student(row) {
                Some(record_id) => match self.controller.delete(&record_id) {
                    Ok(()) => self.show_table(output)?,
                    Err(err) => report_failure(output, err)?,
                },
                None => writeln!(output, "No row {} in the table.", row)?,
            },
            Command::FilterBy(field) => {
                self.filter.field = field;
                self.show_table(output)?;
            }
            Command::Search(search) => {
                self.filter.search = search;
                self.show_table(output)?;
            }
            Command::FilterCountry(country) => {
                self.filter.country = country;
                self.show_table(output)?;
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn row_student(&self, row: usize) -> Option<RecordId> {
        self.filter
            .apply(self.controller.repo().get_records())
            .get(row.checked_sub(1)?)
            .map(|student| student.id().clone())
    }

    fn show_table<O: Write>(&self, output: &mut O) -> Result<()> {
        let country = self
            .filter
            .country
            .map(|country| country.to_string())
            .unwrap_or("all countries".to_string());
        writeln!(
            output,
            "Search by {}: '{}', {}",
            self.filter.field.label(),
            self.filter.search,
            country
        )?;
        table::render(output, &self.filter.apply(self.controller.repo().get_records()))?;
        Ok(())
    }

    fn show_form<O: Write>(&self, output: &mut O) -> Result<()> {
        let form = self.controller.form();
        let title = match self.controller.mode() {
            FormMode::Create => "New student",
            FormMode::Edit(_) => "Editing student",
        };
        writeln!(output, "{}:", title)?;
        writeln!(output, "  name:    {}", form.name)?;
        writeln!(output, "  surname: {}", form.surname)?;
        writeln!(output, "  date:    {}", form.date)?;
        writeln!(output, "  score:   {}", form.score)?;
        writeln!(output, "  country: {}", form.country)?;
        Ok(())
    }

    fn flush_notifications<O: Write>(&mut self, output: &mut O) -> Result<()> {
        for notification in self.controller.notifier_mut().drain() {
            let marker = match notification.kind() {
                NotificationKind::Error => "!",
                NotificationKind::Success => "+",
                NotificationKind::Info => "*",
            };
            writeln!(output, "[{}] {}", marker, notification)?;
        }
        Ok(())
    }
}

fn report_failure<O: Write>(output: &mut O, err: anyhow::Error) -> Result<()> {
    log::error!("Failed students saving: {:#}", err);
    writeln!(output, "Failed to save students: {:#}", err)?;
    Ok(())
}
