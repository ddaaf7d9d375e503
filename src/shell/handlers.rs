//! Command handlers.
//!
//! The shell builds one [`CommandContext`] at startup and runs every command
//! against it.

use super::commands::{help_table, Command};
use crate::config::Config;
use crate::error::{CommandResult, PersistenceError};
use crate::models::{AddressBook, FieldOperation, Record};
use crate::repositories::BookRepository;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

/// What the shell should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message, if any, and read the next command
    Continue(Option<String>),
    /// Print the message and stop
    Exit(String),
}

/// Everything a command needs: the book, where it is stored, and settings.
pub struct CommandContext {
    book: AddressBook,
    repository: Box<dyn BookRepository>,
    config: Config,
    today: Option<NaiveDate>,
}

impl CommandContext {
    /// Load the book from `repository` and build the context around it.
    pub fn load(config: Config, repository: Box<dyn BookRepository>) -> CommandResult<Self> {
        let records = repository.load()?;
        let book = AddressBook::from_records(records, config.singleton_policy)
            .map_err(PersistenceError::from)?;
        info!(contacts = book.len(), "Address book ready");
        Ok(Self {
            book,
            repository,
            config,
            today: None,
        })
    }

    /// Pin the date used by the birthday command instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Write the whole book through the repository.
    pub fn save(&self) -> CommandResult<()> {
        self.repository.save(self.book.records())?;
        Ok(())
    }

    /// Run one command.
    ///
    /// Mutating commands save the book afterwards when autosave is enabled.
    /// `exit` does not save; the caller saves before quitting.
    pub fn execute(&mut self, command: Command) -> CommandResult<Outcome> {
        debug!(?command, "Executing command");
        let mutating = command.is_mutating();

        let outcome = match command {
            Command::Hello => Outcome::Continue(Some("Greetings! How can I help you?".to_string())),
            Command::Help => Outcome::Continue(Some(help_table())),
            Command::New { name } => {
                let record = Record::new(&name)?;
                let message = format!("Contact {} created.", record.name());
                self.book.add_contact(record)?;
                Outcome::Continue(Some(message))
            }
            Command::Add { name, kind, value } => {
                let record =
                    self.book
                        .change_contact(FieldOperation::Add, &name, kind, &value, None)?;
                Outcome::Continue(Some(format!("Added {} to {}.", kind, record.name())))
            }
            Command::Del { name, kind, value } => {
                let record =
                    self.book
                        .change_contact(FieldOperation::Delete, &name, kind, &value, None)?;
                Outcome::Continue(Some(format!("Deleted {} from {}.", kind, record.name())))
            }
            Command::Change {
                name,
                kind,
                new_value,
                old_value,
            } => {
                let record = self.book.change_contact(
                    FieldOperation::Change,
                    &name,
                    kind,
                    &new_value,
                    old_value.as_deref(),
                )?;
                Outcome::Continue(Some(format!("Changed {} of {}.", kind, record.name())))
            }
            Command::Delete { name } => {
                let record = self.book.delete_contact(&name)?;
                Outcome::Continue(Some(format!("Contact {} deleted.", record.name())))
            }
            Command::Find { name } => {
                let record = self.book.find_contact(&name)?;
                Outcome::Continue(Some(format!("Contact found:\n{}", record)))
            }
            Command::All => Outcome::Continue(Some(self.book.to_string())),
            Command::Birthday => Outcome::Continue(Some(self.birthday_report())),
            Command::Exit => Outcome::Exit("Goodbye!".to_string()),
        };

        if mutating && self.config.autosave {
            self.save()?;
        }

        Ok(outcome)
    }

    fn birthday_report(&self) -> String {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let window = self.config.birthday_window_days;
        let upcoming = self.book.upcoming_birthdays(today, window);

        if upcoming.is_empty() {
            return format!("No birthdays in the next {} days.", window);
        }

        let lines: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
        format!("Birthdays in the next {} days:\n{}", window, lines.join("\n"))
    }
}
