//! Command table and input parsing.

use crate::domain::FieldKind;
use crate::error::{CommandError, CommandResult};

/// One entry of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub params: &'static str,
    pub description: &'static str,
    pub min_args: usize,
    pub max_args: usize,
}

impl CommandSpec {
    const fn new(
        name: &'static str,
        params: &'static str,
        description: &'static str,
        min_args: usize,
        max_args: usize,
    ) -> Self {
        Self {
            name,
            params,
            description,
            min_args,
            max_args,
        }
    }

    fn expected(&self) -> String {
        if self.min_args == self.max_args {
            self.min_args.to_string()
        } else {
            format!("{}-{}", self.min_args, self.max_args)
        }
    }
}

/// Every command the shell accepts, in help order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec::new("hello", "", "Greeting message", 0, 0),
    CommandSpec::new("help", "", "Show this table", 0, 0),
    CommandSpec::new("new", "[name]", "Create a new contact", 1, 1),
    CommandSpec::new("add", "[name] [type] [value]", "Add a contact field", 3, 3),
    CommandSpec::new("del", "[name] [type] [value]", "Delete a contact field", 3, 3),
    CommandSpec::new(
        "change",
        "[name] [type] [new_value] [old_value]",
        "Change a contact field",
        3,
        4,
    ),
    CommandSpec::new("delete", "[name]", "Delete a contact", 1, 1),
    CommandSpec::new("find", "[name]", "Show a contact", 1, 1),
    CommandSpec::new("all", "", "Show all contacts", 0, 0),
    CommandSpec::new("birthday", "", "Show upcoming birthdays", 0, 0),
    CommandSpec::new("exit", "", "Save and close the program", 0, 0),
];

/// Look up a command by its case-folded name. `close` is an alias of `exit`.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    let folded = name.to_lowercase();
    let folded = if folded == "close" { "exit".to_string() } else { folded };
    COMMANDS.iter().find(|spec| spec.name == folded)
}

/// A parsed command with its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    New {
        name: String,
    },
    Add {
        name: String,
        kind: FieldKind,
        value: String,
    },
    Del {
        name: String,
        kind: FieldKind,
        value: String,
    },
    Change {
        name: String,
        kind: FieldKind,
        new_value: String,
        old_value: Option<String>,
    },
    Delete {
        name: String,
    },
    Find {
        name: String,
    },
    All,
    Birthday,
    Exit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// - `CommandError::UnknownCommand` for an unknown first word
    /// - `CommandError::WrongArity` when the argument count is outside the command's range
    /// - `CommandError::Book` when the field type is unknown
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };
        let spec = lookup(first).ok_or_else(|| CommandError::UnknownCommand(first.to_string()))?;

        let args: Vec<String> = words.map(str::to_string).collect();
        if args.len() < spec.min_args || args.len() > spec.max_args {
            return Err(CommandError::WrongArity {
                command: spec.name,
                expected: spec.expected(),
                actual: args.len(),
            });
        }

        let mut args = args.into_iter();
        let mut next = || args.next().unwrap_or_default();

        let command = match spec.name {
            "hello" => Self::Hello,
            "help" => Self::Help,
            "new" => Self::New { name: next() },
            "add" => Self::Add {
                name: next(),
                kind: next().parse()?,
                value: next(),
            },
            "del" => Self::Del {
                name: next(),
                kind: next().parse()?,
                value: next(),
            },
            "change" => Self::Change {
                name: next(),
                kind: next().parse()?,
                new_value: next(),
                old_value: Some(next()).filter(|v| !v.is_empty()),
            },
            "delete" => Self::Delete { name: next() },
            "find" => Self::Find { name: next() },
            "all" => Self::All,
            "birthday" => Self::Birthday,
            _ => Self::Exit,
        };

        Ok(Some(command))
    }

    /// Whether executing the command can change the book.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::New { .. }
                | Self::Add { .. }
                | Self::Del { .. }
                | Self::Change { .. }
                | Self::Delete { .. }
        )
    }
}

/// Render the command table.
pub fn help_table() -> String {
    let mut table = format!("{:<10}{:<40}{}\n", "Command", "Parameters", "Description");
    for spec in COMMANDS {
        let params = if spec.params.is_empty() {
            "-"
        } else {
            spec.params
        };
        table.push_str(&format!(
            "{:<10}{:<40}{}\n",
            spec.name, params, spec.description
        ));
    }
    table.truncate(table.trim_end().len());
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::error::BookError;

    #[test]
    fn test_blank_line_is_none() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_command_name_is_case_folded() {
        assert_eq!(Command::parse("HELP").unwrap(), Some(Command::Help));
        assert_eq!(Command::parse("Close").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("add Alice Phone 0501234567").unwrap(),
            Some(Command::Add {
                name: "Alice".to_string(),
                kind: FieldKind::Phone,
                value: "0501234567".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_change_optional_old_value() {
        match Command::parse("change Alice email b@example.com").unwrap() {
            Some(Command::Change { old_value, .. }) => assert_eq!(old_value, None),
            other => panic!("unexpected: {:?}", other),
        }
        match Command::parse("change Alice email b@example.com a@example.com").unwrap() {
            Some(Command::Change { old_value, .. }) => {
                assert_eq!(old_value.as_deref(), Some("a@example.com"))
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            Command::parse("rename Alice Bob"),
            Err(CommandError::UnknownCommand(name)) if name == "rename"
        ));
    }

    #[test]
    fn test_wrong_arity() {
        match Command::parse("add Alice phone") {
            Err(CommandError::WrongArity {
                command,
                expected,
                actual,
            }) => {
                assert_eq!(command, "add");
                assert_eq!(expected, "3");
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(Command::parse("all extra").is_err());
    }

    #[test]
    fn test_unknown_field_type() {
        assert!(matches!(
            Command::parse("add Alice nickname Al"),
            Err(CommandError::Book(BookError::Validation(
                ValidationError::UnknownFieldKind(_)
            )))
        ));
    }

    #[test]
    fn test_help_lists_every_command() {
        let table = help_table();
        for spec in COMMANDS {
            assert!(table.contains(spec.name));
        }
        assert!(!table.ends_with('\n'));
    }
}
