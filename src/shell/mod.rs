//! Interactive command shell.
//!
//! Reads one command per line, runs it against a [`CommandContext`] and
//! prints the result. Command failures are printed and the loop goes on;
//! only `exit` or the end of input stop it, and both save the book first.

pub mod commands;
pub mod handlers;

pub use commands::{Command, CommandSpec, COMMANDS};
pub use handlers::{CommandContext, Outcome};

use std::io::{self, BufRead, Write};
use tracing::{error, warn};

const PROMPT: &str = "Enter a command: ";

/// Run the shell until `exit` or end of input.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` end the loop with an error.
pub fn run_shell<R, W>(context: &mut CommandContext, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    if let Ok(Outcome::Continue(Some(greeting))) = context.execute(Command::Hello) {
        writeln!(output, "{}", greeting)?;
    }

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            save_before_exit(context, &mut output)?;
            return Ok(());
        }

        let result = Command::parse(&line).and_then(|parsed| match parsed {
            Some(command) => context.execute(command).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(Some(Outcome::Continue(Some(message)))) => writeln!(output, "{}", message)?,
            Ok(Some(Outcome::Continue(None))) | Ok(None) => {}
            Ok(Some(Outcome::Exit(message))) => {
                save_before_exit(context, &mut output)?;
                writeln!(output, "{}", message)?;
                return Ok(());
            }
            Err(e) => {
                warn!(input = line.trim(), "Command failed: {}", e);
                writeln!(output, "Error: {}", e)?;
            }
        }
    }
}

fn save_before_exit<W: Write>(context: &CommandContext, output: &mut W) -> io::Result<()> {
    if let Err(e) = context.save() {
        error!("Failed to save address book on exit: {}", e);
        writeln!(output, "Error: {} (changes were not saved)", e)?;
    }
    Ok(())
}
