use thiserror::Error;

const MAX_ADD_COUNT: u32 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty input.")]
    Empty,

    #[error("Unknown command '{0}'. Type 'help' to see the available commands.")]
    UnknownCommand(String),

    #[error("'{command}' requires {argument}.")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{command}' does not take '{argument}'.")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },

    #[error("Invalid atom count '{0}'. Expected a whole number between 1 and {max}.", max = MAX_ADD_COUNT)]
    InvalidCount(String),

    #[error("Invalid choice '{input}'. Enter a number from 1 to {max} or the answer text.")]
    InvalidChoice { input: String, max: usize },
}

/// A single instruction typed into the lab session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabCommand {
    Add { element: String, count: u32 },
    Remove { element: String },
    RemoveAll { element: String },
    Clear,
    Show,
    Mix,
    Help,
    Quit,
}

pub fn parse_lab_command(line: &str) -> Result<LabCommand, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Err(ParseError::Empty);
    };
    let rest: Vec<&str> = tokens.collect();

    match verb.to_ascii_lowercase().as_str() {
        "add" | "a" => {
            let element = required(&rest, "add")?;
            let count = match rest.get(1) {
                Some(raw) => parse_count(raw)?,
                None => 1,
            };
            no_extra(&rest[..], 2, "add")?;
            Ok(LabCommand::Add { element, count })
        }
        "remove" | "rm" => {
            let element = required(&rest, "remove")?;
            no_extra(&rest[..], 1, "remove")?;
            Ok(LabCommand::Remove { element })
        }
        "remove-all" => {
            let element = required(&rest, "remove-all")?;
            no_extra(&rest[..], 1, "remove-all")?;
            Ok(LabCommand::RemoveAll { element })
        }
        "clear" => bare(&rest, "clear", LabCommand::Clear),
        "show" | "ls" => bare(&rest, "show", LabCommand::Show),
        "mix" => bare(&rest, "mix", LabCommand::Mix),
        "help" | "?" => bare(&rest, "help", LabCommand::Help),
        "quit" | "exit" | "q" => bare(&rest, "quit", LabCommand::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Maps a typed quiz answer onto one of the offered `answers`.
///
/// Accepts a 1-based choice number or the answer text in any letter case,
/// and returns the answer exactly as offered.
pub fn parse_choice(input: &str, answers: &[String]) -> Result<String, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let invalid = || ParseError::InvalidChoice {
        input: trimmed.to_string(),
        max: answers.len(),
    };

    if let Ok(index) = trimmed.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| answers.get(i))
            .cloned()
            .ok_or_else(invalid);
    }

    answers
        .iter()
        .find(|a| a.eq_ignore_ascii_case(trimmed))
        .cloned()
        .ok_or_else(invalid)
}

fn required(rest: &[&str], command: &'static str) -> Result<String, ParseError> {
    rest.first()
        .map(|s| s.to_string())
        .ok_or(ParseError::MissingArgument {
            command,
            argument: "an element",
        })
}

fn no_extra(rest: &[&str], allowed: usize, command: &'static str) -> Result<(), ParseError> {
    match rest.get(allowed) {
        Some(extra) => Err(ParseError::UnexpectedArgument {
            command,
            argument: extra.to_string(),
        }),
        None => Ok(()),
    }
}

fn bare(
    rest: &[&str],
    command: &'static str,
    parsed: LabCommand,
) -> Result<LabCommand, ParseError> {
    no_extra(rest, 0, command)?;
    Ok(parsed)
}

/// Parses an atom count in `1..=MAX_ADD_COUNT`.
pub fn parse_count(raw: &str) -> Result<u32, ParseError> {
    match raw.parse::<u32>() {
        Ok(n) if (1..=MAX_ADD_COUNT).contains(&n) => Ok(n),
        _ => Err(ParseError::InvalidCount(raw.to_string())),
    }
}
