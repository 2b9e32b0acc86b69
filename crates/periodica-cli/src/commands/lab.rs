use super::{canonical_symbol, load_catalog};
use crate::config::AppConfig;
use crate::display::cards;
use crate::error::Result;
use crate::utils::parser::{LabCommand, ParseError, parse_lab_command};
use periodica::core::catalog::Catalog;
use periodica::core::models::selection::Selection;
use periodica::engine::error::MatchError;
use periodica::engine::matcher::MatchKind;
use periodica::workflows::mix;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const PROMPT: &str = "lab> ";

const HELP: &str = "\
Commands:
  add <element> [n]     Add n atoms (default 1); symbol, name or atomic number
  remove <element>      Remove one atom
  remove-all <element>  Remove every atom of an element
  clear                 Empty the selection
  show                  Show the current selection
  mix                   Mix the selection (it is cleared afterwards)
  help                  Show this help
  quit                  Leave the lab";

/// Counters kept for the end-of-session summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LabSummary {
    pub mixes: usize,
    pub discoveries: usize,
}

pub async fn run(config: &AppConfig) -> Result<()> {
    let catalog = load_catalog(config).await?;
    let summary = tokio::task::block_in_place(|| {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_session(&catalog, stdin.lock(), stdout.lock())
    })?;
    info!(mixes = summary.mixes, "Lab session finished.");
    Ok(())
}

/// Runs the interactive lab loop until `quit` or end of input.
///
/// The selection only lives for the session: it is emptied after every
/// successful mix and when the session ends.
pub fn run_session(
    catalog: &Catalog,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<LabSummary> {
    let mut selection = Selection::new();
    let mut summary = LabSummary::default();

    writeln!(out, "Welcome to the lab! Type 'help' for commands.")?;
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let command = match parse_lab_command(&line) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Lab command.");

        match command {
            LabCommand::Add { element, count } => {
                let symbol = canonical_symbol(catalog, &element);
                for _ in 0..count {
                    selection.add(&symbol);
                }
                if catalog.elements.get(&symbol).is_none() {
                    writeln!(
                        out,
                        "Added {} x {} (not in the periodic table; mixing will fail until it is removed).",
                        count, symbol
                    )?;
                } else {
                    writeln!(out, "Added {} x {}.", count, symbol)?;
                }
            }
            LabCommand::Remove { element } => {
                let symbol = canonical_symbol(catalog, &element);
                if selection.remove_one(&symbol) {
                    writeln!(out, "Removed one {}.", symbol)?;
                } else {
                    writeln!(out, "{} is not in the selection.", symbol)?;
                }
            }
            LabCommand::RemoveAll { element } => {
                let symbol = canonical_symbol(catalog, &element);
                let removed = selection.remove_all(&symbol);
                writeln!(out, "Removed {} x {}.", removed, symbol)?;
            }
            LabCommand::Clear => {
                selection.clear();
                writeln!(out, "Selection cleared.")?;
            }
            LabCommand::Show => show(&mut out, &selection)?,
            LabCommand::Mix => match mix::run(&selection, catalog) {
                Ok(report) => {
                    cards::print_mix_report(&mut out, &report);
                    summary.mixes += 1;
                    if report.result.kind() != MatchKind::Hypothetical {
                        summary.discoveries += 1;
                    }
                    selection.clear();
                }
                Err(e @ MatchError::UnknownElement { .. }) => {
                    writeln!(out, "{}. Remove it with 'remove-all' and try again.", e)?;
                }
                Err(e @ MatchError::EmptySelection) => writeln!(out, "{}.", e)?,
            },
            LabCommand::Help => writeln!(out, "{}", HELP)?,
            LabCommand::Quit => break,
        }
    }

    selection.clear();
    writeln!(
        out,
        "Leaving the lab after {} mix(es), {} known compound(s) made.",
        summary.mixes, summary.discoveries
    )?;
    out.flush()?;
    Ok(summary)
}

fn show(out: &mut impl Write, selection: &Selection) -> io::Result<()> {
    if selection.is_empty() {
        writeln!(out, "Selection is empty.")
    } else {
        writeln!(
            out,
            "Selection ({} atoms): {}",
            selection.len(),
            selection.composition().ratio_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> (LabSummary, String) {
        let catalog = Catalog::bundled().unwrap();
        let mut out = Vec::new();
        let summary = run_session(&catalog, Cursor::new(script.to_string()), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn build_water_and_mix() {
        let (summary, output) = session("add h 2\nadd O\nshow\nmix\nshow\nquit\n");
        assert!(output.contains("Selection (3 atoms): 2H + O"));
        assert!(output.contains("Successfully created Water!"));
        assert!(output.contains("Selection is empty."));
        assert_eq!(
            summary,
            LabSummary {
                mixes: 1,
                discoveries: 1
            }
        );
    }

    #[test]
    fn remove_commands_edit_the_selection() {
        let (_, output) = session("add H 3\nremove H\nshow\nremove-all H\nshow\nremove N\n");
        assert!(output.contains("Selection (2 atoms): 2H"));
        assert!(output.contains("Removed 2 x H."));
        assert!(output.contains("Selection is empty."));
        assert!(output.contains("N is not in the selection."));
    }

    #[test]
    fn failed_mix_keeps_the_selection() {
        let (summary, output) = session("add H\nadd Xx\nmix\nshow\nremove-all Xx\nmix\n");
        assert!(output.contains("Unknown element symbol 'Xx'"));
        assert!(output.contains("Selection (2 atoms)"));
        assert_eq!(summary.mixes, 1);
    }

    #[test]
    fn empty_mix_and_bad_input_are_reported() {
        let (summary, output) = session("mix\nboil\nadd H zero\n\nhelp\n");
        assert!(output.contains("Selection is empty; add at least one element"));
        assert!(output.contains("Unknown command 'boil'"));
        assert!(output.contains("Invalid atom count 'zero'"));
        assert!(output.contains("remove-all <element>"));
        assert_eq!(summary.mixes, 0);
    }

    #[test]
    fn hypothetical_mix_is_not_a_discovery() {
        let (summary, output) = session("add He\nadd Au\nmix\nexit\n");
        assert!(output.contains("Generated hypothetical compound Gold Helium."));
        assert_eq!(summary.mixes, 1);
        assert_eq!(summary.discoveries, 0);
    }
}
