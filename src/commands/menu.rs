//! The interactive menu loop.

use crate::commands::{budget, show, summary};
use crate::model::Amount;
use crate::{Config, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, trace};

const OPTIONS: &str = "Options:
1. View uploaded statement file
2. Enter budget and check expenses
3. View spending summary
4. Exit";
const CHOOSE_PROMPT: &str = "Choose an option (1-4): ";
const BUDGET_PROMPT: &str = "Enter your budget: ";
const INVALID_OPTION: &str = "Invalid option. Please choose between 1 and 4.";
const INVALID_BUDGET: &str = "Invalid input. Please enter a numeric value for the budget.";
const GOODBYE: &str = "Exiting the program. Goodbye!";

/// One of the four menu entries.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum MenuChoice {
    Show,
    Budget,
    Summary,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Show),
            "2" => Ok(MenuChoice::Budget),
            "3" => Ok(MenuChoice::Summary),
            "4" => Ok(MenuChoice::Exit),
            bad => Err(format!("Invalid menu choice '{bad}'")),
        }
    }
}

/// Runs the menu until the user chooses to exit or `input` reaches end of file. Every action
/// reads the statement file again.
pub fn menu<R, W>(config: &Config, mut input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "\n{OPTIONS}\n{CHOOSE_PROMPT}")?;
        output.flush()?;
        let Some(line) = read_line(&mut input)? else {
            debug!("End of input, leaving the menu");
            writeln!(output, "\n{GOODBYE}")?;
            break;
        };

        let choice = match MenuChoice::from_str(&line) {
            Ok(choice) => choice,
            Err(e) => {
                trace!("{e}");
                writeln!(output, "{INVALID_OPTION}")?;
                continue;
            }
        };
        debug!("Menu choice {choice:?}");

        match choice {
            MenuChoice::Show => {
                writeln!(output)?;
                show(config).write_to(&mut output)?;
            }
            MenuChoice::Budget => {
                write!(output, "{BUDGET_PROMPT}")?;
                output.flush()?;
                let Some(line) = read_line(&mut input)? else {
                    writeln!(output, "\n{GOODBYE}")?;
                    break;
                };
                match parse_budget(&line) {
                    Some(amount) => {
                        writeln!(output)?;
                        budget(config, amount).write_to(&mut output)?;
                    }
                    None => writeln!(output, "{INVALID_BUDGET}")?,
                }
            }
            MenuChoice::Summary => {
                writeln!(output)?;
                summary(config).write_to(&mut output)?;
            }
            MenuChoice::Exit => {
                writeln!(output, "{GOODBYE}")?;
                break;
            }
        }
    }
    Ok(())
}

/// Reads one line without its line ending. Returns `None` at end of file.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

/// A budget must be a number. Blank input is rejected rather than read as zero.
fn parse_budget(s: &str) -> Option<Amount> {
    Amount::from_str(s).ok()
}
