//! These structs provide the CLI interface for the spendsort CLI.

use crate::model::Amount;
use crate::utils;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// spendsort: categorize bank statement spending and check it against a budget.
///
/// Reads a CSV bank statement with `Description` and `Amount` columns. Negative amounts are
/// debits; each debit is assigned a category by looking for known keywords in its description.
///
/// Without a command, an interactive menu is shown.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Args {
    pub fn common(&self) -> &Common {
        &self.common
    }

    /// The command to run, defaulting to the interactive menu.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Menu)
    }
}

#[derive(Subcommand, Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// Show the interactive menu. This is the default.
    Menu,
    /// Print the raw contents of the statement file.
    Show,
    /// Compare total spending against a budget.
    Budget(BudgetArgs),
    /// Print spending totals by category along with the credited total.
    Summary,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// The directory holding the optional config.json. Defaults to ~/spendsort
    #[arg(long, env = "SPENDSORT_HOME", default_value_t = default_spendsort_home())]
    spendsort_home: DisplayPath,

    /// The statement CSV to read. Overrides the path in config.json. Defaults to
    /// $SPENDSORT_HOME/bank_statement.csv
    #[arg(long, env = "SPENDSORT_STATEMENT")]
    statement: Option<PathBuf>,
}

impl Common {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn spendsort_home(&self) -> &DisplayPath {
        &self.spendsort_home
    }

    pub fn statement(&self) -> Option<&Path> {
        self.statement.as_deref()
    }
}

/// Args for the `spendsort budget` command.
#[derive(Debug, Parser, Clone, Eq, PartialEq)]
pub struct BudgetArgs {
    /// The budget to compare spending against, e.g. 500 or $1,250.00
    #[arg(value_parser = utils::parse_amount, allow_hyphen_values = true)]
    amount: Amount,
}

impl BudgetArgs {
    pub fn amount(&self) -> Amount {
        self.amount
    }
}

fn default_spendsort_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("spendsort"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --spendsort-home or SPENDSORT_HOME instead of relying on the \
                default directory.",
            );
            PathBuf::from("spendsort")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
