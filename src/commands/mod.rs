//! Command handlers for the spendsort CLI.
//!
//! Each menu action has a handler here. The same handlers back the non-interactive subcommands.

mod budget;
mod menu;
mod show;
mod summary;

use crate::error::Notice;
use crate::{Config, Error, Result};
use anyhow::bail;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::io::Write;
use tracing::debug;

pub use budget::budget;
pub use menu::{menu, MenuChoice};
pub use show::show;
pub use summary::summary;

/// The output type for a command. This allows the command to return a consistent message and,
/// optionally, structured data.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Write the message to `w` and the structured data (if it exists) as JSON to `debug!`.
    pub fn write_to<W: Write>(&self, mut w: W) -> Result<()> {
        writeln!(w, "{}", self.message)?;
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
        Ok(())
    }

    /// Print the message to stdout.
    pub fn print(&self) -> Result<()> {
        self.write_to(std::io::stdout().lock())
    }
}

/// Fails with a message naming the path when the configured statement file does not exist.
pub fn ensure_statement_exists(config: &Config) -> Result<()> {
    let path = config.statement_path();
    if !path.is_file() {
        bail!(
            "Default file '{}' not found. Please ensure the file exists at the specified path.",
            path.display()
        );
    }
    Ok(())
}

/// Writes an error that ends the program to `w` as plain text, outside of logging.
pub fn write_error<W: Write>(e: &Error, mut w: W) -> Result<()> {
    writeln!(w, "{e:#}")?;
    Ok(())
}

/// Joins an optional notice and a report into one message.
fn with_notice(notice: Option<&Notice>, report: impl Display) -> String {
    match notice {
        Some(notice) => format!("{notice}\n{report}"),
        None => report.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryRules;
    use crate::test::TestStatement;

    #[test]
    fn test_out_write_to() {
        let out: Out<u32> = Out::new("hello", 5);
        let mut buf = Vec::new();
        out.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "hello\n");
        assert_eq!(out.structure(), Some(&5));
    }

    #[test]
    fn test_out_from_str() {
        let out: Out<()> = "done".into();
        assert_eq!(out.message(), "done");
        assert!(out.structure().is_none());
    }

    #[test]
    fn test_ensure_statement_exists() {
        let file = TestStatement::new("Description,Amount\n");
        let config = Config::new(file.path(), CategoryRules::default());
        assert!(ensure_statement_exists(&config).is_ok());

        let missing = Config::new(file.dir().join("missing.csv"), CategoryRules::default());
        let err = ensure_statement_exists(&missing).unwrap_err();
        assert!(err.to_string().starts_with("Default file '"));
        assert!(err.to_string().ends_with(
            "missing.csv' not found. Please ensure the file exists at the specified path."
        ));
    }

    #[test]
    fn test_write_error_is_plain_text() {
        let file = TestStatement::new("Description,Amount\n");
        let missing = Config::new(file.dir().join("missing.csv"), CategoryRules::default());
        let err = ensure_statement_exists(&missing).unwrap_err();
        let mut buf = Vec::new();
        write_error(&err, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            format!(
                "Default file '{}' not found. Please ensure the file exists at the specified path.\n",
                file.dir().join("missing.csv").display()
            )
        );
    }
}
