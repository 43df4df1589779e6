//! spendsort: categorize the debits on a bank statement and report spending against a budget.

pub mod args;
pub mod budget;
pub mod commands;
mod config;
mod error;
pub mod model;
pub mod statement;
pub mod summary;
mod utils;


pub use config::Config;
pub use error::{Error, ErrorType, Notice, Result};
