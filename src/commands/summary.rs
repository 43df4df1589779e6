use crate::commands::{with_notice, Out};
use crate::error::Notice;
use crate::statement::Statement;
use crate::summary::SpendingSummary;
use crate::Config;
use tracing::warn;

/// Loads the statement and summarizes spending by category.
pub fn summary(config: &Config) -> Out<SpendingSummary> {
    let (statement, notice) = Statement::load_or_notice(config.statement_path(), config.rules());
    match SpendingSummary::new(&statement) {
        Ok(summary) => Out::new(with_notice(notice.as_ref(), &summary), summary),
        Err(e) => {
            warn!("{e:#}");
            Out::new_message(with_notice(notice.as_ref(), Notice::from_error(&e)))
        }
    }
}
