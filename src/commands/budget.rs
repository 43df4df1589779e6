use crate::budget::BudgetReport;
use crate::commands::{with_notice, Out};
use crate::error::Notice;
use crate::model::Amount;
use crate::statement::Statement;
use crate::Config;
use tracing::{info, warn};

/// Loads the statement and compares its debits with `budget`. A statement that cannot be loaded
/// counts as no spending, and the notice is included in the message. If the comparison itself
/// fails, its notice replaces the report.
pub fn budget(config: &Config, budget: Amount) -> Out<BudgetReport> {
    let (statement, notice) = Statement::load_or_notice(config.statement_path(), config.rules());
    match BudgetReport::evaluate(statement.transactions(), budget) {
        Ok(report) => {
            info!(
                "Spent {} against a budget of {}",
                report.total(),
                report.budget()
            );
            Out::new(with_notice(notice.as_ref(), report), report)
        }
        Err(e) => {
            warn!("{e:#}");
            Out::new_message(with_notice(notice.as_ref(), Notice::from_error(&e)))
        }
    }
}
