use crate::commands::Out;
use crate::error::Notice;
use crate::statement;
use crate::Config;
use tracing::debug;

/// Returns the raw content of the statement file, or a notice if it cannot be read.
pub fn show(config: &Config) -> Out<()> {
    match statement::read_raw(config.statement_path()) {
        Ok(content) => {
            debug!("Read {} bytes from the statement file", content.len());
            format!("Uploaded File Content:\n{content}").into()
        }
        Err(e) => Notice::from_error(&e).message().into(),
    }
}
