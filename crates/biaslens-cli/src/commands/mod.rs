//! Command implementations.

mod analyze;
mod batch;

pub use analyze::execute_analyze;
pub use batch::execute_batch;

use crate::error::Result;
use std::fs;

/// Load a custom prompt template file when one was given.
pub(crate) fn load_template(path: Option<&str>) -> Result<Option<String>> {
    match path {
        Some(path) => Ok(Some(fs::read_to_string(path)?)),
        None => Ok(None),
    }
}
