//! Conversion of command failures into user-facing replies.

use crate::error::{CommandError, CommandResult};
use tracing::warn;

/// Turn a handler's result into the text shown to the user.
///
/// Successful replies pass through. Every [`CommandError`] becomes its
/// message instead of propagating.
pub fn translate(result: CommandResult<String>) -> String {
    match result {
        Ok(reply) => reply,
        Err(err) => {
            match &err {
                CommandError::ContactNotFound(name) => warn!("Unknown contact: {}", name),
                CommandError::MalformedArguments => warn!("Malformed command arguments"),
                CommandError::Validation(e) => warn!("Validation failed: {:?}", e),
            }
            err.to_string()
        }
    }
}
