//! Build errors for the command builder.

use thiserror::Error;

/// Errors that can occur when building commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Forward callback not specified. Call .apply(f) or .try_apply(f)")]
    MissingApply,

    #[error("Inverse callback not specified. Call .invert(f) or .try_invert(f)")]
    MissingInvert,
}
