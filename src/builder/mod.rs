//! Builder API for ergonomic command construction.
//!
//! This module provides a fluent builder for commands whose callbacks are
//! assembled step by step, with build-time checks that both directions exist.

pub mod command;
pub mod error;

pub use command::CommandBuilder;
pub use error::BuildError;
