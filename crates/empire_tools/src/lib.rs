//! # Empire Development Tools
//!
//! Command-line tools for development:
//! - Catalog validation
//! - Buildable listings for a given set of advances

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod list;
pub mod validate;

use empire_core::error::GameError;
use thiserror::Error;

/// Errors raised by the tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A `--category` value was not recognised.
    #[error("Unknown category '{0}' (expected improvement, spaceship, unit, land, sea or air)")]
    UnknownCategory(String),

    /// Rendering JSON output failed.
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog could not be loaded.
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Result type for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;
