//! Error types for the member-presentation crate.
//!
//! The presentation functions themselves never fail; these enums cover the
//! roster loading and settings layers that surround them, following the
//! project's `thiserror` conventions.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a member roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The roster file could not be read.
    #[error("failed to read roster file at '{path}': {message}")]
    IoError {
        /// Path to the roster file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The roster file is not valid UTF-8.
    #[error("roster file at '{path}' is not valid UTF-8")]
    InvalidEncoding {
        /// Path to the roster file.
        path: Utf8PathBuf,
    },

    /// The roster JSON is malformed or a record is missing its id.
    #[error("invalid roster JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },
}

/// Errors raised while resolving `member-preview` settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Environment or configuration file values could not be loaded.
    #[error("failed to load settings: {message}")]
    LoadFailed {
        /// Description of the loader failure.
        message: String,
    },

    /// A viewer id was configured but is blank.
    #[error("viewer id must not be blank")]
    BlankViewerId,
}
