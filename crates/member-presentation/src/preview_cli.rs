//! Support for the `member-preview` command.
//!
//! The binary delegates to these functions so the load-and-render flow can be
//! exercised in tests without spawning a process.

use std::io::Write;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::access::Viewer;
use crate::error::{RosterError, SettingsError};
use crate::roster::{Roster, present_roster};

/// Errors surfaced by the preview command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// The roster path does not name a file.
    #[error("roster path '{path}' must name a file")]
    NotAFile {
        /// Path supplied on the command line.
        path: String,
    },
    /// The directory containing the roster could not be opened.
    #[error("failed to open roster directory '{path}': {message}")]
    DirectoryUnavailable {
        /// Directory that could not be opened.
        path: String,
        /// Description of the I/O error.
        message: String,
    },
    /// The roster could not be loaded.
    #[error("roster error: {source}")]
    Roster {
        /// Underlying roster error.
        #[from]
        #[source]
        source: RosterError,
    },
    /// Settings could not be resolved.
    #[error("settings error: {source}")]
    Settings {
        /// Underlying settings error.
        #[from]
        #[source]
        source: SettingsError,
    },
    /// The presented roster could not be serialized.
    #[error("failed to serialize presented roster: {message}")]
    Serialize {
        /// Serializer error message.
        message: String,
    },
    /// The rendered preview could not be written out.
    #[error("failed to write roster preview: {message}")]
    Output {
        /// Description of the I/O error.
        message: String,
    },
}

/// Loads the roster at `path` through a capability-scoped handle on its
/// parent directory.
///
/// # Errors
///
/// Returns [`PreviewError`] when the path has no file name, the parent
/// directory cannot be opened, or the roster cannot be read or parsed.
pub fn load_roster(path: &Utf8Path) -> Result<Roster, PreviewError> {
    let file_name = path.file_name().ok_or_else(|| PreviewError::NotAFile {
        path: path.to_string(),
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
        PreviewError::DirectoryUnavailable {
            path: parent.to_string(),
            message: e.to_string(),
        }
    })?;

    Ok(Roster::from_file(&dir, Utf8Path::new(file_name))?)
}

/// Loads the roster at `path` and renders it as JSON for `viewer`.
///
/// # Errors
///
/// Returns [`PreviewError`] when the roster cannot be loaded or the result
/// cannot be serialized.
///
/// # Example
///
/// ```no_run
/// use camino::Utf8Path;
/// use member_presentation::Viewer;
/// use member_presentation::preview_cli::render_roster;
///
/// let json = render_roster(Utf8Path::new("roster.json"), &Viewer::default(), true)
///     .expect("render roster");
/// println!("{json}");
/// ```
pub fn render_roster(
    path: &Utf8Path,
    viewer: &Viewer,
    pretty: bool,
) -> Result<String, PreviewError> {
    let roster = load_roster(path)?;
    let presented = present_roster(&roster, viewer);
    info!(
        roster = %path,
        member_count = presented.len(),
        "rendering roster preview"
    );

    let rendered = if pretty {
        serde_json::to_string_pretty(&presented)
    } else {
        serde_json::to_string(&presented)
    };
    rendered.map_err(|e| PreviewError::Serialize {
        message: e.to_string(),
    })
}

/// Writes the rendered preview followed by a newline, then flushes `out`.
///
/// # Errors
///
/// Returns [`PreviewError::Output`] when writing or flushing fails.
pub fn write_preview<W: Write>(out: &mut W, rendered: &str) -> Result<(), PreviewError> {
    writeln!(out, "{rendered}")
        .and_then(|()| out.flush())
        .map_err(|e| PreviewError::Output {
            message: e.to_string(),
        })
}
