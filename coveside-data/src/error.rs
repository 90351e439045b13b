//! Error types raised while loading the content catalogue.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading or decoding catalogue files.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// Reading a catalogue file failed.
    #[error("failed to read catalogue file at {path}")]
    Read {
        /// Location of the unreadable file.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Decoding a catalogue file failed.
    #[error("failed to parse catalogue file at {path}")]
    Parse {
        /// Location of the malformed file.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
