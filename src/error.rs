//! Unified error type for steering-demo.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing the demo artifact.
#[derive(Debug, Error)]
pub enum DemoError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// The recorder program could not be run.
    #[error("Recorder error: {0}")]
    Recorder(String),

    /// A generator finished without leaving an artifact on disk.
    #[error("No artifact produced by {generator}: expected {}", path.display())]
    MissingArtifact {
        /// The generator that was expected to produce the file.
        generator: String,
        /// The path that was checked.
        path: PathBuf,
    },

    /// Image encoding error.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
