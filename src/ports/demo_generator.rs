//! Demo generator port: anything that leaves a demo artifact on disk.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::DemoError;

/// File format of a demo artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Animated recording.
    Gif,
    /// Static lossless image.
    Png,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gif => f.write_str("GIF"),
            Self::Png => f.write_str("PNG"),
        }
    }
}

/// A generated file that was verified to exist and be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Where the file was written.
    pub path: PathBuf,
    /// File format.
    pub kind: ArtifactKind,
    /// Size on disk.
    pub size_bytes: u64,
}

/// Produces a demo artifact at a known path.
///
/// `generate` returning `Ok` does not mean success; the caller checks
/// [`DemoGenerator::output`] afterwards.
pub trait DemoGenerator {
    /// Short name for messages.
    fn name(&self) -> &str;

    /// Path the artifact is expected at.
    fn output(&self) -> &Path;

    /// Format of the artifact.
    fn kind(&self) -> ArtifactKind;

    /// Run to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator could not be run at all.
    fn generate(&self) -> Result<(), DemoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display() {
        assert_eq!(ArtifactKind::Gif.to_string(), "GIF");
        assert_eq!(ArtifactKind::Png.to_string(), "PNG");
    }
}
