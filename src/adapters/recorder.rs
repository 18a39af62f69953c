//! External terminal recorder adapter (`vhs < tape`).

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::RecorderConfig;
use crate::error::DemoError;
use crate::output::remove_stale;
use crate::ports::{ArtifactKind, DemoGenerator};

/// Runs a recorder program with a tape script on stdin.
pub struct TapeRecorder {
    program: String,
    executable: PathBuf,
    tape: PathBuf,
    output: PathBuf,
}

impl TapeRecorder {
    /// Create a recorder from its config section and the program path found
    /// by the availability check.
    #[must_use]
    pub fn new(config: &RecorderConfig, executable: PathBuf) -> Self {
        Self {
            program: config.program.clone(),
            executable,
            tape: config.tape.clone(),
            output: config.output.clone(),
        }
    }
}

impl DemoGenerator for TapeRecorder {
    fn name(&self) -> &str {
        &self.program
    }

    fn output(&self) -> &Path {
        &self.output
    }

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Gif
    }

    fn generate(&self) -> Result<(), DemoError> {
        // A leftover file from an earlier run must not count as this run's output,
        // even when the run fails before the recorder starts.
        remove_stale(&self.output)?;

        let tape = File::open(&self.tape).map_err(|e| {
            DemoError::Recorder(format!("Failed to open tape {}: {e}", self.tape.display()))
        })?;

        tracing::debug!(
            program = %self.executable.display(),
            tape = %self.tape.display(),
            "running recorder"
        );
        let status = Command::new(&self.executable)
            .stdin(Stdio::from(tape))
            .status()
            .map_err(|e| DemoError::Recorder(format!("Failed to run {}: {e}", self.program)))?;

        if status.success() {
            tracing::debug!(%status, "recorder finished");
        } else {
            tracing::warn!(program = %self.program, %status, "recorder exited unsuccessfully");
        }
        Ok(())
    }
}
