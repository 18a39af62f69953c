//! Generator selection and the artifact check that decides success.

use std::path::PathBuf;

use crate::adapters::fallback::StaticRenderer;
use crate::adapters::recorder::TapeRecorder;
use crate::config::Config;
use crate::error::DemoError;
use crate::output::verify_artifact;
use crate::ports::{Artifact, DemoGenerator};
use crate::probe;

/// The generator to run, plus what to try if it leaves nothing behind.
pub struct ServiceContext {
    /// First generator to run.
    pub generator: Box<dyn DemoGenerator>,
    /// Run when `generator` fails, if enabled.
    pub fallback: Option<Box<dyn DemoGenerator>>,
}

impl ServiceContext {
    /// Probe the host for the recorder and build the matching context.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let recorder = if config.recorder.enabled {
            eprintln!("Checking for {}...", config.recorder.program);
            let found = probe::locate(&config.recorder.program);
            if found.is_none() {
                eprintln!(
                    "{} not available - rendering static image instead",
                    config.recorder.program
                );
            }
            found
        } else {
            None
        };
        Self::select(config, recorder)
    }

    /// Build the context for the recorder executable found on this host, if any.
    #[must_use]
    pub fn select(config: &Config, recorder: Option<PathBuf>) -> Self {
        let renderer: Box<dyn DemoGenerator> = Box::new(StaticRenderer::new(&config.render));

        let Some(executable) = recorder.filter(|_| config.recorder.enabled) else {
            return Self { generator: renderer, fallback: None };
        };

        let recorder: Box<dyn DemoGenerator> =
            Box::new(TapeRecorder::new(&config.recorder, executable));
        let fallback = config.recorder.fallback_on_failure.then_some(renderer);
        Self { generator: recorder, fallback }
    }

    /// Run the selected generator and verify its artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if no artifact exists once every eligible generator has run.
    pub fn run(self) -> Result<Artifact, DemoError> {
        match attempt(self.generator.as_ref()) {
            Ok(artifact) => Ok(artifact),
            Err(e) => match self.fallback {
                Some(fallback) => {
                    tracing::warn!(error = %e, "falling back to static image");
                    eprintln!("{e}");
                    attempt(fallback.as_ref())
                }
                None => Err(e),
            },
        }
    }
}

fn attempt(generator: &dyn DemoGenerator) -> Result<Artifact, DemoError> {
    eprintln!("Generating {} with {}...", generator.kind(), generator.name());
    generator.generate()?;
    verify_artifact(generator.output(), generator.kind()).ok_or_else(|| {
        DemoError::MissingArtifact {
            generator: generator.name().to_string(),
            path: generator.output().to_path_buf(),
        }
    })
}
