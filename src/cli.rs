//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Steering interface demo generator: records a GIF or renders a static PNG.
#[derive(Parser, Debug)]
#[command(name = "steering-demo", version, about)]
pub struct Cli {
    /// PNG output path for the fallback renderer.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Artifact the recorder is expected to write.
    #[arg(long)]
    pub gif_output: Option<PathBuf>,

    /// Tape script fed to the recorder.
    #[arg(long)]
    pub tape: Option<PathBuf>,

    /// Recorder program looked up on PATH.
    #[arg(long)]
    pub recorder: Option<String>,

    /// Skip the recorder and always render the static image.
    #[arg(long)]
    pub no_recorder: bool,

    /// Render the static image if the recorder produced nothing.
    #[arg(long)]
    pub fallback_on_failure: bool,

    /// Font file to try before the configured candidates (repeatable).
    #[arg(long = "font")]
    pub fonts: Vec<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Fold command-line overrides into the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref path) = self.output {
            config.render.output.clone_from(path);
        }
        if let Some(ref path) = self.gif_output {
            config.recorder.output.clone_from(path);
        }
        if let Some(ref path) = self.tape {
            config.recorder.tape.clone_from(path);
        }
        if let Some(ref program) = self.recorder {
            config.recorder.program.clone_from(program);
        }
        if self.no_recorder {
            config.recorder.enabled = false;
        }
        if self.fallback_on_failure {
            config.recorder.fallback_on_failure = true;
        }
        if !self.fonts.is_empty() {
            let mut fonts = self.fonts.clone();
            fonts.append(&mut config.render.fonts);
            config.render.fonts = fonts;
        }
    }
}
