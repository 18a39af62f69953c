//! Static image adapter: draws the steering scenario in-process.

use std::path::{Path, PathBuf};

use crate::config::RenderConfig;
use crate::error::DemoError;
use crate::output::save_png;
use crate::ports::{ArtifactKind, DemoGenerator};
use crate::render::{render, steering_scenario, Typeface};

/// Renders the steering scenario to a PNG.
pub struct StaticRenderer {
    fonts: Vec<PathBuf>,
    output: PathBuf,
}

impl StaticRenderer {
    /// Create a renderer from its config section.
    #[must_use]
    pub fn new(config: &RenderConfig) -> Self {
        Self { fonts: config.fonts.clone(), output: config.output.clone() }
    }
}

impl DemoGenerator for StaticRenderer {
    fn name(&self) -> &str {
        "static renderer"
    }

    fn output(&self) -> &Path {
        &self.output
    }

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Png
    }

    fn generate(&self) -> Result<(), DemoError> {
        let typeface = Typeface::resolve(&self.fonts);
        tracing::info!(font = %typeface.describe(), "rendering static demo");

        let image = render(&steering_scenario(), &typeface);
        save_png(&image, &self.output)
    }
}
