//! Artifact writing, verification, and the run summary.

use std::path::Path;

use image::RgbImage;

use crate::error::DemoError;
use crate::ports::{Artifact, ArtifactKind};

/// Save `image` as PNG, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or encoding fails.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), DemoError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Delete `path` if it exists.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn remove_stale(path: &Path) -> Result<(), DemoError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed stale artifact");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DemoError::Io(e)),
    }
}

/// Check that `path` is a non-empty regular file.
#[must_use]
pub fn verify_artifact(path: &Path, kind: ArtifactKind) -> Option<Artifact> {
    let meta = std::fs::metadata(path).ok()?;
    (meta.is_file() && meta.len() > 0).then(|| Artifact {
        path: path.to_path_buf(),
        kind,
        size_bytes: meta.len(),
    })
}

/// Format a byte count as kilobytes with one decimal.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// Print the success summary to stderr.
pub fn print_summary(artifact: &Artifact) {
    eprintln!("Saved: {} ({})", artifact.path.display(), format_size(artifact.size_bytes));
    match artifact.kind {
        ArtifactKind::Gif => eprintln!("Format: GIF (animated)"),
        ArtifactKind::Png => {
            if let Ok((w, h)) = image::image_dimensions(&artifact.path) {
                eprintln!("Format: PNG (lossless), {w}x{h}");
            }
        }
    }

    let name = artifact.path.file_name().map_or_else(
        || artifact.path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    eprintln!();
    eprintln!("Next steps:");
    for step in next_steps(&name) {
        eprintln!("  {step}");
    }
}

/// Follow-up instructions for publishing the artifact named `name`.
#[must_use]
pub fn next_steps(name: &str) -> [String; 4] {
    [
        format!("1. View the image: open {name}"),
        format!("2. Add to README.md: ![Steering Demo]({name})"),
        format!("3. Commit: git add {name}"),
        "4. Push: git push origin main".to_string(),
    ]
}
