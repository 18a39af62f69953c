//! Configuration file loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Font files tried in order before falling back to the built-in bitmap font.
pub const DEFAULT_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// External recorder settings.
    #[serde(default)]
    pub recorder: RecorderConfig,

    /// Fallback renderer settings.
    #[serde(default)]
    pub render: RenderConfig,
}

/// External recorder settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Program looked up on `PATH`.
    pub program: String,
    /// Tape script fed to the recorder on stdin.
    pub tape: PathBuf,
    /// Artifact the recorder is expected to write.
    pub output: PathBuf,
    /// Whether to try the recorder at all.
    pub enabled: bool,
    /// Render the static image when the recorder leaves no artifact.
    pub fallback_on_failure: bool,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            program: "vhs".to_string(),
            tape: PathBuf::from("steering-demo.tape"),
            output: PathBuf::from("steering-demo.gif"),
            enabled: true,
            fallback_on_failure: false,
        }
    }
}

/// Fallback renderer settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// PNG output path.
    pub output: PathBuf,
    /// Ordered font candidates. Empty means the built-in font.
    pub fonts: Vec<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("steering-demo.png"),
            fonts: DEFAULT_FONTS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `STEERING_DEMO_CONFIG` environment variable
/// 3. `~/.config/steering-demo/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("STEERING_DEMO_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/steering-demo/config.toml")
    } else {
        PathBuf::from("steering-demo.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.recorder.program, "vhs");
        assert_eq!(config.recorder.tape, PathBuf::from("steering-demo.tape"));
        assert_eq!(config.recorder.output, PathBuf::from("steering-demo.gif"));
        assert!(config.recorder.enabled);
        assert!(!config.recorder.fallback_on_failure);
        assert_eq!(config.render.output, PathBuf::from("steering-demo.png"));
        assert_eq!(config.render.fonts.len(), DEFAULT_FONTS.len());
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.recorder.program, "vhs");
    }

    #[test]
    fn load_partial_toml_keeps_other_defaults() {
        let dir = std::env::temp_dir().join("steering_demo_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            r#"
[recorder]
program = "my-vhs"
fallback_on_failure = true

[render]
fonts = []
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.recorder.program, "my-vhs");
        assert!(config.recorder.fallback_on_failure);
        assert!(config.recorder.enabled);
        assert_eq!(config.recorder.tape, PathBuf::from("steering-demo.tape"));
        assert!(config.render.fonts.is_empty());
        assert_eq!(config.render.output, PathBuf::from("steering-demo.png"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_invalid_toml() {
        let dir = std::env::temp_dir().join("steering_demo_config_bad_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        assert!(Config::load(&path).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn discover_explicit_path() {
        let path = discover_config_path(Some("/tmp/my-config.toml"));
        assert_eq!(path, PathBuf::from("/tmp/my-config.toml"));
    }
}
