use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional config file looked up in the output root
pub const CONFIG_FILE_NAME: &str = "assets.yaml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AssetsConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub fonts: FontConfig,
}

/// Output directories, relative to the output root
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_icon_dir")]
    pub icon_dir: PathBuf,
    #[serde(default = "default_splash_dir")]
    pub splash_dir: PathBuf,
    #[serde(default = "default_splash_background_dir")]
    pub splash_background_dir: PathBuf,
    #[serde(default = "default_screenshots_dir")]
    pub screenshots_dir: PathBuf,
}

fn default_icon_dir() -> PathBuf {
    PathBuf::from("VoiceScheduler/Assets.xcassets/AppIcon.appiconset")
}

fn default_splash_dir() -> PathBuf {
    PathBuf::from("VoiceScheduler/Assets.xcassets/SplashLogo.imageset")
}

fn default_splash_background_dir() -> PathBuf {
    PathBuf::from("VoiceScheduler/Assets.xcassets/SplashBackground.colorset")
}

fn default_screenshots_dir() -> PathBuf {
    PathBuf::from("AppStore/screenshots")
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            icon_dir: default_icon_dir(),
            splash_dir: default_splash_dir(),
            splash_background_dir: default_splash_background_dir(),
            screenshots_dir: default_screenshots_dir(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FontConfig {
    /// Font files or directories, tried in order
    #[serde(default = "default_font_candidates")]
    pub candidates: Vec<PathBuf>,
    /// Also scan the per-user font directory after the candidates
    #[serde(default = "default_search_user_fonts")]
    pub search_user_fonts: bool,
}

fn default_font_candidates() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Helvetica.ttc",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

fn default_search_user_fonts() -> bool {
    true
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            candidates: default_font_candidates(),
            search_user_fonts: default_search_user_fonts(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        AssetsConfig {
            output: OutputConfig::default(),
            fonts: FontConfig::default(),
        }
    }
}

impl AssetsConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AssetsConfig = serde_yaml::from_str(&contents)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Use `<root>/assets.yaml` when present, built-in defaults otherwise
    ///
    /// The default config is never written out: generation only creates the
    /// asset directories.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.exists() {
            println!("Using config: {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let dirs = [
            ("icon_dir", &self.output.icon_dir),
            ("splash_dir", &self.output.splash_dir),
            ("splash_background_dir", &self.output.splash_background_dir),
            ("screenshots_dir", &self.output.screenshots_dir),
        ];
        for (name, dir) in dirs {
            if dir.as_os_str().is_empty() {
                bail!("{} cannot be empty", name);
            }
            if dir.is_absolute() {
                bail!("{} must be relative to the output root, got {}", name, dir.display());
            }
        }

        if self.fonts.candidates.iter().any(|p| p.as_os_str().is_empty()) {
            bail!("font candidate paths cannot be empty");
        }

        Ok(())
    }

    /// Font search order: configured candidates, then the user font directory
    pub fn font_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = self.fonts.candidates.clone();
        if self.fonts.search_user_fonts {
            if let Some(dir) = dirs::font_dir() {
                candidates.push(dir);
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AssetsConfig = serde_yaml::from_str("output:\n  screenshots_dir: shots\n").unwrap();

        assert_eq!(config.output.screenshots_dir, PathBuf::from("shots"));
        assert_eq!(config.output.icon_dir, default_icon_dir());
        assert_eq!(config.fonts, FontConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_absolute_output_dir_is_rejected() {
        let mut config = AssetsConfig::default();
        config.output.icon_dir = std::env::temp_dir().join("icons");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_output_dir_is_rejected() {
        let mut config = AssetsConfig::default();
        config.output.splash_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AssetsConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config, AssetsConfig::default());
        assert!(!dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_load_or_default_reads_root_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "fonts:\n  candidates: []\n  search_user_fonts: false\n",
        )
        .unwrap();

        let config = AssetsConfig::load_or_default(dir.path()).unwrap();
        assert!(config.font_candidates().is_empty());
    }
}
