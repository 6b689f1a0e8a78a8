// Asset catalog Contents.json manifests

use crate::constants::{manifest, palette};
use anyhow::{Context, Result};
use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Info {
    pub version: u32,
    pub author: String,
}

impl Default for Info {
    fn default() -> Self {
        Info {
            version: manifest::VERSION,
            author: manifest::AUTHOR.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImageDescriptor {
    /// Point size such as `"60x60"`; image sets without a fixed size omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub idiom: String,
    pub filename: String,
    pub scale: String,
}

impl ImageDescriptor {
    fn sized(size: &str, idiom: &str, filename: &str, scale: &str) -> Self {
        ImageDescriptor {
            size: Some(size.to_string()),
            idiom: idiom.to_string(),
            filename: filename.to_string(),
            scale: scale.to_string(),
        }
    }

    fn universal(filename: &str, scale: &str) -> Self {
        ImageDescriptor {
            size: None,
            idiom: "universal".to_string(),
            filename: filename.to_string(),
            scale: scale.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImageManifest {
    pub images: Vec<ImageDescriptor>,
    pub info: Info,
}

impl ImageManifest {
    /// App icon set for iPhone, iPad and the App Store listing
    pub fn app_icon() -> Self {
        let entries: &[(&str, &str, &str, &str)] = &[
            ("20x20", "iphone", "icon_20@2x.png", "2x"),
            ("20x20", "iphone", "icon_20@3x.png", "3x"),
            ("29x29", "iphone", "icon_29@2x.png", "2x"),
            ("29x29", "iphone", "icon_29@3x.png", "3x"),
            ("40x40", "iphone", "icon_40@2x.png", "2x"),
            ("40x40", "iphone", "icon_40@3x.png", "3x"),
            ("60x60", "iphone", "icon_60@2x.png", "2x"),
            ("60x60", "iphone", "icon_60@3x.png", "3x"),
            ("20x20", "ipad", "icon_20.png", "1x"),
            ("20x20", "ipad", "icon_20@2x.png", "2x"),
            // No 29pt 1x file is rendered; the 58px image stands in for it
            ("29x29", "ipad", "icon_29@2x.png", "1x"),
            ("29x29", "ipad", "icon_29@2x.png", "2x"),
            ("40x40", "ipad", "icon_40.png", "1x"),
            ("40x40", "ipad", "icon_40@2x.png", "2x"),
            ("76x76", "ipad", "icon_76.png", "1x"),
            ("76x76", "ipad", "icon_76@2x.png", "2x"),
            ("83.5x83.5", "ipad", "icon_83.5@2x.png", "2x"),
            ("1024x1024", "ios-marketing", "icon_1024.png", "1x"),
        ];

        ImageManifest {
            images: entries
                .iter()
                .map(|&(size, idiom, filename, scale)| ImageDescriptor::sized(size, idiom, filename, scale))
                .collect(),
            info: Info::default(),
        }
    }

    /// Splash logo image set, one universal image per scale
    pub fn splash_logo() -> Self {
        ImageManifest {
            images: vec![
                ImageDescriptor::universal("splash_logo.png", "1x"),
                ImageDescriptor::universal("splash_logo@2x.png", "2x"),
                ImageDescriptor::universal("splash_logo@3x.png", "3x"),
            ],
            info: Info::default(),
        }
    }

    /// Distinct file names referenced, in first-seen order
    pub fn filenames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for image in &self.images {
            if !names.contains(&image.filename.as_str()) {
                names.push(&image.filename);
            }
        }
        names
    }

    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        write_contents(self, dir)
    }

    pub fn read(dir: &Path) -> Result<Self> {
        read_contents(dir)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ColorComponents {
    pub red: String,
    pub green: String,
    pub blue: String,
    pub alpha: String,
}

impl ColorComponents {
    /// Normalized channels, printed with three decimals
    pub fn from_rgb(color: Rgb<u8>) -> Self {
        ColorComponents {
            red: component(color[0] as f64 / 255.0),
            green: component(color[1] as f64 / 255.0),
            blue: component(color[2] as f64 / 255.0),
            alpha: component(1.0),
        }
    }

    pub fn values(&self) -> Result<[f64; 4]> {
        let parse = |name: &str, raw: &str| -> Result<f64> {
            raw.parse::<f64>()
                .with_context(|| format!("Invalid {} component: {:?}", name, raw))
        };
        Ok([
            parse("red", &self.red)?,
            parse("green", &self.green)?,
            parse("blue", &self.blue)?,
            parse("alpha", &self.alpha)?,
        ])
    }
}

pub fn component(value: f64) -> String {
    format!("{:.3}", value.clamp(0.0, 1.0))
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ColorValue {
    #[serde(rename = "color-space")]
    pub color_space: String,
    pub components: ColorComponents,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ColorEntry {
    pub color: ColorValue,
    pub idiom: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ColorManifest {
    pub colors: Vec<ColorEntry>,
    pub info: Info,
}

impl ColorManifest {
    pub fn solid(color: Rgb<u8>) -> Self {
        ColorManifest {
            colors: vec![ColorEntry {
                color: ColorValue {
                    color_space: "srgb".to_string(),
                    components: ColorComponents::from_rgb(color),
                },
                idiom: "universal".to_string(),
            }],
            info: Info::default(),
        }
    }

    /// Navy backdrop shown behind the splash logo
    pub fn splash_background() -> Self {
        Self::solid(palette::DEEP_NAVY)
    }

    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        write_contents(self, dir)
    }

    pub fn read(dir: &Path) -> Result<Self> {
        read_contents(dir)
    }
}

fn write_contents<T: Serialize>(contents: &T, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let path = dir.join(manifest::FILE_NAME);
    let json = serde_json::to_string_pretty(contents)
        .context("Failed to serialize manifest")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

fn read_contents<T: for<'de> Deserialize<'de>>(dir: &Path) -> Result<T> {
    let path = dir.join(manifest::FILE_NAME);
    let json = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_app_icon_has_one_entry_per_slot() {
        let manifest = ImageManifest::app_icon();
        assert_eq!(manifest.images.len(), 18);

        let slots: HashSet<(Option<String>, String, String)> = manifest
            .images
            .iter()
            .map(|i| (i.size.clone(), i.idiom.clone(), i.scale.clone()))
            .collect();
        assert_eq!(slots.len(), manifest.images.len());
    }

    #[test]
    fn test_app_icon_lists_iphone_60_at_2x() {
        let manifest = ImageManifest::app_icon();
        let entry = manifest
            .images
            .iter()
            .find(|i| i.filename == "icon_60@2x.png")
            .unwrap();

        assert_eq!(entry.size.as_deref(), Some("60x60"));
        assert_eq!(entry.idiom, "iphone");
        assert_eq!(entry.scale, "2x");
    }

    #[test]
    fn test_filenames_are_deduplicated() {
        let manifest = ImageManifest::app_icon();
        let names = manifest.filenames();
        assert_eq!(names.len(), 14);
        assert_eq!(names[0], "icon_20@2x.png");
    }

    #[test]
    fn test_splash_entries_omit_size() {
        let json = serde_json::to_string(&ImageManifest::splash_logo()).unwrap();
        assert!(!json.contains("\"size\""));
        assert!(json.contains("\"filename\":\"splash_logo@3x.png\""));
    }

    #[test]
    fn test_image_manifest_schema() {
        let json = serde_json::to_value(ImageManifest::app_icon()).unwrap();
        assert_eq!(json["info"]["version"], 1);
        assert_eq!(json["info"]["author"], "xcode");
        assert_eq!(json["images"][17]["size"], "1024x1024");
        assert_eq!(json["images"][17]["idiom"], "ios-marketing");
    }

    #[test]
    fn test_splash_background_components() {
        let manifest = ColorManifest::splash_background();
        let components = &manifest.colors[0].color.components;

        assert_eq!(components.red, "0.059");
        assert_eq!(components.green, "0.078");
        assert_eq!(components.blue, "0.157");
        assert_eq!(components.alpha, "1.000");
    }

    #[test]
    fn test_color_components_round_trip() {
        let components = ColorComponents::from_rgb(Rgb([255, 128, 0]));
        for value in components.values().unwrap() {
            assert!((0.0..=1.0).contains(&value));
            assert_eq!(component(value), format!("{:.3}", value));
        }
        assert_eq!(component(components.values().unwrap()[1]), components.green);
    }

    #[test]
    fn test_color_space_key_is_hyphenated() {
        let json = serde_json::to_value(ColorManifest::splash_background()).unwrap();
        assert_eq!(json["colors"][0]["color"]["color-space"], "srgb");
        assert_eq!(json["colors"][0]["idiom"], "universal");
    }
}
