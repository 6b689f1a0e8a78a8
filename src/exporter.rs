use crate::config::AssetsConfig;
use crate::constants::{icon, screenshots, splash};
use crate::manifest::{ColorManifest, ImageManifest};
use crate::screenshots::SCREENSHOTS;
use anyhow::{Context, Result, bail};
use image::imageops::{self, FilterType};
use image::{ImageBuffer, ImageFormat, Pixel, PixelWithColorType, RgbImage};
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Write `image` as PNG, creating parent directories as needed
pub fn write_png<P, C>(image: &ImageBuffer<P, C>, path: &Path) -> Result<()>
where
    P: Pixel + PixelWithColorType,
    [P::Subpixel]: image::EncodableLayout,
    C: Deref<Target = [P::Subpixel]>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Resample `base` to every (size, file name) entry and write it into `dir`
///
/// Not transactional: an error leaves the files written so far in place.
pub fn export_resized(base: &RgbImage, table: &[(u32, &str)], dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(table.len());
    for &(size, filename) in table {
        let resized = imageops::resize(base, size, size, FilterType::Lanczos3);
        let path = dir.join(filename);
        write_png(&resized, &path)?;
        println!("  ✓ {}", filename);
        written.push(path);
    }

    Ok(written)
}

/// Check a generated image set against its manifest
///
/// Every file the manifest references must exist. Files that also appear in
/// `expected` must decode with exactly that square pixel size.
pub fn verify_catalog(dir: &Path, manifest: &ImageManifest, expected: &[(u32, &str)]) -> Result<usize> {
    let mut checked = 0;

    for filename in manifest.filenames() {
        let path = dir.join(filename);
        if !path.is_file() {
            bail!("{} is listed in the manifest but missing", path.display());
        }

        if let Some(&(size, _)) = expected.iter().find(|(_, name)| *name == filename) {
            let (width, height) = image::image_dimensions(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if (width, height) != (size, size) {
                bail!(
                    "{} is {}x{}, expected {}x{}",
                    path.display(),
                    width,
                    height,
                    size,
                    size
                );
            }
        }

        checked += 1;
    }

    Ok(checked)
}

/// Verify every generated asset under `root` against its manifest
///
/// Output directories are resolved from `config` the same way the generators
/// resolve them.
pub fn check_assets(root: &Path, config: &AssetsConfig) -> Result<()> {
    println!("🔍 Checking generated assets in {}", root.display());

    let icon_dir = root.join(&config.output.icon_dir);
    let icon_manifest = ImageManifest::read(&icon_dir)?;
    let count = verify_catalog(&icon_dir, &icon_manifest, icon::SIZES)?;
    println!("  ✓ App icon: {} files", count);

    let splash_dir = root.join(&config.output.splash_dir);
    let splash_manifest = ImageManifest::read(&splash_dir)?;
    let count = verify_catalog(&splash_dir, &splash_manifest, splash::SIZES)?;
    println!("  ✓ Splash logo: {} files", count);

    let colors = ColorManifest::read(&root.join(&config.output.splash_background_dir))?;
    for entry in &colors.colors {
        for value in entry.color.components.values()? {
            if !(0.0..=1.0).contains(&value) {
                bail!("Colour component {} is outside [0, 1]", value);
            }
        }
    }
    println!("  ✓ Splash background colour");

    let shots_dir = root.join(&config.output.screenshots_dir);
    for shot in SCREENSHOTS {
        let path = shots_dir.join(shot.filename);
        let dimensions = image::image_dimensions(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let expected = (screenshots::WIDTH, screenshots::HEIGHT);
        if dimensions != expected {
            bail!(
                "{} is {}x{}, expected {}x{}",
                path.display(),
                dimensions.0,
                dimensions.1,
                expected.0,
                expected.1
            );
        }
    }
    println!("  ✓ Screenshots: {} files", SCREENSHOTS.len());

    println!("✅ All assets present");
    Ok(())
}
