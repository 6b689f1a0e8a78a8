// Splash logo: gold clock face showing 10:10 with a microphone below the hub

use crate::canvas::{Canvas, Rect};
use crate::config::AssetsConfig;
use crate::constants::{palette, splash};
use crate::exporter;
use crate::manifest::{ColorManifest, ImageManifest};
use anyhow::Result;
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

const GOLD: Rgba<u8> = Rgba([212, 175, 55, 255]);

const RING_WIDTH: i32 = 4;

/// Draw the logo on a transparent `width` x `height` canvas
///
/// Proportions follow the shorter side so the logo stays circular.
pub fn create_splash_image(width: u32, height: u32) -> RgbaImage {
    let size = width.min(height);
    let p = |fraction: f64| (size as f64 * fraction) as i32;
    let cx = width as i32 / 2;
    let cy = height as i32 / 2;

    let mut canvas = Canvas::new(width, height);

    // Double ring
    canvas.stroke_ellipse(Rect::square(cx, cy, p(0.45)), RING_WIDTH, GOLD);
    canvas.stroke_ellipse(Rect::square(cx, cy, p(0.39)), RING_WIDTH, GOLD);

    // Hands at 10:10
    let hand = |angle_deg: f64, length: i32| {
        let angle = angle_deg.to_radians();
        (
            cx + (length as f64 * angle.cos()) as i32,
            cy + (length as f64 * angle.sin()) as i32,
        )
    };
    canvas.line((cx, cy), hand(-60.0, p(0.17)), p(0.03), GOLD);
    canvas.line((cx, cy), hand(-30.0, p(0.24)), p(0.022), GOLD);
    canvas.fill_ellipse(Rect::square(cx, cy, p(0.028)), palette::GOLD_LIGHT);

    // Hour markers, larger at 12, 3, 6 and 9
    let marker_r = p(0.32);
    for hour in 0..12 {
        let (mx, my) = hand(hour as f64 * 30.0 - 90.0, marker_r);
        if hour % 3 == 0 {
            canvas.fill_ellipse(Rect::square(mx, my, p(0.015)), palette::GOLD_LIGHT);
        } else {
            canvas.fill_ellipse(Rect::square(mx, my, p(0.008)), GOLD);
        }
    }

    // Microphone in the lower half of the dial
    let mic_y = cy + p(0.32);
    let mic_w = p(0.065);
    let mic_h = p(0.10);
    canvas.fill_rounded_rect(
        Rect::new(cx - mic_w, mic_y - mic_h, cx + mic_w, mic_y + (mic_h as f64 * 0.3) as i32),
        mic_w,
        GOLD,
    );

    let stand_w = p(0.014);
    let stand_top = mic_y + (mic_h as f64 * 0.4) as i32;
    let stand_bottom = stand_top + p(0.05);
    canvas.fill_rect(Rect::new(cx - stand_w, stand_top, cx + stand_w, stand_bottom), GOLD);

    let base_w = p(0.05);
    let base_h = p(0.014);
    canvas.fill_rounded_rect(
        Rect::new(cx - base_w, stand_bottom, cx + base_w, stand_bottom + base_h),
        base_h / 2,
        GOLD,
    );

    canvas.into_image()
}

/// Draw the logo natively at each scale and write the image set manifest
pub fn generate_splash_logo(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(splash::SIZES.len() + 1);

    for &(size, filename) in splash::SIZES {
        let path = dir.join(filename);
        exporter::write_png(&create_splash_image(size, size), &path)?;
        println!("  ✓ {}", filename);
        written.push(path);
    }

    written.push(ImageManifest::splash_logo().write(dir)?);
    println!("  ✓ Contents.json");

    Ok(written)
}

pub fn generate_background_colorset(dir: &Path) -> Result<PathBuf> {
    let path = ColorManifest::splash_background().write(dir)?;
    println!("  ✓ SplashBackground colorset");
    Ok(path)
}

pub fn run(root: &Path, config: &AssetsConfig) -> Result<()> {
    println!("✨ Generating splash screen...");
    println!();

    println!("📁 Saving splash logo...");
    generate_splash_logo(&root.join(&config.output.splash_dir))?;

    println!();
    println!("🎨 Creating background colour...");
    generate_background_colorset(&root.join(&config.output.splash_background_dir))?;

    println!();
    println!("✅ Splash assets complete!");
    Ok(())
}
