// App icon: gold calendar frame with a white microphone on deep navy

use crate::canvas::{Canvas, Rect};
use crate::config::AssetsConfig;
use crate::constants::{icon, palette};
use crate::exporter;
use crate::manifest::ImageManifest;
use anyhow::Result;
use image::{Rgba, RgbImage};
use std::path::{Path, PathBuf};

const GOLD_FRAME: Rgba<u8> = Rgba([218, 175, 75, 240]);
const GOLD_SCHEDULE: Rgba<u8> = Rgba([218, 175, 75, 160]);
const GOLD_HEADER: Rgba<u8> = Rgba([235, 215, 160, 255]);
const WEEKDAY_DOT: Rgba<u8> = Rgba([200, 160, 60, 255]);

/// Schedule line heights as fractions of the calendar body
const SCHEDULE_LINES: [f64; 3] = [0.22, 0.50, 0.78];

/// Render the icon at `size` x `size`, flattened onto opaque navy
///
/// The App Store rejects icons with an alpha channel, so the masked corners
/// end up as solid background colour.
pub fn create_app_icon(size: u32) -> RgbImage {
    let s = size as i32;
    let p = |fraction: f64| (size as f64 * fraction) as i32;
    let cx = s / 2;

    let mut canvas = Canvas::new(size, size);
    canvas.vertical_gradient(palette::DEEP_NAVY, palette::NAVY_MID);
    canvas.apply_rounded_mask(p(0.22));

    // Calendar frame
    let margin = p(0.1);
    let frame = Rect::new(margin, p(0.08), s - margin, p(0.92));
    let frame_radius = p(0.06);
    let stroke = p(0.01);
    canvas.stroke_rounded_rect(frame, frame_radius, stroke, GOLD_FRAME);

    // Header band, rounded on top and square where it meets the divider
    let header_height = p(0.12);
    let header_bottom = frame.top + header_height;
    let header = Rect::new(frame.left + stroke, frame.top + stroke, frame.right - stroke, header_bottom);
    canvas.fill_rounded_rect(header, (frame_radius - stroke).max(1), GOLD_HEADER);
    canvas.fill_rect(
        Rect::new(header.left, header_bottom - frame_radius, header.right, header_bottom),
        GOLD_HEADER,
    );
    canvas.line((frame.left, header_bottom), (frame.right, header_bottom), p(0.007), GOLD_FRAME);

    // One dot per weekday
    let dot_y = frame.top + header_height / 2;
    let dots_left = frame.left + p(0.08);
    let dots_right = frame.right - p(0.08);
    let spacing = (dots_right - dots_left) as f64 / 6.0;
    let dot_r = p(0.009);
    for i in 0..7 {
        let dx = (dots_left as f64 + i as f64 * spacing) as i32;
        canvas.fill_ellipse(Rect::square(dx, dot_y, dot_r), WEEKDAY_DOT);
    }

    let body_top = header_bottom + p(0.04);
    let body_bottom = frame.bottom - p(0.04);
    let body_height = (body_bottom - body_top) as f64;
    for fraction in SCHEDULE_LINES {
        let ly = (body_top as f64 + body_height * fraction) as i32;
        canvas.line(
            (frame.left + p(0.06), ly),
            (frame.right - p(0.06), ly),
            p(0.012),
            GOLD_SCHEDULE,
        );
    }

    // Microphone, centered in the calendar body
    let mic_cy = (header_bottom + frame.bottom) / 2;
    let mic_w = p(0.12);
    let mic_h = p(0.17);
    let capsule_bottom = mic_cy + (mic_h as f64 * 0.3) as i32;
    canvas.fill_ellipse(
        Rect::new(cx - mic_w, mic_cy - mic_h, cx + mic_w, capsule_bottom),
        palette::WHITE,
    );

    let holder_radius = p(0.15);
    let drop = p(0.02);
    canvas.stroke_arc(
        Rect::new(
            cx - holder_radius,
            capsule_bottom - holder_radius + drop,
            cx + holder_radius,
            capsule_bottom + holder_radius + drop,
        ),
        0.0,
        180.0,
        p(0.01),
        palette::WHITE,
    );

    let stand_top = capsule_bottom + holder_radius + drop;
    let stand_bottom = stand_top + p(0.05);
    let stand_w = p(0.007);
    canvas.fill_rect(Rect::new(cx - stand_w, stand_top, cx + stand_w, stand_bottom), palette::WHITE);

    let base_w = p(0.06);
    let base_h = p(0.007);
    canvas.fill_rounded_rect(
        Rect::new(cx - base_w, stand_bottom, cx + base_w, stand_bottom + base_h),
        base_h,
        palette::WHITE,
    );

    // Sound waves on both sides of the capsule
    let wave_cy = mic_cy - p(0.02);
    let inner = Rect::square(cx, wave_cy, p(0.18));
    let outer = Rect::square(cx, wave_cy, p(0.22));
    canvas.stroke_arc(inner, 150.0, 210.0, p(0.009), palette::GOLD);
    canvas.stroke_arc(inner, -30.0, 30.0, p(0.009), palette::GOLD);
    canvas.stroke_arc(outer, 155.0, 205.0, p(0.007), palette::GOLD);
    canvas.stroke_arc(outer, -25.0, 25.0, p(0.007), palette::GOLD);

    canvas.flatten(palette::DEEP_NAVY)
}

/// Render the master icon, write every size in the table plus `Contents.json`
pub fn generate_icon_set(dir: &Path) -> Result<Vec<PathBuf>> {
    let base = create_app_icon(icon::BASE_SIZE);

    let mut written = exporter::export_resized(&base, icon::SIZES, dir)?;
    written.push(ImageManifest::app_icon().write(dir)?);
    println!("  ✓ Contents.json");

    Ok(written)
}

pub fn run(root: &Path, config: &AssetsConfig) -> Result<()> {
    println!("✨ Generating app icon (calendar + microphone)...");
    println!();

    let dir = root.join(&config.output.icon_dir);
    println!("📁 Saving to {}", dir.display());
    generate_icon_set(&dir)?;

    println!();
    println!("✅ App icon set complete!");
    Ok(())
}
