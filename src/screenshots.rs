// App Store marketing screenshots (iPhone 6.5", 1284x2778)

use crate::canvas::{Canvas, Rect};
use crate::config::AssetsConfig;
use crate::constants::palette::{CARD, DEEP_NAVY, GOLD, GOLD_LIGHT, GREEN, NAVY_MID, ORANGE, RED, WHITE};
use crate::constants::screenshots::{HEIGHT, WIDTH};
use crate::exporter;
use crate::text::Typeface;
use anyhow::Result;
use image::{Rgba, RgbImage};
use std::path::{Path, PathBuf};

const W: i32 = WIDTH as i32;

/// Headline and badge text drawn on gold
const NAVY_INK: Rgba<u8> = Rgba([15, 20, 40, 255]);

pub struct Screenshot {
    pub filename: &'static str,
    compose: fn(&Typeface) -> RgbImage,
}

impl Screenshot {
    pub fn render(&self, typeface: &Typeface) -> RgbImage {
        (self.compose)(typeface)
    }
}

pub const SCREENSHOTS: &[Screenshot] = &[
    Screenshot { filename: "01_voice_input.png", compose: voice_input },
    Screenshot { filename: "02_ai_analysis.png", compose: ai_analysis },
    Screenshot { filename: "03_calendar.png", compose: calendar },
    Screenshot { filename: "04_smart_time.png", compose: smart_time },
    Screenshot { filename: "05_multilingual.png", compose: multilingual },
];

/// Canvas plus the typeface shared by every text call on it
struct Frame<'a> {
    canvas: Canvas,
    typeface: &'a Typeface,
}

impl<'a> Frame<'a> {
    fn new(typeface: &'a Typeface) -> Self {
        let mut canvas = Canvas::filled(WIDTH, HEIGHT, DEEP_NAVY);
        canvas.vertical_gradient(DEEP_NAVY, NAVY_MID);
        Frame { canvas, typeface }
    }

    fn centered(&mut self, y: i32, text: &str, size: f32, color: Rgba<u8>) {
        self.typeface.draw_centered(&mut self.canvas, y, text, size, color);
    }

    fn text(&mut self, x: i32, y: i32, text: &str, size: f32, color: Rgba<u8>) {
        self.typeface.draw(&mut self.canvas, x, y, text, size, color);
    }

    fn headline(&mut self, first: &str, second: &str) {
        self.centered(180, first, 72.0, WHITE);
        self.centered(280, second, 72.0, GOLD);
    }

    fn footer(&mut self, tagline: &str) {
        self.centered(2580, "Voice Scheduler", 38.0, WHITE);
        self.centered(2640, tagline, 30.0, GOLD_LIGHT);
    }

    fn finish(self) -> RgbImage {
        self.canvas.flatten(DEEP_NAVY)
    }
}

fn scaled(value: i32, fraction: f64) -> i32 {
    (value as f64 * fraction) as i32
}

fn with_alpha(color: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], alpha])
}

/// Microphone glyph sized by the radius `r` of the disc it sits on
fn microphone(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, color: Rgba<u8>) {
    let mw = scaled(r, 0.4);
    let mh = scaled(r, 0.6);
    canvas.fill_rounded_rect(Rect::new(cx - mw, cy - mh, cx + mw, cy + scaled(mh, 0.2)), mw, color);
    canvas.stroke_arc(
        Rect::new(cx - scaled(mw, 1.5), cy - scaled(mh, 0.2), cx + scaled(mw, 1.5), cy + scaled(mh, 0.8)),
        0.0,
        180.0,
        scaled(r, 0.06).max(3),
        color,
    );

    let sw = scaled(r, 0.04).max(2);
    let stand_top = cy + scaled(mh, 0.8);
    let stand_bottom = stand_top + scaled(r, 0.25);
    canvas.fill_rect(Rect::new(cx - sw, stand_top, cx + sw, stand_bottom), color);
    canvas.line(
        (cx - scaled(mw, 0.8), stand_bottom),
        (cx + scaled(mw, 0.8), stand_bottom),
        sw,
        color,
    );
}

fn voice_input(typeface: &Typeface) -> RgbImage {
    let mut f = Frame::new(typeface);
    f.headline("Speak Your Schedule", "AI Does the Rest");

    let (cx, cy, r) = (W / 2, 750, 200);
    for i in 0..3u8 {
        let halo = r + 40 + i as i32 * 35;
        f.canvas.stroke_ellipse(Rect::square(cx, cy, halo), 3, with_alpha(GOLD, 60 - i * 20));
    }
    f.canvas.fill_ellipse(Rect::square(cx, cy, r), GOLD);
    microphone(&mut f.canvas, cx, cy - 20, r, WHITE);

    f.canvas.fill_rounded_rect(Rect::new(100, 1050, W - 100, 1210), 20, CARD);
    f.centered(1080, "\"Team meeting tomorrow at 2pm\"", 44.0, WHITE);
    f.centered(1145, "Recognized", 32.0, GOLD_LIGHT);

    f.centered(1350, "Extracted Tasks", 48.0, WHITE);
    let tasks = [
        ("Team Meeting", "Tomorrow 2:00 PM", "High", RED),
        ("Submit Report", "Friday 5:00 PM", "Medium", ORANGE),
        ("Gym", "Every Monday 7 PM", "Low", GREEN),
    ];
    let mut ty = 1430;
    for (title, time, priority, color) in tasks {
        f.canvas.fill_rounded_rect(Rect::new(100, ty, W - 100, ty + 140), 16, CARD);
        f.canvas.fill_ellipse(Rect::new(140, ty + 50, 170, ty + 80), color);
        f.text(200, ty + 30, title, 40.0, WHITE);
        f.text(200, ty + 85, time, 30.0, GOLD_LIGHT);
        f.canvas.fill_rounded_rect(Rect::new(W - 300, ty + 45, W - 140, ty + 90), 12, color);
        f.text(W - 280, ty + 50, priority, 28.0, WHITE);
        ty += 170;
    }

    f.canvas.fill_rounded_rect(Rect::new(200, 2400, W - 200, 2490), 30, GOLD);
    f.centered(2420, "Register to Calendar", 42.0, NAVY_INK);
    f.footer("AI-Powered Schedule Management");
    f.finish()
}

fn ai_analysis(typeface: &Typeface) -> RgbImage {
    let mut f = Frame::new(typeface);
    f.headline("AI Analyzes", "Your Priorities");

    // Radiating spokes around the AI badge
    let (cx, cy) = (W / 2, 620);
    for angle in (0..360).step_by(45) {
        let rad = (angle as f64).to_radians();
        let at = |len: f64| (cx + (len * rad.cos()) as i32, cy + (len * rad.sin()) as i32);
        f.canvas.line(at(60.0), at(120.0), 4, GOLD_LIGHT);
    }
    f.canvas.fill_ellipse(Rect::square(cx, cy, 50), GOLD);
    f.centered(cy - 22, "AI", 44.0, NAVY_INK);

    let cards = [
        ("High Priority", "Team Meeting", "Tomorrow 2:00 PM", "Peak focus time recommended", RED),
        ("Medium Priority", "Submit Report", "Friday 5:00 PM", "Deadline-based scheduling", ORANGE),
        ("Low Priority", "Gym", "Monday 7:00 PM", "Routine pattern detected", GREEN),
    ];
    let mut ty = 850;
    for (label, title, time, reason, color) in cards {
        f.canvas.fill_rounded_rect(Rect::new(80, ty, W - 80, ty + 280), 20, CARD);
        f.canvas.fill_rounded_rect(Rect::new(80, ty, 96, ty + 280), 5, color);
        let badge_right = 130 + label.chars().count() as i32 * 22;
        f.canvas.fill_rounded_rect(Rect::new(130, ty + 20, badge_right, ty + 65), 10, with_alpha(color, 80));
        f.text(145, ty + 25, label, 30.0, color);
        f.text(130, ty + 85, title, 46.0, WHITE);
        f.text(130, ty + 150, time, 34.0, GOLD_LIGHT);
        f.text(130, ty + 210, &format!("* {}", reason), 28.0, WHITE);
        ty += 320;
    }

    f.footer("Smart Priority Detection");
    f.finish()
}

fn calendar(typeface: &Typeface) -> RgbImage {
    let mut f = Frame::new(typeface);
    f.headline("Auto-Sync to", "Google Calendar");

    let (left, top) = (100, 480);
    let (width, height) = (W - 200, 1600);
    f.canvas.fill_rounded_rect(Rect::new(left, top, left + width, top + height), 24, CARD);
    f.canvas.fill_rounded_rect(Rect::new(left, top, left + width, top + 100), 24, GOLD);
    f.canvas.fill_rect(Rect::new(left, top + 70, left + width, top + 100), GOLD);
    f.centered(top + 25, "February 2026", 44.0, NAVY_INK);

    let column = width / 7;
    for (i, day) in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].iter().enumerate() {
        f.text(left + i as i32 * column + column / 2 - 20, top + 120, day, 28.0, WHITE);
    }

    // February 2026 starts on a Sunday, so day N sits at column (N-1) % 7
    for day in 1..=28 {
        let dx = left + (day - 1) % 7 * column + 15;
        let dy = top + 180 + (day - 1) / 7 * 200;
        let ink = if day == 15 { GOLD } else { WHITE };
        f.text(dx, dy, &day.to_string(), 30.0, ink);

        let chip = |offset: i32| Rect::new(dx - 5, dy + offset, dx + column - 25, dy + offset + 32);
        match day {
            16 => {
                f.canvas.fill_rounded_rect(chip(40), 6, RED);
                f.text(dx + 5, dy + 44, "Meeting", 22.0, WHITE);
            }
            20 => {
                f.canvas.fill_rounded_rect(chip(40), 6, ORANGE);
                f.text(dx + 5, dy + 44, "Report", 22.0, WHITE);
            }
            _ => {}
        }
        if matches!(day, 9 | 16 | 23) {
            f.canvas.fill_rounded_rect(chip(80), 6, GREEN);
            f.text(dx + 5, dy + 84, "Gym", 22.0, WHITE);
        }
    }

    f.canvas.fill_rounded_rect(Rect::new(150, 2200, W - 150, 2320), 20, Rgba([30, 80, 50, 255]));
    f.centered(2215, "3 Events Registered!", 44.0, GREEN);
    f.centered(2272, "Synced to Google Calendar", 30.0, WHITE);
    f.footer("Seamless Calendar Integration");
    f.finish()
}

fn smart_time(typeface: &Typeface) -> RgbImage {
    let mut f = Frame::new(typeface);
    f.headline("AI Recommends", "Best Time Slots");

    let ty = 480;
    f.canvas.fill_rounded_rect(Rect::new(80, ty, W - 80, ty + 180), 20, CARD);
    f.canvas.fill_ellipse(Rect::new(120, ty + 60, 160, ty + 100), RED);
    f.text(190, ty + 40, "Team Meeting", 46.0, WHITE);
    f.text(190, ty + 105, "Duration: 60 min | High Priority", 30.0, GOLD_LIGHT);

    f.centered(750, "AI Recommended Times", 42.0, GOLD_LIGHT);
    let slots = [
        ("09:00 - 10:00 AM", "Peak Focus Time", "*****", true),
        ("02:00 - 03:00 PM", "Based on Your Pattern", "****", false),
        ("04:00 - 05:00 PM", "Available Slot", "***", false),
    ];
    let mut ty = 830;
    for (time, reason, stars, selected) in slots {
        let card = Rect::new(80, ty, W - 80, ty + 200);
        let fill = if selected { Rgba([40, 70, 50, 255]) } else { CARD };
        f.canvas.fill_rounded_rect(card, 16, fill);
        if selected {
            f.canvas.stroke_rounded_rect(card, 16, 3, GREEN);
        }
        f.text(130, ty + 30, time, 40.0, WHITE);
        f.text(130, ty + 90, reason, 30.0, GOLD_LIGHT);
        f.text(130, ty + 140, stars, 34.0, GOLD);
        if selected {
            f.canvas.fill_rounded_rect(Rect::new(W - 180, ty + 70, W - 120, ty + 120), 10, GREEN);
            f.text(W - 163, ty + 73, "V", 36.0, WHITE);
        }
        ty += 240;
    }

    f.centered(1550, "Today's Schedule", 42.0, WHITE);
    let timeline = [
        ("08:00", ""),
        ("09:00", "Team Meeting"),
        ("10:00", ""),
        ("11:00", ""),
        ("12:00", "Lunch"),
        ("01:00", ""),
        ("02:00", "Report"),
        ("03:00", ""),
        ("04:00", ""),
        ("05:00", ""),
        ("06:00", ""),
        ("07:00", "Gym"),
    ];
    let mut ty = 1620;
    for (hour, event) in timeline {
        f.canvas.line((130, ty + 5), (W - 130, ty + 5), 1, Rgba([60, 70, 100, 255]));
        f.text(130, ty - 10, hour, 24.0, WHITE);
        if !event.is_empty() {
            let color = match event {
                "Team Meeting" => RED,
                "Report" | "Lunch" => ORANGE,
                _ => GREEN,
            };
            let chip_right = 280 + event.chars().count() as i32 * 18;
            f.canvas.fill_rounded_rect(Rect::new(280, ty - 12, chip_right, ty + 22), 8, color);
            f.text(290, ty - 8, event, 24.0, WHITE);
        }
        ty += 55;
    }

    f.footer("Smart AI Scheduling");
    f.finish()
}

fn multilingual(typeface: &Typeface) -> RgbImage {
    let mut f = Frame::new(typeface);
    f.headline("Speak in", "Any Language");

    let languages = [
        ("US", "English", "\"Meeting tomorrow at 3pm\""),
        ("KR", "Korean", "\"Tomorrow 3PM meeting\""),
        ("JP", "Japanese", "\"Tomorrow 3PM conference\""),
        ("CN", "Chinese", "\"Tomorrow 3PM meeting\""),
        ("ES", "Spanish", "\"Meeting tomorrow at 3pm\""),
        ("IN", "Hindi", "\"Tomorrow 3PM meeting\""),
    ];
    let mut ty = 500;
    for (code, language, example) in languages {
        f.canvas.fill_rounded_rect(Rect::new(80, ty, W - 80, ty + 200), 20, CARD);
        f.canvas.fill_ellipse(Rect::new(120, ty + 50, 200, ty + 130), Rgba([50, 60, 90, 255]));
        f.text(140, ty + 70, code, 40.0, GOLD);
        f.text(230, ty + 45, language, 42.0, WHITE);
        f.text(230, ty + 110, example, 30.0, GOLD_LIGHT);
        f.text(W - 150, ty + 75, "->", 40.0, GOLD);
        ty += 240;
    }

    let summary = Rect::new(150, ty + 20, W - 150, ty + 220);
    f.canvas.fill_rounded_rect(summary, 20, Rgba([30, 70, 50, 255]));
    f.canvas.stroke_rounded_rect(summary, 20, 2, GREEN);
    f.centered(ty + 50, "Same Result", 44.0, GREEN);
    f.centered(ty + 115, "AI understands all languages", 34.0, WHITE);
    f.centered(ty + 165, "Supports 6 languages", 28.0, GOLD_LIGHT);

    f.footer("Global AI Voice Recognition");
    f.finish()
}

/// Render every layout into `dir` with one shared typeface
pub fn generate_screenshots(dir: &Path, typeface: &Typeface) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(SCREENSHOTS.len());

    for shot in SCREENSHOTS {
        println!("  Generating {}...", shot.filename);
        let path = dir.join(shot.filename);
        exporter::write_png(&shot.render(typeface), &path)?;
        println!("  ✓ {}", shot.filename);
        written.push(path);
    }

    Ok(written)
}

pub fn run(root: &Path, config: &AssetsConfig) -> Result<()> {
    let typeface = Typeface::load(&config.font_candidates());
    println!("🔤 Font: {}", typeface.describe());

    generate_screenshots(&root.join(&config.output.screenshots_dir), &typeface)?;

    println!("✅ All {} screenshots done!", SCREENSHOTS.len());
    Ok(())
}
