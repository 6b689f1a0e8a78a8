// Text rendering onto a Canvas, with a bitmap fallback font

use crate::canvas::{Canvas, Rect};
use ab_glyph::{point, Font, FontVec, Glyph, GlyphId, Point, PxScale, ScaleFont};
use anyhow::{anyhow, Context, Result};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::Rgba;
use std::fs;
use std::path::{Path, PathBuf};

const FONT_EXTENSIONS: &[&str] = &["ttf", "ttc", "otf"];

/// A TrueType face, or the `font8x8` glyphs scaled to the requested size
pub enum Typeface {
    TrueType { font: FontVec, source: PathBuf },
    Builtin,
}

impl Typeface {
    /// Load the first usable font from `candidates`
    ///
    /// Candidates may be font files or directories; directories are scanned
    /// recursively for font files in path order.
    pub fn load(candidates: &[PathBuf]) -> Self {
        for candidate in candidates {
            let files = if candidate.is_dir() {
                font_files_in(candidate)
            } else if candidate.exists() {
                vec![candidate.clone()]
            } else {
                continue;
            };

            for file in files {
                match Self::from_file(&file) {
                    Ok(typeface) => return typeface,
                    Err(e) => eprintln!("⚠️  Skipping font {}: {:#}", file.display(), e),
                }
            }
        }

        eprintln!("⚠️  No usable font found, falling back to built-in bitmap font");
        Typeface::Builtin
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read(path)
            .with_context(|| format!("Failed to read font {}", path.display()))?;
        // Index 0 is the regular face for both single fonts and collections
        let font = FontVec::try_from_vec_and_index(data, 0)
            .map_err(|e| anyhow!("Failed to parse font {}: {}", path.display(), e))?;

        Ok(Typeface::TrueType {
            font,
            source: path.to_path_buf(),
        })
    }

    pub fn builtin() -> Self {
        Typeface::Builtin
    }

    pub fn describe(&self) -> String {
        match self {
            Typeface::TrueType { source, .. } => source.display().to_string(),
            Typeface::Builtin => "built-in 8x8 bitmap".to_string(),
        }
    }

    /// Horizontal advance of `text` at `size` pixels per em
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        match self {
            Typeface::TrueType { font, .. } => layout(font, px_scale(font, size), text, point(0.0, 0.0)).1,
            Typeface::Builtin => (8 * builtin_scale(size)) as f32 * text.chars().count() as f32,
        }
    }

    /// Horizontal extent of the painted pixels, relative to the draw origin
    ///
    /// Returns `(left, right)` with `right` exclusive, or `None` when `text`
    /// puts no ink down.
    pub fn ink_bounds(&self, text: &str, size: f32) -> Option<(f32, f32)> {
        match self {
            Typeface::TrueType { font, .. } => {
                let (glyphs, _) = layout(font, px_scale(font, size), text, point(0.0, 0.0));
                glyphs
                    .into_iter()
                    .filter_map(|glyph| font.outline_glyph(glyph))
                    .map(|outlined| outlined.px_bounds())
                    .fold(None::<(f32, f32)>, |acc, bounds| match acc {
                        None => Some((bounds.min.x, bounds.max.x)),
                        Some((left, right)) => Some((left.min(bounds.min.x), right.max(bounds.max.x))),
                    })
            }
            Typeface::Builtin => bitmap_ink_bounds(text, size),
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`)
    pub fn draw(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, size: f32, color: Rgba<u8>) {
        match self {
            Typeface::TrueType { font, .. } => draw_outlined(font, canvas, x, y, text, size, color),
            Typeface::Builtin => draw_bitmap(canvas, x, y, text, size, color),
        }
    }

    /// Draw `text` with its ink horizontally centered on the canvas
    pub fn draw_centered(&self, canvas: &mut Canvas, y: i32, text: &str, size: f32, color: Rgba<u8>) {
        let (left, right) = match self.ink_bounds(text, size) {
            Some(bounds) => bounds,
            None => return,
        };
        let x = ((canvas.width() as f32 - (right - left)) / 2.0).floor() - left;
        self.draw(canvas, x as i32, y, text, size, color);
    }
}

/// Scale such that one em spans `size` pixels
fn px_scale(font: &FontVec, size: f32) -> PxScale {
    let units_per_em = font.units_per_em().unwrap_or(1000.0);
    PxScale::from(size * font.height_unscaled() / units_per_em)
}

/// Position each glyph along the baseline through `origin`, applying kerning
///
/// Also returns the total advance width.
fn layout(font: &FontVec, scale: PxScale, text: &str, origin: Point) -> (Vec<Glyph>, f32) {
    let scaled = font.as_scaled(scale);
    let mut glyphs = Vec::with_capacity(text.len());
    let mut caret = origin.x;
    let mut previous: Option<GlyphId> = None;

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, origin.y)));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }

    (glyphs, caret - origin.x)
}

fn draw_outlined(
    font: &FontVec,
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    text: &str,
    size: f32,
    color: Rgba<u8>,
) {
    let scale = px_scale(font, size);
    let baseline = y as f32 + font.as_scaled(scale).ascent();
    let (glyphs, _) = layout(font, scale, text, point(x as f32, baseline));

    for glyph in glyphs {
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let alpha = (color[3] as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
                canvas.blend_pixel(
                    bounds.min.x as i32 + gx as i32,
                    bounds.min.y as i32 + gy as i32,
                    Rgba([color[0], color[1], color[2], alpha]),
                );
            });
        }
    }
}

/// Whole-pixel magnification applied to the 8x8 bitmap glyphs
fn builtin_scale(size: f32) -> i32 {
    ((size / 8.0).round() as i32).max(1)
}

fn bitmap_glyph(c: char) -> Option<[u8; 8]> {
    BASIC_FONTS.get(c).or_else(|| BASIC_FONTS.get('?'))
}

fn bitmap_ink_bounds(text: &str, size: f32) -> Option<(f32, f32)> {
    let scale = builtin_scale(size);
    let mut bounds: Option<(i32, i32)> = None;

    for (i, c) in text.chars().enumerate() {
        let columns = match bitmap_glyph(c) {
            Some(rows) => rows.iter().fold(0u8, |acc, bits| acc | bits),
            None => continue,
        };
        if columns == 0 {
            continue;
        }
        let origin = i as i32 * 8 * scale;
        let first = columns.trailing_zeros() as i32;
        let last = 7 - columns.leading_zeros() as i32;
        let (left, right) = (origin + first * scale, origin + (last + 1) * scale);
        bounds = Some(match bounds {
            None => (left, right),
            Some((l, r)) => (l.min(left), r.max(right)),
        });
    }

    bounds.map(|(left, right)| (left as f32, right as f32))
}

fn draw_bitmap(canvas: &mut Canvas, x: i32, y: i32, text: &str, size: f32, color: Rgba<u8>) {
    let scale = builtin_scale(size);
    let mut origin = x;

    for c in text.chars() {
        if let Some(rows) = bitmap_glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..8 {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let left = origin + col * scale;
                    let top = y + row as i32 * scale;
                    canvas.fill_rect(Rect::new(left, top, left + scale - 1, top + scale - 1), color);
                }
            }
        }
        origin += 8 * scale;
    }
}

/// Font files anywhere under `dir`, sorted by path
fn font_files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_font_files(dir, &mut files);
    files.sort();
    files
}

fn collect_font_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        // Symlinked directories are not followed
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            collect_font_files(&path, files);
        } else if is_font_file(&path) {
            files.push(path);
        }
    }
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
