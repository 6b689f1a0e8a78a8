// Procedural 2D drawing on an RGBA pixel buffer

use image::{Pixel, Rgb, RgbImage, Rgba, RgbaImage};

/// Inclusive pixel bounding box: both `right` and `bottom` are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect { left, top, right, bottom }
    }

    /// Box of half-extents `rx`/`ry` centered on (`cx`, `cy`)
    pub const fn around(cx: i32, cy: i32, rx: i32, ry: i32) -> Self {
        Rect::new(cx - rx, cy - ry, cx + rx, cy + ry)
    }

    pub const fn square(cx: i32, cy: i32, r: i32) -> Self {
        Rect::around(cx, cy, r, r)
    }

    pub fn is_empty(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }

    pub fn inset(&self, by: i32) -> Rect {
        Rect::new(self.left + by, self.top + by, self.right - by, self.bottom - by)
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    fn center(&self) -> (f64, f64) {
        (
            (self.left + self.right) as f64 / 2.0,
            (self.top + self.bottom) as f64 / 2.0,
        )
    }

    fn half_extents(&self) -> (f64, f64) {
        (
            (self.right - self.left) as f64 / 2.0,
            (self.bottom - self.top) as f64 / 2.0,
        )
    }
}

/// Whether pixel (`x`, `y`) lies inside `rect` with corners rounded by `radius`
pub fn in_rounded_rect(rect: Rect, radius: i32, x: i32, y: i32) -> bool {
    if rect.is_empty() || !rect.contains(x, y) {
        return false;
    }

    let radius = radius
        .min((rect.right - rect.left) / 2)
        .min((rect.bottom - rect.top) / 2)
        .max(0);
    if radius == 0 {
        return true;
    }

    let cx = if x < rect.left + radius {
        rect.left + radius
    } else if x > rect.right - radius {
        rect.right - radius
    } else {
        return true;
    };
    let cy = if y < rect.top + radius {
        rect.top + radius
    } else if y > rect.bottom - radius {
        rect.bottom - radius
    } else {
        return true;
    };

    let dx = (x - cx) as i64;
    let dy = (y - cy) as i64;
    dx * dx + dy * dy <= (radius as i64) * (radius as i64)
}

/// Whether pixel (`x`, `y`) lies inside the ellipse inscribed in `rect`
pub fn in_ellipse(rect: Rect, x: i32, y: i32) -> bool {
    if rect.is_empty() || !rect.contains(x, y) {
        return false;
    }

    let (cx, cy) = rect.center();
    let (rx, ry) = rect.half_extents();
    if rx <= 0.0 || ry <= 0.0 {
        return true;
    }

    let nx = (x as f64 - cx) / rx;
    let ny = (y as f64 - cy) / ry;
    nx * nx + ny * ny <= 1.0
}

/// Whether `angle` (degrees) falls on the clockwise sweep from `start` to `end`
pub fn angle_in_sweep(angle: f64, start: f64, end: f64) -> bool {
    let sweep = end - start;
    if sweep >= 360.0 {
        return true;
    }
    if sweep < 0.0 {
        return false;
    }
    (angle - start).rem_euclid(360.0) <= sweep
}

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Canvas {
            image: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])),
        }
    }

    /// Opaque canvas of a single colour
    pub fn filled(width: u32, height: u32, color: Rgb<u8>) -> Self {
        Canvas {
            image: RgbaImage::from_pixel(width, height, color.to_rgba()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Composite one pixel source-over; out-of-bounds writes are dropped
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 || x as u32 >= self.image.width() || y as u32 >= self.image.height() {
            return;
        }

        match color[3] {
            0 => {}
            255 => self.image.put_pixel(x as u32, y as u32, color),
            _ => self.image.get_pixel_mut(x as u32, y as u32).blend(&color),
        }
    }

    /// Paint every pixel of `bounds` (clipped to the canvas) accepted by `inside`
    fn fill_where(&mut self, bounds: Rect, color: Rgba<u8>, inside: impl Fn(i32, i32) -> bool) {
        if bounds.is_empty() || self.image.width() == 0 || self.image.height() == 0 {
            return;
        }

        let x0 = bounds.left.max(0);
        let y0 = bounds.top.max(0);
        let x1 = bounds.right.min(self.image.width() as i32 - 1);
        let y1 = bounds.bottom.min(self.image.height() as i32 - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                if inside(x, y) {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Fill each row with a linear blend from `top` (row 0) towards `bottom`
    ///
    /// Channels are truncated, so the last row stops one step short of `bottom`.
    pub fn vertical_gradient(&mut self, top: Rgb<u8>, bottom: Rgb<u8>) {
        let height = self.image.height();
        for y in 0..height {
            let ratio = y as f64 / height as f64;
            let mut row = Rgba([0, 0, 0, 255]);
            for c in 0..3 {
                let from = top[c] as f64;
                let to = bottom[c] as f64;
                row[c] = (from + (to - from) * ratio) as u8;
            }
            for x in 0..self.image.width() {
                self.image.put_pixel(x, y, row);
            }
        }
    }

    /// Clear every pixel outside a canvas-sized rounded rectangle
    pub fn apply_rounded_mask(&mut self, radius: i32) {
        let bounds = Rect::new(0, 0, self.image.width() as i32, self.image.height() as i32);
        for (x, y, pixel) in self.image.enumerate_pixels_mut() {
            if !in_rounded_rect(bounds, radius, x as i32, y as i32) {
                *pixel = Rgba([0, 0, 0, 0]);
            }
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        self.fill_where(rect, color, |_, _| true);
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: Rgba<u8>) {
        self.fill_where(rect, color, |x, y| in_rounded_rect(rect, radius, x, y));
    }

    /// Outline of `width` pixels drawn inward from the edge of `rect`
    pub fn stroke_rounded_rect(&mut self, rect: Rect, radius: i32, width: i32, color: Rgba<u8>) {
        if width <= 0 {
            return;
        }
        let inner = rect.inset(width);
        let inner_radius = (radius - width).max(0);
        self.fill_where(rect, color, |x, y| {
            in_rounded_rect(rect, radius, x, y) && !in_rounded_rect(inner, inner_radius, x, y)
        });
    }

    pub fn fill_ellipse(&mut self, rect: Rect, color: Rgba<u8>) {
        self.fill_where(rect, color, |x, y| in_ellipse(rect, x, y));
    }

    pub fn stroke_ellipse(&mut self, rect: Rect, width: i32, color: Rgba<u8>) {
        if width <= 0 {
            return;
        }
        let inner = rect.inset(width);
        self.fill_where(rect, color, |x, y| in_ellipse(rect, x, y) && !in_ellipse(inner, x, y));
    }

    /// Elliptical arc stroke; angles in degrees, clockwise from 3 o'clock
    pub fn stroke_arc(&mut self, rect: Rect, start: f64, end: f64, width: i32, color: Rgba<u8>) {
        if width <= 0 {
            return;
        }
        let inner = rect.inset(width);
        let (cx, cy) = rect.center();
        let (rx, ry) = rect.half_extents();
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }

        self.fill_where(rect, color, |x, y| {
            if !in_ellipse(rect, x, y) || in_ellipse(inner, x, y) {
                return false;
            }
            let angle = ((y as f64 - cy) / ry)
                .atan2((x as f64 - cx) / rx)
                .to_degrees();
            angle_in_sweep(angle, start, end)
        });
    }

    /// Straight segment of `width` pixels with flat ends
    pub fn line(&mut self, from: (i32, i32), to: (i32, i32), width: i32, color: Rgba<u8>) {
        let width = width.max(1) as f64;
        let reach = (width / 2.0).ceil() as i32;
        let bounds = Rect::new(
            from.0.min(to.0) - reach,
            from.1.min(to.1) - reach,
            from.0.max(to.0) + reach,
            from.1.max(to.1) + reach,
        );

        let (x0, y0) = (from.0 as f64, from.1 as f64);
        let dx = (to.0 - from.0) as f64;
        let dy = (to.1 - from.1) as f64;
        let length_sq = dx * dx + dy * dy;

        if length_sq == 0.0 {
            self.fill_rect(Rect::square(from.0, from.1, reach - 1), color);
            return;
        }

        let length = length_sq.sqrt();
        self.fill_where(bounds, color, |x, y| {
            let px = x as f64 - x0;
            let py = y as f64 - y0;
            let t = (px * dx + py * dy) / length_sq;
            if !(0.0..=1.0).contains(&t) {
                return false;
            }
            let distance = (px * dy - py * dx).abs() / length;
            distance * 2.0 <= width
        });
    }

    /// Drop the alpha channel by compositing onto an opaque `background`
    pub fn flatten(&self, background: Rgb<u8>) -> RgbImage {
        RgbImage::from_fn(self.image.width(), self.image.height(), |x, y| {
            let src = self.image.get_pixel(x, y);
            let alpha = src[3] as u32;
            let mut out = background;
            for c in 0..3 {
                let mixed = src[c] as u32 * alpha + background[c] as u32 * (255 - alpha);
                out[c] = ((mixed + 127) / 255) as u8;
            }
            out
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAVY: Rgb<u8> = Rgb([15, 20, 40]);
    const GOLD: Rgba<u8> = Rgba([218, 175, 75, 255]);

    #[test]
    fn test_gradient_starts_at_top_colour() {
        let mut canvas = Canvas::new(4, 100);
        canvas.vertical_gradient(NAVY, Rgb([25, 35, 65]));

        assert_eq!(canvas.pixel(0, 0), Rgba([15, 20, 40, 255]));
        assert_eq!(canvas.pixel(3, 50), Rgba([20, 27, 52, 255]));
        // Truncation keeps the last row below the bottom colour
        assert_eq!(canvas.pixel(0, 99), Rgba([24, 34, 64, 255]));
    }

    #[test]
    fn test_rounded_mask_clears_corners_only() {
        let mut canvas = Canvas::filled(100, 100, NAVY);
        canvas.apply_rounded_mask(22);

        assert_eq!(canvas.pixel(0, 0)[3], 0);
        assert_eq!(canvas.pixel(99, 0)[3], 0);
        assert_eq!(canvas.pixel(0, 99)[3], 0);
        assert_eq!(canvas.pixel(99, 99)[3], 0);
        assert_eq!(canvas.pixel(50, 50)[3], 255);
        assert_eq!(canvas.pixel(50, 0)[3], 255);
        assert_eq!(canvas.pixel(0, 50)[3], 255);
    }

    #[test]
    fn test_flatten_replaces_transparency_with_background() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_rect(Rect::new(2, 2, 7, 7), GOLD);

        let flat = canvas.flatten(NAVY);
        assert_eq!(*flat.get_pixel(0, 0), NAVY);
        assert_eq!(*flat.get_pixel(5, 5), Rgb([218, 175, 75]));
    }

    #[test]
    fn test_half_alpha_blends_source_over() {
        let mut canvas = Canvas::filled(1, 1, Rgb([0, 0, 0]));
        canvas.blend_pixel(0, 0, Rgba([255, 255, 255, 128]));

        let pixel = canvas.pixel(0, 0);
        assert!(pixel[0] > 120 && pixel[0] < 136, "got {:?}", pixel);
        assert_eq!(pixel[3], 255);
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut canvas = Canvas::new(5, 5);
        canvas.blend_pixel(-1, 2, GOLD);
        canvas.blend_pixel(5, 2, GOLD);
        canvas.fill_ellipse(Rect::square(0, 0, 20), GOLD);
        assert_eq!(canvas.pixel(4, 4), GOLD);
    }

    #[test]
    fn test_arc_sweep_crosses_zero() {
        assert!(angle_in_sweep(10.0, -30.0, 30.0));
        assert!(angle_in_sweep(-10.0, -30.0, 30.0));
        assert!(!angle_in_sweep(90.0, -30.0, 30.0));
        assert!(angle_in_sweep(180.0, 150.0, 210.0));
        assert!(angle_in_sweep(-170.0, 150.0, 210.0));
    }

    #[test]
    fn test_lower_half_arc_paints_below_center_only() {
        let mut canvas = Canvas::new(41, 41);
        canvas.stroke_arc(Rect::square(20, 20, 20), 0.0, 180.0, 3, GOLD);

        // Bottom of the ring (6 o'clock) is painted, top (12 o'clock) is not
        assert_eq!(canvas.pixel(20, 39), GOLD);
        assert_eq!(canvas.pixel(20, 1)[3], 0);
        // Interior stays clear
        assert_eq!(canvas.pixel(20, 20)[3], 0);
    }

    #[test]
    fn test_stroke_ellipse_leaves_interior_clear() {
        let mut canvas = Canvas::new(21, 21);
        canvas.stroke_ellipse(Rect::square(10, 10, 10), 2, GOLD);

        assert_eq!(canvas.pixel(10, 0), GOLD);
        assert_eq!(canvas.pixel(10, 10)[3], 0);
    }

    #[test]
    fn test_horizontal_line_has_requested_thickness() {
        let mut canvas = Canvas::new(20, 20);
        canvas.line((2, 10), (17, 10), 1, GOLD);

        assert_eq!(canvas.pixel(2, 10), GOLD);
        assert_eq!(canvas.pixel(17, 10), GOLD);
        assert_eq!(canvas.pixel(10, 9)[3], 0);
        assert_eq!(canvas.pixel(10, 11)[3], 0);
    }

    #[test]
    fn test_negative_width_draws_nothing() {
        let mut canvas = Canvas::new(10, 10);
        canvas.stroke_rounded_rect(Rect::new(0, 0, 9, 9), 2, -1, GOLD);
        canvas.stroke_ellipse(Rect::new(0, 0, 9, 9), 0, GOLD);
        assert!(canvas.image().pixels().all(|p| p[3] == 0));
    }
}
