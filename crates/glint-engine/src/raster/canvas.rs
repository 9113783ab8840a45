use std::collections::HashMap;

use fontdue::layout::GlyphRasterConfig;
use fontdue::Metrics;

use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Color;
use crate::scene::{CircleCmd, DrawCmd, DrawList, LineCmd, RectCmd, RectStyle, TextCmd};
use crate::text::FontSystem;

use super::coverage;

// Glyph coverage at or above this value is kept when antialiasing is off.
const ALIASED_THRESHOLD: u8 = 128;

/// Fixed-resolution RGBA8 paint target in logical pixels.
///
/// Pixels are stored row-major, top-left first, with premultiplied alpha.
/// Drawing composites with source-over blending.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,

    // Rasterized glyph bitmaps, keyed by font/glyph/pixel size.
    glyph_cache: HashMap<GlyphRasterConfig, (Metrics, Vec<u8>)>,
}

impl Canvas {
    /// Creates a transparent canvas. Zero dimensions are clamped to 1.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![[0; 4]; (width * height) as usize],
            glyph_cache: HashMap::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    /// Raw premultiplied RGBA8 bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Fills every pixel with `color`, discarding previous content.
    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_premul_u8();
        self.pixels.fill(rgba);
    }

    /// Paints every item of `list` in order on top of the current content.
    pub fn draw(&mut self, list: &DrawList, fonts: &FontSystem) {
        for item in list.items() {
            let Some(bounds) = self.clip_bounds(item.clip_rect) else { continue; };
            match &item.cmd {
                DrawCmd::Rect(cmd) => self.draw_rect(cmd, bounds),
                DrawCmd::Circle(cmd) => self.draw_circle(cmd, bounds),
                DrawCmd::Line(cmd) => self.draw_line(cmd, bounds),
                DrawCmd::Text(cmd) => self.draw_text(cmd, bounds, fonts),
            }
        }
    }

    // ── shapes ────────────────────────────────────────────────────────────

    fn draw_rect(&mut self, cmd: &RectCmd, clip: PixelBounds) {
        let rect = cmd.rect.normalized();
        if rect.is_empty() || !rect.is_finite() {
            return;
        }
        let radius = cmd.radius;
        match cmd.style {
            RectStyle::Fill => {
                self.fill_coverage(rect, clip, cmd.color, |p| coverage::rounded_rect(p, rect, radius));
            }
            RectStyle::Stroke(width) if width > 0.0 => {
                self.fill_coverage(rect, clip, cmd.color, |p| {
                    coverage::rounded_rect_stroke(p, rect, radius, width)
                });
            }
            RectStyle::Stroke(_) => {}
        }
    }

    fn draw_circle(&mut self, cmd: &CircleCmd, clip: PixelBounds) {
        if cmd.radius <= 0.0 {
            return;
        }
        let (center, radius) = (cmd.center, cmd.radius);
        let bbox = Rect::from_center(center, Vec2::new(radius * 2.0, radius * 2.0)).inflate(2.0, 2.0);
        self.fill_coverage(bbox, clip, cmd.color, |p| coverage::circle(p, center, radius));
    }

    fn draw_line(&mut self, cmd: &LineCmd, clip: PixelBounds) {
        let (from, to, width) = (cmd.from, cmd.to, cmd.width);
        let pad = width.max(1.0) + 2.0;
        let bbox = Rect::new(
            from.x.min(to.x) - pad,
            from.y.min(to.y) - pad,
            (from.x - to.x).abs() + pad * 2.0,
            (from.y - to.y).abs() + pad * 2.0,
        );
        self.fill_coverage(bbox, clip, cmd.color, |p| coverage::line(p, from, to, width));
    }

    fn fill_coverage(&mut self, bbox: Rect, clip: PixelBounds, color: Color, cov: impl Fn(Vec2) -> f32) {
        // Clip bounds are already inside the canvas, so both ends are non-negative.
        let Some(b) = clip.intersect(PixelBounds::covering(bbox)) else { return; };
        for y in b.y0..b.y1 {
            for x in b.x0..b.x1 {
                let c = cov(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                if c > 0.0 {
                    self.blend(x as u32, y as u32, color.with_coverage(c));
                }
            }
        }
    }

    // ── text ──────────────────────────────────────────────────────────────

    fn draw_text(&mut self, cmd: &TextCmd, clip: PixelBounds, fonts: &FontSystem) {
        let size = cmd.size * cmd.scale;
        if size <= 0.0 {
            return;
        }
        let Some((font, glyphs)) = fonts.layout(&cmd.text, cmd.font, size) else {
            log::warn!("canvas: unknown font {:?}, skipping text", cmd.font);
            return;
        };

        let width = self.width;
        let Canvas { glyph_cache, pixels, .. } = self;
        for g in glyphs.iter().filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0) {
            let (metrics, bitmap) = glyph_cache
                .entry(g.key)
                .or_insert_with(|| font.rasterize_config(g.key));
            let gw = metrics.width;
            let gx = (cmd.origin.x + g.x).round() as i64;
            let gy = (cmd.origin.y + g.y).round() as i64;

            for (row, line) in bitmap.chunks_exact(gw.max(1)).enumerate() {
                for (col, &raw) in line.iter().enumerate() {
                    let (x, y) = (gx + col as i64, gy + row as i64);
                    if !clip.contains(x, y) {
                        continue;
                    }
                    let c = if cmd.antialias {
                        raw as f32 / 255.0
                    } else if raw >= ALIASED_THRESHOLD {
                        1.0
                    } else {
                        0.0
                    };
                    if c > 0.0 {
                        let i = (y as u32 * width + x as u32) as usize;
                        blend_into(&mut pixels[i], cmd.color.with_coverage(c));
                    }
                }
            }
        }
    }

    // ── pixels ────────────────────────────────────────────────────────────

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    fn blend(&mut self, x: u32, y: u32, src: Color) {
        let i = self.index(x, y);
        blend_into(&mut self.pixels[i], src);
    }

    fn clip_bounds(&self, clip: Option<Rect>) -> Option<PixelBounds> {
        let full = PixelBounds { x0: 0, y0: 0, x1: self.width as i64, y1: self.height as i64 };
        match clip {
            None => Some(full),
            Some(r) if r.is_empty() => None,
            Some(r) => full.intersect(PixelBounds::rounding(r)),
        }
    }
}

/// Source-over composite of a premultiplied color onto one RGBA8 pixel.
fn blend_into(px: &mut [u8; 4], src: Color) {
    let inv = 1.0 - src.a.clamp(0.0, 1.0);
    for (d, s) in px.iter_mut().zip([src.r, src.g, src.b, src.a]) {
        let dv = *d as f32 / 255.0;
        *d = ((s + dv * inv).clamp(0.0, 1.0) * 255.0).round() as u8;
    }
}

/// Half-open integer pixel range `[x0, x1) × [y0, y1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
struct PixelBounds {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

impl PixelBounds {
    /// Every pixel touched by `r`.
    fn covering(r: Rect) -> Self {
        Self {
            x0: r.origin.x.floor() as i64,
            y0: r.origin.y.floor() as i64,
            x1: (r.origin.x + r.size.x).ceil() as i64,
            y1: (r.origin.y + r.size.y).ceil() as i64,
        }
    }

    /// Pixels whose centers fall inside `r`.
    fn rounding(r: Rect) -> Self {
        Self {
            x0: r.origin.x.round() as i64,
            y0: r.origin.y.round() as i64,
            x1: (r.origin.x + r.size.x).round() as i64,
            y1: (r.origin.y + r.size.y).round() as i64,
        }
    }

    fn intersect(self, other: PixelBounds) -> Option<PixelBounds> {
        let b = PixelBounds {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        };
        (b.x0 < b.x1 && b.y0 < b.y1).then_some(b)
    }

    #[inline]
    fn contains(self, x: i64, y: i64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}
