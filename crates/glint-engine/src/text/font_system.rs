use std::fmt;
use std::path::{Path, PathBuf};

use fontdue::layout::{CoordinateSystem, GlyphPosition, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error returned when a font cannot be loaded.
///
/// Font failures are construction-time errors: the caller gets this before any
/// widget referencing the font exists.
#[derive(Debug)]
pub enum FontLoadError {
    /// The font file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The bytes are not a usable TrueType/OpenType font.
    Parse(String),
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontLoadError::Io { path, source } => {
                write!(f, "font load error: cannot read {}: {source}", path.display())
            }
            FontLoadError::Parse(msg) => write!(f, "font load error: {msg}"),
        }
    }
}

impl std::error::Error for FontLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontLoadError::Io { source, .. } => Some(source),
            FontLoadError::Parse(_) => None,
        }
    }
}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

impl FontId {
    /// Builds a handle from a raw index.
    ///
    /// Meant for measurers that do not own real fonts (tests, headless tools).
    pub const fn from_raw(index: usize) -> Self {
        Self(index)
    }
}

/// Measures laid-out text.
///
/// Returns `(width, height)` in logical pixels. Empty text measures as zero.
pub trait MeasureText {
    fn measure(&self, text: &str, font: FontId, size: f32) -> Vec2;
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the application
/// and borrowed by the painter (measurement) and the canvas (rasterization).
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError::Parse(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} glyphs)", id, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    /// Reads a font file from disk and loads it.
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<FontId, FontLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_font(&bytes)
    }

    /// Returns a reference to the underlying `fontdue::Font`, if `id` is valid.
    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Lays out a single line of `text` and returns the glyph positions.
    ///
    /// Positions are relative to the top-left of the line (Y down).
    pub(crate) fn layout(&self, text: &str, id: FontId, size: f32) -> Option<(&fontdue::Font, Vec<GlyphPosition>)> {
        let font = self.get(id)?;
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));
        Some((font, layout.glyphs().clone()))
    }

    fn line_height(&self, font: &fontdue::Font, size: f32) -> f32 {
        font.horizontal_line_metrics(size)
            .map(|m| m.new_line_size)
            .unwrap_or(size * 1.2)
    }
}

impl MeasureText for FontSystem {
    fn measure(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        if text.is_empty() {
            return Vec2::zero();
        }
        let Some((font, glyphs)) = self.layout(text, id, size) else {
            log::warn!("measure_text: unknown font {:?}", id);
            return Vec2::zero();
        };

        // Pen position after each glyph, not the bitmap edge, so trailing
        // spaces count toward the width.
        let w = glyphs.iter().map(|g| {
            let m = font.metrics_indexed(g.key.glyph_index, size);
            (g.x - m.xmin as f32 + m.advance_width).max(0.0)
        }).fold(0.0f32, f32::max);
        Vec2::new(w, self.line_height(font, size))
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(&[0u8, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, FontLoadError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font_file("/definitely/not/here.ttf").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.ttf"));
    }

    #[test]
    fn empty_text_measures_zero() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.measure("", FontId::from_raw(0), 40.0), Vec2::zero());
    }

    #[test]
    fn unknown_font_measures_zero() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.measure("abc", FontId::from_raw(3), 40.0), Vec2::zero());
    }
}
