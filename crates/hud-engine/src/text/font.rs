use std::fmt;
use std::path::{Path, PathBuf};

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::paint::Color;

use super::{RenderMode, TextSurface};

/// Error returned by [`Font::open`] and [`Font::from_bytes`].
#[derive(Debug)]
pub enum FontLoadError {
    /// The font file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The bytes are not a usable TrueType/OpenType font.
    Parse { path: Option<PathBuf>, reason: String },
    /// Point size is not finite or outside `(0, MAX_FONT_SIZE]`.
    InvalidSize(f32),
}

/// Largest accepted point size, in logical pixels.
pub const MAX_FONT_SIZE: f32 = 1024.0;

/// Largest width or height of a rasterized line, in physical pixels.
///
/// Matches the default `max_texture_dimension_2d` of wgpu.
pub const MAX_SURFACE_DIMENSION: u32 = 8192;

/// Error returned by [`Font::rasterize`].
#[derive(Debug, Clone, PartialEq)]
pub enum RasterizeError {
    /// The laid-out line box is larger than [`MAX_SURFACE_DIMENSION`].
    TooLarge { width: f32, height: f32 },
}

impl fmt::Display for RasterizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { width, height } => write!(
                f,
                "text surface {width}x{height} exceeds {MAX_SURFACE_DIMENSION}x{MAX_SURFACE_DIMENSION}"
            ),
        }
    }
}

impl std::error::Error for RasterizeError {}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read font {}: {source}", path.display())
            }
            Self::Parse { path: Some(path), reason } => {
                write!(f, "failed to parse font {}: {reason}", path.display())
            }
            Self::Parse { path: None, reason } => write!(f, "failed to parse font: {reason}"),
            Self::InvalidSize(size) => {
                write!(f, "invalid font size {size}: expected a value in (0, {MAX_FONT_SIZE}]")
            }
        }
    }
}

impl std::error::Error for FontLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A parsed font bound to a point size.
///
/// Immutable after loading; glyphs are rasterized on demand by
/// [`Font::rasterize`] and nothing is cached between calls.
pub struct Font {
    inner: fontdue::Font,
    size: f32,
}

impl Font {
    /// Reads and parses a font file.
    pub fn open(path: impl AsRef<Path>, size: f32) -> Result<Self, FontLoadError> {
        let path = path.as_ref();
        check_size(size)?;

        let bytes = std::fs::read(path).map_err(|source| FontLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&bytes, size).map_err(|reason| FontLoadError::Parse {
            path: Some(path.to_path_buf()),
            reason,
        })
    }

    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8], size: f32) -> Result<Self, FontLoadError> {
        check_size(size)?;
        Self::parse(bytes, size).map_err(|reason| FontLoadError::Parse { path: None, reason })
    }

    fn parse(bytes: &[u8], size: f32) -> Result<Self, String> {
        let settings = fontdue::FontSettings {
            scale: size,
            ..fontdue::FontSettings::default()
        };
        let inner = fontdue::Font::from_bytes(bytes, settings).map_err(str::to_string)?;
        Ok(Self { inner, size })
    }

    /// Point size in logical pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Rasterizes a single line of text into a coverage surface.
    ///
    /// Layout happens at `size * scale` physical pixels; the surface is sized
    /// to the line box (advance extent x line height). Empty text yields an
    /// empty surface. A line box larger than [`MAX_SURFACE_DIMENSION`] is an
    /// error and nothing is allocated.
    pub fn rasterize(
        &self,
        text: &str,
        color: Color,
        mode: RenderMode,
        scale: f32,
    ) -> Result<TextSurface, RasterizeError> {
        let px = self.size * scale.max(0.01);

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.inner], &TextStyle::new(text, px, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Ok(TextSurface::new(0, 0, color, mode));
        }

        // Pen position after each glyph, not the bitmap edge, so trailing
        // spaces and negative bearings still count toward the width.
        let width = glyphs
            .iter()
            .map(|g| {
                let m = self.inner.metrics_indexed(g.key.glyph_index, px);
                g.x - m.xmin as f32 + m.advance_width
            })
            .fold(0.0f32, f32::max)
            .ceil();
        let height = layout.height().ceil();
        let (width, height) = check_surface_size(width, height)?;

        let mut surface = TextSurface::new(width, height, color, mode);

        for g in glyphs {
            if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                continue;
            }
            let (metrics, bitmap) = self.inner.rasterize_config(g.key);
            surface.composite(
                g.x.round() as i32,
                g.y.round() as i32,
                metrics.width as u32,
                metrics.height as u32,
                &bitmap,
            );
        }

        Ok(surface)
    }
}

fn check_size(size: f32) -> Result<(), FontLoadError> {
    if size.is_finite() && size > 0.0 && size <= MAX_FONT_SIZE {
        Ok(())
    } else {
        Err(FontLoadError::InvalidSize(size))
    }
}

fn check_surface_size(width: f32, height: f32) -> Result<(u32, u32), RasterizeError> {
    let fits = |v: f32| v.is_finite() && v >= 0.0 && v <= MAX_SURFACE_DIMENSION as f32;
    if fits(width) && fits(height) {
        Ok((width as u32, height as u32))
    } else {
        Err(RasterizeError::TooLarge { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::find_system_font;

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = Font::from_bytes(b"definitely not a font", 24.0).err().unwrap();
        assert!(matches!(err, FontLoadError::Parse { path: None, .. }));
    }

    #[test]
    fn out_of_range_size_is_rejected() {
        for size in [0.0, -3.0, f32::NAN, f32::INFINITY, MAX_FONT_SIZE + 1.0, 1.0e6] {
            let err = Font::from_bytes(&[], size).err().unwrap();
            assert!(matches!(err, FontLoadError::InvalidSize(_)), "size {size}");
        }
    }

    #[test]
    fn max_size_is_accepted_by_size_check() {
        assert!(check_size(MAX_FONT_SIZE).is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("hud-engine-no-such-font.ttf");
        let err = Font::open(&path, 24.0).err().unwrap();
        match err {
            FontLoadError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected io error, got {other}"),
        }
    }

    #[test]
    fn io_error_exposes_source() {
        let path = std::env::temp_dir().join("hud-engine-no-such-font.ttf");
        let err = Font::open(&path, 24.0).err().unwrap();
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("hud-engine-no-such-font.ttf"));
    }

    // ── surface size limit ────────────────────────────────────────────────

    #[test]
    fn surface_size_within_limit_is_accepted() {
        assert_eq!(check_surface_size(131.0, 28.0), Ok((131, 28)));
        let max = MAX_SURFACE_DIMENSION as f32;
        assert_eq!(check_surface_size(max, max), Ok((MAX_SURFACE_DIMENSION, MAX_SURFACE_DIMENSION)));
    }

    #[test]
    fn surface_size_over_limit_is_rejected() {
        let over = MAX_SURFACE_DIMENSION as f32 + 1.0;
        assert!(check_surface_size(over, 28.0).is_err());
        assert!(check_surface_size(131.0, over).is_err());
        assert!(check_surface_size(6.8e12, 1.2e6).is_err());
        assert!(check_surface_size(f32::INFINITY, 28.0).is_err());
    }

    // ── rasterization with an installed font ──────────────────────────────

    /// Loads an installed system font, or reports the skip on stderr.
    fn system_font(test: &str, size: f32) -> Option<Font> {
        let font = find_system_font(|p| std::path::Path::new(p).is_file())
            .and_then(|p| Font::open(p, size).ok());
        if font.is_none() {
            eprintln!("{test}: skipped, no system font installed");
        }
        font
    }

    #[test]
    fn solid_rasterization_is_hard_edged() {
        let Some(font) = system_font("solid_rasterization_is_hard_edged", 24.0) else { return; };
        let s = font.rasterize("Health: 100", Color::WHITE, RenderMode::Solid, 1.0).unwrap();
        assert!(!s.is_empty());
        assert!(s.width() > s.height());
        assert!(s.pixels().iter().all(|&c| c == 0 || c == 255));
        assert!(s.pixels().contains(&255));
    }

    #[test]
    fn rasterization_scales_with_factor() {
        let Some(font) = system_font("rasterization_scales_with_factor", 24.0) else { return; };
        let one = font.rasterize("Health: 100", Color::WHITE, RenderMode::Blended, 1.0).unwrap();
        let two = font.rasterize("Health: 100", Color::WHITE, RenderMode::Blended, 2.0).unwrap();
        assert!(two.width() > one.width() * 3 / 2);
        assert!(two.height() > one.height() * 3 / 2);
    }

    #[test]
    fn empty_text_gives_empty_surface() {
        let Some(font) = system_font("empty_text_gives_empty_surface", 24.0) else { return; };
        assert!(font.rasterize("", Color::WHITE, RenderMode::Solid, 1.0).unwrap().is_empty());
    }

    #[test]
    fn oversized_line_is_an_error_not_an_allocation() {
        let Some(font) = system_font("oversized_line_is_an_error_not_an_allocation", MAX_FONT_SIZE)
        else {
            return;
        };
        // 1024 px * 64 puts the line box far beyond the surface limit.
        let err = font
            .rasterize("Health: 100", Color::WHITE, RenderMode::Solid, 64.0)
            .err()
            .unwrap();
        assert!(matches!(err, RasterizeError::TooLarge { .. }));
    }
}
