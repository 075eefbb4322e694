use crate::paint::Color;

/// How glyph coverage is stored in a [`TextSurface`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RenderMode {
    /// Hard-edged text: coverage is thresholded to fully on or off.
    #[default]
    Solid,
    /// Antialiased text: coverage is kept as rasterized.
    Blended,
}

impl RenderMode {
    /// Coverage at or above this value is "on" in `Solid` mode.
    pub const SOLID_THRESHOLD: u8 = 128;

    #[inline]
    fn apply(self, coverage: u8) -> u8 {
        match self {
            Self::Solid if coverage >= Self::SOLID_THRESHOLD => u8::MAX,
            Self::Solid => 0,
            Self::Blended => coverage,
        }
    }
}

/// CPU-side rasterized text: one coverage byte per pixel plus the text color.
///
/// Rows are tightly packed (`width` bytes per row), top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    color: Color,
    mode: RenderMode,
}

impl TextSurface {
    /// Creates a fully transparent surface.
    pub fn new(width: u32, height: u32, color: Color, mode: RenderMode) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
            color,
            mode,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Composites a `w` x `h` coverage bitmap with its top-left at `(x, y)`.
    ///
    /// Parts outside the surface are clipped. Overlapping glyphs keep the
    /// maximum coverage. A bitmap shorter than `w * h` is ignored.
    pub fn composite(&mut self, x: i32, y: i32, w: u32, h: u32, coverage: &[u8]) {
        if coverage.len() < w as usize * h as usize {
            log::warn!("coverage bitmap smaller than {w}x{h}; skipped");
            return;
        }

        let sw = self.width as i64;
        let sh = self.height as i64;

        for row in 0..h as i64 {
            let dy = y as i64 + row;
            if dy < 0 || dy >= sh {
                continue;
            }
            for col in 0..w as i64 {
                let dx = x as i64 + col;
                if dx < 0 || dx >= sw {
                    continue;
                }
                let src = coverage[(row * w as i64 + col) as usize];
                let dst = &mut self.pixels[(dy * sw + dx) as usize];
                *dst = (*dst).max(self.mode.apply(src));
            }
        }
    }
}
