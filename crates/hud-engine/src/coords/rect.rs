use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Returns `true` when the rectangle can be drawn: finite, non-empty.
    #[inline]
    pub fn is_drawable(self) -> bool {
        self.is_finite() && !self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn max_is_origin_plus_size() {
        assert_eq!(r(10.0, 10.0, 120.0, 28.0).max(), Vec2::new(130.0, 38.0));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_negative_size() {
        assert!(r(0.0, 0.0, -1.0, 5.0).is_empty());
    }

    #[test]
    fn drawable_requires_finite_and_area() {
        assert!(r(10.0, 10.0, 1.0, 1.0).is_drawable());
        assert!(!r(f32::NAN, 10.0, 1.0, 1.0).is_drawable());
        assert!(!r(10.0, 10.0, f32::INFINITY, 1.0).is_drawable());
        assert!(!r(10.0, 10.0, 0.0, 1.0).is_drawable());
    }
}
