use super::Vec2;

/// Axis-aligned rectangle (top-left origin).
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

    /// Rectangle of `size` whose center sits at `center`.
    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size * 0.5, size)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Same size, moved so its center is at `center`.
    #[inline]
    pub fn with_center(self, center: Vec2) -> Self {
        Self::from_center(center, self.size)
    }

    /// Origin and size multiplied per axis.
    ///
    /// This is how a logical rectangle is mapped into display space.
    #[inline]
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        Self::from_origin_size(self.origin.scale(sx, sy), self.size.scale(sx, sy))
    }

    /// Shrinks the rectangle horizontally by `dx` on both sides.
    ///
    /// Width never goes below zero.
    #[inline]
    pub fn inset_x(self, dx: f32) -> Self {
        Rect::new(
            self.origin.x + dx,
            self.origin.y,
            (self.size.x - dx * 2.0).max(0.0),
            self.size.y,
        )
    }

    /// Grows (positive) or shrinks (negative) the rectangle around its center.
    #[inline]
    pub fn inflate(self, dx: f32, dy: f32) -> Self {
        Rect::new(
            self.origin.x - dx * 0.5,
            self.origin.y - dy * 0.5,
            self.size.x + dx,
            self.size.y + dy,
        )
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = (a.origin.x + a.size.x).min(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).min(b.origin.y + b.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── centering ─────────────────────────────────────────────────────────

    #[test]
    fn from_center_places_origin_at_half_extent() {
        let rect = Rect::from_center(Vec2::new(640.0, 360.0), Vec2::new(300.0, 100.0));
        assert_eq!(rect, r(490.0, 310.0, 300.0, 100.0));
        assert_eq!(rect.center(), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn with_center_keeps_size() {
        let rect = r(0.0, 0.0, 40.0, 20.0).with_center(Vec2::new(100.0, 100.0));
        assert_eq!(rect, r(80.0, 90.0, 40.0, 20.0));
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn scale_multiplies_origin_and_size() {
        let rect = r(100.0, 100.0, 300.0, 100.0).scale(1.25, 1.25);
        assert_eq!(rect, r(125.0, 125.0, 375.0, 125.0));
    }

    #[test]
    fn scale_is_per_axis() {
        let rect = r(10.0, 10.0, 10.0, 10.0).scale(2.0, 0.5);
        assert_eq!(rect, r(20.0, 5.0, 20.0, 5.0));
    }

    // ── inset / inflate ───────────────────────────────────────────────────

    #[test]
    fn inset_x_shrinks_both_sides() {
        assert_eq!(r(0.0, 5.0, 300.0, 30.0).inset_x(20.0), r(20.0, 5.0, 260.0, 30.0));
    }

    #[test]
    fn inset_x_never_negative() {
        assert_eq!(r(0.0, 0.0, 10.0, 10.0).inset_x(20.0).size.x, 0.0);
    }

    #[test]
    fn inflate_grows_around_center() {
        let rect = r(10.0, 10.0, 20.0, 20.0).inflate(10.0, -4.0);
        assert_eq!(rect, r(5.0, 12.0, 30.0, 16.0));
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(-1.0, 5.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, -1.0)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let i = r(0.0, 0.0, 10.0, 10.0).intersect(r(5.0, 5.0, 10.0, 10.0));
        assert_eq!(i, Some(r(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        assert!(r(0.0, 0.0, 10.0, 10.0).intersect(r(10.0, 0.0, 10.0, 10.0)).is_none());
    }
}
