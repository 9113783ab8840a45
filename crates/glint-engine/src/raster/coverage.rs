//! Signed-distance coverage helpers.
//!
//! All functions take the pixel center in logical pixels and return a coverage
//! value in `[0, 1]` with a one-pixel anti-aliased edge.

use crate::coords::{Rect, Vec2};

#[inline]
fn edge(d: f32) -> f32 {
    (0.5 - d).clamp(0.0, 1.0)
}

/// Signed distance from `p` to a rounded box.
fn sd_round_box(p: Vec2, rect: Rect, radius: f32) -> f32 {
    let half = rect.size * 0.5;
    let r = radius.clamp(0.0, half.x.min(half.y));
    let c = rect.center();
    let qx = (p.x - c.x).abs() - (half.x - r);
    let qy = (p.y - c.y).abs() - (half.y - r);
    let outside = Vec2::new(qx.max(0.0), qy.max(0.0)).length();
    let inside = qx.max(qy).min(0.0);
    outside + inside - r
}

pub(crate) fn rounded_rect(p: Vec2, rect: Rect, radius: f32) -> f32 {
    edge(sd_round_box(p, rect, radius))
}

/// Outline of `width` drawn inside `rect`.
pub(crate) fn rounded_rect_stroke(p: Vec2, rect: Rect, radius: f32, width: f32) -> f32 {
    let outer = rounded_rect(p, rect, radius);
    let inner_rect = rect.inflate(-2.0 * width, -2.0 * width);
    if inner_rect.is_empty() {
        return outer;
    }
    let inner = rounded_rect(p, inner_rect, (radius - width).max(0.0));
    (outer - inner).clamp(0.0, 1.0)
}

pub(crate) fn circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    edge((p - center).length() - radius)
}

/// Segment with flat ends, `width` thick.
pub(crate) fn line(p: Vec2, from: Vec2, to: Vec2, width: f32) -> f32 {
    let d = to - from;
    let len2 = d.dot(d);
    let half = width.max(1.0) * 0.5;
    if len2 <= f32::EPSILON {
        return circle(p, from, half);
    }
    let t = (p - from).dot(d) / len2;
    let len = len2.sqrt();
    // Distance past the ends along the segment, and across it.
    let along = ((t - 0.5).abs() - 0.5) * len;
    let closest = from + d * t;
    let across = (p - closest).length() - half;
    edge(along.max(across))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn rect_center_is_covered_and_far_point_is_not() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rounded_rect(px(5.0, 5.0), r, 0.0), 1.0);
        assert_eq!(rounded_rect(px(20.0, 5.0), r, 0.0), 0.0);
    }

    #[test]
    fn rounded_corner_is_cut() {
        let r = Rect::new(0.0, 0.0, 40.0, 40.0);
        assert_eq!(rounded_rect(px(0.5, 0.5), r, 0.0), 1.0);
        assert_eq!(rounded_rect(px(0.5, 0.5), r, 15.0), 0.0);
    }

    #[test]
    fn stroke_leaves_interior_empty() {
        let r = Rect::new(0.0, 0.0, 40.0, 40.0);
        assert_eq!(rounded_rect_stroke(px(20.0, 20.0), r, 0.0, 2.0), 0.0);
        assert_eq!(rounded_rect_stroke(px(0.5, 20.0), r, 0.0, 2.0), 1.0);
    }

    #[test]
    fn line_covers_its_body_only() {
        let from = px(0.0, 10.0);
        let to = px(100.0, 10.0);
        assert_eq!(line(px(50.0, 10.0), from, to, 2.0), 1.0);
        assert_eq!(line(px(50.0, 14.0), from, to, 2.0), 0.0);
        assert_eq!(line(px(110.0, 10.0), from, to, 2.0), 0.0);
    }

    #[test]
    fn circle_edge_is_partial() {
        let c = circle(px(10.0, 0.0), px(0.0, 0.0), 10.0);
        assert!(c > 0.0 && c < 1.0);
    }
}
