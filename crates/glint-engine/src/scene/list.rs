use crate::coords::Rect;

use super::DrawCmd;

/// A single draw item: command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Clip rect in logical pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for a frame.
///
/// Items are painted in insertion order: widgets that draw later appear on top.
///
/// # Clipping
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope
/// draw commands to a rect. Clips are intersected with the current parent.
///
/// ```ignore
/// draw_list.push_clip(text_area);
/// // ... push text ...
/// draw_list.pop_clip();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,

    /// Stack of active clip rects (logical pixels).
    /// The top is always the current effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.clip_stack.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a draw command. The item inherits the current clip rect.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem {
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });
    }

    /// Begins a clip region. All draw commands pushed until [`pop_clip`](Self::pop_clip)
    /// are clipped to `rect` (intersected with any parent clip rect).
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect.normalized(),
            // No overlap: a zero-area rect makes the rasterizer skip the item.
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent clip region started by [`push_clip`](Self::push_clip).
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn items_keep_insertion_order() {
        let mut list = DrawList::new();
        list.push_solid_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        list.push_circle(Vec2::new(5.0, 5.0), 2.0, Color::WHITE);
        assert!(matches!(list.items()[0].cmd, DrawCmd::Rect(_)));
        assert!(matches!(list.items()[1].cmd, DrawCmd::Circle(_)));
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        list.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        list.push_solid_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        list.pop_clip();
        list.push_solid_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        list.pop_clip();
        list.push_solid_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);

        assert_eq!(list.items()[0].clip_rect, Some(Rect::new(50.0, 50.0, 50.0, 50.0)));
        assert_eq!(list.items()[1].clip_rect, Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(list.items()[2].clip_rect, None);
    }

    #[test]
    fn disjoint_clip_becomes_empty() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(20.0, 20.0, 10.0, 10.0));
        list.push_solid_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        let clip = list.items()[0].clip_rect.unwrap();
        assert!(clip.is_empty());
    }

    #[test]
    fn clear_resets_items_and_clips() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_solid_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        list.clear();
        assert!(list.is_empty());
        list.push_solid_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        assert_eq!(list.items()[0].clip_rect, None);
    }
}
