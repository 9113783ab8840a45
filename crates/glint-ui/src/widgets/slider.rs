use glint_engine::coords::{Rect, Vec2};
use glint_engine::paint::Color;
use glint_engine::screen::AspectRatio;

use crate::attrs::{BoxStyle, WidgetAttrs};
use crate::event::WidgetEvent;
use crate::painter::Painter;
use crate::scene::UiInput;
use crate::widget::Widget;

/// How the marker follows a drag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TrackMode {
    /// Marker sits exactly under the pointer.
    Smooth,
    /// Marker snaps to the position of the reported integer value.
    #[default]
    Quantized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    pub style: BoxStyle,
    /// Horizontal space between the box edge and each end of the track.
    pub padding: f32,
    pub marker_radius: f32,
    pub marker_color: Color,
    /// Full track = `100 * multiplier`.
    pub multiplier: f32,
    /// Track line thickness; `None` hides the line.
    pub line: Option<f32>,
    pub line_color: Color,
    pub mode: TrackMode,
}

impl Default for SliderConfig {
    fn default() -> Self {
        let gray = Color::rgb(100, 100, 100);
        Self {
            style: BoxStyle::default().size(300.0, 30.0).colors(gray, gray).radius(20.0),
            padding: 20.0,
            marker_radius: 8.0,
            marker_color: Color::BLACK,
            multiplier: 1.0,
            line: Some(2.0),
            line_color: Color::BLACK,
            mode: TrackMode::Quantized,
        }
    }
}

impl SliderConfig {
    pub fn style(mut self, v: BoxStyle) -> Self { self.style = v; self }
    pub fn padding(mut self, v: f32) -> Self { self.padding = v; self }
    pub fn marker_radius(mut self, v: f32) -> Self { self.marker_radius = v; self }
    pub fn marker_color(mut self, v: Color) -> Self { self.marker_color = v; self }
    pub fn multiplier(mut self, v: f32) -> Self { self.multiplier = v; self }
    pub fn line(mut self, v: Option<f32>) -> Self { self.line = v; self }
    pub fn line_color(mut self, v: Color) -> Self { self.line_color = v; self }
    pub fn mode(mut self, v: TrackMode) -> Self { self.mode = v; self }
}

/// A horizontal slider reporting an integer in `0..=100 * multiplier`.
///
/// While the pointer is held inside the track (the box minus its padding),
/// the marker follows it and [`update`](Self::update) reports a change on
/// every such frame, even if the value did not move.
///
/// # Example
/// ```rust,ignore
/// let mut volume = Slider::new(Vec2::new(640.0, 200.0), settings.volume(), SliderConfig::default());
///
/// if volume.update(input.pointer, input.pointer_down, aspect) {
///     settings.set_volume(volume.value())?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Slider {
    attrs: WidgetAttrs,
    config: SliderConfig,
    /// Logical pixels from the left end of the track, in `[0, track_width]`.
    pointer_pos: f32,
    value: i32,
}

impl Slider {
    pub fn new(pos: Vec2, value: i32, mut config: SliderConfig) -> Self {
        if config.multiplier <= 0.0 || !config.multiplier.is_finite() {
            log::warn!("slider multiplier {} is not positive, using 1", config.multiplier);
            config.multiplier = 1.0;
        }
        let mut slider = Self {
            attrs: WidgetAttrs::new(pos, config.style.clone()),
            config,
            pointer_pos: 0.0,
            value: 0,
        };
        slider.set_value(value);
        slider
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn pointer_pos(&self) -> f32 {
        self.pointer_pos
    }

    pub fn attrs(&self) -> &WidgetAttrs {
        &self.attrs
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.attrs.set_visible(visible);
        if !visible {
            self.attrs.set_hovered(false);
        }
    }

    /// Track length in logical pixels. Never below 1.
    pub fn track_width(&self) -> f32 {
        (self.attrs.box_rect().size.x - self.config.padding * 2.0).max(1.0)
    }

    /// Largest reportable value, `100 * multiplier`.
    pub fn max_value(&self) -> i32 {
        (100.0 * self.config.multiplier).round() as i32
    }

    /// Moves the marker to represent `value`, clamped to the slider range.
    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(0, self.max_value());
        let track = self.track_width();
        self.pointer_pos = self.position_of(self.value).clamp(0.0, track);
    }

    fn position_of(&self, value: i32) -> f32 {
        value as f32 / self.config.multiplier / 100.0 * self.track_width()
    }

    fn track_rect(&self) -> Rect {
        self.attrs.box_rect().inset_x(self.config.padding)
    }

    pub fn marker_center(&self) -> Vec2 {
        let body = self.attrs.box_rect();
        Vec2::new(body.origin.x + self.config.padding + self.pointer_pos, body.center().y)
    }

    /// Drags the marker; `true` on every frame the pointer drove it.
    ///
    /// `pointer` is in display pixels.
    pub fn update(&mut self, pointer: Option<Vec2>, pointer_down: bool, aspect: AspectRatio) -> bool {
        if !self.attrs.is_visible() {
            return false;
        }

        let hit = self.attrs.hit_rect(aspect);
        self.attrs.set_hovered(pointer.is_some_and(|p| hit.contains(p)));

        let track = aspect.scale_rect(self.track_rect());
        let Some(p) = pointer.filter(|p| pointer_down && on_track(track, *p)) else {
            return false;
        };

        let width = self.track_width();
        let raw = ((p.x - track.origin.x) / aspect.x).clamp(0.0, width);
        self.value = (raw / width * 100.0 * self.config.multiplier).round() as i32;
        self.pointer_pos = match self.config.mode {
            TrackMode::Smooth => raw,
            TrackMode::Quantized => self.position_of(self.value).clamp(0.0, width),
        };
        true
    }
}

// Both track ends are reachable, so a drag can hit 0 and the maximum exactly.
fn on_track(track: Rect, p: Vec2) -> bool {
    let max = track.max();
    p.x >= track.origin.x && p.x <= max.x && p.y >= track.origin.y && p.y < max.y
}

impl Widget for Slider {
    fn draw(&self, painter: &mut Painter<'_>) {
        if !self.attrs.is_visible() {
            return;
        }
        self.attrs.draw_box(painter);

        let center = self.marker_center();
        if let Some(thickness) = self.config.line {
            let track = self.track_rect();
            painter.line(
                Vec2::new(track.origin.x, center.y),
                Vec2::new(track.max().x, center.y),
                thickness,
                self.config.line_color,
            );
        }
        painter.fill_circle(center, self.config.marker_radius, self.config.marker_color);
    }

    fn handle_input(&mut self, input: &UiInput, aspect: AspectRatio) -> Option<WidgetEvent> {
        self.update(input.pointer, input.pointer_down, aspect)
            .then(|| WidgetEvent::ValueChanged(self.value))
    }
}
