//! Glint UI: retained widgets painted into a fixed logical canvas.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use glint_ui::prelude::*;
//!
//! let mut ui = UiScene::new();
//! let font = ui.load_font_file("assets/font.ttf")?;
//! let mut ok = Button::new(Vec2::new(640.0, 360.0), "OK", font, ButtonConfig::default());
//!
//! // In your frame callback:
//! let input = UiInput::from_frame(ctx.input, ctx.input_frame, ctx.time.elapsed);
//! let events = ui.frame(&mut [(0, &mut ok as &mut dyn Widget)], &input, ctx.aspect_ratio());
//! canvas.clear(Color::WHITE);
//! canvas.draw(&ui.draw_list, &ui.font_system);
//! ctx.present(&canvas);
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type. Compose [`WidgetAttrs`](attrs::WidgetAttrs)
//! to get the shared box, shadow and hover handling.

pub mod attrs;
pub mod event;
pub mod painter;
pub mod scene;
pub mod text;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI. Import this in your component files.
pub mod prelude {
    pub use crate::attrs::{Border, BoxStyle, Shadow, WidgetAttrs};
    pub use crate::event::WidgetEvent;
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::text::{FontStyle, LabelBorder};
    pub use crate::widget::Widget;
    pub use crate::widgets::{
        button::{Button, ButtonConfig, ButtonState},
        label::{Label, LabelConfig},
        slider::{Slider, SliderConfig, TrackMode},
        textbox::{TextBox, TextBoxConfig},
    };

    // Re-export the engine primitives everyone needs.
    pub use glint_engine::coords::{Rect, Vec2};
    pub use glint_engine::paint::Color;
    pub use glint_engine::screen::AspectRatio;
    pub use glint_engine::text::FontId;
}

#[cfg(test)]
pub(crate) mod testing {
    use glint_engine::coords::Vec2;
    use glint_engine::scene::{DrawCmd, DrawList, TextCmd};
    use glint_engine::text::{FontId, MeasureText};

    /// Every char is 10 px wide; line height equals the font size.
    pub struct FixedAdvance;

    impl MeasureText for FixedAdvance {
        fn measure(&self, text: &str, _font: FontId, size: f32) -> Vec2 {
            if text.is_empty() {
                return Vec2::zero();
            }
            Vec2::new(text.chars().count() as f32 * 10.0, size)
        }
    }

    pub fn font() -> FontId {
        FontId::from_raw(0)
    }

    pub fn text_cmds(list: &DrawList) -> Vec<&TextCmd> {
        list.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }
}
