use glint_ui::prelude::*;

use crate::settings::{SettingsError, SettingsStore};

pub const RESOLUTIONS: [(u32, u32); 3] = [(1280, 720), (1600, 900), (1920, 1080)];
pub const FPS_CAPS: [u32; 4] = [30, 60, 120, 144];

/// Something the menu needs the runtime to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Resize { width: u32, height: u32, vsync: bool },
    SetFpsLimit(Option<u32>),
    Quit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Item {
    Title,
    VolumeLabel,
    Volume,
    Vsync,
    FpsCap,
    ShowFps,
    Resolution(usize),
    Name,
    Password,
    Fps,
    Quit,
}

/// The settings screen: every control reads from and writes to the store.
pub struct SettingsMenu {
    title: Label,
    volume_label: Label,
    volume: Slider,
    vsync: Button,
    fps_cap: Button,
    show_fps: Button,
    resolutions: Vec<Button>,
    name: TextBox,
    password: TextBox,
    fps: Label,
    quit: Button,
}

fn toggle_style() -> ButtonConfig {
    let style = BoxStyle::default()
        .size(340.0, 70.0)
        .colors(Color::rgb(200, 200, 200), Color::rgb(170, 170, 170))
        .radius(12.0)
        .shadow(Shadow { offset: Vec2::new(4.0, 4.0), color: Color::rgb(60, 60, 60) });
    ButtonConfig::default().style(style).font_size(36.0)
}

fn on_off(store: &dyn SettingsStore, on: bool) -> &str {
    store.text(if on { "on" } else { "off" })
}

impl SettingsMenu {
    pub fn new(store: &dyn SettingsStore, font: FontId) -> Self {
        let resolutions = RESOLUTIONS
            .iter()
            .enumerate()
            .map(|(i, (w, h))| {
                let style = toggle_style();
                let style = ButtonConfig { style: style.style.size(260.0, 70.0), ..style };
                Button::new(Vec2::new(340.0 + 300.0 * i as f32, 420.0), format!("{w}x{h}"), font, style)
            })
            .collect();

        let field = |placeholder: &str, password: bool, x: f32| {
            let config = TextBoxConfig::default()
                .style(
                    BoxStyle::default()
                        .size(400.0, 70.0)
                        .colors(Color::WHITE, Color::WHITE)
                        .border(Border { thickness: 2.0, color: Color::BLACK }),
                )
                .font_size(36.0)
                .placeholder(placeholder)
                .placeholder_color(Color::rgb(150, 150, 150))
                .password(password)
                .max_chars(32);
            TextBox::new(Vec2::new(x, 540.0), font, config)
        };

        let mut menu = Self {
            title: Label::new(
                store.text("title"),
                Vec2::new(640.0, 70.0),
                font,
                LabelConfig::default().font_size(72.0).centered(true, true),
            ),
            volume_label: Label::new(
                store.text("volume"),
                Vec2::new(200.0, 200.0),
                font,
                LabelConfig::default().font_size(40.0).centered(false, true),
            ),
            volume: Slider::new(
                Vec2::new(760.0, 200.0),
                store.audio().volume,
                SliderConfig::default().style(
                    BoxStyle::default()
                        .size(400.0, 30.0)
                        .colors(Color::rgb(100, 100, 100), Color::rgb(120, 120, 120))
                        .radius(20.0),
                ),
            ),
            vsync: Button::new(Vec2::new(240.0, 310.0), "", font, toggle_style()),
            fps_cap: Button::new(Vec2::new(640.0, 310.0), "", font, toggle_style()),
            show_fps: Button::new(Vec2::new(1040.0, 310.0), "", font, toggle_style()),
            resolutions,
            name: field(store.text("name"), false, 420.0),
            password: field(store.text("password"), true, 860.0),
            fps: Label::new("", Vec2::new(10.0, 10.0), font, LabelConfig::default().font_size(28.0)),
            quit: Button::new(Vec2::new(640.0, 650.0), store.text("quit"), font, toggle_style()),
        };
        menu.name.set_text(store.document().game_data.player_name.as_str());
        menu.refresh(store);
        menu
    }

    /// Re-reads every store-backed label and the slider position.
    pub fn refresh(&mut self, store: &dyn SettingsStore) {
        let video = store.video();
        self.vsync.set_label(format!("{}: {}", store.text("vsync"), on_off(store, video.vsync)));
        self.fps_cap.set_label(format!("{}: {}", store.text("fps_cap"), video.fps));
        self.show_fps.set_label(format!("{}: {}", store.text("show_fps"), on_off(store, video.show_fps)));
        self.volume.set_value(store.audio().volume);
    }

    /// Draws the menu into `ui` and applies this frame's input.
    pub fn frame(
        &mut self,
        ui: &mut UiScene,
        store: &mut dyn SettingsStore,
        input: &UiInput,
        aspect: AspectRatio,
        fps: f32,
    ) -> Result<Vec<MenuAction>, SettingsError> {
        let show_fps = store.video().show_fps;
        self.fps.set_text(format!("FPS: {fps:.0}"));

        let mut widgets: Vec<(Item, &mut dyn Widget)> = vec![
            (Item::Title, &mut self.title as &mut dyn Widget),
            (Item::VolumeLabel, &mut self.volume_label as &mut dyn Widget),
            (Item::Volume, &mut self.volume as &mut dyn Widget),
            (Item::Vsync, &mut self.vsync as &mut dyn Widget),
            (Item::FpsCap, &mut self.fps_cap as &mut dyn Widget),
            (Item::ShowFps, &mut self.show_fps as &mut dyn Widget),
        ];
        for (i, button) in self.resolutions.iter_mut().enumerate() {
            widgets.push((Item::Resolution(i), button as &mut dyn Widget));
        }
        widgets.push((Item::Name, &mut self.name as &mut dyn Widget));
        widgets.push((Item::Password, &mut self.password as &mut dyn Widget));
        widgets.push((Item::Quit, &mut self.quit as &mut dyn Widget));
        if show_fps {
            widgets.push((Item::Fps, &mut self.fps as &mut dyn Widget));
        }

        let events = ui.frame(&mut widgets, input, aspect);
        drop(widgets);

        let mut actions = Vec::new();
        let changed = !events.is_empty();
        for (item, event) in events {
            if let Some(action) = self.apply(item, event, store)? {
                actions.push(action);
            }
        }
        if changed {
            self.refresh(store);
        }
        Ok(actions)
    }

    fn apply(
        &mut self,
        item: Item,
        event: WidgetEvent,
        store: &mut dyn SettingsStore,
    ) -> Result<Option<MenuAction>, SettingsError> {
        let video = store.video().clone();
        let action = match (item, event) {
            (Item::Volume, WidgetEvent::ValueChanged(v)) => {
                if store.audio().volume != v {
                    store.set_volume(v)?;
                }
                None
            }
            (Item::Vsync, WidgetEvent::Clicked) => {
                let vsync = !video.vsync;
                store.set_vsync(vsync)?;
                log::info!("vsync {}", if vsync { "on" } else { "off" });
                Some(MenuAction::Resize { width: video.width, height: video.height, vsync })
            }
            (Item::FpsCap, WidgetEvent::Clicked) => {
                let next = FPS_CAPS
                    .iter()
                    .copied()
                    .find(|&cap| cap > video.fps)
                    .unwrap_or(FPS_CAPS[0]);
                store.set_fps(next)?;
                log::info!("fps cap {next}");
                Some(MenuAction::SetFpsLimit(Some(next)))
            }
            (Item::ShowFps, WidgetEvent::Clicked) => {
                store.set_show_fps(!video.show_fps)?;
                None
            }
            (Item::Resolution(i), WidgetEvent::Clicked) => {
                let (width, height) = RESOLUTIONS[i];
                store.set_resolution(width, height, video.vsync)?;
                log::info!("resolution {width}x{height}");
                Some(MenuAction::Resize { width, height, vsync: video.vsync })
            }
            (Item::Name, WidgetEvent::Submitted(name)) => {
                store.set_player_name(&name)?;
                log::info!("player name set to {name:?}");
                None
            }
            (Item::Password, WidgetEvent::Submitted(secret)) => {
                log::debug!("password submitted ({} chars)", secret.chars().count());
                self.password.clear();
                None
            }
            (Item::Quit, WidgetEvent::Clicked) => Some(MenuAction::Quit),
            (item, event) => {
                log::trace!("unhandled {event:?} from {item:?}");
                None
            }
        };
        Ok(action)
    }
}
