mod menu;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use glint_engine::core::{App, AppControl, FrameCtx};
use glint_engine::device::GpuInit;
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_engine::paint::Color;
use glint_engine::raster::Canvas;
use glint_engine::screen::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
use glint_engine::text::FontId;
use glint_engine::window::{Runtime, RuntimeConfig};
use glint_ui::scene::{UiInput, UiScene};

use menu::{MenuAction, SettingsMenu};
use settings::{JsonSettings, SettingsStore};

const SETTINGS_ENV: &str = "GLINT_SETTINGS";
const FONT_ENV: &str = "GLINT_FONT";
const DEFAULT_SETTINGS: &str = "config/settings.json";

const FONT_CANDIDATES: &[&str] = &[
    "assets/font.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

struct MenuApp {
    settings: JsonSettings,
    ui: UiScene,
    canvas: Canvas,
    font: FontId,
    menu: SettingsMenu,
}

impl App for MenuApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let input = UiInput::from_frame(ctx.input, ctx.input_frame, ctx.time.elapsed);
        let aspect = ctx.aspect_ratio();

        let actions = self
            .menu
            .frame(&mut self.ui, &mut self.settings, &input, aspect, ctx.time.fps())
            .unwrap_or_else(|e| {
                log::error!("failed to save settings: {e}");
                Vec::new()
            });

        self.canvas.clear(Color::WHITE);
        self.canvas.draw(&self.ui.draw_list, &self.ui.font_system);

        for action in actions {
            match action {
                MenuAction::Resize { width, height, vsync } => {
                    ctx.runtime.resize(width, height, vsync);
                    // The screen is rebuilt for the new display.
                    self.menu = SettingsMenu::new(&self.settings, self.font);
                }
                MenuAction::SetFpsLimit(fps) => ctx.runtime.set_fps_limit(fps),
                MenuAction::Quit => return AppControl::Exit,
            }
        }

        ctx.present(&self.canvas)
    }
}

fn load_font(ui: &mut UiScene) -> Result<FontId> {
    if let Some(path) = std::env::var_os(FONT_ENV).map(PathBuf::from) {
        return ui
            .load_font_file(&path)
            .with_context(|| format!("loading font from {FONT_ENV}={}", path.display()));
    }

    for path in FONT_CANDIDATES {
        match ui.load_font_file(path) {
            Ok(id) => {
                log::info!("using font {path}");
                return Ok(id);
            }
            Err(e) => log::debug!("font candidate skipped: {e}"),
        }
    }
    bail!("no usable font found; set {FONT_ENV} to a .ttf/.otf file")
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let settings_path = std::env::var_os(SETTINGS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS));
    let settings = JsonSettings::load(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path.display()))?;
    log::info!("settings file: {}", settings.path().display());

    let mut ui = UiScene::new();
    let font = load_font(&mut ui)?;
    let menu = SettingsMenu::new(&settings, font);

    let video = settings.video().clone();
    let config = RuntimeConfig {
        title: "Glint".to_string(),
        logical_size: (LOGICAL_WIDTH, LOGICAL_HEIGHT),
        display_size: (video.width, video.height),
        vsync: video.vsync,
        fps_limit: Some(video.fps),
    };
    let gpu_init = GpuInit { vsync: video.vsync, ..GpuInit::default() };

    let app = MenuApp {
        settings,
        ui,
        canvas: Canvas::new(LOGICAL_WIDTH, LOGICAL_HEIGHT),
        font,
        menu,
    };
    Runtime::run(config, gpu_init, app)
}
