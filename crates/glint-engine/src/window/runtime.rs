use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::render::CanvasBlitter;
use crate::screen::{Screen, LOGICAL_HEIGHT, LOGICAL_WIDTH};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Resolution the UI is authored against.
    pub logical_size: (u32, u32),
    /// Initial window size in physical pixels.
    pub display_size: (u32, u32),
    pub vsync: bool,
    /// Frame cap; `None` or `Some(0)` renders as fast as presentation allows.
    pub fps_limit: Option<u32>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "glint".to_string(),
            logical_size: (LOGICAL_WIDTH, LOGICAL_HEIGHT),
            display_size: (LOGICAL_WIDTH, LOGICAL_HEIGHT),
            vsync: true,
            fps_limit: Some(60),
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current frame returns, so a
/// resize requested mid-frame never changes the screen under the caller.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }

    /// Resizes the window to `width`×`height` physical pixels and switches
    /// the present mode.
    pub fn resize(&mut self, width: u32, height: u32, vsync: bool) {
        self.commands.push(Command::Resize { width, height, vsync });
    }

    pub fn set_fps_limit(&mut self, fps: Option<u32>) {
        self.commands.push(Command::SetFpsLimit(fps));
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Exit,
    Resize { width: u32, height: u32, vsync: bool },
    SetFpsLimit(Option<u32>),
}

/// Minimum time between frames for a frame cap.
pub fn frame_interval(fps: Option<u32>) -> Option<Duration> {
    match fps {
        Some(n) if n > 0 => Some(Duration::from_secs_f64(1.0 / n as f64)),
        _ => None,
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until it exits or the window closes.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
    screen: Screen,
    blitter: CanvasBlitter,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    fps_limit: Option<u32>,
    next_frame: Instant,
    exit_requested: bool,

    /// Setup error reported from `Runtime::run` after the loop ends.
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            fps_limit: config.fps_limit,
            config,
            gpu_init,
            app,
            window: None,
            next_frame: Instant::now(),
            exit_requested: false,
            fatal: None,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let (w, h) = self.config.display_size;
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(w.max(1), h.max(1)))
            .with_resizable(false);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let size = window.inner_size();
        log::info!("window created ({}x{})", size.width, size.height);

        let gpu_init = GpuInit { vsync: self.config.vsync, ..self.gpu_init.clone() };

        WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            screen: Screen::new(self.config.logical_size, (size.width, size.height), self.config.vsync),
            blitter: CanvasBlitter::new(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")
    }

    fn apply_commands(&mut self, event_loop: &ActiveEventLoop, mut ctx: RuntimeCtx) {
        for cmd in ctx.commands.drain(..) {
            match cmd {
                Command::Exit => self.exit_requested = true,
                Command::SetFpsLimit(fps) => {
                    log::debug!("frame cap set to {fps:?}");
                    self.fps_limit = fps;
                }
                Command::Resize { width, height, vsync } => {
                    let Some(entry) = self.window.as_mut() else { continue; };
                    entry.with_mut(|fields| {
                        fields.screen.resize(width, height, vsync);
                        fields.gpu.set_vsync(vsync);
                        // Some platforms apply the size synchronously and
                        // never send `Resized`.
                        if let Some(applied) = fields.window.request_inner_size(PhysicalSize::new(width, height)) {
                            fields.gpu.resize(applied);
                        }
                    });
                    log::info!("resize requested: {width}x{height}, vsync {vsync}");
                }
            }
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let mut runtime_ctx = RuntimeCtx::default();
        let mut app_control = AppControl::Continue;

        if let Some(interval) = frame_interval(self.fps_limit) {
            self.next_frame = Instant::now() + interval;
        }

        let (app, window) = (&mut self.app, &mut self.window);
        if let Some(entry) = window.as_mut() {
            entry.with_mut(|fields| {
                let time = fields.clock.tick();

                // Scope to ensure `ctx` is dropped before mutating frame state.
                {
                    let mut ctx = FrameCtx {
                        window: fields.window,
                        gpu: fields.gpu,
                        blitter: fields.blitter,
                        screen: fields.screen,
                        input: fields.input_state,
                        input_frame: fields.input_frame,
                        time,
                        runtime: &mut runtime_ctx,
                    };
                    app_control = app.on_frame(&mut ctx);
                }

                // Input is never carried over to the next frame.
                fields.input_frame.clear();
            });
        }

        if app_control == AppControl::Exit {
            runtime_ctx.exit();
        }
        self.apply_commands(event_loop, runtime_ctx);
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.window = Some(entry);
            }
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                self.fatal = Some(e);
                self.exit_requested = true;
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }
        let Some(entry) = self.window.as_ref() else { return; };

        match frame_interval(self.fps_limit) {
            Some(_) if Instant::now() < self.next_frame => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
            }
            _ => {
                event_loop.set_control_flow(ControlFlow::Wait);
                entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if let Some(entry) = self.window.as_mut() {
            entry.with_mut(|fields| {
                if let Some(ev) = translate_window_event(&event) {
                    fields.input_state.apply_event(fields.input_frame, ev);
                }
            });
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.exit_requested = true;
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested");
                self.window = None;
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.window.as_mut() {
                    entry.with_mut(|fields| {
                        fields.gpu.resize(*new_size);
                        let vsync = fields.screen.vsync();
                        fields.screen.resize(new_size.width, new_size.height, vsync);
                        fields.window.request_redraw();
                    });
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_mut() {
                    entry.with_mut(|fields| {
                        let size = fields.window.inner_size();
                        fields.gpu.resize(size);
                        let vsync = fields.screen.vsync();
                        fields.screen.resize(size.width, size.height, vsync);
                    });
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}
