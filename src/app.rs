use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{WindowAttributes, WindowId, WindowLevel};

use crate::cli::Cli;
use crate::controls;
use crate::core::layout::{BODY_FAMILY, DISPLAY_FAMILY};
use crate::core::{
    render, Action, CanvasSize, EguiCanvas, FontRegistry, LocalClock, RepeatingTimer,
    SurfaceRenderer, TimeSource, WindowContext, WindowDimensions, WinitController,
};
use crate::shell::{ClockShell, Outcome};
use crate::window::Window;

// === Constants ===

const WINDOW_TITLE: &str = "Clock Face";
const INITIAL_WINDOW_WIDTH: u32 = 620;
const INITIAL_WINDOW_HEIGHT: u32 = 320;

/// Everything that exists only while the window is alive
struct Frontend {
    window: Window,
    surface: SurfaceRenderer,
    egui_state: egui_winit::State,
}

/// The clock application driven by the winit event loop
pub struct ClockApp {
    cli: Cli,
    fonts: FontRegistry,
    egui_ctx: egui::Context,
    frontend: Option<Frontend>,
    shell: ClockShell,
    controller: WinitController,
    timer: RepeatingTimer,
    clock: LocalClock,
    pointer_over_controls: bool,
    startup_error: Option<anyhow::Error>,
}

impl ClockApp {
    pub fn new(cli: Cli) -> Self {
        let mut fonts = FontRegistry::discover(&[DISPLAY_FAMILY, BODY_FAMILY]);
        if let Some(path) = &cli.display_font {
            fonts = fonts.with_override(DISPLAY_FAMILY, path);
        }

        let egui_ctx = egui::Context::default();
        fonts.install(&egui_ctx);

        let shell = if cli.desktop {
            ClockShell::desktop()
        } else {
            ClockShell::default()
        };

        Self {
            cli,
            fonts,
            egui_ctx,
            frontend: None,
            shell,
            controller: WinitController::default(),
            timer: RepeatingTimer::every_second(),
            clock: LocalClock,
            pointer_over_controls: false,
            startup_error: None,
        }
    }

    /// Error that stopped the event loop during startup, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.startup_error.take()
    }

    fn window_attributes(&self, event_loop: &ActiveEventLoop) -> WindowAttributes {
        let attributes = winit::window::Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT))
            .with_resizable(true)
            .with_transparent(true)
            .with_decorations(self.shell.state().decorated);

        if !self.cli.desktop {
            return attributes;
        }

        let attributes = attributes.with_window_level(WindowLevel::AlwaysOnBottom);
        match event_loop.primary_monitor() {
            Some(monitor) => attributes
                .with_position(monitor.position())
                .with_inner_size(monitor.size()),
            None => {
                log::warn!("no primary monitor reported, desktop mode keeps the default size");
                attributes
            }
        }
    }

    fn create_frontend(&self, event_loop: &ActiveEventLoop) -> Result<Frontend> {
        let window = event_loop
            .create_window(self.window_attributes(event_loop))
            .map_err(|e| anyhow!("failed to create window: {e}"))?;
        let window = Arc::new(window);

        let surface = SurfaceRenderer::new(window.clone())?;
        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        Ok(Frontend {
            window: Window::new(window),
            surface,
            egui_state,
        })
    }

    /// Route an action through the shell, ignoring drags that start on the controls
    fn handle_action(&mut self, action: Action, event_loop: &ActiveEventLoop) {
        if action == Action::BeginDrag && self.pointer_over_controls {
            return;
        }

        let Some(frontend) = &self.frontend else {
            return;
        };

        if self.shell.apply(action, &frontend.window) == Outcome::Exit {
            log::info!("quit requested");
            event_loop.exit();
            return;
        }
        frontend.window.request_redraw();
    }

    fn resize(&mut self, dimensions: WindowDimensions) {
        if let Some(frontend) = self.frontend.as_mut() {
            frontend.surface.resize(dimensions);
            frontend.window.request_redraw();
        }
    }

    /// One frame: capture the time, paint the face and controls, present
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(frontend) = self.frontend.as_mut() else {
            return;
        };

        let dimensions = frontend.window.dimensions();
        let raw_input = frontend.egui_state.take_egui_input(frontend.window.inner());
        let now = self.clock.now();
        let fonts = &self.fonts;
        let shell = &self.shell;
        let show_controls = !self.shell.is_desktop();
        let mut clicked = None;

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            let ppp = ctx.pixels_per_point();
            let size = CanvasSize::new(
                dimensions.width as f32 / ppp,
                dimensions.height as f32 / ppp,
            );

            let painter = ctx.layer_painter(egui::LayerId::background());
            render(&mut EguiCanvas::new(&painter, fonts), size, &now);

            if show_controls {
                clicked = controls::show(ctx, shell);
            }
        });
        self.pointer_over_controls = self.egui_ctx.is_pointer_over_area();

        let egui::FullOutput {
            platform_output,
            textures_delta,
            shapes,
            pixels_per_point,
            ..
        } = full_output;
        frontend
            .egui_state
            .handle_platform_output(frontend.window.inner(), platform_output);

        match frontend
            .surface
            .present(&self.egui_ctx, shapes, &textures_delta, pixels_per_point)
        {
            Ok(true) => {}
            Ok(false) => frontend.window.request_redraw(),
            Err(e) => log::error!("render error: {e:#}"),
        }

        if let Some(action) = clicked {
            self.handle_action(action, event_loop);
        }
    }
}

impl ApplicationHandler for ClockApp {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if matches!(cause, StartCause::ResumeTimeReached { .. } | StartCause::WaitCancelled { .. })
            && self.timer.poll(Instant::now())
        {
            log::trace!("tick");
            if let Some(frontend) = &self.frontend {
                frontend.window.request_redraw();
            }
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.frontend.is_some() {
            return;
        }

        match self.create_frontend(event_loop) {
            Ok(frontend) => {
                let dims = frontend.window.dimensions();
                log::info!(
                    "clock window {}x{} (desktop mode: {})",
                    dims.width,
                    dims.height,
                    self.cli.desktop
                );
                frontend.window.request_redraw();
                self.frontend = Some(frontend);
            }
            Err(e) => {
                log::error!("failed to start: {e:#}");
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        // Let egui see the event first so the corner buttons get their clicks
        let consumed = match self.frontend.as_mut() {
            Some(frontend) => {
                let response = frontend
                    .egui_state
                    .on_window_event(frontend.window.inner(), &event);
                if response.repaint {
                    frontend.window.request_redraw();
                }
                response.consumed
            }
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.resize(WindowDimensions::new(size.width, size.height))
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            ref other if !consumed => {
                if let Some(action) = self.controller.process_event(other) {
                    self.handle_action(action, event_loop);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.timer.deadline()));
    }
}
