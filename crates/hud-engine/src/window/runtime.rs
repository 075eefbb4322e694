use anyhow::{bail, Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, InitCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};

use super::placement::centered_position;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Center the window on its monitor after creation (best effort; some
    /// platforms, e.g. Wayland, ignore client positioning).
    pub centered: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "hud".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            centered: true,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the window is closed or the app exits.
    ///
    /// Initialization is linear: event loop, window, GPU context, then
    /// `App::init`. The first failing step stops the loop, everything
    /// acquired so far is released, and the error is returned.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        log::info!("event loop created");

        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("event loop terminated with error")?;

        state.finish()
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Field order is drop order: the app (fonts, renderer caches) goes before
/// the GPU context and window it was created against.
struct AppState<A>
where
    A: CoreApp + 'static,
{
    app: Option<A>,
    window: Option<WindowEntry>,

    config: RuntimeConfig,
    gpu_init: GpuInit,

    started: bool,
    exit_requested: bool,
    startup_error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            app: Some(app),
            window: None,
            config,
            gpu_init,
            started: false,
            exit_requested: false,
            startup_error: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;
        log::info!("window created ({}x{})", self.config.initial_size.width, self.config.initial_size.height);

        if self.config.centered {
            center_window(event_loop, &window);
        }

        let gpu_init = self.gpu_init.clone();

        // On any error below `entry` is dropped: GPU context first, then window.
        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("failed to initialize GPU context")?;
        log::info!("GPU context ready");

        let Some(app) = self.app.as_mut() else {
            bail!("application already shut down");
        };

        entry
            .with(|fields| {
                let ctx = InitCtx {
                    window: WindowCtx { window: fields.window },
                    gpu: fields.gpu,
                };
                app.init(&ctx)
            })
            .context("application initialization failed")?;

        entry.with_window(|w| w.request_redraw());
        self.window = Some(entry);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (Some(app), Some(entry)) = (self.app.as_mut(), self.window.as_mut()) else {
            return;
        };

        let control = entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx { window: fields.window },
                gpu: fields.gpu,
            };
            app.on_frame(&mut ctx)
        });

        if control == AppControl::Exit {
            log::info!("application requested exit");
            self.request_exit(event_loop);
        }
    }

    /// Releases everything in order: app, GPU context, window.
    fn shutdown(&mut self) {
        if let Some(app) = self.app.take() {
            drop(app);
            log::debug!("application released");
        }
        if let Some(entry) = self.window.take() {
            drop(entry);
            log::debug!("GPU context and window released");
        }
    }

    fn finish(mut self) -> Result<()> {
        self.shutdown();
        match self.startup_error.take() {
            Some(err) => Err(err),
            None => {
                log::info!("shut down cleanly");
                Ok(())
            }
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;

        if let Err(e) = self.start(event_loop) {
            log::debug!("startup failed, releasing resources");
            self.startup_error = Some(e);
            self.shutdown();
            self.request_exit(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; presentation paces the loop.
        if let Some(entry) = self.window.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.window.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("quit requested");
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            // Everything else (keyboard, mouse, focus, ...) is discarded.
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Release window resources while the event loop is still alive.
        self.shutdown();
    }
}

fn center_window(event_loop: &ActiveEventLoop, window: &Window) {
    let Some(monitor) = window.current_monitor().or_else(|| event_loop.primary_monitor()) else {
        log::debug!("no monitor information; window left at platform position");
        return;
    };

    let pos = centered_position(monitor.position(), monitor.size(), window.outer_size());
    window.set_outer_position(pos);
}
