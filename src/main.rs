//! Bounce - a ball dropped under gravity
//!
//! Native host: one window, one ball, one animation frame per redraw.

mod systems;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use bounce::config::AppConfig;
use bounce_core::{Bounds, FrameError, LoopControl, SetupError};
use systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    /// Frame error handed to the host by the plain variant
    failure: Option<FrameError>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let bounds = Bounds::from((config.window.width, config.window.height));
        let simulation = SimulationSystem::new(
            &config.simulation,
            bounds,
            config.rendering.ball_color(),
        );

        Self {
            config,
            window: None,
            render: None,
            simulation,
            failure: None,
        }
    }

    fn fail_setup(&mut self, event_loop: &ActiveEventLoop, err: SetupError) {
        self.simulation.fail_setup(&err);
        event_loop.exit();
    }

    /// Present the recorded frame, recovering once from a lost surface
    fn present(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render) = &mut self.render else {
            return;
        };

        match render.render_frame() {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                render.reconfigure();
                if let Err(e) = render.render_frame() {
                    log::warn!("Frame dropped after reconfiguring surface: {}", e);
                }
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                self.simulation.stop();
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                self.fail_setup(event_loop, SetupError::Window(e.to_string()));
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                self.fail_setup(event_loop, e.into());
                return;
            }
        };

        // The surface size is only known now; centre the ball on it
        self.simulation = SimulationSystem::new(
            &self.config.simulation,
            render.bounds(),
            self.config.rendering.ball_color(),
        );

        if self.simulation.start() {
            window.request_redraw();
        }

        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.simulation.stop();
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    self.simulation.stop();
                    event_loop.exit();
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(render) = &mut self.render else {
                    return;
                };

                let bounds = render.bounds();
                let control = match self.simulation.frame(render.begin_frame(), bounds) {
                    Ok(control) => control,
                    Err(e) => {
                        self.failure = Some(e);
                        event_loop.exit();
                        return;
                    }
                };

                if control == LoopControl::Stop {
                    return;
                }

                self.present(event_loop);

                if let Some(window) = &self.window {
                    if self.config.debug.show_position_in_title {
                        window.update_title(self.simulation.position());
                    }
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Config first so its log level can seed the logger
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Bounce ({} variant)", config.simulation.variant);

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");

    if let Some(err) = app.failure {
        log::error!("Animation failed: {}", err);
        std::process::exit(1);
    }
    log::info!("Stopped after {} frames", app.simulation.frames());
}
