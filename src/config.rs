//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`BOUNCE_SECTION__KEY`)
//!
//! The ball's radius, gravity and bounce are fixed constants and not
//! configurable; only the behaviour variant and the wall response are.

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use bounce_core::{Color, Variant, WallResponse};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Simulation configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`BOUNCE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // BOUNCE_SIMULATION__VARIANT=plain -> simulation.variant = "plain"
        figment = figment.merge(Env::prefixed("BOUNCE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Drawing surface width in pixels
    pub width: u32,
    /// Drawing surface height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Bounce".to_string(),
            width: 500,
            height: 300,
            vsync: true,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Behaviour variant (`guarded` or `plain`)
    pub variant: Variant,
    /// Side wall response (`clamp_and_reflect` or `reflect_only`)
    pub walls: WallResponse,
    /// Id of the `<canvas>` element to draw on (web only)
    pub canvas_id: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            walls: WallResponse::ClampAndReflect,
            canvas_id: "gameCanvas".to_string(),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Ball fill colour as `#rgb`, `#rrggbb` or `#rrggbbaa`
    pub ball_color: String,
    /// Background color [r, g, b, a] (native window only)
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            ball_color: "#ff0000".to_string(),
            background_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl RenderingConfig {
    /// Parsed ball colour, red when the string is not a valid hex colour
    pub fn ball_color(&self) -> Color {
        Color::from_hex(&self.ball_color).unwrap_or_else(|| {
            log::warn!("Invalid ball_color '{}', using red", self.ball_color);
            Color::RED
        })
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace), used when RUST_LOG is unset
    pub log_level: String,
    /// Append the ball position to the window title
    pub show_position_in_title: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_position_in_title: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
