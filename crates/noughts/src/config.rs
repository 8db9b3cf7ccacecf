//! Board layout configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Screen and cell geometry used for hit-testing.
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Width of the drawing surface in pixels.
    #[serde(default = "default_screen_width")]
    screen_width: f32,

    /// Height of the drawing surface in pixels.
    #[serde(default = "default_screen_height")]
    screen_height: f32,

    /// Width of one cell in pixels.
    #[serde(default = "default_cell_width")]
    cell_width: f32,

    /// Height of one cell in pixels.
    #[serde(default = "default_cell_height")]
    cell_height: f32,

    /// Distance from the top of the screen to the first row.
    #[serde(default = "default_top_margin")]
    top_margin: f32,
}

fn default_screen_width() -> f32 {
    640.0
}

fn default_screen_height() -> f32 {
    360.0
}

fn default_cell_width() -> f32 {
    80.0
}

fn default_cell_height() -> f32 {
    90.0
}

fn default_top_margin() -> f32 {
    60.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            screen_width: default_screen_width(),
            screen_height: default_screen_height(),
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
            top_margin: default_top_margin(),
        }
    }
}

impl LayoutConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading layout config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            screen_width = config.screen_width,
            screen_height = config.screen_height,
            "Layout config loaded"
        );
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects geometry that cannot hold a 3x3 board.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
            ("top_margin", self.top_margin),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::new(format!(
                "{} must be a finite number, got {}",
                name, value
            )));
        }
        if self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            return Err(ConfigError::new(format!(
                "Cell size must be positive, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }
        if self.top_margin < 0.0 {
            return Err(ConfigError::new(format!(
                "Top margin must not be negative, got {}",
                self.top_margin
            )));
        }
        if self.cell_width * 3.0 > self.screen_width {
            return Err(ConfigError::new(format!(
                "Board width {} exceeds screen width {}",
                self.cell_width * 3.0,
                self.screen_width
            )));
        }
        if self.top_margin + self.cell_height * 3.0 > self.screen_height {
            return Err(ConfigError::new(format!(
                "Board bottom {} exceeds screen height {}",
                self.top_margin + self.cell_height * 3.0,
                self.screen_height
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
