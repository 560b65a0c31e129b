//! Injected startup configuration
//!
//! The environment resolves viewport dimensions and the run seed once,
//! before the loop starts. The simulation never probes the platform itself
//! and never sees invalid geometry: a bad viewport is rejected here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed viewport dimensions for a process run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Validate dimensions; zero-sized viewports fail fast at startup
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyViewport { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Rejected startup configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A viewport dimension was zero or negative
    EmptyViewport { width: u32, height: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyViewport { width, height } => {
                write!(f, "viewport must have positive dimensions, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Complete startup configuration handed to the game shell
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Config {
    pub viewport: Viewport,
    /// Run seed for reproducible gate sequences
    pub seed: u64,
}

impl Config {
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        Self { viewport, seed }
    }
}
