//! Configuration loading and management
//!
//! Configuration comes from an optional YAML file plus environment overrides:
//!
//! - `GRUBDASH_CONFIG`: path of the YAML file (defaults are used without it)
//! - `GRUBDASH_BIND_ADDR`: overrides `bind_addr`
//!
//! ```yaml
//! bind_addr: 0.0.0.0:5000
//! log_filter: grubdash=debug,tower_http=info
//! seed:
//!   dishes:
//!     - id: "90c3d873684bf381dfab29034b5bba73"
//!       name: Falafel and tahini bagel
//!       description: A warm bagel filled with falafel and tahini
//!       price: 6
//!       image_url: https://images.example.com/falafel.jpg
//!   orders: []
//! ```

use crate::entities::{Dish, Order};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_PATH_ENV: &str = "GRUBDASH_CONFIG";
pub const BIND_ADDR_ENV: &str = "GRUBDASH_BIND_ADDR";

/// Records loaded into the stores at start-up
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub dishes: Vec<Dish>,

    #[serde(default)]
    pub orders: Vec<Order>,
}

impl SeedData {
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty() && self.orders.is_empty()
    }
}

/// Service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Socket address the HTTP server binds to
    pub bind_addr: String,

    /// Default `tracing` filter, used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Initial dishes and orders
    pub seed: SeedData,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            log_filter: "info".to_string(),
            seed: SeedData::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration the way the binary does: file from
    /// `GRUBDASH_CONFIG` if set, then environment overrides
    pub fn from_env() -> Result<Self> {
        let config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_yaml_file(path)?,
            Err(_) => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from a key lookup (normally the process environment)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(addr) = lookup(BIND_ADDR_ENV).filter(|a| !a.is_empty()) {
            self.bind_addr = addr;
        }
        self
    }
}
