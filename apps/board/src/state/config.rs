//! # Configuration State
//!
//! Board configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ORDER_BOARD_*`)
//! 2. Config file (`board.toml`, or the path given on the command line)
//! 3. Defaults (this file)
//!
//! ## Example `board.toml`
//! ```toml
//! title = "Trattoria"
//! log_filter = "info,order_board=debug"
//! card_width = 28
//!
//! [[seed]]
//! title = "Pasta"
//! table = "12"
//! column = "ordered"
//!
//! [[seed]]
//! id = "5"
//! title = "Soup"
//! table = "3"
//! column = "preparing"
//! ```
//!
//! Configuration is read-only after startup.

use std::path::{Path, PathBuf};

use board_core::{validation, Column, NewOrder, Order, OrderId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// Narrowest card the text view can lay out.
const MIN_CARD_WIDTH: usize = 12;

/// Widest card the text view will lay out.
const MAX_CARD_WIDTH: usize = 80;

/// Board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Heading shown above the board.
    pub title: String,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,

    /// Column width of the text view, in characters.
    pub card_width: usize,

    /// Orders placed on the board at startup.
    pub seed: Vec<SeedOrder>,
}

/// An order placed on the board at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedOrder {
    /// Fixed identifier; generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub table: String,
    /// Column marker value; defaults to the first column.
    #[serde(default = "default_seed_column")]
    pub column: String,
}

fn default_seed_column() -> String {
    Column::ALL[0].as_str().to_string()
}

impl SeedOrder {
    /// Turns the seed into an order.
    pub fn to_order(&self) -> Result<Order, ConfigError> {
        let column = validation::parse_column("seed.column", &self.column)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        let mut order = Order::create(NewOrder::new(&self.title, &self.table), column);

        if let Some(ref raw) = self.id {
            order.id = OrderId::parse(raw).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }

        Ok(order)
    }
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Title: "Order Board"
    /// - Log filter: info, debug for the board crates
    /// - Card width: 24
    /// - No seed orders
    fn default() -> Self {
        ConfigState {
            title: "Order Board".to_string(),
            log_filter: "info,order_board=debug".to_string(),
            card_width: 24,
            seed: Vec::new(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else the platform config directory)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading board config from file");
                config = Self::read(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_CARD_WIDTH..=MAX_CARD_WIDTH).contains(&self.card_width) {
            return Err(ConfigError::Invalid(format!(
                "card_width must be between {} and {}, got {}",
                MIN_CARD_WIDTH, MAX_CARD_WIDTH, self.card_width
            )));
        }

        let mut seen = Vec::new();
        for seed in &self.seed {
            let order = seed.to_order()?;
            if seed.id.is_some() {
                if seen.contains(&order.id) {
                    return Err(ConfigError::Invalid(format!(
                        "seed id '{}' is used twice",
                        order.id
                    )));
                }
                seen.push(order.id);
            }
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(title) = std::env::var("ORDER_BOARD_TITLE") {
            debug!(title = %title, "Overriding board title from environment");
            self.title = title;
        }

        if let Ok(filter) = std::env::var("ORDER_BOARD_LOG") {
            self.log_filter = filter;
        }

        if let Ok(width) = std::env::var("ORDER_BOARD_CARD_WIDTH") {
            match width.parse::<usize>() {
                Ok(w) => self.card_width = w,
                Err(_) => warn!(width = %width, "Ignoring non-numeric ORDER_BOARD_CARD_WIDTH"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "orderboard", "board")
            .map(|dirs| dirs.config_dir().join("board.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ConfigState::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.card_width, 24);
        assert!(config.seed.is_empty());
    }

    #[test]
    fn test_parse_toml_with_seeds() {
        let config = ConfigState::from_toml(
            r#"
            title = "Trattoria"
            card_width = 30

            [[seed]]
            title = "Pasta"
            table = "12"

            [[seed]]
            id = "5"
            title = "Soup"
            table = "3"
            column = "preparing"
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Trattoria");
        assert_eq!(config.card_width, 30);
        // Missing keys fall back to defaults
        assert_eq!(config.log_filter, ConfigState::default().log_filter);

        assert_eq!(config.seed.len(), 2);
        assert_eq!(config.seed[0].column, "ordered");
        let soup = config.seed[1].to_order().unwrap();
        assert_eq!(soup.id.as_str(), "5");
        assert_eq!(soup.column, Column::Preparing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ConfigState::default();
        config.card_width = 4;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ConfigState::default();
        config.seed.push(SeedOrder {
            id: None,
            title: "Pie".into(),
            table: "1".into(),
            column: "oven".into(),
        });
        assert!(config.validate().is_err());

        let mut config = ConfigState::default();
        for _ in 0..2 {
            config.seed.push(SeedOrder {
                id: Some("7".into()),
                title: "Pie".into(),
                table: "1".into(),
                column: "served".into(),
            });
        }
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            ConfigState::from_toml("card_width = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("order-board-does-not-exist.toml");
        let config = ConfigState::load(Some(path)).unwrap();
        assert_eq!(config.title, ConfigState::default().title);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&ConfigState::default()).unwrap();
        assert!(toml_str.contains("card_width = 24"));
    }
}
