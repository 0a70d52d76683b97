//! Board configuration - dimensions and token-kind count
//!
//! A configuration is validated once, when a grid or session is built, and is
//! immutable afterwards. The matcher and the oracle assume a triple fits in
//! every row and column; the refill planner assumes at least one kind remains
//! after excluding four neighbours.

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_KINDS, DEFAULT_WIDTH, MAX_DIMENSION, MAX_KINDS, MIN_DIMENSION,
    MIN_KINDS,
};

/// Validated board dimensions and kind count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    width: u8,
    height: u8,
    kinds: u8,
}

impl BoardConfig {
    /// Create a configuration, rejecting values the engine cannot play on
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_crush_core::BoardConfig;
    ///
    /// let config = BoardConfig::new(8, 8, 6).unwrap();
    /// assert_eq!(config.cell_count(), 64);
    ///
    /// assert!(BoardConfig::new(2, 8, 6).is_err());
    /// assert!(BoardConfig::new(8, 8, 4).is_err());
    /// ```
    pub fn new(width: u8, height: u8, kinds: u8) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            height,
            kinds,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check all limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&self.width) {
            return Err(ConfigError::Width {
                value: self.width,
                min: MIN_DIMENSION,
                max: MAX_DIMENSION,
            });
        }
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&self.height) {
            return Err(ConfigError::Height {
                value: self.height,
                min: MIN_DIMENSION,
                max: MAX_DIMENSION,
            });
        }
        if !(MIN_KINDS..=MAX_KINDS).contains(&self.kinds) {
            return Err(ConfigError::Kinds {
                value: self.kinds,
                min: MIN_KINDS,
                max: MAX_KINDS,
            });
        }
        Ok(())
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn kinds(&self) -> u8 {
        self.kinds
    }

    /// Total number of cells (`width * height`)
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for BoardConfig {
    /// The reference 6x6 board with 7 kinds
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            kinds: DEFAULT_KINDS,
        }
    }
}
