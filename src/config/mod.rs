//! Configuration for pool retention behavior.
//!
//! This module provides [`PoolConfig`], which bounds how many idle buffers
//! the pool may retain:
//!
//! - `max_idle_per_class` - Idle buffers kept per size class
//! - `max_idle_handles` - Spare handle cells kept for recycling
//!
//! # Example
//!
//! ```
//! use bufpool::PoolConfig;
//!
//! // Retain fewer idle buffers per class
//! let config = PoolConfig::new(8, 16)?;
//!
//! // Builder pattern
//! let config = PoolConfig::default().with_max_idle_per_class(8);
//!
//! # Ok::<(), bufpool::PoolError>(())
//! ```

use crate::error::PoolError;

/// Default number of idle buffers retained per size class.
pub const DEFAULT_MAX_IDLE_PER_CLASS: usize = 32;

/// Default number of spare handle cells retained by the recycler.
pub const DEFAULT_MAX_IDLE_HANDLES: usize = 64;

/// Configuration for how much idle state the pool retains.
///
/// Retention caps are eviction thresholds, not guarantees: idle buffers
/// may be dropped earlier under contention, and memory handed out to
/// callers is never capped.
///
/// # Example
///
/// ```
/// use bufpool::PoolConfig;
///
/// // Use default configuration
/// let config = PoolConfig::default();
///
/// // Custom configuration
/// let config = PoolConfig::new(8, 16)?;
/// # Ok::<(), bufpool::PoolError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    /// Idle buffers retained per size class.
    max_idle_per_class: usize,

    /// Spare handle cells retained by the recycler.
    max_idle_handles: usize,
}

impl PoolConfig {
    /// Creates a new configuration with the specified retention caps.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if either cap is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bufpool::PoolConfig;
    ///
    /// let config = PoolConfig::new(8, 16)?;
    /// assert_eq!(config.max_idle_per_class(), 8);
    /// # Ok::<(), bufpool::PoolError>(())
    /// ```
    pub fn new(max_idle_per_class: usize, max_idle_handles: usize) -> Result<Self, PoolError> {
        if max_idle_per_class == 0 {
            return Err(PoolError::InvalidConfig {
                message: "max_idle_per_class must be non-zero",
            });
        }
        if max_idle_handles == 0 {
            return Err(PoolError::InvalidConfig {
                message: "max_idle_handles must be non-zero",
            });
        }
        Ok(Self {
            max_idle_per_class,
            max_idle_handles,
        })
    }

    /// Sets the per-class idle retention cap.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`PoolConfig::validate`] to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use bufpool::PoolConfig;
    ///
    /// let config = PoolConfig::default().with_max_idle_per_class(4);
    /// assert_eq!(config.max_idle_per_class(), 4);
    /// ```
    pub fn with_max_idle_per_class(mut self, cap: usize) -> Self {
        self.max_idle_per_class = cap;
        self
    }

    /// Sets the recycler's spare-handle retention cap.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`PoolConfig::validate`] to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use bufpool::PoolConfig;
    ///
    /// let config = PoolConfig::default().with_max_idle_handles(8);
    /// assert_eq!(config.max_idle_handles(), 8);
    /// ```
    pub fn with_max_idle_handles(mut self, cap: usize) -> Self {
        self.max_idle_handles = cap;
        self
    }

    /// Returns the per-class idle retention cap.
    pub fn max_idle_per_class(&self) -> usize {
        self.max_idle_per_class
    }

    /// Returns the recycler's spare-handle retention cap.
    pub fn max_idle_handles(&self) -> usize {
        self.max_idle_handles
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use bufpool::PoolConfig;
    ///
    /// let config = PoolConfig::default().with_max_idle_per_class(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), PoolError> {
        Self::new(self.max_idle_per_class, self.max_idle_handles).map(|_| ())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_class: DEFAULT_MAX_IDLE_PER_CLASS,
            max_idle_handles: DEFAULT_MAX_IDLE_HANDLES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PoolConfig::default();
        assert_eq!(config.max_idle_per_class(), DEFAULT_MAX_IDLE_PER_CLASS);
        assert_eq!(config.max_idle_handles(), DEFAULT_MAX_IDLE_HANDLES);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PoolConfig::default()
            .with_max_idle_per_class(4)
            .with_max_idle_handles(8);

        assert_eq!(config.max_idle_per_class(), 4);
        assert_eq!(config.max_idle_handles(), 8);
    }

    #[test]
    fn test_invalid_config_zero_class_cap() {
        assert!(PoolConfig::new(0, 16).is_err());
    }

    #[test]
    fn test_invalid_config_zero_handle_cap() {
        assert!(PoolConfig::new(8, 0).is_err());
    }

    #[test]
    fn test_validate_catches_builder_misuse() {
        let config = PoolConfig::default().with_max_idle_handles(0);
        assert!(config.validate().is_err());
    }
}
