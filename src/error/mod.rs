//! Error types for bufpool.

use std::fmt;

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// A released buffer's capacity does not lie on any size-class
    /// boundary.
    ///
    /// This indicates the buffer was not obtained from the pool, or its
    /// capacity was changed while on loan (for example by growing it past
    /// the class capacity). The buffer is not inserted into the pool.
    InvalidCapacity {
        /// The capacity that failed class recovery.
        capacity: usize,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::InvalidCapacity { capacity } => {
                write!(f, "invalid buffer capacity: {} is not a size class", capacity)
            }
            PoolError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for PoolError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_capacity() {
        let err = PoolError::InvalidCapacity { capacity: 3 };
        assert!(err.to_string().contains("invalid buffer capacity"));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_display_invalid_config() {
        let err = PoolError::InvalidConfig {
            message: "idle caps must be non-zero",
        };
        assert!(err.to_string().contains("invalid config"));
    }
}
