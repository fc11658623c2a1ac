//! Error types for configuration and field sampling.

use std::fmt;

/// Rejected [`VizConfig`](crate::config::VizConfig) values.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A sampling resolution of zero would never advance across the canvas.
    ZeroResolution {
        /// Name of the offending option.
        which: &'static str,
    },
    /// An option that must be strictly positive was not.
    NonPositive { which: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroResolution { which } => {
                write!(f, "{which} must be at least 1")
            }
            Self::NonPositive { which, value } => {
                write!(f, "{which} must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors from a sampling pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// Every retry hit a singular sample. Unreachable while an empty store
    /// samples finite, but the retry loop is still bounded.
    RetriesExhausted { attempts: usize },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RetriesExhausted { attempts } => write!(
                f,
                "sampling pass still singular after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for SampleError {}
