//! Error types for the reduction engine.
//!
//! Every variant is a precondition violation: the caller passed arrays or
//! parameters the engine cannot honour. Degenerate inputs (empty series,
//! tiny targets) are not errors and never show up here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReduceError {
    /// `x` and `y` must be parallel arrays.
    #[error("length mismatch: x has {x_len} samples but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// A smoothing parameter outside its accepted range.
    #[error("invalid {name} for {algorithm}: {value} ({reason})")]
    InvalidParameter {
        algorithm: &'static str,
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("unknown smoothing algorithm '{0}' (expected ema, twema, gaussian or running)")]
    UnknownAlgorithm(String),

    #[error("unknown interpolation mode '{0}' (expected linear or last)")]
    UnknownMode(String),

    #[error("index {index} out of bounds for series of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ReduceError>;

/// Fails with [`ReduceError::LengthMismatch`] unless both arrays have the same length.
#[inline]
pub(crate) fn ensure_same_len(x_len: usize, y_len: usize) -> Result<()> {
    if x_len != y_len {
        return Err(ReduceError::LengthMismatch { x_len, y_len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReduceError::LengthMismatch { x_len: 3, y_len: 2 };
        assert_eq!(err.to_string(), "length mismatch: x has 3 samples but y has 2");

        let err = ReduceError::InvalidParameter {
            algorithm: "ema",
            name: "alpha",
            value: 1.5,
            reason: "must lie in (0, 1]",
        };
        assert_eq!(err.to_string(), "invalid alpha for ema: 1.5 (must lie in (0, 1])");
    }

    #[test]
    fn test_ensure_same_len() {
        assert!(ensure_same_len(4, 4).is_ok());
        assert_eq!(
            ensure_same_len(4, 5),
            Err(ReduceError::LengthMismatch { x_len: 4, y_len: 5 })
        );
    }
}
