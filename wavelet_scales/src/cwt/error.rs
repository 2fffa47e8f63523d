//! Error types for scale and kernel construction.

/// Errors raised while building scale ladders or generating wavelet kernels.
///
/// All variants describe invalid static inputs, so retrying with the same
/// arguments always reproduces the same error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CwtError {
    /// A numeric argument violates a positivity or range constraint.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter { name: String, value: String },

    /// The signal is too short to resolve even the smallest scale.
    #[error("Degenerate signal: duration {length} * {dt} does not exceed minimum scale {min_scale}")]
    DegenerateSignal {
        length: usize,
        dt: f64,
        min_scale: f64,
    },

    /// The requested wavelet family is not registered.
    #[error("Unknown wavelet family: {0}")]
    UnknownFamily(String),
}

impl CwtError {
    pub(crate) fn invalid(name: &str, value: impl ToString) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Result type for scale and kernel operations.
pub type CwtResult<T> = Result<T, CwtError>;

/// Reject non-finite or non-positive reals.
pub(crate) fn ensure_positive(name: &str, value: f64) -> CwtResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CwtError::invalid(name, value))
    }
}
