//! Error types for behavior tree evaluation.

/// Severity level of a tree error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// The caller can correct the condition and keep using the tree.
    Recoverable,

    /// A contract violation; the tree must not be evaluated further.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Errors surfaced while evaluating a behavior tree.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TreeError {
    /// A composite node's cursor points outside its child range.
    #[error("composite `{node}` has cursor {cursor} outside its {len} children")]
    MalformedTree {
        node: String,
        cursor: usize,
        len: usize,
    },

    /// The tick driver passed a negative or non-finite delta time.
    #[error("delta time must be finite and non-negative, got {0}")]
    InvalidDeltaTime(f32),
}

impl TreeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TreeError::MalformedTree { .. } | TreeError::InvalidDeltaTime(_) => {
                ErrorSeverity::Fatal
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TreeError::MalformedTree { .. } => "MALFORMED_TREE",
            TreeError::InvalidDeltaTime(_) => "INVALID_DELTA_TIME",
        }
    }
}

/// Validates a tick's delta time.
pub(crate) fn check_delta(dt: f32) -> Result<(), TreeError> {
    if dt.is_finite() && dt >= 0.0 {
        Ok(())
    } else {
        Err(TreeError::InvalidDeltaTime(dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_delta_is_fatal() {
        assert_eq!(check_delta(0.0), Ok(()));
        for dt in [-0.5, f32::NAN, f32::INFINITY] {
            let err = check_delta(dt).unwrap_err();
            assert_eq!(err.severity().as_str(), "fatal");
            assert_eq!(err.error_code(), "INVALID_DELTA_TIME");
        }
    }
}
