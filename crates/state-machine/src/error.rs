//! Error types for the state machine.

/// Severity level of a machine error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// The call had no effect; the machine is still usable.
    Recoverable,

    /// A programming contract was violated.
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

/// Errors surfaced by [`crate::StateRegistry`] and [`crate::StateMachine`].
///
/// State keys are carried in their `Debug` form so the error type stays
/// independent of the key type.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MachineError {
    /// A state with this key already exists; the original instance is kept.
    #[error("state {state} is already registered")]
    DuplicateRegistration { state: String },

    /// `advance` was called before `set_starting_state`.
    #[error("state machine has no current state; set a starting state first")]
    UninitializedMachine,

    /// No factory is registered for the requested key.
    #[error("no factory registered for state {state}")]
    UnknownState { state: String },

    /// The tick driver passed a negative or non-finite delta time.
    #[error("delta time must be finite and non-negative, got {0}")]
    InvalidDeltaTime(f32),
}

impl MachineError {
    pub(crate) fn duplicate(key: impl std::fmt::Debug) -> Self {
        Self::DuplicateRegistration {
            state: format!("{key:?}"),
        }
    }

    pub(crate) fn unknown(key: impl std::fmt::Debug) -> Self {
        Self::UnknownState {
            state: format!("{key:?}"),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        use MachineError::*;
        match self {
            DuplicateRegistration { .. } => ErrorSeverity::Recoverable,
            UninitializedMachine | UnknownState { .. } | InvalidDeltaTime(_) => {
                ErrorSeverity::Fatal
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        use MachineError::*;
        match self {
            DuplicateRegistration { .. } => "DUPLICATE_REGISTRATION",
            UninitializedMachine => "UNINITIALIZED_MACHINE",
            UnknownState { .. } => "UNKNOWN_STATE",
            InvalidDeltaTime(_) => "INVALID_DELTA_TIME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_duplicates_are_recoverable() {
        let duplicate = MachineError::duplicate("Idle");
        assert_eq!(duplicate.severity().as_str(), "recoverable");
        assert_eq!(duplicate.error_code(), "DUPLICATE_REGISTRATION");

        for err in [
            MachineError::UninitializedMachine,
            MachineError::unknown("Walk"),
            MachineError::InvalidDeltaTime(-1.0),
        ] {
            assert!(err.severity().is_fatal());
            assert_eq!(err.severity().as_str(), "fatal");
        }
    }
}
