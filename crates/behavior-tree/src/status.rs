//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one tick.
///
/// # Tick Semantics
///
/// Unlike a purely turn-based tree, an action may span several ticks:
/// - Conditions evaluate immediately (e.g., "Is target visible?")
/// - Actions either finish this tick or report `InProgress` and are
///   re-entered on the next call
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be carried out.
    Failure,

    /// The behavior has not resolved yet and must be processed again next tick.
    InProgress,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `InProgress`.
    #[inline]
    pub fn is_in_progress(self) -> bool {
        matches!(self, Status::InProgress)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_resolved(self) -> bool {
        !self.is_in_progress()
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    ///
    /// `InProgress` is left untouched since the outcome is not known yet.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::InProgress => Status::InProgress,
        }
    }
}
