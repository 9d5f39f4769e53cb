//! Error types for assignment construction.

use thiserror::Error;

/// Errors returned by [`AssignRunner`](crate::assign::AssignRunner).
///
/// Rule rejections and local-attempt overflows are recovered inside the
/// engine and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    /// The global restart budget was exhausted. Terminal for this run;
    /// the caller may start a fresh run.
    #[error(
        "maximum total restarts reached ({restarts}); unable to construct a valid assignment"
    )]
    RestartLimitReached { restarts: usize },

    /// The same identifier appears more than once in the participant list.
    #[error("duplicate participant: {0}")]
    DuplicateParticipant(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
