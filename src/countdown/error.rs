use thiserror::Error;

/// Errors returned when a countdown cannot be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountdownError {
    #[error("countdown duration must be greater than zero")]
    ZeroDuration,

    #[error("tick interval must be greater than zero")]
    ZeroInterval,
}
