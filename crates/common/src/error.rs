//! Error types

use thiserror::Error;

/// Main error type for the gamification engine.
///
/// The `Display` text is the user-facing message interactive callers show
/// when an operation is rejected.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Challenge is not active")]
    ChallengeInactive,

    #[error("Challenge has not started yet")]
    ChallengeNotStarted,

    #[error("Challenge has already ended")]
    ChallengeEnded,

    #[error("Challenge is full")]
    ChallengeFull,

    #[error("Already participating in this challenge")]
    AlreadyParticipating,

    #[error("Not participating in this challenge")]
    NotParticipating,

    #[error("Participation limit reached for {0} challenges")]
    ParticipationLimit(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
