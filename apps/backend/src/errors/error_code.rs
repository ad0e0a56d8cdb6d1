//! Error codes for the Telepic backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Malformed id in the request path
    InvalidId,
    /// Round number is not a positive integer
    InvalidRound,
    /// Game or player name is blank or too long
    InvalidName,
    /// Answer payload is blank or too long
    InvalidPayload,
    /// Text sent for an image round or vice versa
    PayloadKindMismatch,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    GameNotFound,
    PlayerNotFound,
    AnswerNotFound,
    NotFound,

    // Business Logic Conflicts
    /// An answer already exists for this player and round
    AlreadyAnswered,
    /// A concurrent join took the same ring position
    RingPositionTaken,
    /// Reply target doesn't match the predecessor's answer
    InvalidLink,
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    /// Reply chain is corrupt
    IntegrityError,
    InternalError,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidId => "INVALID_ID",
            Self::InvalidRound => "INVALID_ROUND",
            Self::InvalidName => "INVALID_NAME",
            Self::InvalidPayload => "INVALID_PAYLOAD",
            Self::PayloadKindMismatch => "PAYLOAD_KIND_MISMATCH",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::AnswerNotFound => "ANSWER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::AlreadyAnswered => "ALREADY_ANSWERED",
            Self::RingPositionTaken => "RING_POSITION_TAKEN",
            Self::InvalidLink => "INVALID_LINK",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::IntegrityError => "INTEGRITY_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
