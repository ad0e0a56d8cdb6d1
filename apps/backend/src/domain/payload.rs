//! Answer payloads: inline text for odd rounds, an opaque image reference for even ones.

use serde::{Deserialize, Serialize};

use super::rounds::{AnswerKind, Round};
use crate::errors::domain::{DomainError, ValidationKind};

pub const MAX_TEXT_LEN: usize = 500;
pub const MAX_IMAGE_REF_LEN: usize = 1024;

/// Opaque reference to an externally stored image (object key or URL).
/// The bytes themselves never pass through this service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerPayload {
    Text(String),
    Image(ImageRef),
}

impl AnswerPayload {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn image(reference: impl Into<String>) -> Self {
        Self::Image(ImageRef::new(reference))
    }

    pub fn kind(&self) -> AnswerKind {
        match self {
            AnswerPayload::Text(_) => AnswerKind::Text,
            AnswerPayload::Image(_) => AnswerKind::Image,
        }
    }

    /// The single stored column.
    pub fn content(&self) -> &str {
        match self {
            AnswerPayload::Text(text) => text,
            AnswerPayload::Image(reference) => reference.as_str(),
        }
    }

    /// Rebuild a payload from its stored content; the round decides the kind.
    pub fn from_stored(round: Round, content: String) -> Self {
        match round.expected_kind() {
            AnswerKind::Text => AnswerPayload::Text(content),
            AnswerKind::Image => AnswerPayload::Image(ImageRef(content)),
        }
    }

    /// Check the payload is usable as an answer for `round`.
    pub fn validate_for(&self, round: Round) -> Result<(), DomainError> {
        let expected = round.expected_kind();
        if self.kind() != expected {
            return Err(DomainError::validation(
                ValidationKind::PayloadKindMismatch,
                format!(
                    "Round {round} expects a {expected:?} answer, got {:?}",
                    self.kind()
                ),
            ));
        }

        let (content, max) = match self {
            AnswerPayload::Text(text) => (text.as_str(), MAX_TEXT_LEN),
            AnswerPayload::Image(reference) => (reference.as_str(), MAX_IMAGE_REF_LEN),
        };
        if content.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidPayload,
                "Answer must not be blank",
            ));
        }
        if content.chars().count() > max {
            return Err(DomainError::validation(
                ValidationKind::InvalidPayload,
                format!("Answer exceeds {max} characters"),
            ));
        }
        Ok(())
    }
}
