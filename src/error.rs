use crate::MessageKind;

/// An error surfaced by the message catalogue.
///
/// The catalogue performs no recovery of its own; every decode failure is returned to the
/// caller as a distinct, inspectable value for the orchestration layer to handle.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The payload was not syntactically valid JSON.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
    /// The payload object lacked a key that the record's schema requires.
    #[error("missing required key `{0}`")]
    KeyNotFound(&'static str),
    /// A key was present but held a JSON value of the wrong kind, the payload was not an
    /// object, or `message_type` held an unknown code.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    /// A well-formed payload carried a kind with no record type in this catalogue.
    ///
    /// Only [`AnyMessage::from_json`](crate::AnyMessage::from_json) returns this;
    /// `ArchiveResponse` is reserved in the enumeration but its record is defined by an
    /// external collaborator.
    #[error("no record type for message kind {0}")]
    UnsupportedKind(MessageKind),
    /// A field held a value that could not be rendered as JSON.
    #[error("encode failure: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    /// The wire key involved in the failure, if the error concerns a single key.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Error::KeyNotFound(key) => Some(key),
            _ => None,
        }
    }
}
