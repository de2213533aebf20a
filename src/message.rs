use std::fmt;

use from_variants::FromVariants;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::{
    CancelAssessment, CollectorRequest, Error, InitiateAssessment, Query, QueryResult,
    Registration, ReportResults, RequestAcknowledgement,
};

/// The wire key that carries a message's kind.
pub(crate) const KIND_KEY: &str = "message_type";

/// The integer codes that discriminate the message types of the SCAP assessment
/// architecture.
///
/// Every encoded message carries its code under the `message_type` key. The enumeration is
/// closed: decoding an unlisted code fails rather than coercing.
#[derive(Debug, Clone, Copy, Serialize_repr, Deserialize_repr, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageKind {
    InitiateAssessment = 1,
    RequestAcknowledgement = 2,
    ReportResults = 3,
    CancelAssessment = 4,
    /// Reserved. No record type exists in this catalogue; the archive exchange is defined
    /// by an external collaborator.
    ArchiveResponse = 5,
    Query = 6,
    QueryResult = 7,
    Registration = 8,
    CollectionRequest = 9,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// A record of the SCAP message catalogue: a flat set of string fields plus a kind code,
/// exchanged as a JSON object.
///
/// Records are value objects. A sender constructs one with [`Default`] and struct-update
/// syntax, encodes it with [`to_json`](Message::to_json), and hands the text to the
/// transport; a receiver that knows which record to expect decodes with
/// [`from_json`](Message::from_json) and then discards the record. Nothing here validates
/// field semantics; any string is accepted.
pub trait Message: Serialize + DeserializeOwned {
    /// The kind stamped on freshly constructed records of this type.
    ///
    /// Decoding does not cross-check the wire value against this constant; the `kind`
    /// field takes whatever `message_type` the payload carries.
    const KIND: MessageKind;

    /// The exact key set of this record's wire object, including `message_type`.
    const KEYS: &'static [&'static str];

    /// Encodes this record as a JSON object with exactly the keys in [`KEYS`](Self::KEYS).
    ///
    /// Cannot fail for records whose fields hold JSON-safe strings.
    fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::Encode)
    }

    /// Decodes a record from JSON text.
    ///
    /// Fails with [`Error::MalformedPayload`] if the text is not valid JSON, with
    /// [`Error::KeyNotFound`] if any key in [`KEYS`](Self::KEYS) is absent, and with
    /// [`Error::TypeMismatch`] if a key holds a value of the wrong JSON kind.
    fn from_json(text: &str) -> Result<Self, Error> {
        Self::from_value(serde_json::from_str(text).map_err(Error::MalformedPayload)?)
    }

    /// Decodes a record from an already-parsed JSON value.
    fn from_value(value: Value) -> Result<Self, Error> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::TypeMismatch("payload is not a JSON object".into()))?;
        // Checked up front so an absent key surfaces as KeyNotFound rather than as the
        // deserializer's undifferentiated data error.
        for key in Self::KEYS {
            if !object.contains_key(*key) {
                return Err(Error::KeyNotFound(key));
            }
        }
        serde_json::from_value(value).map_err(|e| Error::TypeMismatch(e.to_string()))
    }
}

/// Any record of the catalogue, for receivers that must dispatch on wire content without
/// knowing the expected type in advance.
#[derive(Debug, Clone, PartialEq, Eq, FromVariants)]
#[non_exhaustive]
pub enum AnyMessage {
    InitiateAssessment(InitiateAssessment),
    RequestAcknowledgement(RequestAcknowledgement),
    ReportResults(ReportResults),
    CancelAssessment(CancelAssessment),
    Query(Query),
    QueryResult(QueryResult),
    Registration(Registration),
    CollectorRequest(CollectorRequest),
}

impl AnyMessage {
    /// Decodes whichever record the payload's `message_type` names.
    ///
    /// Fails with [`Error::UnsupportedKind`] for a known code with no record type
    /// (`ArchiveResponse`), and with [`Error::TypeMismatch`] for an unlisted code.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(text).map_err(Error::MalformedPayload)?;
        let code = value
            .as_object()
            .ok_or_else(|| Error::TypeMismatch("payload is not a JSON object".into()))?
            .get(KIND_KEY)
            .ok_or(Error::KeyNotFound(KIND_KEY))?;
        let kind: MessageKind = serde_json::from_value(code.clone())
            .map_err(|e| Error::TypeMismatch(format!("{KIND_KEY}: {e}")))?;

        match kind {
            MessageKind::InitiateAssessment => {
                InitiateAssessment::from_value(value).map(Self::from)
            }
            MessageKind::RequestAcknowledgement => {
                RequestAcknowledgement::from_value(value).map(Self::from)
            }
            MessageKind::ReportResults => ReportResults::from_value(value).map(Self::from),
            MessageKind::CancelAssessment => CancelAssessment::from_value(value).map(Self::from),
            MessageKind::ArchiveResponse => Err(Error::UnsupportedKind(kind)),
            MessageKind::Query => Query::from_value(value).map(Self::from),
            MessageKind::QueryResult => QueryResult::from_value(value).map(Self::from),
            MessageKind::Registration => Registration::from_value(value).map(Self::from),
            MessageKind::CollectionRequest => CollectorRequest::from_value(value).map(Self::from),
        }
    }

    /// The kind carried by the decoded record.
    pub fn kind(&self) -> MessageKind {
        match self {
            AnyMessage::InitiateAssessment(m) => m.kind,
            AnyMessage::RequestAcknowledgement(m) => m.kind,
            AnyMessage::ReportResults(m) => m.kind,
            AnyMessage::CancelAssessment(m) => m.kind,
            AnyMessage::Query(m) => m.kind,
            AnyMessage::QueryResult(m) => m.kind,
            AnyMessage::Registration(m) => m.kind,
            AnyMessage::CollectorRequest(m) => m.kind,
        }
    }
}

/// Writes a field's text re-encoded as a JSON string, matching the debug rendering the
/// architecture's other components produce for fields that carry nested JSON documents.
pub(crate) fn write_json_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let quoted = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}
