use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Message, MessageKind};

/// Sent by the Application to the Manager to begin the assessment of endpoints.
///
/// `targeting`, `result_format_filters`, and `collection_parameters` carry pre-serialized
/// JSON documents produced by the Application; this catalogue treats them as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiateAssessment {
    #[serde(rename = "message_type")]
    pub kind: MessageKind,
    pub content: String,
    pub targeting: String,
    pub oldest_results: String,
    pub latest_return: String,
    pub fresh_results: String,
    pub collection_method: String,
    pub result_format_filters: String,
    pub collection_parameters: String,
    pub transaction_id: String,
    pub requestor_id: String,
}

impl Default for InitiateAssessment {
    fn default() -> Self {
        Self {
            kind: Self::KIND,
            content: String::new(),
            targeting: String::new(),
            oldest_results: String::new(),
            latest_return: String::new(),
            fresh_results: String::new(),
            collection_method: String::new(),
            result_format_filters: String::new(),
            collection_parameters: String::new(),
            transaction_id: String::new(),
            requestor_id: String::new(),
        }
    }
}

impl Message for InitiateAssessment {
    const KIND: MessageKind = MessageKind::InitiateAssessment;
    const KEYS: &'static [&'static str] = &[
        "message_type",
        "content",
        "targeting",
        "oldest_results",
        "latest_return",
        "fresh_results",
        "collection_method",
        "result_format_filters",
        "collection_parameters",
        "transaction_id",
        "requestor_id",
    ];
}

impl fmt::Display for InitiateAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\tMessage Type: {}", self.kind)?;
        write!(f, "\n\tContent: {}", self.content)?;
        write!(f, "\n\tTargeting: {}", self.targeting)?;
        write!(f, "\n\tOldest Results: {}", self.oldest_results)?;
        write!(f, "\n\tLatest Return: {}", self.latest_return)?;
        write!(f, "\n\tFresh Results: {}", self.fresh_results)?;
        write!(f, "\n\tCollection Method: {}", self.collection_method)?;
        write!(f, "\n\tResult Format Filters: {}", self.result_format_filters)?;
        write!(f, "\n\tCollection Parameters: {}", self.collection_parameters)?;
        write!(f, "\n\tTransaction ID: {}", self.transaction_id)?;
        write!(f, "\n\tRequestor ID: {}", self.requestor_id)
    }
}

/// Sent from the Manager to the Application to confirm that a request (initiate or cancel)
/// was received and will be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestAcknowledgement {
    #[serde(rename = "message_type")]
    pub kind: MessageKind,
    pub transaction_id: String,
}

impl Default for RequestAcknowledgement {
    fn default() -> Self {
        Self {
            kind: Self::KIND,
            transaction_id: String::new(),
        }
    }
}

impl Message for RequestAcknowledgement {
    const KIND: MessageKind = MessageKind::RequestAcknowledgement;
    const KEYS: &'static [&'static str] = &["message_type", "transaction_id"];
}

impl fmt::Display for RequestAcknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\tMessage Type: {}", self.kind)?;
        write!(f, "\n\tTransaction ID: {}", self.transaction_id)
    }
}

/// Sent by the Application to the Manager to cancel a running assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelAssessment {
    #[serde(rename = "message_type")]
    pub kind: MessageKind,
    pub transaction_id: String,
    pub requestor_id: String,
}

impl CancelAssessment {
    pub fn new(transaction_id: impl Into<String>, requestor_id: impl Into<String>) -> Self {
        Self {
            kind: Self::KIND,
            transaction_id: transaction_id.into(),
            requestor_id: requestor_id.into(),
        }
    }
}

impl Default for CancelAssessment {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl Message for CancelAssessment {
    const KIND: MessageKind = MessageKind::CancelAssessment;
    const KEYS: &'static [&'static str] = &["message_type", "transaction_id", "requestor_id"];
}

impl fmt::Display for CancelAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\tMessage Type: {}", self.kind)?;
        write!(f, "\n\tTransaction ID: {}", self.transaction_id)?;
        write!(f, "\n\tRequestor ID: {}", self.requestor_id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{CancelAssessment, InitiateAssessment, RequestAcknowledgement};
    use crate::{Message, MessageKind};

    #[test]
    fn cancel_encodes_expected_object() {
        let cancel = CancelAssessment::new("TX-42", "APP-1");
        let encoded: Value = serde_json::from_str(&cancel.to_json().unwrap()).unwrap();
        assert_eq!(
            encoded,
            json!({
                "message_type": 4,
                "transaction_id": "TX-42",
                "requestor_id": "APP-1",
            })
        );
    }

    #[test]
    fn cancel_round_trips() {
        let cancel = CancelAssessment::new("TX-42", "APP-1");
        let decoded = CancelAssessment::from_json(&cancel.to_json().unwrap()).unwrap();
        assert_eq!(decoded, cancel);
        assert_eq!(decoded.kind, MessageKind::CancelAssessment);
    }

    #[test]
    fn initiate_round_trips() {
        let initiate = InitiateAssessment {
            content: "oval-definitions".into(),
            targeting: r#"{"os": "linux"}"#.into(),
            oldest_results: "2020-01-01T00:00:00Z".into(),
            latest_return: "2020-01-02T00:00:00Z".into(),
            fresh_results: "true".into(),
            collection_method: "scheduled".into(),
            transaction_id: "TX-7".into(),
            requestor_id: "APP-1".into(),
            ..Default::default()
        };
        assert_eq!(
            InitiateAssessment::from_json(&initiate.to_json().unwrap()).unwrap(),
            initiate
        );
    }

    // The wire value of message_type is trusted as-is rather than cross-checked against
    // the record's own kind.
    #[test]
    fn decode_passes_foreign_kind_through() {
        let text = json!({
            "message_type": 6,
            "transaction_id": "TX-42",
            "requestor_id": "APP-1",
        })
        .to_string();
        let cancel = CancelAssessment::from_json(&text).unwrap();
        assert_eq!(cancel.kind, MessageKind::Query);
        assert_eq!(cancel.transaction_id, "TX-42");
    }

    #[test]
    fn acknowledgement_set_after_construction() {
        let mut ack = RequestAcknowledgement::default();
        ack.transaction_id = "TX-42".into();
        let encoded: Value = serde_json::from_str(&ack.to_json().unwrap()).unwrap();
        assert_eq!(
            encoded,
            json!({ "message_type": 2, "transaction_id": "TX-42" })
        );
    }

    #[test]
    fn cancel_display() {
        let cancel = CancelAssessment::new("TX-42", "APP-1");
        assert_eq!(
            cancel.to_string(),
            "\n\tMessage Type: 4\n\tTransaction ID: TX-42\n\tRequestor ID: APP-1"
        );
    }
}
