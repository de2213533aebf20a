use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Message, MessageKind, message::write_json_quoted};

/// Sent by the Manager to Collectors and PCXs to task them with collecting endpoint
/// information for an assessment.
///
/// `targets` holds the pre-serialized JSON document naming the endpoints in scope, as
/// produced by the Manager's targeting resolution; it is opaque here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorRequest {
    #[serde(rename = "message_type")]
    pub kind: MessageKind,
    pub ids: String,
    pub targeting: String,
    pub latest_return: String,
    pub collection_method: String,
    pub result_format_filters: String,
    pub collection_parameters: String,
    pub transaction_id: String,
    pub requestor_id: String,
    pub targets: String,
}

impl Default for CollectorRequest {
    fn default() -> Self {
        Self {
            kind: Self::KIND,
            ids: String::new(),
            targeting: String::new(),
            latest_return: String::new(),
            collection_method: String::new(),
            result_format_filters: String::new(),
            collection_parameters: String::new(),
            transaction_id: String::new(),
            requestor_id: String::new(),
            targets: String::new(),
        }
    }
}

impl Message for CollectorRequest {
    const KIND: MessageKind = MessageKind::CollectionRequest;
    const KEYS: &'static [&'static str] = &[
        "message_type",
        "ids",
        "targeting",
        "latest_return",
        "collection_method",
        "result_format_filters",
        "collection_parameters",
        "transaction_id",
        "requestor_id",
        "targets",
    ];
}

impl fmt::Display for CollectorRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\tMessage Type: {}", self.kind)?;
        write!(f, "\n\tIDs: {}", self.ids)?;
        write!(f, "\n\tTargeting: {}", self.targeting)?;
        write!(f, "\n\tLatest Return: {}", self.latest_return)?;
        write!(f, "\n\tCollection Method: {}", self.collection_method)?;
        write!(f, "\n\tResult Format Filters: {}", self.result_format_filters)?;
        write!(f, "\n\tCollection Parameters: {}", self.collection_parameters)?;
        write!(f, "\n\tTransaction ID: {}", self.transaction_id)?;
        write!(f, "\n\tRequestor ID: {}", self.requestor_id)?;
        write!(f, "\n\tTargets: ")?;
        write_json_quoted(f, &self.targets)
    }
}
