use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Message, MessageKind};

/// Carries the results of an assessment.
///
/// Generated by Collectors and PCXs, sent to the Repository for storage and to the
/// Application for further processing. `assessment_results` is a pre-serialized result
/// document in whatever format the collecting component produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResults {
    #[serde(rename = "message_type")]
    pub kind: MessageKind,
    pub transaction_id: String,
    pub requestor_id: String,
    pub assessment_results: String,
    pub target_id: String,
    pub collector_id: String,
    pub pcx_id: String,
    pub pce_id: String,
    pub timestamp: String,
}

impl Default for ReportResults {
    fn default() -> Self {
        Self {
            kind: Self::KIND,
            transaction_id: String::new(),
            requestor_id: String::new(),
            assessment_results: String::new(),
            target_id: String::new(),
            collector_id: String::new(),
            pcx_id: String::new(),
            pce_id: String::new(),
            timestamp: String::new(),
        }
    }
}

impl Message for ReportResults {
    const KIND: MessageKind = MessageKind::ReportResults;
    const KEYS: &'static [&'static str] = &[
        "message_type",
        "transaction_id",
        "requestor_id",
        "assessment_results",
        "target_id",
        "collector_id",
        "pcx_id",
        "pce_id",
        "timestamp",
    ];
}

impl fmt::Display for ReportResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\tMessage Type: {}", self.kind)?;
        write!(f, "\n\tTransaction ID: {}", self.transaction_id)?;
        write!(f, "\n\tRequestor ID: {}", self.requestor_id)?;
        write!(f, "\n\tAssessment Results: {}", self.assessment_results)?;
        write!(f, "\n\tTarget ID: {}", self.target_id)?;
        write!(f, "\n\tCollector ID: {}", self.collector_id)?;
        write!(f, "\n\tPCX ID: {}", self.pcx_id)?;
        write!(f, "\n\tPCE ID: {}", self.pce_id)?;
        write!(f, "\n\tTimestamp: {}", self.timestamp)
    }
}
