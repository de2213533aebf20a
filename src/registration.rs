use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Message, MessageKind, message::write_json_quoted};

/// Sent by Collectors, PCXs, and (optionally) PCEs to register themselves with the
/// architecture; the Manager forwards registrations to the Repository for storage.
///
/// A registering component fills in the identity fields for its own role and leaves the
/// rest empty. `asset_info` and `supported_check_types` carry pre-serialized JSON
/// documents whose shape the registering component defines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "message_type")]
    pub kind: MessageKind,
    pub pce_id: String,
    pub collector_id: String,
    pub pcx_id: String,
    pub asset_info: String,
    pub pce_make: String,
    pub pce_model: String,
    pub target_id: String,
    pub pcx_make: String,
    pub pcx_model: String,
    pub collector_make: String,
    pub collector_model: String,
    pub supported_check_types: String,
}

impl Default for Registration {
    fn default() -> Self {
        Self {
            kind: Self::KIND,
            pce_id: String::new(),
            collector_id: String::new(),
            pcx_id: String::new(),
            asset_info: String::new(),
            pce_make: String::new(),
            pce_model: String::new(),
            target_id: String::new(),
            pcx_make: String::new(),
            pcx_model: String::new(),
            collector_make: String::new(),
            collector_model: String::new(),
            supported_check_types: String::new(),
        }
    }
}

impl Message for Registration {
    const KIND: MessageKind = MessageKind::Registration;
    const KEYS: &'static [&'static str] = &[
        "message_type",
        "pce_id",
        "collector_id",
        "pcx_id",
        "asset_info",
        "pce_make",
        "pce_model",
        "target_id",
        "pcx_make",
        "pcx_model",
        "collector_make",
        "collector_model",
        "supported_check_types",
    ];
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\tMessage Type: {}", self.kind)?;
        write!(f, "\n\tPCE ID: {}", self.pce_id)?;
        write!(f, "\n\tCollector ID: {}", self.collector_id)?;
        write!(f, "\n\tPCX ID: {}", self.pcx_id)?;
        write!(f, "\n\tAsset Information: ")?;
        write_json_quoted(f, &self.asset_info)?;
        write!(f, "\n\tPCE Make: {}", self.pce_make)?;
        write!(f, "\n\tPCE Model: {}", self.pce_model)?;
        write!(f, "\n\tTarget ID: {}", self.target_id)?;
        write!(f, "\n\tPCX Make: {}", self.pcx_make)?;
        write!(f, "\n\tPCX Model: {}", self.pcx_model)?;
        write!(f, "\n\tCollector Make: {}", self.collector_make)?;
        write!(f, "\n\tCollector Model: {}", self.collector_model)?;
        write!(f, "\n\tSupported Check Types: ")?;
        write_json_quoted(f, &self.supported_check_types)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::Registration;
    use crate::{Message, MessageKind};

    #[test]
    fn collector_registration_round_trips() {
        let registration = Registration {
            collector_id: "COL-1".into(),
            collector_make: "Acme".into(),
            collector_model: "Sentry 9".into(),
            asset_info: r#"{"hostname": "col-1.example.net"}"#.into(),
            supported_check_types: r#"["oval", "ocil"]"#.into(),
            ..Default::default()
        };
        assert_eq!(
            Registration::from_json(&registration.to_json().unwrap()).unwrap(),
            registration
        );
    }

    #[test]
    fn pce_registration_encodes_role_fields() {
        let registration = Registration {
            pce_id: "PCE-1".into(),
            pce_make: "Acme".into(),
            pce_model: "Verdict 2".into(),
            ..Default::default()
        };
        let encoded: Value = serde_json::from_str(&registration.to_json().unwrap()).unwrap();
        assert_eq!(encoded["message_type"], json!(8));
        assert_eq!(encoded["pce_id"], json!("PCE-1"));
        assert_eq!(encoded["collector_id"], json!(""));
    }

    #[test]
    fn kind_is_registration() {
        assert_eq!(Registration::default().kind, MessageKind::Registration);
    }

    #[test]
    fn display_re_encodes_nested_documents() {
        let registration = Registration {
            supported_check_types: r#"["oval"]"#.into(),
            ..Default::default()
        };
        let rendered = registration.to_string();
        assert!(rendered.contains(r#"Supported Check Types: "[\"oval\"]""#));
        assert!(rendered.contains("\n\tAsset Information: \"\""));
    }
}
