use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Message, MessageKind};

/// Sent by the Application, Manager, Collectors, or PCXs to ask the Repository for
/// information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(rename = "message_type")]
    pub kind: MessageKind,
    pub query: String,
}

impl Query {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            kind: Self::KIND,
            query: query.into(),
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new("")
    }
}

impl Message for Query {
    const KIND: MessageKind = MessageKind::Query;
    const KEYS: &'static [&'static str] = &["message_type", "query"];
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\tMessage Type: {}", self.kind)?;
        write!(f, "\n\tQuery: {}", self.query)
    }
}

/// The Repository's answer to a [`Query`], echoing the query alongside its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(rename = "message_type")]
    pub kind: MessageKind,
    pub query: String,
    pub result: String,
}

impl QueryResult {
    pub fn new(query: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            kind: Self::KIND,
            query: query.into(),
            result: result.into(),
        }
    }
}

impl Default for QueryResult {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl Message for QueryResult {
    const KIND: MessageKind = MessageKind::QueryResult;
    const KEYS: &'static [&'static str] = &["message_type", "query", "result"];
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\tMessage Type: {}", self.kind)?;
        write!(f, "\n\tQuery: {}", self.query)?;
        write!(f, "\n\tResult: {}", self.result)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Query, QueryResult};
    use crate::{Message, MessageKind};

    #[test]
    fn decode_repository_query() {
        let text = json!({
            "message_type": 6,
            "query": "SELECT * FROM targets",
        })
        .to_string();

        let query = Query::from_json(&text).unwrap();
        assert_eq!(query.query, "SELECT * FROM targets");
        assert_eq!(query.kind, MessageKind::Query);
    }

    #[test]
    fn result_echoes_query() {
        let result = QueryResult::new("SELECT * FROM targets", r#"[{"id": "host-a"}]"#);
        let decoded = QueryResult::from_json(&result.to_json().unwrap()).unwrap();
        assert_eq!(decoded, result);
        assert_eq!(decoded.query, "SELECT * FROM targets");
    }

    #[test]
    fn query_display() {
        assert_eq!(
            Query::new("q").to_string(),
            "\n\tMessage Type: 6\n\tQuery: q"
        );
    }
}
