//! The Security Content Automation Protocol (SCAP) assessment architecture exchanges JSON
//! messages among an Application, a Manager, Collectors, Policy Compliance eXecutors (PCXs),
//! Policy Compliance Engines (PCEs), and a Repository.
//!
//! This crate provides types for those messages and their wire encoding.
//!
//! # Crate Purpose
//! This crate helps implementers of SCAP architecture components construct, encode, and decode
//! the messages that drive an assessment. It deliberately contains no transport, routing, or
//! orchestration logic; every type here is a value object that a transport layer carries as an
//! opaque JSON payload.
//!
//! Senders construct a record with [`Default`] and struct-update syntax, then call
//! [`Message::to_json`]. Receivers that know which record to expect call
//! [`Message::from_json`]; receivers that must dispatch on wire content use
//! [`AnyMessage::from_json`].

mod assessment;
mod collection;
mod error;
mod message;
mod query;
mod registration;
mod report;

pub use error::Error;

#[doc(inline)]
pub use message::{AnyMessage, Message, MessageKind};

#[doc(inline)]
pub use assessment::{CancelAssessment, InitiateAssessment, RequestAcknowledgement};

#[doc(inline)]
pub use collection::CollectorRequest;

#[doc(inline)]
pub use query::{Query, QueryResult};

#[doc(inline)]
pub use registration::Registration;

#[doc(inline)]
pub use report::ReportResults;
