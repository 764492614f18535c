//! # Webhook Objects
//!
//! Wire types for webhook subscriptions and the events they deliver.
//!
//! An event's `resource` is polymorphic: the JSON object it carries is
//! picked by the sibling `resource_type` string. Decoding dispatches into
//! the payments-family types for the kinds this crate models and keeps
//! anything else as raw JSON, so an event list never fails wholesale on an
//! unmodeled resource kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::Link;
use crate::payments::{Authorization, Capture, Refund, Sale};

/// Event name a webhook can subscribe to, e.g. `PAYMENT.SALE.COMPLETED`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventType {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EventType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// A webhook subscription; the service caps an app at ten
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// HTTPS endpoint the service delivers events to
    pub url: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event_types: Vec<EventType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Webhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// A delivered webhook event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// Kind selector for `resource`, e.g. `sale` or `dispute`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<EventResource>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// The object an event was fired about
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EventResource {
    Sale(Sale),
    Authorization(Authorization),
    Capture(Capture),
    Refund(Refund),
    /// Any resource kind this crate does not model, kept verbatim
    Other(Value),
}

impl EventResource {
    fn from_parts(resource_type: Option<&str>, value: Value) -> Result<Self, String> {
        let kind = resource_type.unwrap_or_default();
        let decode_err = |e: serde_json::Error| format!("invalid {kind} event resource: {e}");

        if kind.eq_ignore_ascii_case("sale") {
            Ok(Self::Sale(serde_json::from_value(value).map_err(decode_err)?))
        } else if kind.eq_ignore_ascii_case("authorization") {
            Ok(Self::Authorization(
                serde_json::from_value(value).map_err(decode_err)?,
            ))
        } else if kind.eq_ignore_ascii_case("capture") {
            Ok(Self::Capture(
                serde_json::from_value(value).map_err(decode_err)?,
            ))
        } else if kind.eq_ignore_ascii_case("refund") {
            Ok(Self::Refund(
                serde_json::from_value(value).map_err(decode_err)?,
            ))
        } else {
            Ok(Self::Other(value))
        }
    }
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    create_time: Option<DateTime<Utc>>,

    #[serde(default)]
    resource_type: Option<String>,

    #[serde(default)]
    event_type: Option<String>,

    #[serde(default)]
    summary: Option<String>,

    #[serde(default)]
    resource: Option<Value>,

    #[serde(default)]
    links: Vec<Link>,
}

impl TryFrom<RawEvent> for Event {
    type Error = String;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let resource = match raw.resource {
            Some(value) => Some(EventResource::from_parts(
                raw.resource_type.as_deref(),
                value,
            )?),
            None => None,
        };

        Ok(Self {
            id: raw.id,
            create_time: raw.create_time,
            resource_type: raw.resource_type,
            event_type: raw.event_type,
            summary: raw.summary,
            resource,
            links: raw.links,
        })
    }
}

/// Page of events returned by the event search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventList {
    #[serde(default)]
    pub events: Vec<Event>,

    #[serde(default)]
    pub count: i32,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Filters for the event search; unset filters are left off the query string
#[derive(Debug, Clone, Default)]
pub struct EventSearch {
    pub page_size: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}
