//! # Shared Wire Objects
//!
//! Objects that appear across every resource family: HATEOAS links,
//! addresses, phones and the PATCH envelope the service's update calls use.

use serde::{Deserialize, Serialize};

/// HATEOAS link returned on most resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enctype: Option<String>,
}

/// Billing address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    pub city: String,

    /// Two-letter country code
    pub country_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// State or province; required for US and CA addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Address kind reported on shipping addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressType {
    Residential,
    Business,
    Mailbox,
}

/// Shipping address attached to an item list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,

    pub line1: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    pub city: String,

    pub country_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Phone number in ITU-T E.164 pieces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub country_code: String,
    pub national_number: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// Merchant receiving the funds on a plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<String>,
}

// ============================================================================
// PATCH envelope
// ============================================================================

/// JSON-patch verb accepted by the update endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchOperation {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

/// Envelope the service's PATCH endpoints take: `{op, path, value}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch<T> {
    pub op: PatchOperation,
    pub path: String,
    pub value: T,
}

impl<T> Patch<T> {
    /// Whole-resource replace, the only form the update calls use
    pub fn replace(value: T) -> Self {
        Self {
            op: PatchOperation::Replace,
            path: "/".into(),
            value,
        }
    }
}
