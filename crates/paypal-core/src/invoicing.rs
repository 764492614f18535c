//! # Invoicing Objects
//!
//! Wire types for merchant invoicing: the invoice resource with its
//! merchant/billing/shipping parties, item lines, costs and taxes, payment
//! and refund records, plus the search and notification payloads.
//!
//! Invoice dates ride the service's zone-labelled formats, see
//! [`crate::datetime`].

use serde::{Deserialize, Serialize};

use crate::common::{Address, Phone};
use crate::datetime::{ZonedDate, ZonedDatetime};
use crate::money::Money;

// ============================================================================
// Vocabularies
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    MarkedAsPaid,
    Cancelled,
    Refunded,
    PartiallyRefunded,
    MarkedAsRefunded,
}

/// Locales the service can render and send an invoice in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingInfoLanguage {
    #[serde(rename = "da_DK")]
    DaDk,
    #[serde(rename = "de_DE")]
    DeDe,
    #[serde(rename = "en_AU")]
    EnAu,
    #[serde(rename = "en_GB")]
    EnGb,
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "es_ES")]
    EsEs,
    #[serde(rename = "es_XC")]
    EsXc,
    #[serde(rename = "fr_CA")]
    FrCa,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "fr_XC")]
    FrXc,
    #[serde(rename = "he_IL")]
    HeIl,
    #[serde(rename = "id_ID")]
    IdId,
    #[serde(rename = "it_IT")]
    ItIt,
    #[serde(rename = "ja_JP")]
    JaJp,
    #[serde(rename = "nl_NL")]
    NlNl,
    #[serde(rename = "no_NO")]
    NoNo,
    #[serde(rename = "pl_PL")]
    PlPl,
    #[serde(rename = "pt_BR")]
    PtBr,
    #[serde(rename = "pt_PT")]
    PtPt,
    #[serde(rename = "ru_RU")]
    RuRu,
    #[serde(rename = "sv_SE")]
    SvSe,
    #[serde(rename = "th_TH")]
    ThTh,
    #[serde(rename = "tr_TR")]
    TrTr,
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[serde(rename = "zh_HK")]
    ZhHk,
    #[serde(rename = "zh_TW")]
    ZhTw,
    #[serde(rename = "zh_XC")]
    ZhXc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentTermType {
    #[serde(rename = "DUE_ON_RECEIPT")]
    DueOnReceipt,
    #[serde(rename = "NO_DUE_DATE")]
    NoDueDate,
    #[serde(rename = "NET_10")]
    Net10,
    #[serde(rename = "NET_15")]
    Net15,
    #[serde(rename = "NET_30")]
    Net30,
    #[serde(rename = "NET_45")]
    Net45,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentDetailType {
    Paypal,
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentDetailTransactionType {
    Sale,
    Authorization,
    Capture,
}

/// How an externally recorded payment was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentDetailMethod {
    BankTransfer,
    Cash,
    Check,
    CreditCard,
    DebitCard,
    Paypal,
    WireTransfer,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundDetailType {
    Paypal,
    External,
}

// ============================================================================
// Invoice
// ============================================================================

/// A merchant invoice, from draft through payment or refund
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_info: Option<MerchantInfo>,

    /// The service supports exactly one recipient entry today
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub billing_info: Vec<BillingInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_info: Option<ShippingInfo>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<InvoiceItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<ZonedDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_term: Option<PaymentTerm>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Cost>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<ShippingCost>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomAmount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_calculated_after_discount: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_inclusive: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Bookkeeping memo, never shown to the payer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_memo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Money>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_details: Vec<PaymentDetail>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub refund_details: Vec<RefundDetail>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<InvoiceMetadata>,
}

/// One line of an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub quantity: f64,
    pub unit_price: Money,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Tax>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<ZonedDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Cost>,
}

impl InvoiceItem {
    pub fn new(name: impl Into<String>, quantity: f64, unit_price: Money) -> Self {
        Self {
            name: name.into(),
            description: None,
            quantity,
            unit_price,
            tax: None,
            date: None,
            discount: None,
        }
    }
}

/// The merchant sending the invoice
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MerchantInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<Phone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// The payer the invoice is billed to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<BillingInfoLanguage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentTerm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_type: Option<PaymentTermType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<ZonedDate>,
}

/// Discount as a percentage, a fixed amount, or both
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingCost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Tax>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tax {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

/// Labelled extra charge or credit on top of the item lines
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

/// Payment recorded against the invoice, on the service or externally
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentDetail {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub detail_type: Option<PaymentDetailType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<PaymentDetailTransactionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentDetailMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Refund recorded against the invoice
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefundDetail {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub refund_type: Option<RefundDetailType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Audit trail the service maintains on every invoice
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_sent_date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sent_date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sent_by: Option<String>,
}

/// Criteria for the invoice search endpoint; unset criteria are omitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_business_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_total_amount: Option<Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_total_amount: Option<Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_invoice_date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_invoice_date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_due_date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_due_date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_payment_date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_payment_date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_creation_date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_creation_date: Option<ZonedDatetime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count_required: Option<bool>,
}

/// Email notification switches for send/remind/cancel calls.
/// Both flags always reach the wire, absence would not mean `false`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Notification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default)]
    pub send_to_merchant: bool,

    #[serde(default)]
    pub send_to_payer: bool,
}
