//! # Payment Objects
//!
//! Wire types for the payments family: payments and their transactions,
//! sales, authorizations, captures, refunds and orders, plus the state
//! vocabularies the service uses for them.
//!
//! Resource structs keep every field optional and omit unset fields when
//! serialized, so the same type works for create payloads, partial updates
//! and decoded responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Address, Link, ShippingAddress};
use crate::money::Amount;

// ============================================================================
// State vocabularies
// ============================================================================

/// What a payment does: immediate sale, authorization or order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntent {
    Sale,
    Authorize,
    Order,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Created,
    Approved,
    Failed,
    Pending,
    Canceled,
    Expired,
}

/// Funding source selector on a payer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayerStatus {
    Verified,
    Unverified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationState {
    Pending,
    Authorized,
    Captured,
    PartiallyCaptured,
    Expired,
    Voided,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureState {
    Pending,
    Completed,
    Refunded,
    PartiallyRefunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleState {
    Pending,
    Completed,
    Refunded,
    PartiallyRefunded,
}

/// How the funds of a sale move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalePaymentMode {
    InstantTransfer,
    ManualBankTransfer,
    DelayedTransfer,
    Echeck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundState {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    Pending,
    Completed,
    Voided,
    Refunded,
    PartiallyRefunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditCardState {
    Expired,
    Ok,
}

/// Card networks the vault and payments endpoints accept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditCardType {
    Visa,
    Mastercard,
    Discover,
    Amex,
}

/// Why a sale or order sits in the pending state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum PendingReason {
    PayerShippingUnconfirmed,
    MultiCurrency,
    RiskReview,
    RegulatoryReview,
    VerificationRequired,
    Order,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    Chargeback,
    Guarantee,
    BuyerComplaint,
    Refund,
    UnconfirmedShippingAddress,
    Echeck,
    InternationalWithdrawal,
    ReceivingPreferenceMandatesManualAction,
    PaymentReview,
    RegulatoryReview,
    Unilateral,
    VerificationRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProtectionEligibility {
    Eligible,
    PartiallyEligible,
    Ineligible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProtectionEligibilityType {
    Eligible,
    ItemNotReceivedEligible,
    Ineligible,
    UnauthorizedPaymentEligible,
}

// ============================================================================
// Payment
// ============================================================================

/// A payment, the root resource of the payments family
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Payment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<PaymentIntent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<Payer>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<Transaction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_urls: Option<RedirectUrls>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PaymentState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_profile_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Source of the funds for a payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payer {
    pub payment_method: PaymentMethod,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub funding_instruments: Vec<FundingInstrument>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_info: Option<PayerInfo>,

    #[serde(rename = "payer_status", skip_serializing_if = "Option::is_none")]
    pub status: Option<PayerStatus>,
}

impl Payer {
    pub fn new(payment_method: PaymentMethod) -> Self {
        Self {
            payment_method,
            funding_instruments: Vec::new(),
            payer_info: None,
            status: None,
        }
    }
}

/// Payer details the service collects during approval
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayerInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,

    /// Payer tax id kind, e.g. `BR_CPF`; the service defines no closed set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

/// Exactly one funding source per instrument
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundingInstrument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_token: Option<CreditCardToken>,
}

/// Credit card details, either inline on a payment or stored in the vault.
/// Responses mask `number` down to the last four digits
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CreditCardType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_month: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CreditCardState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

/// Reference to a card previously stored in the vault
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditCardToken {
    pub credit_card_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_month: Option<String>,
}

/// One transaction inside a payment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_list: Option<ItemList>,

    /// Sale/authorization/capture/refund objects spawned by this transaction
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_resources: Vec<RelatedResource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_descriptor: Option<String>,
}

/// Entry in `related_resources`; the wire emits exactly one key per entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelatedResource {
    Sale(Sale),
    Authorization(Authorization),
    Capture(Capture),
    Refund(Refund),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    pub quantity: u32,
    pub name: String,

    /// Unit price as a decimal string
    pub price: String,

    pub currency: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
}

/// Where the payer lands after approving or cancelling on the service's site
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedirectUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

// ============================================================================
// Sale, authorization, capture, refund, order
// ============================================================================

/// Completed payment transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SaleState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_payment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<SalePaymentMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_reason: Option<PendingReason>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<ReasonCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearing_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_eligibility: Option<ProtectionEligibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_eligibility_type: Option<ProtectionEligibilityType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Funds held on the payer's instrument, waiting to be captured
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authorization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AuthorizationState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_payment: Option<String>,

    /// End of the honor period, after which the hold lapses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearing_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_eligibility: Option<ProtectionEligibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_eligibility_type: Option<ProtectionEligibilityType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Funds actually taken against an authorization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Capture {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_final_capture: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CaptureState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_payment: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Money returned for a sale or capture
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Refund {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<RefundState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_payment: Option<String>,
}

/// Payment held as an order, to be authorized and captured later
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_unit_reference_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_reason: Option<PendingReason>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<ReasonCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearing_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_eligibility: Option<ProtectionEligibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_eligibility_type: Option<ProtectionEligibilityType>,
}
