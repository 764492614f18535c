//! # Billing Plans and Agreements
//!
//! Wire types for subscription billing: plans with their payment
//! definitions and merchant preferences, and agreements that subscribe a
//! payer to a plan.
//!
//! `Plan` doubles as a create payload, a decoded resource and a by-id
//! reference (`Plan { id: Some(..), ..Default::default() }`), so every
//! field is optional and unset fields never reach the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Address, Link, Payee};
use crate::money::Money;
use crate::payments::{CreditCardState, CreditCardType, CreditCardToken, PaymentMethod};

// ============================================================================
// Vocabularies
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    Fixed,
    Infinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanState {
    Created,
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentDefinitionType {
    Trial,
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeModelType {
    Shipping,
    Tax,
}

/// Card networks accepted as agreement funding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentCardType {
    Visa,
    Amex,
    Solo,
    Jcb,
    Star,
    Delta,
    Discover,
    Switch,
    Maestro,
    CbNationale,
    Confinoga,
    Cofidis,
    Electron,
    Cetelem,
    ChinaUnionPay,
    Mastercard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentCardStatus {
    Expired,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditType {
    BillMeLater,
    PaypalExtrasMastercard,
    EbayMastercard,
    PaypalSmartConnect,
}

// ============================================================================
// Plans
// ============================================================================

/// A billing plan, the template an agreement subscribes to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<PlanType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PlanState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee: Option<Payee>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_definitions: Vec<PaymentDefinition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terms: Vec<Terms>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_preferences: Option<MerchantPreferences>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Trial or regular billing cycle definition inside a plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub definition_type: Option<PaymentDefinitionType>,

    /// How many frequency units pass between charges, as a decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_interval: Option<String>,

    /// `DAY`, `WEEK`, `MONTH` or `YEAR`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycles: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub charge_models: Vec<ChargeModel>,
}

/// Shipping or tax charge attached to a payment definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChargeModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub charge_type: Option<ChargeModelType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Terms {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Term kind as reported by the service; no closed vocabulary
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub term_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_billing_amount: Option<Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_range: Option<Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_editable: Option<String>,
}

/// Merchant-side behavior of a plan: redirect URLs, setup fee, retry policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MerchantPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_fee: Option<Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,

    /// `"0"` means unlimited retries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fail_attempts: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_bill_amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_fail_amount_action: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_payment_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_set: Option<String>,
}

// ============================================================================
// Agreements
// ============================================================================

/// A payer's subscription to a plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Agreement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// First billing instant; must lie in the future at create time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<AgreementPayer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_merchant_preferences: Option<MerchantPreferences>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub override_charge_models: Vec<OverrideChargeModel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,

    /// Lifecycle state as reported by the service, e.g. `Active` or
    /// `Suspended`; no closed vocabulary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Payer of an agreement; a wider funding surface than payment's `Payer`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementPayer {
    pub payment_method: PaymentMethod,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub funding_instruments: Vec<AgreementFundingInstrument>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_option_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_info: Option<AgreementPayerInfo>,
}

impl AgreementPayer {
    pub fn new(payment_method: PaymentMethod) -> Self {
        Self {
            payment_method,
            funding_instruments: Vec::new(),
            funding_option_id: None,
            payer_info: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgreementFundingInstrument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<AgreementCreditCard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_token: Option<CreditCardToken>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_card: Option<PaymentCard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_card_token: Option<PaymentCardToken>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_token: Option<BankToken>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<Credit>,
}

/// Credit card embedded in an agreement; carries approval links in responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgreementCreditCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

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

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Bank-issued card, distinct from the vault's credit card
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<PaymentCardType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_month: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_month: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentCardStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Reference to a stored payment card
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentCardToken {
    pub payment_card_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<PaymentCardType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_month: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_year: Option<String>,
}

/// Reference to a bank funding a payment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankToken {
    pub bank_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_reference_number: Option<String>,
}

/// Credit line funding instrument
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub credit_type: Option<CreditType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgreementPayerInfo {
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
    pub billing_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<AgreementShippingAddress>,
}

/// Shipping address variant agreements use; carries a default flag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgreementShippingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,

    #[serde(default)]
    pub default_address: bool,

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

/// Per-agreement override of one of the plan's charges
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverrideChargeModel {
    pub charge_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

/// Note and amount attached to an agreement state change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgreementStateDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

/// One row of an agreement transaction search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgreementTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_amount: Option<Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_updated: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_wire_names() {
        assert_eq!(
            serde_json::to_string(&PlanType::Infinite).unwrap(),
            r#""INFINITE""#
        );
        assert_eq!(
            serde_json::to_string(&ChargeModelType::Shipping).unwrap(),
            r#""shipping""#
        );
        assert_eq!(
            serde_json::to_string(&PaymentCardType::CbNationale).unwrap(),
            r#""CB_NATIONALE""#
        );
        assert_eq!(
            serde_json::to_string(&PaymentCardType::ChinaUnionPay).unwrap(),
            r#""CHINA_UNION_PAY""#
        );
        assert_eq!(
            serde_json::to_string(&CreditType::BillMeLater).unwrap(),
            r#""BILL_ME_LATER""#
        );
    }

    #[test]
    fn test_plan_create_payload_shape() {
        let plan = Plan {
            name: Some("T-Shirt of the Month Club Plan".into()),
            description: Some("Monthly plan for getting the t-shirt of the month".into()),
            plan_type: Some(PlanType::Fixed),
            payment_definitions: vec![PaymentDefinition {
                name: Some("Regular Payments".into()),
                definition_type: Some(PaymentDefinitionType::Regular),
                frequency: Some("MONTH".into()),
                frequency_interval: Some("2".into()),
                cycles: Some("12".into()),
                amount: Some(Money::new("USD", "100")),
                ..Default::default()
            }],
            merchant_preferences: Some(MerchantPreferences {
                setup_fee: Some(Money::new("USD", "1")),
                return_url: Some("https://example.com/return".into()),
                cancel_url: Some("https://example.com/cancel".into()),
                auto_bill_amount: Some("YES".into()),
                initial_fail_amount_action: Some("CONTINUE".into()),
                max_fail_attempts: Some("0".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["type"], "FIXED");
        assert_eq!(json["payment_definitions"][0]["type"], "REGULAR");
        assert_eq!(json["payment_definitions"][0]["frequency"], "MONTH");
        assert_eq!(json["merchant_preferences"]["max_fail_attempts"], "0");
        assert!(json.get("id").is_none());
        assert!(json.get("state").is_none());
    }

    #[test]
    fn test_plan_reference_by_id() {
        let reference = Plan {
            id: Some("P-94458432VR012762KRWBZEUA".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&reference).unwrap(),
            r#"{"id":"P-94458432VR012762KRWBZEUA"}"#
        );
    }

    #[test]
    fn test_agreement_decode() {
        let body = r#"{
            "id": "I-0LN988D3JACS",
            "name": "T-Shirt of the Month Club Agreement",
            "description": "Agreement for T-Shirt of the Month Club Plan",
            "state": "Active",
            "start_date": "2015-02-08T10:00:00Z",
            "payer": {"payment_method": "paypal"},
            "plan": {"id": "P-94458432VR012762KRWBZEUA", "state": "ACTIVE"},
            "links": [{"href": "https://api.sandbox.paypal.com/v1/payments/billing-agreements/I-0LN988D3JACS",
                       "rel": "self", "method": "GET"}]
        }"#;

        let agreement: Agreement = serde_json::from_str(body).unwrap();
        assert_eq!(agreement.state.as_deref(), Some("Active"));
        assert_eq!(
            agreement.payer.as_ref().unwrap().payment_method,
            PaymentMethod::Paypal
        );
        assert_eq!(
            agreement.plan.as_ref().unwrap().state,
            Some(PlanState::Active)
        );
        assert_eq!(agreement.start_date.unwrap().to_rfc3339(), "2015-02-08T10:00:00+00:00");
    }

    #[test]
    fn test_shipping_address_default_flag_tolerates_absence() {
        let body = r#"{"line1": "111 First Street", "city": "Saratoga", "country_code": "US"}"#;
        let address: AgreementShippingAddress = serde_json::from_str(body).unwrap();
        assert!(!address.default_address);
    }
}
