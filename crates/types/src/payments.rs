//! Request bodies for the Adyen Payment and Recurring APIs.
//!
//! Field names follow Adyen's camelCase wire format. Optional fields are left
//! out of the JSON entirely when unset.

use serde::{Deserialize, Serialize};

/// Shopper interaction used when charging a stored payment method
pub const SHOPPER_INTERACTION_CONT_AUTH: &str = "ContAuth";

/// Recurring detail reference that selects the most recently stored method
pub const LATEST_RECURRING_DETAIL: &str = "LATEST";

/// An amount in minor units (e.g. cents) with its ISO 4217 currency code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub value: i64,
    pub currency: String,
}

impl Amount {
    pub fn new(value: i64, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }

    /// Zero amount in the given currency, used for card verification
    pub fn zero(currency: impl Into<String>) -> Self {
        Self::new(0, currency)
    }
}

/// Type of recurring contract a payment method is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Contract {
    /// Merchant initiated charges without the shopper present
    #[default]
    #[serde(rename = "RECURRING")]
    Recurring,
    /// Shopper initiated charges that only need the CVC again
    #[serde(rename = "ONECLICK")]
    OneClick,
    #[serde(rename = "ONECLICK,RECURRING")]
    OneClickRecurring,
}

impl std::fmt::Display for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Contract::Recurring => write!(f, "RECURRING"),
            Contract::OneClick => write!(f, "ONECLICK"),
            Contract::OneClickRecurring => write!(f, "ONECLICK,RECURRING"),
        }
    }
}

impl std::str::FromStr for Contract {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RECURRING" => Ok(Contract::Recurring),
            "ONECLICK" => Ok(Contract::OneClick),
            "ONECLICK,RECURRING" => Ok(Contract::OneClickRecurring),
            other => Err(format!("Unknown recurring contract: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurring {
    pub contract: Contract,
}

impl From<Contract> for Recurring {
    fn from(contract: Contract) -> Self {
        Self { contract }
    }
}

/// Additional data carrying the client-side encrypted card blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalData {
    #[serde(rename = "card.encrypted.json")]
    pub card_encrypted_json: String,
}

impl AdditionalData {
    pub fn encrypted_card(encrypted_card: impl Into<String>) -> Self {
        Self {
            card_encrypted_json: encrypted_card.into(),
        }
    }
}

/// Body of `/Payment/{version}/authorise`
///
/// Shared by card authorisation, card verification, recurring contract
/// creation and recurring charges. Each operation fills in its own subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub reference: String,
    pub amount: Amount,
    pub merchant_account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<AdditionalData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_email: Option<String>,
    #[serde(rename = "shopperIP", skip_serializing_if = "Option::is_none")]
    pub shopper_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_recurring_detail_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_interaction: Option<String>,
}

impl PaymentRequest {
    pub fn new(
        reference: impl Into<String>,
        amount: Amount,
        merchant_account: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            amount,
            merchant_account: merchant_account.into(),
            additional_amount: None,
            additional_data: None,
            shopper_email: None,
            shopper_ip: None,
            shopper_reference: None,
            selected_recurring_detail_reference: None,
            selected_brand: None,
            recurring: None,
            shopper_interaction: None,
        }
    }
}

/// Body of the modification endpoints (capture, cancel, refund, cancelOrRefund)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModificationRequest {
    pub reference: String,
    pub merchant_account: String,
    /// PSP reference of the payment being modified
    pub original_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_amount: Option<Amount>,
}

/// Body of `/Recurring/{version}/listRecurringDetails`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDetailsRequest {
    pub shopper_reference: String,
    pub recurring: Recurring,
    pub merchant_account: String,
}
