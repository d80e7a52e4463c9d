//! Parameters for each client operation.
//!
//! Merchant account and currency are optional everywhere; unset values fall
//! back to the client instance and then to the configuration defaults.

use adyen_types::{Contract, payments::LATEST_RECURRING_DETAIL};

/// Shopper details sent along with a payment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shopper {
    /// Your id for this shopper
    pub reference: Option<String>,
    pub email: Option<String>,
    /// Last known IP address
    pub ip: Option<String>,
}

impl Shopper {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }
}

/// Charge or verify a card encrypted by the client-side encryption library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPayment {
    pub encrypted_card: String,
    /// Amount in minor units
    pub amount: i64,
    /// Your id for this transaction
    pub reference: String,
    pub merchant_account: Option<String>,
    pub currency: Option<String>,
    pub shopper: Shopper,
}

impl CardPayment {
    pub fn new(encrypted_card: impl Into<String>, amount: i64, reference: impl Into<String>) -> Self {
        Self {
            encrypted_card: encrypted_card.into(),
            amount,
            reference: reference.into(),
            merchant_account: None,
            currency: None,
            shopper: Shopper::default(),
        }
    }

    pub fn with_merchant_account(mut self, merchant_account: impl Into<String>) -> Self {
        self.merchant_account = Some(merchant_account.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_shopper(mut self, shopper: Shopper) -> Self {
        self.shopper = shopper;
        self
    }
}

/// Store a card for later recurring charges without charging it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringContractRequest {
    pub encrypted_card: String,
    pub reference: String,
    /// Shopper the card is stored for; the reference is mandatory
    pub shopper: Shopper,
    pub merchant_account: Option<String>,
    pub currency: Option<String>,
}

impl RecurringContractRequest {
    pub fn new(
        encrypted_card: impl Into<String>,
        reference: impl Into<String>,
        shopper: Shopper,
    ) -> Self {
        Self {
            encrypted_card: encrypted_card.into(),
            reference: reference.into(),
            shopper,
            merchant_account: None,
            currency: None,
        }
    }

    pub fn with_merchant_account(mut self, merchant_account: impl Into<String>) -> Self {
        self.merchant_account = Some(merchant_account.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// Charge a shopper's stored payment method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringPayment {
    pub reference: String,
    pub shopper_reference: String,
    /// Amount in minor units
    pub amount: i64,
    /// Stored method to charge, "LATEST" by default
    pub recurring_reference: String,
    pub merchant_account: Option<String>,
    pub currency: Option<String>,
}

impl RecurringPayment {
    pub fn new(
        reference: impl Into<String>,
        shopper_reference: impl Into<String>,
        amount: i64,
    ) -> Self {
        Self {
            reference: reference.into(),
            shopper_reference: shopper_reference.into(),
            amount,
            recurring_reference: LATEST_RECURRING_DETAIL.to_string(),
            merchant_account: None,
            currency: None,
        }
    }

    pub fn with_recurring_reference(mut self, recurring_reference: impl Into<String>) -> Self {
        self.recurring_reference = recurring_reference.into();
        self
    }

    pub fn with_merchant_account(mut self, merchant_account: impl Into<String>) -> Self {
        self.merchant_account = Some(merchant_account.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// List the payment methods stored for a shopper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringDetailsQuery {
    pub shopper_reference: String,
    pub contract: Contract,
    pub merchant_account: Option<String>,
}

impl RecurringDetailsQuery {
    pub fn new(shopper_reference: impl Into<String>) -> Self {
        Self {
            shopper_reference: shopper_reference.into(),
            contract: Contract::default(),
            merchant_account: None,
        }
    }

    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.contract = contract;
        self
    }

    pub fn with_merchant_account(mut self, merchant_account: impl Into<String>) -> Self {
        self.merchant_account = Some(merchant_account.into());
        self
    }
}

/// Modify an existing payment (capture, cancel, refund, cancel or refund)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modification {
    /// PSP reference Adyen returned for the payment
    pub original_reference: String,
    /// Your id for this modification
    pub reference: String,
    pub merchant_account: Option<String>,
    /// Currency for captures and refunds
    pub currency: Option<String>,
}

impl Modification {
    pub fn new(original_reference: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            original_reference: original_reference.into(),
            reference: reference.into(),
            merchant_account: None,
            currency: None,
        }
    }

    pub fn with_merchant_account(mut self, merchant_account: impl Into<String>) -> Self {
        self.merchant_account = Some(merchant_account.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}
