use adyen_sdk::{CardPayment, Response, Shopper};

use crate::{Context, generate_reference};

/// Card and shopper arguments shared by authorise and verify
#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct CardArgs {
    /// Card data encrypted by the client-side encryption library
    #[arg(long = "encrypted-card")]
    pub encrypted_card: String,

    /// Amount in minor units (e.g. cents)
    #[arg(long)]
    pub amount: i64,

    /// Your reference for this transaction (default: random UUID)
    #[arg(long)]
    pub reference: Option<String>,

    #[arg(long = "shopper-reference")]
    pub shopper_reference: Option<String>,

    #[arg(long = "shopper-email")]
    pub shopper_email: Option<String>,

    #[arg(long = "shopper-ip")]
    pub shopper_ip: Option<String>,

    /// Merchant account for this transaction only
    #[arg(long = "for-merchant-account")]
    pub merchant_account: Option<String>,

    /// Currency for this transaction only
    #[arg(long = "for-currency")]
    pub currency: Option<String>,
}

impl CardArgs {
    fn payment(&self) -> CardPayment {
        let reference = self.reference.clone().unwrap_or_else(generate_reference);
        let mut payment = CardPayment::new(&self.encrypted_card, self.amount, reference);
        payment.merchant_account = self.merchant_account.clone();
        payment.currency = self.currency.clone();
        payment.shopper = Shopper {
            reference: self.shopper_reference.clone(),
            email: self.shopper_email.clone(),
            ip: self.shopper_ip.clone(),
        };
        payment
    }
}

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct AuthoriseCommand {
    #[command(flatten)]
    pub card: CardArgs,
}

impl AuthoriseCommand {
    pub fn execute(&self, ctx: &Context) -> Result<Response, String> {
        ctx.client
            .authorise(self.card.payment())
            .map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct VerifyCommand {
    #[command(flatten)]
    pub card: CardArgs,
}

impl VerifyCommand {
    pub fn execute(&self, ctx: &Context) -> Result<Response, String> {
        ctx.client
            .verify(self.card.payment())
            .map_err(|e| e.to_string())
    }
}
