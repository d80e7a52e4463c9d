use adyen_sdk::{
    Contract, RecurringContractRequest, RecurringDetailsQuery, RecurringPayment, Response, Shopper,
};

use crate::{Context, generate_reference};

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct CreateContractCommand {
    /// Card data encrypted by the client-side encryption library
    #[arg(long = "encrypted-card")]
    pub encrypted_card: String,

    /// Your id for the shopper the card is stored for
    #[arg(long = "shopper-reference")]
    pub shopper_reference: String,

    #[arg(long = "shopper-email")]
    pub shopper_email: Option<String>,

    #[arg(long = "shopper-ip")]
    pub shopper_ip: Option<String>,

    /// Your reference for this transaction (default: random UUID)
    #[arg(long)]
    pub reference: Option<String>,
}

impl CreateContractCommand {
    pub fn execute(&self, ctx: &Context) -> Result<Response, String> {
        let shopper = Shopper {
            reference: Some(self.shopper_reference.clone()),
            email: self.shopper_email.clone(),
            ip: self.shopper_ip.clone(),
        };
        let reference = self.reference.clone().unwrap_or_else(generate_reference);

        ctx.client
            .create_recurring_contract(RecurringContractRequest::new(
                &self.encrypted_card,
                reference,
                shopper,
            ))
            .map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct ChargeCommand {
    #[arg(long = "shopper-reference")]
    pub shopper_reference: String,

    /// Amount in minor units (e.g. cents)
    #[arg(long)]
    pub amount: i64,

    /// Stored payment method to charge
    #[arg(long = "recurring-reference", default_value = "LATEST")]
    pub recurring_reference: String,

    /// Your reference for this transaction (default: random UUID)
    #[arg(long)]
    pub reference: Option<String>,
}

impl ChargeCommand {
    pub fn execute(&self, ctx: &Context) -> Result<Response, String> {
        let reference = self.reference.clone().unwrap_or_else(generate_reference);
        let payment = RecurringPayment::new(reference, &self.shopper_reference, self.amount)
            .with_recurring_reference(&self.recurring_reference);

        ctx.client
            .authorise_recurring_payment(payment)
            .map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct ListDetailsCommand {
    #[arg(long = "shopper-reference")]
    pub shopper_reference: String,

    /// Contract type: RECURRING, ONECLICK or "ONECLICK,RECURRING"
    #[arg(long, default_value = "RECURRING")]
    pub contract: Contract,
}

impl ListDetailsCommand {
    pub fn execute(&self, ctx: &Context) -> Result<Response, String> {
        ctx.client
            .list_recurring_details(
                RecurringDetailsQuery::new(&self.shopper_reference).with_contract(self.contract),
            )
            .map_err(|e| e.to_string())
    }
}
