use adyen_sdk::{Modification, Response};

use crate::{Context, generate_reference};

/// Identifies the payment being modified
#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct ModificationArgs {
    /// PSP reference Adyen returned for the payment
    #[arg(long = "original-reference")]
    pub original_reference: String,

    /// Your reference for this modification (default: random UUID)
    #[arg(long)]
    pub reference: Option<String>,
}

impl ModificationArgs {
    fn modification(&self) -> Modification {
        let reference = self.reference.clone().unwrap_or_else(generate_reference);
        Modification::new(&self.original_reference, reference)
    }
}

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct CaptureCommand {
    #[command(flatten)]
    pub target: ModificationArgs,

    /// Amount to capture in minor units
    #[arg(long)]
    pub amount: i64,
}

impl CaptureCommand {
    pub fn execute(&self, ctx: &Context) -> Result<Response, String> {
        ctx.client
            .capture(self.target.modification(), self.amount)
            .map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct CancelCommand {
    #[command(flatten)]
    pub target: ModificationArgs,
}

impl CancelCommand {
    pub fn execute(&self, ctx: &Context) -> Result<Response, String> {
        ctx.client
            .cancel(self.target.modification())
            .map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct RefundCommand {
    #[command(flatten)]
    pub target: ModificationArgs,

    /// Amount to refund in minor units
    #[arg(long)]
    pub amount: i64,
}

impl RefundCommand {
    pub fn execute(&self, ctx: &Context) -> Result<Response, String> {
        ctx.client
            .refund(self.target.modification(), self.amount)
            .map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct CancelOrRefundCommand {
    #[command(flatten)]
    pub target: ModificationArgs,
}

impl CancelOrRefundCommand {
    pub fn execute(&self, ctx: &Context) -> Result<Response, String> {
        ctx.client
            .cancel_or_refund(self.target.modification())
            .map_err(|e| e.to_string())
    }
}
