//! Adyen SDK
//!
//! Blocking client for the Adyen Payment, Modification and Recurring APIs.
//! Requests are built from typed parameters; responses come back as a
//! normalized [`Response`] whose top-level fields are read by snake_cased name.
//!
//! # Quick Start
//!
//! ```no_run
//! use adyen_sdk::{AdyenClient, Configuration, Modification, RecurringPayment};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Configuration::load("adyen.toml".as_ref())?;
//!     let client = AdyenClient::new(config)?;
//!
//!     // Charge the card stored for "john"
//!     let charge = client.authorise_recurring_payment(
//!         RecurringPayment::new("order-123", "john", 4500),
//!     )?;
//!
//!     if charge.is_approved() {
//!         let psp_reference = charge.field("psp_reference")?.as_str().unwrap_or_default();
//!
//!         // Changed our mind
//!         let refund = client.refund(Modification::new(psp_reference, "refund-123"), 4500)?;
//!         println!("refund accepted: {}", refund.field("response")?);
//!     } else if charge.has_field("refusal_reason") {
//!         println!("refused: {}", charge.field("refusal_reason")?);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Responses
//!
//! Adyen's camelCased keys are normalized (`pspReference` becomes
//! `psp_reference`) and single-entry wrapper objects inside lists are removed
//! (`details: [{RecurringDetail: {...}}]` becomes `details: [{...}]`). See
//! [`adyen_types::massage`].
//!
//! A refused payment or a non-200 status is not an error. Errors are reserved
//! for configuration problems, transport failures and missing fields.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod requests;
pub mod transport;

// Re-export main types at crate root
pub use adyen_types::{Contract, FieldNotFound, Response};
pub use client::{AdyenClient, generation_time};
pub use config::Configuration;
pub use endpoints::Endpoint;
pub use error::{AdyenError, Result};
pub use requests::{
    CardPayment, Modification, RecurringContractRequest, RecurringDetailsQuery, RecurringPayment,
    Shopper,
};
pub use transport::{HttpTransport, RawResponse, Transport};
