//! Shared types for the Adyen client.
//!
//! - [`normalize_key`] and [`massage`] turn raw Adyen JSON into a predictably
//!   keyed tree
//! - [`Response`] wraps a massaged body together with its HTTP status
//! - [`payments`] holds the request bodies sent to Adyen

pub mod error;
pub mod massage;
pub mod normalize;
pub mod payments;
pub mod response;

pub use error::{FieldNotFound, UnexpectedBody};
pub use massage::massage;
pub use normalize::normalize_key;
pub use payments::{
    AdditionalData, Amount, Contract, ModificationRequest, PaymentRequest, Recurring,
    RecurringDetailsRequest,
};
pub use response::Response;
