//! Error handling for the relay
//!
//! Every failure a request can hit is one [`RelayError`] variant, and one
//! `ResponseError` impl turns a variant into its HTTP status and JSON body.

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::ErrorBody;
pub use types::{RelayError, Result};
