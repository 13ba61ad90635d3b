//! Utility modules for the relay
//!
//! - **error**: Error taxonomy and its HTTP mapping
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;
