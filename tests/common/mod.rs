//! Common test utilities for azure-tts-relay
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{fixtures, provider};
//!
//! #[actix_web::test]
//! async fn my_test() {
//!     let azure = provider::MockAzure::start().await;
//!     let config = fixtures::config_for(&azure);
//!     // ...
//! }
//! ```


pub use provider::MockAzure;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
