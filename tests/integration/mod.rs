//! Integration tests for azure-tts-relay
//!
//! These tests drive the public API and the HTTP app end to end, with
//! wiremock standing in for Azure.

pub mod error_handling_tests;
