//! Core functionality for the relay
//!
//! This module contains the speech logic and the provider client.

pub mod providers;
pub mod speech;
