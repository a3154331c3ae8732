//! Core types and traits for pihole-warden.
//!
//! This crate provides the foundation shared by the client and engine
//! crates:
//!
//! - **Types**: sessions, query-log entries, deny-batch wire shapes and
//!   the two-tier category table
//! - **Errors**: the [`WardenError`] taxonomy with its fatal/contained
//!   split
//! - **Ports**: the [`Appliance`] and [`ReputationOracle`] traits the
//!   engine is driven through

mod error;
pub mod ports;
pub mod types;

pub use error::{Result, WardenError};
pub use ports::{Appliance, ReputationOracle};
pub use types::*;
