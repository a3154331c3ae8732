//! Classification engine for pihole-warden.
//!
//! The engine owns the parts with real state and invariants: the
//! checked-domain cache, the per-domain classifier and the polling cycle
//! that ties fetch, classify, submit and persist together. It talks to the
//! outside world only through the [`warden_core::Appliance`] and
//! [`warden_core::ReputationOracle`] ports.

mod apex;
mod cache;
mod classify;
mod cycle;
mod scheduler;

pub use apex::apex_domain;
pub use cache::{DomainCache, DEFAULT_CACHE_FILE};
pub use classify::{deny_pattern, Classifier};
pub use cycle::{run_cycle, CycleReport, DEFAULT_WINDOW_SECS};
pub use scheduler::{Scheduler, DEFAULT_INTERVAL};
pub use warden_core::{Result, WardenError};
