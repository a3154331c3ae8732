//! Pi-hole query-log categorizer and auto-blocker.
//!
//! Polls a Pi-hole appliance's query log, classifies recently allowed apex
//! domains against the Netify Informatics reputation service, and pushes
//! regex deny-list entries for domains in undesired categories back to the
//! appliance.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use warden::{Classifier, DomainCache, NetifyClient, PiholeClient, Scheduler};
//!
//! #[tokio::main]
//! async fn main() -> warden::Result<()> {
//!     let pihole = PiholeClient::builder(std::env::var("PIHOLE_PASSWORD").unwrap())
//!         .base_url("http://pi.hole/api/")
//!         .build();
//!     let classifier = Classifier::new(NetifyClient::new());
//!     let mut cache = DomainCache::load("checked_domains.json")?;
//!
//!     Scheduler::default()
//!         .run(&pihole, &classifier, &mut cache, warden::DEFAULT_WINDOW_SECS)
//!         .await;
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

// Re-export core types and ports
pub use warden_core::*;

// Re-export clients
pub use warden_client::{NetifyClient, PiholeClient, PiholeClientBuilder, SessionStore};

// Re-export the engine
pub use warden_engine::{
    apex_domain, deny_pattern, run_cycle, Classifier, CycleReport, DomainCache, Scheduler,
    DEFAULT_CACHE_FILE, DEFAULT_INTERVAL, DEFAULT_WINDOW_SECS,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
