//! HTTP clients for pihole-warden.
//!
//! [`PiholeClient`] talks to the Pi-hole v6 appliance API with persistent
//! session handling; [`NetifyClient`] queries the Netify Informatics
//! domain-reputation endpoint.

mod client;
mod netify;
mod session;

pub use client::{PiholeClient, PiholeClientBuilder};
pub use netify::NetifyClient;
pub use session::SessionStore;
pub use warden_core::{Result, WardenError};
