//! # warden-cli
//!
//! Command-line daemon that polls a Pi-hole appliance's query log,
//! classifies recently allowed domains via Netify Informatics, and adds
//! domains in undesired categories to the appliance's regex deny list.
//!
//! Configuration comes from flags or the environment; `PIHOLE_PASSWORD`
//! is required and the process refuses to start without it.

pub mod cli;

pub use cli::run;
