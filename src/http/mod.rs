//! HTTP probing module for the Janus scanner

pub mod client;
pub use client::{ProbeClient, ProbeOutcome, ProbeResult};
