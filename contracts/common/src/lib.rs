//! Shared utilities for the EHR ledger contracts.
//!
//! This crate provides:
//! - [`digest`]: SHA-256 commitments rendered as lowercase hex strings.
//! - [`ttl`]: storage TTL conventions and extension helpers.

#![no_std]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod digest;
pub mod ttl;

pub use digest::*;
pub use ttl::*;
