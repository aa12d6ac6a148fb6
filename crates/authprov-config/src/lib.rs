// authprov-config/src/lib.rs
// ============================================================================
// Module: AuthProv Config Library
// Description: Configuration model and validation for authprov.toml.
// Purpose: Single source of truth for authprov.toml semantics.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! `authprov-config` defines the configuration model read by the `authprov`
//! CLI: response formatting, audit sink selection, and request limits.
//!
//! Security posture: config inputs are untrusted and validated fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
