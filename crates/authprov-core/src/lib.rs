// authprov-core/src/lib.rs
// ============================================================================
// Module: AuthProv Core Library
// Description: Public API surface for the auth-subscription validation core.
// Purpose: Expose the data model, path matcher, codecs, and rule engine.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! AuthProv core validates batches of 5G/4G auth-subscription provisioning
//! changes against a snapshot of related resources. It is transport-agnostic:
//! callers hand over a fully decoded [`ValidationRequest`] and receive a
//! [`ValidationReport`] carrying the overall verdict, accepted changes with
//! derived fields, or structured errors.
//!
//! Security posture: change sets and related resources are untrusted input;
//! validation never panics and records every rejection as data.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use runtime::RuleEngine;
pub use runtime::backfill_static_data;
pub use runtime::compute_mutations;
