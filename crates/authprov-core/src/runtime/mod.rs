// authprov-core/src/runtime/mod.rs
// ============================================================================
// Module: AuthProv Runtime
// Description: Rule engine, validation rules, and derived-field computation.
// Purpose: Turn a validation request into a verdict and normalized changes.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Runtime modules hold all validation policy. Every entry point funnels
//! through [`RuleEngine`] so adapters share one set of rules.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod backfill;
pub mod engine;
pub mod mutations;
pub mod rules;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use backfill::backfill_static_data;
pub use engine::RuleEngine;
pub use mutations::compute_mutations;
