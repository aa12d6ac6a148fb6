// authprov-cli/src/lib.rs
// ============================================================================
// Module: AuthProv CLI Library
// Description: Shared helpers for the authprov command-line interface.
// Purpose: Expose i18n, anonymization, and audit utilities to the binary.
// Dependencies: authprov-config, authprov-core, serde, serde_json
// ============================================================================

//! ## Overview
//! Library surface used by the `authprov` binary. Message formatting lives in
//! [`i18n`], identifier masking in [`anonymize`], and validation audit events
//! with their sinks in [`audit`].

// ============================================================================
// SECTION: Modules
// ============================================================================

/// IMSI masking for audit output.
pub mod anonymize;
/// Validation audit events and sinks.
pub mod audit;
/// Internationalization helpers and message catalog.
pub mod i18n;

#[cfg(test)]
mod tests;
