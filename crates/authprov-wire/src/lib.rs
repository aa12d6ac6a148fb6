// authprov-wire/src/lib.rs
// ============================================================================
// Module: AuthProv Wire Library
// Description: JSON adapters between request documents and the rule engine.
// Purpose: Parse requests into the core model and encode validation reports.
// Dependencies: authprov-core, base64, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The wire crate owns the JSON document format. [`parse_request`] turns a
//! request document into a [`authprov_core::ValidationRequest`];
//! [`encode_report`] writes the matching response document.
//!
//! Security posture: request documents are untrusted; structural faults are
//! rejected with [`WireError`] and field faults are carried as input errors.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod constants;
pub mod encoder;
pub mod octets;
pub mod parser;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use encoder::encode_error;
pub use encoder::encode_report;
pub use octets::decode_base64_text;
pub use octets::ldap_reorder;
pub use parser::WireError;
pub use parser::parse_request;
