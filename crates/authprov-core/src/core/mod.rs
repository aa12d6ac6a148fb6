// authprov-core/src/core/mod.rs
// ============================================================================
// Module: AuthProv Core Types
// Description: Data model, path matcher, codecs, and response structures.
// Purpose: Provide the leaf building blocks the rule engine composes.
// Dependencies: regex, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Core types carry no validation policy of their own. They describe change
//! requests and stored resources, classify paths, convert hex and bit
//! vectors, and accumulate the verdicts rule routines produce.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod codec;
pub mod fields;
pub mod messages;
pub mod model;
pub mod path;
pub mod pattern;
pub mod response;
pub mod sqn;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use codec::Bits48;
pub use codec::bit_is_set;
pub use codec::bits48_to_hex;
pub use codec::hex_to_bits48;
pub use codec::hex_to_uint;
pub use codec::left_shift_bits;
pub use codec::uint_to_hex;
pub use model::AuthSubscription;
pub use model::AuthenticationMethod;
pub use model::Change;
pub use model::DynamicData;
pub use model::LegacyAuthSubscription;
pub use model::Operation;
pub use model::ProvJournal;
pub use model::RelatedResource;
pub use model::RelatedResources;
pub use model::ResourceKind;
pub use model::ResourceLookupError;
pub use model::SqnScheme;
pub use model::StaticData;
pub use model::SubscriberIdentity;
pub use model::ValidationRequest;
pub use path::PathShape;
pub use pattern::Pattern;
pub use response::ErrorKind;
pub use response::ResponseAssembler;
pub use response::StatusCode;
pub use response::ValidationError;
pub use response::ValidationReport;
pub use response::Verdict;
pub use sqn::compute_sqn_from_seq_he;
