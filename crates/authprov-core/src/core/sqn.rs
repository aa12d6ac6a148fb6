// authprov-core/src/core/sqn.rs
// ============================================================================
// Module: AuthProv SQN Derivation
// Description: Derives a 5G sequence number from a legacy SEQHE counter.
// Purpose: Seed dynamic data when migrating a 4G subscriber.
// Dependencies: crate::core::codec
// ============================================================================

//! ## Overview
//! The 5G SQN is the 48-bit legacy SEQHE counter shifted left by the
//! five index bits.

use crate::core::codec::bits48_to_hex;
use crate::core::codec::hex_to_bits48;
use crate::core::codec::left_shift_bits;

/// Number of index bits appended below the sequence counter.
pub const SQN_INDEX_BITS: u32 = 5;

/// Computes the SQN hex string for a legacy SEQHE hex string.
#[must_use]
pub fn compute_sqn_from_seq_he(seq_he: &str) -> String {
    bits48_to_hex(left_shift_bits(hex_to_bits48(seq_he), SQN_INDEX_BITS))
}
