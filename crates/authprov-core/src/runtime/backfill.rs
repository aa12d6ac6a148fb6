// authprov-core/src/runtime/backfill.rs
// ============================================================================
// Module: AuthProv Static Attribute Backfill
// Description: Fills unset 5G static attributes from a legacy 4G record.
// Purpose: Carry credentials over when a 4G subscriber is provisioned for 5G.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Backfill never overwrites an attribute the client supplied. Legacy
//! integers become decimal strings, except AMFVALUE which becomes four
//! upper-case hex characters.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::LegacyAuthSubscription;
use crate::core::StaticData;
use crate::core::codec::uint_to_hex;

/// Hex width of the authentication management field.
const AMF_HEX_WIDTH: usize = 4;

// ============================================================================
// SECTION: Backfill
// ============================================================================

/// Returns `static_data` with unset attributes filled from `legacy`.
#[must_use]
pub fn backfill_static_data(
    static_data: &StaticData,
    legacy: &LegacyAuthSubscription,
) -> StaticData {
    let mut filled = static_data.clone();
    fill(&mut filled.enc_permanent_key, legacy.eki.clone());
    fill(&mut filled.a4_key_ind, decimal(legacy.kind));
    fill(&mut filled.a4_ind, decimal(legacy.a4_ind));
    fill(&mut filled.algorithm_id, decimal(legacy.f_set_ind));
    // Negative AMF values have no hex rendering and are skipped.
    fill(
        &mut filled.authentication_management_field,
        legacy
            .amf_value
            .and_then(|amf| u32::try_from(amf).ok())
            .map(|amf| uint_to_hex(amf, AMF_HEX_WIDTH)),
    );
    fill(&mut filled.enc_opc_key, legacy.eopc.clone());
    fill(&mut filled.a4_key_v, decimal(legacy.v_number));
    fill(&mut filled.aka_algorithm_ind, decimal(legacy.aka_alg_ind));
    filled
}

/// Sets `slot` to `value` when the slot is unset.
fn fill(slot: &mut Option<String>, value: Option<String>) {
    if slot.is_none() {
        *slot = value;
    }
}

/// Renders an optional legacy integer in decimal.
fn decimal(value: Option<i64>) -> Option<String> {
    value.map(|value| value.to_string())
}
