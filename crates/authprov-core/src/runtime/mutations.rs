// authprov-core/src/runtime/mutations.rs
// ============================================================================
// Module: AuthProv Change Mutations
// Description: Derived dynamic data and backfilled attributes for accepted changes.
// Purpose: Produce the normalized change that is returned to the caller.
// Dependencies: crate::core, crate::runtime::backfill
// ============================================================================

//! ## Overview
//! Mutations only touch static-data paths and always return a new
//! [`Change`]; the request is never modified.
//!
//! - CREATE with a legacy record derives the SQN scheme from SEQHE, then
//!   backfills static attributes.
//! - CREATE without a legacy record starts a counter-based SQN at zero.
//! - UPDATE drops dynamic data unless the stored subscription has some.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::Change;
use crate::core::DynamicData;
use crate::core::LegacyAuthSubscription;
use crate::core::Operation;
use crate::core::PathShape;
use crate::core::RelatedResources;
use crate::core::SqnScheme;
use crate::core::path;
use crate::core::sqn::compute_sqn_from_seq_he;
use crate::runtime::backfill::backfill_static_data;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// SEQHE value marking a counter that was never used.
pub const SEQHE_UNSET: &str = "FFFFFFFFFFFF";

/// Initial SQN for subscribers without a legacy record.
pub const SQN_INITIAL: &str = "000000000000";

// ============================================================================
// SECTION: Mutations
// ============================================================================

/// Returns the accepted form of `change` with derived fields applied.
#[must_use]
pub fn compute_mutations(change: &Change, related: &RelatedResources) -> Change {
    let mut derived = change.clone();
    if path::classify(&change.resource_path) != PathShape::StaticData {
        return derived;
    }

    match change.operation {
        Operation::Create => {
            match related.legacy(&path::legacy_path(&change.resource_path)) {
                Ok(legacy) => {
                    derived.auth_subscription.dynamic_data = Some(dynamic_from_legacy(legacy));
                    derived.auth_subscription.static_data = change
                        .static_data()
                        .map(|static_data| backfill_static_data(static_data, legacy));
                }
                Err(_) => {
                    derived.auth_subscription.dynamic_data = Some(DynamicData::derived(
                        SqnScheme::NonTimeBased,
                        Some(SQN_INITIAL.to_string()),
                    ));
                }
            }
        }
        Operation::Update => {
            if let Ok(stored) = related.auth_subscription(&change.resource_path)
                && stored.dynamic_data.is_none()
            {
                derived.auth_subscription.dynamic_data = None;
            }
        }
        Operation::Delete => {}
    }
    derived
}

/// Derives dynamic data from the legacy SEQHE counter.
fn dynamic_from_legacy(legacy: &LegacyAuthSubscription) -> DynamicData {
    match legacy.seq_he.as_deref() {
        Some(seq_he) if seq_he != SEQHE_UNSET => DynamicData::derived(
            SqnScheme::NonTimeBased,
            Some(compute_sqn_from_seq_he(seq_he)),
        ),
        _ => DynamicData::derived(SqnScheme::TimeBased, None),
    }
}
