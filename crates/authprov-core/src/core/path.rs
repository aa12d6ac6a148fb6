// authprov-core/src/core/path.rs
// ============================================================================
// Module: AuthProv Path Matcher
// Description: Resource path classification and identifier extraction.
// Purpose: Decide once which rule family a change path belongs to.
// Dependencies: crate::core::pattern
// ============================================================================

//! ## Overview
//! Resource paths are classified into a [`PathShape`] by anchored,
//! case-sensitive patterns checked in a fixed order. Identifier extraction is
//! split on purpose: [`extract_subscriber_id`] returns the `{id}` segment used
//! as the external mscId, while [`extract_imsi`] returns the digits of an
//! `imsi-` private identifier. The two are never interchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::fields;
use crate::core::pattern::Pattern;

// ============================================================================
// SECTION: Patterns
// ============================================================================

/// Auth-subscription collection path.
static COLLECTION: Pattern = Pattern::new(r"^/subscribers/(.*?)/authSubscription$");
/// Auth-subscription private identifier path.
static PRIV_ID: Pattern = Pattern::new(r"^/subscribers/(.*?)/authSubscription/[^/]*$");
/// Auth-subscription static data path.
static STATIC_DATA: Pattern =
    Pattern::new(r"^/subscribers/(.*?)/authSubscription/(.*?)/authSubscriptionStaticData$");
/// Legacy 4G auth record path.
static LEGACY: Pattern = Pattern::new(r"^/legacy/serv=Auth/[^/]*$");
/// IMSI private identifier as the last segment.
static IMSI_PRIV_ID: Pattern =
    Pattern::new(r"^/subscribers/(.*?)/authSubscription/imsi-([0-9]{5,15})$");
/// IMSI private identifier followed by one resource segment.
static IMSI_PRIV_ID_RESOURCE: Pattern =
    Pattern::new(r"^/subscribers/(.*?)/authSubscription/imsi-([0-9]{5,15})/[^/]*$");

/// Prefix of every legacy 4G auth record path.
pub const LEGACY_BASE_PATH: &str = "/legacy/serv=Auth/IMSI=";

// ============================================================================
// SECTION: Path Shapes
// ============================================================================

/// Structural classification of a change resource path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathShape {
    /// `/subscribers/{id}/authSubscription`.
    Collection,
    /// `/subscribers/{id}/authSubscription/{privId}/authSubscriptionStaticData`.
    StaticData,
    /// `/subscribers/{id}/authSubscription/{privId}`.
    PrivId,
    /// `/legacy/serv=Auth/{key}`.
    Legacy,
    /// Anything else.
    Unmatched,
}

impl PathShape {
    /// Returns true for shapes carrying an auth-subscription private identifier.
    #[must_use]
    pub const fn is_subscription_entry(self) -> bool {
        matches!(self, Self::StaticData | Self::PrivId)
    }
}

/// Classifies a resource path.
#[must_use]
pub fn classify(path: &str) -> PathShape {
    if COLLECTION.is_match(path) {
        PathShape::Collection
    } else if STATIC_DATA.is_match(path) {
        PathShape::StaticData
    } else if PRIV_ID.is_match(path) {
        PathShape::PrivId
    } else if LEGACY.is_match(path) {
        PathShape::Legacy
    } else {
        PathShape::Unmatched
    }
}

// ============================================================================
// SECTION: Identifier Extraction
// ============================================================================

/// Returns true when the private identifier segment is `imsi-` plus 5..=15 digits.
#[must_use]
pub fn has_imsi_priv_id(path: &str) -> bool {
    IMSI_PRIV_ID.is_match(path) || IMSI_PRIV_ID_RESOURCE.is_match(path)
}

/// Returns the IMSI digits of the private identifier, or an empty string.
#[must_use]
pub fn extract_imsi(path: &str) -> String {
    [&IMSI_PRIV_ID, &IMSI_PRIV_ID_RESOURCE]
        .into_iter()
        .find_map(|pattern| pattern.captures(path))
        .and_then(|captures| captures.get(2).map(|digits| digits.as_str().to_string()))
        .unwrap_or_default()
}

/// Returns the `{id}` segment (mscId) of an auth-subscription path, or an empty string.
#[must_use]
pub fn extract_subscriber_id(path: &str) -> String {
    [&STATIC_DATA, &PRIV_ID, &COLLECTION]
        .into_iter()
        .find_map(|pattern| pattern.captures(path))
        .and_then(|captures| captures.get(1).map(|id| id.as_str().to_string()))
        .unwrap_or_default()
}

// ============================================================================
// SECTION: Path Building
// ============================================================================

/// Removes the final `/segment`; a path without `/` is returned unchanged.
#[must_use]
pub fn base_path(path: &str) -> &str {
    path.rfind('/').map_or(path, |index| &path[..index])
}

/// Appends `/suffix` to `base`.
#[must_use]
pub fn path_with_suffix(base: &str, suffix: &str) -> String {
    format!("{base}/{suffix}")
}

/// Returns the legacy 4G record path for the IMSI in `path`.
#[must_use]
pub fn legacy_path(path: &str) -> String {
    format!("{LEGACY_BASE_PATH}{}", extract_imsi(path))
}

/// Returns the provisioning journal path of a subscriber.
#[must_use]
pub fn prov_journal_path(msc_id: &str) -> String {
    format!("/subscribers/{msc_id}/journal/{}", fields::PROV_JOURNAL)
}

/// Returns true when the path addresses auth-subscription dynamic data.
#[must_use]
pub fn is_dynamic_data_path(path: &str) -> bool {
    path.ends_with(fields::AUTH_SUBSCRIPTION_DYNAMIC_DATA)
}
