// authprov-wire/src/octets.rs
// ============================================================================
// Module: AuthProv Octet Strings
// Description: Base64 and LDAP octet-string normalization for legacy records.
// Purpose: Turn directory-encoded credential strings into plain hex text.
// Dependencies: base64
// ============================================================================

//! ## Overview
//! Legacy directory exports carry some attributes base64 encoded and the
//! sequence counter in LDAP octet order, where every group of four
//! characters is rotated by two. Both decoders are total: undecodable input
//! yields an empty string, which the parser treats as an absent attribute.

// ============================================================================
// SECTION: Imports
// ============================================================================

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Characters per LDAP octet group.
const LDAP_GROUP: usize = 4;

// ============================================================================
// SECTION: Decoders
// ============================================================================

/// Decodes standard base64 into UTF-8 text, or returns an empty string.
#[must_use]
pub fn decode_base64_text(encoded: &str) -> String {
    STANDARD
        .decode(encoded.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}

/// Restores natural order of an LDAP octet string.
///
/// The input is left-padded with `'0'` to a multiple of four characters and
/// every group `c0 c1 c2 c3` becomes `c2 c3 c0 c1`.
#[must_use]
pub fn ldap_reorder(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let padding = (LDAP_GROUP - chars.len() % LDAP_GROUP) % LDAP_GROUP;
    let padded: Vec<char> = std::iter::repeat_n('0', padding).chain(chars).collect();

    let mut ordered = String::with_capacity(padded.len());
    for group in padded.chunks_exact(LDAP_GROUP) {
        ordered.extend([group[2], group[3], group[0], group[1]]);
    }
    ordered
}

// ============================================================================
// SECTION: Tests
// ============================================================================
