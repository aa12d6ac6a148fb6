// authprov-cli/src/anonymize.rs
// ============================================================================
// Module: IMSI Anonymizer
// Description: Masks subscriber identifiers before they reach logs.
// Purpose: Keep IMSI digits out of audit records.
// Dependencies: authprov-core
// ============================================================================

//! ## Overview
//! IMSIs show up in three shapes: `imsi-<digits>` path segments, legacy
//! `IMSI=<digits>` components, and `"imsi":"<digits>"` JSON members. Every
//! digit at an even position (counting from zero) is replaced with `*`, so
//! `123456789012345` becomes `*2*4*6*8*0*2*4*`. The JSON shape is rewritten
//! without the whitespace around the colon.

// ============================================================================
// SECTION: Imports
// ============================================================================

use authprov_core::Pattern;

// ============================================================================
// SECTION: Patterns
// ============================================================================

/// `imsi-<digits>` resource path segments.
static IMSI_SEGMENT: Pattern = Pattern::new(r"(imsi|IMSI)-([0-9]{5,15})");
/// Legacy `IMSI=<digits>` components.
static IMSI_ASSIGNMENT: Pattern = Pattern::new(r"(imsi|IMSI) *= *([0-9]{5,15})");
/// `"imsi" : "<digits>"` JSON members.
static IMSI_MEMBER: Pattern = Pattern::new(r#""(imsi|IMSI)" *: *"([0-9]{5,15})""#);

/// Mask character.
const MASK: char = '*';

// ============================================================================
// SECTION: Anonymization
// ============================================================================

/// Masks IMSIs in path segments.
#[must_use]
pub fn anonymize_segments(text: &str) -> String {
    IMSI_SEGMENT
        .replace_all(text, |captures| format!("{}-{}", &captures[1], mask_digits(&captures[2])))
        .into_owned()
}

/// Masks IMSIs in every supported shape.
#[must_use]
pub fn anonymize(text: &str) -> String {
    let masked = anonymize_segments(text);
    let masked = IMSI_ASSIGNMENT
        .replace_all(&masked, |captures| format!("{}={}", &captures[1], mask_digits(&captures[2])))
        .into_owned();
    IMSI_MEMBER
        .replace_all(&masked, |captures| {
            format!("\"{}\":\"{}\"", &captures[1], mask_digits(&captures[2]))
        })
        .into_owned()
}

/// Replaces every even-indexed digit with the mask character.
fn mask_digits(digits: &str) -> String {
    digits
        .chars()
        .enumerate()
        .map(|(index, digit)| if index % 2 == 0 { MASK } else { digit })
        .collect()
}
