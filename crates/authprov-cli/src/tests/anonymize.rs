// authprov-cli/src/tests/anonymize.rs
// ============================================================================
// Module: Anonymizer Tests
// Description: Unit tests for IMSI masking.
// Purpose: Ensure every supported IMSI shape is masked on even positions.
// Dependencies: authprov-cli anonymize module
// ============================================================================

//! ## Overview
//! Covers path segments, legacy assignments, and JSON members.

use crate::anonymize::anonymize;
use crate::anonymize::anonymize_segments;

#[test]
fn masks_path_segments() {
    assert_eq!(anonymize("imsi-123456789012345"), "imsi-*2*4*6*8*0*2*4*");
    assert_eq!(
        anonymize_segments("/subscribers/a/authSubscription/IMSI-12345/authSubscriptionStaticData"),
        "/subscribers/a/authSubscription/IMSI-*2*4*/authSubscriptionStaticData"
    );
}

#[test]
fn masks_json_members_and_drops_colon_spacing() {
    assert_eq!(anonymize(r#"{"IMSI" : "123456789012345"}"#), r#"{"IMSI":"*2*4*6*8*0*2*4*"}"#);
    assert_eq!(anonymize(r#""imsi":"98765""#), r#""imsi":"*8*6*""#);
}

#[test]
fn masks_legacy_assignments() {
    assert_eq!(anonymize("/this/is/a/IMSI=123456789012345"), "/this/is/a/IMSI=*2*4*6*8*0*2*4*");
    assert_eq!(anonymize("imsi = 123456"), "imsi=*2*4*6");
}

#[test]
fn leaves_short_and_unrelated_identifiers() {
    assert_eq!(anonymize("imsi-1234"), "imsi-1234");
    assert_eq!(anonymize("/subscribers/12345678/nai-foo"), "/subscribers/12345678/nai-foo");
}

#[test]
fn segment_masking_ignores_other_shapes() {
    assert_eq!(anonymize_segments("IMSI=123456789012345"), "IMSI=123456789012345");
}
