// authprov-wire/tests/octets.rs
// ============================================================================
// Module: Octet String Tests
// Description: LDAP reordering and base64 decoding of legacy attributes.
// Purpose: Keep legacy credential normalization stable.
// ============================================================================

//! Octet string tests for authprov-wire.

use authprov_wire::decode_base64_text;
use authprov_wire::ldap_reorder;
use proptest::prelude::*;

#[test]
fn short_values_are_left_padded_before_reordering() {
    assert_eq!(ldap_reorder("20"), "2000");
    assert_eq!(ldap_reorder("123"), "2301");
}

#[test]
fn base64_values_decode_to_text() {
    assert_eq!(decode_base64_text("MTAzMjU0NzY5OEJBRENGRQ=="), "1032547698BADCFE");
    assert_eq!(decode_base64_text("MjA="), "20");
    assert_eq!(decode_base64_text(""), "");
}

proptest! {
    #[test]
    fn reorder_is_an_involution_on_whole_groups(text in "[0-9A-F]{0,6}") {
        let doubled = format!("{text}{text}");
        let aligned = format!("{}{}", "0".repeat((4 - doubled.len() % 4) % 4), doubled);
        prop_assert_eq!(ldap_reorder(&ldap_reorder(&aligned)), aligned.clone());
        prop_assert_eq!(ldap_reorder(&aligned).len(), aligned.len());
    }
}
