// authprov-core/src/runtime/rules.rs
// ============================================================================
// Module: AuthProv Validation Rules
// Description: Common static-data rules, legacy consistency, immutability.
// Purpose: Record every constraint violation of one change and report a verdict.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Rule routines take the change, the related-resource snapshot, and the
//! call's [`ResponseAssembler`]. They record every violation they find and
//! return a [`Verdict`] reflecting only the errors recorded for this change.
//!
//! Security posture: attribute values are client-controlled; numeric ranges
//! are only evaluated after the decimal pattern matched, and overflowing
//! values are out of range.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::AuthSubscription;
use crate::core::Change;
use crate::core::RelatedResources;
use crate::core::ResourceLookupError;
use crate::core::ResponseAssembler;
use crate::core::StaticData;
use crate::core::StatusCode;
use crate::core::Verdict;
use crate::core::codec::bit_is_set;
use crate::core::codec::hex_to_uint;
use crate::core::fields;
use crate::core::messages;
use crate::core::path;
use crate::core::pattern::Pattern;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Hex string of any length.
static HEX: Pattern = Pattern::new(r"^[A-Fa-f0-9]*$");
/// Four hex characters.
static AMF: Pattern = Pattern::new(r"^[A-Fa-f0-9]{4}$");
/// Unsigned decimal.
static DECIMAL: Pattern = Pattern::new(r"^[0-9]+$");
/// Decimal 0..=31.
static A4_KEY_V: Pattern = Pattern::new(r"^([0-9]|[1-2][0-9]|3[0-1])$");
/// Decimal 0..=2.
static AKA_ALGORITHM_IND: Pattern = Pattern::new(r"^[0-2]$");

/// Required encPermanentKey length in hex characters.
pub const ENC_PERMANENT_KEY_LENGTH: usize = 32;
/// Highest algorithm identifier.
pub const MAX_ALGORITHM_ID: u32 = 15;
/// Test algorithm identifier, excluded from the Milenage family.
pub const TEST_ALGORITHM_ID: u32 = 1;
/// Highest A4 key indicator.
pub const MAX_A4_KEY_IND: u32 = 511;
/// Highest A4 indicator.
pub const MAX_A4_IND: u32 = 2;
/// Position of the AuC flag in the journal IMSI mask.
pub const AUC_IMSI_MASK_BIT: usize = 4;
/// Only accepted legacy AKATYPE.
pub const LEGACY_AKA_TYPE_ALLOWED: i64 = 1;

// ============================================================================
// SECTION: Attribute Rules
// ============================================================================

/// Format requirement on one optional static attribute.
struct AttributeRule {
    /// Wire attribute name.
    name: &'static str,
    /// Pattern the raw value must match.
    pattern: &'static Pattern,
    /// Inclusive upper bound of the decimal value.
    max_value: Option<u32>,
    /// Exact length in characters.
    length: Option<usize>,
    /// Whether the attribute is mandatory for AKA without a legacy record.
    aka_mandatory: bool,
}

/// encPermanentKey requirements.
static ENC_PERMANENT_KEY_RULE: AttributeRule = AttributeRule {
    name: fields::ENC_PERMANENT_KEY,
    pattern: &HEX,
    max_value: None,
    length: Some(ENC_PERMANENT_KEY_LENGTH),
    aka_mandatory: true,
};
/// authenticationManagementField requirements.
static AMF_RULE: AttributeRule = AttributeRule {
    name: fields::AUTHENTICATION_MANAGEMENT_FIELD,
    pattern: &AMF,
    max_value: None,
    length: None,
    aka_mandatory: true,
};
/// algorithmId requirements.
static ALGORITHM_ID_RULE: AttributeRule = AttributeRule {
    name: fields::ALGORITHM_ID,
    pattern: &DECIMAL,
    max_value: Some(MAX_ALGORITHM_ID),
    length: None,
    aka_mandatory: true,
};
/// a4KeyInd requirements.
static A4_KEY_IND_RULE: AttributeRule = AttributeRule {
    name: fields::A4_KEY_IND,
    pattern: &DECIMAL,
    max_value: Some(MAX_A4_KEY_IND),
    length: None,
    aka_mandatory: true,
};
/// a4Ind requirements.
static A4_IND_RULE: AttributeRule = AttributeRule {
    name: fields::A4_IND,
    pattern: &DECIMAL,
    max_value: Some(MAX_A4_IND),
    length: None,
    aka_mandatory: true,
};
/// a4KeyV requirements.
static A4_KEY_V_RULE: AttributeRule = AttributeRule {
    name: fields::A4_KEY_V,
    pattern: &A4_KEY_V,
    max_value: None,
    length: None,
    aka_mandatory: false,
};

impl AttributeRule {
    /// Records a violation for `value`, or for its absence when mandatory.
    fn check(
        &self,
        resource_path: &str,
        value: Option<&str>,
        aka_mandatory: bool,
        out: &mut ResponseAssembler,
    ) {
        let Some(value) = value else {
            if self.aka_mandatory && aka_mandatory {
                out.constraint_violation(resource_path, messages::missing_for_aka(self.name));
            }
            return;
        };
        if !self.pattern.is_match(value)
            || self.max_value.is_some_and(|max| !decimal_within(value, max))
        {
            out.constraint_violation(resource_path, messages::invalid_value(self.name));
        } else if self.length.is_some_and(|length| value.len() != length) {
            out.constraint_violation(resource_path, messages::invalid_size(self.name));
        }
    }
}

/// Returns true when `value` parses as a decimal no greater than `max`.
fn decimal_within(value: &str, max: u32) -> bool {
    value.parse::<u32>().is_ok_and(|number| number <= max)
}

/// Returns true for Milenage algorithm identifiers (0, 2..=15).
fn is_milenage(algorithm_id: &str) -> bool {
    value_is_milenage(algorithm_id.parse::<u32>().ok())
}

/// Returns true for a parsed Milenage algorithm identifier.
fn value_is_milenage(value: Option<u32>) -> bool {
    value.is_some_and(|id| id <= MAX_ALGORITHM_ID && id != TEST_ALGORITHM_ID)
}

// ============================================================================
// SECTION: Common Rules
// ============================================================================

/// Applies the static and dynamic data rules shared by CREATE and UPDATE.
///
/// The verdict is rejected when this call recorded any error; its status is
/// 409, or 422 when a related-resource lookup could not be satisfied.
pub fn check_common(
    change: &Change,
    related: &RelatedResources,
    out: &mut ResponseAssembler,
) -> Verdict {
    let mark = out.error_count();
    let resource_path = change.resource_path.as_str();
    let mut status = StatusCode::Conflict;

    if let Some(static_data) = change.static_data() {
        status = status.max(check_static_data(resource_path, static_data, related, out));
    }
    if change.auth_subscription.dynamic_data.is_some() {
        out.constraint_violation(resource_path, messages::dynamic_data_forbidden());
    }

    if out.error_count() > mark { Verdict::rejected(status) } else { Verdict::accepted() }
}

/// Checks static attributes and returns the worst status they require.
fn check_static_data(
    resource_path: &str,
    static_data: &StaticData,
    related: &RelatedResources,
    out: &mut ResponseAssembler,
) -> StatusCode {
    let Some(method) = static_data.method() else {
        out.constraint_violation(resource_path, messages::invalid_authentication_method());
        return StatusCode::Conflict;
    };
    let aka_mandatory = method.is_aka() && !related.contains(&path::legacy_path(resource_path));

    ENC_PERMANENT_KEY_RULE.check(
        resource_path,
        static_data.enc_permanent_key.as_deref(),
        aka_mandatory,
        out,
    );
    AMF_RULE.check(
        resource_path,
        static_data.authentication_management_field.as_deref(),
        aka_mandatory,
        out,
    );
    ALGORITHM_ID_RULE.check(resource_path, static_data.algorithm_id.as_deref(), aka_mandatory, out);
    A4_KEY_IND_RULE.check(resource_path, static_data.a4_key_ind.as_deref(), aka_mandatory, out);
    A4_IND_RULE.check(resource_path, static_data.a4_ind.as_deref(), aka_mandatory, out);
    check_enc_opc_key(resource_path, static_data, out);
    A4_KEY_V_RULE.check(resource_path, static_data.a4_key_v.as_deref(), aka_mandatory, out);

    match static_data.aka_algorithm_ind.as_deref() {
        Some(value) if AKA_ALGORITHM_IND.is_match(value) => {
            check_auc_registration(resource_path, related, out)
        }
        Some(_) => {
            out.constraint_violation(
                resource_path,
                messages::invalid_value(fields::AKA_ALGORITHM_IND),
            );
            StatusCode::Conflict
        }
        None => StatusCode::Conflict,
    }
}

/// OPc is only meaningful for Milenage algorithms.
fn check_enc_opc_key(resource_path: &str, static_data: &StaticData, out: &mut ResponseAssembler) {
    let Some(opc) = static_data.enc_opc_key.as_deref() else {
        return;
    };
    if !HEX.is_match(opc) {
        out.constraint_violation(resource_path, messages::invalid_value(fields::ENC_OPC_KEY));
        return;
    }
    let milenage = match static_data.algorithm_id.as_deref() {
        None => false,
        Some(algorithm_id) if DECIMAL.is_match(algorithm_id) => is_milenage(algorithm_id),
        // A malformed algorithmId is reported by its own rule.
        Some(_) => true,
    };
    if !milenage {
        out.constraint_violation(resource_path, messages::opc_requires_milenage());
    }
}

/// Requires the subscriber to be registered in AuC before akaAlgorithmInd is set.
fn check_auc_registration(
    resource_path: &str,
    related: &RelatedResources,
    out: &mut ResponseAssembler,
) -> StatusCode {
    let msc_id = path::extract_subscriber_id(resource_path);
    let journal_path = path::prov_journal_path(&msc_id);
    match related.prov_journal(&journal_path) {
        Ok(journal) => {
            if journal.imsi_mask.is_empty() || !bit_is_set(&journal.imsi_mask, AUC_IMSI_MASK_BIT)
            {
                out.constraint_violation(resource_path, messages::aka_algorithm_not_in_auc());
            }
            StatusCode::Conflict
        }
        Err(ResourceLookupError::NotFound {
            ..
        }) => {
            out.unprocessable(resource_path, messages::prov_journal_missing(&msc_id));
            StatusCode::UnprocessableEntity
        }
        Err(err @ ResourceLookupError::WrongVariant {
            ..
        }) => {
            let message = messages::unexpected_related_resource(&err.to_string());
            out.unprocessable(resource_path, message);
            StatusCode::UnprocessableEntity
        }
    }
}

// ============================================================================
// SECTION: Legacy Consistency
// ============================================================================

/// Checks a CREATE against the subscriber's legacy 4G record, if one exists.
pub fn check_legacy(
    change: &Change,
    related: &RelatedResources,
    out: &mut ResponseAssembler,
) -> Verdict {
    let resource_path = change.resource_path.as_str();
    let legacy = match related.legacy(&path::legacy_path(resource_path)) {
        Ok(legacy) => legacy,
        Err(ResourceLookupError::NotFound {
            ..
        }) => return Verdict::accepted(),
        Err(err @ ResourceLookupError::WrongVariant {
            ..
        }) => {
            let message = messages::unexpected_related_resource(&err.to_string());
            out.unprocessable(resource_path, message);
            return Verdict::rejected(StatusCode::UnprocessableEntity);
        }
    };
    let mark = out.error_count();

    match legacy.aka_type {
        None => out.constraint_violation(resource_path, messages::legacy_aka_type_missing()),
        Some(aka_type) if aka_type != LEGACY_AKA_TYPE_ALLOWED => {
            out.constraint_violation(resource_path, messages::legacy_aka_type_invalid());
        }
        Some(_) => {}
    }

    if let Some(data) = change.static_data() {
        let mut compare = |attr: &str, legacy_attr: &str, differs: bool| {
            if differs {
                let message = messages::legacy_mismatch(attr, legacy_attr);
                out.constraint_violation(resource_path, message);
            }
        };
        compare(
            fields::ENC_PERMANENT_KEY,
            fields::LEGACY_EKI,
            text_differs(data.enc_permanent_key.as_deref(), legacy.eki.as_deref()),
        );
        compare(
            fields::A4_KEY_IND,
            fields::LEGACY_KIND,
            integer_differs(data.a4_key_ind.as_deref(), legacy.kind),
        );
        compare(
            fields::A4_IND,
            fields::LEGACY_A4_IND,
            integer_differs(data.a4_ind.as_deref(), legacy.a4_ind),
        );
        compare(
            fields::ALGORITHM_ID,
            fields::LEGACY_F_SET_IND,
            integer_differs(data.algorithm_id.as_deref(), legacy.f_set_ind),
        );
        compare(
            fields::AUTHENTICATION_MANAGEMENT_FIELD,
            fields::LEGACY_AMF_VALUE,
            data.authentication_management_field
                .as_deref()
                .zip(legacy.amf_value)
                .is_some_and(|(amf, legacy_amf)| i64::from(hex_to_uint(amf)) != legacy_amf),
        );
        compare(
            fields::ENC_OPC_KEY,
            fields::LEGACY_EOPC,
            text_differs(data.enc_opc_key.as_deref(), legacy.eopc.as_deref()),
        );
        compare(
            fields::AKA_ALGORITHM_IND,
            fields::LEGACY_AKA_ALG_IND,
            integer_differs(data.aka_algorithm_ind.as_deref(), legacy.aka_alg_ind),
        );
    }

    if out.error_count() > mark {
        Verdict::rejected(StatusCode::Conflict)
    } else {
        Verdict::accepted()
    }
}

/// Both sides set and different.
fn text_differs(value: Option<&str>, legacy: Option<&str>) -> bool {
    value.zip(legacy).is_some_and(|(value, legacy)| value != legacy)
}

/// Both sides set and the text differs from the legacy decimal rendering.
fn integer_differs(value: Option<&str>, legacy: Option<i64>) -> bool {
    value.zip(legacy).is_some_and(|(value, legacy)| value != legacy.to_string())
}

// ============================================================================
// SECTION: Update Immutability
// ============================================================================

/// Rejects updates that alter credential attributes of a stored subscription.
pub fn check_immutable(
    change: &Change,
    stored: &AuthSubscription,
    out: &mut ResponseAssembler,
) -> Verdict {
    let Some(updated) = change.static_data() else {
        return Verdict::accepted();
    };
    let empty = StaticData::default();
    let current = stored.static_data.as_ref().unwrap_or(&empty);
    let mark = out.error_count();

    let attributes = [
        (fields::ENC_PERMANENT_KEY, &updated.enc_permanent_key, &current.enc_permanent_key),
        (fields::ALGORITHM_ID, &updated.algorithm_id, &current.algorithm_id),
        (fields::A4_KEY_IND, &updated.a4_key_ind, &current.a4_key_ind),
        (fields::A4_IND, &updated.a4_ind, &current.a4_ind),
        (fields::ENC_OPC_KEY, &updated.enc_opc_key, &current.enc_opc_key),
        (fields::A4_KEY_V, &updated.a4_key_v, &current.a4_key_v),
    ];
    for (name, new_value, old_value) in attributes {
        if new_value != old_value {
            out.constraint_violation(&change.resource_path, messages::immutable_attribute(name));
        }
    }

    if out.error_count() > mark {
        Verdict::rejected(StatusCode::Conflict)
    } else {
        Verdict::accepted()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::decimal_within;
    use super::value_is_milenage;

    #[test]
    fn decimal_range_rejects_overflow() {
        assert!(decimal_within("007", 15));
        assert!(!decimal_within("16", 15));
        assert!(!decimal_within("99999999999999999999", 511));
    }

    #[test]
    fn milenage_excludes_test_algorithm() {
        assert!(value_is_milenage(Some(0)));
        assert!(!value_is_milenage(Some(1)));
        assert!(value_is_milenage(Some(15)));
        assert!(!value_is_milenage(Some(16)));
        assert!(!value_is_milenage(None));
    }
}
