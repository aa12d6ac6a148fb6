// authprov-core/src/core/messages.rs
// ============================================================================
// Module: AuthProv Error Descriptions
// Description: Canned `description` texts for validation errors.
// Purpose: Keep every client-visible rejection text in one place.
// Dependencies: crate::core::fields
// ============================================================================

//! ## Overview
//! Descriptions quote attribute names exactly as they appear on the wire.
//! Clients match on these strings, so they must stay byte-stable.

use crate::core::fields;

/// `"{attr}" in "{container}" has not the valid format`.
#[must_use]
pub fn invalid_format(attr: &str, container: &str) -> String {
    format!("\"{attr}\" in \"{container}\" has not the valid format")
}

/// Invalid authentication method.
#[must_use]
pub fn invalid_authentication_method() -> String {
    invalid_format(fields::AUTHENTICATION_METHOD, fields::AUTH_SUBSCRIPTION_STATIC_DATA)
}

/// Private identifier is not a valid IMSI.
#[must_use]
pub fn invalid_imsi_in_path() -> String {
    invalid_format(fields::IMSI, fields::RESOURCE_PATH)
}

/// Static attribute fails its pattern or range.
#[must_use]
pub fn invalid_value(attr: &str) -> String {
    format!("\"{attr}\" in \"{}\" has invalid value", fields::AUTH_SUBSCRIPTION_STATIC_DATA)
}

/// Static attribute has the wrong length.
#[must_use]
pub fn invalid_size(attr: &str) -> String {
    format!("\"{attr}\" in \"{}\" has invalid size", fields::AUTH_SUBSCRIPTION_STATIC_DATA)
}

/// Mandatory AKA attribute is missing.
#[must_use]
pub fn missing_for_aka(attr: &str) -> String {
    format!(
        "\"{attr}\" in \"{}\" has not been defined with an AKA authentication method",
        fields::AUTH_SUBSCRIPTION_STATIC_DATA
    )
}

/// OPc supplied for a non-Milenage algorithm.
#[must_use]
pub fn opc_requires_milenage() -> String {
    format!(
        "\"{}\" in \"{}\" must not be present as \"{}\" is not MILLENAGE (0,2-15)",
        fields::ENC_OPC_KEY,
        fields::AUTH_SUBSCRIPTION_STATIC_DATA,
        fields::ALGORITHM_ID
    )
}

/// AKA algorithm indicator set for a subscriber not defined in AuC.
#[must_use]
pub fn aka_algorithm_not_in_auc() -> String {
    format!(
        "It is not allowed to create or update a subscriber with \"{}\" in \"{}\" if not defined \
         in AuC",
        fields::AKA_ALGORITHM_IND,
        fields::AUTH_SUBSCRIPTION_STATIC_DATA
    )
}

/// Provisioning journal required for the AuC check is missing.
#[must_use]
pub fn prov_journal_missing(msc_id: &str) -> String {
    format!(
        "provJournal for subscriber mscId={msc_id} not included. Needed to check if user is \
         defined in AuC when attribute \"{}\" is present",
        fields::AKA_ALGORITHM_IND
    )
}

/// Related resource at a path has an unexpected kind.
#[must_use]
pub fn unexpected_related_resource(detail: &str) -> String {
    format!("Unexpected relatedResource: {detail}")
}

/// Client attempted to write dynamic data.
#[must_use]
pub fn dynamic_data_forbidden() -> String {
    format!("\"{}\" can not be created or updated", fields::AUTH_SUBSCRIPTION_DYNAMIC_DATA)
}

/// Path is not one the engine can validate.
#[must_use]
pub fn unsupported_resource_path() -> String {
    "Validation could not be performed on the specified resource_path".to_string()
}

/// Update target has no stored resource.
#[must_use]
pub fn missing_related_resource(base_path: &str) -> String {
    format!("There is no associated relatedResource: {base_path}")
}

/// Legacy record lacks AKATYPE.
#[must_use]
pub fn legacy_aka_type_missing() -> String {
    format!("\"{}\" for 4G legacy subscription is not defined", fields::LEGACY_AKA_TYPE)
}

/// Legacy record has an AKATYPE other than 1.
#[must_use]
pub fn legacy_aka_type_invalid() -> String {
    format!("\"{}\" for 4G legacy subscription has an invalid value", fields::LEGACY_AKA_TYPE)
}

/// 5G attribute disagrees with its legacy counterpart.
#[must_use]
pub fn legacy_mismatch(attr: &str, legacy_attr: &str) -> String {
    format!("\"{attr}\" is not equal to \"{legacy_attr}\" attribute of 4G legacy subscription")
}

/// Immutable attribute changed on update.
#[must_use]
pub fn immutable_attribute(attr: &str) -> String {
    format!("\"{attr}\" in \"{}\" cannot be modified", fields::AUTH_SUBSCRIPTION_STATIC_DATA)
}
