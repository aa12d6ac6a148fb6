// authprov-wire/src/encoder.rs
// ============================================================================
// Module: AuthProv Response Encoder
// Description: Serializes validation reports into response documents.
// Purpose: Emit errors or accepted changes with a stable member order.
// Dependencies: authprov-core, serde, serde_json
// ============================================================================

//! ## Overview
//! A rejected report encodes as `{"errors":[...]}`, an accepted one as
//! `{"changes":[...]}`, and a report with neither as `{}`. Every accepted
//! CREATE is followed by a companion CREATE on the sibling
//! `authSubscriptionDynamicData` path carrying the derived sequence state.
//!
//! Member order is part of the contract, so documents are written through
//! hand-rolled [`Serialize`] impls instead of `serde_json::Map`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use authprov_core::Change;
use authprov_core::DynamicData;
use authprov_core::Operation;
use authprov_core::StaticData;
use authprov_core::ValidationError;
use authprov_core::ValidationReport;
use authprov_core::core::fields;
use authprov_core::path;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use serde::ser::SerializeSeq;
use serde_json::ser::PrettyFormatter;

use crate::constants;
use crate::parser::WireError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Indentation used by pretty output.
const PRETTY_INDENT: &[u8] = b"    ";

// ============================================================================
// SECTION: Entry Points
// ============================================================================

/// Encodes a validation report.
///
/// # Errors
///
/// Returns [`WireError::Encode`] when serialization fails.
pub fn encode_report(report: &ValidationReport, pretty: bool) -> Result<String, WireError> {
    write_json(&ReportDocument(report), pretty)
}

/// Encodes a single error as a standalone document.
///
/// # Errors
///
/// Returns [`WireError::Encode`] when serialization fails.
pub fn encode_error(error: &ValidationError, pretty: bool) -> Result<String, WireError> {
    write_json(error, pretty)
}

/// Serializes `value` compactly or with four-space indentation.
fn write_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, WireError> {
    let mut buffer = Vec::new();
    if pretty {
        let formatter = PrettyFormatter::with_indent(PRETTY_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        value.serialize(&mut serializer).map_err(|err| WireError::Encode(err.to_string()))?;
    } else {
        serde_json::to_writer(&mut buffer, value)
            .map_err(|err| WireError::Encode(err.to_string()))?;
    }
    String::from_utf8(buffer).map_err(|err| WireError::Encode(err.to_string()))
}

// ============================================================================
// SECTION: Documents
// ============================================================================

/// Top-level response document.
struct ReportDocument<'a>(&'a ValidationReport);

impl Serialize for ReportDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let report = self.0;
        let mut map = serializer.serialize_map(None)?;
        if !report.errors.is_empty() {
            map.serialize_entry(constants::ERRORS, &report.errors)?;
        } else if !report.changes.is_empty() {
            map.serialize_entry(constants::CHANGES, &ChangeList(&report.changes))?;
        }
        map.end()
    }
}

/// Accepted changes, each CREATE followed by its dynamic-data companion.
struct ChangeList<'a>(&'a [Change]);

impl Serialize for ChangeList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for change in self.0 {
            seq.serialize_element(&EncodedChange(change))?;
            if change.operation == Operation::Create {
                seq.serialize_element(&DynamicCompanion(change))?;
            }
        }
        seq.end()
    }
}

/// Returns true when the change targets an auth-subscription resource.
fn targets_auth_subscription(change: &Change) -> bool {
    change.resource_path.contains(fields::AUTH_SUBSCRIPTION)
}

/// One accepted change; DELETE carries no data.
struct EncodedChange<'a>(&'a Change);

impl Serialize for EncodedChange<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let change = self.0;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(constants::OPERATION, change.operation.as_str())?;
        map.serialize_entry(fields::RESOURCE_PATH, &change.resource_path)?;
        if change.operation != Operation::Delete {
            let static_data = change.static_data().filter(|_| targets_auth_subscription(change));
            map.serialize_entry(constants::DATA, &StaticDataBody(static_data))?;
        }
        map.end()
    }
}

/// Dynamic-data companion of a CREATE.
struct DynamicCompanion<'a>(&'a Change);

impl Serialize for DynamicCompanion<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let change = self.0;
        let resource_path = path::path_with_suffix(
            path::base_path(&change.resource_path),
            fields::AUTH_SUBSCRIPTION_DYNAMIC_DATA,
        );
        let dynamic_data = change
            .auth_subscription
            .dynamic_data
            .as_ref()
            .filter(|_| targets_auth_subscription(change));

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(constants::OPERATION, change.operation.as_str())?;
        map.serialize_entry(fields::RESOURCE_PATH, &resource_path)?;
        map.serialize_entry(constants::DATA, &DynamicDataBody(dynamic_data))?;
        map.end()
    }
}

// ============================================================================
// SECTION: Resource Bodies
// ============================================================================

/// Static attributes: vendor-specific members first, then fixed order.
struct StaticDataBody<'a>(Option<&'a StaticData>);

impl Serialize for StaticDataBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        let Some(data) = self.0 else {
            return map.end();
        };
        for (key, value) in &data.vendor_specific {
            map.serialize_entry(key, value)?;
        }
        let attributes = [
            (fields::AUTHENTICATION_METHOD, Some(&data.authentication_method)),
            (fields::ENC_PERMANENT_KEY, data.enc_permanent_key.as_ref()),
            (
                fields::AUTHENTICATION_MANAGEMENT_FIELD,
                data.authentication_management_field.as_ref(),
            ),
            (fields::ALGORITHM_ID, data.algorithm_id.as_ref()),
            (fields::A4_KEY_IND, data.a4_key_ind.as_ref()),
            (fields::A4_IND, data.a4_ind.as_ref()),
            (fields::ENC_OPC_KEY, data.enc_opc_key.as_ref()),
            (fields::ENC_TOPC_KEY, data.enc_topc_key.as_ref()),
            (fields::A4_KEY_V, data.a4_key_v.as_ref()),
            (fields::AKA_ALGORITHM_IND, data.aka_algorithm_ind.as_ref()),
        ];
        for (key, value) in attributes {
            if let Some(value) = value
                && !value.is_empty()
            {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

/// Dynamic attributes; `lastIndexes` is always present when data exists.
struct DynamicDataBody<'a>(Option<&'a DynamicData>);

impl Serialize for DynamicDataBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        let Some(data) = self.0 else {
            return map.end();
        };
        let attributes =
            [(fields::SQN_SCHEME, data.sqn_scheme.as_ref()), (fields::SQN, data.sqn.as_ref())];
        for (key, value) in attributes {
            if let Some(value) = value
                && !value.is_empty()
            {
                map.serialize_entry(key, value)?;
            }
        }
        let no_indexes = BTreeMap::new();
        let last_indexes = data.last_indexes.as_ref().unwrap_or(&no_indexes);
        map.serialize_entry(fields::LAST_INDEXES, last_indexes)?;
        map.end()
    }
}
