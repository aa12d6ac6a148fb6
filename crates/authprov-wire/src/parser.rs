// authprov-wire/src/parser.rs
// ============================================================================
// Module: AuthProv Request Parser
// Description: Decodes validation request documents into the core model.
// Purpose: Separate structural rejections from field-level input errors.
// Dependencies: authprov-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A request document carries a `changes` list and a `relatedResources`
//! map. Structural faults (malformed JSON, a change that is not an object,
//! a missing or unknown operation) abort parsing with a [`WireError`] and
//! are answered with 400. Field-level faults inside change data or related
//! resources never abort: they become Constraint Violation entries in
//! [`ValidationRequest::input_errors`], which reject the batch with 409.
//!
//! Change data is decoded after every member of the change has been read,
//! so member order inside a change never matters.
//!
//! Security posture: the whole document is untrusted. Related resources are
//! decoded leniently and unknown members are ignored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use authprov_core::AuthSubscription;
use authprov_core::Change;
use authprov_core::DynamicData;
use authprov_core::ErrorKind;
use authprov_core::LegacyAuthSubscription;
use authprov_core::Operation;
use authprov_core::PathShape;
use authprov_core::ProvJournal;
use authprov_core::RelatedResources;
use authprov_core::StaticData;
use authprov_core::SubscriberIdentity;
use authprov_core::ValidationError;
use authprov_core::ValidationRequest;
use authprov_core::core::fields;
use authprov_core::core::response::DETAIL_DESCRIPTION;
use authprov_core::path;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::constants;
use crate::octets::decode_base64_text;
use crate::octets::ldap_reorder;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Structural request and encoding failures.
///
/// Every parse variant maps to HTTP 400 "Bad Request".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireError {
    /// The document is not a JSON object.
    #[error("wrong json format")]
    WrongFormat,
    /// `changes` is not an array.
    #[error("changes is not a list")]
    ChangesNotList,
    /// A change entry is not an object.
    #[error("change is not an object")]
    ChangeNotObject,
    /// A mandatory change member is missing.
    #[error("Mandatory field:[{0}] not found")]
    MissingMember(&'static str),
    /// A change member that must be a string is not.
    #[error("{0} is not string")]
    NotString(&'static str),
    /// A change member is an empty string.
    #[error("Field:[{0}] is empty")]
    EmptyMember(&'static str),
    /// The operation is not one of the supported verbs.
    #[error("operation value is not allowed. It should be either: CREATE, UPDATE or DELETE")]
    OperationNotAllowed,
    /// `data` is not an object.
    #[error("data is not an object")]
    DataNotObject,
    /// `relatedResources` is not an object.
    #[error("relatedResources is not an object")]
    RelatedResourcesNotObject,
    /// The response document could not be serialized.
    #[error("response encoding failed: {0}")]
    Encode(String),
}

impl WireError {
    /// HTTP status answered for structural failures.
    pub const BAD_REQUEST: u16 = 400;
    /// Error message carried by the 400 response document.
    pub const BAD_REQUEST_MESSAGE: &'static str = "Bad Request";

    /// Returns the HTTP status for this failure.
    #[must_use]
    pub const fn status(&self) -> u16 {
        Self::BAD_REQUEST
    }

    /// Builds the error document answered for this failure.
    #[must_use]
    pub fn to_validation_error(&self) -> ValidationError {
        ValidationError {
            message: Self::BAD_REQUEST_MESSAGE.to_string(),
            details: BTreeMap::from([(DETAIL_DESCRIPTION.to_string(), self.to_string())]),
        }
    }
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Parses a request document.
///
/// # Errors
///
/// Returns [`WireError`] when the document is structurally invalid.
pub fn parse_request(input: &str) -> Result<ValidationRequest, WireError> {
    let document: Value = serde_json::from_str(input).map_err(|_| WireError::WrongFormat)?;
    let Value::Object(root) = document else {
        return Err(WireError::WrongFormat);
    };

    let mut input_errors = InputErrors::default();
    let changes = match root.get(constants::CHANGES) {
        None => Vec::new(),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| parse_change(entry, &mut input_errors))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(WireError::ChangesNotList),
    };
    let related = match root.get(constants::RELATED_RESOURCES) {
        None => RelatedResources::new(),
        Some(Value::Object(resources)) => parse_related_resources(resources, &mut input_errors),
        Some(_) => return Err(WireError::RelatedResourcesNotObject),
    };

    let mut request = ValidationRequest::new(changes, related);
    request.input_errors = input_errors.into_inner();
    Ok(request)
}

// ============================================================================
// SECTION: Input Errors
// ============================================================================

/// Collector for field-level decoding faults.
#[derive(Debug, Default)]
struct InputErrors(Vec<ValidationError>);

impl InputErrors {
    /// Records a Constraint Violation for `resource_path`.
    fn push(&mut self, resource_path: &str, description: String) {
        let error =
            ValidationError::for_path(ErrorKind::ConstraintViolation, resource_path, description);
        self.0.push(error);
    }

    /// Records a missing mandatory field.
    fn missing(&mut self, resource_path: &str, field: &str) {
        self.push(resource_path, format!("Mandatory field:[{field}] not found"));
    }

    /// Records a field that should hold a string.
    fn not_string(&mut self, resource_path: &str, field: &str) {
        self.push(resource_path, format!("Field:[{field}] is not string"));
    }

    /// Records a field that should hold an object.
    fn not_object(&mut self, resource_path: &str, field: &str) {
        self.push(resource_path, format!("Field:[{field}] is not an object"));
    }

    /// Returns the recorded errors in detection order.
    fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

// ============================================================================
// SECTION: Changes
// ============================================================================

/// Parses one change entry.
fn parse_change(entry: &Value, errors: &mut InputErrors) -> Result<Change, WireError> {
    let Value::Object(members) = entry else {
        return Err(WireError::ChangeNotObject);
    };

    let operation = required_string(members, constants::OPERATION)?;
    let operation = Operation::from_wire(operation).ok_or(WireError::OperationNotAllowed)?;
    let resource_path = required_string(members, fields::RESOURCE_PATH)?;
    let data = match members.get(constants::DATA) {
        None => None,
        Some(Value::Object(data)) => Some(data),
        Some(_) => return Err(WireError::DataNotObject),
    };

    let mut change = Change::new(operation, resource_path);
    if let Some(data) = data {
        match path::classify(resource_path) {
            PathShape::Collection => {
                change.auth_subscription = parse_auth_subscription(data, resource_path, errors);
            }
            PathShape::StaticData => {
                change.auth_subscription.static_data =
                    Some(parse_static_data(data, resource_path, errors));
            }
            PathShape::PrivId | PathShape::Legacy | PathShape::Unmatched => {}
        }
    }
    Ok(change)
}

/// Reads a mandatory, non-empty string member of a change.
fn required_string<'a>(
    members: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a str, WireError> {
    match members.get(key) {
        None => Err(WireError::MissingMember(key)),
        Some(Value::String(text)) if text.is_empty() => Err(WireError::EmptyMember(key)),
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(WireError::NotString(key)),
    }
}

// ============================================================================
// SECTION: Auth Subscription Data
// ============================================================================

/// Decodes an auth subscription holding mandatory static data.
fn parse_auth_subscription(
    data: &Map<String, Value>,
    resource_path: &str,
    errors: &mut InputErrors,
) -> AuthSubscription {
    let mut subscription = AuthSubscription::default();
    let static_data = match data.get(fields::AUTH_SUBSCRIPTION_STATIC_DATA) {
        None => {
            errors.missing(resource_path, fields::AUTH_SUBSCRIPTION_STATIC_DATA);
            return subscription;
        }
        Some(Value::Object(static_data)) => static_data,
        Some(_) => {
            errors.not_object(resource_path, fields::AUTH_SUBSCRIPTION_STATIC_DATA);
            return subscription;
        }
    };
    subscription.static_data = Some(parse_static_data(static_data, resource_path, errors));

    match data.get(fields::AUTH_SUBSCRIPTION_DYNAMIC_DATA) {
        None => {}
        Some(Value::Object(dynamic_data)) => {
            subscription.dynamic_data =
                Some(parse_dynamic_data(dynamic_data, resource_path, errors));
        }
        Some(_) => errors.not_object(resource_path, fields::AUTH_SUBSCRIPTION_DYNAMIC_DATA),
    }
    subscription
}

/// Decodes static data; wrongly typed attributes are reported and dropped.
fn parse_static_data(
    data: &Map<String, Value>,
    resource_path: &str,
    errors: &mut InputErrors,
) -> StaticData {
    let vendor_specific = data
        .iter()
        .filter(|(key, _)| key.starts_with(fields::VENDOR_SPECIFIC_PREFIX))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let authentication_method = match data.get(fields::AUTHENTICATION_METHOD) {
        None => {
            errors.push(
                resource_path,
                format!(
                    "Mandatory field:[{}] not found as child of:[{}]",
                    fields::AUTHENTICATION_METHOD,
                    fields::AUTH_SUBSCRIPTION_STATIC_DATA
                ),
            );
            String::new()
        }
        Some(Value::String(method)) => method.clone(),
        Some(_) => {
            errors.not_string(resource_path, fields::AUTHENTICATION_METHOD);
            String::new()
        }
    };

    let mut attribute = |key: &str| optional_string(data, key, resource_path, errors);
    StaticData {
        authentication_method,
        enc_permanent_key: attribute(fields::ENC_PERMANENT_KEY),
        authentication_management_field: attribute(fields::AUTHENTICATION_MANAGEMENT_FIELD),
        algorithm_id: attribute(fields::ALGORITHM_ID),
        a4_key_ind: attribute(fields::A4_KEY_IND),
        a4_ind: attribute(fields::A4_IND),
        enc_opc_key: attribute(fields::ENC_OPC_KEY),
        enc_topc_key: attribute(fields::ENC_TOPC_KEY),
        a4_key_v: attribute(fields::A4_KEY_V),
        aka_algorithm_ind: attribute(fields::AKA_ALGORITHM_IND),
        vendor_specific,
    }
}

/// Decodes dynamic data.
fn parse_dynamic_data(
    data: &Map<String, Value>,
    resource_path: &str,
    errors: &mut InputErrors,
) -> DynamicData {
    let sqn_scheme = optional_string(data, fields::SQN_SCHEME, resource_path, errors);
    let sqn = optional_string(data, fields::SQN, resource_path, errors);
    let last_indexes = match data.get(fields::LAST_INDEXES) {
        None => None,
        Some(Value::Object(indexes)) => {
            let mut parsed = BTreeMap::new();
            for (name, value) in indexes {
                match value.as_i64() {
                    Some(index) => {
                        parsed.insert(name.clone(), index);
                    }
                    None => errors.push(
                        resource_path,
                        format!("value not integer in \"{}\"", fields::LAST_INDEXES),
                    ),
                }
            }
            Some(parsed)
        }
        Some(_) => {
            errors.not_object(resource_path, fields::LAST_INDEXES);
            None
        }
    };
    DynamicData {
        sqn_scheme,
        sqn,
        last_indexes,
    }
}

/// Reads an optional string attribute, reporting non-string values.
fn optional_string(
    data: &Map<String, Value>,
    key: &str,
    resource_path: &str,
    errors: &mut InputErrors,
) -> Option<String> {
    match data.get(key)? {
        Value::String(text) => Some(text.clone()),
        _ => {
            errors.not_string(resource_path, key);
            None
        }
    }
}

// ============================================================================
// SECTION: Related Resources
// ============================================================================

/// Decodes the related resource map; unrecognized paths are ignored.
fn parse_related_resources(
    resources: &Map<String, Value>,
    errors: &mut InputErrors,
) -> RelatedResources {
    let mut related = RelatedResources::new();
    for (resource_path, value) in resources {
        if path::classify(resource_path) == PathShape::Collection {
            let Value::Object(members) = value else {
                continue;
            };
            if members.contains_key(fields::AUTH_SUBSCRIPTION_STATIC_DATA) {
                let subscription = parse_auth_subscription(members, resource_path, errors);
                related.insert(resource_path.clone(), subscription);
            } else {
                for (priv_id, entry) in members {
                    let entry_path = path::path_with_suffix(resource_path, priv_id);
                    let subscription = match entry {
                        Value::Object(entry) => parse_auth_subscription(entry, &entry_path, errors),
                        _ => {
                            errors.missing(&entry_path, fields::AUTH_SUBSCRIPTION_STATIC_DATA);
                            AuthSubscription::default()
                        }
                    };
                    related.insert(entry_path, subscription);
                }
            }
        } else if resource_path.ends_with(fields::PROV_JOURNAL) {
            related.insert(resource_path.clone(), parse_prov_journal(value));
        } else if path::classify(resource_path) == PathShape::Legacy {
            related.insert(resource_path.clone(), parse_legacy(value));
        }
    }
    related
}

/// Returns a string member, or an empty string when absent or mistyped.
fn lenient_string(value: &Value, key: &str) -> String {
    value.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Returns the string elements of an array member.
fn lenient_strings(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

/// Decodes a provisioning journal; mistyped members read as empty.
fn parse_prov_journal(value: &Value) -> ProvJournal {
    let text = |key: &str| lenient_string(value, key);
    let subs_id_list = value
        .get(constants::SUBS_ID_LIST)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|item| item.is_object())
                .map(|item| SubscriberIdentity {
                    id: lenient_string(item, constants::SUBS_ID),
                    prefix: lenient_string(item, constants::SUBS_PREFIX),
                })
                .collect()
        })
        .unwrap_or_default();

    ProvJournal {
        notif_ref: text(constants::NOTIF_REF),
        imsi: text(constants::IMSI),
        imsi_mask: text(constants::IMSI_MASK),
        imsi_ext_mask: text(constants::IMSI_EXT_MASK),
        msisdn: text(constants::MSISDN),
        msisdn_mask: text(constants::MSISDN_MASK),
        msisdn_ext_mask: text(constants::MSISDN_EXT_MASK),
        imsi_aux: text(constants::IMSI_AUX),
        imsi_aux_mask: text(constants::IMSI_AUX_MASK),
        imsi_aux_ext_mask: text(constants::IMSI_AUX_EXT_MASK),
        impi: text(constants::IMPI),
        impi_mask: text(constants::IMPI_MASK),
        impi_ext_mask: text(constants::IMPI_EXT_MASK),
        sec_impi: text(constants::SEC_IMPI),
        impi_aux: text(constants::IMPI_AUX),
        username: text(constants::USERNAME),
        username_mask: text(constants::USERNAME_MASK),
        username_ext_mask: text(constants::USERNAME_EXT_MASK),
        imsi_cho_status: value.get(constants::IMSI_CHO_STATUS).and_then(Value::as_i64),
        imsi_expiry_date: text(constants::IMSI_EXPIRY_DATE),
        imsi_cho_exec: text(constants::IMSI_CHO_EXEC),
        impu_cho_ids: lenient_strings(value, constants::IMPU_CHO_IDS),
        msc_id_aux: text(constants::MSC_ID_AUX),
        notif_info: text(constants::NOTIF_INFO),
        ue_function_mask: text(constants::UE_FUNCTION_MASK),
        ext_id_list: lenient_strings(value, constants::EXT_ID_LIST),
        nai: text(constants::NAI),
        nai_mask: text(constants::NAI_MASK),
        nai_ext_mask: text(constants::NAI_EXT_MASK),
        subs_id_list,
    }
}

/// Decodes a legacy auth record; integer attributes are kept only when
/// they hold integers.
fn parse_legacy(value: &Value) -> LegacyAuthSubscription {
    let integer = |key: &str| value.get(key).and_then(Value::as_i64);
    LegacyAuthSubscription {
        f_set_ind: integer(fields::LEGACY_F_SET_IND),
        eki: legacy_octets(value, fields::LEGACY_EKI, constants::LEGACY_EKI_BASE64, false),
        kind: integer(fields::LEGACY_KIND),
        a4_ind: integer(fields::LEGACY_A4_IND),
        amf_value: integer(fields::LEGACY_AMF_VALUE),
        eopc: legacy_octets(value, fields::LEGACY_EOPC, constants::LEGACY_EOPC_BASE64, false),
        seq_he: legacy_octets(value, fields::LEGACY_SEQ_HE, constants::LEGACY_SEQ_HE_BASE64, true),
        aka_type: integer(fields::LEGACY_AKA_TYPE),
        v_number: integer(fields::LEGACY_V_NUMBER),
        aka_alg_ind: integer(fields::LEGACY_AKA_ALG_IND),
    }
}

/// Reads a legacy octet attribute from its plain or base64 spelling.
///
/// The plain spelling wins when non-empty. Empty results read as absent.
fn legacy_octets(
    value: &Value,
    plain_key: &str,
    base64_key: &str,
    ldap_ordered: bool,
) -> Option<String> {
    let normalize = |text: String| if ldap_ordered { ldap_reorder(&text) } else { text };
    let plain = normalize(lenient_string(value, plain_key));
    let text = if plain.is_empty() {
        normalize(decode_base64_text(&lenient_string(value, base64_key)))
    } else {
        plain
    };
    (!text.is_empty()).then_some(text)
}
