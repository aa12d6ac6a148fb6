// authprov-wire/src/constants.rs
// ============================================================================
// Module: AuthProv Wire Keys
// Description: JSON member names of request and response documents.
// Purpose: Keep document keys out of the parser and encoder bodies.
// Dependencies: None
// ============================================================================

//! ## Overview
//! Document-level keys live here. Resource attribute names are shared with
//! the rule engine through [`authprov_core::core::fields`].

// ============================================================================
// SECTION: Document Keys
// ============================================================================

/// Change list member.
pub const CHANGES: &str = "changes";
/// Related resource map member.
pub const RELATED_RESOURCES: &str = "relatedResources";
/// Change operation member.
pub const OPERATION: &str = "operation";
/// Change payload member.
pub const DATA: &str = "data";
/// Error list member.
pub const ERRORS: &str = "errors";
/// Error category member.
pub const ERROR_MESSAGE: &str = "errorMessage";
/// Error details member.
pub const ERROR_DETAILS: &str = "errorDetails";

// ============================================================================
// SECTION: Legacy Base64 Keys
// ============================================================================

/// Base64 spelling of the legacy encrypted Ki.
pub const LEGACY_EKI_BASE64: &str = "EKI:";
/// Base64 spelling of the legacy encrypted OPc.
pub const LEGACY_EOPC_BASE64: &str = "EOPC:";
/// Base64 spelling of the legacy sequence counter.
pub const LEGACY_SEQ_HE_BASE64: &str = "SEQHE:";

// ============================================================================
// SECTION: Provisioning Journal Keys
// ============================================================================

/// Notification reference.
pub const NOTIF_REF: &str = "notifRef";
/// IMSI.
pub const IMSI: &str = "imsi";
/// IMSI mask.
pub const IMSI_MASK: &str = "imsiMask";
/// IMSI extended mask.
pub const IMSI_EXT_MASK: &str = "imsiExtMask";
/// MSISDN.
pub const MSISDN: &str = "msisdn";
/// MSISDN mask.
pub const MSISDN_MASK: &str = "msisdnMask";
/// MSISDN extended mask.
pub const MSISDN_EXT_MASK: &str = "msisdnExtMask";
/// Auxiliary IMSI.
pub const IMSI_AUX: &str = "imsiAux";
/// Auxiliary IMSI mask.
pub const IMSI_AUX_MASK: &str = "imsiAuxMask";
/// Auxiliary IMSI extended mask.
pub const IMSI_AUX_EXT_MASK: &str = "imsiAuxExtMask";
/// IMPI.
pub const IMPI: &str = "impi";
/// IMPI mask.
pub const IMPI_MASK: &str = "impiMask";
/// IMPI extended mask.
pub const IMPI_EXT_MASK: &str = "impiExtMask";
/// Secondary IMPI.
pub const SEC_IMPI: &str = "secImpi";
/// Auxiliary IMPI.
pub const IMPI_AUX: &str = "impiAux";
/// User name.
pub const USERNAME: &str = "username";
/// User name mask.
pub const USERNAME_MASK: &str = "usernameMask";
/// User name extended mask.
pub const USERNAME_EXT_MASK: &str = "usernameExtMask";
/// IMSI change-over status.
pub const IMSI_CHO_STATUS: &str = "imsiChoStatus";
/// IMSI expiry date.
pub const IMSI_EXPIRY_DATE: &str = "imsiExpiryDate";
/// IMSI change-over execution.
pub const IMSI_CHO_EXEC: &str = "imsiChoExec";
/// IMPU change-over identifiers.
pub const IMPU_CHO_IDS: &str = "impuChoIds";
/// Auxiliary MSC identifier.
pub const MSC_ID_AUX: &str = "mscIdAux";
/// Notification info.
pub const NOTIF_INFO: &str = "notifInfo";
/// UE function mask.
pub const UE_FUNCTION_MASK: &str = "ueFunctionMask";
/// External identifiers.
pub const EXT_ID_LIST: &str = "extIdList";
/// NAI.
pub const NAI: &str = "nai";
/// NAI mask.
pub const NAI_MASK: &str = "naiMask";
/// NAI extended mask.
pub const NAI_EXT_MASK: &str = "naiExtMask";
/// Subscriber identity list.
pub const SUBS_ID_LIST: &str = "subsIdList";
/// Subscriber identity value.
pub const SUBS_ID: &str = "id";
/// Subscriber identity prefix.
pub const SUBS_PREFIX: &str = "prefix";
