// authprov-core/src/core/fields.rs
// ============================================================================
// Module: AuthProv Field Names
// Description: Canonical attribute names for auth-subscription resources.
// Purpose: Share one spelling of every attribute across rules and adapters.
// Dependencies: None
// ============================================================================

//! ## Overview
//! Attribute names as they appear on the wire and inside error descriptions.
//! Legacy 4G names are upper-case LDAP attribute names.

// ============================================================================
// SECTION: Resource Names
// ============================================================================

/// Auth-subscription collection segment.
pub const AUTH_SUBSCRIPTION: &str = "authSubscription";
/// Static data resource name.
pub const AUTH_SUBSCRIPTION_STATIC_DATA: &str = "authSubscriptionStaticData";
/// Dynamic data resource name.
pub const AUTH_SUBSCRIPTION_DYNAMIC_DATA: &str = "authSubscriptionDynamicData";
/// Provisioning journal resource name.
pub const PROV_JOURNAL: &str = "provJournal";
/// Resource path attribute name.
pub const RESOURCE_PATH: &str = "resource_path";
/// IMSI attribute name used in path diagnostics.
pub const IMSI: &str = "imsi";

// ============================================================================
// SECTION: Static Data Attributes
// ============================================================================

/// Authentication method.
pub const AUTHENTICATION_METHOD: &str = "authenticationMethod";
/// Encrypted permanent key (K).
pub const ENC_PERMANENT_KEY: &str = "encPermanentKey";
/// Authentication management field (AMF).
pub const AUTHENTICATION_MANAGEMENT_FIELD: &str = "authenticationManagementField";
/// Algorithm identifier.
pub const ALGORITHM_ID: &str = "algorithmId";
/// A4 key indicator.
pub const A4_KEY_IND: &str = "a4KeyInd";
/// A4 indicator.
pub const A4_IND: &str = "a4Ind";
/// Encrypted OPc key.
pub const ENC_OPC_KEY: &str = "encOpcKey";
/// Encrypted TOPc key.
pub const ENC_TOPC_KEY: &str = "encTopcKey";
/// A4 key version.
pub const A4_KEY_V: &str = "a4KeyV";
/// AKA algorithm indicator.
pub const AKA_ALGORITHM_IND: &str = "akaAlgorithmInd";
/// Prefix marking opaque vendor-specific attributes.
pub const VENDOR_SPECIFIC_PREFIX: &str = "vendorSpecific-";

// ============================================================================
// SECTION: Dynamic Data Attributes
// ============================================================================

/// Sequence number scheme.
pub const SQN_SCHEME: &str = "sqnScheme";
/// Sequence number.
pub const SQN: &str = "sqn";
/// Last indexes map.
pub const LAST_INDEXES: &str = "lastIndexes";

// ============================================================================
// SECTION: Legacy 4G Attributes
// ============================================================================

/// Legacy algorithm set indicator.
pub const LEGACY_F_SET_IND: &str = "FSETIND";
/// Legacy encrypted Ki.
pub const LEGACY_EKI: &str = "EKI";
/// Legacy key indicator.
pub const LEGACY_KIND: &str = "KIND";
/// Legacy A4 indicator.
pub const LEGACY_A4_IND: &str = "A4IND";
/// Legacy AMF value (decimal).
pub const LEGACY_AMF_VALUE: &str = "AMFVALUE";
/// Legacy encrypted OPc.
pub const LEGACY_EOPC: &str = "EOPC";
/// Legacy home-environment sequence counter.
pub const LEGACY_SEQ_HE: &str = "SEQHE";
/// Legacy AKA type.
pub const LEGACY_AKA_TYPE: &str = "AKATYPE";
/// Legacy key version number.
pub const LEGACY_V_NUMBER: &str = "VNUMBER";
/// Legacy AKA algorithm indicator.
pub const LEGACY_AKA_ALG_IND: &str = "AKAALGIND";
