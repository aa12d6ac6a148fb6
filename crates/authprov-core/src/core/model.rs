// authprov-core/src/core/model.rs
// ============================================================================
// Module: AuthProv Data Model
// Description: Changes, auth-subscription records, and related resources.
// Purpose: Provide the typed request model consumed by the rule engine.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! The model mirrors the provisioning resources a change batch touches:
//! 5G auth subscriptions (static and dynamic data), legacy 4G auth records,
//! and provisioning journals. Static attributes stay as raw strings so the
//! rule engine can report format violations on exactly what the client sent.
//!
//! Related resources are a tagged union keyed by path. Typed lookups tell a
//! missing path apart from a path holding a different resource kind.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::core::response::ValidationError;

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Requested change operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create a resource.
    Create,
    /// Update an existing resource.
    Update,
    /// Delete a resource.
    Delete,
}

impl Operation {
    /// Returns the wire spelling of the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }

    /// Parses the wire spelling of an operation.
    #[must_use]
    pub fn from_wire(text: &str) -> Option<Self> {
        match text {
            "CREATE" => Some(Self::Create),
            "UPDATE" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Auth Subscription
// ============================================================================

/// Authentication methods accepted for 5G provisioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticationMethod {
    /// 5G AKA.
    FiveGAka,
    /// EAP-AKA'.
    EapAkaPrime,
}

impl AuthenticationMethod {
    /// Returns the wire spelling of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveGAka => "5G_AKA",
            Self::EapAkaPrime => "EAP_AKA_PRIME",
        }
    }

    /// Parses the wire spelling of a method.
    #[must_use]
    pub fn from_wire(text: &str) -> Option<Self> {
        match text {
            "5G_AKA" => Some(Self::FiveGAka),
            "EAP_AKA_PRIME" => Some(Self::EapAkaPrime),
            _ => None,
        }
    }

    /// Returns true for methods of the AKA family.
    #[must_use]
    pub const fn is_aka(self) -> bool {
        matches!(self, Self::FiveGAka | Self::EapAkaPrime)
    }
}

/// Long-lived credential material of an auth subscription.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticData {
    /// Authentication method as supplied by the client.
    pub authentication_method: String,
    /// Encrypted permanent key.
    pub enc_permanent_key: Option<String>,
    /// Authentication management field (hex).
    pub authentication_management_field: Option<String>,
    /// Algorithm identifier (decimal).
    pub algorithm_id: Option<String>,
    /// A4 key indicator (decimal).
    pub a4_key_ind: Option<String>,
    /// A4 indicator (decimal).
    pub a4_ind: Option<String>,
    /// Encrypted OPc key (hex).
    pub enc_opc_key: Option<String>,
    /// Encrypted TOPc key, passed through unvalidated.
    pub enc_topc_key: Option<String>,
    /// A4 key version (decimal).
    pub a4_key_v: Option<String>,
    /// AKA algorithm indicator (decimal).
    pub aka_algorithm_ind: Option<String>,
    /// Opaque `vendorSpecific-*` attributes.
    pub vendor_specific: BTreeMap<String, Value>,
}

impl StaticData {
    /// Creates static data with only the authentication method set.
    #[must_use]
    pub fn new(authentication_method: impl Into<String>) -> Self {
        Self {
            authentication_method: authentication_method.into(),
            ..Self::default()
        }
    }

    /// Returns the recognized authentication method, if any.
    #[must_use]
    pub fn method(&self) -> Option<AuthenticationMethod> {
        AuthenticationMethod::from_wire(&self.authentication_method)
    }
}

/// Sequence number schemes derived for dynamic data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqnScheme {
    /// Time-based sequence numbers.
    TimeBased,
    /// Counter-based sequence numbers.
    NonTimeBased,
}

impl SqnScheme {
    /// Returns the wire spelling of the scheme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TimeBased => "TIME_BASED",
            Self::NonTimeBased => "NON_TIME_BASED",
        }
    }
}

/// System-derived sequence counter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicData {
    /// Sequence number scheme.
    pub sqn_scheme: Option<String>,
    /// Sequence number (12 hex characters).
    pub sqn: Option<String>,
    /// Last used indexes keyed by index name.
    pub last_indexes: Option<BTreeMap<String, i64>>,
}

impl DynamicData {
    /// Builds dynamic data for a scheme and optional sequence number.
    #[must_use]
    pub fn derived(scheme: SqnScheme, sqn: Option<String>) -> Self {
        Self {
            sqn_scheme: Some(scheme.as_str().to_string()),
            sqn,
            last_indexes: None,
        }
    }
}

/// A subscriber's 5G authentication configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSubscription {
    /// Static credential data.
    pub static_data: Option<StaticData>,
    /// Dynamic sequence data.
    pub dynamic_data: Option<DynamicData>,
}

impl AuthSubscription {
    /// Creates a subscription holding only static data.
    #[must_use]
    pub const fn with_static(static_data: StaticData) -> Self {
        Self {
            static_data: Some(static_data),
            dynamic_data: None,
        }
    }
}

// ============================================================================
// SECTION: Changes
// ============================================================================

/// One requested mutation of a provisioning resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    /// Requested operation.
    pub operation: Operation,
    /// Target resource path.
    pub resource_path: String,
    /// Auth-subscription payload carried by the change.
    pub auth_subscription: AuthSubscription,
}

impl Change {
    /// Creates a change without payload.
    #[must_use]
    pub fn new(operation: Operation, resource_path: impl Into<String>) -> Self {
        Self {
            operation,
            resource_path: resource_path.into(),
            auth_subscription: AuthSubscription::default(),
        }
    }

    /// Returns the change with the given static data attached.
    #[must_use]
    pub fn with_static_data(mut self, static_data: StaticData) -> Self {
        self.auth_subscription.static_data = Some(static_data);
        self
    }

    /// Returns the change with the given dynamic data attached.
    #[must_use]
    pub fn with_dynamic_data(mut self, dynamic_data: DynamicData) -> Self {
        self.auth_subscription.dynamic_data = Some(dynamic_data);
        self
    }

    /// Returns the static data carried by the change.
    #[must_use]
    pub const fn static_data(&self) -> Option<&StaticData> {
        self.auth_subscription.static_data.as_ref()
    }
}

// ============================================================================
// SECTION: Legacy and Journal Resources
// ============================================================================

/// Pre-5G authentication record keyed by the legacy IMSI path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyAuthSubscription {
    /// Algorithm set indicator.
    pub f_set_ind: Option<i64>,
    /// Encrypted Ki.
    pub eki: Option<String>,
    /// Key indicator.
    pub kind: Option<i64>,
    /// A4 indicator.
    pub a4_ind: Option<i64>,
    /// AMF value (decimal).
    pub amf_value: Option<i64>,
    /// Encrypted OPc.
    pub eopc: Option<String>,
    /// Home-environment sequence counter (hex).
    pub seq_he: Option<String>,
    /// AKA type.
    pub aka_type: Option<i64>,
    /// Key version number.
    pub v_number: Option<i64>,
    /// AKA algorithm indicator.
    pub aka_alg_ind: Option<i64>,
}

/// Identity entry of a provisioning journal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriberIdentity {
    /// Identity value.
    pub id: String,
    /// Identity prefix.
    pub prefix: String,
}

/// Per-subscriber provisioning flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvJournal {
    /// Notification reference.
    pub notif_ref: String,
    /// IMSI.
    pub imsi: String,
    /// IMSI service mask; bit 4 flags AuC registration.
    pub imsi_mask: String,
    /// IMSI extended mask.
    pub imsi_ext_mask: String,
    /// MSISDN.
    pub msisdn: String,
    /// MSISDN mask.
    pub msisdn_mask: String,
    /// MSISDN extended mask.
    pub msisdn_ext_mask: String,
    /// Auxiliary IMSI.
    pub imsi_aux: String,
    /// Auxiliary IMSI mask.
    pub imsi_aux_mask: String,
    /// Auxiliary IMSI extended mask.
    pub imsi_aux_ext_mask: String,
    /// IMPI.
    pub impi: String,
    /// IMPI mask.
    pub impi_mask: String,
    /// IMPI extended mask.
    pub impi_ext_mask: String,
    /// Secondary IMPI.
    pub sec_impi: String,
    /// Auxiliary IMPI.
    pub impi_aux: String,
    /// User name.
    pub username: String,
    /// User name mask.
    pub username_mask: String,
    /// User name extended mask.
    pub username_ext_mask: String,
    /// IMSI change-over status.
    pub imsi_cho_status: Option<i64>,
    /// IMSI expiry date.
    pub imsi_expiry_date: String,
    /// IMSI change-over execution.
    pub imsi_cho_exec: String,
    /// IMPU change-over identifiers.
    pub impu_cho_ids: Vec<String>,
    /// Auxiliary MSC identifier.
    pub msc_id_aux: String,
    /// Notification info.
    pub notif_info: String,
    /// UE function mask.
    pub ue_function_mask: String,
    /// External identifiers.
    pub ext_id_list: Vec<String>,
    /// NAI.
    pub nai: String,
    /// NAI mask.
    pub nai_mask: String,
    /// NAI extended mask.
    pub nai_ext_mask: String,
    /// Subscriber identities.
    pub subs_id_list: Vec<SubscriberIdentity>,
}

impl ProvJournal {
    /// Creates a journal with only the IMSI mask set.
    #[must_use]
    pub fn with_imsi_mask(imsi_mask: impl Into<String>) -> Self {
        Self {
            imsi_mask: imsi_mask.into(),
            ..Self::default()
        }
    }
}

// ============================================================================
// SECTION: Related Resources
// ============================================================================

/// Stored resource snapshot entry.
#[derive(Debug, Clone, PartialEq)]
pub enum RelatedResource {
    /// Stored 5G auth subscription.
    AuthSubscription(AuthSubscription),
    /// Stored legacy 4G auth record.
    Legacy(LegacyAuthSubscription),
    /// Stored provisioning journal.
    ProvJournal(ProvJournal),
}

impl RelatedResource {
    /// Returns the resource kind label.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::AuthSubscription(_) => ResourceKind::AuthSubscription,
            Self::Legacy(_) => ResourceKind::Legacy,
            Self::ProvJournal(_) => ResourceKind::ProvJournal,
        }
    }
}

impl From<AuthSubscription> for RelatedResource {
    fn from(value: AuthSubscription) -> Self {
        Self::AuthSubscription(value)
    }
}

impl From<LegacyAuthSubscription> for RelatedResource {
    fn from(value: LegacyAuthSubscription) -> Self {
        Self::Legacy(value)
    }
}

impl From<ProvJournal> for RelatedResource {
    fn from(value: ProvJournal) -> Self {
        Self::ProvJournal(value)
    }
}

/// Related resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// 5G auth subscription.
    AuthSubscription,
    /// Legacy 4G auth record.
    Legacy,
    /// Provisioning journal.
    ProvJournal,
}

impl ResourceKind {
    /// Returns a stable label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthSubscription => "authSubscription",
            Self::Legacy => "legacyAuthSubscription",
            Self::ProvJournal => "provJournal",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed related-resource lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceLookupError {
    /// No resource is stored at the path.
    #[error("no related resource at {path}")]
    NotFound {
        /// Requested path.
        path: String,
    },
    /// The path holds a different resource kind.
    #[error("related resource at {path} is {found}, expected {expected}")]
    WrongVariant {
        /// Requested path.
        path: String,
        /// Kind the caller asked for.
        expected: ResourceKind,
        /// Kind actually stored.
        found: ResourceKind,
    },
}

/// Snapshot of stored resources keyed by resource path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelatedResources {
    /// Entries keyed by path.
    entries: BTreeMap<String, RelatedResource>,
}

impl RelatedResources {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a resource, replacing any previous entry at the path.
    pub fn insert(&mut self, path: impl Into<String>, resource: impl Into<RelatedResource>) {
        self.entries.insert(path.into(), resource.into());
    }

    /// Returns the snapshot with an additional resource.
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, resource: impl Into<RelatedResource>) -> Self {
        self.insert(path, resource);
        self
    }

    /// Returns true when any resource is stored at the path.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Returns the raw entry stored at the path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&RelatedResource> {
        self.entries.get(path)
    }

    /// Returns the number of stored resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no resources are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RelatedResource)> {
        self.entries.iter().map(|(path, resource)| (path.as_str(), resource))
    }

    /// Looks up an auth subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceLookupError`] when the path is absent or holds another kind.
    pub fn auth_subscription(&self, path: &str) -> Result<&AuthSubscription, ResourceLookupError> {
        match self.lookup(path)? {
            RelatedResource::AuthSubscription(value) => Ok(value),
            other => Err(wrong_variant(path, ResourceKind::AuthSubscription, other)),
        }
    }

    /// Looks up a legacy 4G auth record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceLookupError`] when the path is absent or holds another kind.
    pub fn legacy(&self, path: &str) -> Result<&LegacyAuthSubscription, ResourceLookupError> {
        match self.lookup(path)? {
            RelatedResource::Legacy(value) => Ok(value),
            other => Err(wrong_variant(path, ResourceKind::Legacy, other)),
        }
    }

    /// Looks up a provisioning journal.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceLookupError`] when the path is absent or holds another kind.
    pub fn prov_journal(&self, path: &str) -> Result<&ProvJournal, ResourceLookupError> {
        match self.lookup(path)? {
            RelatedResource::ProvJournal(value) => Ok(value),
            other => Err(wrong_variant(path, ResourceKind::ProvJournal, other)),
        }
    }

    /// Fetches the entry at `path` or reports it missing.
    fn lookup(&self, path: &str) -> Result<&RelatedResource, ResourceLookupError> {
        self.entries.get(path).ok_or_else(|| ResourceLookupError::NotFound {
            path: path.to_string(),
        })
    }
}

/// Builds a wrong-variant lookup error.
fn wrong_variant(
    path: &str,
    expected: ResourceKind,
    found: &RelatedResource,
) -> ResourceLookupError {
    ResourceLookupError::WrongVariant {
        path: path.to_string(),
        expected,
        found: found.kind(),
    }
}

// ============================================================================
// SECTION: Requests
// ============================================================================

/// Fully decoded validation request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationRequest {
    /// Changes in submission order.
    pub changes: Vec<Change>,
    /// Stored resource snapshot.
    pub related: RelatedResources,
    /// Field-level violations found while decoding the request.
    pub input_errors: Vec<ValidationError>,
}

impl ValidationRequest {
    /// Creates a request from changes and related resources.
    #[must_use]
    pub const fn new(changes: Vec<Change>, related: RelatedResources) -> Self {
        Self {
            changes,
            related,
            input_errors: Vec::new(),
        }
    }
}
