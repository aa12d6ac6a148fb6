// authprov-core/tests/common/mod.rs
// =============================================================================
// Module: Core Test Fixtures
// Description: Shared paths, records, and request builders for engine tests.
// Purpose: Reduce duplication across authprov-core integration suites.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use authprov_core::AuthSubscription;
use authprov_core::Change;
use authprov_core::LegacyAuthSubscription;
use authprov_core::Operation;
use authprov_core::ProvJournal;
use authprov_core::RelatedResources;
use authprov_core::RuleEngine;
use authprov_core::StaticData;
use authprov_core::ValidationReport;
use authprov_core::ValidationRequest;

/// Subscriber identifier used by most fixtures.
pub const MSC_ID: &str = "msc-1";
/// IMSI used by most fixtures.
pub const IMSI: &str = "123456789012345";
/// IMSI mask with the AuC bit set.
pub const AUC_MASK: &str = "0000000000010000";

/// Returns the static-data path for a subscriber and IMSI.
pub fn static_path(msc_id: &str, imsi: &str) -> String {
    format!("/subscribers/{msc_id}/authSubscription/imsi-{imsi}/authSubscriptionStaticData")
}

/// Returns the private-identifier path for a subscriber and IMSI.
pub fn priv_id_path(msc_id: &str, imsi: &str) -> String {
    format!("/subscribers/{msc_id}/authSubscription/imsi-{imsi}")
}

/// Returns the legacy record path for an IMSI.
pub fn legacy_path(imsi: &str) -> String {
    format!("/legacy/serv=Auth/IMSI={imsi}")
}

/// Returns the provisioning journal path for a subscriber.
pub fn journal_path(msc_id: &str) -> String {
    format!("/subscribers/{msc_id}/journal/provJournal")
}

/// Returns static data satisfying every AKA rule without a legacy record.
pub fn full_static_data() -> StaticData {
    StaticData {
        enc_permanent_key: Some("000102030405060708090A0B0C0D0E0F".to_string()),
        authentication_management_field: Some("B9B9".to_string()),
        algorithm_id: Some("5".to_string()),
        a4_key_ind: Some("1".to_string()),
        a4_ind: Some("2".to_string()),
        ..StaticData::new("5G_AKA")
    }
}

/// Returns a consistent legacy 4G record without SEQHE.
pub fn full_legacy() -> LegacyAuthSubscription {
    LegacyAuthSubscription {
        f_set_ind: Some(15),
        eki: Some("EKIVALUE".to_string()),
        kind: Some(1),
        a4_ind: Some(2),
        amf_value: Some(47545),
        eopc: Some("EOPCVALUE".to_string()),
        seq_he: None,
        aka_type: Some(1),
        v_number: Some(20),
        aka_alg_ind: Some(0),
    }
}

/// Returns a journal registered in AuC.
pub fn auc_journal() -> ProvJournal {
    ProvJournal::with_imsi_mask(AUC_MASK)
}

/// Builds a CREATE on the default static-data path.
pub fn create(static_data: StaticData) -> Change {
    Change::new(Operation::Create, static_path(MSC_ID, IMSI)).with_static_data(static_data)
}

/// Builds an UPDATE on the default static-data path.
pub fn update(static_data: StaticData) -> Change {
    Change::new(Operation::Update, static_path(MSC_ID, IMSI)).with_static_data(static_data)
}

/// Returns related resources holding a stored subscription for the default IMSI.
pub fn stored_subscription(static_data: StaticData) -> RelatedResources {
    RelatedResources::new()
        .with(priv_id_path(MSC_ID, IMSI), AuthSubscription::with_static(static_data))
}

/// Validates `changes` against `related`.
pub fn validate(changes: Vec<Change>, related: RelatedResources) -> ValidationReport {
    RuleEngine::new().validate(&ValidationRequest::new(changes, related))
}

/// Collects error descriptions.
pub fn descriptions(report: &ValidationReport) -> Vec<String> {
    report.descriptions().map(str::to_string).collect()
}
