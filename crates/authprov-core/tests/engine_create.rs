// authprov-core/tests/engine_create.rs
// ============================================================================
// Module: CREATE Validation Tests
// Description: Common static-data rules, legacy consistency, and mutations.
// Purpose: Verify CREATE verdicts, error texts, and derived fields.
// ============================================================================

//! CREATE rule tests for authprov-core.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use authprov_core::DynamicData;
use authprov_core::LegacyAuthSubscription;
use authprov_core::ProvJournal;
use authprov_core::RelatedResources;
use authprov_core::StaticData;
use authprov_core::StatusCode;

mod common;

use common::IMSI;
use common::MSC_ID;

// ============================================================================
// SECTION: Common Rules
// ============================================================================

#[test]
fn aka_without_legacy_requires_five_attributes() {
    let report = common::validate(
        vec![common::create(StaticData::new("5G_AKA"))],
        RelatedResources::new(),
    );

    assert!(!report.is_accepted());
    assert_eq!(report.status(), StatusCode::Conflict);
    assert!(report.changes.is_empty());
    assert!(report.errors.iter().all(|error| error.message == "Constraint Violation"));
    assert_eq!(
        common::descriptions(&report),
        vec![
            "\"encPermanentKey\" in \"authSubscriptionStaticData\" has not been defined with an \
             AKA authentication method",
            "\"authenticationManagementField\" in \"authSubscriptionStaticData\" has not been \
             defined with an AKA authentication method",
            "\"algorithmId\" in \"authSubscriptionStaticData\" has not been defined with an AKA \
             authentication method",
            "\"a4KeyInd\" in \"authSubscriptionStaticData\" has not been defined with an AKA \
             authentication method",
            "\"a4Ind\" in \"authSubscriptionStaticData\" has not been defined with an AKA \
             authentication method",
        ]
    );
}

#[test]
fn valid_create_without_legacy_starts_counter_at_zero() {
    let report = common::validate(
        vec![common::create(common::full_static_data())],
        RelatedResources::new(),
    );

    assert!(report.is_accepted());
    assert_eq!(report.status(), StatusCode::Ok);
    assert_eq!(report.changes.len(), 1);
    let dynamic = report.changes[0].auth_subscription.dynamic_data.clone().unwrap();
    assert_eq!(dynamic.sqn_scheme.as_deref(), Some("NON_TIME_BASED"));
    assert_eq!(dynamic.sqn.as_deref(), Some("000000000000"));
    assert_eq!(report.changes[0].static_data(), Some(&common::full_static_data()));
}

#[test]
fn invalid_method_stops_attribute_checks() {
    let static_data = StaticData {
        enc_permanent_key: Some("zz".to_string()),
        ..StaticData::new("AKA")
    };
    let report = common::validate(vec![common::create(static_data)], RelatedResources::new());

    assert_eq!(report.status(), StatusCode::Conflict);
    assert_eq!(
        common::descriptions(&report),
        vec!["\"authenticationMethod\" in \"authSubscriptionStaticData\" has not the valid format"]
    );
}

#[test]
fn invalid_method_still_reports_dynamic_data() {
    let change = common::create(StaticData::new("AKA")).with_dynamic_data(DynamicData::default());
    let report = common::validate(vec![change], RelatedResources::new());

    assert_eq!(report.errors.len(), 2);
    assert_eq!(
        report.errors[1].description(),
        Some("\"authSubscriptionDynamicData\" can not be created or updated")
    );
}

#[test]
fn enc_permanent_key_reports_value_then_size() {
    let bad_value = StaticData {
        enc_permanent_key: Some("XYZ".to_string()),
        ..common::full_static_data()
    };
    let bad_size = StaticData {
        enc_permanent_key: Some("ABC".to_string()),
        ..common::full_static_data()
    };
    let report = common::validate(
        vec![common::create(bad_value), common::create(bad_size)],
        RelatedResources::new(),
    );

    assert_eq!(
        common::descriptions(&report),
        vec![
            "\"encPermanentKey\" in \"authSubscriptionStaticData\" has invalid value",
            "\"encPermanentKey\" in \"authSubscriptionStaticData\" has invalid size",
        ]
    );
}

#[test]
fn numeric_attributes_enforce_ranges() {
    let static_data = StaticData {
        algorithm_id: Some("16".to_string()),
        a4_key_ind: Some("512".to_string()),
        a4_ind: Some("3".to_string()),
        a4_key_v: Some("32".to_string()),
        authentication_management_field: Some("B9B".to_string()),
        ..common::full_static_data()
    };
    let report = common::validate(vec![common::create(static_data)], RelatedResources::new());

    assert_eq!(
        common::descriptions(&report),
        vec![
            "\"authenticationManagementField\" in \"authSubscriptionStaticData\" has invalid value",
            "\"algorithmId\" in \"authSubscriptionStaticData\" has invalid value",
            "\"a4KeyInd\" in \"authSubscriptionStaticData\" has invalid value",
            "\"a4Ind\" in \"authSubscriptionStaticData\" has invalid value",
            "\"a4KeyV\" in \"authSubscriptionStaticData\" has invalid value",
        ]
    );
}

#[test]
fn enc_opc_key_requires_milenage_algorithm() {
    let opc_message =
        "\"encOpcKey\" in \"authSubscriptionStaticData\" must not be present as \"algorithmId\" is \
         not MILLENAGE (0,2-15)";
    let test_algorithm = StaticData {
        algorithm_id: Some("1".to_string()),
        enc_opc_key: Some("00112233".to_string()),
        ..common::full_static_data()
    };
    let milenage = StaticData {
        algorithm_id: Some("2".to_string()),
        enc_opc_key: Some("00112233".to_string()),
        ..common::full_static_data()
    };
    let not_hex = StaticData {
        enc_opc_key: Some("GG".to_string()),
        ..common::full_static_data()
    };

    let report = common::validate(vec![common::create(test_algorithm)], RelatedResources::new());
    assert_eq!(common::descriptions(&report), vec![opc_message]);

    let report = common::validate(vec![common::create(milenage)], RelatedResources::new());
    assert!(report.is_accepted());

    let report = common::validate(vec![common::create(not_hex)], RelatedResources::new());
    assert_eq!(
        common::descriptions(&report),
        vec!["\"encOpcKey\" in \"authSubscriptionStaticData\" has invalid value"]
    );
}

#[test]
fn enc_opc_key_without_algorithm_id_is_rejected() {
    let static_data = StaticData {
        algorithm_id: None,
        enc_opc_key: Some("00112233".to_string()),
        ..common::full_static_data()
    };
    let report = common::validate(vec![common::create(static_data)], RelatedResources::new());

    let descriptions = common::descriptions(&report);
    assert!(descriptions.iter().any(|text| text.contains("is not MILLENAGE (0,2-15)")));
    assert!(descriptions.iter().any(|text| text.starts_with("\"algorithmId\"")));
}

// ============================================================================
// SECTION: AuC Registration
// ============================================================================

fn with_aka_algorithm_ind(value: &str) -> StaticData {
    StaticData {
        aka_algorithm_ind: Some(value.to_string()),
        ..common::full_static_data()
    }
}

#[test]
fn aka_algorithm_ind_without_journal_is_unprocessable() {
    let report = common::validate(
        vec![common::create(with_aka_algorithm_ind("1"))],
        RelatedResources::new(),
    );

    assert_eq!(report.status(), StatusCode::UnprocessableEntity);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].message, "Unprocessable entity");
    assert_eq!(
        report.errors[0].description(),
        Some(
            "provJournal for subscriber mscId=msc-1 not included. Needed to check if user is \
             defined in AuC when attribute \"akaAlgorithmInd\" is present"
        )
    );
}

#[test]
fn aka_algorithm_ind_requires_auc_bit() {
    let registered =
        RelatedResources::new().with(common::journal_path(MSC_ID), common::auc_journal());
    let report = common::validate(vec![common::create(with_aka_algorithm_ind("1"))], registered);
    assert!(report.is_accepted());

    for mask in ["", "0000000000001111"] {
        let related = RelatedResources::new()
            .with(common::journal_path(MSC_ID), ProvJournal::with_imsi_mask(mask));
        let report = common::validate(vec![common::create(with_aka_algorithm_ind("1"))], related);
        assert_eq!(report.status(), StatusCode::Conflict);
        assert_eq!(
            common::descriptions(&report),
            vec![
                "It is not allowed to create or update a subscriber with \"akaAlgorithmInd\" in \
                 \"authSubscriptionStaticData\" if not defined in AuC"
            ]
        );
    }
}

#[test]
fn malformed_aka_algorithm_ind_skips_journal_check() {
    let report = common::validate(
        vec![common::create(with_aka_algorithm_ind("3"))],
        RelatedResources::new(),
    );

    assert_eq!(report.status(), StatusCode::Conflict);
    assert_eq!(
        common::descriptions(&report),
        vec!["\"akaAlgorithmInd\" in \"authSubscriptionStaticData\" has invalid value"]
    );
}

#[test]
fn journal_path_holding_other_kind_is_unprocessable() {
    let related = RelatedResources::new()
        .with(common::journal_path(MSC_ID), LegacyAuthSubscription::default());
    let report = common::validate(vec![common::create(with_aka_algorithm_ind("0"))], related);

    assert_eq!(report.status(), StatusCode::UnprocessableEntity);
    assert_eq!(report.errors[0].message, "Unprocessable entity");
    assert!(report.errors[0].description().unwrap().contains("expected provJournal"));
}

// ============================================================================
// SECTION: Legacy Consistency and Backfill
// ============================================================================

fn with_legacy(legacy: LegacyAuthSubscription) -> RelatedResources {
    RelatedResources::new().with(common::legacy_path(IMSI), legacy)
}

#[test]
fn legacy_record_backfills_unset_attributes() {
    let report = common::validate(
        vec![common::create(StaticData::new("5G_AKA"))],
        with_legacy(common::full_legacy()),
    );

    assert!(report.is_accepted(), "errors: {:?}", report.errors);
    let change = &report.changes[0];
    let static_data = change.static_data().unwrap();
    assert_eq!(static_data.algorithm_id.as_deref(), Some("15"));
    assert_eq!(static_data.a4_key_v.as_deref(), Some("20"));
    assert_eq!(static_data.aka_algorithm_ind.as_deref(), Some("0"));
    assert_eq!(static_data.authentication_management_field.as_deref(), Some("B9B9"));
    assert_eq!(static_data.enc_permanent_key.as_deref(), Some("EKIVALUE"));
    assert_eq!(static_data.enc_opc_key.as_deref(), Some("EOPCVALUE"));
    assert_eq!(static_data.a4_key_ind.as_deref(), Some("1"));
    assert_eq!(static_data.a4_ind.as_deref(), Some("2"));

    let dynamic = change.auth_subscription.dynamic_data.clone().unwrap();
    assert_eq!(dynamic.sqn_scheme.as_deref(), Some("TIME_BASED"));
    assert_eq!(dynamic.sqn, None);
}

#[test]
fn legacy_seq_he_drives_sqn_scheme() {
    let counter = LegacyAuthSubscription {
        seq_he: Some("0123456789AB".to_string()),
        ..common::full_legacy()
    };
    let report = common::validate(
        vec![common::create(StaticData::new("5G_AKA"))],
        with_legacy(counter),
    );
    let dynamic = report.changes[0].auth_subscription.dynamic_data.clone().unwrap();
    assert_eq!(dynamic.sqn_scheme.as_deref(), Some("NON_TIME_BASED"));
    assert_eq!(dynamic.sqn.as_deref(), Some("2468ACF13560"));

    let unused = LegacyAuthSubscription {
        seq_he: Some("FFFFFFFFFFFF".to_string()),
        ..common::full_legacy()
    };
    let report = common::validate(
        vec![common::create(StaticData::new("5G_AKA"))],
        with_legacy(unused),
    );
    let dynamic = report.changes[0].auth_subscription.dynamic_data.clone().unwrap();
    assert_eq!(dynamic.sqn_scheme.as_deref(), Some("TIME_BASED"));
    assert_eq!(dynamic.sqn, None);
}

#[test]
fn backfill_keeps_client_values() {
    let static_data = StaticData {
        a4_key_v: Some("7".to_string()),
        ..StaticData::new("5G_AKA")
    };
    let report = common::validate(
        vec![common::create(static_data)],
        with_legacy(common::full_legacy()),
    );

    assert_eq!(report.changes[0].static_data().unwrap().a4_key_v.as_deref(), Some("7"));
}

#[test]
fn legacy_aka_type_must_be_one() {
    let missing = LegacyAuthSubscription {
        aka_type: None,
        ..common::full_legacy()
    };
    let report = common::validate(
        vec![common::create(StaticData::new("5G_AKA"))],
        with_legacy(missing),
    );
    assert_eq!(
        common::descriptions(&report),
        vec!["\"AKATYPE\" for 4G legacy subscription is not defined"]
    );

    let wrong = LegacyAuthSubscription {
        aka_type: Some(2),
        ..common::full_legacy()
    };
    let report = common::validate(
        vec![common::create(StaticData::new("5G_AKA"))],
        with_legacy(wrong),
    );
    assert_eq!(report.status(), StatusCode::Conflict);
    assert_eq!(
        common::descriptions(&report),
        vec!["\"AKATYPE\" for 4G legacy subscription has an invalid value"]
    );
}

#[test]
fn legacy_mismatches_are_all_reported() {
    let static_data = StaticData {
        enc_permanent_key: Some("00000000000000000000000000000000".to_string()),
        a4_key_ind: Some("2".to_string()),
        a4_ind: Some("1".to_string()),
        algorithm_id: Some("14".to_string()),
        authentication_management_field: Some("0001".to_string()),
        enc_opc_key: Some("ABCD".to_string()),
        aka_algorithm_ind: Some("1".to_string()),
        ..StaticData::new("5G_AKA")
    };
    let related = with_legacy(common::full_legacy())
        .with(common::journal_path(MSC_ID), common::auc_journal());
    let report = common::validate(vec![common::create(static_data)], related);

    assert_eq!(report.status(), StatusCode::Conflict);
    assert_eq!(
        common::descriptions(&report),
        vec![
            "\"encPermanentKey\" is not equal to \"EKI\" attribute of 4G legacy subscription",
            "\"a4KeyInd\" is not equal to \"KIND\" attribute of 4G legacy subscription",
            "\"a4Ind\" is not equal to \"A4IND\" attribute of 4G legacy subscription",
            "\"algorithmId\" is not equal to \"FSETIND\" attribute of 4G legacy subscription",
            "\"authenticationManagementField\" is not equal to \"AMFVALUE\" attribute of 4G legacy \
             subscription",
            "\"encOpcKey\" is not equal to \"EOPC\" attribute of 4G legacy subscription",
            "\"akaAlgorithmInd\" is not equal to \"AKAALGIND\" attribute of 4G legacy subscription",
        ]
    );
}

#[test]
fn amf_comparison_is_numeric() {
    let static_data = StaticData {
        authentication_management_field: Some("b9b9".to_string()),
        ..StaticData::new("5G_AKA")
    };
    let report = common::validate(
        vec![common::create(static_data)],
        with_legacy(common::full_legacy()),
    );

    assert!(report.is_accepted(), "errors: {:?}", report.errors);
    assert_eq!(
        report.changes[0].static_data().unwrap().authentication_management_field.as_deref(),
        Some("b9b9")
    );
}

#[test]
fn priv_id_create_is_accepted_without_mutation() {
    let change = authprov_core::Change::new(
        authprov_core::Operation::Create,
        common::priv_id_path(MSC_ID, IMSI),
    )
    .with_static_data(common::full_static_data());
    let report = common::validate(vec![change.clone()], RelatedResources::new());

    assert!(report.is_accepted());
    assert_eq!(report.changes, vec![change]);
}
