// authprov-core/tests/related_resources.rs
// ============================================================================
// Module: Related Resource Tests
// Description: Typed lookups over the related-resource snapshot.
// Purpose: Keep missing paths distinct from paths holding another kind.
// ============================================================================

//! Related resource lookup tests for authprov-core.

use authprov_core::AuthSubscription;
use authprov_core::LegacyAuthSubscription;
use authprov_core::ProvJournal;
use authprov_core::RelatedResources;
use authprov_core::ResourceKind;
use authprov_core::ResourceLookupError;

#[test]
fn lookup_distinguishes_missing_from_wrong_kind() {
    let related = RelatedResources::new()
        .with("/a", AuthSubscription::default())
        .with("/b", LegacyAuthSubscription::default())
        .with("/c", ProvJournal::with_imsi_mask("1"));

    assert!(related.auth_subscription("/a").is_ok());
    assert!(related.legacy("/b").is_ok());
    assert_eq!(related.prov_journal("/c").map(|journal| journal.imsi_mask.as_str()), Ok("1"));

    assert_eq!(
        related.legacy("/missing"),
        Err(ResourceLookupError::NotFound {
            path: "/missing".to_string(),
        })
    );
    assert_eq!(
        related.prov_journal("/a"),
        Err(ResourceLookupError::WrongVariant {
            path: "/a".to_string(),
            expected: ResourceKind::ProvJournal,
            found: ResourceKind::AuthSubscription,
        })
    );
}

#[test]
fn insert_replaces_and_iterates_in_path_order() {
    let mut related = RelatedResources::new();
    related.insert("/z", ProvJournal::default());
    related.insert("/a", ProvJournal::default());
    related.insert("/z", LegacyAuthSubscription::default());

    assert_eq!(related.len(), 2);
    let kinds: Vec<_> = related.iter().map(|(path, resource)| (path, resource.kind())).collect();
    assert_eq!(kinds, vec![("/a", ResourceKind::ProvJournal), ("/z", ResourceKind::Legacy)]);
}

#[test]
fn lookup_errors_render_paths_and_kinds() {
    let error = ResourceLookupError::WrongVariant {
        path: "/x".to_string(),
        expected: ResourceKind::Legacy,
        found: ResourceKind::ProvJournal,
    };
    assert_eq!(
        error.to_string(),
        "related resource at /x is provJournal, expected legacyAuthSubscription"
    );
}
