use cumulo_requests::{
    AccessLevel, ErrorCode, RequestDetail, RequestFailure, RequestKind, RequestOutcome,
    RequestSnapshot,
};
use cumulo_test_support::fixtures::{self, SAMPLE_NODE};

use RequestKind::{
    AddContact, AddSync, CancelFileAttr, ChangePassword, ConfirmAccount, Copy, CreateAccount,
    CreateFolder, Export, FetchAccountDetails, FetchPublicNode, GetFileAttr, GetPaymentUrl,
    GetPricing, GetUserAttr, ImportLink, Login, Move, PauseTransfers, QuerySignupLink, Remove,
    RemoveContact, RemoveSync, Rename, RetryPending, SetFileAttr, SetUserAttr, Share, Upload,
};

const NODE_HANDLE_KINDS: &[RequestKind] = &[
    CreateFolder,
    Move,
    Copy,
    Rename,
    Remove,
    Share,
    ImportLink,
    Export,
    GetFileAttr,
    SetFileAttr,
    CancelFileAttr,
    AddSync,
    RemoveSync,
    GetPaymentUrl,
];
const PARENT_HANDLE_KINDS: &[RequestKind] = &[CreateFolder, Move, Copy, ImportLink, Upload];
const LINK_KINDS: &[RequestKind] = &[
    Login,
    ImportLink,
    FetchPublicNode,
    ConfirmAccount,
    QuerySignupLink,
    Export,
    GetPaymentUrl,
];
const NAME_KINDS: &[RequestKind] = &[
    CreateFolder,
    Rename,
    Upload,
    CreateAccount,
    ConfirmAccount,
    QuerySignupLink,
];
const EMAIL_KINDS: &[RequestKind] = &[
    Login,
    Share,
    AddContact,
    RemoveContact,
    CreateAccount,
    ConfirmAccount,
    QuerySignupLink,
    GetUserAttr,
];
const PASSWORD_KINDS: &[RequestKind] = &[Login, CreateAccount, ConfirmAccount, ChangePassword];
const PRIVATE_KEY_KINDS: &[RequestKind] = &[Login, CreateAccount, ConfirmAccount];
const ACCESS_LEVEL_KINDS: &[RequestKind] = &[Share, Export];
const FILE_PATH_KINDS: &[RequestKind] = &[
    Upload,
    GetFileAttr,
    SetFileAttr,
    GetUserAttr,
    SetUserAttr,
    AddSync,
];
const FILE_ATTR_KINDS: &[RequestKind] = &[GetFileAttr, SetFileAttr, CancelFileAttr];
const USER_ATTR_KINDS: &[RequestKind] = &[GetUserAttr, SetUserAttr];
const FLAG_KINDS: &[RequestKind] = &[Export, RetryPending, PauseTransfers];

/// Every accessor returns its neutral default for kinds outside its
/// documented validity list, across the whole closed set of kinds.
#[test]
fn accessors_outside_their_validity_return_neutral_defaults() {
    for kind in RequestKind::ALL {
        let snapshot = fixtures::snapshot_for(kind);
        assert_eq!(snapshot.kind(), kind);
        assert_eq!(snapshot.label(), kind.label());

        if !NODE_HANDLE_KINDS.contains(&kind) {
            assert!(snapshot.node_handle().is_none(), "{kind:?}");
        }
        if !PARENT_HANDLE_KINDS.contains(&kind) {
            assert!(snapshot.parent_handle().is_none(), "{kind:?}");
        }
        if !LINK_KINDS.contains(&kind) {
            assert!(snapshot.link().is_none(), "{kind:?}");
        }
        if kind != Login {
            assert!(snapshot.session_key().is_none(), "{kind:?}");
        }
        if !NAME_KINDS.contains(&kind) {
            assert!(snapshot.name().is_none(), "{kind:?}");
        }
        if !EMAIL_KINDS.contains(&kind) {
            assert!(snapshot.email().is_none(), "{kind:?}");
        }
        if !PASSWORD_KINDS.contains(&kind) {
            assert!(snapshot.password().is_none(), "{kind:?}");
        }
        if kind != ChangePassword {
            assert!(snapshot.new_password().is_none(), "{kind:?}");
        }
        if !PRIVATE_KEY_KINDS.contains(&kind) {
            assert!(snapshot.private_key().is_none(), "{kind:?}");
        }
        if !ACCESS_LEVEL_KINDS.contains(&kind) {
            assert!(snapshot.access_level().is_none(), "{kind:?}");
        }
        if !FILE_PATH_KINDS.contains(&kind) {
            assert!(snapshot.file_path().is_none(), "{kind:?}");
        }
        if kind != FetchPublicNode {
            assert!(snapshot.public_node().is_none(), "{kind:?}");
        }
        if !FILE_ATTR_KINDS.contains(&kind) {
            assert!(snapshot.file_attr_kind().is_none(), "{kind:?}");
        }
        if !USER_ATTR_KINDS.contains(&kind) {
            assert!(snapshot.user_attr_kind().is_none(), "{kind:?}");
        }
        if !FLAG_KINDS.contains(&kind) {
            assert!(!snapshot.flag(), "{kind:?}");
        }
        if kind != FetchAccountDetails {
            assert!(snapshot.account_details().is_none(), "{kind:?}");
        }
        if kind != GetPricing {
            assert!(snapshot.pricing().is_none(), "{kind:?}");
        }
        assert_eq!(snapshot.transferred_bytes(), 0);
        assert_eq!(snapshot.total_bytes(), 0);
    }
}

#[test]
fn enabling_an_export_fills_link_access_and_flag() {
    let mut snapshot = fixtures::snapshot_for(Export);
    assert_eq!(snapshot.node_handle(), Some(SAMPLE_NODE));
    assert!(snapshot.link().is_none());

    snapshot
        .update_detail(RequestDetail::Export {
            node: SAMPLE_NODE,
            enable: true,
            link: Some("https://cloud.example/#!exp".into()),
            access: Some(AccessLevel::ReadOnly),
        })
        .expect("same-kind update");

    assert_eq!(snapshot.kind(), Export);
    assert_eq!(snapshot.node_handle(), Some(SAMPLE_NODE));
    assert_eq!(snapshot.link(), Some("https://cloud.example/#!exp"));
    assert_eq!(snapshot.access_level(), Some(AccessLevel::ReadOnly));
    assert!(snapshot.flag());
}

#[test]
fn disabling_an_export_reports_only_the_flag() {
    let snapshot = fixtures::disabled_export_snapshot();
    assert_eq!(snapshot.kind(), Export);
    assert_eq!(snapshot.node_handle(), Some(SAMPLE_NODE));
    assert!(!snapshot.flag());
    assert!(snapshot.link().is_none());
    assert!(snapshot.access_level().is_none());
}

#[test]
fn failed_change_password_still_reports_the_attempt() {
    let snapshot = fixtures::snapshot_for(ChangePassword);
    let outcome: RequestOutcome = Err(RequestFailure::new(
        ErrorCode::BadArguments,
        "old password rejected",
    ));

    assert_eq!(snapshot.kind(), ChangePassword);
    assert_eq!(snapshot.password(), Some("old"));
    assert_eq!(snapshot.new_password(), Some("new"));
    let failure = outcome.expect_err("outcome carries the failure");
    assert_eq!(failure.code, ErrorCode::BadArguments);
    assert_eq!(failure.code.code(), -2);
}

#[test]
fn clones_keep_embedded_entities_after_the_source_is_gone() {
    let mut source = fixtures::resolved_public_node_snapshot();
    let copy = source.clone();

    source
        .update_detail(RequestDetail::FetchPublicNode {
            link: "https://cloud.example/#!pub".into(),
            node: None,
        })
        .expect("same-kind update");
    drop(source);

    let node = copy.public_node().expect("clone keeps the node");
    assert_eq!(node.handle, SAMPLE_NODE);
    assert_eq!(node.name, "holiday.jpg");
}

#[test]
fn clones_deep_copy_account_details_and_pricing() {
    let details_source = RequestSnapshot::new(RequestDetail::FetchAccountDetails {
        details: Some(Box::new(fixtures::sample_account_details())),
    });
    let details_copy = details_source.clone();
    drop(details_source);
    let details = details_copy.account_details().expect("details survive");
    assert!((details.storage_percent_used() - 50.0).abs() < f64::EPSILON);

    let pricing_source = RequestSnapshot::new(RequestDetail::GetPricing {
        pricing: Some(Box::new(fixtures::sample_pricing())),
    });
    let pricing_copy = pricing_source.clone();
    drop(pricing_source);
    let pricing = pricing_copy.pricing().expect("pricing survives");
    assert_eq!(pricing.plans.len(), 2);
    assert!(pricing.plan_for(fixtures::SAMPLE_PRODUCT).is_some());
}

#[test]
fn payment_url_request_reports_the_product_handle() {
    let mut snapshot = fixtures::snapshot_for(GetPaymentUrl);
    assert_eq!(snapshot.node_handle(), Some(fixtures::SAMPLE_PRODUCT));

    snapshot
        .update_detail(RequestDetail::GetPaymentUrl {
            product: fixtures::SAMPLE_PRODUCT,
            link: Some("https://pay.example/checkout".into()),
        })
        .expect("same-kind update");
    assert_eq!(snapshot.link(), Some("https://pay.example/checkout"));
}

#[test]
fn snapshots_round_trip_through_serde() {
    let snapshot = fixtures::enabled_export_snapshot();
    let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
    let back: RequestSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");
    assert_eq!(back, snapshot);

    let resolved = fixtures::resolved_public_node_snapshot();
    let json = serde_json::to_string(&resolved).expect("serialize snapshot");
    let back: RequestSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");
    assert_eq!(
        back.public_node().map(|node| node.handle),
        Some(SAMPLE_NODE)
    );
}
