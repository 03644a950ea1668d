//! Canonical request snapshots and embedded entity samples.

use std::path::PathBuf;

use chrono::DateTime;

use cumulo_model::{AccountDetails, NodeHandle, NodeKind, Pricing, PricingPlan, PublicNode};
use cumulo_requests::{
    AccessLevel, FileAttrKind, RequestDetail, RequestKind, RequestSnapshot, UserAttrKind,
};

/// Node handle used as the primary target in fixtures.
pub const SAMPLE_NODE: NodeHandle = NodeHandle::new(0x00c0_ffee);
/// Node handle used as the parent/destination in fixtures.
pub const SAMPLE_PARENT: NodeHandle = NodeHandle::new(0x00de_caf0);
/// Product handle used by pricing fixtures.
pub const SAMPLE_PRODUCT: NodeHandle = NodeHandle::new(0x0001_f4ea);

/// Email address used by account-related fixtures.
pub const SAMPLE_EMAIL: &str = "ada@example.com";

/// A node snapshot as resolved from a public link.
///
/// # Panics
///
/// Never panics; the embedded timestamp is a valid constant.
#[must_use]
pub fn sample_public_node() -> PublicNode {
    PublicNode {
        handle: SAMPLE_NODE,
        name: "holiday.jpg".into(),
        kind: NodeKind::File,
        size_bytes: 2_621_440,
        created_at: DateTime::from_timestamp(1_767_225_600, 0).expect("valid timestamp"),
        fingerprint: Some("GA4CEJzsBGI".into()),
    }
}

/// Usage counters for a half-full account.
#[must_use]
pub const fn sample_account_details() -> AccountDetails {
    AccountDetails {
        storage_used_bytes: 200 * 1024 * 1024 * 1024,
        storage_quota_bytes: 400 * 1024 * 1024 * 1024,
        transfer_used_bytes: 512 * 1024 * 1024,
        transfer_quota_bytes: 1024 * 1024 * 1024 * 1024,
    }
}

/// A two-plan purchasable catalogue.
#[must_use]
pub fn sample_pricing() -> Pricing {
    Pricing {
        plans: vec![
            PricingPlan {
                product: SAMPLE_PRODUCT,
                months: 1,
                storage_gb: 400,
                transfer_gb: 1024,
                amount_cents: 499,
                currency: "EUR".into(),
                description: "Pro Lite".into(),
            },
            PricingPlan {
                product: NodeHandle::new(SAMPLE_PRODUCT.raw() + 1),
                months: 12,
                storage_gb: 2048,
                transfer_gb: 8192,
                amount_cents: 9_990,
                currency: "EUR".into(),
                description: "Pro II".into(),
            },
        ],
    }
}

/// Canonical pre-completion parameters for the given request kind.
#[allow(clippy::too_many_lines)]
#[must_use]
pub fn sample_detail(kind: RequestKind) -> RequestDetail {
    match kind {
        RequestKind::Login => RequestDetail::login(SAMPLE_EMAIL, "correct horse"),
        RequestKind::CreateFolder => RequestDetail::create_folder(SAMPLE_PARENT, "docs"),
        RequestKind::Move => RequestDetail::Move {
            node: SAMPLE_NODE,
            new_parent: SAMPLE_PARENT,
        },
        RequestKind::Copy => RequestDetail::Copy {
            node: SAMPLE_NODE,
            new_parent: SAMPLE_PARENT,
            created: None,
        },
        RequestKind::Rename => RequestDetail::Rename {
            node: SAMPLE_NODE,
            new_name: "renamed.txt".into(),
        },
        RequestKind::Remove => RequestDetail::Remove { node: SAMPLE_NODE },
        RequestKind::Share => RequestDetail::Share {
            node: SAMPLE_NODE,
            email: "peer@example.com".into(),
            access: AccessLevel::ReadWrite,
        },
        RequestKind::ImportLink => RequestDetail::ImportLink {
            link: "https://cloud.example/#!imp".into(),
            parent: SAMPLE_PARENT,
            imported: None,
        },
        RequestKind::Export => RequestDetail::export(SAMPLE_NODE),
        RequestKind::FetchNodes => RequestDetail::FetchNodes,
        RequestKind::FetchAccountDetails => RequestDetail::FetchAccountDetails { details: None },
        RequestKind::ChangePassword => RequestDetail::change_password("old", "new"),
        RequestKind::Upload => RequestDetail::Upload {
            source: PathBuf::from("/tmp/upload.bin"),
            parent: SAMPLE_PARENT,
            name: None,
        },
        RequestKind::Logout => RequestDetail::Logout,
        RequestKind::FetchPublicNode => RequestDetail::FetchPublicNode {
            link: "https://cloud.example/#!pub".into(),
            node: None,
        },
        RequestKind::GetFileAttr => RequestDetail::GetFileAttr {
            node: SAMPLE_NODE,
            attr: FileAttrKind::Thumbnail,
            destination: PathBuf::from("/tmp/thumb.jpg"),
        },
        RequestKind::SetFileAttr => RequestDetail::SetFileAttr {
            node: SAMPLE_NODE,
            attr: FileAttrKind::Preview,
            source: PathBuf::from("/tmp/preview.jpg"),
        },
        RequestKind::GetUserAttr => RequestDetail::GetUserAttr {
            attr: UserAttrKind::Avatar,
            email: None,
            destination: Some(PathBuf::from("/tmp/avatar.jpg")),
        },
        RequestKind::SetUserAttr => RequestDetail::SetUserAttr {
            attr: UserAttrKind::Avatar,
            source: Some(PathBuf::from("/tmp/avatar.jpg")),
        },
        RequestKind::RetryPending => RequestDetail::RetryPending { disconnect: true },
        RequestKind::AddContact => RequestDetail::AddContact {
            email: "peer@example.com".into(),
        },
        RequestKind::RemoveContact => RequestDetail::RemoveContact {
            email: "peer@example.com".into(),
        },
        RequestKind::CreateAccount => RequestDetail::CreateAccount {
            email: SAMPLE_EMAIL.into(),
            password: Some("correct horse".into()),
            name: "Ada".into(),
            private_key: None,
        },
        RequestKind::ConfirmAccount => RequestDetail::ConfirmAccount {
            link: "https://cloud.example/#confirm".into(),
            password: Some("correct horse".into()),
            private_key: None,
            email: None,
            name: None,
        },
        RequestKind::QuerySignupLink => RequestDetail::QuerySignupLink {
            link: "https://cloud.example/#confirm".into(),
            email: None,
            name: None,
        },
        RequestKind::AddSync => RequestDetail::AddSync {
            node: SAMPLE_NODE,
            local_path: PathBuf::from("/home/ada/cloud"),
        },
        RequestKind::RemoveSync => RequestDetail::RemoveSync { node: SAMPLE_NODE },
        RequestKind::RemoveSyncs => RequestDetail::RemoveSyncs,
        RequestKind::PauseTransfers => RequestDetail::PauseTransfers { pause: true },
        RequestKind::CancelTransfer => RequestDetail::CancelTransfer,
        RequestKind::CancelTransfers => RequestDetail::CancelTransfers,
        RequestKind::Delete => RequestDetail::Delete,
        RequestKind::ReportEvent => RequestDetail::ReportEvent {
            detail: Some("unexpected tree gap".into()),
        },
        RequestKind::CancelFileAttr => RequestDetail::CancelFileAttr {
            node: SAMPLE_NODE,
            attr: FileAttrKind::Thumbnail,
        },
        RequestKind::GetPricing => RequestDetail::GetPricing { pricing: None },
        RequestKind::GetPaymentUrl => RequestDetail::GetPaymentUrl {
            product: SAMPLE_PRODUCT,
            link: None,
        },
    }
}

/// Fresh snapshot of the canonical request for the given kind.
#[must_use]
pub fn snapshot_for(kind: RequestKind) -> RequestSnapshot {
    RequestSnapshot::new(sample_detail(kind))
}

/// Snapshot of a successfully enabled export.
#[must_use]
pub fn enabled_export_snapshot() -> RequestSnapshot {
    RequestSnapshot::new(RequestDetail::Export {
        node: SAMPLE_NODE,
        enable: true,
        link: Some("https://cloud.example/#!exp".into()),
        access: Some(AccessLevel::ReadOnly),
    })
}

/// Snapshot of a successfully disabled export.
#[must_use]
pub const fn disabled_export_snapshot() -> RequestSnapshot {
    RequestSnapshot::new(RequestDetail::disable_export(SAMPLE_NODE))
}

/// Snapshot of a public-link resolution that completed successfully.
#[must_use]
pub fn resolved_public_node_snapshot() -> RequestSnapshot {
    RequestSnapshot::new(RequestDetail::FetchPublicNode {
        link: "https://cloud.example/#!pub".into(),
        node: Some(Box::new(sample_public_node())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_details_cover_every_kind() {
        for kind in RequestKind::ALL {
            assert_eq!(sample_detail(kind).kind(), kind);
            assert_eq!(snapshot_for(kind).kind(), kind);
        }
    }

    #[test]
    fn completed_fixtures_expose_their_results() {
        assert!(enabled_export_snapshot().link().is_some());
        assert!(disabled_export_snapshot().link().is_none());
        assert_eq!(
            resolved_public_node_snapshot()
                .public_node()
                .map(|node| node.handle),
            Some(SAMPLE_NODE)
        );
    }
}
