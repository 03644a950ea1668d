//! Point-in-time request snapshots.

use std::path::Path;

use serde::{Deserialize, Serialize};

use cumulo_model::{AccountDetails, NodeHandle, Pricing, PublicNode};

use crate::access::AccessLevel;
use crate::detail::{FileAttrKind, RequestDetail, UserAttrKind};
use crate::error::{SnapshotError, SnapshotResult};
use crate::kind::RequestKind;

/// Immutable snapshot of an asynchronous request.
///
/// One instance exists per in-flight or completed request. The execution
/// layer owns a private working copy and delivers clones to consumers; a
/// consumer never observes a partially-constructed snapshot and has no way
/// to mutate one.
///
/// The snapshot exposes a wide, total accessor surface: every accessor
/// answers for every kind, returning its neutral default (`None`, `false`,
/// `0`) when the field is not meaningful for [`RequestSnapshot::kind`].
/// Consumers that prefer compile-time validity can branch on
/// [`RequestSnapshot::detail`] instead and let the variant dictate which
/// fields exist.
///
/// `Clone` is the lifetime escape hatch: it deep-copies every owned string,
/// path and embedded entity, so a clone stays fully valid after the
/// execution layer recycles the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSnapshot {
    detail: RequestDetail,
    transferred_bytes: u64,
    total_bytes: u64,
}

impl RequestSnapshot {
    /// Snapshot a freshly issued request; result fields start unset.
    #[must_use]
    pub const fn new(detail: RequestDetail) -> Self {
        Self {
            detail,
            transferred_bytes: 0,
            total_bytes: 0,
        }
    }

    /// The kind of request this snapshot describes. Fixed at construction.
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        self.detail.kind()
    }

    /// Stable, human-readable label for the request kind. Always valid.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.detail.kind().label()
    }

    /// Typed per-kind view of the request's parameters and results.
    #[must_use]
    pub const fn detail(&self) -> &RequestDetail {
        &self.detail
    }

    /// Consume the snapshot, yielding its typed payload.
    #[must_use]
    pub fn into_detail(self) -> RequestDetail {
        self.detail
    }

    /// Handle of the primary node the request acted on or created.
    ///
    /// Meaningful for Move, Copy, Rename, Remove, Share, Export,
    /// GetFileAttr, SetFileAttr, CancelFileAttr, AddSync, RemoveSync and
    /// GetPaymentUrl (the product handle); for CreateFolder, Copy and
    /// ImportLink the created node's handle once the request succeeds.
    #[must_use]
    pub fn node_handle(&self) -> Option<NodeHandle> {
        match &self.detail {
            RequestDetail::Move { node, .. }
            | RequestDetail::Rename { node, .. }
            | RequestDetail::Remove { node }
            | RequestDetail::Share { node, .. }
            | RequestDetail::Export { node, .. }
            | RequestDetail::GetFileAttr { node, .. }
            | RequestDetail::SetFileAttr { node, .. }
            | RequestDetail::CancelFileAttr { node, .. }
            | RequestDetail::AddSync { node, .. }
            | RequestDetail::RemoveSync { node } => Some(*node),
            RequestDetail::Copy { node, created, .. } => Some(created.unwrap_or(*node)),
            RequestDetail::CreateFolder { created, .. } => *created,
            RequestDetail::ImportLink { imported, .. } => *imported,
            RequestDetail::GetPaymentUrl { product, .. } => Some(*product),
            _ => None,
        }
    }

    /// Handle of a parent or destination node.
    ///
    /// Meaningful for CreateFolder, Move, Copy, ImportLink and Upload.
    #[must_use]
    pub fn parent_handle(&self) -> Option<NodeHandle> {
        match &self.detail {
            RequestDetail::CreateFolder { parent, .. }
            | RequestDetail::ImportLink { parent, .. }
            | RequestDetail::Upload { parent, .. } => Some(*parent),
            RequestDetail::Move { new_parent, .. } | RequestDetail::Copy { new_parent, .. } => {
                Some(*new_parent)
            }
            _ => None,
        }
    }

    /// URL related to the request.
    ///
    /// Meaningful for Login (folder link), ImportLink, FetchPublicNode,
    /// ConfirmAccount and QuerySignupLink; for Export and GetPaymentUrl once
    /// the request succeeds.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match &self.detail {
            RequestDetail::Login { folder_link, .. } => folder_link.as_deref(),
            RequestDetail::ImportLink { link, .. }
            | RequestDetail::FetchPublicNode { link, .. }
            | RequestDetail::ConfirmAccount { link, .. }
            | RequestDetail::QuerySignupLink { link, .. } => Some(link.as_str()),
            RequestDetail::Export { link, .. } | RequestDetail::GetPaymentUrl { link, .. } => {
                link.as_deref()
            }
            _ => None,
        }
    }

    /// Opaque session resumption token. Meaningful for Login.
    #[must_use]
    pub fn session_key(&self) -> Option<&str> {
        match &self.detail {
            RequestDetail::Login { session_key, .. } => session_key.as_deref(),
            _ => None,
        }
    }

    /// Person or folder name related to the request.
    ///
    /// Meaningful for CreateAccount, CreateFolder, Rename (the new name)
    /// and Upload; for ConfirmAccount and QuerySignupLink once the request
    /// succeeds.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.detail {
            RequestDetail::CreateFolder { name, .. }
            | RequestDetail::CreateAccount { name, .. } => Some(name.as_str()),
            RequestDetail::Rename { new_name, .. } => Some(new_name.as_str()),
            RequestDetail::Upload { name, .. }
            | RequestDetail::ConfirmAccount { name, .. }
            | RequestDetail::QuerySignupLink { name, .. } => name.as_deref(),
            _ => None,
        }
    }

    /// Account email related to the request.
    ///
    /// Meaningful for Login, CreateAccount, Share, AddContact,
    /// RemoveContact and GetUserAttr; for ConfirmAccount and
    /// QuerySignupLink once the request succeeds.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match &self.detail {
            RequestDetail::Share { email, .. }
            | RequestDetail::AddContact { email }
            | RequestDetail::RemoveContact { email }
            | RequestDetail::CreateAccount { email, .. } => Some(email.as_str()),
            RequestDetail::Login { email, .. }
            | RequestDetail::GetUserAttr { email, .. }
            | RequestDetail::ConfirmAccount { email, .. }
            | RequestDetail::QuerySignupLink { email, .. } => email.as_deref(),
            _ => None,
        }
    }

    /// Password supplied with the request.
    ///
    /// Meaningful for Login, CreateAccount, ConfirmAccount and
    /// ChangePassword (the current password).
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        match &self.detail {
            RequestDetail::Login { password, .. }
            | RequestDetail::CreateAccount { password, .. }
            | RequestDetail::ConfirmAccount { password, .. } => password.as_deref(),
            RequestDetail::ChangePassword { password, .. } => Some(password.as_str()),
            _ => None,
        }
    }

    /// Replacement password. Meaningful for ChangePassword.
    #[must_use]
    pub fn new_password(&self) -> Option<&str> {
        match &self.detail {
            RequestDetail::ChangePassword { new_password, .. } => Some(new_password.as_str()),
            _ => None,
        }
    }

    /// Derived key material supplied with the request.
    ///
    /// Meaningful for Login, CreateAccount and ConfirmAccount.
    #[must_use]
    pub fn private_key(&self) -> Option<&str> {
        match &self.detail {
            RequestDetail::Login { private_key, .. }
            | RequestDetail::CreateAccount { private_key, .. }
            | RequestDetail::ConfirmAccount { private_key, .. } => private_key.as_deref(),
            _ => None,
        }
    }

    /// Permission level attached to the request.
    ///
    /// Meaningful for Share, and for Export once an enable succeeds. A
    /// disable-export snapshot never reports a level; its [`flag`] alone
    /// signals the result.
    ///
    /// [`flag`]: RequestSnapshot::flag
    #[must_use]
    pub fn access_level(&self) -> Option<AccessLevel> {
        match &self.detail {
            RequestDetail::Share { access, .. } => Some(*access),
            RequestDetail::Export { access, .. } => *access,
            _ => None,
        }
    }

    /// Local filesystem path related to the request.
    ///
    /// Meaningful for Upload and SetFileAttr (the source), GetFileAttr
    /// (the destination), GetUserAttr and SetUserAttr (when the attribute
    /// is file-backed) and AddSync (the local root).
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        match &self.detail {
            RequestDetail::Upload { source, .. } | RequestDetail::SetFileAttr { source, .. } => {
                Some(source.as_path())
            }
            RequestDetail::GetFileAttr { destination, .. } => Some(destination.as_path()),
            RequestDetail::GetUserAttr { destination, .. } => destination.as_deref(),
            RequestDetail::SetUserAttr { source, .. } => source.as_deref(),
            RequestDetail::AddSync { local_path, .. } => Some(local_path.as_path()),
            _ => None,
        }
    }

    /// Node snapshot resolved from a public link.
    ///
    /// Meaningful for FetchPublicNode once the request succeeds. The
    /// returned reference lives as long as this snapshot; clone the node
    /// (or the snapshot) to retain it beyond that.
    #[must_use]
    pub fn public_node(&self) -> Option<&PublicNode> {
        match &self.detail {
            RequestDetail::FetchPublicNode { node, .. } => node.as_deref(),
            _ => None,
        }
    }

    /// Which file attribute the request concerns.
    ///
    /// Meaningful for GetFileAttr, SetFileAttr and CancelFileAttr.
    #[must_use]
    pub fn file_attr_kind(&self) -> Option<FileAttrKind> {
        match &self.detail {
            RequestDetail::GetFileAttr { attr, .. }
            | RequestDetail::SetFileAttr { attr, .. }
            | RequestDetail::CancelFileAttr { attr, .. } => Some(*attr),
            _ => None,
        }
    }

    /// Which user attribute the request concerns.
    ///
    /// Meaningful for GetUserAttr and SetUserAttr.
    #[must_use]
    pub fn user_attr_kind(&self) -> Option<UserAttrKind> {
        match &self.detail {
            RequestDetail::GetUserAttr { attr, .. } | RequestDetail::SetUserAttr { attr, .. } => {
                Some(*attr)
            }
            _ => None,
        }
    }

    /// Request-specific boolean.
    ///
    /// Meaningful for Export (enable/disable), RetryPending (disconnect
    /// pending connections first) and PauseTransfers (pause/resume).
    /// `false` for every other kind.
    #[must_use]
    pub const fn flag(&self) -> bool {
        match &self.detail {
            RequestDetail::Export { enable, .. } => *enable,
            RequestDetail::RetryPending { disconnect } => *disconnect,
            RequestDetail::PauseTransfers { pause } => *pause,
            _ => false,
        }
    }

    /// Bytes transferred so far.
    ///
    /// Meaningful for data-carrying kinds: Upload, FetchNodes, ImportLink
    /// and FetchPublicNode. Zero otherwise.
    #[must_use]
    pub const fn transferred_bytes(&self) -> u64 {
        self.transferred_bytes
    }

    /// Bytes the request must transfer in total, once known.
    ///
    /// Meaningful for the same kinds as
    /// [`RequestSnapshot::transferred_bytes`]. Zero otherwise.
    #[must_use]
    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Account usage and quota details.
    ///
    /// Meaningful for FetchAccountDetails once the request succeeds.
    #[must_use]
    pub fn account_details(&self) -> Option<&AccountDetails> {
        match &self.detail {
            RequestDetail::FetchAccountDetails { details } => details.as_deref(),
            _ => None,
        }
    }

    /// Purchasable plan catalogue.
    ///
    /// Meaningful for GetPricing once the request succeeds.
    #[must_use]
    pub fn pricing(&self) -> Option<&Pricing> {
        match &self.detail {
            RequestDetail::GetPricing { pricing } => pricing.as_deref(),
            _ => None,
        }
    }

    /// Record a progress update on the execution layer's working copy.
    ///
    /// `transferred_bytes` never decreases and never exceeds a known total;
    /// a regressing update is ignored rather than rejected. Totals may grow
    /// when the service discovers more data but never shrink.
    pub fn record_progress(&mut self, transferred: u64, total: u64) {
        if total > self.total_bytes {
            self.total_bytes = total;
        }
        let mut next = transferred.max(self.transferred_bytes);
        if self.total_bytes > 0 {
            next = next.min(self.total_bytes);
        }
        self.transferred_bytes = next;
    }

    /// Replace the typed payload when the request completes.
    ///
    /// The replacement must describe the same kind the snapshot was
    /// constructed with; the kind of a snapshot can never change.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::KindMismatch`] when the replacement would
    /// change the snapshot's kind; the snapshot is left untouched.
    pub fn update_detail(&mut self, detail: RequestDetail) -> SnapshotResult<()> {
        if detail.kind() != self.detail.kind() {
            return Err(SnapshotError::KindMismatch {
                expected: self.detail.kind(),
                found: detail.kind(),
            });
        }
        self.detail = detail;
        Ok(())
    }
}

impl From<RequestDetail> for RequestSnapshot {
    fn from(detail: RequestDetail) -> Self {
        Self::new(detail)
    }
}
