//! Per-kind request payloads.
//!
//! One variant per [`RequestKind`], carrying only the fields meaningful to
//! that kind. Result-only fields (handles of created nodes, export links,
//! fetched entities) are `Option` and stay unset until the operation
//! completes successfully.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use cumulo_model::{AccountDetails, NodeHandle, Pricing, PublicNode};

use crate::access::AccessLevel;
use crate::kind::RequestKind;

/// Sub-kind of a file attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAttrKind {
    /// Small square thumbnail image.
    Thumbnail,
    /// Larger preview image.
    Preview,
}

impl FileAttrKind {
    /// Wire-level integer code for the attribute.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Thumbnail => 0,
            Self::Preview => 1,
        }
    }
}

/// Sub-kind of a user attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAttrKind {
    /// Profile avatar image.
    Avatar,
    /// First name.
    FirstName,
    /// Last name.
    LastName,
}

impl UserAttrKind {
    /// Wire-level integer code for the attribute.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Avatar => 0,
            Self::FirstName => 1,
            Self::LastName => 2,
        }
    }
}

/// Parameters and results of a single request, keyed by kind.
///
/// Constructing a variant fixes the snapshot's kind for its whole lifetime;
/// completion fills in the variant's result fields without changing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestDetail {
    /// Authenticate a session.
    Login {
        /// Account email for credential logins.
        email: Option<String>,
        /// Account password for credential logins.
        password: Option<String>,
        /// Derived key material for resumed logins.
        private_key: Option<String>,
        /// Opaque session resumption token.
        session_key: Option<String>,
        /// Public folder link for folder-scoped logins.
        folder_link: Option<String>,
    },
    /// Create a folder under a parent node.
    CreateFolder {
        /// Destination parent handle.
        parent: NodeHandle,
        /// Name of the new folder.
        name: String,
        /// Handle of the created folder, set on success.
        created: Option<NodeHandle>,
    },
    /// Move a node to a new parent.
    Move {
        /// Node being moved.
        node: NodeHandle,
        /// Destination parent handle.
        new_parent: NodeHandle,
    },
    /// Copy a node under a new parent.
    Copy {
        /// Node being copied.
        node: NodeHandle,
        /// Destination parent handle.
        new_parent: NodeHandle,
        /// Handle of the new copy, set on success.
        created: Option<NodeHandle>,
    },
    /// Rename a node in place.
    Rename {
        /// Node being renamed.
        node: NodeHandle,
        /// Name the node will carry afterwards.
        new_name: String,
    },
    /// Remove a node from the tree.
    Remove {
        /// Node being removed.
        node: NodeHandle,
    },
    /// Share a folder with another account.
    Share {
        /// Folder being shared.
        node: NodeHandle,
        /// Email of the account receiving access.
        email: String,
        /// Permission level granted.
        access: AccessLevel,
    },
    /// Import a file behind a public link into the tree.
    ImportLink {
        /// Public link being imported.
        link: String,
        /// Destination parent handle.
        parent: NodeHandle,
        /// Handle of the imported node, set on success.
        imported: Option<NodeHandle>,
    },
    /// Enable or disable the public export of a node.
    Export {
        /// Node being exported.
        node: NodeHandle,
        /// `true` to enable the export, `false` to revoke it.
        enable: bool,
        /// Public link, set on a successful enable.
        link: Option<String>,
        /// Access level of the export, set on a successful enable. A
        /// disable never populates this; `enable` alone signals the result.
        access: Option<AccessLevel>,
    },
    /// Fetch the full remote node tree.
    FetchNodes,
    /// Fetch account usage and quota details.
    FetchAccountDetails {
        /// Account details, set on success.
        details: Option<Box<AccountDetails>>,
    },
    /// Change the account password.
    ChangePassword {
        /// Current password.
        password: String,
        /// Replacement password.
        new_password: String,
    },
    /// Upload a local file into the tree.
    Upload {
        /// Local source path.
        source: PathBuf,
        /// Destination parent handle.
        parent: NodeHandle,
        /// Optional name override for the uploaded file.
        name: Option<String>,
    },
    /// Close the active session.
    Logout,
    /// Resolve a public link into a node snapshot.
    FetchPublicNode {
        /// Public link being resolved.
        link: String,
        /// Resolved node snapshot, set on success.
        node: Option<Box<PublicNode>>,
    },
    /// Fetch a file attribute.
    GetFileAttr {
        /// Node whose attribute is fetched.
        node: NodeHandle,
        /// Which attribute to fetch.
        attr: FileAttrKind,
        /// Local path the attribute is written to.
        destination: PathBuf,
    },
    /// Set a file attribute.
    SetFileAttr {
        /// Node whose attribute is set.
        node: NodeHandle,
        /// Which attribute to set.
        attr: FileAttrKind,
        /// Local path the attribute is read from.
        source: PathBuf,
    },
    /// Fetch a user attribute.
    GetUserAttr {
        /// Which attribute to fetch.
        attr: UserAttrKind,
        /// Email of the user queried; the session user when unset.
        email: Option<String>,
        /// Local path binary attributes are written to.
        destination: Option<PathBuf>,
    },
    /// Set a user attribute.
    SetUserAttr {
        /// Which attribute to set.
        attr: UserAttrKind,
        /// Local path binary attributes are read from.
        source: Option<PathBuf>,
    },
    /// Retry pending connections.
    RetryPending {
        /// Whether pending connections are dropped before retrying.
        disconnect: bool,
    },
    /// Add a contact to the account.
    AddContact {
        /// Email of the contact.
        email: String,
    },
    /// Remove a contact from the account.
    RemoveContact {
        /// Email of the contact.
        email: String,
    },
    /// Start the creation of a new account.
    CreateAccount {
        /// Email the account is registered under.
        email: String,
        /// Password for the new account; unset for key-based creation.
        password: Option<String>,
        /// Display name of the account holder.
        name: String,
        /// Derived key material for key-based creation.
        private_key: Option<String>,
    },
    /// Confirm a new account with its signup link.
    ConfirmAccount {
        /// Confirmation link from the signup email.
        link: String,
        /// Password for password-based confirmation.
        password: Option<String>,
        /// Derived key material for key-based confirmation.
        private_key: Option<String>,
        /// Account email, set on success.
        email: Option<String>,
        /// Account holder name, set on success.
        name: Option<String>,
    },
    /// Query the state of a signup link.
    QuerySignupLink {
        /// Signup link being queried.
        link: String,
        /// Account email, set on success.
        email: Option<String>,
        /// Account holder name, set on success.
        name: Option<String>,
    },
    /// Register a local folder for synchronisation.
    AddSync {
        /// Remote folder the sync is anchored to.
        node: NodeHandle,
        /// Local folder root.
        local_path: PathBuf,
    },
    /// Stop synchronising a folder.
    RemoveSync {
        /// Remote folder whose sync is removed.
        node: NodeHandle,
    },
    /// Stop every active synchronisation.
    RemoveSyncs,
    /// Pause or resume all transfers.
    PauseTransfers {
        /// `true` pauses, `false` resumes.
        pause: bool,
    },
    /// Cancel a single transfer.
    CancelTransfer,
    /// Cancel every transfer in a direction.
    CancelTransfers,
    /// Tear down the service instance.
    Delete,
    /// Report a diagnostic event to the service.
    ReportEvent {
        /// Free-form diagnostic payload.
        detail: Option<String>,
    },
    /// Cancel an in-flight file attribute fetch.
    CancelFileAttr {
        /// Node whose attribute fetch is cancelled.
        node: NodeHandle,
        /// Which attribute fetch is cancelled.
        attr: FileAttrKind,
    },
    /// Fetch the available pricing plans.
    GetPricing {
        /// Plan catalogue, set on success.
        pricing: Option<Box<Pricing>>,
    },
    /// Fetch the payment URL for a product.
    GetPaymentUrl {
        /// Product handle from the pricing catalogue.
        product: NodeHandle,
        /// Payment URL, set on success.
        link: Option<String>,
    },
}

impl RequestDetail {
    /// The kind this payload belongs to.
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        match self {
            Self::Login { .. } => RequestKind::Login,
            Self::CreateFolder { .. } => RequestKind::CreateFolder,
            Self::Move { .. } => RequestKind::Move,
            Self::Copy { .. } => RequestKind::Copy,
            Self::Rename { .. } => RequestKind::Rename,
            Self::Remove { .. } => RequestKind::Remove,
            Self::Share { .. } => RequestKind::Share,
            Self::ImportLink { .. } => RequestKind::ImportLink,
            Self::Export { .. } => RequestKind::Export,
            Self::FetchNodes => RequestKind::FetchNodes,
            Self::FetchAccountDetails { .. } => RequestKind::FetchAccountDetails,
            Self::ChangePassword { .. } => RequestKind::ChangePassword,
            Self::Upload { .. } => RequestKind::Upload,
            Self::Logout => RequestKind::Logout,
            Self::FetchPublicNode { .. } => RequestKind::FetchPublicNode,
            Self::GetFileAttr { .. } => RequestKind::GetFileAttr,
            Self::SetFileAttr { .. } => RequestKind::SetFileAttr,
            Self::GetUserAttr { .. } => RequestKind::GetUserAttr,
            Self::SetUserAttr { .. } => RequestKind::SetUserAttr,
            Self::RetryPending { .. } => RequestKind::RetryPending,
            Self::AddContact { .. } => RequestKind::AddContact,
            Self::RemoveContact { .. } => RequestKind::RemoveContact,
            Self::CreateAccount { .. } => RequestKind::CreateAccount,
            Self::ConfirmAccount { .. } => RequestKind::ConfirmAccount,
            Self::QuerySignupLink { .. } => RequestKind::QuerySignupLink,
            Self::AddSync { .. } => RequestKind::AddSync,
            Self::RemoveSync { .. } => RequestKind::RemoveSync,
            Self::RemoveSyncs => RequestKind::RemoveSyncs,
            Self::PauseTransfers { .. } => RequestKind::PauseTransfers,
            Self::CancelTransfer => RequestKind::CancelTransfer,
            Self::CancelTransfers => RequestKind::CancelTransfers,
            Self::Delete => RequestKind::Delete,
            Self::ReportEvent { .. } => RequestKind::ReportEvent,
            Self::CancelFileAttr { .. } => RequestKind::CancelFileAttr,
            Self::GetPricing { .. } => RequestKind::GetPricing,
            Self::GetPaymentUrl { .. } => RequestKind::GetPaymentUrl,
        }
    }

    /// Credential login parameters.
    #[must_use]
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Login {
            email: Some(email.into()),
            password: Some(password.into()),
            private_key: None,
            session_key: None,
            folder_link: None,
        }
    }

    /// Session-resumption login parameters.
    #[must_use]
    pub fn resume_login(session_key: impl Into<String>) -> Self {
        Self::Login {
            email: None,
            password: None,
            private_key: None,
            session_key: Some(session_key.into()),
            folder_link: None,
        }
    }

    /// Parameters for enabling the export of a node.
    #[must_use]
    pub const fn export(node: NodeHandle) -> Self {
        Self::Export {
            node,
            enable: true,
            link: None,
            access: None,
        }
    }

    /// Parameters for revoking the export of a node.
    #[must_use]
    pub const fn disable_export(node: NodeHandle) -> Self {
        Self::Export {
            node,
            enable: false,
            link: None,
            access: None,
        }
    }

    /// Folder creation parameters.
    #[must_use]
    pub fn create_folder(parent: NodeHandle, name: impl Into<String>) -> Self {
        Self::CreateFolder {
            parent,
            name: name.into(),
            created: None,
        }
    }

    /// Password change parameters.
    #[must_use]
    pub fn change_password(password: impl Into<String>, new_password: impl Into<String>) -> Self {
        Self::ChangePassword {
            password: password.into(),
            new_password: new_password.into(),
        }
    }
}
