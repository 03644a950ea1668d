//! The closed registry of request kinds.

use serde::{Deserialize, Serialize};

/// Every operation the remote service can be asked to perform.
///
/// The set is fixed at compile time; supporting a new remote operation means
/// extending this enumeration. Consumers branch on the kind before trusting
/// any other snapshot field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Authenticate a session (credentials, session token or folder link).
    Login,
    /// Create a folder under a parent node.
    CreateFolder,
    /// Move a node to a new parent.
    Move,
    /// Copy a node under a new parent.
    Copy,
    /// Rename a node in place.
    Rename,
    /// Remove a node from the tree.
    Remove,
    /// Share a folder with another account.
    Share,
    /// Import a file behind a public link into the tree.
    ImportLink,
    /// Enable or disable the public export of a node.
    Export,
    /// Fetch the full remote node tree.
    FetchNodes,
    /// Fetch account usage and quota details.
    FetchAccountDetails,
    /// Change the account password.
    ChangePassword,
    /// Upload a local file into the tree.
    Upload,
    /// Close the active session.
    Logout,
    /// Resolve a public link into a node snapshot.
    FetchPublicNode,
    /// Fetch a file attribute (thumbnail or preview).
    GetFileAttr,
    /// Set a file attribute (thumbnail or preview).
    SetFileAttr,
    /// Fetch a user attribute (avatar, names).
    GetUserAttr,
    /// Set a user attribute (avatar, names).
    SetUserAttr,
    /// Retry pending connections, optionally disconnecting first.
    RetryPending,
    /// Add a contact to the account.
    AddContact,
    /// Remove a contact from the account.
    RemoveContact,
    /// Start the creation of a new account.
    CreateAccount,
    /// Confirm a new account with its signup link.
    ConfirmAccount,
    /// Query the state of a signup link.
    QuerySignupLink,
    /// Register a local folder for synchronisation.
    AddSync,
    /// Stop synchronising a folder.
    RemoveSync,
    /// Stop every active synchronisation.
    RemoveSyncs,
    /// Pause or resume all transfers.
    PauseTransfers,
    /// Cancel a single transfer.
    CancelTransfer,
    /// Cancel every transfer in a direction.
    CancelTransfers,
    /// Tear down the service instance.
    Delete,
    /// Report a diagnostic event to the service.
    ReportEvent,
    /// Cancel an in-flight file attribute fetch.
    CancelFileAttr,
    /// Fetch the available pricing plans.
    GetPricing,
    /// Fetch the payment URL for a product.
    GetPaymentUrl,
}

impl RequestKind {
    /// Every kind, for iterating the closed set.
    pub const ALL: [Self; 36] = [
        Self::Login,
        Self::CreateFolder,
        Self::Move,
        Self::Copy,
        Self::Rename,
        Self::Remove,
        Self::Share,
        Self::ImportLink,
        Self::Export,
        Self::FetchNodes,
        Self::FetchAccountDetails,
        Self::ChangePassword,
        Self::Upload,
        Self::Logout,
        Self::FetchPublicNode,
        Self::GetFileAttr,
        Self::SetFileAttr,
        Self::GetUserAttr,
        Self::SetUserAttr,
        Self::RetryPending,
        Self::AddContact,
        Self::RemoveContact,
        Self::CreateAccount,
        Self::ConfirmAccount,
        Self::QuerySignupLink,
        Self::AddSync,
        Self::RemoveSync,
        Self::RemoveSyncs,
        Self::PauseTransfers,
        Self::CancelTransfer,
        Self::CancelTransfers,
        Self::Delete,
        Self::ReportEvent,
        Self::CancelFileAttr,
        Self::GetPricing,
        Self::GetPaymentUrl,
    ];

    /// Stable, human-readable label for the kind.
    ///
    /// Total over the enumeration; the returned string is statically
    /// allocated and never changes between releases.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::CreateFolder => "create_folder",
            Self::Move => "move",
            Self::Copy => "copy",
            Self::Rename => "rename",
            Self::Remove => "remove",
            Self::Share => "share",
            Self::ImportLink => "import_link",
            Self::Export => "export",
            Self::FetchNodes => "fetch_nodes",
            Self::FetchAccountDetails => "fetch_account_details",
            Self::ChangePassword => "change_password",
            Self::Upload => "upload",
            Self::Logout => "logout",
            Self::FetchPublicNode => "fetch_public_node",
            Self::GetFileAttr => "get_file_attr",
            Self::SetFileAttr => "set_file_attr",
            Self::GetUserAttr => "get_user_attr",
            Self::SetUserAttr => "set_user_attr",
            Self::RetryPending => "retry_pending",
            Self::AddContact => "add_contact",
            Self::RemoveContact => "remove_contact",
            Self::CreateAccount => "create_account",
            Self::ConfirmAccount => "confirm_account",
            Self::QuerySignupLink => "query_signup_link",
            Self::AddSync => "add_sync",
            Self::RemoveSync => "remove_sync",
            Self::RemoveSyncs => "remove_syncs",
            Self::PauseTransfers => "pause_transfers",
            Self::CancelTransfer => "cancel_transfer",
            Self::CancelTransfers => "cancel_transfers",
            Self::Delete => "delete",
            Self::ReportEvent => "report_event",
            Self::CancelFileAttr => "cancel_file_attr",
            Self::GetPricing => "get_pricing",
            Self::GetPaymentUrl => "get_payment_url",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn labels_are_unique_and_nonempty() {
        let labels: HashSet<&'static str> =
            RequestKind::ALL.iter().map(|kind| kind.label()).collect();
        assert_eq!(labels.len(), RequestKind::ALL.len());
        assert!(labels.iter().all(|label| !label.is_empty()));
    }

    #[test]
    fn labels_match_serde_names() {
        for kind in RequestKind::ALL {
            let json = serde_json::to_string(&kind).expect("serialize kind");
            assert_eq!(json, format!("\"{}\"", kind.label()));
        }
    }

    #[test]
    fn kinds_round_trip_through_serde() {
        for kind in RequestKind::ALL {
            let json = serde_json::to_string(&kind).expect("serialize kind");
            let back: RequestKind = serde_json::from_str(&json).expect("deserialize kind");
            assert_eq!(back, kind);
        }
    }
}
