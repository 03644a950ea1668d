//! Account usage and quota snapshots.

use serde::{Deserialize, Serialize};

/// Storage and transfer accounting for an account.
///
/// Produced by a fetch-account-details request; all counters are in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccountDetails {
    /// Bytes of storage currently in use.
    pub storage_used_bytes: u64,
    /// Storage quota granted by the active plan.
    pub storage_quota_bytes: u64,
    /// Transfer volume consumed in the current accounting window.
    pub transfer_used_bytes: u64,
    /// Transfer quota granted by the active plan.
    pub transfer_quota_bytes: u64,
}

impl AccountDetails {
    /// Percentage of the storage quota in use (0-100).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn storage_percent_used(&self) -> f64 {
        if self.storage_quota_bytes == 0 {
            0.0
        } else {
            (self.storage_used_bytes as f64 / self.storage_quota_bytes as f64) * 100.0
        }
    }

    /// Percentage of the transfer quota in use (0-100).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn transfer_percent_used(&self) -> f64 {
        if self.transfer_quota_bytes == 0 {
            0.0
        } else {
            (self.transfer_used_bytes as f64 / self.transfer_quota_bytes as f64) * 100.0
        }
    }

    /// Storage bytes still available under the quota.
    #[must_use]
    pub const fn storage_remaining_bytes(&self) -> u64 {
        self.storage_quota_bytes.saturating_sub(self.storage_used_bytes)
    }
}
