//! Sharing permission levels.

use serde::{Deserialize, Serialize};

/// Permission level attached to a share or an enabled export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Access could not be determined.
    Unknown,
    /// May read; cannot add, rename or delete.
    ReadOnly,
    /// May read and write; cannot rename or delete.
    ReadWrite,
    /// All operations that do not require ownership.
    Full,
    /// Node lives in one of the caller's own trees.
    Owner,
    /// Ownership asserted before the session completed login.
    OwnerPreLogin,
}

impl AccessLevel {
    /// Wire-level integer code for the level.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Unknown => -1,
            Self::ReadOnly => 0,
            Self::ReadWrite => 1,
            Self::Full => 2,
            Self::Owner => 3,
            Self::OwnerPreLogin => 4,
        }
    }

    /// Decode a wire-level integer; unrecognised codes map to `Unknown`.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::ReadOnly,
            1 => Self::ReadWrite,
            2 => Self::Full,
            3 => Self::Owner,
            4 => Self::OwnerPreLogin,
            _ => Self::Unknown,
        }
    }

    /// Whether the level permits modifying the shared tree.
    #[must_use]
    pub const fn can_write(self) -> bool {
        matches!(self, Self::ReadWrite | Self::Full | Self::Owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [AccessLevel; 6] = [
        AccessLevel::Unknown,
        AccessLevel::ReadOnly,
        AccessLevel::ReadWrite,
        AccessLevel::Full,
        AccessLevel::Owner,
        AccessLevel::OwnerPreLogin,
    ];

    #[test]
    fn codes_round_trip() {
        for level in LEVELS {
            assert_eq!(AccessLevel::from_code(level.code()), level);
        }
    }

    #[test]
    fn unrecognised_codes_decode_to_unknown() {
        assert_eq!(AccessLevel::from_code(99), AccessLevel::Unknown);
        assert_eq!(AccessLevel::from_code(-7), AccessLevel::Unknown);
    }

    #[test]
    fn read_only_cannot_write() {
        assert!(!AccessLevel::ReadOnly.can_write());
        assert!(AccessLevel::Full.can_write());
    }
}
