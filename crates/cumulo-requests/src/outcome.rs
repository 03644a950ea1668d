//! Terminal outcome taxonomy.
//!
//! Operation failure is never encoded in the snapshot itself; it travels as
//! a separate outcome value delivered alongside the terminal snapshot, so a
//! failed request still reports what was attempted.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of failure codes reported by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Internal service error.
    Internal,
    /// Malformed or inconsistent arguments.
    BadArguments,
    /// Transient condition; the request should be retried.
    RetryNeeded,
    /// Too many requests in too little time.
    RateLimited,
    /// Request failed permanently.
    Failed,
    /// Too many actions for this resource.
    TooMany,
    /// A supplied range was invalid.
    OutOfRange,
    /// A referenced resource has expired.
    Expired,
    /// Referenced resource does not exist.
    NotFound,
    /// The operation would create a circular linkage.
    Circular,
    /// Caller lacks the required access level.
    AccessDenied,
    /// Resource already exists.
    AlreadyExists,
    /// The request was only partially completed.
    Incomplete,
    /// Cryptographic key is missing or invalid.
    InvalidKey,
    /// Session identifier is missing or invalid.
    BadSession,
    /// Account or resource is administratively blocked.
    Blocked,
    /// A quota was exceeded.
    OverQuota,
    /// Resource is temporarily unavailable.
    TemporarilyUnavailable,
    /// Connection limit reached.
    TooManyConnections,
    /// A local write failed.
    WriteFailed,
    /// A local read failed.
    ReadFailed,
    /// Application key is missing or invalid.
    InvalidApplicationKey,
}

impl ErrorCode {
    /// Wire-level integer code, as reported by the service.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Internal => -1,
            Self::BadArguments => -2,
            Self::RetryNeeded => -3,
            Self::RateLimited => -4,
            Self::Failed => -5,
            Self::TooMany => -6,
            Self::OutOfRange => -7,
            Self::Expired => -8,
            Self::NotFound => -9,
            Self::Circular => -10,
            Self::AccessDenied => -11,
            Self::AlreadyExists => -12,
            Self::Incomplete => -13,
            Self::InvalidKey => -14,
            Self::BadSession => -15,
            Self::Blocked => -16,
            Self::OverQuota => -17,
            Self::TemporarilyUnavailable => -18,
            Self::TooManyConnections => -19,
            Self::WriteFailed => -20,
            Self::ReadFailed => -21,
            Self::InvalidApplicationKey => -22,
        }
    }

    /// Decode a wire-level integer code.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Internal),
            -2 => Some(Self::BadArguments),
            -3 => Some(Self::RetryNeeded),
            -4 => Some(Self::RateLimited),
            -5 => Some(Self::Failed),
            -6 => Some(Self::TooMany),
            -7 => Some(Self::OutOfRange),
            -8 => Some(Self::Expired),
            -9 => Some(Self::NotFound),
            -10 => Some(Self::Circular),
            -11 => Some(Self::AccessDenied),
            -12 => Some(Self::AlreadyExists),
            -13 => Some(Self::Incomplete),
            -14 => Some(Self::InvalidKey),
            -15 => Some(Self::BadSession),
            -16 => Some(Self::Blocked),
            -17 => Some(Self::OverQuota),
            -18 => Some(Self::TemporarilyUnavailable),
            -19 => Some(Self::TooManyConnections),
            -20 => Some(Self::WriteFailed),
            -21 => Some(Self::ReadFailed),
            -22 => Some(Self::InvalidApplicationKey),
            _ => None,
        }
    }

    /// Stable label for logs and wire payloads.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::BadArguments => "bad_arguments",
            Self::RetryNeeded => "retry_needed",
            Self::RateLimited => "rate_limited",
            Self::Failed => "failed",
            Self::TooMany => "too_many",
            Self::OutOfRange => "out_of_range",
            Self::Expired => "expired",
            Self::NotFound => "not_found",
            Self::Circular => "circular",
            Self::AccessDenied => "access_denied",
            Self::AlreadyExists => "already_exists",
            Self::Incomplete => "incomplete",
            Self::InvalidKey => "invalid_key",
            Self::BadSession => "bad_session",
            Self::Blocked => "blocked",
            Self::OverQuota => "over_quota",
            Self::TemporarilyUnavailable => "temporarily_unavailable",
            Self::TooManyConnections => "too_many_connections",
            Self::WriteFailed => "write_failed",
            Self::ReadFailed => "read_failed",
            Self::InvalidApplicationKey => "invalid_application_key",
        }
    }

    /// Whether a retry of the same request may succeed.
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(
            self,
            Self::RetryNeeded | Self::RateLimited | Self::TemporarilyUnavailable
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure reported with the terminal snapshot of a request.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("request failed with {code}: {message}")]
pub struct RequestFailure {
    /// Failure code from the closed taxonomy.
    pub code: ErrorCode,
    /// Human-readable failure detail.
    pub message: String,
}

impl RequestFailure {
    /// Build a failure from a code and message.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Outcome delivered alongside a terminal snapshot.
pub type RequestOutcome = Result<(), RequestFailure>;
