//! Error handling primitives shared across the bridge.
//!
//! Bridge-originated failures carry a stable [`BridgeCode`]; failures reported
//! by the native service keep their own domain and code and are forwarded
//! untouched.

use thiserror::Error;

/// Error domain reported for failures raised by this layer.
pub const BRIDGE_DOMAIN: &str = "LeaderboardBridge";

/// Stable error codes that cross the FFI boundary.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BridgeCode {
    /// Success code used as a sentinel.
    Ok = 0,
    /// The running platform is below the minimum feature level for the call.
    ApiUnavailable = 1,
    /// Caller supplied an argument outside the accepted domain.
    InvalidArgument = 2,
    /// The native service dropped a completion without calling it.
    TaskAbandoned = 3,
    /// A native image could not be re-encoded for transfer.
    ImageEncoding = 4,
    /// An entry point ran before a native service was installed.
    NotInstalled = 5,
    /// The native service itself reported the failure.
    NativeService = 6,
}

/// Failure reported by the native service, forwarded verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{domain} ({code}): {message}")]
pub struct NativeError {
    pub domain: String,
    pub code: i64,
    pub message: String,
}

impl NativeError {
    pub fn new(domain: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code,
            message: message.into(),
        }
    }
}

/// Canonical error type for the bridge.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Tier C, or a feature the platform family never offers.
    #[error("{operation} is not available on this platform")]
    ApiUnavailable { operation: &'static str },

    /// Input failed validation before any native call was made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The native call completed with an error.
    #[error(transparent)]
    Native(#[from] NativeError),

    /// The native completion was dropped before it fired.
    #[error("native service dropped the completion of task {task_id}")]
    TaskAbandoned { task_id: i64 },

    #[error("image encoding failed: {0}")]
    ImageEncoding(String),

    #[error("no native game service installed")]
    NotInstalled,
}

/// Result alias used throughout the crate.
pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    /// Tier C helper.
    pub const fn unavailable(operation: &'static str) -> Self {
        Self::ApiUnavailable { operation }
    }

    /// Validation helper.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Machine parsable error kind.
    pub fn code(&self) -> BridgeCode {
        match self {
            Self::ApiUnavailable { .. } => BridgeCode::ApiUnavailable,
            Self::InvalidArgument(_) => BridgeCode::InvalidArgument,
            Self::Native(_) => BridgeCode::NativeService,
            Self::TaskAbandoned { .. } => BridgeCode::TaskAbandoned,
            Self::ImageEncoding(_) => BridgeCode::ImageEncoding,
            Self::NotInstalled => BridgeCode::NotInstalled,
        }
    }

    /// Domain the numeric code belongs to.
    pub fn domain(&self) -> &str {
        match self {
            Self::Native(native) => &native.domain,
            _ => BRIDGE_DOMAIN,
        }
    }

    /// Numeric code handed to the caller: the native code for native
    /// failures, the [`BridgeCode`] otherwise.
    pub fn raw_code(&self) -> i64 {
        match self {
            Self::Native(native) => native.code,
            other => other.code() as i64,
        }
    }
}
