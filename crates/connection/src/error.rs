//! Error types for device operations.

use thiserror::Error;

/// Error type covering every way a device operation can fail.
///
/// `Unavailable` and `Rejected` are deliberately separate variants: "there is
/// no session to talk through" and "the device heard us and said no" need
/// different user-facing messaging.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// No active connection or session to the device.
    #[error("no active connection to the device")]
    Unavailable,

    /// The request reached the device and was refused.
    #[error("device rejected request for {path}: {reason}")]
    Rejected {
        /// Remote path the request targeted.
        path: String,
        /// Device-reported reason (not found, permission denied, corruption).
        reason: String,
    },

    /// The device answered with an empty payload where content was required.
    #[error("device returned no data for {0}")]
    NoData(String),

    /// Local I/O failed while materializing remote bytes.
    #[error("local I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl DeviceError {
    /// Shorthand for a rejection with a device-reported reason.
    pub fn rejected(path: impl Into<String>, reason: impl Into<String>) -> Self {
        DeviceError::Rejected {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for device operations.
pub type Result<T> = std::result::Result<T, DeviceError>;
