// Centralized error handling using thiserror for type-safe error management
//
// Design Decision: One error enum shared by both domains and every adapter
//
// Every failure is terminal for the invocation that produced it. Nothing in
// the crate retries or falls back; errors travel back to the immediate caller
// through `?` and the caller decides what to do next.
//
// Taxonomy:
// - I/O: the configuration resource could not be opened or read
// - Decode: the configuration resource is not a flat JSON string map
// - External call: payment, revenue, upload and mail failures
// - Policy: banned user, or a report requested on the wrong day

use thiserror::Error;

/// Main error type for the `seams` crate
///
/// Usage:
///     fn check(status: u16, user_id: &str) -> Result<()> {
///         if status != 200 {
///             return Err(SeamsError::PaymentCheckFailed(user_id.to_string()));
///         }
///         Ok(())
///     }
#[derive(Debug, Error)]
pub enum SeamsError {
    /// Resource could not be opened or read (absent, permission denied, ...)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration content is not a flat JSON object of strings
    #[error("decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Payment status lookup failed or returned anything but 200
    ///
    /// The underlying cause (transport error vs. status code) is deliberately
    /// not exposed to the caller. Only the user ID is carried.
    #[error("payment check failed for {0}")]
    PaymentCheckFailed(String),

    /// Strict mode met the banned sentinel user
    #[error("banned user encountered")]
    BannedUser,

    /// Report generation was requested on a day other than the 1st
    #[error("reports can only be generated on the 1st")]
    NotReportDay,

    /// Revenue figure could not be read
    #[error("revenue error: {0}")]
    RevenueError(String),

    /// Report upload failed
    #[error("upload error: {0}")]
    UploadError(String),

    /// Mail delivery failed
    #[error("mail error: {0}")]
    MailError(String),

    /// HTTP transport failure (wraps reqwest::Error)
    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    /// Settings or wiring problem
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Environment variable present but unusable
    #[error("Environment error: {0}")]
    EnvError(String),
}

/// Type alias for Result with SeamsError
pub type Result<T> = std::result::Result<T, SeamsError>;
