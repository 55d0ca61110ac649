// User processing with injected capabilities
//
// Design Decision: Capability traits for I/O, function fields for side effects
//
// The processor never touches the filesystem, the network, global state or
// the process directly:
// 1. The configuration resource is opened through ResourceOpener
// 2. The payment status comes from PaymentClient
// 3. The "processed" counter is an `on_process` hook (default: no-op)
// 4. Halting the process is an `on_exit` hook (default: no-op) followed by a
//    returned BannedUser error; the caller decides whether to really exit
//
// The banned check itself is the pure function `is_banned_action`, so it can
// be exercised without any collaborator.

use crate::error::{Result, SeamsError};
use crate::services::{PaymentClient, ResourceOpener};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncReadExt;

/// Mode value that enables the banned-user policy
pub const STRICT_MODE: &str = "strict";

/// Sentinel user that is banned under strict mode
pub const BANNED_USER_ID: &str = "banned-user-123";

/// Exit code requested through `on_exit` for a banned user
pub const BANNED_EXIT_CODE: i32 = 1;

/// Status code the payment API reports for a user in good standing
pub const PAYMENT_OK: u16 = 200;

/// Zero-argument hook fired once per processed user
pub type ProcessHook = Box<dyn Fn() + Send + Sync>;

/// Hook receiving the exit code the processor would like the process to use
pub type ExitHook = Box<dyn Fn(i32) + Send + Sync>;

/// Flat string-to-string configuration
///
/// Only the `mode` key carries meaning; every other key is kept but ignored.
/// Decoding reads the first JSON value of the resource and ignores anything
/// after it. A literal `null` decodes to an empty config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct UserConfig(HashMap<String, String>);

impl UserConfig {
    /// Value of `mode`, or "" when absent
    pub fn mode(&self) -> &str {
        self.get("mode").unwrap_or("")
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl From<HashMap<String, String>> for UserConfig {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

/// True iff `mode` is exactly "strict" and `user_id` is exactly the banned
/// sentinel. Comparison is case-sensitive.
pub fn is_banned_action(mode: &str, user_id: &str) -> bool {
    mode == STRICT_MODE && user_id == BANNED_USER_ID
}

/// Processes users against a configuration resource and the payment API
///
/// Usage:
///     let processor = UserProcessor::new(opener, payments, "config.json")
///         .with_on_process(move || { counter.fetch_add(1, Ordering::SeqCst); });
///     processor.process_user("user-1").await?;
pub struct UserProcessor {
    config_path: PathBuf,
    opener: Arc<dyn ResourceOpener>,
    payments: Arc<dyn PaymentClient>,

    /// Fired once per call, right after the configuration resource opens.
    /// Never fired when the open fails; still fired when a later step fails.
    pub on_process: ProcessHook,

    /// Fired with [`BANNED_EXIT_CODE`] when a banned user is encountered
    pub on_exit: ExitHook,
}

impl UserProcessor {
    /// Both hooks start out as no-ops
    pub fn new(
        opener: Arc<dyn ResourceOpener>,
        payments: Arc<dyn PaymentClient>,
        config_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config_path: config_path.into(),
            opener,
            payments,
            on_process: Box::new(|| {}),
            on_exit: Box::new(|_| {}),
        }
    }

    pub fn with_on_process(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_process = Box::new(hook);
        self
    }

    pub fn with_on_exit(mut self, hook: impl Fn(i32) + Send + Sync + 'static) -> Self {
        self.on_exit = Box::new(hook);
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Run one user through config load, payment check and ban policy
    ///
    /// Steps short-circuit on the first failure.
    ///
    /// # Errors
    /// - `IoError`: configuration resource could not be opened or read
    /// - `DecodeError`: configuration is not a flat JSON string map
    /// - `PaymentCheckFailed`: transport failure or any status but 200
    /// - `BannedUser`: strict mode and the banned sentinel user
    pub async fn process_user(&self, user_id: &str) -> Result<()> {
        let config = self.load_config().await?;

        self.check_payment(user_id).await?;

        if is_banned_action(config.mode(), user_id) {
            tracing::warn!("Banned user {} encountered in strict mode", user_id);
            (self.on_exit)(BANNED_EXIT_CODE);
            return Err(SeamsError::BannedUser);
        }

        tracing::info!("User {} processed successfully", user_id);
        Ok(())
    }

    // The stream lives only inside this function, so it is released on the
    // read error and decode error paths as well as on success.
    async fn load_config(&self) -> Result<UserConfig> {
        let mut stream = self.opener.open(&self.config_path).await?;
        (self.on_process)();

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await?;
        drop(stream);

        let mut decoder = serde_json::Deserializer::from_slice(&raw);
        let config = Option::<UserConfig>::deserialize(&mut decoder)?.unwrap_or_default();
        tracing::debug!("Loaded config from {:?} (mode={:?})", self.config_path, config.mode());
        Ok(config)
    }

    async fn check_payment(&self, user_id: &str) -> Result<()> {
        match self.payments.get_status(user_id).await {
            Ok(PAYMENT_OK) => Ok(()),
            Ok(status) => {
                tracing::warn!("Payment status {} for {}", status, user_id);
                Err(SeamsError::PaymentCheckFailed(user_id.to_string()))
            }
            Err(e) => {
                tracing::warn!("Payment lookup for {} failed: {}", user_id, e);
                Err(SeamsError::PaymentCheckFailed(user_id.to_string()))
            }
        }
    }
}
