// HTTP payment status adapter
//
// Design Decision: Report the raw status code, interpret nothing
//
// The adapter only performs the GET and returns whatever status the payment
// API answered with. Deciding that 200 means "paid" belongs to the processor,
// so a 404 or 503 is still an Ok(..) here. Only transport failures are errors.
//
// The user ID always travels as exactly one path segment. `/`, `?`, `#` and
// `%` inside an ID are percent-encoded, so no ID can address another user's
// status resource.

use super::traits::PaymentClient;
use crate::error::{Result, SeamsError};
use async_trait::async_trait;
use reqwest::Url;

/// Payment status client backed by reqwest
///
/// Queries `GET {base_url}/v1/status/{user_id}`.
///
/// Usage:
///     let payments = HttpPaymentClient::new("https://api.payments.com")?;
///     let status = payments.get_status("user-1").await?;
pub struct HttpPaymentClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPaymentClient {
    /// # Errors
    /// - `ConfigError` if `base_url` is not an absolute http(s) URL
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing reqwest client (shared connection pool)
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            SeamsError::ConfigError(format!("Invalid payments URL {:?}: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(SeamsError::ConfigError(format!(
                "Payments URL must be http(s), got {:?}",
                base_url.as_str()
            )));
        }
        Ok(Self { client, base_url })
    }

    fn status_url(&self, user_id: &str) -> Result<Url> {
        // The url crate silently drops "." and ".." segments
        if user_id.is_empty() || user_id == "." || user_id == ".." {
            return Err(SeamsError::PaymentCheckFailed(user_id.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SeamsError::ConfigError(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(["v1", "status", user_id]);
        Ok(url)
    }
}

#[async_trait]
impl PaymentClient for HttpPaymentClient {
    async fn get_status(&self, user_id: &str) -> Result<u16> {
        let url = self.status_url(user_id)?;
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        tracing::debug!("Payment status for {}: {}", user_id, status);
        Ok(status)
    }
}
