// File-backed revenue ledger
//
// Stands in for the orders table. The ledger is a JSON array of orders:
//
//     [{"month": 2, "amount": 1200.5}, {"month": 3, "amount": 80.0}]
//
// and the monthly total is the sum of `amount` over orders whose `month`
// matches, i.e. `SELECT SUM(amount) FROM orders WHERE month = $1`.
// An empty month sums to 0.0.

use super::traits::RevenueReader;
use crate::error::{Result, SeamsError};
use async_trait::async_trait;
use chrono::Month;
use serde::Deserialize;
use std::path::PathBuf;

/// One row of the order ledger
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    /// Calendar month, 1 = January
    pub month: u32,

    /// Order amount in the ledger currency
    pub amount: f64,
}

/// Revenue reader over a JSON ledger file
///
/// The file is re-read on every query; there is no caching.
pub struct FileRevenueLedger {
    path: PathBuf,
}

impl FileRevenueLedger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    async fn load_orders(&self) -> Result<Vec<OrderRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SeamsError::RevenueError(format!("Failed to read ledger {:?}: {}", self.path, e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            SeamsError::RevenueError(format!("Failed to parse ledger {:?}: {}", self.path, e))
        })
    }
}

#[async_trait]
impl RevenueReader for FileRevenueLedger {
    async fn monthly_revenue(&self, month: Month) -> Result<f64> {
        let orders = self.load_orders().await?;
        let wanted = month.number_from_month();

        let total: f64 = orders
            .iter()
            .filter(|order| order.month == wanted)
            .map(|order| order.amount)
            .sum();

        tracing::debug!("Revenue for {:?}: {} from {} orders", month, total, orders.len());
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn ledger_with(content: &str) -> (TempDir, FileRevenueLedger) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("orders.json");
        tokio::fs::write(&path, content).await.unwrap();
        (temp_dir, FileRevenueLedger::new(path))
    }

    #[tokio::test]
    async fn test_sums_only_requested_month() {
        let (_dir, ledger) = ledger_with(
            r#"[
                {"month": 2, "amount": 1200.5},
                {"month": 2, "amount": 299.5},
                {"month": 3, "amount": 80.0}
            ]"#,
        )
        .await;

        assert_eq!(ledger.monthly_revenue(Month::February).await.unwrap(), 1500.0);
        assert_eq!(ledger.monthly_revenue(Month::March).await.unwrap(), 80.0);
    }

    #[tokio::test]
    async fn test_month_without_orders_is_zero() {
        let (_dir, ledger) = ledger_with(r#"[{"month": 2, "amount": 10.0}]"#).await;

        assert_eq!(ledger.monthly_revenue(Month::July).await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_corrupt_ledger_is_revenue_error() {
        let (_dir, ledger) = ledger_with("not a ledger").await;

        let result = ledger.monthly_revenue(Month::January).await;
        assert!(matches!(result, Err(SeamsError::RevenueError(_))));
    }

    #[tokio::test]
    async fn test_missing_ledger_is_revenue_error() {
        let ledger = FileRevenueLedger::new(PathBuf::from("/nonexistent/orders.json"));

        match ledger.monthly_revenue(Month::January).await {
            Err(SeamsError::RevenueError(msg)) => assert!(msg.contains("Failed to read ledger")),
            other => panic!("Expected RevenueError, got {:?}", other),
        }
    }
}
