//! **BEFORE REFACTORING - Hard-wired dependencies (Anti-Pattern)**
//!
//! Both domains written the way they looked before capability injection.
//!
//! **Problems with this approach:**
//! - ❌ Global counter mutated directly
//! - ❌ Config read straight from the filesystem
//! - ❌ Payment check hits the real API on every call
//! - ❌ A banned user kills the whole process
//! - ❌ Report logic reads the wall clock, so it only works on the 1st
//! - ❌ Upload and mail go straight to disk locations nobody can redirect
//!
//! **Run this example:**
//! ```bash
//! cargo run --example before_refactoring -- user-1
//! ```
//!
//! This reads `config.json` and `orders.json` from the current directory and
//! calls https://api.payments.com.

use chrono::{Datelike, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// **PROBLEM**: Process-wide state, shared by every caller and every test
static PROCESS_COUNT: AtomicUsize = AtomicUsize::new(0);

pub struct LegacyUserProcessor {
    pub config_path: String,
}

impl LegacyUserProcessor {
    pub async fn process_user(&self, user_id: &str) -> Result<(), String> {
        PROCESS_COUNT.fetch_add(1, Ordering::SeqCst);

        // **PROBLEM**: Fails on any machine without this exact file
        let file = std::fs::File::open(&self.config_path).map_err(|e| e.to_string())?;
        // **PROBLEM**: Decode errors are silently swallowed
        let config: HashMap<String, String> = serde_json::from_reader(file).unwrap_or_default();

        // **PROBLEM**: Real network call, slow and needs the production API
        let url = format!("https://api.payments.com/v1/status/{}", user_id);
        match reqwest::get(&url).await {
            Ok(resp) if resp.status().as_u16() == 200 => {}
            _ => return Err(format!("payment check failed for {}", user_id)),
        }

        // **PROBLEM**: Kills the test runner along with everything else
        if config.get("mode").map(String::as_str) == Some("strict") && user_id == "banned-user-123" {
            std::process::exit(1);
        }

        println!("User {} processed successfully", user_id);
        Ok(())
    }
}

#[derive(Deserialize)]
struct Order {
    month: u32,
    amount: f64,
}

pub struct LegacyReportManager {
    pub ledger_path: String,
}

impl LegacyReportManager {
    pub fn generate_report(&self, admin_email: &str) -> Result<(), String> {
        // **PROBLEM**: Impossible to test on any day but the 1st
        let now = Utc::now();
        if now.day() != 1 {
            return Err("reports can only be generated on the 1st of the month".to_string());
        }

        // **PROBLEM**: Data source hard-coded
        let content = std::fs::read_to_string(&self.ledger_path).map_err(|e| e.to_string())?;
        let orders: Vec<Order> = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        let total: f64 = orders
            .iter()
            .filter(|o| o.month == now.month())
            .map(|o| o.amount)
            .sum();

        // **PROBLEM**: Upload target hard-coded
        std::fs::create_dir_all("my-reports-bucket").map_err(|e| e.to_string())?;
        std::fs::write("my-reports-bucket/monthly-report.txt", format!("Total: {:.6}", total))
            .map_err(|e| e.to_string())?;

        // **PROBLEM**: "Sends" mail every time the code runs, tests included
        let message = format!("To: {}\r\nSubject: Revenue\r\n\r\nTotal: {:.6}", admin_email, total);
        std::fs::write("outgoing-mail.eml", message).map_err(|e| e.to_string())
    }
}

#[tokio::main]
async fn main() {
    let user_id = std::env::args().nth(1).unwrap_or_else(|| "user-1".to_string());

    let reports = LegacyReportManager {
        ledger_path: "orders.json".to_string(),
    };
    match reports.generate_report("admin@example.com") {
        Ok(()) => println!("Report generated"),
        Err(e) => println!("Report failed: {}", e),
    }

    let processor = LegacyUserProcessor {
        config_path: "config.json".to_string(),
    };
    match processor.process_user(&user_id).await {
        Ok(()) => {}
        Err(e) => println!("Processing failed: {}", e),
    }

    println!("Processed count: {}", PROCESS_COUNT.load(Ordering::SeqCst));
}
