//! **AFTER REFACTORING - Dependency Injection Pattern**
//!
//! The same two flows as `before_refactoring`, run through the `seams`
//! library with in-memory fakes. Nothing touches the disk or the network,
//! time is frozen, and the banned user is observed instead of killing the
//! process.
//!
//! **Benefits of this approach:**
//! - ✅ Counter and exit are function fields you can watch
//! - ✅ Config, payments, ledger, upload and mail are swappable traits
//! - ✅ "Is it the 1st?" and "is this user banned?" are pure functions
//!
//! **Run this example:**
//! ```bash
//! cargo run --example after_refactoring
//! ```

use async_trait::async_trait;
use chrono::{Month, TimeZone, Utc};
use seams::{
    AppBuilder, FixedClock, Mailer, PaymentClient, ResourceOpener, ResourceStream, RevenueReader,
    Uploader,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

struct InMemoryConfig(&'static str);

#[async_trait]
impl ResourceOpener for InMemoryConfig {
    async fn open(&self, _path: &Path) -> seams::Result<ResourceStream> {
        Ok(Box::new(std::io::Cursor::new(self.0.as_bytes())))
    }
}

struct AlwaysPaid;

#[async_trait]
impl PaymentClient for AlwaysPaid {
    async fn get_status(&self, _user_id: &str) -> seams::Result<u16> {
        Ok(200)
    }
}

struct StaticLedger(f64);

#[async_trait]
impl RevenueReader for StaticLedger {
    async fn monthly_revenue(&self, _month: Month) -> seams::Result<f64> {
        Ok(self.0)
    }
}

/// In-memory object store
#[derive(Default)]
struct InMemoryBucket {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

#[async_trait]
impl Uploader for InMemoryBucket {
    async fn upload(&self, key: &str, data: &[u8]) -> seams::Result<()> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }
}

struct PrintingMailer;

#[async_trait]
impl Mailer for PrintingMailer {
    async fn send(&self, to: &str, body: &str) -> seams::Result<()> {
        println!("✉ to {}: {}", to, body);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> seams::Result<()> {
    let bucket = Arc::new(InMemoryBucket::default());
    let frozen = Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap();

    let deps = AppBuilder::new()
        .with_opener(Arc::new(InMemoryConfig(r#"{"mode":"strict"}"#)))
        .with_payments(Arc::new(AlwaysPaid))
        .with_revenue_reader(Arc::new(StaticLedger(5000.0)))
        .with_uploader(bucket.clone())
        .with_mailer(Arc::new(PrintingMailer))
        .with_clock(Arc::new(FixedClock::new(frozen)))
        .build()?;

    let processed = Arc::new(AtomicUsize::new(0));
    let counter = processed.clone();
    let processor = deps
        .processor
        .with_on_process(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .with_on_exit(|code| println!("⚠ exit({}) requested, process keeps running", code));

    for user in ["user-1", "banned-user-123"] {
        match processor.process_user(user).await {
            Ok(()) => println!("✓ {} processed", user),
            Err(e) => println!("✗ {}: {}", user, e),
        }
    }
    println!("Processed count: {}", processed.load(Ordering::SeqCst));

    deps.reports.generate_report("admin@example.com").await?;
    let stored = bucket.objects.lock().unwrap().len();
    println!("✓ Report uploaded ({} object in bucket)", stored);

    Ok(())
}
