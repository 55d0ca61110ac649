// ReportManager tests against the public API with hand-written fakes

use async_trait::async_trait;
use chrono::{DateTime, Month, TimeZone, Utc};
use seams::{
    format_report, is_report_day, FixedClock, Mailer, ReportManager, RevenueReader, SeamsError,
    Uploader,
};
use std::sync::{Arc, Mutex};

/// Every call any fake received, in order
type CallLog = Arc<Mutex<Vec<String>>>;

struct FakeDb {
    revenue: Result<f64, String>,
    log: CallLog,
}

#[async_trait]
impl RevenueReader for FakeDb {
    async fn monthly_revenue(&self, month: Month) -> seams::Result<f64> {
        self.log.lock().unwrap().push(format!("revenue:{}", month.name()));
        self.revenue.clone().map_err(SeamsError::RevenueError)
    }
}

struct FakeS3 {
    log: CallLog,
}

#[async_trait]
impl Uploader for FakeS3 {
    async fn upload(&self, key: &str, data: &[u8]) -> seams::Result<()> {
        let body = String::from_utf8_lossy(data);
        self.log.lock().unwrap().push(format!("upload:{}:{}", key, body));
        Ok(())
    }
}

struct FakeMail {
    log: CallLog,
}

#[async_trait]
impl Mailer for FakeMail {
    async fn send(&self, to: &str, body: &str) -> seams::Result<()> {
        self.log.lock().unwrap().push(format!("mail:{}:{}", to, body));
        Ok(())
    }
}

fn manager_at(at: DateTime<Utc>, revenue: Result<f64, String>) -> (ReportManager, CallLog) {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let manager = ReportManager::new(
        Arc::new(FakeDb {
            revenue,
            log: log.clone(),
        }),
        Arc::new(FakeS3 { log: log.clone() }),
        Arc::new(FakeMail { log: log.clone() }),
        Arc::new(FixedClock::new(at)),
    );
    (manager, log)
}

#[tokio::test]
async fn test_generate_report_success() {
    let frozen = Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap();
    let (manager, log) = manager_at(frozen, Ok(5000.0));

    manager.generate_report("admin@test.com").await.unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "revenue:February".to_string(),
            "upload:monthly-report.txt:Revenue: 5000.000000".to_string(),
            "mail:admin@test.com:Revenue: 5000.000000".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_not_the_first_touches_no_collaborator() {
    for day in [2, 15, 28] {
        let frozen = Utc.with_ymd_and_hms(2026, 2, day, 10, 0, 0).unwrap();
        let (manager, log) = manager_at(frozen, Ok(5000.0));

        let err = manager.generate_report("admin@test.com").await.unwrap_err();

        assert_eq!(err.to_string(), "reports can only be generated on the 1st");
        assert!(log.lock().unwrap().is_empty(), "day {}", day);
    }
}

#[tokio::test]
async fn test_revenue_error_propagates_verbatim() {
    let frozen = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
    let (manager, log) = manager_at(frozen, Err("connection reset".to_string()));

    match manager.generate_report("admin@test.com").await {
        Err(SeamsError::RevenueError(msg)) => assert_eq!(msg, "connection reset"),
        other => panic!("Expected RevenueError, got {:?}", other),
    }

    assert_eq!(*log.lock().unwrap(), vec!["revenue:July".to_string()]);
}

#[test]
fn test_is_report_day_any_year_month_time() {
    for year in [1999, 2024, 2026] {
        for month in 1..=12 {
            let first = Utc.with_ymd_and_hms(year, month, 1, 23, 59, 59).unwrap();
            let second = Utc.with_ymd_and_hms(year, month, 2, 0, 0, 0).unwrap();
            assert!(is_report_day(&first));
            assert!(!is_report_day(&second));
        }
    }
}

#[test]
fn test_report_body_format() {
    assert_eq!(format_report(5000.0), "Revenue: 5000.000000");
    assert_eq!(format_report(0.125), "Revenue: 0.125000");
}
