// Monthly revenue report generation
//
// Design Decision: Time is a capability, not a global
//
// `generate_report` reads "now" exclusively through the injected Clock and
// hands it to the pure `is_report_day` predicate. Revenue, upload and mail
// go through their capability traits. The pipeline is linear and stops at the
// first failure, returning the collaborator's error unchanged.

use crate::error::{Result, SeamsError};
use crate::services::{Clock, Mailer, RevenueReader, Uploader};
use chrono::{DateTime, Datelike, Month, TimeZone};
use std::sync::Arc;

/// Object key every monthly report is uploaded under
pub const REPORT_KEY: &str = "monthly-report.txt";

/// True iff `t` falls on the first day of its month, in `t`'s own time zone
pub fn is_report_day<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    t.day() == 1
}

/// Report body for a revenue total, always six decimal places
pub fn format_report(total: f64) -> String {
    format!("Revenue: {:.6}", total)
}

/// Generates, uploads and mails the monthly revenue report
///
/// Usage:
///     let reports = ReportManager::new(reader, uploader, mailer, Arc::new(SystemClock));
///     reports.generate_report("admin@example.com").await?;
pub struct ReportManager {
    reader: Arc<dyn RevenueReader>,
    uploader: Arc<dyn Uploader>,
    mailer: Arc<dyn Mailer>,
    clock: Arc<dyn Clock>,
}

impl ReportManager {
    pub fn new(
        reader: Arc<dyn RevenueReader>,
        uploader: Arc<dyn Uploader>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reader,
            uploader,
            mailer,
            clock,
        }
    }

    /// Build the report for the current month and deliver it to `admin_email`
    ///
    /// # Errors
    /// - `NotReportDay`: today is not the 1st (no collaborator is touched)
    /// - Whatever the revenue reader, uploader or mailer returned, verbatim
    pub async fn generate_report(&self, admin_email: &str) -> Result<()> {
        let now = self.clock.now();
        if !is_report_day(&now) {
            tracing::debug!("Refusing report on {}", now.date_naive());
            return Err(SeamsError::NotReportDay);
        }

        let month = Month::try_from(now.month() as u8)
            .map_err(|_| SeamsError::RevenueError(format!("invalid month {}", now.month())))?;
        let total = self.reader.monthly_revenue(month).await?;

        let content = format_report(total);
        self.uploader.upload(REPORT_KEY, content.as_bytes()).await?;
        self.mailer.send(admin_email, &content).await?;

        tracing::info!("Report for {:?} sent to {}", month, admin_email);
        Ok(())
    }
}
