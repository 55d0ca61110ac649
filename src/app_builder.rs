// AppBuilder pattern for dependency construction and injection
//
// Design Decision: One place that knows about concrete adapters
//
// UserProcessor and ReportManager only see capability traits. The builder is
// where those traits get concrete implementations: production adapters from
// Settings, or whatever a test or demo hands in through the `with_*`
// overrides. Overrides always win; `with_production_deps` only fills gaps.
//
// Usage Example:
//     // Production
//     let deps = AppBuilder::new()
//         .with_settings(Settings::load()?)
//         .with_production_deps()?
//         .build()?;
//
//     // Testing
//     let deps = AppBuilder::new()
//         .with_opener(Arc::new(fake_opener))
//         .with_payments(Arc::new(fake_payments))
//         // ...
//         .build()?;

use crate::config::Settings;
use crate::error::{Result, SeamsError};
use crate::processor::UserProcessor;
use crate::report::ReportManager;
use crate::services::{
    Clock, DirectoryUploader, FileRevenueLedger, HttpPaymentClient, Mailer, OutboxMailer,
    PaymentClient, RealResourceOpener, ResourceOpener, RevenueReader, SystemClock, Uploader,
};
use std::sync::Arc;

/// Fully wired services
pub struct AppDependencies {
    pub processor: UserProcessor,
    pub reports: ReportManager,
}

/// Builder for constructing the processor and report manager
pub struct AppBuilder {
    settings: Settings,

    opener: Option<Arc<dyn ResourceOpener>>,
    payments: Option<Arc<dyn PaymentClient>>,
    revenue: Option<Arc<dyn RevenueReader>>,
    uploader: Option<Arc<dyn Uploader>>,
    mailer: Option<Arc<dyn Mailer>>,
    clock: Option<Arc<dyn Clock>>,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBuilder {
    /// Create a builder with default settings and no capabilities
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            opener: None,
            payments: None,
            revenue: None,
            uploader: None,
            mailer: None,
            clock: None,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_opener(mut self, opener: Arc<dyn ResourceOpener>) -> Self {
        self.opener = Some(opener);
        self
    }

    pub fn with_payments(mut self, payments: Arc<dyn PaymentClient>) -> Self {
        self.payments = Some(payments);
        self
    }

    pub fn with_revenue_reader(mut self, reader: Arc<dyn RevenueReader>) -> Self {
        self.revenue = Some(reader);
        self
    }

    pub fn with_uploader(mut self, uploader: Arc<dyn Uploader>) -> Self {
        self.uploader = Some(uploader);
        self
    }

    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Fill every capability not already set with its production adapter
    ///
    /// - RealResourceOpener for the config file
    /// - HttpPaymentClient against `payments_api_url`
    /// - FileRevenueLedger over `revenue_ledger_path`
    /// - DirectoryUploader into `reports_dir`
    /// - OutboxMailer into `outbox_dir`
    /// - SystemClock
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `payments_api_url` is not a usable http(s) URL
    /// (only checked when no payment client was overridden).
    pub fn with_production_deps(mut self) -> Result<Self> {
        let settings = &self.settings;

        if self.payments.is_none() {
            let payments = HttpPaymentClient::new(&settings.payments_api_url)?;
            self.payments = Some(Arc::new(payments));
        }

        self.opener
            .get_or_insert_with(|| Arc::new(RealResourceOpener));
        self.revenue
            .get_or_insert_with(|| Arc::new(FileRevenueLedger::new(settings.revenue_ledger_path.clone())));
        self.uploader
            .get_or_insert_with(|| Arc::new(DirectoryUploader::new(settings.reports_dir.clone())));
        self.mailer.get_or_insert_with(|| {
            Arc::new(OutboxMailer::new(
                settings.outbox_dir.clone(),
                settings.mail_from.clone(),
            ))
        });
        self.clock.get_or_insert_with(|| Arc::new(SystemClock));

        Ok(self)
    }

    /// Build the final dependency container
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first capability that was never set.
    pub fn build(self) -> Result<AppDependencies> {
        let opener = require(self.opener, "resource opener")?;
        let payments = require(self.payments, "payment client")?;
        let revenue = require(self.revenue, "revenue reader")?;
        let uploader = require(self.uploader, "uploader")?;
        let mailer = require(self.mailer, "mailer")?;
        let clock = require(self.clock, "clock")?;

        tracing::debug!("Wiring services (config at {:?})", self.settings.config_path);

        Ok(AppDependencies {
            processor: UserProcessor::new(opener, payments, self.settings.config_path),
            reports: ReportManager::new(revenue, uploader, mailer, clock),
        })
    }
}

fn require<T: ?Sized>(dep: Option<Arc<T>>, name: &str) -> Result<Arc<T>> {
    dep.ok_or_else(|| SeamsError::ConfigError(format!("{} required", name)))
}
