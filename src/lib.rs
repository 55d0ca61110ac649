// Library interface for seams
//
// Two small domains written against injected capabilities instead of the
// filesystem, network, clock, global counters and process exit:
// - processor: user processing (config file, payment API, ban policy)
// - report: monthly revenue report (clock, ledger, upload, mail)
//
// The binary wires production adapters; tests and demos wire fakes.

pub mod app_builder;
pub mod config;
pub mod error;
pub mod processor;
pub mod report;
pub mod services;

// Re-export commonly used types for convenience
pub use app_builder::{AppBuilder, AppDependencies};
pub use config::Settings;
pub use error::{Result, SeamsError};
pub use processor::{is_banned_action, UserConfig, UserProcessor};
pub use report::{format_report, is_report_day, ReportManager, REPORT_KEY};
pub use services::{
    Clock, DirectoryUploader, FileRevenueLedger, FixedClock, HttpPaymentClient, Mailer,
    OutboxMailer, PaymentClient, RealResourceOpener, ResourceOpener, ResourceStream,
    RevenueReader, SystemClock, Uploader,
};
