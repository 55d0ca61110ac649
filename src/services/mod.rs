// Service layer: capability traits and their adapters
//
// Design Decision: Ports and Adapters
//
// - Traits (traits.rs) are the ports: the only view the processor and the
//   report manager have of files, HTTP, the ledger, storage, mail and time.
// - Adapters connect the ports to real infrastructure: RealResourceOpener,
//   HttpPaymentClient, FileRevenueLedger, DirectoryUploader, OutboxMailer,
//   SystemClock.
// - Tests plug in mockall mocks (mocks.rs) or hand-written fakes.
//
// Usage Example:
//     // Production code
//     let opener = Arc::new(RealResourceOpener);
//     let payments = Arc::new(HttpPaymentClient::new("https://api.payments.com")?);
//     let processor = UserProcessor::new(opener, payments, "config.json");
//
//     // Test code
//     let processor = UserProcessor::new(
//         Arc::new(mock_opener_with(r#"{"mode":"strict"}"#)),
//         Arc::new(mock_payments_returning(200)),
//         "config.json",
//     );

pub mod clock;
pub mod filesystem;
pub mod mailer;
#[cfg(test)]
pub mod mocks;
pub mod payments;
pub mod revenue;
pub mod storage;
pub mod traits;

// Re-export commonly used types
pub use clock::{FixedClock, SystemClock};
pub use filesystem::RealResourceOpener;
pub use mailer::OutboxMailer;
pub use payments::HttpPaymentClient;
pub use revenue::{FileRevenueLedger, OrderRecord};
pub use storage::DirectoryUploader;
pub use traits::{
    Clock, Mailer, PaymentClient, ResourceOpener, ResourceStream, RevenueReader, Uploader,
};
