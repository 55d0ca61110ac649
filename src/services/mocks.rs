// Mock test helpers and common mock patterns
//
// Preconfigured mockall mocks for the capability traits. Tests can take one
// of these and add or tighten expectations for the behaviour under test.
//
// Usage:
//     use crate::services::mocks::test_helpers::*;
//     let opener = mock_opener_with(r#"{"mode":"strict"}"#);
//     let payments = mock_payments_returning(200);

#[cfg(test)]
pub mod test_helpers {
    use super::super::traits::*;
    use crate::error::SeamsError;
    use chrono::{DateTime, TimeZone, Utc};
    use std::io::Cursor;

    /// In-memory stream over `content`
    pub fn stream_of(content: &str) -> ResourceStream {
        Box::new(Cursor::new(content.as_bytes().to_vec()))
    }

    /// Opener that serves `content` for any path, any number of times
    pub fn mock_opener_with(content: &str) -> MockResourceOpener {
        let content = content.to_string();
        let mut mock = MockResourceOpener::new();
        mock.expect_open().returning(move |_| Ok(stream_of(&content)));
        mock
    }

    /// Opener that always fails with NotFound
    pub fn mock_missing_opener() -> MockResourceOpener {
        let mut mock = MockResourceOpener::new();
        mock.expect_open().returning(|_| {
            Err(SeamsError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "config not found",
            )))
        });
        mock
    }

    /// Payment client that reports `status` for every user
    pub fn mock_payments_returning(status: u16) -> MockPaymentClient {
        let mut mock = MockPaymentClient::new();
        mock.expect_get_status().returning(move |_| Ok(status));
        mock
    }

    /// Revenue reader that reports `total` for every month
    pub fn mock_revenue_returning(total: f64) -> MockRevenueReader {
        let mut mock = MockRevenueReader::new();
        mock.expect_monthly_revenue().returning(move |_| Ok(total));
        mock
    }

    /// Uploader that accepts everything
    pub fn mock_accepting_uploader() -> MockUploader {
        let mut mock = MockUploader::new();
        mock.expect_upload().returning(|_, _| Ok(()));
        mock
    }

    /// Mailer that accepts everything
    pub fn mock_accepting_mailer() -> MockMailer {
        let mut mock = MockMailer::new();
        mock.expect_send().returning(|_, _| Ok(()));
        mock
    }

    /// Clock frozen at `at`
    pub fn mock_clock_at(at: DateTime<Utc>) -> MockClock {
        let mut mock = MockClock::new();
        mock.expect_now().return_const(at);
        mock
    }

    /// Midday UTC on the given date
    pub fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::super::traits::*;
    use super::test_helpers::*;
    use std::path::Path;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_mock_opener_serves_content_repeatedly() {
        let opener = mock_opener_with("hello");

        for _ in 0..2 {
            let mut stream = opener.open(Path::new("any")).await.unwrap();
            let mut content = String::new();
            stream.read_to_string(&mut content).await.unwrap();
            assert_eq!(content, "hello");
        }
    }

    #[tokio::test]
    async fn test_mock_missing_opener_fails() {
        let opener = mock_missing_opener();
        assert!(opener.open(Path::new("config.json")).await.is_err());
    }

    #[test]
    fn test_mock_clock_is_frozen() {
        let at = utc_date(2026, 2, 1);
        let clock = mock_clock_at(at);
        assert_eq!(clock.now(), at);
    }
}
