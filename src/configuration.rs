use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::holidayerror::HolidayError;

/// Apple's public subscription of the Chinese statutory holidays.
pub const DEFAULT_FEED_URL: &str = "https://calendars.icloud.com/holidays/cn_zh.ics/";
pub const DEFAULT_HOLIDAY_KEYWORD: &str = "休";
pub const DEFAULT_WORKDAY_KEYWORD: &str = "班";
pub const DEFAULT_REFRESH_INTERVAL_HOURS: u64 = 24;

/// Where the feed lives and how its events are recognised.
///
/// Every key is optional in the JSON form; missing keys take the defaults
/// above.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    feed_url: String,
    holiday_keyword: String,
    workday_keyword: String,
    refresh_interval_hours: u64,
    fetch_timeout_ms: Option<u64>
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            feed_url: DEFAULT_FEED_URL.to_owned(),
            holiday_keyword: DEFAULT_HOLIDAY_KEYWORD.to_owned(),
            workday_keyword: DEFAULT_WORKDAY_KEYWORD.to_owned(),
            refresh_interval_hours: DEFAULT_REFRESH_INTERVAL_HOURS,
            fetch_timeout_ms: None
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, HolidayError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        configuration.validate()?;
        Ok(configuration)
    }

    /// Replaces the feed address and both keywords at once.
    pub fn configure(self, feed_url: &str, holiday_keyword: &str, workday_keyword: &str) -> Configuration {
        self.with_feed_url(feed_url)
            .with_holiday_keyword(holiday_keyword)
            .with_workday_keyword(workday_keyword)
    }

    pub fn with_feed_url(mut self, feed_url: &str) -> Configuration {
        self.feed_url = feed_url.to_owned();
        self
    }

    pub fn with_holiday_keyword(mut self, holiday_keyword: &str) -> Configuration {
        self.holiday_keyword = holiday_keyword.to_owned();
        self
    }

    pub fn with_workday_keyword(mut self, workday_keyword: &str) -> Configuration {
        self.workday_keyword = workday_keyword.to_owned();
        self
    }

    pub fn with_refresh_interval_hours(mut self, hours: u64) -> Configuration {
        self.refresh_interval_hours = hours;
        self
    }

    /// Stored with millisecond resolution; a non-zero timeout below 1ms is
    /// rounded up to 1ms rather than truncated to zero.
    pub fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Configuration {
        self.fetch_timeout_ms = timeout.map(|t| {
            let millis = u64::try_from(t.as_millis()).unwrap_or(u64::MAX);
            if millis == 0 && !t.is_zero() { 1 } else { millis }
        });
        self
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    pub fn holiday_keyword(&self) -> &str {
        &self.holiday_keyword
    }

    pub fn workday_keyword(&self) -> &str {
        &self.workday_keyword
    }

    pub fn refresh_interval(&self) -> chrono::Duration {
        i64::try_from(self.refresh_interval_hours)
            .ok()
            .and_then(chrono::Duration::try_hours)
            .unwrap_or(chrono::Duration::MAX)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> Result<(), HolidayError> {
        if self.feed_url.trim().is_empty() {
            return Err(HolidayError::Configuration("feed_url is empty".to_owned()));
        }
        // An empty keyword would match every event.
        if self.holiday_keyword.is_empty() || self.workday_keyword.is_empty() {
            return Err(HolidayError::Configuration("holiday and workday keywords must not be empty".to_owned()));
        }
        if self.holiday_keyword == self.workday_keyword {
            return Err(HolidayError::Configuration(format!(
                "holiday and workday keywords are both '{}'",
                self.holiday_keyword
            )));
        }
        // A zero timeout makes every fetch fail immediately.
        if self.fetch_timeout_ms == Some(0) {
            return Err(HolidayError::Configuration("fetch_timeout_ms must be positive".to_owned()));
        }
        if self.refresh_interval_hours == 0 {
            return Err(HolidayError::Configuration("refresh_interval_hours must be positive".to_owned()));
        }
        Ok(())
    }
}
