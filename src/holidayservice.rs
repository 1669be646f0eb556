use std::sync::Arc;

use chrono::NaiveDate;

use crate::cache::classificationcache::ClassificationCache;
use crate::cache::clock::Clock;
use crate::configuration::Configuration;
use crate::feed::fetcher::{Fetcher, HttpFetcher};
use crate::holidayerror::HolidayError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::utility::{format_iso_date, parse_iso_date};

/// Answers workday/holiday questions about the Chinese statutory calendar.
///
/// Construct one per process and share it by reference (or behind an `Arc`).
/// The configuration is fixed at construction. Every query first brings the
/// cached feed data up to date, then classifies the requested days.
///
/// ```no_run
/// use cnholiday::configuration::Configuration;
/// use cnholiday::holidayservice::HolidayService;
///
/// let service = HolidayService::new(Configuration::default()).unwrap();
/// let workdays = service.workdays_between("2023-09-28", "2023-10-15").unwrap();
/// println!("{:?}", workdays);
/// ```
pub struct HolidayService<F: Fetcher = HttpFetcher> {
    configuration: Configuration,
    cache: ClassificationCache<F>
}

impl HolidayService<HttpFetcher> {
    pub fn new(configuration: Configuration) -> Result<Self, HolidayError> {
        let fetcher = HttpFetcher::new(configuration.fetch_timeout())?;
        Self::with_fetcher(configuration, fetcher)
    }
}

impl<F: Fetcher> HolidayService<F> {
    pub fn with_fetcher(configuration: Configuration, fetcher: F) -> Result<Self, HolidayError> {
        configuration.validate()?;
        let cache = ClassificationCache::new(&configuration, fetcher);
        Ok(HolidayService { configuration, cache })
    }

    pub fn with_fetcher_and_clock(
        configuration: Configuration,
        fetcher: F,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, HolidayError> {
        configuration.validate()?;
        let cache = ClassificationCache::with_clock(&configuration, fetcher, clock);
        Ok(HolidayService { configuration, cache })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn cache(&self) -> &ClassificationCache<F> {
        &self.cache
    }

    /// Workdays in `[start_date, end_date]` as `YYYY-MM-DD` strings, ascending.
    ///
    /// A make-up workday counts even on a weekend; a declared holiday does
    /// not count even on a weekday. A reversed range yields an empty list.
    pub fn workdays_between(&self, start_date: &str, end_date: &str) -> Result<Vec<String>, HolidayError> {
        let (start, end) = parse_range(start_date, end_date)?;
        Ok(to_iso_strings(self.workdays_between_dates(start, end)?))
    }

    /// Holidays (including ordinary weekends) in `[start_date, end_date]` as
    /// `YYYY-MM-DD` strings, ascending. A reversed range yields an empty list.
    pub fn holidays_between(&self, start_date: &str, end_date: &str) -> Result<Vec<String>, HolidayError> {
        let (start, end) = parse_range(start_date, end_date)?;
        Ok(to_iso_strings(self.holidays_between_dates(start, end)?))
    }

    pub fn workdays_between_dates(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, HolidayError> {
        let calendar = self.cache.ensure_fresh()?;
        Ok(calendar.workdays_between(start, end))
    }

    pub fn holidays_between_dates(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, HolidayError> {
        let calendar = self.cache.ensure_fresh()?;
        Ok(calendar.holidays_between(start, end))
    }

    pub fn is_workday(&self, date: &str) -> Result<bool, HolidayError> {
        let d = parse_iso_date(date)?;
        Ok(self.cache.ensure_fresh()?.is_workday(d))
    }

    pub fn is_holiday(&self, date: &str) -> Result<bool, HolidayError> {
        let d = parse_iso_date(date)?;
        Ok(self.cache.ensure_fresh()?.is_holiday(d))
    }
}

// Both ends are validated before the cache is touched.
fn parse_range(start_date: &str, end_date: &str) -> Result<(NaiveDate, NaiveDate), HolidayError> {
    Ok((parse_iso_date(start_date)?, parse_iso_date(end_date)?))
}

fn to_iso_strings(dates: Vec<NaiveDate>) -> Vec<String> {
    dates.into_iter().map(format_iso_date).collect()
}
