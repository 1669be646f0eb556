use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::cache::clock::{Clock, SystemClock};
use crate::configuration::Configuration;
use crate::feed::feedparser::FeedParser;
use crate::feed::fetcher::Fetcher;
use crate::holidayerror::HolidayError;
use crate::time::calendar::feedcalendar::FeedCalendar;

struct CacheState {
    last_refresh: Option<DateTime<Utc>>,
    calendar: Arc<FeedCalendar>
}

impl CacheState {
    /// Never refreshed, refreshed strictly before `now - interval`, or either
    /// date set still empty.
    fn is_stale(&self, now: DateTime<Utc>, interval: chrono::Duration) -> bool {
        let outdated = match self.last_refresh {
            None => true,
            Some(last_refresh) => now
                .checked_sub_signed(interval)
                .is_some_and(|threshold| last_refresh < threshold),
        };
        outdated || self.calendar.is_incomplete()
    }
}

/// Holds the holiday/workday sets parsed from the feed and refetches them at
/// most once per refresh interval.
///
/// The sets live in an immutable [`FeedCalendar`] snapshot. A refresh builds a
/// new snapshot and swaps it in whole, so a reader holding the previous
/// `Arc` keeps a consistent view. A failed refresh leaves both the snapshot
/// and the refresh timestamp untouched.
pub struct ClassificationCache<F: Fetcher> {
    fetcher: F,
    clock: Arc<dyn Clock>,
    feed_url: String,
    parser: FeedParser,
    refresh_interval: chrono::Duration,
    state: RwLock<CacheState>,
    // Serializes fetch + parse so concurrent stale readers trigger one fetch.
    refresh_lock: Mutex<()>
}

impl<F: Fetcher> ClassificationCache<F> {
    pub fn new(configuration: &Configuration, fetcher: F) -> Self {
        Self::with_clock(configuration, fetcher, Arc::new(SystemClock))
    }

    pub fn with_clock(configuration: &Configuration, fetcher: F, clock: Arc<dyn Clock>) -> Self {
        Self {
            fetcher,
            clock,
            feed_url: configuration.feed_url().to_owned(),
            parser: FeedParser::new(configuration.holiday_keyword(), configuration.workday_keyword()),
            refresh_interval: configuration.refresh_interval(),
            state: RwLock::new(CacheState {
                last_refresh: None,
                calendar: Arc::new(FeedCalendar::empty())
            }),
            refresh_lock: Mutex::new(())
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, CacheState> {
        // The state is only ever replaced whole, so a poisoned lock still
        // guards a consistent value.
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn fresh_snapshot(&self) -> Option<Arc<FeedCalendar>> {
        let state = self.read_state();
        if state.is_stale(self.clock.now(), self.refresh_interval) {
            None
        } else {
            Some(Arc::clone(&state.calendar))
        }
    }

    /// Returns an up-to-date snapshot, fetching and parsing the feed first
    /// when the cached one is stale.
    pub fn ensure_fresh(&self) -> Result<Arc<FeedCalendar>, HolidayError> {
        // Step 1: read lock only
        if let Some(calendar) = self.fresh_snapshot() {
            debug!("holiday cache is fresh");
            return Ok(calendar);
        }

        // Step 2: double-checked under the refresh lock
        let _refresh_guard = self.refresh_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(calendar) = self.fresh_snapshot() {
            return Ok(calendar);
        }

        // Step 3: fetch + parse outside the state lock
        let calendar = match self.load() {
            Ok(calendar) => Arc::new(calendar),
            Err(error) => {
                warn!(url = %self.feed_url, %error, "holiday feed refresh failed, keeping previous data");
                return Err(error);
            }
        };

        // Step 4: swap
        let refreshed_at = self.clock.now();
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.last_refresh = Some(refreshed_at);
            state.calendar = Arc::clone(&calendar);
        }
        info!(
            url = %self.feed_url,
            holidays = calendar.holidays().len(),
            workdays = calendar.workdays().len(),
            "holiday cache refreshed"
        );
        Ok(calendar)
    }

    fn load(&self) -> Result<FeedCalendar, HolidayError> {
        let content = self.fetcher.fetch(&self.feed_url)?;
        let parsed = self.parser.parse(&content)?;
        Ok(parsed.into_calendar())
    }

    /// The current snapshot, stale or not. Never triggers a fetch.
    pub fn snapshot(&self) -> Arc<FeedCalendar> {
        Arc::clone(&self.read_state().calendar)
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.read_state().last_refresh
    }

    pub fn holiday_set(&self) -> HashSet<NaiveDate> {
        self.snapshot().holidays().clone()
    }

    pub fn workday_set(&self) -> HashSet<NaiveDate> {
        self.snapshot().workdays().clone()
    }

    /// Forces the next `ensure_fresh` to refetch. The current sets stay
    /// available until that refetch succeeds.
    pub fn invalidate(&self) {
        self.state.write().unwrap_or_else(PoisonError::into_inner).last_refresh = None;
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
