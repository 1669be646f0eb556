//! Shared fixtures for the integration tests: a scripted in-memory fetcher, a
//! hand-driven clock, and a small slice of the real 2023 subscription feed.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use cnholiday::cache::clock::Clock;
use cnholiday::feed::fetcher::Fetcher;
use cnholiday::holidayerror::FetchError;

/// National Day 2023: 9-29..10-06 off, Saturday 10-07 and Sunday 10-08 on.
pub const NATIONAL_DAY_2023: &str = "BEGIN:VCALENDAR\r
VERSION:2.0\r
X-WR-CALNAME:中国大陆节假日\r
BEGIN:VEVENT\r
DTSTAMP:20230101T000000Z\r
UID:national-day-2023-off\r
DTSTART;VALUE=DATE:20230929\r
DTEND;VALUE=DATE:20231007\r
SUMMARY:中秋节、国庆节 休\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTAMP:20230101T000000Z\r
UID:national-day-2023-work-sat\r
DTSTART;VALUE=DATE:20231007\r
SUMMARY:国庆节 班\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTAMP:20230101T000000Z\r
UID:national-day-2023-work-sun\r
DTSTART;VALUE=DATE:20231008\r
SUMMARY:国庆节 班\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTAMP:20230101T000000Z\r
UID:teachers-day-2023\r
DTSTART;VALUE=DATE:20230910\r
SUMMARY:教师节\r
END:VEVENT\r
END:VCALENDAR\r
";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub struct ScriptedFetcher {
    responses: Mutex<VecDeque<Result<String, String>>>,
    requested: Mutex<Vec<String>>,
    calls: AtomicUsize
}

impl ScriptedFetcher {
    pub fn new(responses: Vec<Result<&str, &str>>) -> Arc<Self> {
        Arc::new(ScriptedFetcher {
            responses: Mutex::new(
                responses
                    .into_iter()
                    .map(|r| r.map(str::to_owned).map_err(str::to_owned))
                    .collect(),
            ),
            requested: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0)
        })
    }

    /// Always answers with `body`.
    pub fn repeating(body: &str) -> Arc<Self> {
        ScriptedFetcher::new(vec![Ok(body); 64])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Fetcher for ScriptedFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(url.to_owned());
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(body)) => Ok(body),
            Some(Err(reason)) => Err(FetchError::new(url, reason)),
            None => Err(FetchError::new(url, "no scripted response left")),
        }
    }
}

pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    pub fn new() -> Arc<Self> {
        Arc::new(ManualClock(Mutex::new(Utc.with_ymd_and_hms(2023, 9, 1, 8, 0, 0).unwrap())))
    }

    pub fn advance(&self, by: chrono::Duration) {
        *self.0.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}
