use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::feed::feedevent::{EventKind, FeedEvent};
use crate::holidayerror::FeedParseError;
use crate::time::calendar::feedcalendar::FeedCalendar;
use crate::time::utility::checked_ymd;

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";
const START_FIELD: &str = "DTSTART";
const END_FIELD: &str = "DTEND";
const START_PREFIX: &str = "DTSTART;VALUE=DATE:";
const END_PREFIX: &str = "DTEND;VALUE=DATE:";

/// Holiday and make-up workday dates extracted from one feed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedFeed {
    pub holidays: HashSet<NaiveDate>,
    pub workdays: HashSet<NaiveDate>
}

impl ParsedFeed {
    pub fn into_calendar(self) -> FeedCalendar {
        FeedCalendar::new(self.holidays, self.workdays)
    }
}

/// Line scanner over the `VEVENT` blocks of an iCalendar feed.
///
/// A block is classified by plain substring search for the configured
/// keywords anywhere in its (unfolded) text.
#[derive(Clone, Debug)]
pub struct FeedParser {
    holiday_keyword: String,
    workday_keyword: String
}

impl FeedParser {
    pub fn new(holiday_keyword: &str, workday_keyword: &str) -> FeedParser {
        FeedParser {
            holiday_keyword: holiday_keyword.to_owned(),
            workday_keyword: workday_keyword.to_owned()
        }
    }

    pub fn holiday_keyword(&self) -> &str {
        &self.holiday_keyword
    }

    pub fn workday_keyword(&self) -> &str {
        &self.workday_keyword
    }

    pub fn parse(&self, content: &str) -> Result<ParsedFeed, FeedParseError> {
        let mut parsed = ParsedFeed::default();
        let mut n_events = 0usize;
        let mut n_skipped = 0usize;

        for (index, block) in event_blocks(content).enumerate() {
            n_events += 1;
            let Some(event) = self.parse_block(index + 1, block)? else {
                n_skipped += 1;
                continue;
            };
            let target = match event.kind() {
                EventKind::Holiday => &mut parsed.holidays,
                EventKind::Workday => &mut parsed.workdays,
                EventKind::Unclassified => continue
            };
            target.extend(event.dates());
        }

        debug!(
            events = n_events,
            skipped = n_skipped,
            holidays = parsed.holidays.len(),
            workdays = parsed.workdays.len(),
            "parsed holiday feed"
        );
        Ok(parsed)
    }

    /// `Ok(None)` when the block has no all-day start date.
    fn parse_block(&self, event: usize, block: &str) -> Result<Option<FeedEvent>, FeedParseError> {
        let text = unfold(block);
        let mut start_value = None;
        let mut end_value = None;
        for line in text.lines() {
            if start_value.is_none() {
                if let Some(value) = line.strip_prefix(START_PREFIX) {
                    start_value = Some(value);
                    continue;
                }
            }
            if end_value.is_none() {
                if let Some(value) = line.strip_prefix(END_PREFIX) {
                    end_value = Some(value);
                }
            }
        }

        let Some(start_value) = start_value else {
            return Ok(None);
        };
        let start_date = parse_compact_date(START_FIELD, event, start_value)?;
        let end_date = end_value
            .map(|value| parse_compact_date(END_FIELD, event, value))
            .transpose()?;
        let kind = EventKind::classify(&text, &self.holiday_keyword, &self.workday_keyword);
        Ok(Some(FeedEvent::new(start_date, end_date, kind)))
    }
}

/// Parses `content` with the given keywords.
pub fn parse(content: &str, holiday_keyword: &str, workday_keyword: &str) -> Result<ParsedFeed, FeedParseError> {
    FeedParser::new(holiday_keyword, workday_keyword).parse(content)
}

/// Text between each `BEGIN:VEVENT` and the following `END:VEVENT`.
fn event_blocks(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(BEGIN_EVENT)
        .skip(1)
        .filter_map(|part| part.find(END_EVENT).map(|end| &part[..end]))
}

/// Joins RFC 5545 continuation lines (leading space or tab) onto the line
/// before them.
fn unfold(block: &str) -> String {
    let mut text = String::with_capacity(block.len());
    for line in block.lines() {
        match line.strip_prefix(' ').or_else(|| line.strip_prefix('\t')) {
            Some(continuation) => text.push_str(continuation),
            None => {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(line);
            }
        }
    }
    text
}

/// `YYYYMMDD`, exactly eight digits.
fn parse_compact_date(field: &'static str, event: usize, value: &str) -> Result<NaiveDate, FeedParseError> {
    let value = value.trim();
    let bytes = value.as_bytes();
    if bytes.len() != 8 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(FeedParseError::MalformedDigits { field, event, value: value.to_owned() });
    }

    let number = |digits: &[u8]| digits.iter().fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    let year = number(&bytes[0..4]) as i32;
    let month = number(&bytes[4..6]);
    let day = number(&bytes[6..8]);
    checked_ymd(year, month, day)
        .ok_or_else(|| FeedParseError::InvalidDate { field, event, value: value.to_owned() })
}
