use chrono::NaiveDate;

use crate::time::rangeofdates::RangeOfDates;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Holiday,
    Workday,
    Unclassified
}

impl EventKind {
    /// Holiday keyword is checked first, so a block carrying both keywords is
    /// a holiday.
    pub fn classify(text: &str, holiday_keyword: &str, workday_keyword: &str) -> EventKind {
        if text.contains(holiday_keyword) {
            EventKind::Holiday
        } else if text.contains(workday_keyword) {
            EventKind::Workday
        } else {
            EventKind::Unclassified
        }
    }
}

/// One `VEVENT` block reduced to what classification needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedEvent {
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    kind: EventKind
}

impl FeedEvent {
    pub fn new(start_date: NaiveDate, end_date: Option<NaiveDate>, kind: EventKind) -> FeedEvent {
        FeedEvent { start_date, end_date, kind }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Days covered by the event: `[start, end)`, or just `start` without an end.
    pub fn dates(&self) -> RangeOfDates {
        match self.end_date {
            Some(end_date) => RangeOfDates::half_open(self.start_date, end_date),
            None => RangeOfDates::single(self.start_date)
        }
    }
}
