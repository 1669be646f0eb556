use std::collections::HashSet;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::time::calendar::holidaycalendar::HolidayCalendar;

/// Weekend representation using bitmask
/// Each bit represents a day: Mon(0), Tue(1), ..., Sun(6)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WeekendMask(u8);

impl WeekendMask {
    fn new(weekends: &[Weekday]) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    #[inline]
    fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }
}

/// Holiday calendar built from a subscription feed: Saturday and Sunday are
/// rest days, the feed's holidays turn weekdays into rest days and its
/// make-up workdays turn weekend days back into workdays.
///
/// A date listed in both sets is treated as a workday.
#[derive(Clone, Debug)]
pub struct FeedCalendar {
    weekends: WeekendMask,
    holidays: HashSet<NaiveDate>,
    workdays: HashSet<NaiveDate>
}

impl FeedCalendar {
    pub fn new(holidays: HashSet<NaiveDate>, workdays: HashSet<NaiveDate>) -> FeedCalendar {
        FeedCalendar {
            weekends: WeekendMask::new(&[Weekday::Sat, Weekday::Sun]),
            holidays,
            workdays
        }
    }

    pub fn empty() -> FeedCalendar {
        FeedCalendar::new(HashSet::new(), HashSet::new())
    }

    pub fn holidays(&self) -> &HashSet<NaiveDate> {
        &self.holidays
    }

    pub fn workdays(&self) -> &HashSet<NaiveDate> {
        &self.workdays
    }

    /// Either set is still empty, i.e. the feed has not provided usable data.
    pub fn is_incomplete(&self) -> bool {
        self.holidays.is_empty() || self.workdays.is_empty()
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }

    #[inline]
    pub fn is_declared_holiday(&self, d: NaiveDate) -> bool {
        self.holidays.contains(&d)
    }

    #[inline]
    pub fn is_declared_workday(&self, d: NaiveDate) -> bool {
        self.workdays.contains(&d)
    }
}

impl HolidayCalendar for FeedCalendar {
    fn is_workday(&self, d: NaiveDate) -> bool {
        if self.is_declared_workday(d) {
            return true;
        }
        !self.is_declared_holiday(d) && !self.is_weekend(d)
    }
}
