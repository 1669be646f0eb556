use chrono::NaiveDate;

use crate::time::rangeofdates::RangeOfDates;

/// Classifies every calendar day as either a workday or a holiday.
///
/// Implementors only decide `is_workday`; the holiday predicate is its
/// complement, so each date lands in exactly one category.
pub trait HolidayCalendar: Send + Sync {
    fn is_workday(&self, d: NaiveDate) -> bool;

    fn is_holiday(&self, d: NaiveDate) -> bool {
        !self.is_workday(d)
    }

    /// Workdays in `[start, end]`, ascending. Empty when `start > end`.
    fn workdays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        RangeOfDates::inclusive(start, end)
            .iter()
            .filter(|&d| self.is_workday(d))
            .collect()
    }

    /// Holidays in `[start, end]`, ascending. Empty when `start > end`.
    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        RangeOfDates::inclusive(start, end)
            .iter()
            .filter(|&d| self.is_holiday(d))
            .collect()
    }
}
