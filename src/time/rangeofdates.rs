use chrono::{
    Days,
    NaiveDate
};

/// A contiguous run of calendar days, iterated in ascending order.
///
/// Unlike a pair of dates taken at face value, a range whose start lies after
/// its end is simply empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    // Number of days, so a range may end on `NaiveDate::MAX`.
    len: usize
}

fn days_from(d1: NaiveDate, d2: NaiveDate) -> usize {
    (d2 - d1).num_days().max(0) as usize
}

impl RangeOfDates {
    /// `[d1, d2]`, both ends included.
    pub fn inclusive(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        let len = if d1 > d2 { 0 } else { days_from(d1, d2) + 1 };
        RangeOfDates { start_date: d1, len }
    }

    /// `[d1, d2)`, the end excluded.
    pub fn half_open(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        RangeOfDates { start_date: d1, len: days_from(d1, d2) }
    }

    /// The single day `d`.
    pub fn single(d: NaiveDate) -> RangeOfDates {
        RangeOfDates::inclusive(d, d)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day in the range, `None` when empty.
    pub fn last_date(&self) -> Option<NaiveDate> {
        let offset = self.len.checked_sub(1)?;
        self.start_date.checked_add_days(Days::new(offset as u64))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        d >= self.start_date && days_from(self.start_date, d) < self.len
    }

    pub fn iter(&self) -> RangeOfDatesIterator {
        RangeOfDatesIterator {
            range_of_dates: *self,
            index: 0
        }
    }
}

impl IntoIterator for RangeOfDates {
    type Item = NaiveDate;
    type IntoIter = RangeOfDatesIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct RangeOfDatesIterator {
    range_of_dates: RangeOfDates,
    index: usize
}

impl Iterator for RangeOfDatesIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let result = self.range_of_dates.start_date().checked_add_days(Days::new(self.index as u64));
            self.index += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range_of_dates.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}
