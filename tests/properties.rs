use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use cnholiday::time::calendar::feedcalendar::FeedCalendar;
use cnholiday::time::calendar::holidaycalendar::HolidayCalendar;
use cnholiday::time::utility::{format_iso_date, parse_iso_date};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

fn day(offset: u64) -> NaiveDate {
    base().checked_add_days(Days::new(offset)).unwrap()
}

proptest! {
    /// Every date in a range is exactly one of workday / holiday, even when
    /// the two declared sets overlap.
    #[test]
    fn workdays_and_holidays_partition_range(
        holidays in prop::collection::hash_set(0u64..400, 0..60),
        workdays in prop::collection::hash_set(0u64..400, 0..60),
        start in 0u64..400,
        len in 0u64..120,
    ) {
        let calendar = FeedCalendar::new(
            holidays.iter().map(|&o| day(o)).collect(),
            workdays.iter().map(|&o| day(o)).collect(),
        );
        let (first, last) = (day(start), day(start + len));
        let w = calendar.workdays_between(first, last);
        let h = calendar.holidays_between(first, last);

        prop_assert_eq!(w.len() + h.len(), (len + 1) as usize);
        let w_set: HashSet<NaiveDate> = w.iter().copied().collect();
        prop_assert!(h.iter().all(|d| !w_set.contains(d)));
        prop_assert!(w.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(h.windows(2).all(|pair| pair[0] < pair[1]));
    }

    /// Reversed ranges are empty for both queries.
    #[test]
    fn reversed_range_is_empty(start in 1u64..400, back in 1u64..50) {
        let calendar = FeedCalendar::empty();
        let first = day(start + back);
        let last = day(start);
        prop_assert!(calendar.workdays_between(first, last).is_empty());
        prop_assert!(calendar.holidays_between(first, last).is_empty());
    }

    #[test]
    fn iso_date_round_trip(offset in 0u64..(365 * 200)) {
        let d = day(offset);
        prop_assert_eq!(parse_iso_date(&format_iso_date(d)).unwrap(), d);
    }
}
