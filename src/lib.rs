pub mod configuration;

pub mod holidayerror;

pub mod holidayservice;

pub mod cache {
    pub mod clock;
    pub mod classificationcache;
}

pub mod feed {
    pub mod feedevent;
    pub mod feedparser;
    pub mod fetcher;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod feedcalendar;
    }
}
