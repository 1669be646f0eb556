use thiserror::Error;

/// Failure to retrieve the raw feed text.
#[derive(Debug, Error)]
#[error("failed to fetch feed from '{url}': {reason}")]
pub struct FetchError {
    pub url: String,
    pub reason: String,
}

impl FetchError {
    pub fn new(url: &str, reason: impl ToString) -> FetchError {
        FetchError {
            url: url.to_owned(),
            reason: reason.to_string()
        }
    }
}

/// A date field of an event block that matched `DTSTART;VALUE=DATE:` or
/// `DTEND;VALUE=DATE:` but whose value is not a valid `YYYYMMDD` date.
///
/// `event` is the 1-based position of the event block in the feed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedParseError {
    #[error("event #{event}: {field} value '{value}' is not exactly 8 digits")]
    MalformedDigits {
        field: &'static str,
        event: usize,
        value: String
    },

    #[error("event #{event}: {field} value '{value}' is not a calendar date")]
    InvalidDate {
        field: &'static str,
        event: usize,
        value: String
    },
}

#[derive(Debug, Error)]
pub enum HolidayError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("malformed feed: {0}")]
    Parse(#[from] FeedParseError),

    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDateFormat { input: String },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
}

impl HolidayError {
    pub fn invalid_date_format(input: &str) -> HolidayError {
        HolidayError::InvalidDateFormat {
            input: input.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_message_names_url() {
        let error: HolidayError = FetchError::new("https://example.invalid/cn.ics", "connection refused").into();
        assert_eq!(
            error.to_string(),
            "failed to fetch feed from 'https://example.invalid/cn.ics': connection refused"
        );
    }

    #[test]
    fn parse_error_is_wrapped() {
        let error: HolidayError = FeedParseError::MalformedDigits {
            field: "DTSTART",
            event: 3,
            value: "2023101".to_owned()
        }
        .into();
        assert!(matches!(error, HolidayError::Parse(FeedParseError::MalformedDigits { event: 3, .. })));
        assert_eq!(
            error.to_string(),
            "malformed feed: event #3: DTSTART value '2023101' is not exactly 8 digits"
        );
    }
}
