//! Display formatting for job table cells.

use chrono::{DateTime, Local, TimeZone, Utc};
use job_core::JobStatus;

/// Date and time with the short local conventions, e.g. `03/01/2024 9:05 AM`.
const TIME_FORMAT: &str = "%m/%d/%Y %-I:%M %p";

pub fn hourly_format(hourly: u32) -> String {
    format!("${hourly}")
}

/// Text style class for a status.
pub fn status_class(status: JobStatus) -> &'static str {
    match status {
        JobStatus::NotStarted => "text-primary",
        JobStatus::InProgress => "text-danger",
        JobStatus::Finished => "text-success",
    }
}

/// Format a timestamp in the viewer's local time zone.
pub fn time_format(at: DateTime<Utc>) -> String {
    time_format_in(at, &Local)
}

pub fn time_format_in<Tz: TimeZone>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use chrono::FixedOffset;

    use super::*;

    #[test]
    fn hourly_has_dollar_sign() {
        assert_eq!(hourly_format(50), "$50");
        assert_eq!(hourly_format(1), "$1");
    }

    #[test]
    fn statuses_get_distinct_styles() {
        assert_eq!(status_class(JobStatus::NotStarted), "text-primary");
        assert_eq!(status_class(JobStatus::InProgress), "text-danger");
        assert_eq!(status_class(JobStatus::Finished), "text-success");
    }

    #[test]
    fn times_render_in_the_given_zone() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 0).unwrap();
        assert_eq!(time_format_in(at, &Utc), "03/01/2024 2:05 PM");

        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(time_format_in(at, &tokyo), "03/01/2024 11:05 PM");
    }
}
