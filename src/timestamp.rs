//! Timezone-aware timestamp resolution.
//!
//! A post timestamp is either "now" converted into the configured IANA zone,
//! or a user-supplied calendar date taken at midnight in that zone. The UTC
//! offset always reflects the daylight-saving rules in effect *on that
//! date*, not the offset the zone happens to use today.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("midnight on {date} does not exist in {zone} (skipped by daylight saving)")]
    NonexistentLocalTime { date: NaiveDate, zone: Tz },
}

/// Resolve the post timestamp in `zone`.
///
/// With no custom date this is the current instant. With a custom date it is
/// that date at `00:00:00` local time; when clocks fall back and midnight
/// occurs twice, the earlier instant wins.
pub fn resolve(zone: Tz, custom_date: Option<NaiveDate>) -> Result<DateTime<Tz>, TimestampError> {
    let Some(date) = custom_date else {
        return Ok(Utc::now().with_timezone(&zone));
    };
    match zone.from_local_datetime(&date.and_time(NaiveTime::MIN)) {
        LocalResult::Single(timestamp) => Ok(timestamp),
        LocalResult::Ambiguous(earlier, _) => Ok(earlier),
        LocalResult::None => Err(TimestampError::NonexistentLocalTime { date, zone }),
    }
}

/// Format a timestamp for the front matter `date:` line.
pub fn front_matter_date(timestamp: &DateTime<Tz>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S %z").to_string()
}
