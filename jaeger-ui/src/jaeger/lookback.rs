use chrono::{NaiveDateTime, TimeZone};

/// Layout of the joined date and time form fields.
pub const FORM_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum LookbackError {
    #[error("invalid date/time '{input}': {reason}")]
    Parse { input: String, reason: String },
    #[error("'{0}' does not exist in the selected time zone")]
    Nonexistent(String),
}

/// Custom range bounds as the trace UI takes them: epoch milliseconds with
/// three zero digits appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomLookback {
    pub start: String,
    pub end: String,
}

pub fn timestamp_from_form<Tz: TimeZone>(
    tz: &Tz,
    date: &str,
    time: &str,
) -> Result<String, LookbackError> {
    let input = format!("{date} {time}");
    let naive = NaiveDateTime::parse_from_str(&input, FORM_DATE_TIME_FORMAT).map_err(|e| {
        LookbackError::Parse {
            input: input.clone(),
            reason: e.to_string(),
        }
    })?;

    // Repeated wall-clock times at a DST fall-back resolve to the earlier one.
    let instant = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| LookbackError::Nonexistent(input.clone()))?;

    Ok(format!("{}000", instant.timestamp_millis()))
}

pub fn unix_timestamps_in_ms_from_form<Tz: TimeZone>(
    tz: &Tz,
    start_date: &str,
    start_time: &str,
    end_date: &str,
    end_time: &str,
) -> Result<CustomLookback, LookbackError> {
    Ok(CustomLookback {
        start: timestamp_from_form(tz, start_date, start_time)?,
        end: timestamp_from_form(tz, end_date, end_time)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn utc_day_range() {
        let range =
            unix_timestamps_in_ms_from_form(&Utc, "2020-01-01", "00:00", "2020-01-02", "00:00")
                .unwrap();

        assert_eq!(range.start, "1577836800000000");
        assert_eq!(range.end, "1577923200000000");
    }

    #[test]
    fn offset_zone_shifts_the_instant() {
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        let stamp = timestamp_from_form(&cest, "2020-01-01", "02:30").unwrap();
        assert_eq!(stamp, "1577838600000000");
    }

    #[test]
    fn rejects_malformed_fields() {
        let err = timestamp_from_form(&Utc, "2020-13-01", "00:00").unwrap_err();
        assert!(matches!(err, LookbackError::Parse { ref input, .. } if input == "2020-13-01 00:00"));

        assert!(timestamp_from_form(&Utc, "", "").is_err());
        assert!(timestamp_from_form(&Utc, "2020-01-01", "noon").is_err());
    }

    #[test]
    fn either_bound_failing_fails_the_range() {
        let result =
            unix_timestamps_in_ms_from_form(&Utc, "2020-01-01", "00:00", "2020-01-02", "25:00");
        assert!(result.is_err());
    }
}
