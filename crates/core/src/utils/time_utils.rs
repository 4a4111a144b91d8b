use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};
use chrono_tz::Tz;

/// Default timezone used to turn instants into calendar dates.
pub const DEFAULT_VAULT_TZ: Tz = chrono_tz::Europe::Rome;

/// Converts a UTC instant to the calendar date it falls on in `tz`.
///
/// This is the single conversion point between wall-clock instants and the
/// `today` date every time-dependent calculation takes as input.
pub fn local_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience wrapper reading the system clock. Only the host application
/// should call this; the engines always receive `today` explicitly.
pub fn today_in(tz: Tz) -> NaiveDate {
    local_date_from_utc(Utc::now(), tz)
}

/// Signed number of whole days from `start` to `end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Adds calendar months, rolling a day that does not exist in the target
/// month over into the next one (Jan 31 + 1 month = Mar 2 in a leap year).
/// Returns `None` past the supported range.
pub fn add_calendar_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.with_day(1)?
        .checked_add_months(Months::new(months))?
        .checked_add_days(Days::new(u64::from(date.day() - 1)))
}

/// Subtracts whole years, clamping Feb 29 to Feb 28 in non-leap years.
pub fn subtract_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let months = u32::try_from(years).ok()?.checked_mul(12)?;
    date.checked_sub_months(Months::new(months))
}

/// `YYYY-MM` bucket key for a date.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// `YYYY` bucket key for a date.
pub fn year_key(date: NaiveDate) -> String {
    format!("{:04}", date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_local_date_crosses_midnight() {
        // 23:30 UTC on Jun 1 is already Jun 2 in Rome (UTC+2 in summer)
        let instant = Utc.with_ymd_and_hms(2024, 6, 1, 23, 30, 0).unwrap();
        assert_eq!(local_date_from_utc(instant, DEFAULT_VAULT_TZ), date(2024, 6, 2));
        assert_eq!(
            local_date_from_utc(instant, chrono_tz::America::New_York),
            date(2024, 6, 1)
        );
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 31)), 30);
        assert_eq!(days_between(date(2024, 1, 31), date(2024, 1, 1)), -30);
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_add_calendar_months_rolls_overflow_forward() {
        assert_eq!(add_calendar_months(date(2024, 1, 31), 1), Some(date(2024, 3, 2)));
        assert_eq!(add_calendar_months(date(2023, 1, 31), 1), Some(date(2023, 3, 3)));
        assert_eq!(add_calendar_months(date(2023, 8, 31), 6), Some(date(2024, 3, 2)));
        assert_eq!(add_calendar_months(date(2024, 3, 31), 1), Some(date(2024, 5, 1)));
        assert_eq!(add_calendar_months(date(2024, 1, 29), 1), Some(date(2024, 2, 29)));
        assert_eq!(add_calendar_months(date(2023, 3, 15), 12), Some(date(2024, 3, 15)));
        assert_eq!(add_calendar_months(date(2023, 3, 15), 0), Some(date(2023, 3, 15)));
    }

    #[test]
    fn test_subtract_years() {
        assert_eq!(subtract_years(date(2024, 2, 29), 50), Some(date(1974, 2, 28)));
        assert_eq!(subtract_years(date(2024, 6, 1), -1), None);
    }

    #[test]
    fn test_bucket_keys_are_zero_padded() {
        assert_eq!(month_key(date(2024, 3, 9)), "2024-03");
        assert_eq!(month_key(date(2024, 11, 30)), "2024-11");
        assert_eq!(year_key(date(2024, 3, 9)), "2024");
    }
}
