use chrono::{
    DateTime, Days, FixedOffset, LocalResult, Months, NaiveDate, NaiveTime, TimeZone, Utc,
};

/// Calendar day of `instant` on the site's wall clock.
pub fn local_day(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}

/// UTC instant of local midnight starting `date`.
pub fn local_midnight(date: NaiveDate, offset: FixedOffset) -> DateTime<Utc> {
    // A fixed offset has no gaps, so midnight is always a single instant.
    match offset.from_local_datetime(&date.and_time(NaiveTime::MIN)) {
        LocalResult::Single(local) => local.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => date.and_time(NaiveTime::MIN).and_utc(),
    }
}

/// Half-open UTC range `[start, end)` covering a whole site-local month.
///
/// Returns `None` for a month outside `1..=12` or an unrepresentable year.
pub fn month_range(
    year: i32,
    month: u32,
    offset: FixedOffset,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;

    Some((local_midnight(first, offset), local_midnight(next, offset)))
}

/// Adds whole days to a date, saturating at the maximum representable date.
pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}
