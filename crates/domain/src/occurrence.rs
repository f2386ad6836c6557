use crate::MINUTES_PER_DAY;
use chrono::{prelude::*, Duration, LocalResult};
use chrono_tz::Tz;

/// The instant on `date` at `minute` minutes past midnight in the
/// timezone `tz`. Minutes beyond a day continue into the following days.
///
/// Wall clock times that do not exist because of a DST gap are shifted
/// forward by the length of the gap, ambiguous ones resolve to the
/// earliest instant.
pub fn occurrence_on(date: NaiveDate, minute: u32, tz: &Tz) -> DateTime<Tz> {
    let date = date + Duration::days((minute / MINUTES_PER_DAY) as i64);
    let minute_of_day = minute % MINUTES_PER_DAY;
    let local = date.and_time(NaiveTime::MIN) + Duration::minutes(minute_of_day as i64);

    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // Interpret the wall clock with the offset in effect before the gap
            let offset_before_gap = tz
                .offset_from_utc_datetime(&(local - Duration::days(1)))
                .fix()
                .local_minus_utc();
            tz.from_utc_datetime(&(local - Duration::seconds(offset_before_gap as i64)))
        }
    }
}

/// The first instant strictly after `now` with the given minute of day:
/// today if that is still ahead of `now`, otherwise tomorrow.
pub fn next_occurrence(offset_minute: u32, now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let minute_of_day = offset_minute % MINUTES_PER_DAY;
    let today = now.date_naive();

    let candidate = occurrence_on(today, minute_of_day, &tz);
    if candidate > *now {
        candidate
    } else {
        occurrence_on(today + Duration::days(1), minute_of_day, &tz)
    }
}

/// Resolves every offset independently to its next occurrence, sorted
/// with the earliest instant first
pub fn next_occurrences(
    offsets: impl IntoIterator<Item = u32>,
    now: &DateTime<Tz>,
) -> Vec<DateTime<Tz>> {
    let mut occurrences = offsets
        .into_iter()
        .map(|offset| next_occurrence(offset, now))
        .collect::<Vec<_>>();
    occurrences.sort();
    occurrences
}
