// SPDX-License-Identifier: Apache-2.0
//! Calendar bucketing helpers.
//!
//! All window math works on whole calendar days. Weeks are ISO weeks
//! (Monday start); fortnights are 14-day buckets counted from a fixed
//! anchor date; weekends are keyed by their Saturday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Monday of the ISO week containing `date`.
pub(crate) fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// First day of the 14-day bucket containing `date`, anchored at
/// `anchor`. Dates before the anchor land in negative buckets; the
/// euclidean division keeps bucket boundaries consistent on both sides.
pub(crate) fn fortnight_start(date: NaiveDate, anchor: NaiveDate) -> NaiveDate {
    let bucket = (date - anchor).num_days().div_euclid(14);
    anchor + Duration::days(bucket * 14)
}

/// Saturday keying the weekend `date` belongs to, when it is one.
pub(crate) fn weekend_key(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => Some(date),
        Weekday::Sun => Some(date - Duration::days(1)),
        _ => None,
    }
}
