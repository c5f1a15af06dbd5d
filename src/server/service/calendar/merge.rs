//! Merging of local and Google Calendar events.
//!
//! Two events are duplicates when their titles are exactly equal and they start on
//! the same calendar day in the site's time zone. Time of day is ignored.

use chrono::{FixedOffset, NaiveDate};
use std::collections::{BTreeMap, HashSet};

use crate::server::{
    model::calendar::{CalendarDay, CalendarEvent},
    util::time::local_day,
};

fn duplicate_key(event: &CalendarEvent, offset: FixedOffset) -> (String, NaiveDate) {
    (event.title.clone(), local_day(event.start_date, offset))
}

pub fn is_duplicate(a: &CalendarEvent, b: &CalendarEvent, offset: FixedOffset) -> bool {
    a.title == b.title && local_day(a.start_date, offset) == local_day(b.start_date, offset)
}

/// Keeps every local event, then each Google event that doesn't duplicate an event
/// already kept, sorted by start then title.
///
/// Local events are never dropped, even when two local events are duplicates of each
/// other. Repeats within the Google list collapse to the first occurrence.
pub fn merge_events(
    offset: FixedOffset,
    local: Vec<CalendarEvent>,
    google: Vec<CalendarEvent>,
) -> Vec<CalendarEvent> {
    let mut seen: HashSet<(String, NaiveDate)> =
        local.iter().map(|event| duplicate_key(event, offset)).collect();

    let mut merged = local;
    for event in google {
        if seen.insert(duplicate_key(&event, offset)) {
            merged.push(event);
        }
    }

    merged.sort_by(|a, b| {
        a.start_date
            .cmp(&b.start_date)
            .then_with(|| a.title.cmp(&b.title))
    });
    merged
}

/// Groups events by site-local start day, ascending, omitting empty days.
///
/// Events keep their relative order within a day.
pub fn group_by_day(offset: FixedOffset, events: Vec<CalendarEvent>) -> Vec<CalendarDay> {
    let mut days: BTreeMap<NaiveDate, Vec<CalendarEvent>> = BTreeMap::new();
    for event in events {
        days.entry(local_day(event.start_date, offset))
            .or_default()
            .push(event);
    }

    days.into_iter()
        .map(|(date, events)| CalendarDay { date, events })
        .collect()
}
