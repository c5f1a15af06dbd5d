//! iCalendar export of the merged calendar.

use chrono::FixedOffset;
use icalendar::{Calendar, Component, EventLike};

use crate::server::{model::calendar::CalendarEvent, util::time::local_day};

const CALENDAR_NAME: &str = "Texas Hill Country Events";

/// Renders events as a VCALENDAR document with one VEVENT per event.
///
/// All-day events are written as dates in the site's time zone, ending on the day after
/// their last day; timed events use UTC.
pub fn to_ics(offset: FixedOffset, events: &[CalendarEvent]) -> String {
    let mut calendar = Calendar::new();
    calendar.name(CALENDAR_NAME);

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.uid());
        ics_event.summary(&event.title);

        if event.all_day {
            let start = local_day(event.start_date, offset);
            ics_event.starts(start);
            // DTEND is exclusive for dates
            let end = event
                .end_date
                .map(|end| local_day(end, offset))
                .filter(|end| *end > start)
                .or_else(|| start.succ_opt());
            if let Some(end) = end {
                ics_event.ends(end);
            }
        } else {
            ics_event.starts(event.start_date);
            if let Some(end) = event.end_date {
                ics_event.ends(end);
            }
        }

        if !event.description.is_empty() {
            ics_event.description(&event.description);
        }
        if let Some(location) = &event.location {
            ics_event.location(location);
        }
        if let Some(category) = &event.category {
            ics_event.add_property("CATEGORIES", category);
        }

        calendar.push(ics_event.done());
    }

    calendar.done().to_string()
}
