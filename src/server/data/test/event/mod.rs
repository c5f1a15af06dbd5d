use chrono::{DateTime, TimeZone, Utc};

use crate::server::{
    data::{event::EventRepository, mem::MemStorage},
    model::event::{EventFilter, EventParams},
};


fn params(title: &str, start: DateTime<Utc>, destination_id: Option<i32>) -> EventParams {
    EventParams {
        title: title.to_string(),
        description: String::new(),
        start_date: start,
        end_date: None,
        location: None,
        destination_id,
        category: Some("Music".to_string()),
        image_url: None,
        is_recurring: false,
        recurrence_pattern: None,
        featured: false,
    }
}
