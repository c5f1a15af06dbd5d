use crate::server::{
    data::mem::MemStorage,
    model::event::{Event, EventFilter, EventParams},
};

pub struct EventRepository<'a> {
    store: &'a MemStorage,
}

impl<'a> EventRepository<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    /// Gets events matching `filter`, ordered by start date then id
    pub async fn list(&self, filter: &EventFilter) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .store
            .read()
            .await
            .events
            .values()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect();

        events.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
        events
    }

    pub async fn get(&self, id: i32) -> Option<Event> {
        self.store.read().await.events.get(id)
    }

    pub async fn by_destination(&self, destination_id: i32) -> Vec<Event> {
        self.list(&EventFilter {
            destination_id: Some(destination_id),
            ..Default::default()
        })
        .await
    }

    pub async fn create(&self, params: EventParams) -> Event {
        self.store
            .write()
            .await
            .events
            .insert_with(|id| Event::from_params(id, params))
    }

    /// Returns `None` when the event doesn't exist
    pub async fn update(&self, id: i32, params: EventParams) -> Option<Event> {
        self.store
            .write()
            .await
            .events
            .replace(id, Event::from_params(id, params))
    }

    pub async fn delete(&self, id: i32) -> bool {
        self.store.write().await.events.remove(id)
    }
}
