use crate::server::{
    data::{event::EventRepository, mem::MemStorage},
    error::AppError,
    model::event::{Event, EventFilter, EventParams},
    service::destination::ensure_destination_exists,
};

pub struct EventService<'a> {
    store: &'a MemStorage,
}

impl<'a> EventService<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    pub async fn list(&self, filter: &EventFilter) -> Vec<Event> {
        EventRepository::new(self.store).list(filter).await
    }

    pub async fn get(&self, id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.store)
            .get(id)
            .await
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, params: EventParams) -> Result<Event, AppError> {
        self.validate(&params).await?;
        Ok(EventRepository::new(self.store).create(params).await)
    }

    pub async fn update(&self, id: i32, params: EventParams) -> Result<Event, AppError> {
        self.validate(&params).await?;
        EventRepository::new(self.store)
            .update(id, params)
            .await
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !EventRepository::new(self.store).delete(id).await {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn validate(&self, params: &EventParams) -> Result<(), AppError> {
        if params.title.is_empty() {
            return Err(AppError::BadRequest("Event title is required".to_string()));
        }
        if params.end_date.is_some_and(|end| end < params.start_date) {
            return Err(AppError::BadRequest(
                "Event end date cannot be before its start date".to_string(),
            ));
        }
        if let Some(destination_id) = params.destination_id {
            ensure_destination_exists(self.store, destination_id).await?;
        }
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Event with id {} not found", id))
}
