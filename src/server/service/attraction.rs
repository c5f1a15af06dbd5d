use crate::server::{
    data::{attraction::AttractionRepository, mem::MemStorage},
    error::AppError,
    model::attraction::{Attraction, AttractionParams},
    service::destination::ensure_destination_exists,
};

pub struct AttractionService<'a> {
    store: &'a MemStorage,
}

impl<'a> AttractionService<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    pub async fn list(&self, destination_id: Option<i32>, category: Option<&str>) -> Vec<Attraction> {
        AttractionRepository::new(self.store)
            .list(destination_id, category)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Attraction, AppError> {
        AttractionRepository::new(self.store)
            .get(id)
            .await
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, params: AttractionParams) -> Result<Attraction, AppError> {
        self.validate(&params).await?;
        Ok(AttractionRepository::new(self.store).create(params).await)
    }

    pub async fn update(&self, id: i32, params: AttractionParams) -> Result<Attraction, AppError> {
        self.validate(&params).await?;
        AttractionRepository::new(self.store)
            .update(id, params)
            .await
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AttractionRepository::new(self.store).delete(id).await {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn validate(&self, params: &AttractionParams) -> Result<(), AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest("Attraction name is required".to_string()));
        }
        ensure_destination_exists(self.store, params.destination_id).await
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Attraction with id {} not found", id))
}
