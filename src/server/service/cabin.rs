use crate::server::{
    data::{cabin::CabinRepository, mem::MemStorage},
    error::AppError,
    model::cabin::{Cabin, CabinFilter, CabinParams},
    service::destination::ensure_destination_exists,
};

pub struct CabinService<'a> {
    store: &'a MemStorage,
}

impl<'a> CabinService<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    pub async fn list(&self, filter: &CabinFilter) -> Vec<Cabin> {
        CabinRepository::new(self.store).list(filter).await
    }

    pub async fn get(&self, id: i32) -> Result<Cabin, AppError> {
        CabinRepository::new(self.store)
            .get(id)
            .await
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, params: CabinParams) -> Result<Cabin, AppError> {
        self.validate(&params).await?;
        Ok(CabinRepository::new(self.store).create(params).await)
    }

    pub async fn update(&self, id: i32, params: CabinParams) -> Result<Cabin, AppError> {
        self.validate(&params).await?;
        CabinRepository::new(self.store)
            .update(id, params)
            .await
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CabinRepository::new(self.store).delete(id).await {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn validate(&self, params: &CabinParams) -> Result<(), AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest("Cabin name is required".to_string()));
        }
        if params.price_per_night < 0 {
            return Err(AppError::BadRequest(
                "Cabin price cannot be negative".to_string(),
            ));
        }
        if params
            .rating
            .is_some_and(|rating| !(0.0..=5.0).contains(&rating))
        {
            return Err(AppError::BadRequest(
                "Cabin rating must be between 0 and 5".to_string(),
            ));
        }
        ensure_destination_exists(self.store, params.destination_id).await
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Cabin with id {} not found", id))
}
