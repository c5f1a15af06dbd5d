use crate::server::{
    data::{
        attraction::AttractionRepository, cabin::CabinRepository,
        destination::DestinationRepository, event::EventRepository, mem::MemStorage,
    },
    error::AppError,
    model::{
        attraction::Attraction,
        cabin::Cabin,
        destination::{Destination, DestinationParams},
        event::Event,
    },
    util::slug::slugify,
};

pub struct DestinationService<'a> {
    store: &'a MemStorage,
}

impl<'a> DestinationService<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Destination> {
        DestinationRepository::new(self.store).list().await
    }

    pub async fn get(&self, id: i32) -> Result<Destination, AppError> {
        DestinationRepository::new(self.store)
            .get(id)
            .await
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Destination, AppError> {
        DestinationRepository::new(self.store)
            .find_by_slug(slug)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Destination '{}' not found", slug)))
    }

    /// Creates a destination, deriving the slug from the name when none is given
    pub async fn create(&self, params: DestinationParams) -> Result<Destination, AppError> {
        let params = validate(params)?;
        DestinationRepository::new(self.store).create(params).await
    }

    pub async fn update(&self, id: i32, params: DestinationParams) -> Result<Destination, AppError> {
        let params = validate(params)?;
        DestinationRepository::new(self.store)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !DestinationRepository::new(self.store).delete(id).await {
            return Err(not_found(id));
        }
        Ok(())
    }

    pub async fn events(&self, id: i32) -> Result<Vec<Event>, AppError> {
        self.get(id).await?;
        Ok(EventRepository::new(self.store).by_destination(id).await)
    }

    pub async fn attractions(&self, id: i32) -> Result<Vec<Attraction>, AppError> {
        self.get(id).await?;
        Ok(AttractionRepository::new(self.store).by_destination(id).await)
    }

    pub async fn cabins(&self, id: i32) -> Result<Vec<Cabin>, AppError> {
        self.get(id).await?;
        Ok(CabinRepository::new(self.store).by_destination(id).await)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Destination with id {} not found", id))
}

fn validate(mut params: DestinationParams) -> Result<DestinationParams, AppError> {
    if params.name.is_empty() {
        return Err(AppError::BadRequest("Destination name is required".to_string()));
    }

    params.slug = if params.slug.is_empty() {
        slugify(&params.name)
    } else {
        slugify(&params.slug)
    };
    if params.slug.is_empty() {
        return Err(AppError::BadRequest(
            "Destination name must contain letters or digits".to_string(),
        ));
    }

    Ok(params)
}

/// Rejects a reference to a destination id that does not exist.
pub async fn ensure_destination_exists(store: &MemStorage, id: i32) -> Result<(), AppError> {
    if !DestinationRepository::new(store).exists(id).await {
        return Err(AppError::BadRequest(format!(
            "Destination with id {} does not exist",
            id
        )));
    }
    Ok(())
}
