use crate::server::{
    data::mem::{MemStorage, Tables},
    error::AppError,
    model::destination::{Destination, DestinationParams},
};

pub struct DestinationRepository<'a> {
    store: &'a MemStorage,
}

impl<'a> DestinationRepository<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    /// Gets all destinations ordered by id
    pub async fn list(&self) -> Vec<Destination> {
        self.store.read().await.destinations.all()
    }

    pub async fn get(&self, id: i32) -> Option<Destination> {
        self.store.read().await.destinations.get(id)
    }

    pub async fn exists(&self, id: i32) -> bool {
        self.store.read().await.destinations.get(id).is_some()
    }

    pub async fn find_by_slug(&self, slug: &str) -> Option<Destination> {
        self.store
            .read()
            .await
            .destinations
            .values()
            .find(|destination| destination.slug == slug)
            .cloned()
    }

    /// Creates a destination
    ///
    /// # Returns
    /// - `Ok(Destination)` - The stored destination with its new id
    /// - `Err(AppError::Conflict)` - Another destination already uses the slug
    pub async fn create(&self, params: DestinationParams) -> Result<Destination, AppError> {
        let mut tables = self.store.write().await;
        ensure_slug_free(&tables, &params.slug, None)?;

        Ok(tables
            .destinations
            .insert_with(|id| Destination::from_params(id, params)))
    }

    /// Replaces every field of a destination but its id
    ///
    /// Returns `Ok(None)` when the destination doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        params: DestinationParams,
    ) -> Result<Option<Destination>, AppError> {
        let mut tables = self.store.write().await;
        if tables.destinations.get(id).is_none() {
            return Ok(None);
        }
        ensure_slug_free(&tables, &params.slug, Some(id))?;

        Ok(tables
            .destinations
            .replace(id, Destination::from_params(id, params)))
    }

    /// Deletes a destination. Events, attractions and cabins referencing it are kept.
    pub async fn delete(&self, id: i32) -> bool {
        self.store.write().await.destinations.remove(id)
    }
}

fn ensure_slug_free(tables: &Tables, slug: &str, except: Option<i32>) -> Result<(), AppError> {
    let taken = tables
        .destinations
        .values()
        .any(|destination| destination.slug == slug && Some(destination.id) != except);

    if taken {
        return Err(AppError::Conflict(format!(
            "A destination with slug '{}' already exists",
            slug
        )));
    }

    Ok(())
}
