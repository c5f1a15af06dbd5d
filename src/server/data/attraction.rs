use crate::server::{
    data::mem::MemStorage,
    model::attraction::{Attraction, AttractionParams},
};

pub struct AttractionRepository<'a> {
    store: &'a MemStorage,
}

impl<'a> AttractionRepository<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    /// Gets attractions ordered by id, optionally narrowed to a destination and a
    /// case-insensitive category
    pub async fn list(
        &self,
        destination_id: Option<i32>,
        category: Option<&str>,
    ) -> Vec<Attraction> {
        self.store
            .read()
            .await
            .attractions
            .values()
            .filter(|attraction| destination_id.is_none_or(|id| attraction.destination_id == id))
            .filter(|attraction| {
                category.is_none_or(|category| {
                    attraction
                        .category
                        .as_deref()
                        .is_some_and(|c| c.eq_ignore_ascii_case(category))
                })
            })
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: i32) -> Option<Attraction> {
        self.store.read().await.attractions.get(id)
    }

    pub async fn by_destination(&self, destination_id: i32) -> Vec<Attraction> {
        self.list(Some(destination_id), None).await
    }

    pub async fn create(&self, params: AttractionParams) -> Attraction {
        self.store
            .write()
            .await
            .attractions
            .insert_with(|id| Attraction::from_params(id, params))
    }

    pub async fn update(&self, id: i32, params: AttractionParams) -> Option<Attraction> {
        self.store
            .write()
            .await
            .attractions
            .replace(id, Attraction::from_params(id, params))
    }

    pub async fn delete(&self, id: i32) -> bool {
        self.store.write().await.attractions.remove(id)
    }
}
