use crate::server::{
    data::mem::MemStorage,
    model::cabin::{Cabin, CabinFilter, CabinParams},
};

pub struct CabinRepository<'a> {
    store: &'a MemStorage,
}

impl<'a> CabinRepository<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    /// Gets cabins matching `filter`, ordered by id
    pub async fn list(&self, filter: &CabinFilter) -> Vec<Cabin> {
        self.store
            .read()
            .await
            .cabins
            .values()
            .filter(|cabin| filter.matches(cabin))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: i32) -> Option<Cabin> {
        self.store.read().await.cabins.get(id)
    }

    pub async fn by_destination(&self, destination_id: i32) -> Vec<Cabin> {
        self.list(&CabinFilter {
            destination_id: Some(destination_id),
            ..Default::default()
        })
        .await
    }

    pub async fn create(&self, params: CabinParams) -> Cabin {
        self.store
            .write()
            .await
            .cabins
            .insert_with(|id| Cabin::from_params(id, params))
    }

    pub async fn update(&self, id: i32, params: CabinParams) -> Option<Cabin> {
        self.store
            .write()
            .await
            .cabins
            .replace(id, Cabin::from_params(id, params))
    }

    pub async fn delete(&self, id: i32) -> bool {
        self.store.write().await.cabins.remove(id)
    }
}
