//! In-memory storage shared by the MemStorage repositories.

use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::server::model::{
    attraction::Attraction, blog::BlogPost, cabin::Cabin, destination::Destination,
    event::Event, newsletter::Subscription, user::User,
};

/// One collection keyed by id.
///
/// Ids start at 1 and only ever increase, so a deleted id is never handed out again.
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    /// All rows ordered by id.
    pub fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub fn get_mut(&mut self, id: i32) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Assigns the next id and stores the row built for it.
    pub fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    /// Replaces an existing row. Returns `None` without inserting when `id` is absent.
    pub fn replace(&mut self, id: i32, row: T) -> Option<T> {
        let slot = self.rows.get_mut(&id)?;
        *slot = row.clone();
        Some(row)
    }

    pub fn remove(&mut self, id: i32) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Debug, Default)]
pub struct Tables {
    pub destinations: Table<Destination>,
    pub events: Table<Event>,
    pub attractions: Table<Attraction>,
    pub cabins: Table<Cabin>,
    pub blog_posts: Table<BlogPost>,
    pub subscriptions: Table<Subscription>,
    pub users: Table<User>,
}

/// Number of rows per collection, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageCounts {
    pub destinations: usize,
    pub events: usize,
    pub attractions: usize,
    pub cabins: usize,
    pub blog_posts: usize,
    pub subscriptions: usize,
}

/// Process-lifetime store for everything except seasonal content.
///
/// Cloning is cheap and every clone shares the same tables.
#[derive(Clone, Default)]
pub struct MemStorage {
    tables: Arc<RwLock<Tables>>,
}

impl MemStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the starter Hill Country content.
    pub fn seeded() -> Self {
        let mut tables = Tables::default();
        super::seed::seed(&mut tables);

        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }

    pub async fn counts(&self) -> StorageCounts {
        let tables = self.read().await;

        StorageCounts {
            destinations: tables.destinations.len(),
            events: tables.events.len(),
            attractions: tables.attractions.len(),
            cabins: tables.cabins.len(),
            blog_posts: tables.blog_posts.len(),
            subscriptions: tables.subscriptions.len(),
        }
    }
}
