use crate::server::{
    data::mem::MemStorage,
    error::AppError,
    model::user::{CreateUserParams, User},
};

pub struct UserRepository<'a> {
    store: &'a MemStorage,
}

impl<'a> UserRepository<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, id: i32) -> Option<User> {
        self.store.read().await.users.get(id)
    }

    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        self.store
            .read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    /// Creates a user
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(AppError::Conflict)` - The username is taken
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let mut tables = self.store.write().await;
        if tables
            .users
            .values()
            .any(|user| user.username == params.username)
        {
            return Err(AppError::Conflict(format!(
                "User '{}' already exists",
                params.username
            )));
        }

        Ok(tables.users.insert_with(|id| User {
            id,
            username: params.username,
            password: params.password,
            is_admin: params.is_admin,
        }))
    }

    /// Creates the user or, when the username exists, resets its password and admin flag
    pub async fn upsert(&self, params: CreateUserParams) -> User {
        let mut tables = self.store.write().await;

        let existing = tables
            .users
            .values()
            .find(|user| user.username == params.username)
            .map(|user| user.id);

        if let Some(user) = existing.and_then(|id| tables.users.get_mut(id)) {
            user.password = params.password;
            user.is_admin = params.is_admin;
            return user.clone();
        }

        tables.users.insert_with(|id| User {
            id,
            username: params.username,
            password: params.password,
            is_admin: params.is_admin,
        })
    }
}
