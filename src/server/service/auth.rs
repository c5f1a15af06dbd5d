use crate::server::{
    config::Config,
    data::{mem::MemStorage, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
};

pub struct AuthService<'a> {
    store: &'a MemStorage,
}

impl<'a> AuthService<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    /// Checks a username and password against stored users
    ///
    /// Passwords are stored and compared as plain text.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user = UserRepository::new(self.store)
            .find_by_username(username.trim())
            .await
            .filter(|user| user.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::info!("User {} logged in", user.id);

        Ok(user)
    }

    /// Gets the user stored in a session, if it still exists
    pub async fn get_user(&self, user_id: i32) -> Option<User> {
        UserRepository::new(self.store).find_by_id(user_id).await
    }

    /// Creates or resets the configured admin account
    pub async fn ensure_admin(&self, config: &Config) -> User {
        let user = UserRepository::new(self.store)
            .upsert(CreateUserParams {
                username: config.admin_username.clone(),
                password: config.admin_password.clone(),
                is_admin: true,
            })
            .await;

        tracing::info!("Admin user '{}' ready", user.username);

        user
    }
}
