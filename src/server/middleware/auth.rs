use tower_sessions::Session;

use crate::server::{
    data::{mem::MemStorage, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    Admin,
}

/// Checks the session user against the permissions an endpoint requires.
pub struct AuthGuard<'a> {
    store: &'a MemStorage,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(store: &'a MemStorage, session: &'a Session) -> Self {
        Self { store, session }
    }

    /// Returns the logged-in user when they hold every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - Authorized user
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInStorage)` - Session refers to a user that no longer exists
    /// - `Err(AuthError::AccessDenied)` - Missing a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.store).find_by_id(user_id).await else {
            return Err(AuthError::UserNotInStorage(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin action without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
