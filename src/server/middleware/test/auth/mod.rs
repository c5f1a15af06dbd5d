use crate::server::{
    data::{mem::MemStorage, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::user::CreateUserParams,
};
use test_utils::context::TestContext;

mod require;
mod session;

async fn create_user(store: &MemStorage, username: &str, is_admin: bool) -> i32 {
    UserRepository::new(store)
        .upsert(CreateUserParams {
            username: username.to_string(),
            password: "secret".to_string(),
            is_admin,
        })
        .await
        .id
}
