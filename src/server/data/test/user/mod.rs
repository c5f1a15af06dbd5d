use crate::server::{
    data::{mem::MemStorage, user::UserRepository},
    error::AppError,
    model::user::CreateUserParams,
};

mod create;
mod upsert;

fn params(username: &str, password: &str, is_admin: bool) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        password: password.to_string(),
        is_admin,
    }
}
