use crate::model::auth::UserDto;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Compared verbatim at login.
    pub password: String,
    pub is_admin: bool,
}

impl User {
    /// Converts to the API shape, which never carries the password.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            is_admin: self.is_admin,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}
