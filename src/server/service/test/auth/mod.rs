use crate::server::{
    config::Config,
    error::auth::AuthError,
    service::auth::AuthService,
};

use super::*;

mod login;
