use super::*;

/// Tests logging in as the configured admin.
///
/// Expected: Ok with the admin user
#[tokio::test]
async fn accepts_configured_admin() -> Result<(), AppError> {
    let store = MemStorage::new();
    let config = Config::test();
    let service = AuthService::new(&store);
    let admin = service.ensure_admin(&config).await;

    let user = service.login("admin", "password").await?;

    assert_eq!(user.id, admin.id);
    assert!(user.is_admin);

    Ok(())
}

/// Tests wrong passwords and unknown usernames.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let store = MemStorage::new();
    let config = Config::test();
    let service = AuthService::new(&store);
    service.ensure_admin(&config).await;

    let wrong_password = service.login("admin", "Password").await;
    let unknown_user = service.login("root", "password").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_user,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests seeding the admin twice with a changed password.
///
/// Expected: one user, the new password works and the old one doesn't
#[tokio::test]
async fn ensure_admin_resets_password() -> Result<(), AppError> {
    let store = MemStorage::new();
    let service = AuthService::new(&store);
    let mut config = Config::test();

    let first = service.ensure_admin(&config).await;
    config.admin_password = "rotated".to_string();
    let second = service.ensure_admin(&config).await;

    assert_eq!(first.id, second.id);
    assert_eq!(store.read().await.users.len(), 1);
    assert!(service.login("admin", "rotated").await.is_ok());
    assert!(service.login("admin", "password").await.is_err());

    Ok(())
}
