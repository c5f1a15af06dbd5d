use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with is_admin = true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();
    let store = MemStorage::new();

    let user_id = create_user(&store, "admin", true).await;
    AuthSession::new(session).set_user_id(user_id).await?;

    let user = AuthGuard::new(&store, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, user_id);
    assert!(user.is_admin);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied) carrying the user id
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();
    let store = MemStorage::new();

    let user_id = create_user(&store, "editor", false).await;
    AuthSession::new(session).set_user_id(user_id).await?;

    let result = AuthGuard::new(&store, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(denied_id, message))) => {
            assert_eq!(denied_id, user_id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests an empty session is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();
    let store = MemStorage::new();

    let result = AuthGuard::new(&store, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests a session pointing at a user that is not in storage.
///
/// Expected: Err(AuthError::UserNotInStorage) with the stale id
#[tokio::test]
async fn rejects_user_missing_from_storage() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();
    let store = MemStorage::new();

    AuthSession::new(session).set_user_id(41).await?;

    let result = AuthGuard::new(&store, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInStorage(41)))
    ));

    Ok(())
}

/// Tests a guard with no required permissions accepts any logged-in user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn no_permissions_only_requires_login() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();
    let store = MemStorage::new();

    let user_id = create_user(&store, "viewer", false).await;
    AuthSession::new(session).set_user_id(user_id).await?;

    let user = AuthGuard::new(&store, session).require(&[]).await?;

    assert_eq!(user.username, "viewer");

    Ok(())
}
