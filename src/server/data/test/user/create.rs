use super::*;

/// Tests creating a user with a username already taken.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = UserRepository::new(&store);
    repo.create(params("admin", "one", true)).await?;

    let result = repo.create(params("admin", "two", false)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests looking a user up by id and by username.
///
/// Expected: both lookups return the created user
#[tokio::test]
async fn finds_created_user() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = UserRepository::new(&store);
    let user = repo.create(params("editor", "pw", false)).await?;

    assert_eq!(repo.find_by_id(user.id).await, Some(user.clone()));
    assert_eq!(repo.find_by_username("editor").await, Some(user));
    assert_eq!(repo.find_by_username("Editor").await, None);

    Ok(())
}
