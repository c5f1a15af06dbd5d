use super::*;

/// Tests upserting an existing username resets the password in place.
///
/// Expected: same id, new password, single row
#[tokio::test]
async fn updates_existing_user() {
    let store = MemStorage::new();
    let repo = UserRepository::new(&store);

    let first = repo.upsert(params("admin", "old", true)).await;
    let second = repo.upsert(params("admin", "new", true)).await;

    assert_eq!(first.id, second.id);
    assert_eq!(second.password, "new");
    assert_eq!(store.read().await.users.len(), 1);
}
