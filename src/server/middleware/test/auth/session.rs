use super::*;

/// Tests storing, reading and clearing the session user.
///
/// Expected: Some(id) after login, None after clear
#[tokio::test]
async fn stores_and_clears_user_id() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();
    let auth_session = AuthSession::new(session);

    assert_eq!(auth_session.get_user_id().await?, None);

    auth_session.set_user_id(7).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(7));

    auth_session.clear().await?;
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
