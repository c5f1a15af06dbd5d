use super::*;

/// Tests the model reply is returned with the system prompt and history forwarded.
///
/// Expected: trimmed model text, fallback false
#[tokio::test]
async fn returns_model_reply() -> Result<(), AppError> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJsonString(
            r#"{"messages":[{"role":"system"},{"role":"user","content":"Hi"},{"role":"assistant","content":"Howdy!"},{"role":"user","content":"Where can I swim?"}]}"#
                .to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"Try Jacob's Well in Wimberley."}}]}"#)
        .create_async()
        .await;

    let store = MemStorage::seeded();
    let http_client = reqwest::Client::new();
    let config = openai_config(server.url());
    let history = vec![
        ChatMessage {
            role: ChatRole::User,
            content: "Hi".to_string(),
        },
        ChatMessage {
            role: ChatRole::Assistant,
            content: "Howdy!".to_string(),
        },
    ];

    let reply = ChatService::new(&store, &http_client, &config)
        .reply("  Where can I swim?  ", history)
        .await?;

    mock.assert_async().await;
    assert_eq!(reply.reply, "Try Jacob's Well in Wimberley.");
    assert!(!reply.fallback);

    Ok(())
}

/// Tests a failing completion request.
///
/// Expected: canned reply with fallback true
#[tokio::test]
async fn falls_back_when_openai_fails() -> Result<(), AppError> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .create_async()
        .await;

    let store = MemStorage::seeded();
    let http_client = reqwest::Client::new();
    let config = openai_config(server.url());

    let reply = ChatService::new(&store, &http_client, &config)
        .reply("Where can I swim?", Vec::new())
        .await?;

    assert!(reply.fallback);
    assert!(!reply.reply.is_empty());

    Ok(())
}

/// Tests chatting without OpenAI configured.
///
/// Expected: canned reply with fallback true
#[tokio::test]
async fn falls_back_when_unconfigured() -> Result<(), AppError> {
    let store = MemStorage::seeded();
    let http_client = reqwest::Client::new();
    let config = Config::test();

    let reply = ChatService::new(&store, &http_client, &config)
        .reply("Where can I swim?", Vec::new())
        .await?;

    assert!(reply.fallback);

    Ok(())
}

/// Tests a blank message.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_message() -> Result<(), AppError> {
    let store = MemStorage::seeded();
    let http_client = reqwest::Client::new();
    let config = Config::test();

    let result = ChatService::new(&store, &http_client, &config)
        .reply("   ", Vec::new())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
