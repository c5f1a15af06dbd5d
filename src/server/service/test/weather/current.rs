use super::*;

/// Tests live conditions for a destination with coordinates.
///
/// Expected: values from the API with fallback false
#[tokio::test]
async fn reports_live_conditions() -> Result<(), AppError> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/weather")
        .match_query(Matcher::UrlEncoded("units".into(), "imperial".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "name": "Wimberley",
                "main": {"temp": 88.5, "feels_like": 92.1, "humidity": 54},
                "weather": [{"description": "scattered clouds", "icon": "03d"}],
                "wind": {"speed": 7.2}
            }"#,
        )
        .create_async()
        .await;

    let store = MemStorage::seeded();
    let http_client = reqwest::Client::new();
    let config = weather_config(server.url());

    let report = WeatherService::new(&store, &http_client, &config)
        .current(2)
        .await?;

    mock.assert_async().await;
    assert!(!report.fallback);
    assert_eq!(report.destination_id, 2);
    assert_eq!(report.location, "Wimberley");
    assert_eq!(report.temperature, 88.5);
    assert_eq!(report.conditions, "scattered clouds");
    assert_eq!(report.wind_speed, Some(7.2));

    Ok(())
}

/// Tests a destination without coordinates.
///
/// Expected: seasonal averages, no API request
#[tokio::test]
async fn falls_back_without_coordinates() -> Result<(), AppError> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/weather")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let store = MemStorage::new();
    let destination = create_destination(&store, "Luckenbach", &[]).await?;
    let http_client = reqwest::Client::new();
    let config = weather_config(server.url());

    let report = WeatherService::new(&store, &http_client, &config)
        .current(destination.id)
        .await?;

    mock.assert_async().await;
    assert!(report.fallback);
    assert_eq!(report.location, "Luckenbach");

    Ok(())
}

/// Tests a failing weather API.
///
/// Expected: seasonal averages
#[tokio::test]
async fn falls_back_when_api_fails() -> Result<(), AppError> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/weather")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let store = MemStorage::seeded();
    let http_client = reqwest::Client::new();
    let config = weather_config(server.url());

    let report = WeatherService::new(&store, &http_client, &config)
        .current(1)
        .await?;

    assert!(report.fallback);
    assert!(report.humidity.is_some());

    Ok(())
}

/// Tests weather for an unknown destination.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_destination_is_not_found() -> Result<(), AppError> {
    let store = MemStorage::seeded();
    let http_client = reqwest::Client::new();
    let config = Config::test();

    let result = WeatherService::new(&store, &http_client, &config)
        .current(999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
