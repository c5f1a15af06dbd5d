use super::*;

/// Tests events are grouped by the site-local day they start on.
///
/// Expected: 03:00 UTC on the 12th lands on the 11th in Central time
#[tokio::test]
async fn groups_by_site_local_day() -> Result<(), AppError> {
    let store = MemStorage::new();
    create_event(&store, "Gallery Night", utc(2026, 3, 10, 20), None).await?;
    create_event(&store, "Farmers Market", utc(2026, 3, 10, 15), None).await?;
    create_event(&store, "Late Show", utc(2026, 3, 12, 3), None).await?;
    create_event(&store, "April Fools Run", utc(2026, 4, 1, 14), None).await?;
    let http_client = reqwest::Client::new();
    let config = Config::test();
    let cache = CalendarCache::new();

    let days = CalendarService::new(&store, &http_client, &config, &cache)
        .month(2026, 3)
        .await?;

    let dates: Vec<NaiveDate> = days.iter().map(|day| day.date).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 11).unwrap(),
        ]
    );
    let titles: Vec<&str> = days[0].events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Farmers Market", "Gallery Night"]);
    assert_eq!(days[1].events[0].title, "Late Show");

    Ok(())
}

/// Tests month numbers outside 1-12.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_month() -> Result<(), AppError> {
    let store = MemStorage::new();
    let http_client = reqwest::Client::new();
    let config = Config::test();
    let cache = CalendarCache::new();
    let service = CalendarService::new(&store, &http_client, &config, &cache);

    assert!(matches!(service.month(2026, 0).await, Err(AppError::BadRequest(_))));
    assert!(matches!(service.month(2026, 13).await, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the iCalendar export of a window.
///
/// Expected: one VEVENT with the local UID
#[tokio::test]
async fn exports_window_as_ics() -> Result<(), AppError> {
    let store = MemStorage::new();
    let event = create_event(&store, "Gallery Night", utc(2026, 3, 10, 20), None).await?;
    let http_client = reqwest::Client::new();
    let config = Config::test();
    let cache = CalendarCache::new();

    let query = CalendarQuery::new(
        Some(utc(2026, 3, 1, 0)),
        Some(utc(2026, 4, 1, 0)),
        None,
        Utc::now(),
    )?;
    let ics = CalendarService::new(&store, &http_client, &config, &cache)
        .ics(query)
        .await;

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    assert!(ics.contains(&format!("UID:event-local-{}@hillcountryguide", event.id)));
    assert!(ics.contains("SUMMARY:Gallery Night"));

    Ok(())
}
