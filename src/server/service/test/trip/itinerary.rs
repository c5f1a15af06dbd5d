use super::*;

/// Wimberley with three attractions and two cabins, Kerrville with one attraction
/// and no cabins.
async fn two_destinations(store: &MemStorage) -> Result<(Destination, Destination), AppError> {
    let wimberley = create_destination(store, "Wimberley", &["water"]).await?;
    let kerrville = create_destination(store, "Kerrville", &["hiking"]).await?;

    create_attraction(store, wimberley.id, "Blue Hole", &["swimming"]).await?;
    create_attraction(store, wimberley.id, "Jacob's Well", &["swimming"]).await?;
    create_attraction(store, wimberley.id, "Art Walk", &["art"]).await?;
    create_attraction(store, kerrville.id, "Riverside Trail", &["hiking"]).await?;

    create_cabin(store, wimberley.id, "Cypress Cottage").await?;
    create_cabin(store, wimberley.id, "Creekside Loft").await?;

    Ok((wimberley, kerrville))
}

fn names(attractions: &[Attraction]) -> Vec<&str> {
    attractions.iter().map(|a| a.name.as_str()).collect()
}

/// Tests destinations, attractions and cabins rotate across a four-day trip.
///
/// Expected: alternating destinations; attraction and cabin picks advance per visit
#[tokio::test]
async fn rotates_destinations_attractions_and_cabins() -> Result<(), AppError> {
    let store = MemStorage::new();
    let (wimberley, kerrville) = two_destinations(&store).await?;

    let itinerary = plan(&store, params(4, Vec::new(), &[])).await?;

    assert_eq!(itinerary.start_date, date(2026, 5, 1));
    assert_eq!(itinerary.end_date, date(2026, 5, 4));
    assert_eq!(itinerary.days.len(), 4);

    let days = &itinerary.days;
    let destination_ids: Vec<i32> = days.iter().map(|d| d.destination.id).collect();
    assert_eq!(
        destination_ids,
        vec![wimberley.id, kerrville.id, wimberley.id, kerrville.id]
    );
    assert_eq!(days[0].day, 1);
    assert_eq!(days[3].date, date(2026, 5, 4));

    assert_eq!(names(&days[0].attractions), vec!["Blue Hole", "Jacob's Well"]);
    assert_eq!(names(&days[1].attractions), vec!["Riverside Trail"]);
    assert_eq!(names(&days[2].attractions), vec!["Art Walk", "Blue Hole"]);

    let cabins: Vec<Option<&str>> = days
        .iter()
        .map(|d| d.cabin.as_ref().map(|c| c.name.as_str()))
        .collect();
    // Kerrville has no cabins, so it borrows from the full list by day index.
    assert_eq!(
        cabins,
        vec![
            Some("Cypress Cottage"),
            Some("Creekside Loft"),
            Some("Creekside Loft"),
            Some("Creekside Loft"),
        ]
    );

    Ok(())
}

/// Tests requested destinations are visited in request order.
///
/// Expected: Kerrville first
#[tokio::test]
async fn keeps_requested_order() -> Result<(), AppError> {
    let store = MemStorage::new();
    let (wimberley, kerrville) = two_destinations(&store).await?;

    let itinerary = plan(&store, params(2, vec![kerrville.id, wimberley.id], &[])).await?;

    assert_eq!(itinerary.days[0].destination.id, kerrville.id);
    assert_eq!(itinerary.days[1].destination.id, wimberley.id);

    Ok(())
}

/// Tests interests narrow the attraction pool when something matches.
///
/// Expected: only the art attraction on the Wimberley day
#[tokio::test]
async fn filters_attractions_by_interest() -> Result<(), AppError> {
    let store = MemStorage::new();
    let (wimberley, _) = two_destinations(&store).await?;

    let itinerary = plan(&store, params(1, vec![wimberley.id], &["art"])).await?;

    assert_eq!(names(&itinerary.days[0].attractions), vec!["Art Walk"]);

    Ok(())
}

/// Tests only events on the day's date at that destination or without one are listed.
///
/// Expected: day 2 (Kerrville) gets the unassigned event, day 3 the Wimberley one
#[tokio::test]
async fn attaches_events_by_local_day_and_destination() -> Result<(), AppError> {
    let store = MemStorage::new();
    let (wimberley, _) = two_destinations(&store).await?;

    // 2026-05-02 10:00 in Central time
    create_event(&store, "Hill Country Fair", utc(2026, 5, 2, 16), None).await?;
    create_event(&store, "Wimberley Market", utc(2026, 5, 2, 17), Some(wimberley.id)).await?;
    create_event(&store, "Songwriter Night", utc(2026, 5, 3, 23), Some(wimberley.id)).await?;

    let itinerary = plan(&store, params(3, Vec::new(), &[])).await?;
    let titles = |index: usize| -> Vec<String> {
        itinerary.days[index]
            .events
            .iter()
            .map(|e| e.title.clone())
            .collect()
    };

    assert!(titles(0).is_empty());
    assert_eq!(titles(1), vec!["Hill Country Fair"]);
    assert_eq!(titles(2), vec!["Songwriter Night"]);

    Ok(())
}

/// Tests two local events sharing a title and site-local day.
///
/// Expected: the day lists the event once, keeping the earlier one
#[tokio::test]
async fn collapses_duplicate_events_within_a_day() -> Result<(), AppError> {
    let store = MemStorage::new();
    two_destinations(&store).await?;

    let morning = create_event(&store, "Hill Country Fair", utc(2026, 5, 1, 16), None).await?;
    create_event(&store, "Hill Country Fair", utc(2026, 5, 1, 20), None).await?;

    let itinerary = plan(&store, params(1, Vec::new(), &[])).await?;
    let events = &itinerary.days[0].events;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, Some(morning.id));

    Ok(())
}

/// Tests trip lengths outside 1-14 days.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_length() -> Result<(), AppError> {
    let store = MemStorage::new();
    two_destinations(&store).await?;

    assert!(matches!(
        plan(&store, params(0, Vec::new(), &[])).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        plan(&store, params(15, Vec::new(), &[])).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(plan(&store, params(14, Vec::new(), &[])).await.is_ok());

    Ok(())
}

/// Tests unknown destination ids and an empty store.
///
/// Expected: Err(AppError::NotFound) and Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_missing_destinations() -> Result<(), AppError> {
    let empty = MemStorage::new();
    assert!(matches!(
        plan(&empty, params(2, Vec::new(), &[])).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        plan(&empty, params(2, vec![7], &[])).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests planning the same trip twice.
///
/// Expected: identical itineraries
#[tokio::test]
async fn is_deterministic() -> Result<(), AppError> {
    let store = MemStorage::seeded();

    let first = plan(&store, params(7, Vec::new(), &["wine", "hiking"])).await?;
    let second = plan(&store, params(7, Vec::new(), &["wine", "hiking"])).await?;

    assert_eq!(first, second);

    Ok(())
}
