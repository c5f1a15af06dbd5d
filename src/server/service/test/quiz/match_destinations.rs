use super::*;

fn destination_names(matches: &[crate::server::model::quiz::QuizMatch]) -> Vec<&str> {
    matches
        .iter()
        .map(|m| m.destination.name.as_str())
        .collect()
}

/// Tests destinations are ranked by the number of shared tags.
///
/// Expected: Fredericksburg (wine, history) ahead of Johnson City (history)
#[tokio::test]
async fn ranks_by_shared_tags() -> Result<(), AppError> {
    let store = MemStorage::seeded();

    let matches = QuizService::new(&store)
        .match_destinations(tags(&["Wine", "history", "wine"]), None)
        .await?;

    assert_eq!(destination_names(&matches), vec!["Fredericksburg", "Johnson City"]);
    assert_eq!(matches[0].score, 2);
    assert_eq!(matches[0].matched_tags, vec!["history", "wine"]);
    assert!(matches[0].attractions.len() <= 3);
    assert!(!matches[0].attractions.is_empty());
    assert!(matches[0].cabin.is_some());

    Ok(())
}

/// Tests ties are broken by featured first, then by name.
///
/// Expected: New Braunfels (featured), then Dripping Springs, Kerrville
#[tokio::test]
async fn breaks_ties_by_featured_then_name() -> Result<(), AppError> {
    let store = MemStorage::seeded();
    let service = QuizService::new(&store);

    let all = service
        .match_destinations(tags(&["music"]), None)
        .await?;
    let limited = service
        .match_destinations(tags(&["music"]), Some(2))
        .await?;

    assert_eq!(
        destination_names(&all),
        vec!["New Braunfels", "Dripping Springs", "Kerrville"]
    );
    assert_eq!(destination_names(&limited), vec!["New Braunfels", "Dripping Springs"]);

    Ok(())
}

/// Tests the default and maximum result limits.
///
/// Expected: at most 3 by default and at most 10 when asking for more
#[tokio::test]
async fn applies_limits() -> Result<(), AppError> {
    let store = MemStorage::new();
    for index in 0..12 {
        create_destination(&store, &format!("Town {:02}", index), &["outdoors"]).await?;
    }
    let service = QuizService::new(&store);

    let default = service.match_destinations(tags(&["outdoors"]), None).await?;
    let capped = service
        .match_destinations(tags(&["outdoors"]), Some(50))
        .await?;

    assert_eq!(default.len(), 3);
    assert_eq!(capped.len(), 10);
    assert_eq!(capped[0].destination.name, "Town 00");

    Ok(())
}

/// Tests answers without any tags.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_empty_answers() -> Result<(), AppError> {
    let store = MemStorage::seeded();

    let result = QuizService::new(&store)
        .match_destinations(tags(&["", "  "]), None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests tags nobody has.
///
/// Expected: Ok with no matches
#[tokio::test]
async fn unmatched_tags_give_no_matches() -> Result<(), AppError> {
    let store = MemStorage::seeded();

    let matches = QuizService::new(&store)
        .match_destinations(tags(&["skiing"]), None)
        .await?;

    assert!(matches.is_empty());

    Ok(())
}
