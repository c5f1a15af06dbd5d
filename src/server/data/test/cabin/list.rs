use super::*;

/// Tests guest and price filters.
///
/// Expected: only cabins sleeping at least 4 for at most $250 a night
#[tokio::test]
async fn filters_by_guests_and_price() {
    let store = MemStorage::new();
    let repo = CabinRepository::new(&store);
    repo.create(params("Small", 1, 12000, 2)).await;
    repo.create(params("Family", 1, 24000, 6)).await;
    repo.create(params("Lodge", 2, 40000, 10)).await;

    let cabins = repo
        .list(&CabinFilter {
            destination_id: None,
            min_guests: Some(4),
            max_price: Some(25000),
        })
        .await;

    assert_eq!(cabins.len(), 1);
    assert_eq!(cabins[0].name, "Family");
}

/// Tests listing cabins for one destination.
///
/// Expected: cabins of destination 2 only, in id order
#[tokio::test]
async fn lists_by_destination() {
    let store = MemStorage::new();
    let repo = CabinRepository::new(&store);
    repo.create(params("A", 2, 10000, 2)).await;
    repo.create(params("B", 1, 10000, 2)).await;
    repo.create(params("C", 2, 10000, 2)).await;

    let names: Vec<String> = repo
        .by_destination(2)
        .await
        .into_iter()
        .map(|cabin| cabin.name)
        .collect();

    assert_eq!(names, vec!["A", "C"]);
}
