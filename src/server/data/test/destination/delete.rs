use super::*;
use crate::server::{data::cabin::CabinRepository, model::cabin::CabinParams};

/// Tests deleting a destination leaves its cabins in place.
///
/// Expected: true, and the cabin still references the deleted id
#[tokio::test]
async fn keeps_child_rows() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = DestinationRepository::new(&store);
    let destination = repo.create(params("Bandera", "bandera")).await?;

    let cabin = CabinRepository::new(&store)
        .create(CabinParams {
            name: "Medina River Cabin".to_string(),
            description: String::new(),
            destination_id: destination.id,
            price_per_night: 15000,
            bedrooms: 1,
            max_guests: 2,
            amenities: Vec::new(),
            tags: Vec::new(),
            image_url: None,
            booking_url: None,
            rating: None,
            featured: false,
        })
        .await;

    assert!(repo.delete(destination.id).await);
    assert!(repo.get(destination.id).await.is_none());

    let kept = CabinRepository::new(&store).get(cabin.id).await.unwrap();
    assert_eq!(kept.destination_id, destination.id);

    Ok(())
}

/// Tests deleting a destination twice.
///
/// Expected: true then false, and the id is not reused by the next create
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = DestinationRepository::new(&store);
    let destination = repo.create(params("Boerne", "boerne")).await?;

    assert!(repo.delete(destination.id).await);
    assert!(!repo.delete(destination.id).await);

    let next = repo.create(params("Boerne", "boerne")).await?;
    assert_eq!(next.id, destination.id + 1);

    Ok(())
}
