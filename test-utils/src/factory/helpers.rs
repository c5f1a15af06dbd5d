//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a season together with `count` activities ordered by `sort_order`.
///
/// # Returns
/// - `Ok((season, activities))` - The season and its activities in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_season_with_activities(
    db: &DatabaseConnection,
    count: usize,
) -> Result<
    (
        entity::season::Model,
        Vec<entity::seasonal_activity::Model>,
    ),
    DbErr,
> {
    let season = crate::factory::season::create_season(db).await?;

    let mut activities = Vec::with_capacity(count);
    for position in 0..count {
        let activity =
            crate::factory::seasonal_activity::SeasonalActivityFactory::new(db, season.id)
                .sort_order(position as i32)
                .build()
                .await?;
        activities.push(activity);
    }

    Ok((season, activities))
}
