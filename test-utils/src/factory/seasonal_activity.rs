//! Seasonal activity factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating activities that belong to an existing season.
pub struct SeasonalActivityFactory<'a> {
    db: &'a DatabaseConnection,
    season_id: i32,
    title: String,
    description: String,
    location: Option<String>,
    image_url: Option<String>,
    sort_order: i32,
}

impl<'a> SeasonalActivityFactory<'a> {
    /// Creates a new factory for `season_id`.
    ///
    /// Defaults:
    /// - title: `"Activity {id}"`
    /// - location: `Some("Fredericksburg")`
    /// - sort_order: `0`
    pub fn new(db: &'a DatabaseConnection, season_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            season_id,
            title: format!("Activity {}", id),
            description: "Test activity description".to_string(),
            location: Some("Fredericksburg".to_string()),
            image_url: None,
            sort_order: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Builds and inserts the activity into the database.
    pub async fn build(self) -> Result<entity::seasonal_activity::Model, DbErr> {
        entity::seasonal_activity::ActiveModel {
            season_id: ActiveValue::Set(self.season_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            location: ActiveValue::Set(self.location),
            image_url: ActiveValue::Set(self.image_url),
            sort_order: ActiveValue::Set(self.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an activity with default values for `season_id`.
pub async fn create_activity(
    db: &DatabaseConnection,
    season_id: i32,
) -> Result<entity::seasonal_activity::Model, DbErr> {
    SeasonalActivityFactory::new(db, season_id).build().await
}
