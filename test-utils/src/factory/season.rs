//! Season factory for creating test season rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seasons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let season = SeasonFactory::new(&db)
///     .name("Spring")
///     .slug("spring")
///     .build()
///     .await?;
/// ```
pub struct SeasonFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    description: String,
    months: String,
    image_url: Option<String>,
    sort_order: i32,
}

impl<'a> SeasonFactory<'a> {
    /// Creates a new SeasonFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Season {id}"`, slug: `"season-{id}"`
    /// - months: `"March - May"`
    /// - sort_order: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Season {}", id),
            slug: format!("season-{}", id),
            description: "Test season description".to_string(),
            months: "March - May".to_string(),
            image_url: None,
            sort_order: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn months(mut self, months: impl Into<String>) -> Self {
        self.months = months.into();
        self
    }

    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Builds and inserts the season into the database.
    pub async fn build(self) -> Result<entity::season::Model, DbErr> {
        entity::season::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(self.description),
            months: ActiveValue::Set(self.months),
            image_url: ActiveValue::Set(self.image_url),
            sort_order: ActiveValue::Set(self.sort_order),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a season with default values.
///
/// Shorthand for `SeasonFactory::new(db).build().await`.
pub async fn create_season(db: &DatabaseConnection) -> Result<entity::season::Model, DbErr> {
    SeasonFactory::new(db).build().await
}
