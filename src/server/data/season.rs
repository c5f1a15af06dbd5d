//! Season data repository for database operations.
//!
//! Seasons and their activities are the only content stored in SQL. This module
//! provides the `SeasonRepository`, which converts SeaORM entity models into
//! domain models at the repository boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::season::{
        CreateSeasonParams, Season, SeasonalActivity, SeasonalActivityParams, UpdateSeasonParams,
    },
};

/// Repository providing database operations for seasons and seasonal activities.
pub struct SeasonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all seasons ordered by `sort_order`, each with its activities.
    ///
    /// # Returns
    /// - `Ok(Vec<Season>)` - Seasons and activities, both ordered by `sort_order` then id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_all(&self) -> Result<Vec<Season>, AppError> {
        let seasons = entity::prelude::Season::find()
            .order_by_asc(entity::season::Column::SortOrder)
            .order_by_asc(entity::season::Column::Id)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(seasons.len());
        for season in seasons {
            result.push(self.with_activities(season).await?);
        }

        Ok(result)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Season>, AppError> {
        let Some(season) = entity::prelude::Season::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.with_activities(season).await?))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Season>, AppError> {
        let season = entity::prelude::Season::find()
            .filter(entity::season::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        match season {
            Some(season) => Ok(Some(self.with_activities(season).await?)),
            None => Ok(None),
        }
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(entity::prelude::Season::find().count(self.db).await?)
    }

    pub async fn create(&self, params: CreateSeasonParams) -> Result<Season, AppError> {
        let season = entity::season::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            description: ActiveValue::Set(params.description),
            months: ActiveValue::Set(params.months),
            image_url: ActiveValue::Set(params.image_url),
            sort_order: ActiveValue::Set(params.sort_order),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Season::from_entity(season, Vec::new()))
    }

    /// Updates a season's descriptive fields and stamps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Season))` - The updated season with its activities
    /// - `Ok(None)` - No season with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateSeasonParams) -> Result<Option<Season>, AppError> {
        let Some(season) = entity::prelude::Season::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::season::ActiveModel = season.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.months = ActiveValue::Set(params.months);
        active.image_url = ActiveValue::Set(params.image_url);
        active.sort_order = ActiveValue::Set(params.sort_order);
        active.updated_at = ActiveValue::Set(Utc::now());

        let season = active.update(self.db).await?;

        Ok(Some(self.with_activities(season).await?))
    }

    /// Adds an activity to a season.
    ///
    /// # Returns
    /// - `Ok(SeasonalActivity)` - The created activity
    /// - `Err(AppError::NotFound)` - The season doesn't exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_activity(
        &self,
        season_id: i32,
        params: SeasonalActivityParams,
    ) -> Result<SeasonalActivity, AppError> {
        let season = entity::prelude::Season::find_by_id(season_id)
            .one(self.db)
            .await?;

        if season.is_none() {
            return Err(AppError::NotFound(format!(
                "Season with id {} not found",
                season_id
            )));
        }

        let activity = entity::seasonal_activity::ActiveModel {
            season_id: ActiveValue::Set(season_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            location: ActiveValue::Set(params.location),
            image_url: ActiveValue::Set(params.image_url),
            sort_order: ActiveValue::Set(params.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SeasonalActivity::from_entity(activity))
    }

    /// Returns `Ok(None)` when the activity doesn't exist.
    pub async fn update_activity(
        &self,
        id: i32,
        params: SeasonalActivityParams,
    ) -> Result<Option<SeasonalActivity>, AppError> {
        let Some(activity) = entity::prelude::SeasonalActivity::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::seasonal_activity::ActiveModel = activity.into();
        active.title = ActiveValue::Set(params.title);
        active.description = ActiveValue::Set(params.description);
        active.location = ActiveValue::Set(params.location);
        active.image_url = ActiveValue::Set(params.image_url);
        active.sort_order = ActiveValue::Set(params.sort_order);

        let activity = active.update(self.db).await?;

        Ok(Some(SeasonalActivity::from_entity(activity)))
    }

    /// Returns `Ok(false)` when the activity doesn't exist.
    pub async fn delete_activity(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::SeasonalActivity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_activities(&self, season: entity::season::Model) -> Result<Season, AppError> {
        let activities = season
            .find_related(entity::prelude::SeasonalActivity)
            .order_by_asc(entity::seasonal_activity::Column::SortOrder)
            .order_by_asc(entity::seasonal_activity::Column::Id)
            .all(self.db)
            .await?;

        Ok(Season::from_entity(season, activities))
    }
}
