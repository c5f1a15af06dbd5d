//! Seasonal content domain models.
//!
//! Seasons are the one part of the data model stored in SQL; these types are
//! converted from SeaORM entity models at the repository boundary.

use chrono::{DateTime, Utc};

use crate::model::season::{
    SeasonDto, SeasonalActivityDto, SeasonalActivityInputDto, UpdateSeasonDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalActivity {
    pub id: i32,
    pub season_id: i32,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
}

impl SeasonalActivity {
    pub fn from_entity(entity: entity::seasonal_activity::Model) -> Self {
        Self {
            id: entity.id,
            season_id: entity.season_id,
            title: entity.title,
            description: entity.description,
            location: entity.location,
            image_url: entity.image_url,
            sort_order: entity.sort_order,
        }
    }

    pub fn into_dto(self) -> SeasonalActivityDto {
        SeasonalActivityDto {
            id: self.id,
            season_id: self.season_id,
            title: self.title,
            description: self.description,
            location: self.location,
            image_url: self.image_url,
            sort_order: self.sort_order,
        }
    }
}

/// Season with its activities ordered by `sort_order`.
#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub months: String,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub updated_at: DateTime<Utc>,
    pub activities: Vec<SeasonalActivity>,
}

impl Season {
    /// Converts a season row and its activity rows to the domain model.
    ///
    /// # Arguments
    /// - `entity` - The season row
    /// - `activities` - Activity rows already ordered by `sort_order`
    pub fn from_entity(
        entity: entity::season::Model,
        activities: Vec<entity::seasonal_activity::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            months: entity.months,
            image_url: entity.image_url,
            sort_order: entity.sort_order,
            updated_at: entity.updated_at,
            activities: activities
                .into_iter()
                .map(SeasonalActivity::from_entity)
                .collect(),
        }
    }

    pub fn into_dto(self) -> SeasonDto {
        SeasonDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            months: self.months,
            image_url: self.image_url,
            sort_order: self.sort_order,
            updated_at: self.updated_at,
            activities: self
                .activities
                .into_iter()
                .map(SeasonalActivity::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSeasonParams {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub months: String,
    pub image_url: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateSeasonParams {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub months: String,
    pub image_url: Option<String>,
    pub sort_order: i32,
}

impl UpdateSeasonParams {
    pub fn from_dto(id: i32, dto: UpdateSeasonDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            months: dto.months,
            image_url: dto.image_url,
            sort_order: dto.sort_order,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeasonalActivityParams {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
}

impl SeasonalActivityParams {
    pub fn from_dto(dto: SeasonalActivityInputDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            description: dto.description,
            location: dto.location,
            image_url: dto.image_url,
            sort_order: dto.sort_order,
        }
    }
}
