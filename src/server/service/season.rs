use sea_orm::DatabaseConnection;

use crate::server::{
    data::season::SeasonRepository,
    error::AppError,
    model::season::{
        CreateSeasonParams, Season, SeasonalActivity, SeasonalActivityParams, UpdateSeasonParams,
    },
};

/// Starter seasons inserted into an empty table: name, slug, months, description
/// and activities as (title, description, location).
const DEFAULT_SEASONS: &[(&str, &str, &str, &str, &[(&str, &str, &str)])] = &[
    (
        "Spring",
        "spring",
        "March - May",
        "Bluebonnets line the back roads and the rivers run cool and clear.",
        &[
            (
                "Wildflower Drive",
                "Follow the Willow City Loop when the bluebonnets peak.",
                "Fredericksburg",
            ),
            (
                "Peach Blossom Tour",
                "Orchards along US 290 bloom ahead of the summer harvest.",
                "Johnson City",
            ),
        ],
    ),
    (
        "Summer",
        "summer",
        "June - August",
        "Long days on the Guadalupe and Blanco rivers, peaches by the bushel.",
        &[
            (
                "Tubing the Guadalupe",
                "Float the river through cypress-lined banks.",
                "New Braunfels",
            ),
            (
                "Swimming at Jacob's Well",
                "Reserve a swim slot at the artesian spring.",
                "Wimberley",
            ),
        ],
    ),
    (
        "Fall",
        "fall",
        "September - November",
        "Harvest festivals, wine releases and maple color in the canyons.",
        &[
            (
                "Grape Harvest",
                "Wineries along the 290 corridor celebrate the crush.",
                "Fredericksburg",
            ),
            (
                "Lost Maples Foliage",
                "Bigtooth maples turn red and gold in early November.",
                "Kerrville",
            ),
        ],
    ),
    (
        "Winter",
        "winter",
        "December - February",
        "Holiday lights, quiet trails and fireside cabin weekends.",
        &[
            (
                "Festival of Lights",
                "The courthouse square glows through the holidays.",
                "Johnson City",
            ),
            (
                "Cabin Weekend",
                "Cool nights are made for a hot tub under the stars.",
                "Dripping Springs",
            ),
        ],
    ),
];

pub struct SeasonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Season>, AppError> {
        SeasonRepository::new(self.db).get_all().await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Season, AppError> {
        SeasonRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Season '{}' not found", slug)))
    }

    /// Updates a season's editable fields and stamps `updated_at`
    pub async fn update(&self, params: UpdateSeasonParams) -> Result<Season, AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest("Season name is required".to_string()));
        }

        let id = params.id;
        SeasonRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Season with id {} not found", id)))
    }

    pub async fn create_activity(
        &self,
        season_id: i32,
        params: SeasonalActivityParams,
    ) -> Result<SeasonalActivity, AppError> {
        validate_activity(&params)?;
        SeasonRepository::new(self.db)
            .create_activity(season_id, params)
            .await
    }

    pub async fn update_activity(
        &self,
        id: i32,
        params: SeasonalActivityParams,
    ) -> Result<SeasonalActivity, AppError> {
        validate_activity(&params)?;
        SeasonRepository::new(self.db)
            .update_activity(id, params)
            .await?
            .ok_or_else(|| activity_not_found(id))
    }

    pub async fn delete_activity(&self, id: i32) -> Result<(), AppError> {
        if !SeasonRepository::new(self.db).delete_activity(id).await? {
            return Err(activity_not_found(id));
        }
        Ok(())
    }

    /// Inserts the four starter seasons when the table is empty
    ///
    /// # Returns
    /// - `Ok(true)` - Seasons were inserted
    /// - `Ok(false)` - Seasons already existed, nothing changed
    pub async fn seed_defaults(&self) -> Result<bool, AppError> {
        let repo = SeasonRepository::new(self.db);
        if repo.count().await? > 0 {
            return Ok(false);
        }

        for (index, (name, slug, months, description, activities)) in
            DEFAULT_SEASONS.iter().enumerate()
        {
            let season = repo
                .create(CreateSeasonParams {
                    name: name.to_string(),
                    slug: slug.to_string(),
                    description: description.to_string(),
                    months: months.to_string(),
                    image_url: None,
                    sort_order: index as i32,
                })
                .await?;

            for (order, (title, description, location)) in activities.iter().enumerate() {
                repo.create_activity(
                    season.id,
                    SeasonalActivityParams {
                        title: title.to_string(),
                        description: description.to_string(),
                        location: Some(location.to_string()),
                        image_url: None,
                        sort_order: order as i32,
                    },
                )
                .await?;
            }
        }

        tracing::info!("Seeded {} default seasons", DEFAULT_SEASONS.len());

        Ok(true)
    }
}

fn activity_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Seasonal activity with id {} not found", id))
}

fn validate_activity(params: &SeasonalActivityParams) -> Result<(), AppError> {
    if params.title.is_empty() {
        return Err(AppError::BadRequest("Activity title is required".to_string()));
    }
    Ok(())
}
