use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::season::SeasonRepository,
    error::AppError,
    model::season::{SeasonalActivityParams, UpdateSeasonParams},
};

mod create_activity;
mod delete_activity;
mod get_all;
mod update;

fn activity_params(title: &str, sort_order: i32) -> SeasonalActivityParams {
    SeasonalActivityParams {
        title: title.to_string(),
        description: "Test".to_string(),
        location: None,
        image_url: None,
        sort_order,
    }
}
