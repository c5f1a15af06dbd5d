use test_utils::builder::TestBuilder;

use crate::server::{
    model::season::{SeasonalActivityParams, UpdateSeasonParams},
    service::season::SeasonService,
};

use super::*;

mod seed_defaults;
