use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_season_table::Season;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeasonalActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(SeasonalActivity::Id))
                    .col(integer(SeasonalActivity::SeasonId))
                    .col(string(SeasonalActivity::Title))
                    .col(text(SeasonalActivity::Description))
                    .col(string_null(SeasonalActivity::Location))
                    .col(string_null(SeasonalActivity::ImageUrl))
                    .col(integer(SeasonalActivity::SortOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seasonal_activity_season_id")
                            .from(SeasonalActivity::Table, SeasonalActivity::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeasonalActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeasonalActivity {
    Table,
    Id,
    SeasonId,
    Title,
    Description,
    Location,
    ImageUrl,
    SortOrder,
}
