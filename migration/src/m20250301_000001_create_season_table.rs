use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Season::Table)
                    .if_not_exists()
                    .col(pk_auto(Season::Id))
                    .col(string(Season::Name))
                    .col(string_uniq(Season::Slug))
                    .col(text(Season::Description))
                    .col(string(Season::Months))
                    .col(string_null(Season::ImageUrl))
                    .col(integer(Season::SortOrder).default(0))
                    .col(
                        timestamp(Season::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Season::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Season {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Months,
    ImageUrl,
    SortOrder,
    UpdatedAt,
}
