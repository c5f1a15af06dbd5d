use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "season")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub months: String,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seasonal_activity::Entity")]
    SeasonalActivity,
}

impl Related<super::seasonal_activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeasonalActivity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
