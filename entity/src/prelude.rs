pub use super::season::Entity as Season;
pub use super::seasonal_activity::Entity as SeasonalActivity;
