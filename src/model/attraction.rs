use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttractionDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub destination_id: i32,
    pub category: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttractionInputDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub destination_id: i32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}
