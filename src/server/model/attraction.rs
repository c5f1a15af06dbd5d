use crate::model::attraction::{AttractionDto, AttractionInputDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Attraction {
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

impl Attraction {
    pub fn from_params(id: i32, params: AttractionParams) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            destination_id: params.destination_id,
            category: params.category,
            address: params.address,
            website: params.website,
            image_url: params.image_url,
            tags: params.tags,
            featured: params.featured,
        }
    }

    /// Whether any of the attraction's tags appears in `interests` (lowercase).
    pub fn shares_tag_with(&self, interests: &[String]) -> bool {
        self.tags
            .iter()
            .any(|tag| interests.contains(&tag.to_lowercase()))
    }

    pub fn into_dto(self) -> AttractionDto {
        AttractionDto {
            id: self.id,
            name: self.name,
            description: self.description,
            destination_id: self.destination_id,
            category: self.category,
            address: self.address,
            website: self.website,
            image_url: self.image_url,
            tags: self.tags,
            featured: self.featured,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AttractionParams {
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

impl AttractionParams {
    pub fn from_dto(dto: AttractionInputDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            destination_id: dto.destination_id,
            category: dto.category,
            address: dto.address,
            website: dto.website,
            image_url: dto.image_url,
            tags: dto.tags,
            featured: dto.featured,
        }
    }
}
