use crate::server::{
    data::{destination::DestinationRepository, mem::MemStorage},
    error::AppError,
    model::destination::DestinationParams,
};

mod create;
mod delete;
mod find_by_slug;
mod update;

/// Destination parameters with the given name and slug and empty optional fields
fn params(name: &str, slug: &str) -> DestinationParams {
    DestinationParams {
        name: name.to_string(),
        slug: slug.to_string(),
        region: None,
        description: format!("About {}", name),
        short_description: None,
        image_url: None,
        latitude: None,
        longitude: None,
        tags: vec!["outdoors".to_string()],
        featured: false,
    }
}
