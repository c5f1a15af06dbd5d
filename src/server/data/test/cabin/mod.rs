use crate::server::{
    data::{cabin::CabinRepository, mem::MemStorage},
    model::cabin::{CabinFilter, CabinParams},
};

mod list;

fn params(name: &str, destination_id: i32, price: i64, max_guests: u8) -> CabinParams {
    CabinParams {
        name: name.to_string(),
        description: String::new(),
        destination_id,
        price_per_night: price,
        bedrooms: 1,
        max_guests,
        amenities: Vec::new(),
        tags: Vec::new(),
        image_url: None,
        booking_url: None,
        rating: None,
        featured: false,
    }
}
