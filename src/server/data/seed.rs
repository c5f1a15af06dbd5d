//! Starter content loaded into `MemStorage::seeded()`.

use chrono::{DateTime, NaiveDate, Utc};

use crate::server::{
    data::mem::Tables,
    model::{
        attraction::{Attraction, AttractionParams},
        blog::{BlogPost, BlogPostParams},
        cabin::{Cabin, CabinParams},
        destination::{Destination, DestinationParams},
        event::{Event, EventParams},
    },
};

/// UTC instant for a seed date. Hours are UTC; 16:00 is 10:00 in Central Time.
fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

struct DestinationSeed {
    name: &'static str,
    slug: &'static str,
    region: &'static str,
    short: &'static str,
    description: &'static str,
    coordinates: (f64, f64),
    tags: &'static [&'static str],
    featured: bool,
}

const DESTINATIONS: &[DestinationSeed] = &[
    DestinationSeed {
        name: "Fredericksburg",
        slug: "fredericksburg",
        region: "Gillespie County",
        short: "German heritage, peaches and the heart of Texas wine country.",
        description: "Founded by German immigrants in 1846, Fredericksburg pairs a walkable Main Street of galleries and biergartens with dozens of wineries along Highway 290.",
        coordinates: (30.2752, -98.8720),
        tags: &["wine", "history", "food", "shopping"],
        featured: true,
    },
    DestinationSeed {
        name: "Wimberley",
        slug: "wimberley",
        region: "Hays County",
        short: "Swimming holes, artists and Cypress Creek.",
        description: "Wimberley sits where Cypress Creek meets the Blanco River. Blue Hole and Jacob's Well draw swimmers all summer while the square fills with galleries and market days.",
        coordinates: (29.9974, -98.0986),
        tags: &["water", "swimming", "art", "relaxation"],
        featured: true,
    },
    DestinationSeed {
        name: "Dripping Springs",
        slug: "dripping-springs",
        region: "Hays County",
        short: "The wedding capital of Texas and a dark-sky community.",
        description: "Distilleries, breweries and wedding venues line the roads around Dripping Springs, and Hamilton Pool Preserve is a short drive away.",
        coordinates: (30.1902, -98.0867),
        tags: &["outdoors", "stargazing", "food", "music"],
        featured: false,
    },
    DestinationSeed {
        name: "New Braunfels",
        slug: "new-braunfels",
        region: "Comal County",
        short: "Tubing the Comal and dancing at Gruene Hall.",
        description: "New Braunfels is home to the spring-fed Comal River, the Guadalupe tubing outfitters and historic Gruene, where Gruene Hall has hosted live music since 1878.",
        coordinates: (29.7030, -98.1245),
        tags: &["water", "music", "family", "nightlife"],
        featured: true,
    },
    DestinationSeed {
        name: "Johnson City",
        slug: "johnson-city",
        region: "Blanco County",
        short: "LBJ country, Pedernales Falls and holiday lights.",
        description: "Johnson City holds the boyhood home of President Lyndon B. Johnson, the Pedernales Falls State Park trails and one of the largest holiday light displays in Texas.",
        coordinates: (30.2769, -98.4117),
        tags: &["history", "outdoors", "hiking", "family"],
        featured: false,
    },
    DestinationSeed {
        name: "Kerrville",
        slug: "kerrville",
        region: "Kerr County",
        short: "Guadalupe River parks and a famous folk festival.",
        description: "Kerrville stretches along the Guadalupe River with a riverside trail, the Museum of Western Art and the long-running Kerrville Folk Festival each spring.",
        coordinates: (30.0474, -99.1403),
        tags: &["outdoors", "music", "art", "hiking"],
        featured: false,
    },
];

fn seed_destinations(tables: &mut Tables) {
    for seed in DESTINATIONS {
        tables.destinations.insert_with(|id| {
            Destination::from_params(
                id,
                DestinationParams {
                    name: seed.name.to_string(),
                    slug: seed.slug.to_string(),
                    region: Some(seed.region.to_string()),
                    description: seed.description.to_string(),
                    short_description: Some(seed.short.to_string()),
                    image_url: Some(format!("/images/destinations/{}.jpg", seed.slug)),
                    latitude: Some(seed.coordinates.0),
                    longitude: Some(seed.coordinates.1),
                    tags: strings(seed.tags),
                    featured: seed.featured,
                },
            )
        });
    }
}

/// Looks up a seeded destination id by slug.
fn destination_id(tables: &Tables, slug: &str) -> Option<i32> {
    tables
        .destinations
        .values()
        .find(|destination| destination.slug == slug)
        .map(|destination| destination.id)
}

fn seed_events(tables: &mut Tables) {
    let events = [
        (
            "Fredericksburg Wine Road Walkabout",
            "Tastings and small bites at participating wineries along Highway 290.",
            at(2026, 4, 18, 16),
            Some(at(2026, 4, 19, 0)),
            "fredericksburg",
            "wine",
            None,
        ),
        (
            "Wimberley Market Days",
            "Over 400 vendors of art, antiques and food at Lions Field.",
            at(2026, 5, 2, 13),
            Some(at(2026, 5, 2, 21)),
            "wimberley",
            "market",
            Some("first Saturday, March through December"),
        ),
        (
            "Kerrville Folk Festival",
            "Eighteen days of songwriters on the Quiet Valley Ranch stages.",
            at(2026, 5, 21, 23),
            Some(at(2026, 6, 8, 4)),
            "kerrville",
            "music",
            None,
        ),
        (
            "Wurstfest",
            "Ten days celebrating German sausage, beer and polka music.",
            at(2026, 11, 6, 22),
            Some(at(2026, 11, 16, 4)),
            "new-braunfels",
            "festival",
            None,
        ),
        (
            "Johnson City Lights Spectacular",
            "Over a million lights on the Blanco County Courthouse and surrounding streets.",
            at(2026, 11, 27, 0),
            None,
            "johnson-city",
            "holiday",
            Some("nightly through early January"),
        ),
        (
            "Dripping Springs Songwriters Festival",
            "Songwriter rounds across venues in historic downtown Dripping Springs.",
            at(2026, 10, 9, 22),
            Some(at(2026, 10, 11, 4)),
            "dripping-springs",
            "music",
            None,
        ),
    ];

    for (title, description, start, end, slug, category, recurrence) in events {
        let destination_id = destination_id(tables, slug);
        tables.events.insert_with(|id| {
            Event::from_params(
                id,
                EventParams {
                    title: title.to_string(),
                    description: description.to_string(),
                    start_date: start,
                    end_date: end,
                    location: None,
                    destination_id,
                    category: Some(category.to_string()),
                    image_url: None,
                    is_recurring: recurrence.is_some(),
                    recurrence_pattern: recurrence.map(str::to_string),
                    featured: false,
                },
            )
        });
    }
}

fn seed_attractions(tables: &mut Tables) {
    let attractions: &[(&str, &str, &str, &str, &[&str])] = &[
        ("National Museum of the Pacific War", "fredericksburg", "museum", "Six acres of exhibits on the Pacific campaign of World War II.", &["history", "family"]),
        ("Enchanted Rock State Natural Area", "fredericksburg", "park", "A pink granite dome with summit trails and rock climbing.", &["outdoors", "hiking", "stargazing"]),
        ("Wine Road 290", "fredericksburg", "winery", "More than fifty tasting rooms between Fredericksburg and Johnson City.", &["wine", "food"]),
        ("Jacob's Well Natural Area", "wimberley", "swimming", "An artesian spring and one of the longest underwater caves in Texas.", &["water", "swimming", "outdoors"]),
        ("Blue Hole Regional Park", "wimberley", "swimming", "A cypress-shaded swimming hole on Cypress Creek.", &["water", "swimming", "family"]),
        ("Wimberley Glass Works", "wimberley", "art", "Watch glassblowers at work and browse the gallery.", &["art", "shopping"]),
        ("Hamilton Pool Preserve", "dripping-springs", "park", "A collapsed grotto with a 50-foot waterfall.", &["water", "outdoors", "hiking"]),
        ("Deep Eddy Distillery", "dripping-springs", "distillery", "Tastings and cocktails at the vodka distillery.", &["food", "nightlife"]),
        ("Gruene Hall", "new-braunfels", "music", "The oldest continually operating dance hall in Texas.", &["music", "nightlife", "history"]),
        ("Schlitterbahn", "new-braunfels", "waterpark", "Riverside waterpark built around the Comal River.", &["water", "family"]),
        ("Pedernales Falls State Park", "johnson-city", "park", "Limestone terraces and river trails.", &["outdoors", "hiking", "water"]),
        ("LBJ National Historical Park", "johnson-city", "museum", "Boyhood home and ranch of President Johnson.", &["history", "family"]),
        ("Museum of Western Art", "kerrville", "museum", "Paintings and sculpture of the American West.", &["art", "history"]),
        ("Kerrville River Trail", "kerrville", "park", "Six miles of paved trail along the Guadalupe River.", &["outdoors", "hiking", "family"]),
    ];

    for (name, slug, category, description, tags) in attractions {
        let Some(destination_id) = destination_id(tables, slug) else {
            continue;
        };
        tables.attractions.insert_with(|id| {
            Attraction::from_params(
                id,
                AttractionParams {
                    name: name.to_string(),
                    description: description.to_string(),
                    destination_id,
                    category: Some(category.to_string()),
                    address: None,
                    website: None,
                    image_url: None,
                    tags: strings(tags),
                    featured: false,
                },
            )
        });
    }
}

fn seed_cabins(tables: &mut Tables) {
    let cabins: &[(&str, &str, i64, u8, u8, f32, &[&str])] = &[
        ("Peach Orchard Cottage", "fredericksburg", 18900, 1, 2, 4.8, &["Hot tub", "Kitchenette", "Wi-Fi"]),
        ("Vineyard View Haus", "fredericksburg", 32500, 3, 6, 4.6, &["Fire pit", "Full kitchen", "Porch swing"]),
        ("Cypress Creek Cabin", "wimberley", 22000, 2, 4, 4.9, &["Creek access", "Hammock", "Grill"]),
        ("Dark Sky Retreat", "dripping-springs", 27500, 2, 4, 4.7, &["Telescope", "Outdoor shower", "Wi-Fi"]),
        ("Comal River Bungalow", "new-braunfels", 24900, 2, 5, 4.5, &["River access", "Tubes", "Grill"]),
        ("Guadalupe Bluff Lodge", "kerrville", 29900, 3, 8, 4.4, &["Deck", "Fire pit", "Full kitchen"]),
    ];

    for (name, slug, price, bedrooms, max_guests, rating, amenities) in cabins {
        let Some(destination_id) = destination_id(tables, slug) else {
            continue;
        };
        tables.cabins.insert_with(|id| {
            Cabin::from_params(
                id,
                CabinParams {
                    name: name.to_string(),
                    description: format!("A Hill Country getaway sleeping up to {}.", max_guests),
                    destination_id,
                    price_per_night: *price,
                    bedrooms: *bedrooms,
                    max_guests: *max_guests,
                    amenities: strings(amenities),
                    tags: Vec::new(),
                    image_url: None,
                    booking_url: None,
                    rating: Some(*rating),
                    featured: *rating >= 4.8,
                },
            )
        });
    }
}

fn seed_blog_posts(tables: &mut Tables) {
    let posts = [
        (
            "Chasing Bluebonnets: A Spring Wildflower Drive",
            "chasing-bluebonnets",
            "The best back roads for wildflowers between Fredericksburg and Llano.",
            "## When to go\n\nPeak bluebonnet season runs from late March to mid April.\n\n## The route\n\n1. Start on the **Willow City Loop** north of Fredericksburg.\n2. Continue to Llano for barbecue.\n3. Return through Enchanted Rock.\n",
            "spring",
            at(2026, 3, 15, 15),
        ),
        (
            "Five Swimming Holes Worth the Drive",
            "five-swimming-holes",
            "Cool off in spring-fed water all summer long.",
            "Summer in the Hill Country means **swimming holes**.\n\n| Spot | Town |\n|---|---|\n| Jacob's Well | Wimberley |\n| Blue Hole | Wimberley |\n| Hamilton Pool | Dripping Springs |\n| Landa Park | New Braunfels |\n| Krause Springs | Spicewood |\n\nReservations are required at several of these in peak season.\n",
            "summer",
            at(2026, 6, 1, 15),
        ),
    ];

    for (title, slug, excerpt, content, category, published_at) in posts {
        tables.blog_posts.insert_with(|id| {
            BlogPost::from_params(
                id,
                BlogPostParams {
                    title: title.to_string(),
                    slug: slug.to_string(),
                    excerpt: Some(excerpt.to_string()),
                    content: content.to_string(),
                    author: "Hill Country Guide".to_string(),
                    category: Some(category.to_string()),
                    tags: vec![category.to_string()],
                    image_url: None,
                    published: true,
                },
                published_at,
            )
        });
    }
}

/// Fills empty tables with the starter content.
pub fn seed(tables: &mut Tables) {
    seed_destinations(tables);
    seed_events(tables);
    seed_attractions(tables);
    seed_cabins(tables);
    seed_blog_posts(tables);
}
