use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        attraction::{self, ATTRACTION_TAG},
        auth::{self, AUTH_TAG},
        blog::{self, BLOG_TAG},
        cabin::{self, CABIN_TAG},
        calendar::{self, CALENDAR_TAG},
        chat::{self, CHAT_TAG},
        destination::{self, DESTINATION_TAG},
        event::{self, EVENT_TAG},
        health::{self, HEALTH_TAG},
        newsletter::{self, NEWSLETTER_TAG},
        quiz::{self, QUIZ_TAG},
        season::{self, SEASON_TAG},
        trip::{self, TRIP_TAG},
        upload::{self, UPLOAD_TAG},
        weather::{self, WEATHER_TAG},
    },
    model::upload::MAX_UPLOAD_BYTES,
    service::upload::LOCAL_UPLOAD_PREFIX,
    state::AppState,
};

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Hill Country Guide API", description = "Texas Hill Country travel guide backend"),
    paths(
        auth::login,
        auth::logout,
        auth::get_user,
        destination::get_destinations,
        destination::create_destination,
        destination::get_destination,
        destination::get_destination_by_slug,
        destination::update_destination,
        destination::delete_destination,
        destination::get_destination_events,
        destination::get_destination_attractions,
        destination::get_destination_cabins,
        event::get_events,
        event::create_event,
        event::get_event,
        event::update_event,
        event::delete_event,
        attraction::get_attractions,
        attraction::create_attraction,
        attraction::get_attraction,
        attraction::update_attraction,
        attraction::delete_attraction,
        cabin::get_cabins,
        cabin::create_cabin,
        cabin::get_cabin,
        cabin::update_cabin,
        cabin::delete_cabin,
        blog::get_posts,
        blog::get_post_by_slug,
        blog::create_post,
        blog::update_post,
        blog::delete_post,
        season::get_seasons,
        season::get_season_by_slug,
        season::update_season,
        season::create_activity,
        season::update_activity,
        season::delete_activity,
        newsletter::subscribe,
        newsletter::unsubscribe,
        newsletter::get_subscriptions,
        newsletter::delete_subscription,
        newsletter::export_subscriptions,
        calendar::get_calendar,
        calendar::get_calendar_month,
        calendar::download_calendar,
        trip::create_itinerary,
        quiz::get_questions,
        quiz::match_quiz,
        chat::chat,
        upload::upload_image,
        weather::get_weather,
        health::health,
    ),
    tags(
        (name = AUTH_TAG, description = "Admin login and session"),
        (name = DESTINATION_TAG, description = "Hill Country towns and regions"),
        (name = EVENT_TAG, description = "Locally managed events"),
        (name = ATTRACTION_TAG, description = "Things to see and do"),
        (name = CABIN_TAG, description = "Cabin rentals"),
        (name = BLOG_TAG, description = "Blog posts"),
        (name = SEASON_TAG, description = "Seasonal guides and activities"),
        (name = NEWSLETTER_TAG, description = "Newsletter subscriptions"),
        (name = CALENDAR_TAG, description = "Merged public calendar"),
        (name = TRIP_TAG, description = "Itinerary generation"),
        (name = QUIZ_TAG, description = "Travel style quiz"),
        (name = CHAT_TAG, description = "Travel assistant"),
        (name = UPLOAD_TAG, description = "Image uploads"),
        (name = WEATHER_TAG, description = "Current conditions"),
        (name = HEALTH_TAG, description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Builds every API route plus Swagger UI and the local upload directory.
pub fn router(config: &Config) -> Router<AppState> {
    Router::new()
        .merge(api_routes())
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .nest_service(LOCAL_UPLOAD_PREFIX, ServeDir::new(&config.upload_dir))
        .layer(cors_layer(config))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/destinations",
            get(destination::get_destinations).post(destination::create_destination),
        )
        .route(
            "/api/destinations/{id}",
            get(destination::get_destination)
                .put(destination::update_destination)
                .delete(destination::delete_destination),
        )
        .route(
            "/api/destinations/slug/{slug}",
            get(destination::get_destination_by_slug),
        )
        .route(
            "/api/destinations/{id}/events",
            get(destination::get_destination_events),
        )
        .route(
            "/api/destinations/{id}/attractions",
            get(destination::get_destination_attractions),
        )
        .route(
            "/api/destinations/{id}/cabins",
            get(destination::get_destination_cabins),
        )
        .route("/api/events", get(event::get_events).post(event::create_event))
        .route(
            "/api/events/{id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
        .route(
            "/api/attractions",
            get(attraction::get_attractions).post(attraction::create_attraction),
        )
        .route(
            "/api/attractions/{id}",
            get(attraction::get_attraction)
                .put(attraction::update_attraction)
                .delete(attraction::delete_attraction),
        )
        .route("/api/cabins", get(cabin::get_cabins).post(cabin::create_cabin))
        .route(
            "/api/cabins/{id}",
            get(cabin::get_cabin)
                .put(cabin::update_cabin)
                .delete(cabin::delete_cabin),
        )
        .route("/api/blog", get(blog::get_posts).post(blog::create_post))
        .route("/api/blog/{slug}", get(blog::get_post_by_slug))
        .route(
            "/api/blog/id/{id}",
            put(blog::update_post).delete(blog::delete_post),
        )
        .route("/api/seasons", get(season::get_seasons))
        .route("/api/seasons/{slug}", get(season::get_season_by_slug))
        .route("/api/seasons/id/{id}", put(season::update_season))
        .route(
            "/api/seasons/id/{id}/activities",
            post(season::create_activity),
        )
        .route(
            "/api/seasons/activities/{id}",
            put(season::update_activity).delete(season::delete_activity),
        )
        .route("/api/newsletter/subscribe", post(newsletter::subscribe))
        .route("/api/newsletter/unsubscribe", post(newsletter::unsubscribe))
        .route("/api/admin/newsletter", get(newsletter::get_subscriptions))
        .route(
            "/api/admin/newsletter/export",
            get(newsletter::export_subscriptions),
        )
        .route(
            "/api/admin/newsletter/{id}",
            axum::routing::delete(newsletter::delete_subscription),
        )
        .route("/api/calendar", get(calendar::get_calendar))
        .route(
            "/api/calendar/month/{year}/{month}",
            get(calendar::get_calendar_month),
        )
        .route("/api/calendar/download.ics", get(calendar::download_calendar))
        .route("/api/trip-planner/itinerary", post(trip::create_itinerary))
        .route("/api/quiz/questions", get(quiz::get_questions))
        .route("/api/quiz/match", post(quiz::match_quiz))
        .route("/api/chat", post(chat::chat))
        .route(
            "/api/admin/upload",
            post(upload::upload_image)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
        .route("/api/weather/{destination_id}", get(weather::get_weather))
        .route("/api/health", get(health::health))
}

/// Credentialed CORS for the configured frontend origin, read-only CORS for anyone
/// otherwise.
fn cors_layer(config: &Config) -> CorsLayer {
    let origin = config
        .cors_origin
        .as_deref()
        .and_then(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS_ORIGIN '{}': {}", origin, e);
                None
            }
        });

    match origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers(Any),
    }
}
