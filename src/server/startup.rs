use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::mem::MemStorage,
    error::AppError,
    service::{auth::AuthService, season::SeasonService},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the season tables exist
/// before anything reads them.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the same Sqlite database.
///
/// Sessions expire after 7 days of inactivity. The cookie is only marked secure when
/// `SESSION_SECURE` is set, so local development over plain HTTP keeps working.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to apply to the router
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let layer = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(layer)
}

/// HTTP client shared by every integration.
///
/// Redirects are disabled; none of the upstream APIs should redirect.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to build configured HTTP client, using defaults: {}", e);
            reqwest::Client::new()
        })
}

/// Creates the configured admin account, resetting its password when it already exists.
pub async fn seed_admin(store: &MemStorage, config: &Config) {
    AuthService::new(store).ensure_admin(config).await;
}

/// Inserts the starter seasons when the season table is empty.
pub async fn seed_seasons(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    if SeasonService::new(db).seed_defaults().await? {
        tracing::info!("Seeded default seasons");
    }

    Ok(())
}
