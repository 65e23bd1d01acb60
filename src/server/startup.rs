use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError,
    model::user::CreateUserParams, service::auth::AuthService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Sets up the session layer backed by the application database.
///
/// Sessions are stored in the same Sqlite database as application data and
/// expire after seven days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session layer ready to attach to the router
/// - `Err(AppError)` - Failed to migrate the session store table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());

    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Seeds the bootstrap admin account when no admin exists.
///
/// Checks whether any admin account is present. If not and bootstrap
/// credentials are configured, an admin account is created with them. With
/// no credentials configured the gap is logged so an operator can act.
///
/// # Returns
/// - `Ok(())` - Admin present, seeded, or the gap was logged
/// - `Err(AppError)` - Database or hashing error
pub async fn seed_admin_account(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let repo = UserRepository::new(db);

    if repo.count_admins().await? > 0 {
        return Ok(());
    }

    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::warn!(
            "No admin account exists and ADMIN_EMAIL/ADMIN_PASSWORD are not set; \
             staff endpoints will be unreachable"
        );
        return Ok(());
    };

    let admin = repo
        .create(CreateUserParams {
            name: "Administrator".to_string(),
            email: email.trim().to_lowercase(),
            password_hash: AuthService::hash_password(password)?,
            role: entity::user::UserRole::Admin,
        })
        .await?;

    tracing::info!(user_id = admin.id, "Seeded bootstrap admin account");

    Ok(())
}
