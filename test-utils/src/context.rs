use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated test environment: an in-memory SQLite database and, on demand, a
/// session backed by the same database.
///
/// Both members start out as `None` and are created on first access, so a
/// data-layer test never pays for session setup and a pure parsing test never
/// opens a database at all.
pub struct TestContext {
    /// Connection to the per-test in-memory SQLite instance.
    pub db: Option<DatabaseConnection>,

    /// Session stored in the same SQLite instance, for auth guard tests.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates an empty context with no database connection yet.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets the database connection, opening the in-memory instance on first
    /// call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The live connection
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Executes the given CREATE TABLE statements against the test database.
    ///
    /// Called by `TestBuilder::build()` with the schemas derived from the
    /// entity models; tables are created in the order given, so referenced
    /// tables must come before the tables holding their foreign keys.
    ///
    /// # Returns
    /// - `Ok(())` - All tables created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets the test session, creating it on first call.
    ///
    /// First use migrates the tower-sessions table into the test database and
    /// builds a `Session` over an `SqliteStore` on the same pool, so session
    /// state and application data share one SQLite instance.
    ///
    /// # Returns
    /// - `Ok(&Session)` - The live session
    /// - `Err(TestError::Database)` - Database or session-table setup failed
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                let session_ref = self.session.insert(session);

                Ok(&*session_ref) // Re-borrow as immutable
            }
        }
    }

    /// Gets the database and session together.
    ///
    /// Initializes both if needed and hands back immutable references, which
    /// sidesteps the borrow conflict of calling `database()` and `session()`
    /// back to back.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - Both members, initialized
    /// - `Err(TestError::Database)` - Initialization failed
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        Ok((self.db.as_ref().unwrap(), self.session.as_ref().unwrap()))
    }
}
