//! Test context structure and utilities.
//!
//! The `TestContext` returned by `TestBuilder` wraps an in-memory SQLite
//! database with the requested tables already created. Fixture rows are
//! inserted through the `factory` module.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment handle produced by [`TestBuilder::build`](crate::TestBuilder::build).
pub struct TestContext {
    /// Connection to an in-memory SQLite database.
    pub db: DatabaseConnection,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Execute CREATE TABLE statements queued by the builder.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
