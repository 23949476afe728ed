//! Declarative test builder.
//!
//! Configuration methods are chained and queued; everything executes during the
//! final `build()` call, which returns a ready [`TestContext`].

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, factory, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_core_tables: bool,
    users: Vec<String>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_core_tables: false,
            users: Vec::new(),
        }
    }

    /// Create every table of the domain schema: users, alliances, categories,
    /// members, NPCs, NPC locations, and NPC interactions.
    pub fn with_core_tables(mut self) -> Self {
        self.include_core_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queue a user fixture to insert during `build()`.
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Create all configured tables and insert queued fixtures.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_core_tables {
            let schema = Schema::new(DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Alliance),
                schema.create_table_from_entity(entity::prelude::AllianceCategory),
                schema.create_table_from_entity(entity::prelude::AllianceMember),
                schema.create_table_from_entity(entity::prelude::Npc),
                schema.create_table_from_entity(entity::prelude::NpcLocation),
                schema.create_table_from_entity(entity::prelude::NpcInteraction),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for username in self.users {
            factory::user::insert_user(&setup.db, &username).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
