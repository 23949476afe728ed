use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};

use crate::config::Config;

/// Connect to the configured database and bring the schema up to date.
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(&config.database_url).await?;

    tracing::info!("running pending migrations");
    Migrator::up(&db, None).await?;

    Ok(db)
}
