pub use sea_orm_migration::prelude::*;

mod m20260829_000001_user;
mod m20260829_000002_alliance;
mod m20260829_000003_alliance_category;
mod m20260829_000004_alliance_member;
mod m20260829_000005_npc;
mod m20260829_000006_npc_location;
mod m20260829_000007_npc_interaction;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_user::Migration),
            Box::new(m20260829_000002_alliance::Migration),
            Box::new(m20260829_000003_alliance_category::Migration),
            Box::new(m20260829_000004_alliance_member::Migration),
            Box::new(m20260829_000005_npc::Migration),
            Box::new(m20260829_000006_npc_location::Migration),
            Box::new(m20260829_000007_npc_interaction::Migration),
        ]
    }
}
