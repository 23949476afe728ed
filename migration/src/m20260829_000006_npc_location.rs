use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000005_npc::Npc;

static IDX_NPC_LOCATION_NPC_ID_IS_CURRENT: &str = "idx_npc_location_npc_id_is_current";
static FK_NPC_LOCATION_NPC_ID: &str = "fk_npc_location_npc_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NpcLocation::Table)
                    .if_not_exists()
                    .col(pk_auto(NpcLocation::Id))
                    .col(integer(NpcLocation::NpcId))
                    .col(integer(NpcLocation::XCoord))
                    .col(integer(NpcLocation::YCoord))
                    .col(integer(NpcLocation::ZoneId))
                    .col(boolean(NpcLocation::IsCurrent))
                    .col(timestamp(NpcLocation::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NPC_LOCATION_NPC_ID_IS_CURRENT)
                    .table(NpcLocation::Table)
                    .col(NpcLocation::NpcId)
                    .col(NpcLocation::IsCurrent)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NPC_LOCATION_NPC_ID)
                    .from_tbl(NpcLocation::Table)
                    .from_col(NpcLocation::NpcId)
                    .to_tbl(Npc::Table)
                    .to_col(Npc::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_NPC_LOCATION_NPC_ID)
                    .table(NpcLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NPC_LOCATION_NPC_ID_IS_CURRENT)
                    .table(NpcLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(NpcLocation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum NpcLocation {
    #[sea_orm(iden = "npc_locations")]
    Table,
    Id,
    NpcId,
    XCoord,
    YCoord,
    ZoneId,
    IsCurrent,
    CreatedAt,
}
