use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260829_000001_user::User, m20260829_000005_npc::Npc};

static IDX_NPC_INTERACTION_NPC_ID_USER_ID: &str = "idx_npc_interaction_npc_id_user_id";
static FK_NPC_INTERACTION_NPC_ID: &str = "fk_npc_interaction_npc_id";
static FK_NPC_INTERACTION_USER_ID: &str = "fk_npc_interaction_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NpcInteraction::Table)
                    .if_not_exists()
                    .col(pk_auto(NpcInteraction::Id))
                    .col(integer(NpcInteraction::NpcId))
                    .col(integer(NpcInteraction::UserId))
                    .col(string(NpcInteraction::InteractionType))
                    .col(json(NpcInteraction::InteractionData))
                    .col(json_null(NpcInteraction::Result))
                    .col(timestamp(NpcInteraction::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Cooldown lookups scan the latest interaction per (npc, user)
        manager
            .create_index(
                Index::create()
                    .name(IDX_NPC_INTERACTION_NPC_ID_USER_ID)
                    .table(NpcInteraction::Table)
                    .col(NpcInteraction::NpcId)
                    .col(NpcInteraction::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NPC_INTERACTION_NPC_ID)
                    .from_tbl(NpcInteraction::Table)
                    .from_col(NpcInteraction::NpcId)
                    .to_tbl(Npc::Table)
                    .to_col(Npc::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NPC_INTERACTION_USER_ID)
                    .from_tbl(NpcInteraction::Table)
                    .from_col(NpcInteraction::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_NPC_INTERACTION_USER_ID)
                    .table(NpcInteraction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_NPC_INTERACTION_NPC_ID)
                    .table(NpcInteraction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NPC_INTERACTION_NPC_ID_USER_ID)
                    .table(NpcInteraction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(NpcInteraction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum NpcInteraction {
    #[sea_orm(iden = "npc_interactions")]
    Table,
    Id,
    NpcId,
    UserId,
    InteractionType,
    InteractionData,
    Result,
    CreatedAt,
}
