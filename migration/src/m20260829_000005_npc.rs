use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000003_alliance_category::AllianceCategory;

static IDX_NPC_ALLIANCE_CATEGORY_ID: &str = "idx_npc_alliance_category_id";
static FK_NPC_ALLIANCE_CATEGORY_ID: &str = "fk_npc_alliance_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Npc::Table)
                    .if_not_exists()
                    .col(pk_auto(Npc::Id))
                    .col(string_uniq(Npc::Code))
                    .col(string(Npc::Name))
                    .col(integer_null(Npc::AllianceCategoryId))
                    .col(json(Npc::Traits))
                    .col(json(Npc::Abilities))
                    .col(json(Npc::Personality))
                    .col(json(Npc::Inventory))
                    .col(json(Npc::Relationships))
                    .col(json(Npc::Dialogue))
                    .col(json_null(Npc::Schedule))
                    .col(integer(Npc::InteractionCooldown))
                    .col(timestamp(Npc::CreatedAt))
                    .col(timestamp(Npc::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NPC_ALLIANCE_CATEGORY_ID)
                    .table(Npc::Table)
                    .col(Npc::AllianceCategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NPC_ALLIANCE_CATEGORY_ID)
                    .from_tbl(Npc::Table)
                    .from_col(Npc::AllianceCategoryId)
                    .to_tbl(AllianceCategory::Table)
                    .to_col(AllianceCategory::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_NPC_ALLIANCE_CATEGORY_ID)
                    .table(Npc::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NPC_ALLIANCE_CATEGORY_ID)
                    .table(Npc::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Npc::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Npc {
    #[sea_orm(iden = "npcs")]
    Table,
    Id,
    Code,
    Name,
    AllianceCategoryId,
    Traits,
    Abilities,
    Personality,
    Inventory,
    Relationships,
    Dialogue,
    Schedule,
    InteractionCooldown,
    CreatedAt,
    UpdatedAt,
}
