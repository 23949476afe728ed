use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000001_user::User;

static IDX_ALLIANCE_LEADER_ID: &str = "idx_alliance_leader_id";
static IDX_ALLIANCE_STATUS: &str = "idx_alliance_status";
static FK_ALLIANCE_LEADER_ID: &str = "fk_alliance_leader_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alliance::Table)
                    .if_not_exists()
                    .col(pk_auto(Alliance::Id))
                    .col(integer(Alliance::LeaderId))
                    .col(string_uniq(Alliance::Name))
                    .col(string_uniq(Alliance::Tag))
                    .col(string(Alliance::AllianceType))
                    .col(string(Alliance::MembershipType))
                    .col(integer_null(Alliance::MaxMembers))
                    .col(big_integer(Alliance::TotalXp))
                    .col(integer(Alliance::Level))
                    .col(big_integer(Alliance::TreasuryBalance))
                    .col(double(Alliance::TaxRate))
                    .col(string(Alliance::Status))
                    .col(timestamp_null(Alliance::DisbandedAt))
                    .col(timestamp(Alliance::CreatedAt))
                    .col(timestamp(Alliance::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALLIANCE_LEADER_ID)
                    .table(Alliance::Table)
                    .col(Alliance::LeaderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALLIANCE_STATUS)
                    .table(Alliance::Table)
                    .col(Alliance::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALLIANCE_LEADER_ID)
                    .from_tbl(Alliance::Table)
                    .from_col(Alliance::LeaderId)
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
                    .name(FK_ALLIANCE_LEADER_ID)
                    .table(Alliance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALLIANCE_STATUS)
                    .table(Alliance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALLIANCE_LEADER_ID)
                    .table(Alliance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Alliance::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Alliance {
    #[sea_orm(iden = "alliances")]
    Table,
    Id,
    LeaderId,
    Name,
    Tag,
    AllianceType,
    MembershipType,
    MaxMembers,
    TotalXp,
    Level,
    TreasuryBalance,
    TaxRate,
    Status,
    DisbandedAt,
    CreatedAt,
    UpdatedAt,
}
