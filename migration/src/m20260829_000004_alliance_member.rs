use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260829_000001_user::User, m20260829_000002_alliance::Alliance};

static IDX_ALLIANCE_MEMBER_PAIR: &str = "idx_alliance_member_alliance_id_user_id";
static IDX_ALLIANCE_MEMBER_STATUS: &str = "idx_alliance_member_status";
static FK_ALLIANCE_MEMBER_ALLIANCE_ID: &str = "fk_alliance_member_alliance_id";
static FK_ALLIANCE_MEMBER_USER_ID: &str = "fk_alliance_member_user_id";
static FK_ALLIANCE_MEMBER_INVITED_BY: &str = "fk_alliance_member_invited_by";
static FK_ALLIANCE_MEMBER_KICKED_BY: &str = "fk_alliance_member_kicked_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AllianceMember::Table)
                    .if_not_exists()
                    .col(pk_auto(AllianceMember::Id))
                    .col(integer(AllianceMember::AllianceId))
                    .col(integer(AllianceMember::UserId))
                    .col(string(AllianceMember::Role))
                    .col(string(AllianceMember::Status))
                    .col(big_integer(AllianceMember::TotalContributions))
                    .col(integer(AllianceMember::ActivityScore))
                    .col(timestamp_null(AllianceMember::LastActivity))
                    .col(timestamp(AllianceMember::JoinedAt))
                    .col(timestamp_null(AllianceMember::LeftAt))
                    .col(timestamp_null(AllianceMember::PromotedAt))
                    .col(integer_null(AllianceMember::InvitedBy))
                    .col(integer_null(AllianceMember::KickedBy))
                    .col(timestamp(AllianceMember::CreatedAt))
                    .col(timestamp(AllianceMember::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Backstop for the check-then-act duplicate check in join
        manager
            .create_index(
                Index::create()
                    .name(IDX_ALLIANCE_MEMBER_PAIR)
                    .table(AllianceMember::Table)
                    .col(AllianceMember::AllianceId)
                    .col(AllianceMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALLIANCE_MEMBER_STATUS)
                    .table(AllianceMember::Table)
                    .col(AllianceMember::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALLIANCE_MEMBER_ALLIANCE_ID)
                    .from_tbl(AllianceMember::Table)
                    .from_col(AllianceMember::AllianceId)
                    .to_tbl(Alliance::Table)
                    .to_col(Alliance::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALLIANCE_MEMBER_USER_ID)
                    .from_tbl(AllianceMember::Table)
                    .from_col(AllianceMember::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALLIANCE_MEMBER_INVITED_BY)
                    .from_tbl(AllianceMember::Table)
                    .from_col(AllianceMember::InvitedBy)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALLIANCE_MEMBER_KICKED_BY)
                    .from_tbl(AllianceMember::Table)
                    .from_col(AllianceMember::KickedBy)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_ALLIANCE_MEMBER_KICKED_BY,
            FK_ALLIANCE_MEMBER_INVITED_BY,
            FK_ALLIANCE_MEMBER_USER_ID,
            FK_ALLIANCE_MEMBER_ALLIANCE_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(AllianceMember::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALLIANCE_MEMBER_STATUS)
                    .table(AllianceMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALLIANCE_MEMBER_PAIR)
                    .table(AllianceMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AllianceMember::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AllianceMember {
    #[sea_orm(iden = "alliance_members")]
    Table,
    Id,
    AllianceId,
    UserId,
    Role,
    Status,
    TotalContributions,
    ActivityScore,
    LastActivity,
    JoinedAt,
    LeftAt,
    PromotedAt,
    InvitedBy,
    KickedBy,
    CreatedAt,
    UpdatedAt,
}
