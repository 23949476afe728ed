use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AllianceCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(AllianceCategory::Id))
                    .col(string_uniq(AllianceCategory::Name))
                    .col(string_uniq(AllianceCategory::Code))
                    .col(string_null(AllianceCategory::Description))
                    .col(json(AllianceCategory::Traits))
                    .col(json(AllianceCategory::Bonuses))
                    .col(json(AllianceCategory::Requirements))
                    .col(json(AllianceCategory::Abilities))
                    .col(json(AllianceCategory::Progression))
                    .col(json(AllianceCategory::Specializations))
                    .col(json(AllianceCategory::SpecialResources))
                    .col(integer(AllianceCategory::MinMembers))
                    .col(integer(AllianceCategory::MaxMembers))
                    .col(double(AllianceCategory::PowerIndex))
                    .col(double(AllianceCategory::ResourceMultiplier))
                    .col(json(AllianceCategory::BalanceFactors))
                    .col(json(AllianceCategory::UnlockRequirements))
                    .col(timestamp(AllianceCategory::CreatedAt))
                    .col(timestamp(AllianceCategory::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AllianceCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AllianceCategory {
    #[sea_orm(iden = "alliance_categories")]
    Table,
    Id,
    Name,
    Code,
    Description,
    Traits,
    Bonuses,
    Requirements,
    Abilities,
    Progression,
    Specializations,
    SpecialResources,
    MinMembers,
    MaxMembers,
    PowerIndex,
    ResourceMultiplier,
    BalanceFactors,
    UnlockRequirements,
    CreatedAt,
    UpdatedAt,
}
