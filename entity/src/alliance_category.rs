use sea_orm::entity::prelude::*;

/// Category template shared by alliances and NPCs of a kind.
///
/// The JSON columns are schemaless "bag" fields; they are parsed and validated
/// into typed maps by the `bastion` crate before any domain logic touches them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alliance_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    pub description: Option<String>,
    pub traits: Json,
    pub bonuses: Json,
    pub requirements: Json,
    pub abilities: Json,
    pub progression: Json,
    pub specializations: Json,
    pub special_resources: Json,
    pub min_members: i32,
    pub max_members: i32,
    pub power_index: f64,
    pub resource_multiplier: f64,
    pub balance_factors: Json,
    pub unlock_requirements: Json,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::npc::Entity")]
    Npcs,
}

impl Related<super::npc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Npcs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
