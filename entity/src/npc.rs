use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "npcs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub alliance_category_id: Option<i32>,
    pub traits: Json,
    pub abilities: Json,
    pub personality: Json,
    pub inventory: Json,
    pub relationships: Json,
    pub dialogue: Json,
    pub schedule: Option<Json>,
    /// Minimum minutes between interactions per user; 0 disables the gate.
    pub interaction_cooldown: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::alliance_category::Entity",
        from = "Column::AllianceCategoryId",
        to = "super::alliance_category::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::npc_location::Entity")]
    Locations,
    #[sea_orm(has_many = "super::npc_interaction::Entity")]
    Interactions,
}

impl Related<super::alliance_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::npc_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locations.def()
    }
}

impl Related<super::npc_interaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Interactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
