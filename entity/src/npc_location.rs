use sea_orm::entity::prelude::*;

/// Location history row; exactly one row per NPC carries `is_current = true`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "npc_locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub npc_id: i32,
    pub x_coord: i32,
    pub y_coord: i32,
    pub zone_id: i32,
    pub is_current: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::npc::Entity",
        from = "Column::NpcId",
        to = "super::npc::Column::Id"
    )]
    Npc,
}

impl Related<super::npc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Npc.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
