use sea_orm::entity::prelude::*;

/// Append-only audit log of user/NPC interactions.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "npc_interactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub npc_id: i32,
    pub user_id: i32,
    pub interaction_type: InteractionType,
    pub interaction_data: Json,
    pub result: Option<Json>,
    pub created_at: DateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum InteractionType {
    #[sea_orm(string_value = "TALK")]
    Talk,
    #[sea_orm(string_value = "TRADE")]
    Trade,
    #[sea_orm(string_value = "QUEST")]
    Quest,
    #[sea_orm(string_value = "TRAIN")]
    Train,
    #[sea_orm(string_value = "BATTLE")]
    Battle,
    #[sea_orm(string_value = "SERVICE")]
    Service,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::npc::Entity",
        from = "Column::NpcId",
        to = "super::npc::Column::Id"
    )]
    Npc,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::npc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Npc.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
