use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alliances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub leader_id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub tag: String,
    pub alliance_type: AllianceType,
    pub membership_type: MembershipPolicy,
    pub max_members: Option<i32>,
    pub total_xp: i64,
    pub level: i32,
    pub treasury_balance: i64,
    pub tax_rate: f64,
    pub status: AllianceStatus,
    pub disbanded_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AllianceType {
    #[sea_orm(string_value = "casual")]
    Casual,
    #[sea_orm(string_value = "competitive")]
    Competitive,
    #[sea_orm(string_value = "roleplay")]
    Roleplay,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum MembershipPolicy {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "approval")]
    Approval,
    #[sea_orm(string_value = "invite_only")]
    InviteOnly,
    #[sea_orm(string_value = "closed")]
    Closed,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AllianceStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
    #[sea_orm(string_value = "suspended")]
    Suspended,
    #[sea_orm(string_value = "disbanded")]
    Disbanded,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::LeaderId",
        to = "super::user::Column::Id"
    )]
    Leader,
    #[sea_orm(has_many = "super::alliance_member::Entity")]
    Members,
}

impl Related<super::alliance_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leader.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
