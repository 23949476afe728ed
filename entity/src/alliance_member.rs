use sea_orm::entity::prelude::*;

/// Per-user, per-alliance membership ledger row.
///
/// `(alliance_id, user_id)` is unique at the database level; role and status
/// vary independently and only `active` rows count toward rosters or capacity.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "alliance_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub alliance_id: i32,
    pub user_id: i32,
    pub role: MemberRole,
    pub status: MemberStatus,
    pub total_contributions: i64,
    pub activity_score: i32,
    pub last_activity: Option<DateTime>,
    pub joined_at: DateTime,
    pub left_at: Option<DateTime>,
    pub promoted_at: Option<DateTime>,
    pub invited_by: Option<i32>,
    pub kicked_by: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum MemberRole {
    #[sea_orm(string_value = "recruit")]
    Recruit,
    #[sea_orm(string_value = "member")]
    Member,
    #[sea_orm(string_value = "treasurer")]
    Treasurer,
    #[sea_orm(string_value = "officer")]
    Officer,
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "leader")]
    Leader,
}

impl MemberRole {
    /// Capability checks are explicit set membership, never rank comparison.
    pub fn can_invite(&self) -> bool {
        matches!(self, Self::Officer | Self::Admin | Self::Leader)
    }

    pub fn can_manage_roles(&self) -> bool {
        matches!(self, Self::Admin | Self::Leader)
    }

    pub fn can_manage_treasury(&self) -> bool {
        matches!(self, Self::Treasurer | Self::Admin | Self::Leader)
    }

    /// Roles reachable via promotion; recruit and leader are not assignable.
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            Self::Member | Self::Treasurer | Self::Officer | Self::Admin
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum MemberStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
    #[sea_orm(string_value = "suspended")]
    Suspended,
    #[sea_orm(string_value = "kicked")]
    Kicked,
    #[sea_orm(string_value = "left")]
    Left,
}

impl MemberStatus {
    /// Kicked and left rows are terminal; they carry `left_at` and no longer
    /// block a rejoin.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Kicked | Self::Left)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::alliance::Entity",
        from = "Column::AllianceId",
        to = "super::alliance::Column::Id"
    )]
    Alliance,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::alliance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alliance.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
