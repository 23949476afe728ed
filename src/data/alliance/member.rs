use chrono::NaiveDateTime;
use entity::alliance_member::{Column, MemberRole, MemberStatus};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::model::db::MemberModel;

pub struct MemberRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a fresh, active ledger row.
    pub async fn insert(
        &self,
        alliance_id: i32,
        user_id: i32,
        role: MemberRole,
        invited_by: Option<i32>,
        now: NaiveDateTime,
    ) -> Result<MemberModel, DbErr> {
        let member = entity::alliance_member::ActiveModel {
            alliance_id: ActiveValue::Set(alliance_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role),
            status: ActiveValue::Set(MemberStatus::Active),
            total_contributions: ActiveValue::Set(0),
            activity_score: ActiveValue::Set(0),
            last_activity: ActiveValue::Set(None),
            joined_at: ActiveValue::Set(now),
            left_at: ActiveValue::Set(None),
            promoted_at: ActiveValue::Set(None),
            invited_by: ActiveValue::Set(invited_by),
            kicked_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        member.insert(self.db).await
    }

    pub async fn find_by_pair(
        &self,
        alliance_id: i32,
        user_id: i32,
    ) -> Result<Option<MemberModel>, DbErr> {
        entity::prelude::AllianceMember::find()
            .filter(Column::AllianceId.eq(alliance_id))
            .filter(Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn count_active(&self, alliance_id: i32) -> Result<u64, DbErr> {
        entity::prelude::AllianceMember::find()
            .filter(Column::AllianceId.eq(alliance_id))
            .filter(Column::Status.eq(MemberStatus::Active))
            .count(self.db)
            .await
    }

    pub async fn list_active(&self, alliance_id: i32) -> Result<Vec<MemberModel>, DbErr> {
        entity::prelude::AllianceMember::find()
            .filter(Column::AllianceId.eq(alliance_id))
            .filter(Column::Status.eq(MemberStatus::Active))
            .all(self.db)
            .await
    }

    /// Assign a new role and stamp `promoted_at`.
    pub async fn set_role(
        &self,
        member: MemberModel,
        role: MemberRole,
        now: NaiveDateTime,
    ) -> Result<MemberModel, DbErr> {
        let mut member = member.into_active_model();
        member.role = ActiveValue::Set(role);
        member.promoted_at = ActiveValue::Set(Some(now));
        member.updated_at = ActiveValue::Set(now);

        member.update(self.db).await
    }

    /// Transition into a terminal status, stamping `left_at`. Callers must
    /// not invoke this on rows that are already terminal.
    pub async fn set_terminal(
        &self,
        member: MemberModel,
        status: MemberStatus,
        kicked_by: Option<i32>,
        now: NaiveDateTime,
    ) -> Result<MemberModel, DbErr> {
        let mut member = member.into_active_model();
        member.status = ActiveValue::Set(status);
        member.left_at = ActiveValue::Set(Some(now));
        member.kicked_by = ActiveValue::Set(kicked_by);
        member.updated_at = ActiveValue::Set(now);

        member.update(self.db).await
    }

    /// Reopen a terminal row for a rejoin: back to an active recruit with a
    /// fresh `joined_at` and cleared terminal bookkeeping.
    pub async fn reactivate(
        &self,
        member: MemberModel,
        invited_by: Option<i32>,
        now: NaiveDateTime,
    ) -> Result<MemberModel, DbErr> {
        let mut member = member.into_active_model();
        member.role = ActiveValue::Set(MemberRole::Recruit);
        member.status = ActiveValue::Set(MemberStatus::Active);
        member.joined_at = ActiveValue::Set(now);
        member.left_at = ActiveValue::Set(None);
        member.promoted_at = ActiveValue::Set(None);
        member.invited_by = ActiveValue::Set(invited_by);
        member.kicked_by = ActiveValue::Set(None);
        member.updated_at = ActiveValue::Set(now);

        member.update(self.db).await
    }

    /// Write the activity score and refresh `last_activity` in one UPDATE so
    /// the pair can never diverge. Returns the number of rows touched.
    pub async fn record_activity(
        &self,
        member_id: i32,
        activity_score: i32,
        now: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::AllianceMember::update_many()
            .col_expr(Column::ActivityScore, Expr::value(activity_score))
            .col_expr(Column::LastActivity, Expr::value(now))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
