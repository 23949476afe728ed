use chrono::{NaiveDateTime, Utc};
use entity::alliance::AllianceStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::{alliance::NewAlliance, db::AllianceModel};

pub struct AllianceRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllianceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert an alliance owned by `leader_id`, starting at level 1 with an
    /// empty treasury.
    pub async fn create(
        &self,
        leader_id: i32,
        attrs: NewAlliance,
    ) -> Result<AllianceModel, DbErr> {
        let now = Utc::now().naive_utc();

        let alliance = entity::alliance::ActiveModel {
            leader_id: ActiveValue::Set(leader_id),
            name: ActiveValue::Set(attrs.name),
            tag: ActiveValue::Set(attrs.tag),
            alliance_type: ActiveValue::Set(attrs.alliance_type),
            membership_type: ActiveValue::Set(attrs.membership_type),
            max_members: ActiveValue::Set(attrs.max_members),
            total_xp: ActiveValue::Set(0),
            level: ActiveValue::Set(1),
            treasury_balance: ActiveValue::Set(0),
            tax_rate: ActiveValue::Set(attrs.tax_rate),
            status: ActiveValue::Set(AllianceStatus::Active),
            disbanded_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        alliance.insert(self.db).await
    }

    pub async fn get_by_id(&self, alliance_id: i32) -> Result<Option<AllianceModel>, DbErr> {
        entity::prelude::Alliance::find_by_id(alliance_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<AllianceModel>, DbErr> {
        entity::prelude::Alliance::find()
            .filter(entity::alliance::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_by_tag(&self, tag: &str) -> Result<Option<AllianceModel>, DbErr> {
        entity::prelude::Alliance::find()
            .filter(entity::alliance::Column::Tag.eq(tag))
            .one(self.db)
            .await
    }

    /// Persist recomputed xp and level together.
    pub async fn update_stats(
        &self,
        alliance: AllianceModel,
        total_xp: i64,
        level: i32,
    ) -> Result<AllianceModel, DbErr> {
        let mut alliance = alliance.into_active_model();
        alliance.total_xp = ActiveValue::Set(total_xp);
        alliance.level = ActiveValue::Set(level);
        alliance.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        alliance.update(self.db).await
    }

    /// Mark the alliance disbanded at `at`. Callers are responsible for not
    /// overwriting an existing `disbanded_at`.
    pub async fn set_disbanded(
        &self,
        alliance: AllianceModel,
        at: NaiveDateTime,
    ) -> Result<AllianceModel, DbErr> {
        let mut alliance = alliance.into_active_model();
        alliance.status = ActiveValue::Set(AllianceStatus::Disbanded);
        alliance.disbanded_at = ActiveValue::Set(Some(at));
        alliance.updated_at = ActiveValue::Set(at);

        alliance.update(self.db).await
    }
}
