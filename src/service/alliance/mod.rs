//! Alliance registry service.
//!
//! Owns the alliance record lifecycle: creation (with the implicit leader
//! membership row), capacity checks, xp/level bookkeeping, and disbanding.

#[cfg(test)]
mod tests;

use chrono::Utc;
use entity::{
    alliance::AllianceStatus,
    alliance_member::{MemberRole, MemberStatus},
};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::alliance::{alliance::AllianceRepository, member::MemberRepository},
    error::{AllianceError, Error},
    model::{
        alliance::NewAlliance,
        db::{AllianceModel, MemberModel},
    },
};

/// Level implied by accumulated xp: `floor(sqrt(xp / 1000)) + 1`.
///
/// Level is a pure function of the current xp total, so an xp adjustment
/// downward lowers the level on the next [`AllianceService::update_stats`].
pub fn level_for_xp(total_xp: i64) -> i32 {
    let xp = total_xp.max(0) as f64;

    (xp / 1000.0).sqrt().floor() as i32 + 1
}

pub struct AllianceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AllianceService<'a> {
    /// Creates a new instance of [`AllianceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an alliance led by `leader_id`.
    ///
    /// Name and tag uniqueness are checked up front so callers get a domain
    /// error rather than a constraint violation. The alliance row and the
    /// leader's membership row are inserted in one transaction; the model
    /// layer does not create the leader row on its own.
    ///
    /// # Returns
    /// - `Ok(AllianceModel)` - The created alliance
    /// - `Err(Error::AllianceError)` - Name or tag already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_alliance(
        &self,
        leader_id: i32,
        attrs: NewAlliance,
    ) -> Result<AllianceModel, Error> {
        let alliance_repo = AllianceRepository::new(self.db);

        if alliance_repo.get_by_name(&attrs.name).await?.is_some() {
            return Err(AllianceError::NameTaken(attrs.name).into());
        }

        if alliance_repo.get_by_tag(&attrs.tag).await?.is_some() {
            return Err(AllianceError::TagTaken(attrs.tag).into());
        }

        let txn = self.db.begin().await?;

        let alliance = AllianceRepository::new(&txn).create(leader_id, attrs).await?;
        MemberRepository::new(&txn)
            .insert(
                alliance.id,
                leader_id,
                MemberRole::Leader,
                None,
                Utc::now().naive_utc(),
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            alliance_id = alliance.id,
            leader_id,
            name = %alliance.name,
            "alliance created"
        );

        Ok(alliance)
    }

    pub async fn get_alliance(&self, alliance_id: i32) -> Result<AllianceModel, Error> {
        AllianceRepository::new(self.db)
            .get_by_id(alliance_id)
            .await?
            .ok_or_else(|| AllianceError::NotFound(alliance_id).into())
    }

    /// True iff the user holds an active membership row in the alliance.
    pub async fn is_member(&self, alliance_id: i32, user_id: i32) -> Result<bool, Error> {
        let member = MemberRepository::new(self.db)
            .find_by_pair(alliance_id, user_id)
            .await?;

        Ok(member.is_some_and(|member| member.status == MemberStatus::Active))
    }

    /// Count of active members; terminal and suspended rows do not count.
    pub async fn member_count(&self, alliance_id: i32) -> Result<u64, Error> {
        self.get_alliance(alliance_id).await?;

        Ok(MemberRepository::new(self.db)
            .count_active(alliance_id)
            .await?)
    }

    /// Active membership rows, the visible roster.
    pub async fn roster(&self, alliance_id: i32) -> Result<Vec<MemberModel>, Error> {
        self.get_alliance(alliance_id).await?;

        Ok(MemberRepository::new(self.db)
            .list_active(alliance_id)
            .await?)
    }

    /// True iff `max_members` is set and the active member count has reached
    /// it. An alliance without a cap is never full.
    pub async fn is_full(&self, alliance_id: i32) -> Result<bool, Error> {
        let alliance = self.get_alliance(alliance_id).await?;

        let Some(max_members) = alliance.max_members else {
            return Ok(false);
        };

        let count = MemberRepository::new(self.db)
            .count_active(alliance_id)
            .await?;

        Ok(count >= max_members.max(0) as u64)
    }

    /// Writes a new xp total and the level it implies.
    pub async fn update_stats(
        &self,
        alliance_id: i32,
        total_xp: i64,
    ) -> Result<AllianceModel, Error> {
        let alliance = self.get_alliance(alliance_id).await?;
        let level = level_for_xp(total_xp);

        Ok(AllianceRepository::new(self.db)
            .update_stats(alliance, total_xp, level)
            .await?)
    }

    /// Disbands the alliance. Idempotent: once disbanded, further calls
    /// return the row unchanged and never touch `disbanded_at`.
    pub async fn disband(&self, alliance_id: i32) -> Result<AllianceModel, Error> {
        let alliance = self.get_alliance(alliance_id).await?;

        if alliance.status == AllianceStatus::Disbanded {
            return Ok(alliance);
        }

        let disbanded = AllianceRepository::new(self.db)
            .set_disbanded(alliance, Utc::now().naive_utc())
            .await?;

        tracing::info!(alliance_id, "alliance disbanded");

        Ok(disbanded)
    }
}
