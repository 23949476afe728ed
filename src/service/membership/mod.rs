//! Membership ledger service.
//!
//! Drives the per-(alliance, user) state machine: join, promote, kick, leave,
//! and activity bookkeeping. Role and status vary independently; only active
//! rows count toward capacity and rosters. A pair that left or was kicked
//! keeps its ledger row and is reactivated in place on rejoin, so the
//! composite unique constraint on (alliance_id, user_id) holds for good.

#[cfg(test)]
mod tests;

use chrono::Utc;
use entity::alliance_member::{MemberRole, MemberStatus};
use sea_orm::{DatabaseConnection, IsolationLevel, TransactionTrait};

use crate::{
    data::alliance::{alliance::AllianceRepository, member::MemberRepository},
    error::{AllianceError, Error, MembershipError},
    model::{alliance::JoinMethod, db::MemberModel},
};

pub struct MembershipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipService<'a> {
    /// Creates a new instance of [`MembershipService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a user to an alliance.
    ///
    /// The capacity check is check-then-act, so the transaction runs at
    /// serializable isolation: under read committed two concurrent joins
    /// could both observe one free slot and both insert distinct users past
    /// the cap. The unique index on (alliance_id, user_id) backstops the
    /// duplicate check only.
    ///
    /// # Returns
    /// - `Ok(MemberModel)` - The active membership row (fresh or reactivated)
    /// - `Err(Error::AllianceError)` - Alliance does not exist
    /// - `Err(Error::MembershipError)` - Alliance full, or the user already
    ///   holds a non-terminal row
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn join(
        &self,
        alliance_id: i32,
        user_id: i32,
        via: JoinMethod,
    ) -> Result<MemberModel, Error> {
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::Serializable), None)
            .await?;

        let alliance_repo = AllianceRepository::new(&txn);
        let member_repo = MemberRepository::new(&txn);

        let alliance = alliance_repo
            .get_by_id(alliance_id)
            .await?
            .ok_or(AllianceError::NotFound(alliance_id))?;

        if let Some(max_members) = alliance.max_members {
            let active = member_repo.count_active(alliance_id).await?;

            if active >= max_members.max(0) as u64 {
                return Err(MembershipError::AllianceFull {
                    alliance_id,
                    max_members,
                }
                .into());
            }
        }

        let existing = member_repo.find_by_pair(alliance_id, user_id).await?;

        if let Some(member) = &existing {
            if !member.status.is_terminal() {
                return Err(MembershipError::AlreadyMember {
                    alliance_id,
                    user_id,
                }
                .into());
            }
        }

        let now = Utc::now().naive_utc();

        let member = match existing {
            Some(member) => member_repo.reactivate(member, via.invited_by(), now).await?,
            None => {
                member_repo
                    .insert(alliance_id, user_id, MemberRole::Recruit, via.invited_by(), now)
                    .await?
            }
        };

        txn.commit().await?;

        tracing::info!(alliance_id, user_id, ?via, "user joined alliance");

        Ok(member)
    }

    /// Assigns a new role to an active member.
    ///
    /// Leader and recruit are not assignable through promotion; a terminal
    /// row counts as no membership at all.
    pub async fn promote(
        &self,
        alliance_id: i32,
        user_id: i32,
        new_role: MemberRole,
    ) -> Result<MemberModel, Error> {
        if !new_role.is_assignable() {
            return Err(MembershipError::RoleNotAssignable(new_role).into());
        }

        let member = self.active_member(alliance_id, user_id).await?;

        let promoted = MemberRepository::new(self.db)
            .set_role(member, new_role, Utc::now().naive_utc())
            .await?;

        tracing::info!(alliance_id, user_id, role = ?promoted.role, "member promoted");

        Ok(promoted)
    }

    /// Removes a member by force. Idempotent: a row that is already terminal
    /// is returned unchanged, keeping its original `left_at`.
    ///
    /// The reason is logged, not persisted.
    pub async fn kick(
        &self,
        alliance_id: i32,
        user_id: i32,
        kicked_by: i32,
        reason: Option<&str>,
    ) -> Result<MemberModel, Error> {
        let member = self.any_member(alliance_id, user_id).await?;

        if member.status.is_terminal() {
            return Ok(member);
        }

        let kicked = MemberRepository::new(self.db)
            .set_terminal(
                member,
                MemberStatus::Kicked,
                Some(kicked_by),
                Utc::now().naive_utc(),
            )
            .await?;

        tracing::info!(alliance_id, user_id, kicked_by, reason, "member kicked");

        Ok(kicked)
    }

    /// Voluntary departure; same idempotence as [`Self::kick`].
    pub async fn leave(
        &self,
        alliance_id: i32,
        user_id: i32,
        reason: Option<&str>,
    ) -> Result<MemberModel, Error> {
        let member = self.any_member(alliance_id, user_id).await?;

        if member.status.is_terminal() {
            return Ok(member);
        }

        let left = MemberRepository::new(self.db)
            .set_terminal(member, MemberStatus::Left, None, Utc::now().naive_utc())
            .await?;

        tracing::info!(alliance_id, user_id, reason, "member left alliance");

        Ok(left)
    }

    /// Writes a new activity score; `last_activity` refreshes in the same
    /// UPDATE statement.
    pub async fn record_activity(
        &self,
        alliance_id: i32,
        user_id: i32,
        activity_score: i32,
    ) -> Result<(), Error> {
        let member = self.active_member(alliance_id, user_id).await?;

        MemberRepository::new(self.db)
            .record_activity(member.id, activity_score, Utc::now().naive_utc())
            .await?;

        Ok(())
    }

    async fn any_member(&self, alliance_id: i32, user_id: i32) -> Result<MemberModel, Error> {
        MemberRepository::new(self.db)
            .find_by_pair(alliance_id, user_id)
            .await?
            .ok_or_else(|| {
                MembershipError::NotFound {
                    alliance_id,
                    user_id,
                }
                .into()
            })
    }

    async fn active_member(&self, alliance_id: i32, user_id: i32) -> Result<MemberModel, Error> {
        let member = self.any_member(alliance_id, user_id).await?;

        if member.status.is_terminal() {
            return Err(MembershipError::NotFound {
                alliance_id,
                user_id,
            }
            .into());
        }

        Ok(member)
    }
}
