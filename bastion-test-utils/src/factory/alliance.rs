use chrono::Utc;
use entity::{
    alliance::{AllianceStatus, AllianceType, MembershipPolicy},
    alliance_member::{MemberRole, MemberStatus},
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Active alliance with open membership, no member cap, and empty treasury.
pub fn alliance_active_model(leader_id: i32, name: &str, tag: &str) -> entity::alliance::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::alliance::ActiveModel {
        leader_id: ActiveValue::Set(leader_id),
        name: ActiveValue::Set(name.to_string()),
        tag: ActiveValue::Set(tag.to_string()),
        alliance_type: ActiveValue::Set(AllianceType::Casual),
        membership_type: ActiveValue::Set(MembershipPolicy::Open),
        max_members: ActiveValue::Set(None),
        total_xp: ActiveValue::Set(0),
        level: ActiveValue::Set(1),
        treasury_balance: ActiveValue::Set(0),
        tax_rate: ActiveValue::Set(0.05),
        status: ActiveValue::Set(AllianceStatus::Active),
        disbanded_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

pub async fn insert_alliance(
    db: &DatabaseConnection,
    leader_id: i32,
    name: &str,
    tag: &str,
) -> Result<entity::alliance::Model, TestError> {
    Ok(alliance_active_model(leader_id, name, tag).insert(db).await?)
}

pub async fn insert_alliance_with<F>(
    db: &DatabaseConnection,
    leader_id: i32,
    name: &str,
    tag: &str,
    customize: F,
) -> Result<entity::alliance::Model, TestError>
where
    F: FnOnce(&mut entity::alliance::ActiveModel),
{
    let mut alliance = alliance_active_model(leader_id, name, tag);
    customize(&mut alliance);
    Ok(alliance.insert(db).await?)
}

/// Insert a membership ledger row directly, bypassing the join state machine.
pub async fn insert_member(
    db: &DatabaseConnection,
    alliance_id: i32,
    user_id: i32,
    role: MemberRole,
    status: MemberStatus,
) -> Result<entity::alliance_member::Model, TestError> {
    let now = Utc::now().naive_utc();

    let member = entity::alliance_member::ActiveModel {
        alliance_id: ActiveValue::Set(alliance_id),
        user_id: ActiveValue::Set(user_id),
        role: ActiveValue::Set(role),
        status: ActiveValue::Set(status),
        total_contributions: ActiveValue::Set(0),
        activity_score: ActiveValue::Set(0),
        last_activity: ActiveValue::Set(None),
        joined_at: ActiveValue::Set(now),
        left_at: ActiveValue::Set(None),
        promoted_at: ActiveValue::Set(None),
        invited_by: ActiveValue::Set(None),
        kicked_by: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(member.insert(db).await?)
}
