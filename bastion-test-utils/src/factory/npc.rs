use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use serde_json::json;

use crate::error::TestError;

/// NPC with empty JSON bags, no schedule, and no interaction cooldown.
pub fn npc_active_model(name: &str, code: &str) -> entity::npc::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::npc::ActiveModel {
        code: ActiveValue::Set(code.to_string()),
        name: ActiveValue::Set(name.to_string()),
        alliance_category_id: ActiveValue::Set(None),
        traits: ActiveValue::Set(json!({})),
        abilities: ActiveValue::Set(json!([])),
        personality: ActiveValue::Set(json!({})),
        inventory: ActiveValue::Set(json!({})),
        relationships: ActiveValue::Set(json!({})),
        dialogue: ActiveValue::Set(json!({})),
        schedule: ActiveValue::Set(None),
        interaction_cooldown: ActiveValue::Set(0),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

pub async fn insert_npc(
    db: &DatabaseConnection,
    name: &str,
    code: &str,
) -> Result<entity::npc::Model, TestError> {
    Ok(npc_active_model(name, code).insert(db).await?)
}

pub async fn insert_npc_with<F>(
    db: &DatabaseConnection,
    name: &str,
    code: &str,
    customize: F,
) -> Result<entity::npc::Model, TestError>
where
    F: FnOnce(&mut entity::npc::ActiveModel),
{
    let mut npc = npc_active_model(name, code);
    customize(&mut npc);
    Ok(npc.insert(db).await?)
}
