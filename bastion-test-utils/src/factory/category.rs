use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use serde_json::json;

use crate::error::TestError;

/// Neutral category: empty JSON bags, base power 100, multiplier 1.
pub fn category_active_model(name: &str, code: &str) -> entity::alliance_category::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::alliance_category::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        code: ActiveValue::Set(code.to_string()),
        description: ActiveValue::Set(None),
        traits: ActiveValue::Set(json!({})),
        bonuses: ActiveValue::Set(json!({})),
        requirements: ActiveValue::Set(json!({})),
        abilities: ActiveValue::Set(json!([])),
        progression: ActiveValue::Set(json!({})),
        specializations: ActiveValue::Set(json!([])),
        special_resources: ActiveValue::Set(json!([])),
        min_members: ActiveValue::Set(1),
        max_members: ActiveValue::Set(50),
        power_index: ActiveValue::Set(100.0),
        resource_multiplier: ActiveValue::Set(1.0),
        balance_factors: ActiveValue::Set(json!({})),
        unlock_requirements: ActiveValue::Set(json!({})),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

pub async fn insert_category(
    db: &DatabaseConnection,
    name: &str,
    code: &str,
) -> Result<entity::alliance_category::Model, TestError> {
    Ok(category_active_model(name, code).insert(db).await?)
}

pub async fn insert_category_with<F>(
    db: &DatabaseConnection,
    name: &str,
    code: &str,
    customize: F,
) -> Result<entity::alliance_category::Model, TestError>
where
    F: FnOnce(&mut entity::alliance_category::ActiveModel),
{
    let mut category = category_active_model(name, code);
    customize(&mut category);
    Ok(category.insert(db).await?)
}
