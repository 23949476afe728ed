use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub async fn insert_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entity::user::Model, TestError> {
    let now = Utc::now().naive_utc();

    let user = entity::user::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}
