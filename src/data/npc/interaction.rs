use chrono::NaiveDateTime;
use entity::npc_interaction::{Column, InteractionType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use serde_json::Value;

use crate::model::db::NpcInteractionModel;

pub struct NpcInteractionRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NpcInteractionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Append one audit row; interaction rows are never updated or deleted.
    pub async fn insert(
        &self,
        npc_id: i32,
        user_id: i32,
        interaction_type: InteractionType,
        interaction_data: Value,
        result: Option<Value>,
        now: NaiveDateTime,
    ) -> Result<NpcInteractionModel, DbErr> {
        let interaction = entity::npc_interaction::ActiveModel {
            npc_id: ActiveValue::Set(npc_id),
            user_id: ActiveValue::Set(user_id),
            interaction_type: ActiveValue::Set(interaction_type),
            interaction_data: ActiveValue::Set(interaction_data),
            result: ActiveValue::Set(result),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        interaction.insert(self.db).await
    }

    /// Most recent interaction between this NPC and user, for cooldown checks.
    pub async fn latest_for_user(
        &self,
        npc_id: i32,
        user_id: i32,
    ) -> Result<Option<NpcInteractionModel>, DbErr> {
        entity::prelude::NpcInteraction::find()
            .filter(Column::NpcId.eq(npc_id))
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .one(self.db)
            .await
    }

    pub async fn list_for_npc(&self, npc_id: i32) -> Result<Vec<NpcInteractionModel>, DbErr> {
        entity::prelude::NpcInteraction::find()
            .filter(Column::NpcId.eq(npc_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use bastion_test_utils::{factory, TestBuilder, TestError};
    use chrono::{Duration, Utc};
    use entity::npc_interaction::InteractionType;
    use serde_json::json;

    use super::NpcInteractionRepository;

    /// Expect the newest row back from latest_for_user
    #[tokio::test]
    async fn latest_returns_newest_row() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_core_tables()
            .with_user("aldric")
            .build()
            .await?;
        let npc = factory::npc::insert_npc(&test.db, "Brom the Blacksmith", "blacksmith_brom").await?;

        let interaction_repo = NpcInteractionRepository::new(&test.db);
        let now = Utc::now().naive_utc();

        interaction_repo
            .insert(npc.id, 1, InteractionType::Talk, json!({}), None, now - Duration::minutes(30))
            .await?;
        let newest = interaction_repo
            .insert(npc.id, 1, InteractionType::Trade, json!({"item": "sword"}), None, now)
            .await?;

        let latest = interaction_repo.latest_for_user(npc.id, 1).await?;
        assert_eq!(latest.map(|row| row.id), Some(newest.id));

        assert!(interaction_repo.latest_for_user(npc.id, 99).await?.is_none());

        Ok(())
    }
}
