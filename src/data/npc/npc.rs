use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::{db::NpcModel, npc::NewNpc};

pub struct NpcRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NpcRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert an NPC. Attrs are expected to be validated by the NPC service
    /// beforehand.
    pub async fn create(&self, attrs: NewNpc) -> Result<NpcModel, DbErr> {
        let now = Utc::now().naive_utc();

        let npc = entity::npc::ActiveModel {
            code: ActiveValue::Set(attrs.code),
            name: ActiveValue::Set(attrs.name),
            alliance_category_id: ActiveValue::Set(attrs.alliance_category_id),
            traits: ActiveValue::Set(attrs.traits),
            abilities: ActiveValue::Set(attrs.abilities),
            personality: ActiveValue::Set(attrs.personality),
            inventory: ActiveValue::Set(attrs.inventory),
            relationships: ActiveValue::Set(attrs.relationships),
            dialogue: ActiveValue::Set(attrs.dialogue),
            schedule: ActiveValue::Set(attrs.schedule),
            interaction_cooldown: ActiveValue::Set(attrs.interaction_cooldown),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        npc.insert(self.db).await
    }

    pub async fn get_by_id(&self, npc_id: i32) -> Result<Option<NpcModel>, DbErr> {
        entity::prelude::Npc::find_by_id(npc_id).one(self.db).await
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<NpcModel>, DbErr> {
        entity::prelude::Npc::find()
            .filter(entity::npc::Column::Code.eq(code))
            .one(self.db)
            .await
    }
}
