use chrono::NaiveDateTime;
use entity::npc_location::Column;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::db::NpcLocationModel;

pub struct NpcLocationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NpcLocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn current(&self, npc_id: i32) -> Result<Option<NpcLocationModel>, DbErr> {
        entity::prelude::NpcLocation::find()
            .filter(Column::NpcId.eq(npc_id))
            .filter(Column::IsCurrent.eq(true))
            .one(self.db)
            .await
    }

    pub async fn history(&self, npc_id: i32) -> Result<Vec<NpcLocationModel>, DbErr> {
        entity::prelude::NpcLocation::find()
            .filter(Column::NpcId.eq(npc_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
    }

    /// Clear the current flag on every row of this NPC. Runs inside the
    /// location-update transaction; returns the number of rows cleared.
    pub async fn clear_current(&self, npc_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::NpcLocation::update_many()
            .col_expr(Column::IsCurrent, Expr::value(false))
            .filter(Column::NpcId.eq(npc_id))
            .filter(Column::IsCurrent.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Insert the new current row; pairs with [`Self::clear_current`].
    pub async fn insert_current(
        &self,
        npc_id: i32,
        x_coord: i32,
        y_coord: i32,
        zone_id: i32,
        now: NaiveDateTime,
    ) -> Result<NpcLocationModel, DbErr> {
        let location = entity::npc_location::ActiveModel {
            npc_id: ActiveValue::Set(npc_id),
            x_coord: ActiveValue::Set(x_coord),
            y_coord: ActiveValue::Set(y_coord),
            zone_id: ActiveValue::Set(zone_id),
            is_current: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        location.insert(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use bastion_test_utils::{factory, TestBuilder, TestError};
    use chrono::Utc;

    use super::NpcLocationRepository;

    /// Expect clear + insert to move the current flag
    #[tokio::test]
    async fn clear_then_insert_moves_current_flag() -> Result<(), TestError> {
        let test = TestBuilder::new().with_core_tables().build().await?;
        let npc = factory::npc::insert_npc(&test.db, "Brom the Blacksmith", "blacksmith_brom").await?;

        let location_repo = NpcLocationRepository::new(&test.db);
        let now = Utc::now().naive_utc();

        let first = location_repo.insert_current(npc.id, 10, 20, 1, now).await?;
        assert_eq!(location_repo.current(npc.id).await?.map(|l| l.id), Some(first.id));

        let cleared = location_repo.clear_current(npc.id).await?;
        assert_eq!(cleared, 1);

        let second = location_repo.insert_current(npc.id, 30, 40, 2, now).await?;
        assert_eq!(location_repo.current(npc.id).await?.map(|l| l.id), Some(second.id));

        assert_eq!(location_repo.history(npc.id).await?.len(), 2);

        Ok(())
    }
}
