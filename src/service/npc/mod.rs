//! NPC service.
//!
//! Creation validation, the atomic current-location flip, cooldown-gated
//! interactions, weekly availability, and dialogue selection. Randomness is
//! injected by the caller so dialogue stays reproducible under test.

#[cfg(test)]
mod tests;

use chrono::{NaiveDateTime, Utc};
use entity::npc_interaction::InteractionType;
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::Value;

use crate::{
    data::npc::{
        interaction::NpcInteractionRepository, location::NpcLocationRepository, npc::NpcRepository,
    },
    error::{Error, NpcError, ValidationError},
    model::{
        bag,
        db::{NpcInteractionModel, NpcLocationModel, NpcModel},
        npc::{cooldown_elapsed, DialogueSets, NewNpc, WeeklySchedule},
    },
};

pub struct NpcService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NpcService<'a> {
    /// Creates a new instance of [`NpcService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an NPC after validating every structured field: traits carry
    /// the same [0, 5] range rule as categories, the other map fields must
    /// be JSON objects, dialogue must be string lists per context, and the
    /// schedule (when present) must be weekday keys over `[start, end)`
    /// hour pairs.
    pub async fn create_npc(&self, attrs: NewNpc) -> Result<NpcModel, Error> {
        bag::parse_trait_map("traits", &attrs.traits)?;
        bag::require_object("personality", &attrs.personality)?;
        bag::require_object("inventory", &attrs.inventory)?;
        bag::require_object("relationships", &attrs.relationships)?;
        DialogueSets::from_json(&attrs.dialogue)?;

        if let Some(schedule) = &attrs.schedule {
            WeeklySchedule::from_json(schedule)?;
        }

        let npc_repo = NpcRepository::new(self.db);

        if npc_repo.get_by_code(&attrs.code).await?.is_some() {
            return Err(NpcError::CodeTaken(attrs.code).into());
        }

        let npc = npc_repo.create(attrs).await?;

        tracing::info!(npc_id = npc.id, code = %npc.code, "npc created");

        Ok(npc)
    }

    pub async fn get_npc(&self, npc_id: i32) -> Result<NpcModel, Error> {
        NpcRepository::new(self.db)
            .get_by_id(npc_id)
            .await?
            .ok_or_else(|| NpcError::NotFound(npc_id).into())
    }

    /// Moves the NPC: the previous current-location row loses its flag and
    /// the new row gains it inside one transaction, so a reader never
    /// observes zero or two current rows.
    pub async fn update_location(
        &self,
        npc_id: i32,
        x_coord: i32,
        y_coord: i32,
        zone_id: i32,
    ) -> Result<NpcLocationModel, Error> {
        self.get_npc(npc_id).await?;

        let txn = self.db.begin().await?;

        let location_repo = NpcLocationRepository::new(&txn);
        location_repo.clear_current(npc_id).await?;
        let location = location_repo
            .insert_current(npc_id, x_coord, y_coord, zone_id, Utc::now().naive_utc())
            .await?;

        txn.commit().await?;

        tracing::debug!(npc_id, x_coord, y_coord, zone_id, "npc moved");

        Ok(location)
    }

    pub async fn current_location(&self, npc_id: i32) -> Result<Option<NpcLocationModel>, Error> {
        self.get_npc(npc_id).await?;

        Ok(NpcLocationRepository::new(self.db).current(npc_id).await?)
    }

    /// True when the user has never interacted with this NPC, or the NPC's
    /// cooldown has elapsed since the last interaction. A cooldown of zero
    /// always permits.
    pub async fn can_interact(&self, npc_id: i32, user_id: i32) -> Result<bool, Error> {
        let npc = self.get_npc(npc_id).await?;

        let last = NpcInteractionRepository::new(self.db)
            .latest_for_user(npc_id, user_id)
            .await?;

        Ok(match last {
            None => true,
            Some(interaction) => cooldown_elapsed(
                interaction.created_at,
                npc.interaction_cooldown,
                Utc::now().naive_utc(),
            ),
        })
    }

    /// Appends one interaction to the audit log. The log itself is
    /// append-only and not cooldown-gated; callers enforce the gate via
    /// [`Self::can_interact`]. `result`, when present, must be an object
    /// carrying a boolean `success` field.
    pub async fn record_interaction(
        &self,
        npc_id: i32,
        user_id: i32,
        interaction_type: InteractionType,
        interaction_data: Value,
        result: Option<Value>,
    ) -> Result<NpcInteractionModel, Error> {
        self.get_npc(npc_id).await?;

        if let Some(result) = &result {
            let success = result.as_object().and_then(|obj| obj.get("success"));

            if !success.is_some_and(Value::is_boolean) {
                return Err(ValidationError::ResultMissingSuccess.into());
            }
        }

        Ok(NpcInteractionRepository::new(self.db)
            .insert(
                npc_id,
                user_id,
                interaction_type,
                interaction_data,
                result,
                Utc::now().naive_utc(),
            )
            .await?)
    }

    /// Whether the NPC's weekly schedule admits the probe instant. An NPC
    /// without a schedule is always available.
    pub async fn available_at(&self, npc_id: i32, at: NaiveDateTime) -> Result<bool, Error> {
        let npc = self.get_npc(npc_id).await?;

        Ok(match &npc.schedule {
            None => true,
            Some(schedule) => WeeklySchedule::from_json(schedule)?.allows(at),
        })
    }

    pub async fn is_available_now(&self, npc_id: i32) -> Result<bool, Error> {
        self.available_at(npc_id, Utc::now().naive_utc()).await
    }

    /// Uniform-random line from the NPC's dialogue for `context`; `None`
    /// when the context is absent or empty.
    pub async fn dialogue<R: Rng + ?Sized>(
        &self,
        npc_id: i32,
        context: &str,
        rng: &mut R,
    ) -> Result<Option<String>, Error> {
        let npc = self.get_npc(npc_id).await?;
        let dialogue = DialogueSets::from_json(&npc.dialogue)?;

        Ok(dialogue.pick(context, rng).map(str::to_string))
    }
}
