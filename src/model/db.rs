//! Database model type aliases.
//!
//! Convenience aliases for the SeaORM entity models so service signatures do
//! not import from the generated `entity` crate directly.

/// Platform user account row.
pub type UserModel = entity::user::Model;

/// Alliance registry row: name, tag, policy, treasury, level/xp, status.
pub type AllianceModel = entity::alliance::Model;

/// Category template row with the JSON trait/bonus/requirement bags.
pub type CategoryModel = entity::alliance_category::Model;

/// Membership ledger row for one (alliance, user) pair.
pub type MemberModel = entity::alliance_member::Model;

/// Non-player character row.
pub type NpcModel = entity::npc::Model;

/// NPC location history row; one current row per NPC.
pub type NpcLocationModel = entity::npc_location::Model;

/// Append-only NPC interaction audit row.
pub type NpcInteractionModel = entity::npc_interaction::Model;
