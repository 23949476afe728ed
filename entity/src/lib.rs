pub mod alliance;
pub mod alliance_category;
pub mod alliance_member;
pub mod npc;
pub mod npc_interaction;
pub mod npc_location;
pub mod prelude;
pub mod user;
