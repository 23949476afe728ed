//! NPC repositories: character records, location history, and the
//! interaction audit log.

pub mod interaction;
pub mod location;
pub mod npc;
