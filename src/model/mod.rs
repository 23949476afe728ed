//! Domain model types.
//!
//! Plain data structs and pure domain logic, decoupled from persistence. The
//! JSON "bag" columns are parsed here into typed maps with validation at the
//! boundary, never ad hoc at read time.

pub mod alliance;
pub mod bag;
pub mod category;
pub mod db;
pub mod npc;
