//! Service layer.
//!
//! Services hold the domain rules and drive the repositories, opening a
//! transaction whenever an operation spans more than one write. Callers are
//! trusted to supply an authenticated user ID; no authentication happens here.

pub mod alliance;
pub mod category;
pub mod membership;
pub mod npc;
