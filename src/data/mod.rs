//! Data repositories.
//!
//! Repositories are thin persistence adapters over the SeaORM entities; all
//! domain rules live in the service layer. Each repository borrows any
//! connection-like handle so services can run them inside a transaction.

pub mod alliance;
pub mod npc;
pub mod user;
