//! Error types for the Bastion domain core.
//!
//! Domain errors are grouped per subsystem (alliance registry, category
//! engine, membership ledger, NPC subsystem) plus a shared validation error
//! for malformed JSON bag fields. Database-level failures pass through as
//! `sea_orm::DbErr` so callers can tell constraint violations apart from
//! domain rule violations.

pub mod alliance;
pub mod category;
pub mod membership;
pub mod npc;
pub mod validation;

use thiserror::Error;

pub use alliance::AllianceError;
pub use category::CategoryError;
pub use membership::MembershipError;
pub use npc::NpcError;
pub use validation::ValidationError;

/// Aggregate error type for all domain operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    AllianceError(#[from] AllianceError),
    #[error(transparent)]
    CategoryError(#[from] CategoryError),
    #[error(transparent)]
    MembershipError(#[from] MembershipError),
    #[error(transparent)]
    NpcError(#[from] NpcError),
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
