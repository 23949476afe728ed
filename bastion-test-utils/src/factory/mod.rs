//! Fixture factories for domain entities.
//!
//! Each factory returns an `ActiveModel` populated with standard test values,
//! plus insert helpers that persist the row and return the stored model. The
//! `*_with` variants expose the active model for per-test overrides.

pub mod alliance;
pub mod category;
pub mod npc;
pub mod user;
