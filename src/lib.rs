//! Domain core for the Bastion game and community platform.
//!
//! This crate owns the alliance registry, the membership ledger, the category
//! engine, and the NPC subsystem. Callers (the route layer) supply an already
//! authenticated user identity; nothing here performs authentication. All
//! persistence goes through SeaORM repositories in [`data`], orchestrated by
//! the services in [`service`].

pub mod config;
pub mod data;
pub mod db;
pub mod error;
pub mod model;
pub mod service;
