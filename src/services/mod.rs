//! Business logic services.

pub mod auth;
pub mod stats;
pub mod team;
