//! Domain models for equipment, maintenance requests, teams, and users.

pub mod activity;
pub mod equipment;
pub mod maintenance_request;
pub mod team;
pub mod user;
