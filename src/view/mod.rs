//! Presentation models: the dashboard view, its time formatting, and navigation.

pub mod dashboard;
pub mod navigation;
pub mod relative_time;
