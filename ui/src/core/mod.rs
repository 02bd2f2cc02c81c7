//! Platform-agnostic building blocks shared by the dashboard views.

pub mod config;
pub mod format;
pub mod timing;
