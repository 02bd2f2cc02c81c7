//! Shared UI crate for Likeboard. Dashboard logic and views live here.

pub mod core;
pub mod dashboard;
pub mod ingest;
pub mod metrics;
pub mod views;
