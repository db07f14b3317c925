//! tuxlevel engine library.
//!
//! Loads SuperTux level documents into `tuxlevel_domain::Level` aggregates
//! and creates new levels and worldmaps.
//!
//! ## Structure
//!
//! - `infrastructure/` - Document reader, port traits and their adapters
//! - `use_cases/` - Level loading, name probing and creation
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end tests against real directories.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
