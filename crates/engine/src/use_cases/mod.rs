//! Use cases - User story orchestration.
//!
//! Use cases orchestrate the ports in `infrastructure` to fulfill user
//! stories.

pub mod level;

pub use level::{CreateLevel, LevelError, LevelUseCases, LoadLevel, ProbeLevelName};
