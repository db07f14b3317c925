//! End-to-end tests.
//!
//! These tests build the complete `App` over real temporary directories and
//! drive it through its use cases, the same way the `tuxlevel` binary does.
//!
//! ```bash
//! cargo test -p tuxlevel-engine --lib e2e_tests
//! ```

mod e2e_helpers;
mod level_flow_tests;

pub use e2e_helpers::*;
