//! Referee test support utilities
//!
//! Shared by the integration test binaries of the referee crate.

pub mod logging;
