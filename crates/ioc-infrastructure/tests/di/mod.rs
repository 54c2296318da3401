//! Container Graph Tests
//!
//! End-to-end resolution across element maps, scopes and threads:
//! - Dependency graphs wired through shared and private references
//! - Parent and child containers assembled with the bootstrap builder
//! - File-based element maps driven by configuration

mod threading_tests;
