#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Test-fixture staging for fixstage
//!
//! This crate copies configured files and directories into place before a
//! test run and removes them afterwards. Validation is front-loaded:
//! sources are checked for existence and readability, and destination
//! parents are created and checked for writability, when the manager is
//! constructed, so a partially-completed copy never starts against a
//! known-bad pair.

pub mod manager;
pub mod mapping;

// Re-export main types for external usage
pub use manager::StagingManager;
pub use mapping::MappingEntry;
