//! Testing infrastructure for catalog integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `assertions`: checks against `--format json` output
//! - `fixtures`: sample images and seeded catalogs

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
