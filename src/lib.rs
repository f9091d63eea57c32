//! Random integer fixtures for sorting benchmarks.
//!
//! Seven tiers of `numbers_<count>.txt` files, `count` running from 10 to
//! 10,000,000. Each file holds `count` values drawn uniformly from
//! `[0, count]`, space separated, with no trailing newline.

pub mod config;
pub mod error;
pub mod fixture;
pub mod generator;
pub mod logging;
pub mod sort;
pub mod tier;

pub use config::GeneratorConfig;
pub use error::Error;
pub use fixture::{verify_dir, Fixture, FixtureReport};
pub use generator::{generate, generate_tier, generate_with, write_sequence};
pub use tier::Tier;
