//! # SakeMap Core Library
//!
//! Platform-independent domain core for the SakeMap tasting log:
//! - Drink record model (immutable value type, ULID identity)
//! - Closed drink-type and prefecture enumerations with display names
//! - Form validation (pure, per-field)
//! - Prefecture coverage statistics
//! - Repository abstraction with SQLite and in-memory implementations

pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod repository;
pub mod stats;
pub mod validation;

pub use error::{Error, Result};
pub use model::{DrinkRecord, DrinkRecordId, DrinkType, Prefecture};
pub use repository::DrinkRecordRepository;
