//! Utility modules for hitzone rating
//!
//! Contains the pieces every view shares:
//! - Thresholds: star classification under a profile
//! - Lookup tables: profiles, icons and key enumerations in one config value

pub mod thresholds;
pub mod lookup_tables;

// Re-export commonly used types
pub use thresholds::{classify, classify_or_absent, Direction, StarRating, ThresholdProfile};
pub use lookup_tables::RatingConfig;
