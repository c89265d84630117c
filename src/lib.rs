//! Hitzone API
//!
//! Rates monster hitzones into 1-3 star tiers and serves three views per
//! monster (plain, per-tab ranked, collapsed ranked) over HTTP.
//!
//! - `utils/`: threshold classification and the rating lookup tables
//! - `hitzones/`: data model, normalization, merge, ranking, views, formatters
//! - `data`: dataset loading
//! - `search_index`: monster listing and search
//! - `api_server`: Axum router and handlers (feature `api`)

pub mod utils;
pub mod hitzones;
pub mod data;
pub mod search_index;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use utils::{classify, RatingConfig, StarRating, ThresholdProfile};
pub use hitzones::{
    build_collapsed_view, build_plain_view, build_ranked_view, render_monster, MonsterRecord,
    OutputFormat, ViewKind,
};
pub use data::{Dataset, DatasetError};
pub use search_index::SearchIndex;
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
