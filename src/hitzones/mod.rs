//! Hitzone rating core
//!
//! Typed monster records, normalization from the loose dataset JSON, tab
//! merging, top-k ranking, and the three monster views with their text and
//! JSON renderings. Everything here is pure and allocation-only.

pub mod types;
pub mod normalize;
pub mod merge;
pub mod ranking;
pub mod view_models;
pub mod view_builder;
pub mod formatters;
pub mod legend;

pub use types::{BodyPartRecord, ElementKey, MonsterRecord, StatusEntry, Tab, WeaponKey, ZoneKey, ZoneValue};
pub use merge::{merge_all, merge_tabs};
pub use ranking::{best_element_key, top_for_key, RankedPart};
pub use view_models::{CollapsedView, PlainView, RankedView};
pub use view_builder::{build_collapsed_view, build_plain_view, build_ranked_view, build_status_summary};
pub use formatters::{render_monster, JsonFormatter, OutputFormat, Rendered, TextFormatter, ViewKind};
pub use legend::{build_legend, Legend};
