pub mod text;
pub mod json;

pub use text::TextFormatter;
pub use json::JsonFormatter;

use crate::hitzones::types::MonsterRecord;
use crate::hitzones::view_builder::{build_collapsed_view, build_plain_view, build_ranked_view};
use crate::utils::lookup_tables::RatingConfig;

/// Which view of a monster to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Plain,
    Ranked,
    Collapsed,
}

impl ViewKind {
    /// `stars=1` is per-tab ranked, `stars=2` collapsed, anything else plain
    pub fn from_stars_param(stars: Option<&str>) -> Self {
        match stars.map(str::trim) {
            Some("1") => ViewKind::Ranked,
            Some("2") => ViewKind::Collapsed,
            _ => ViewKind::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    /// Only `format=json` (any case) selects JSON
    pub fn from_param(format: Option<&str>) -> Self {
        match format {
            Some(f) if f.trim().eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Text => "text/plain; charset=utf-8",
        }
    }
}

/// A rendered response body with its content type
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub format: OutputFormat,
    pub body: String,
}

/// Build and render one view. The plain view has no text form and is
/// always JSON.
pub fn render_monster(
    monster: &MonsterRecord,
    view: ViewKind,
    format: OutputFormat,
    config: &RatingConfig,
) -> Result<Rendered, serde_json::Error> {
    let (format, body) = match (view, format) {
        (ViewKind::Plain, _) => (
            OutputFormat::Json,
            JsonFormatter::format_compact(&build_plain_view(monster, config))?,
        ),
        (ViewKind::Ranked, OutputFormat::Json) => (
            format,
            JsonFormatter::format_compact(&build_ranked_view(monster, config))?,
        ),
        (ViewKind::Ranked, OutputFormat::Text) => (
            format,
            TextFormatter::format_ranked(&build_ranked_view(monster, config), config),
        ),
        (ViewKind::Collapsed, OutputFormat::Json) => (
            format,
            JsonFormatter::format_compact(&build_collapsed_view(monster, config))?,
        ),
        (ViewKind::Collapsed, OutputFormat::Text) => (
            format,
            TextFormatter::format_collapsed(&build_collapsed_view(monster, config), config),
        ),
    };

    Ok(Rendered { format, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hitzones::types::{BodyPartRecord, Tab, WeaponKey};

    fn monster() -> MonsterRecord {
        MonsterRecord {
            name: "Kirin".to_string(),
            slug: "kirin".to_string(),
            url: None,
            tabs: vec![Tab {
                name: "A".to_string(),
                rows: vec![BodyPartRecord::new("Horn").with(WeaponKey::Cut, 45.0)],
            }],
            status: vec![],
        }
    }

    #[test]
    fn test_params() {
        assert_eq!(ViewKind::from_stars_param(Some("1")), ViewKind::Ranked);
        assert_eq!(ViewKind::from_stars_param(Some("2")), ViewKind::Collapsed);
        assert_eq!(ViewKind::from_stars_param(Some("3")), ViewKind::Plain);
        assert_eq!(ViewKind::from_stars_param(None), ViewKind::Plain);
        assert_eq!(OutputFormat::from_param(Some("JSON")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_param(Some("txt")), OutputFormat::Text);
        assert_eq!(OutputFormat::from_param(None), OutputFormat::Text);
    }

    #[test]
    fn test_plain_is_always_json() {
        let cfg = RatingConfig::default();
        let rendered = render_monster(&monster(), ViewKind::Plain, OutputFormat::Text, &cfg).unwrap();
        assert_eq!(rendered.format, OutputFormat::Json);
        assert!(rendered.body.starts_with('{'));
    }

    #[test]
    fn test_ranked_text_and_json() {
        let cfg = RatingConfig::default();
        let text = render_monster(&monster(), ViewKind::Ranked, OutputFormat::Text, &cfg).unwrap();
        assert_eq!(text.format.content_type(), "text/plain; charset=utf-8");
        assert!(text.body.contains("Horn: ⚔️★★★"));

        let json = render_monster(&monster(), ViewKind::Collapsed, OutputFormat::Json, &cfg).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json.body).unwrap();
        assert_eq!(value["header"]["best_weapons"][0]["part"], "Horn");
    }
}
