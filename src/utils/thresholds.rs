/// Star Rating Thresholds
///
/// Converts numeric hitzone and status values into the three-tier star scale
/// (plus "unrated") shown in every ranked view.
///
/// Two profile families exist:
/// - Ascending (weapon raw, element): higher value = more stars
/// - Descending (status initial build-up): lower value = more stars
use serde::Serialize;
use std::fmt;

/// Status build-up bands. Applied to every descending profile regardless of
/// its own cut-points.
pub const STATUS_THREE_MAX: f64 = 150.0;
pub const STATUS_TWO_MAX: f64 = 300.0;
pub const STATUS_ONE_MAX: f64 = 500.0;

/// Star rating, ordered Unrated < One < Two < Three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum StarRating {
    #[default]
    Unrated,
    One,
    Two,
    Three,
}

impl StarRating {
    /// Display symbol used in both JSON and text output
    pub fn symbol(self) -> &'static str {
        match self {
            StarRating::Unrated => "—",
            StarRating::One => "★",
            StarRating::Two => "★★",
            StarRating::Three => "★★★",
        }
    }

    pub fn is_rated(self) -> bool {
        self != StarRating::Unrated
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for StarRating {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

/// Ordered cut-points `(one, two, three)` plus the direction they apply in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdProfile {
    #[serde(serialize_with = "serialize_cut_point")]
    pub one: f64,
    #[serde(serialize_with = "serialize_cut_point")]
    pub two: f64,
    #[serde(serialize_with = "serialize_cut_point")]
    pub three: f64,
    #[serde(skip)]
    pub direction: Direction,
}

impl ThresholdProfile {
    /// Weapon raw effectiveness (cut/blunt/shot)
    pub const RAW: ThresholdProfile = ThresholdProfile::ascending(25.0, 35.0, 45.0);

    /// Elemental effectiveness (fire/water/thunder/ice/dragon)
    pub const ELEMENT: ThresholdProfile = ThresholdProfile::ascending(10.0, 20.0, 25.0);

    /// Status initial build-up. The triple is carried for the legend only;
    /// classification uses the fixed STATUS_* bands.
    pub const STATUS: ThresholdProfile = ThresholdProfile {
        one: 300.0,
        two: 150.0,
        three: 0.0,
        direction: Direction::Descending,
    };

    pub const fn ascending(one: f64, two: f64, three: f64) -> Self {
        Self { one, two, three, direction: Direction::Ascending }
    }
}

/// Cut-points print as integers when they are whole (`45`, not `45.0`)
pub(crate) fn serialize_cut_point<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Classify a value under a profile.
///
/// NaN is treated as "not a number" and is always Unrated.
pub fn classify(value: f64, profile: &ThresholdProfile) -> StarRating {
    if value.is_nan() {
        return StarRating::Unrated;
    }

    match profile.direction {
        Direction::Ascending => {
            if value >= profile.three {
                StarRating::Three
            } else if value >= profile.two {
                StarRating::Two
            } else if value >= profile.one {
                StarRating::One
            } else {
                StarRating::Unrated
            }
        }
        // Bands start at zero: negative build-up is meaningless and stays unrated
        Direction::Descending => {
            if value < 0.0 {
                StarRating::Unrated
            } else if value <= STATUS_THREE_MAX {
                StarRating::Three
            } else if value <= STATUS_TWO_MAX {
                StarRating::Two
            } else if value <= STATUS_ONE_MAX {
                StarRating::One
            } else {
                StarRating::Unrated
            }
        }
    }
}

/// Same as [`classify`] but Unrated becomes `None`, for filtering ranked output.
pub fn classify_or_absent(value: f64, profile: &ThresholdProfile) -> Option<StarRating> {
    let stars = classify(value, profile);
    stars.is_rated().then_some(stars)
}
