//! Travel direction types and road-name normalization.
//!
//! Two enums that look alike but mean different things:
//!
//! - [`Direction`] is the *resolved* carriageway a route uses on one road.
//!   `Unknown` means "could not determine", never "omnidirectional".
//! - [`DirectionLabel`] is the *static* label on a facility record describing
//!   which carriageway it serves.

use std::fmt;

/// Per-road outcome of direction inference.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Direction {
    /// Travelling towards the road's administrative origin (weights decrease).
    Up,
    /// Travelling away from the origin (weights increase).
    Down,
    Both,
    /// Not enough marker evidence.
    #[default]
    Unknown,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up      => "UP",
            Direction::Down    => "DOWN",
            Direction::Both    => "BOTH",
            Direction::Unknown => "UNKNOWN",
        }
    }

    /// Label as stored in the facility records ("상행", "하행", ...).
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up      => "상행",
            Direction::Down    => "하행",
            Direction::Both    => "양방향",
            Direction::Unknown => "판별 불가",
        }
    }

    #[inline]
    pub fn is_known(self) -> bool {
        !matches!(self, Direction::Unknown)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const BOTH_KEYWORDS: [&str; 3] = ["양방향", "상하행", "통합"];
const UP_KEYWORDS:   [&str; 3] = ["상행", "북", "서울"];
const DOWN_KEYWORDS: [&str; 3] = ["하행", "남", "부산"];

/// Which carriageway a facility serves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum DirectionLabel {
    Up,
    Down,
    Both,
    /// No label recorded, or one we cannot interpret.
    #[default]
    Unspecified,
}

impl DirectionLabel {
    /// Parse a stored label.
    ///
    /// The canonical codes (`UP`, `DOWN`, `BOTH`, any case) match exactly.
    /// Free-text labels from the highway authority data match by keyword,
    /// both-way keywords first since "상하행" also contains "하행":
    ///
    /// | Label  | Any of                     |
    /// |--------|----------------------------|
    /// | `Both` | 양방향, 상하행, 통합       |
    /// | `Up`   | 상행, 북, 서울             |
    /// | `Down` | 하행, 남, 부산             |
    ///
    /// Anything else, including the empty string, is
    /// [`DirectionLabel::Unspecified`].
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("UP") {
            return DirectionLabel::Up;
        }
        if s.eq_ignore_ascii_case("DOWN") {
            return DirectionLabel::Down;
        }
        if s.eq_ignore_ascii_case("BOTH") {
            return DirectionLabel::Both;
        }

        let has = |keys: &[&str]| keys.iter().any(|k| s.contains(k));
        if has(&BOTH_KEYWORDS) {
            DirectionLabel::Both
        } else if has(&UP_KEYWORDS) {
            DirectionLabel::Up
        } else if has(&DOWN_KEYWORDS) {
            DirectionLabel::Down
        } else {
            DirectionLabel::Unspecified
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DirectionLabel::Up          => "UP",
            DirectionLabel::Down        => "DOWN",
            DirectionLabel::Both        => "BOTH",
            DirectionLabel::Unspecified => "UNSPECIFIED",
        }
    }

    /// `true` if a facility with this label serves the resolved `direction`.
    ///
    /// Only an exact carriageway match counts here; the `Both` and
    /// `Unknown` allowances live in the accessibility filter.
    #[inline]
    pub fn matches(self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (DirectionLabel::Up, Direction::Up)
                | (DirectionLabel::Down, Direction::Down)
                | (DirectionLabel::Both, Direction::Both)
        )
    }
}

impl fmt::Display for DirectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suffixes the road authority uses interchangeably for the same road.
const ROAD_SUFFIXES: [&str; 3] = ["고속도로", "고속국도", "자동차도"];

/// Canonical form of a road name: "경부고속도로" and "경부선" both become
/// "경부선".  Names without a known suffix are only trimmed.
pub fn normalize_road_name(name: &str) -> String {
    let trimmed = name.trim();
    for suffix in ROAD_SUFFIXES {
        if let Some(stem) = trimmed.strip_suffix(suffix) {
            return format!("{}선", stem.trim_end());
        }
    }
    trimmed.to_owned()
}
