use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    MAX_DAY_OF_MONTH, MAX_DAY_OF_WEEK, MAX_HOUR, MAX_MONTH, MAX_SECOND, MAX_YEAR, MIN_DAY_OF_MONTH,
    MIN_DAY_OF_WEEK, MIN_HOUR, MIN_MONTH, MIN_SECOND, MIN_YEAR, QUARTZ_SEVEN_FIELDS,
    QUARTZ_SEVEN_SEGMENTS, QUARTZ_SIX_FIELDS, QUARTZ_SIX_SEGMENTS, UNIX_FIELDS, UNIX_SEGMENTS,
};
use crate::prelude::*;
use crate::range::FieldRange;

/// The semantic role of one segment position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "day_of_month")]
    DayOfMonth,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day_of_week")]
    DayOfWeek,
    #[display(fmt = "year")]
    Year,
}

impl FieldKind {
    /// Every field kind, in the order they appear in a seven-segment expression
    pub const ALL: [Self; 7] = QUARTZ_SEVEN_FIELDS;

    /// Returns the inclusive numeric bounds for this kind.
    pub const fn range(self) -> FieldRange {
        match self {
            Self::Second | Self::Minute => FieldRange::new(MIN_SECOND, MAX_SECOND),
            Self::Hour => FieldRange::new(MIN_HOUR, MAX_HOUR),
            Self::DayOfMonth => FieldRange::new(MIN_DAY_OF_MONTH, MAX_DAY_OF_MONTH),
            Self::Month => FieldRange::new(MIN_MONTH, MAX_MONTH),
            Self::DayOfWeek => FieldRange::new(MIN_DAY_OF_WEEK, MAX_DAY_OF_WEEK),
            Self::Year => FieldRange::new(MIN_YEAR, MAX_YEAR),
        }
    }

    /// Whether `L`, `W`, `LW` and `#` ordinals are meaningful for this kind.
    pub const fn allows_specials(self) -> bool {
        matches!(self, Self::DayOfMonth | Self::DayOfWeek)
    }

    /// Snake-case name, as used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day_of_month",
            Self::Month => "month",
            Self::DayOfWeek => "day_of_week",
            Self::Year => "year",
        }
    }
}

/// Error returned when a name does not match any known kind or dialect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {what}: {name}")]
pub struct UnknownNameError {
    what: &'static str,
    name: String,
}

impl FromStr for FieldKind {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == trimmed)
            .ok_or_else(|| UnknownNameError {
                what: "field kind",
                name: trimmed.to_owned(),
            })
    }
}

/// One of the supported cron formats, distinguished solely by segment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// minute hour day-of-month month day-of-week
    #[display(fmt = "Unix")]
    Unix,
    /// second minute hour day-of-month month day-of-week
    #[display(fmt = "Quartz (6-segment)")]
    QuartzSix,
    /// Quartz six-segment layout followed by year
    #[display(fmt = "Quartz (7-segment)")]
    QuartzSeven,
}

impl Dialect {
    pub const ALL: [Self; 3] = [Self::Unix, Self::QuartzSix, Self::QuartzSeven];

    /// Picks the dialect for a segment count, if one exists.
    pub const fn from_segment_count(count: usize) -> Option<Self> {
        match count {
            UNIX_SEGMENTS => Some(Self::Unix),
            QUARTZ_SIX_SEGMENTS => Some(Self::QuartzSix),
            QUARTZ_SEVEN_SEGMENTS => Some(Self::QuartzSeven),
            _ => None,
        }
    }

    /// Field kinds in segment order. The slice length is the segment count.
    pub const fn fields(self) -> &'static [FieldKind] {
        match self {
            Self::Unix => &UNIX_FIELDS,
            Self::QuartzSix => &QUARTZ_SIX_FIELDS,
            Self::QuartzSeven => &QUARTZ_SEVEN_FIELDS,
        }
    }

    pub const fn segment_count(self) -> usize {
        self.fields().len()
    }

    /// Human readable name, e.g. `Quartz (6-segment)`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unix => "Unix",
            Self::QuartzSix => "Quartz (6-segment)",
            Self::QuartzSeven => "Quartz (7-segment)",
        }
    }

    const fn key(self) -> &'static str {
        match self {
            Self::Unix => "unix",
            Self::QuartzSix => "quartz_six",
            Self::QuartzSeven => "quartz_seven",
        }
    }
}

impl FromStr for Dialect {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.key() == trimmed || dialect.name() == trimmed)
            .ok_or_else(|| UnknownNameError {
                what: "dialect",
                name: trimmed.to_owned(),
            })
    }
}
