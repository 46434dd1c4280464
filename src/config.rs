//! Runtime switches for the parts of the grammar that cron dialects disagree on.

use serde::{Deserialize, Serialize};

/// Grammar options. The default is the strict digit-only grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accept `MON#2`-style ordinals on day-of-week, with a three-letter
    /// weekday name in place of the weekday number.
    pub named_weekday_ordinals: bool,

    /// Require step values to lie in `1..=max` of their field.
    /// When off, any digit string is a legal step.
    pub bounded_steps: bool,
}

impl Config {
    /// Create a new configuration with the given switches.
    pub const fn new(named_weekday_ordinals: bool, bounded_steps: bool) -> Self {
        Self {
            named_weekday_ordinals,
            bounded_steps,
        }
    }
}
