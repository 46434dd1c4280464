use serde::Serialize;

use crate::{
    Config, FieldKind, LIST_SEPARATOR, NO_SPECIFIC, WILDCARD,
    range::FieldRange,
    token::{Atom, Literal, Token},
};

/// Why a segment's text is not legal for its field kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    /// Empty list element, e.g. from `1,,2`.
    #[error("Empty list element")]
    Empty,

    /// Text where digits were required.
    #[error("Not a number: {0:?}")]
    NotNumeric(String),

    /// Step after `/` is not made of digits.
    #[error("Step is not a number: {0:?}")]
    StepNotNumeric(String),

    /// Number outside the field's bounds.
    #[error("Value {value} out of range for {kind} ({range})")]
    OutOfRange {
        value: u32,
        kind:  FieldKind,
        range: FieldRange,
    },

    /// Span whose start is after its end.
    #[error("Span start {start} is after end {end}")]
    InvertedSpan { start: u32, end: u32 },

    /// Day-only syntax used on another field.
    #[error("{token:?} is only allowed in day_of_month and day_of_week, not {kind}")]
    SpecialNotAllowed { token: String, kind: FieldKind },

    /// Step outside `1..=max` when bounded steps are enabled.
    #[error("Step {step} out of range for {kind} (1-{max})")]
    StepOutOfRange { step: u32, kind: FieldKind, max: u32 },

    /// Anything else.
    #[error("Unrecognized token: {0:?}")]
    UnknownToken(String),
}

/// One whitespace-delimited field of an expression, bound to its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    text:   &'a str,
    kind:   FieldKind,
    tokens: Vec<Token<'a>>,
}

impl<'a> Segment<'a> {
    /// Parses `text` as a value of `kind`.
    ///
    /// A bare `*` or `?` is accepted for every kind. Otherwise every
    /// comma-separated element must parse on its own.
    ///
    /// # Errors
    /// Returns the error of the first element that fails.
    pub fn parse(text: &'a str, kind: FieldKind, config: &Config) -> Result<Self, SegmentError> {
        let tokens = match text {
            WILDCARD => vec![Token::Atom(Atom::Wildcard)],
            NO_SPECIFIC => vec![Token::Atom(Atom::Literal(Literal::NoSpecific))],
            _ => text
                .split(LIST_SEPARATOR)
                .map(|part| Token::parse(part, kind, config))
                .collect::<Result<Vec<_>, _>>()
                .inspect_err(|error| {
                    tracing::trace!(segment = text, %kind, %error, "segment rejected");
                })?,
        };
        Ok(Self { text, kind, tokens })
    }

    /// The segment as written
    pub const fn text(&self) -> &'a str {
        self.text
    }

    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Parsed list elements, in order
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }
}

/// Checks one segment under an explicit configuration.
///
/// # Errors
/// Returns the `SegmentError` of the first failing list element.
pub fn check_segment(text: &str, kind: FieldKind, config: &Config) -> Result<(), SegmentError> {
    Segment::parse(text, kind, config).map(|_| ())
}

/// Returns whether `text` is a legal value for `kind` under the default grammar.
pub fn validate_segment(text: &str, kind: FieldKind) -> bool {
    check_segment(text, kind, &Config::default()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wildcards_valid_for_every_kind() {
        for kind in FieldKind::ALL {
            assert!(validate_segment("*", kind), "* on {kind}");
            assert!(validate_segment("?", kind), "? on {kind}");
        }
    }

    #[test]
    fn test_numeric_bounds_for_every_kind() {
        for kind in FieldKind::ALL {
            let range = kind.range();
            assert!(validate_segment(&range.min().to_string(), kind), "min of {kind}");
            assert!(validate_segment(&range.max().to_string(), kind), "max of {kind}");
            assert!(!validate_segment(&(range.max() + 1).to_string(), kind), "max+1 of {kind}");
            if range.min() > 0 {
                assert!(!validate_segment(&(range.min() - 1).to_string(), kind), "min-1 of {kind}");
            }
        }
    }

    #[test]
    fn test_segment_cases() {
        struct TestCase {
            text:     &'static str,
            kind:     FieldKind,
            is_valid: bool,
        }

        let cases = [
            TestCase {
                text:     "*/5",
                kind:     FieldKind::Minute,
                is_valid: true,
            },
            TestCase {
                text:     "*/x",
                kind:     FieldKind::Minute,
                is_valid: false,
            },
            TestCase {
                text:     "0/5",
                kind:     FieldKind::Minute,
                is_valid: true,
            },
            TestCase {
                text:     "10-20/5",
                kind:     FieldKind::Minute,
                is_valid: true,
            },
            TestCase {
                text:     "1,5,10-15",
                kind:     FieldKind::Hour,
                is_valid: true,
            },
            TestCase {
                text:     "1,99",
                kind:     FieldKind::Hour,
                is_valid: false,
            },
            TestCase {
                text:     "5-3",
                kind:     FieldKind::Minute,
                is_valid: false,
            },
            TestCase {
                text:     "0-7",
                kind:     FieldKind::DayOfWeek,
                is_valid: true,
            },
            TestCase {
                text:     "1-5",
                kind:     FieldKind::DayOfWeek,
                is_valid: true,
            },
            TestCase {
                text:     "2025",
                kind:     FieldKind::Year,
                is_valid: true,
            },
            TestCase {
                text:     "1969",
                kind:     FieldKind::Year,
                is_valid: false,
            },
            TestCase {
                text:     "2000-2100",
                kind:     FieldKind::Year,
                is_valid: false,
            },
            TestCase {
                text:     "0",
                kind:     FieldKind::DayOfMonth,
                is_valid: false,
            },
            TestCase {
                text:     "1,,2",
                kind:     FieldKind::Hour,
                is_valid: false,
            },
            TestCase {
                text:     "1,",
                kind:     FieldKind::Hour,
                is_valid: false,
            },
            TestCase {
                text:     "",
                kind:     FieldKind::Hour,
                is_valid: false,
            },
            TestCase {
                text:     "*,5",
                kind:     FieldKind::Hour,
                is_valid: false,
            },
            TestCase {
                text:     "?,5",
                kind:     FieldKind::Hour,
                is_valid: true,
            },
            TestCase {
                text:     "JAN",
                kind:     FieldKind::Month,
                is_valid: false,
            },
            TestCase {
                text:     "-1",
                kind:     FieldKind::Minute,
                is_valid: false,
            },
        ];

        for case in &cases {
            assert_eq!(
                validate_segment(case.text, case.kind),
                case.is_valid,
                "{:?} on {}",
                case.text,
                case.kind
            );
        }
    }

    #[test]
    fn test_day_specials() {
        for text in ["L", "15W", "LW", "3#2", "W", "L,15W"] {
            assert!(validate_segment(text, FieldKind::DayOfMonth), "{text} on day_of_month");
            assert!(validate_segment(text, FieldKind::DayOfWeek), "{text} on day_of_week");
            assert!(!validate_segment(text, FieldKind::Month), "{text} on month");
        }
    }

    #[test]
    fn test_special_digits_not_range_checked() {
        assert!(validate_segment("99W", FieldKind::DayOfMonth));
        assert!(validate_segment("9#9", FieldKind::DayOfWeek));
    }

    #[test]
    fn test_every_list_element_is_checked() {
        // A matching special must not excuse a later out-of-range element.
        assert!(!validate_segment("L,99", FieldKind::DayOfMonth));
        assert!(!validate_segment("15W,0", FieldKind::DayOfMonth));
    }

    #[test]
    fn test_named_weekday_ordinal_rejected_by_default() {
        assert!(!validate_segment("MON#2", FieldKind::DayOfWeek));
        assert!(check_segment("MON#2", FieldKind::DayOfWeek, &Config::new(true, false)).is_ok());
    }

    #[test]
    fn test_segment_keeps_tokens() {
        let segment = Segment::parse("1,5-7,*/2", FieldKind::Hour, &Config::default()).unwrap();
        assert_eq!(segment.text(), "1,5-7,*/2");
        assert_eq!(segment.kind(), FieldKind::Hour);
        assert_eq!(segment.tokens().len(), 3);
        assert_eq!(segment.tokens()[0], Token::Atom(Atom::Value(1)));
    }

    #[test]
    fn test_error_message() {
        let err = check_segment("1,99", FieldKind::Hour, &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "Value 99 out of range for hour (0-23)");

        let err = check_segment("L", FieldKind::Month, &Config::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#""L" is only allowed in day_of_month and day_of_week, not month"#
        );
    }

    fn any_kind() -> impl Strategy<Value = FieldKind> {
        prop::sample::select(FieldKind::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_numeric_validity_is_closed_interval(kind in any_kind(), value in 0u32..3000) {
            let range = kind.range();
            let expected = range.min() <= value && value <= range.max();
            prop_assert_eq!(validate_segment(&value.to_string(), kind), expected);
        }

        #[test]
        fn prop_span_validity(kind in any_kind(), start in 0u32..2200, end in 0u32..2200) {
            let range = kind.range();
            let expected = range.min() <= start && start <= end && end <= range.max();
            let text = format!("{start}-{end}");
            prop_assert_eq!(validate_segment(&text, kind), expected);
        }

        #[test]
        fn prop_digit_steps_are_accepted(kind in any_kind(), step in 0u32..10_000) {
            let text = format!("*/{step}");
            prop_assert!(validate_segment(&text, kind), "step {} rejected on {}", step, kind);
        }
    }
}
