//! Typed form of one comma-separated sub-token.

use serde::Serialize;

use crate::range::{Span, is_digits, parse_number};
use crate::{
    Config, FieldKind, LAST, LAST_WEEKDAY, NO_SPECIFIC, NTH_SEPARATOR, STEP_SEPARATOR, WEEKDAY,
    WEEKDAY_NAMES, WILDCARD, segment::SegmentError,
};

/// Day-only syntax. The digits are kept as written and never range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Special<'a> {
    /// `L`
    Last,
    /// `LW`
    LastWeekday,
    /// `15W`: the weekday nearest to the given day
    NearestWeekday { day: &'a str },
    /// `5#3`: the nth occurrence of a weekday. `weekday` may be a name
    /// such as `MON` when named ordinals are enabled.
    Nth { weekday: &'a str, nth: &'a str },
}

impl<'a> Special<'a> {
    fn parse(text: &'a str, kind: FieldKind, config: &Config) -> Option<Self> {
        if text == LAST {
            return Some(Self::Last);
        }
        if text == LAST_WEEKDAY {
            return Some(Self::LastWeekday);
        }
        if let Some(day) = text.strip_suffix(WEEKDAY).filter(|day| is_digits(day)) {
            return Some(Self::NearestWeekday { day });
        }

        let (weekday, nth) = text.split_once(NTH_SEPARATOR)?;
        if !is_digits(nth) {
            return None;
        }
        let named = config.named_weekday_ordinals
            && kind == FieldKind::DayOfWeek
            && WEEKDAY_NAMES.iter().any(|name| name.eq_ignore_ascii_case(weekday));
        (is_digits(weekday) || named).then_some(Self::Nth { weekday, nth })
    }
}

/// Bare literals accepted where a number would otherwise go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    /// `?`
    NoSpecific,
    /// `L`
    Last,
    /// `W`
    Weekday,
}

impl Literal {
    fn parse(text: &str) -> Option<Self> {
        match text {
            NO_SPECIFIC => Some(Self::NoSpecific),
            LAST => Some(Self::Last),
            WEEKDAY => Some(Self::Weekday),
            _ => None,
        }
    }

    const fn is_day_only(self) -> bool {
        matches!(self, Self::Last | Self::Weekday)
    }
}

/// A single value-producing element, already checked against its field's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Atom {
    /// `*`; only reachable as the base of a step
    Wildcard,
    Value(u32),
    Span(Span),
    Literal(Literal),
}

impl Atom {
    fn parse(text: &str, kind: FieldKind, allow_wildcard: bool) -> Result<Self, SegmentError> {
        if text.is_empty() {
            return Err(SegmentError::Empty);
        }
        if allow_wildcard && text == WILDCARD {
            return Ok(Self::Wildcard);
        }
        if let Some((start, end)) = Span::split(text)? {
            return Ok(Self::Span(Span::new(start, end, kind)?));
        }
        if is_digits(text) {
            return Ok(Self::Value(kind.range().check(parse_number(text)?, kind)?));
        }

        match Literal::parse(text) {
            Some(literal) if literal.is_day_only() && !kind.allows_specials() => {
                Err(SegmentError::SpecialNotAllowed {
                    token: text.to_owned(),
                    kind,
                })
            }
            Some(literal) => Ok(Self::Literal(literal)),
            None => Err(SegmentError::UnknownToken(text.to_owned())),
        }
    }
}

/// One parsed sub-token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Token<'a> {
    Special(Special<'a>),
    Atom(Atom),
    Step { base: Atom, step: u32 },
}

impl<'a> Token<'a> {
    /// Parses and validates one sub-token for `kind`.
    ///
    /// Special tokens are tried first so that `15W` is not mistaken for a
    /// malformed number. They never combine with step or span syntax.
    ///
    /// # Errors
    /// Returns the first `SegmentError` found in the sub-token.
    pub fn parse(text: &'a str, kind: FieldKind, config: &Config) -> Result<Self, SegmentError> {
        if text.is_empty() {
            return Err(SegmentError::Empty);
        }

        if let Some(special) = Special::parse(text, kind, config) {
            if !kind.allows_specials() {
                return Err(SegmentError::SpecialNotAllowed {
                    token: text.to_owned(),
                    kind,
                });
            }
            return Ok(Self::Special(special));
        }

        let Some((base, step)) = text.split_once(STEP_SEPARATOR) else {
            return Ok(Self::Atom(Atom::parse(text, kind, false)?));
        };
        let step = parse_step(step, kind, config)?;
        let base = Atom::parse(base, kind, true)?;
        Ok(Self::Step { base, step })
    }
}

fn parse_step(text: &str, kind: FieldKind, config: &Config) -> Result<u32, SegmentError> {
    let step = parse_number(text).map_err(|_| SegmentError::StepNotNumeric(text.to_owned()))?;
    let max = kind.range().max();
    if config.bounded_steps && !(1..=max).contains(&step) {
        return Err(SegmentError::StepOutOfRange { step, kind, max });
    }
    Ok(step)
}
