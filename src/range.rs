use serde::Serialize;

use crate::{FieldKind, SPAN_SEPARATOR, prelude::*, segment::SegmentError};

/// Inclusive numeric bounds of one field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{min}-{max}")]
pub struct FieldRange {
    min: u32,
    max: u32,
}

impl FieldRange {
    pub(crate) const fn new(min: u32, max: u32) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Smallest legal value
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Largest legal value (inclusive)
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Checks if `value` lies within the bounds
    pub const fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Validates a single value against the bounds of `kind`.
    ///
    /// # Errors
    /// Returns `SegmentError::OutOfRange` if the value falls outside.
    pub fn check(&self, value: u32, kind: FieldKind) -> Result<u32, SegmentError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(SegmentError::OutOfRange {
                value,
                kind,
                range: *self,
            })
        }
    }
}

/// A `start-end` span inside a segment, both ends inclusive.
/// The start is always less than or equal to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{start}-{end}")]
pub struct Span {
    start: u32,
    end:   u32,
}

impl Span {
    /// Creates a span, validating order and bounds for `kind`.
    ///
    /// # Errors
    /// Returns `SegmentError::InvertedSpan` if start > end, or
    /// `SegmentError::OutOfRange` if either end is outside the field's bounds.
    pub fn new(start: u32, end: u32, kind: FieldKind) -> Result<Self, SegmentError> {
        let range = kind.range();
        range.check(start, kind)?;
        range.check(end, kind)?;
        if start > end {
            return Err(SegmentError::InvertedSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Splits `text` at the first separator into its two numeric ends.
    /// Returns `Ok(None)` when the text holds no separator at all.
    ///
    /// # Errors
    /// Returns `SegmentError::NotNumeric` if either side is not made of digits.
    pub(crate) fn split(text: &str) -> Result<Option<(u32, u32)>, SegmentError> {
        let Some((start, end)) = text.split_once(SPAN_SEPARATOR) else {
            return Ok(None);
        };
        Ok(Some((parse_number(start)?, parse_number(end)?)))
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn end(&self) -> u32 {
        self.end
    }
}

/// Checks that `text` is a non-empty run of ASCII digits.
pub(crate) fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a run of ASCII digits. Values too large for `u32` saturate,
/// so they are still reported as out of range rather than malformed.
pub(crate) fn parse_number(text: &str) -> Result<u32, SegmentError> {
    if !is_digits(text) {
        return Err(SegmentError::NotNumeric(text.to_owned()));
    }
    Ok(text.parse::<u32>().unwrap_or(u32::MAX))
}
