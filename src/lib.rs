mod config;
mod consts;
mod prelude;
mod range;
mod segment;
mod token;
mod types;

pub use config::Config;
pub use consts::*;
pub use range::{FieldRange, Span};
pub use segment::{Segment, SegmentError, check_segment, validate_segment};
pub use token::{Atom, Literal, Special, Token};
pub use types::{Dialect, FieldKind, UnknownNameError};

use crate::prelude::*;
use serde::Serialize;

/// Why an expression was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Segment count is not 5, 6 or 7.
    #[error("Invalid segment count: {0}.")]
    MalformedArity(usize),

    /// One segment is not legal for its position.
    #[error("Invalid field `{text}` in segment `{kind}`.")]
    InvalidSegment {
        index:   usize,
        text:    String,
        kind:    FieldKind,
        dialect: Dialect,
        #[source]
        source:  SegmentError,
    },
}

impl ValidationError {
    /// The dialect implied by the segment count, if there was one
    pub const fn dialect(&self) -> Option<Dialect> {
        match self {
            Self::MalformedArity(_) => None,
            Self::InvalidSegment { dialect, .. } => Some(*dialect),
        }
    }
}

/// A well-formed cron expression, split into typed segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expression<'a> {
    dialect:  Dialect,
    segments: Vec<Segment<'a>>,
}

impl<'a> Expression<'a> {
    /// Parses `text` with the default grammar.
    ///
    /// # Errors
    /// Returns `ValidationError::MalformedArity` when the segment count matches
    /// no dialect, or `ValidationError::InvalidSegment` for the first bad segment.
    pub fn parse(text: &'a str) -> Result<Self, ValidationError> {
        Self::parse_with(text, &Config::default())
    }

    /// Parses `text` with an explicit configuration.
    ///
    /// # Errors
    /// See [`Expression::parse`].
    pub fn parse_with(text: &'a str, config: &Config) -> Result<Self, ValidationError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        let dialect = Dialect::from_segment_count(parts.len()).ok_or_else(|| {
            tracing::debug!(count = parts.len(), "no dialect for segment count");
            ValidationError::MalformedArity(parts.len())
        })?;

        let segments = parts
            .into_iter()
            .zip(dialect.fields())
            .enumerate()
            .map(|(index, (part, &kind))| {
                Segment::parse(part, kind, config).map_err(|source| {
                    tracing::debug!(
                        index,
                        segment = part,
                        %kind,
                        %dialect,
                        error = %source,
                        "invalid segment"
                    );
                    ValidationError::InvalidSegment {
                        index,
                        text: part.to_owned(),
                        kind,
                        dialect,
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { dialect, segments })
    }

    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Segments in position order
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }
}

/// Result of validating one expression.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    #[display(fmt = "Valid {_0} cron expression.")]
    Valid(Dialect),
    #[display(fmt = "{reason}")]
    Invalid { reason: String, dialect: Dialect },
    #[display(fmt = "Invalid segment count: {_0}.")]
    MalformedArity(usize),
}

impl ValidationOutcome {
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The dialect, if the segment count selected one
    pub const fn dialect(&self) -> Option<Dialect> {
        match self {
            Self::Valid(dialect) | Self::Invalid { dialect, .. } => Some(*dialect),
            Self::MalformedArity(_) => None,
        }
    }

    /// User-facing message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<Result<Dialect, ValidationError>> for ValidationOutcome {
    fn from(result: Result<Dialect, ValidationError>) -> Self {
        match result {
            Ok(dialect) => Self::Valid(dialect),
            Err(ValidationError::MalformedArity(count)) => Self::MalformedArity(count),
            Err(err @ ValidationError::InvalidSegment { dialect, .. }) => Self::Invalid {
                reason: err.to_string(),
                dialect,
            },
        }
    }
}

/// Flat form of an outcome for rendering or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub ok:      bool,
    pub message: String,
    pub dialect: Option<String>,
}

impl From<&ValidationOutcome> for Report {
    fn from(outcome: &ValidationOutcome) -> Self {
        Self {
            ok:      outcome.is_valid(),
            message: outcome.message(),
            dialect: outcome.dialect().map(|dialect| dialect.name().to_owned()),
        }
    }
}

/// Validates expressions under a fixed configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    config: Config,
}

impl Validator {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether `text` is a legal value for `kind`.
    pub fn validate_segment(&self, text: &str, kind: FieldKind) -> bool {
        check_segment(text, kind, &self.config).is_ok()
    }

    /// Validates a whole expression, stopping at the first bad segment.
    pub fn validate_expression(&self, expr: &str) -> ValidationOutcome {
        Expression::parse_with(expr, &self.config)
            .map(|expression| expression.dialect())
            .into()
    }

    /// Validates `text` and flattens the outcome for display.
    pub fn validate(&self, text: &str) -> Report {
        Report::from(&self.validate_expression(text))
    }
}

/// Validates a whole expression with the default grammar.
pub fn validate_expression(expr: &str) -> ValidationOutcome {
    Validator::default().validate_expression(expr)
}

/// Validates `text` with the default grammar and returns a display-ready report.
pub fn validate(text: &str) -> Report {
    Validator::default().validate(text)
}
