use crate::types::FieldKind;

/// Smallest second / minute value
pub const MIN_SECOND: u32 = 0;
/// Largest second / minute value
pub const MAX_SECOND: u32 = 59;

/// Smallest hour value
pub const MIN_HOUR: u32 = 0;
/// Largest hour value
pub const MAX_HOUR: u32 = 23;

/// First day of month
pub const MIN_DAY_OF_MONTH: u32 = 1;
/// Last possible day of any month
pub const MAX_DAY_OF_MONTH: u32 = 31;

/// Month number for January
pub const MIN_MONTH: u32 = 1;
/// Month number for December
pub const MAX_MONTH: u32 = 12;

/// Sunday
pub const MIN_DAY_OF_WEEK: u32 = 0;
/// Sunday again; both 0 and 7 are accepted
pub const MAX_DAY_OF_WEEK: u32 = 7;

/// Earliest schedulable year
pub const MIN_YEAR: u32 = 1970;
/// Latest schedulable year
pub const MAX_YEAR: u32 = 2099;

/// Segment count of a classic Unix crontab line
pub const UNIX_SEGMENTS: usize = 5;
/// Segment count of a Quartz expression without a year
pub const QUARTZ_SIX_SEGMENTS: usize = 6;
/// Segment count of a Quartz expression with a year
pub const QUARTZ_SEVEN_SEGMENTS: usize = 7;

/// Field layout of a Unix expression
pub const UNIX_FIELDS: [FieldKind; UNIX_SEGMENTS] = [
    FieldKind::Minute,
    FieldKind::Hour,
    FieldKind::DayOfMonth,
    FieldKind::Month,
    FieldKind::DayOfWeek,
];

/// Field layout of a six-segment Quartz expression
pub const QUARTZ_SIX_FIELDS: [FieldKind; QUARTZ_SIX_SEGMENTS] = [
    FieldKind::Second,
    FieldKind::Minute,
    FieldKind::Hour,
    FieldKind::DayOfMonth,
    FieldKind::Month,
    FieldKind::DayOfWeek,
];

/// Field layout of a seven-segment Quartz expression
pub const QUARTZ_SEVEN_FIELDS: [FieldKind; QUARTZ_SEVEN_SEGMENTS] = [
    FieldKind::Second,
    FieldKind::Minute,
    FieldKind::Hour,
    FieldKind::DayOfMonth,
    FieldKind::Month,
    FieldKind::DayOfWeek,
    FieldKind::Year,
];

/// Whole-segment wildcard matching every value
pub const WILDCARD: &str = "*";
/// Whole-segment "no specific value" marker
pub const NO_SPECIFIC: &str = "?";

/// List separator inside a segment
pub const LIST_SEPARATOR: char = ',';
/// Step separator (`base/step`)
pub const STEP_SEPARATOR: char = '/';
/// Span separator (`start-end`)
pub const SPAN_SEPARATOR: char = '-';
/// Ordinal separator (`weekday#nth`)
pub const NTH_SEPARATOR: char = '#';

/// Last day of month / week
pub const LAST: &str = "L";
/// Nearest weekday suffix, also accepted bare
pub const WEEKDAY: &str = "W";
/// Last weekday of month
pub const LAST_WEEKDAY: &str = "LW";

/// Three-letter weekday names, indexed by day-of-week number (Sunday = 0)
pub const WEEKDAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
