/// Minimum valid year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum valid year (inclusive), keeps the text form four-digit
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
/// Separator between check-in and check-out in a stay's text form
pub const RANGE_SEPARATOR: char = '/';

/// How many months of blocked dates the panel asks the backend for
pub const DEFAULT_LOOKAHEAD_MONTHS: u32 = 2;
/// Every reservation has at least one adult
pub const MIN_ADULTS: u8 = 1;
