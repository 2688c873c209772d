pub const PLUS_SIGN: &'static str = "+";

/// Prefix digits in a general-description match are carried by at most
/// the first two capture groups (trunk prefix and/or calling code); the
/// subscriber part of a plan's pattern stays non-capturing.
pub const MAX_LEADING_PREFIX_GROUPS: usize = 2;

// Fallback format rule rendering the national number unchanged.
pub const PASSTHROUGH_FORMAT_PATTERN: &'static str = r"(\d+)";
pub const PASSTHROUGH_FORMAT_TEMPLATE: &'static str = "$1";
