/// Line prefixes that open a new alert log entry.
///
/// The alert log writes every diagnostic entry behind a timestamp such as
/// `Mon Jan 01 00:00:00 2024`. Matching is a literal prefix test on the
/// untrimmed line; leading whitespace is never skipped.
pub const WEEKDAY_PREFIXES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Literal tag that precedes every error code (`ORA-00600`).
pub const ERROR_CODE_TAG: &str = "ORA-";

/// Exact digit width of an error code. Shorter or longer runs are not codes.
pub const ERROR_CODE_DIGITS: usize = 5;

/// Number of leading lines kept in an entry snippet.
pub const DEFAULT_PREVIEW_LINES: usize = 5;
