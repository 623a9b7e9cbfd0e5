/// Numeric conversion helpers.
///
/// Provides safe conversions between integer and floating-point types that
/// never lose precision silently. Conversions return a `Result`, with the
/// caller choosing the error for the lossy case.
pub mod num;
