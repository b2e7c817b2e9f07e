/// Error code registry for movierate
///
/// Error codes are organized by category:
/// - 1000-1999: Query errors
/// - 2000-2999: Rating source errors
pub struct ErrorCode;

impl ErrorCode {
    // Query errors (1000-1999)
    pub const QUERY_INVALID_ARGUMENT: u16 = 1001;
    pub const QUERY_NO_DATA: u16 = 1002;

    // Rating source errors (2000-2999)
    pub const SOURCE_IO_ERROR: u16 = 2001;
    pub const SOURCE_PARSE_ERROR: u16 = 2002;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::QUERY_INVALID_ARGUMENT => "Query parameter out of range",
        ErrorCode::QUERY_NO_DATA => "No ratings match the query subject",
        ErrorCode::SOURCE_IO_ERROR => "Rating file could not be read",
        ErrorCode::SOURCE_PARSE_ERROR => "Rating file is not valid rating JSON",
        _ => "Unknown error",
    }
}
