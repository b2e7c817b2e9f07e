use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Result type for rating queries and rating sources
pub type RatingResult<T> = Result<T, RatingError>;

/// What an aggregate was computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Reviewer,
    Movie,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reviewer => write!(f, "reviewer"),
            Self::Movie => write!(f, "movie"),
        }
    }
}

/// The error type shared by the engine and the rating sources
#[derive(Error, Debug)]
pub enum RatingError {
    #[error("[E{code:04}] Invalid argument `{field}`: {message}")]
    InvalidArgument {
        code: u16,
        field: &'static str,
        message: String,
    },

    #[error("[E{code:04}] No ratings found for {subject} {id}")]
    NoData { code: u16, subject: Subject, id: i32 },

    #[error("[E{code:04}] Rating source error: {message}")]
    Source {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RatingError {
    /// Create an invalid argument error for a query parameter
    pub fn invalid_argument(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            code: ErrorCode::QUERY_INVALID_ARGUMENT,
            field,
            message: message.into(),
        }
    }

    /// Create an error for an average over an empty group
    pub fn no_data(subject: Subject, id: i32) -> Self {
        Self::NoData {
            code: ErrorCode::QUERY_NO_DATA,
            subject,
            id,
        }
    }

    /// Create a source error for a failed read
    pub fn source_io(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Source {
            code: ErrorCode::SOURCE_IO_ERROR,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a source error for malformed rating data
    pub fn source_parse(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Source {
            code: ErrorCode::SOURCE_PARSE_ERROR,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Attach an underlying error to a source error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        if let Self::Source { source: src, .. } = &mut self {
            *src = Some(source.into());
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidArgument { code, .. }
            | Self::NoData { code, .. }
            | Self::Source { code, .. } => *code,
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 2,
            Self::NoData { .. } => 3,
            Self::Source { .. } => 4,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidArgument { message, .. } => message.clone(),
            Self::NoData { subject, id, .. } => {
                format!("The {} {} has no ratings", subject, id)
            }
            Self::Source {
                message,
                path,
                source,
                ..
            } => {
                let detail = match source {
                    Some(cause) => format!("{} ({})", message, cause),
                    None => message.clone(),
                };
                match path {
                    Some(p) => format!("Could not load ratings from {}: {}", p.display(), detail),
                    None => format!("Could not load ratings: {}", detail),
                }
            }
        }
    }
}
