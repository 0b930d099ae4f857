use thiserror::Error;

/// What was wrong with a single input line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("invalid number `{value}` for field `{field}`")]
    InvalidNumber { field: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AllocError {
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },

    /// Rendered clap message, usage line included.
    #[error("{message}")]
    Usage { message: String },

    #[error("Unable to open input file: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value `{value}` for `{field}`: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl AllocError {
    pub fn parse(line: usize, kind: ParseErrorKind) -> Self {
        Self::Parse { line, kind }
    }

    /// Process exit status for this error. Usage mistakes follow clap's convention.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AllocError>;
