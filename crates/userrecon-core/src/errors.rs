use thiserror::Error;

/// Result type alias using ReconError
pub type Result<T> = std::result::Result<T, ReconError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and machine-readable CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Payload shape
    /// Raw input text is not valid JSON
    InvalidPayload,
    /// The reserved metadata field is absent from the payload
    MissingField,
    /// The reserved metadata field is present but not a string
    WrongType,
    /// The sanitized metadata string is not valid JSON
    MetadataParse,

    // Configuration / IO
    Config,
    Io,
    /// A result could not be encoded for output
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidPayload => "ERR_INVALID_PAYLOAD",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::WrongType => "ERR_WRONG_TYPE",
            ExErrorKind::MetadataParse => "ERR_METADATA_PARSE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus free-form context
/// for humans.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the payload field the error is attached to
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the field context, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for reconciliation.
///
/// The payload variants are never returned as `Err` from the pipeline; they are
/// carried as data on the result of the stage that detected them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconError {
    /// Raw input is not valid JSON
    #[error("Invalid JSON: {message}")]
    InvalidPayload { message: String },

    /// Reserved metadata field is not present on the payload
    #[error("{field} field not found")]
    MetadataFieldNotFound { field: String },

    /// Reserved metadata field is present but holds a non-string value
    #[error("{field} field is not a string")]
    MetadataNotString { field: String },

    /// Sanitized metadata string failed to parse as JSON
    #[error("Failed to parse {field}: {message}")]
    MetadataParse { field: String, message: String },

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Reading input or configuration failed
    #[error("IO error: {message}")]
    Io { message: String },

    /// Encoding a result as JSON failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ReconError {
    /// Get the canonical kind for this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            ReconError::InvalidPayload { .. } => ExErrorKind::InvalidPayload,
            ReconError::MetadataFieldNotFound { .. } => ExErrorKind::MissingField,
            ReconError::MetadataNotString { .. } => ExErrorKind::WrongType,
            ReconError::MetadataParse { .. } => ExErrorKind::MetadataParse,
            ReconError::Config { .. } => ExErrorKind::Config,
            ReconError::Io { .. } => ExErrorKind::Io,
            ReconError::Serialization { .. } => ExErrorKind::Serialization,
        }
    }
}

/// Errors cross the result boundary as their display string.
impl serde::Serialize for ReconError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Conversion from ReconError to ExError
impl From<ReconError> for ExError {
    fn from(err: ReconError) -> Self {
        let kind = err.kind();
        match err {
            ReconError::InvalidPayload { message } => ExError::new(kind)
                .with_op("parse_payload")
                .with_message(message),

            ReconError::MetadataFieldNotFound { field } => ExError::new(kind)
                .with_op("parse_metadata")
                .with_field(field)
                .with_message("field not found"),

            ReconError::MetadataNotString { field } => ExError::new(kind)
                .with_op("parse_metadata")
                .with_field(field)
                .with_message("field is not a string"),

            ReconError::MetadataParse { field, message } => ExError::new(kind)
                .with_op("parse_metadata")
                .with_field(field)
                .with_message(message),

            ReconError::Config { message } => ExError::new(kind)
                .with_op("load_config")
                .with_message(message),

            ReconError::Io { message } => ExError::new(kind).with_message(message),

            ReconError::Serialization { message } => ExError::new(kind)
                .with_op("render_json")
                .with_message(message),
        }
    }
}

/// Conversion from std::io::Error to ReconError
impl From<std::io::Error> for ReconError {
    fn from(err: std::io::Error) -> Self {
        ReconError::Io {
            message: err.to_string(),
        }
    }
}

/// Conversion from serde_json::Error to ReconError
impl From<serde_json::Error> for ReconError {
    fn from(err: serde_json::Error) -> Self {
        ReconError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Conversion from toml::de::Error to ReconError
impl From<toml::de::Error> for ReconError {
    fn from(err: toml::de::Error) -> Self {
        ReconError::Config {
            message: err.to_string(),
        }
    }
}
