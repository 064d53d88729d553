use thiserror::Error;

/// Result type for plugin generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for plugin generation operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An interception kind outside before/after/around was requested
    #[error("Unsupported interception kind: {0}")]
    UnsupportedInterceptionKind(String),

    /// A PHP language level the feature table does not know
    #[error("Unsupported PHP language level: {0}")]
    UnsupportedLanguageLevel(String),

    /// Target-method descriptor could not be read or is incomplete
    #[error("Descriptor error: {0}")]
    Descriptor(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Any other error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Creates a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates an unsupported interception kind error
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedInterceptionKind(kind.into())
    }

    /// Creates an unsupported language level error
    pub fn unsupported_language_level(level: impl Into<String>) -> Self {
        Self::UnsupportedLanguageLevel(level.into())
    }

    /// Creates a descriptor error
    pub fn descriptor(msg: impl Into<String>) -> Self {
        Self::Descriptor(msg.into())
    }

    /// Adds context to any error
    pub fn with_context<E>(context: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WithContext {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::with_context(context, e))
    }
}
