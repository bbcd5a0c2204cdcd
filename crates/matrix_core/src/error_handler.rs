use thiserror::Error;

/// Top-level error type for the matrix generator.
#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Classification of errors for logging and user display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid or unreadable configuration.
    ConfigError,
    /// File I/O or serializer failure.
    SystemError,
}

impl MatrixError {
    /// Returns the broad error category for routing and display purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::ConfigError,
            Self::FileSystem(_) | Self::Render(_) => ErrorCategory::SystemError,
        }
    }

    /// Returns a short message suitable for the terminal.
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(msg) => format!("Configuration issue: {msg}"),
            Self::FileSystem(msg) => format!("Could not write output: {msg}"),
            Self::Render(msg) => format!("Could not build workbook: {msg}"),
        }
    }
}
