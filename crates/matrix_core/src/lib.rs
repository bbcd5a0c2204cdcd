pub mod config;
pub mod error_handler;
pub mod logging;

pub use config::{DEFAULT_OUTPUT_FILE, MatrixConfig};
pub use error_handler::{ErrorCategory, MatrixError};
