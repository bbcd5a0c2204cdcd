use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

use matrix_core::{DEFAULT_OUTPUT_FILE, MatrixConfig, MatrixError};
use matrix_core::logging;
use matrix_docs::{build_matrix_document, write_xlsx};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let config = MatrixConfig::load()?;
    let _log_guard = logging::init_logging(&config)?;
    info!("Starting maturity-matrix v{VERSION}");

    let output = Path::new(DEFAULT_OUTPUT_FILE);
    let document = build_matrix_document();
    write_xlsx(&document, output)
        .inspect_err(|e| match e.downcast_ref::<MatrixError>() {
            Some(err) => error!("{} ({:?})", err.user_message(), err.category()),
            None => error!("Workbook generation failed: {e:#}"),
        })?;

    println!("Excel file created successfully: {}", output.display());
    Ok(())
}
