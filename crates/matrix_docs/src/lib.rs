// Lead management maturity matrix: literal content, grid model and XLSX output.

pub mod content;
pub mod document;
pub mod style;
pub mod xlsx;

pub use document::{Document, Page, build_matrix_document};
pub use xlsx::{render_xlsx, write_xlsx};
