// Output layer for reportlint
//
// - render: text and JSON views of a ValidationResult
// - handlers: validating a report file or a directory of reports

pub mod handlers;
pub mod render;

pub use handlers::report::{validate_path, OutputFormat, UiError, ValidateOptions};
pub use render::{render_json, render_text};
