pub mod environment;
pub mod escape;
pub mod files;
pub mod logging;
pub mod terminal;

pub use environment::{DEFAULT_MAX_ARCHIVE_BYTES, LogFormat, MAX_BYTES_ENV};
pub use escape::escape_html;
pub use files::{read_archive_file, validate_file_size};
pub use logging::init_tracing;
pub use terminal::{single_line, strip_ansi_codes};
