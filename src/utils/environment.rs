use std::env;

/// Environment variable overriding the maximum archive size in bytes
pub const MAX_BYTES_ENV: &str = "THREAD_ARCHIVE_MAX_BYTES";

/// Default maximum archive size: 64MB
pub const DEFAULT_MAX_ARCHIVE_BYTES: u64 = 64 * 1024 * 1024;

/// Log output format selected with `LOG_FORMAT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_value(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("json" | "structured") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }

    /// Read `LOG_FORMAT` from the environment, defaulting to pretty output
    pub fn from_env() -> Self {
        Self::from_value(env::var("LOG_FORMAT").ok().as_deref())
    }
}
