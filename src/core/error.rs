use std::fmt;

/// Comprehensive error types for benchplot operations
#[derive(Debug)]
pub enum BenchPlotError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Structural violation of an input contract
    MalformedInput(String),

    /// JSON syntax error in a speed-report file
    Json(serde_json::Error),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// Chart rendering error
    Render(String),
}

impl fmt::Display for BenchPlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchPlotError::Io(err) => write!(f, "IO error: {err}"),
            BenchPlotError::Config(msg) => write!(f, "Configuration error: {msg}"),
            BenchPlotError::MalformedInput(msg) => write!(f, "Malformed input: {msg}"),
            BenchPlotError::Json(err) => write!(f, "JSON error: {err}"),
            BenchPlotError::FileNotFound(path) => write!(f, "File not found: {path}"),
            BenchPlotError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            BenchPlotError::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for BenchPlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchPlotError::Io(err) => Some(err),
            BenchPlotError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BenchPlotError {
    fn from(err: std::io::Error) -> Self {
        BenchPlotError::Io(err)
    }
}

impl From<serde_json::Error> for BenchPlotError {
    fn from(err: serde_json::Error) -> Self {
        BenchPlotError::Json(err)
    }
}

/// Type alias for Results using BenchPlotError
pub type Result<T> = std::result::Result<T, BenchPlotError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = BenchPlotError::Config("Invalid chart width".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid chart width"
        );

        let file_error = BenchPlotError::FileNotFound("/path/to/file".to_string());
        assert_eq!(format!("{file_error}"), "File not found: /path/to/file");

        let input_error = BenchPlotError::MalformedInput("line 3: expected 4 fields".to_string());
        assert_eq!(
            format!("{input_error}"),
            "Malformed input: line 3: expected 4 fields"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let benchplot_error = BenchPlotError::from(io_error);

        match benchplot_error {
            BenchPlotError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let benchplot_error = BenchPlotError::from(json_error);

        match benchplot_error {
            BenchPlotError::Json(_) => {} // Expected
            _ => panic!("Expected Json variant"),
        }
    }

    #[test]
    fn test_string_error_variants_display() {
        let errors = vec![
            BenchPlotError::Config("Bad config".to_string()),
            BenchPlotError::MalformedInput("Bad row".to_string()),
            BenchPlotError::FileNotFound("/missing".to_string()),
            BenchPlotError::InvalidArgument("Bad arg".to_string()),
            BenchPlotError::Render("Backend failure".to_string()),
        ];

        for error in errors {
            let display_str = format!("{error}");
            assert!(!display_str.is_empty());
            assert!(display_str.contains(":"));
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let benchplot_error = BenchPlotError::Io(io_error);

        assert!(benchplot_error.source().is_some());

        let config_error = BenchPlotError::Config("test".to_string());
        assert!(config_error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BenchPlotError>();
    }
}
