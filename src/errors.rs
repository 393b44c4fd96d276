use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        #[source]
        source: Box<HistogramError>,
    },

    #[error("Image decoding error for '{path}': {message}")]
    DecodeError { path: PathBuf, message: String },

    #[error("IO error for '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

pub type Result<T> = std::result::Result<T, HistogramError>;

impl HistogramError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HistogramError::IoError { path: path.into(), source }
    }

    /// Returns true if this error means the input file could not be found,
    /// either directly or wrapped by validation.
    pub fn is_not_found(&self) -> bool {
        match self {
            HistogramError::FileNotFound { .. } => true,
            HistogramError::ValidationError { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            HistogramError::InvalidArgument { .. } => "Usage: rgb-histogram <input_image_path>",
            HistogramError::FileNotFound { .. } | HistogramError::ValidationError { .. } => "Check if the file exists and you have permission to access it.",
            HistogramError::DecodeError { .. } => "The file could not be decoded as an image. Try converting it to a common format like JPEG or PNG.",
            HistogramError::IoError { .. } => "Check disk space and write permissions for the output directory.",
            HistogramError::RenderError { .. } => "Plot rendering failed. The bundled font may be damaged; try reinstalling.",
        };

        format!("{}\n\n{}", base_message, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            HistogramError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            HistogramError::FileNotFound { .. } => "FILE_NOT_FOUND",
            HistogramError::ValidationError { .. } => "VALIDATION_ERROR",
            HistogramError::DecodeError { .. } => "DECODE_ERROR",
            HistogramError::IoError { .. } => "IO_ERROR",
            HistogramError::RenderError { .. } => "RENDER_ERROR",
        }
    }

    /// Logs the error before the process terminates
    pub fn log_and_report(&self) {
        log::error!("[{}] {}", self.error_code(), self);
        eprintln!("Error [{}]: {}", self.error_code(), self.user_message());
    }
}
