use crate::errors::{HistogramError, Result};
use image::ImageFormat;

/// Name of the directory created next to the executable for plot output.
pub const OUTPUT_DIR_NAME: &str = "output";

/// Image format written when nothing else is configured.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "png";

/// Number of intensity bins per channel (0..=255).
pub const BIN_COUNT: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Extension of the written plots, also selects the encoder
    pub output_extension: String,

    // Figure geometry in pixels
    pub combined_size: (u32, u32),
    pub single_size: (u32, u32),

    /// Hand the combined figure to the default image viewer after saving
    pub show: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            combined_size: (1280, 960),
            single_size: (640, 480),
            show: false,
        }
    }
}

impl Settings {
    /// Encoder for the configured extension. Only formats that can store an
    /// opaque RGB raster are accepted.
    pub fn output_format(&self) -> Result<ImageFormat> {
        match self.output_extension.to_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "bmp" => Ok(ImageFormat::Bmp),
            "tif" | "tiff" => Ok(ImageFormat::Tiff),
            other => Err(HistogramError::InvalidArgument {
                message: format!("unsupported output extension '{}'", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_writes_png_without_showing() {
        let settings = Settings::default();
        assert_eq!(settings.output_format().unwrap(), ImageFormat::Png);
        assert!(!settings.show);
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        let settings = Settings { output_extension: "JPEG".to_string(), ..Default::default() };
        assert_eq!(settings.output_format().unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let settings = Settings { output_extension: "svg".to_string(), ..Default::default() };
        let err = settings.output_format().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }
}
