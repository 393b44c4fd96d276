use crate::errors::{HistogramError, Result};
use crate::path_resolver::normalize_path;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rgb-histogram")]
#[command(version, about = "Plot the red, green and blue histograms of an image", long_about = None)]
struct Cli {
    /// Input image file
    #[arg(value_name = "INPUT", value_parser = clap::value_parser!(PathBuf))]
    input: PathBuf,
}

/// Parse the command line (program name first) into the normalized input
/// path. Anything other than exactly one positional argument is rejected.
pub fn parse_args<I, T>(args: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(normalize_path(&cli.input)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let rendered = e.to_string();
            let first_line = rendered.lines().next().unwrap_or_default();
            Err(HistogramError::InvalidArgument {
                message: first_line.trim_start_matches("error: ").to_string(),
            })
        }
    }
}
