use crate::errors::Result;
use crate::histogram::compute_channel_histograms;
use crate::logging::log_call;
use crate::output_dir::ensure_output_dir;
use crate::path_resolver::{file_stem, validate};
use crate::plot::render_and_save;
use crate::profiler::{timed, with_profiler};
use crate::settings::Settings;
use std::path::{Path, PathBuf};

const STAGES: [&str; 2] = ["histogram", "render"];

/// Compute the channel histograms of `input` and write the four plots into
/// `output_dir`.
pub fn plot_color_histogram(input: &Path, output_dir: &Path, settings: &Settings) -> Result<Vec<PathBuf>> {
    let histograms = timed("histogram", || compute_channel_histograms(input))?;
    let base_name = file_stem(input);

    let written = timed("render", || render_and_save(&histograms, &base_name, output_dir, settings))?;

    with_profiler(|p| {
        for stage in STAGES {
            if let Some(total) = p.total(stage) {
                log::debug!("{} took {} ms", stage, total.as_millis());
            }
        }
    });

    Ok(written)
}

/// `plot_color_histogram` with its arguments and result logged around the call.
pub fn plot_color_histogram_logged(input: &Path, output_dir: &Path, settings: &Settings) -> Result<Vec<PathBuf>> {
    log_call("plot_color_histogram", &(input, output_dir, settings), || {
        plot_color_histogram(input, output_dir, settings)
    })
}

/// Validate `input`, provision the output directory next to the executable
/// and plot.
pub fn run(input: &Path) -> Result<Vec<PathBuf>> {
    validate(input)?;
    let output_dir = ensure_output_dir()?;
    plot_color_histogram_logged(input, &output_dir, &Settings::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failure_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        std::fs::write(&input, b"plain text").unwrap();
        let out = dir.path().join("output");
        std::fs::create_dir(&out).unwrap();

        let err = plot_color_histogram_logged(&input, &out, &Settings::default()).unwrap_err();
        assert_eq!(err.error_code(), "DECODE_ERROR");
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
    }
}
