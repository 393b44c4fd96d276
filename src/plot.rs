pub mod chart;

use crate::errors::{HistogramError, Result};
use crate::histogram::{Channel, ChannelHistogram, ChannelHistograms};
use crate::settings::Settings;
use ab_glyph::FontRef;
use chart::{Region, Series, Subplot};
use image::{ImageError, ImageFormat, RgbImage};
use std::path::{Path, PathBuf};

static FONT_DATA: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

const X_LABEL: &str = "Bins";
const Y_LABEL: &str = "Frequency";
const COMBINED_TITLE: &str = "Combined RGB Histogram";

/// Parse the bundled label font.
pub fn load_font() -> Result<FontRef<'static>> {
    FontRef::try_from_slice(FONT_DATA).map_err(|e| HistogramError::RenderError {
        message: format!("bundled font could not be parsed: {}", e),
    })
}

fn channel_title(channel: Channel) -> String {
    format!("{} Histogram", channel.label())
}

fn series_for(hist: &ChannelHistogram) -> Series<'_> {
    let channel = hist.channel();
    Series { label: channel.label(), color: channel.color(), counts: hist.bins() }
}

/// File name of the 2×2 figure, e.g. `cat_histograms.png`.
pub fn combined_file_name(base_name: &str, extension: &str) -> String {
    format!("{}_histograms.{}", base_name, extension)
}

/// File name of a single channel figure, e.g. `cat_histogram_red.png`.
pub fn channel_file_name(base_name: &str, channel: Channel, extension: &str) -> String {
    format!("{}_histogram_{}.{}", base_name, channel.file_suffix(), extension)
}

/// Red, green and blue on their own in a 2×2 grid with an overlay of all
/// three in the last cell.
pub fn render_combined(histograms: &ChannelHistograms, size: (u32, u32), font: &FontRef) -> RgbImage {
    let (width, height) = size;
    let mut canvas = RgbImage::from_pixel(width, height, chart::BACKGROUND);
    let cells = Region::full(width, height).grid(2, 2);

    let titles: Vec<String> = Channel::ALL.iter().map(|&c| channel_title(c)).collect();
    for ((channel, title), cell) in Channel::ALL.iter().zip(&titles).zip(&cells) {
        let subplot = Subplot {
            title,
            x_label: X_LABEL,
            y_label: Y_LABEL,
            series: vec![series_for(histograms.get(*channel))],
            legend: false,
        };
        chart::draw_subplot(&mut canvas, *cell, &subplot, font);
    }

    let overlay = Subplot {
        title: COMBINED_TITLE,
        x_label: X_LABEL,
        y_label: Y_LABEL,
        series: histograms.iter().map(series_for).collect(),
        legend: true,
    };
    chart::draw_subplot(&mut canvas, cells[3], &overlay, font);

    canvas
}

pub fn render_single(hist: &ChannelHistogram, size: (u32, u32), font: &FontRef) -> RgbImage {
    let (width, height) = size;
    let mut canvas = RgbImage::from_pixel(width, height, chart::BACKGROUND);
    let title = channel_title(hist.channel());

    let subplot = Subplot {
        title: &title,
        x_label: X_LABEL,
        y_label: Y_LABEL,
        series: vec![series_for(hist)],
        legend: false,
    };
    chart::draw_subplot(&mut canvas, Region::full(width, height), &subplot, font);

    canvas
}

fn save(figure: &RgbImage, path: &Path, format: ImageFormat) -> Result<()> {
    figure.save_with_format(path, format).map_err(|e| match e {
        ImageError::IoError(source) => HistogramError::io(path, source),
        other => HistogramError::io(path, std::io::Error::other(other)),
    })?;
    log::debug!("Saved {:?}", path);
    Ok(())
}

/// Hand a saved figure to the desktop's default viewer.
pub fn open_in_viewer(path: &Path) -> std::io::Result<()> {
    open::that(path)
}

/// Render the combined figure and one figure per channel into `output_dir`.
/// Returns the written paths: combined first, then red, green and blue.
pub fn render_and_save(
    histograms: &ChannelHistograms,
    base_name: &str,
    output_dir: &Path,
    settings: &Settings,
) -> Result<Vec<PathBuf>> {
    render_and_save_with_viewer(histograms, base_name, output_dir, settings, open_in_viewer)
}

/// `render_and_save` with the display step supplied by the caller. `viewer`
/// only runs when `settings.show` is set; its failure is logged, not returned.
pub fn render_and_save_with_viewer<V>(
    histograms: &ChannelHistograms,
    base_name: &str,
    output_dir: &Path,
    settings: &Settings,
    viewer: V,
) -> Result<Vec<PathBuf>>
where
    V: FnOnce(&Path) -> std::io::Result<()>,
{
    let format = settings.output_format()?;
    let extension = settings.output_extension.as_str();
    let font = load_font()?;
    let mut written = Vec::with_capacity(Channel::ALL.len() + 1);

    let combined = render_combined(histograms, settings.combined_size, &font);
    let combined_path = output_dir.join(combined_file_name(base_name, extension));
    save(&combined, &combined_path, format)?;
    written.push(combined_path);

    if settings.show {
        if let Err(e) = viewer(&written[0]) {
            log::warn!("Could not display {:?}: {}", written[0], e);
        }
    }

    for channel in Channel::ALL {
        let figure = render_single(histograms.get(channel), settings.single_size, &font);
        let path = output_dir.join(channel_file_name(base_name, channel, extension));
        save(&figure, &path, format)?;
        written.push(path);
    }

    Ok(written)
}
