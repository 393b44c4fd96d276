use crate::errors::{HistogramError, Result};
use crate::settings::BIN_COUNT;
use image::{DynamicImage, ImageReader, Rgb};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }

    /// Lowercase name used in output file names.
    pub fn file_suffix(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    /// Line color used when plotting this channel.
    pub fn color(self) -> Rgb<u8> {
        match self {
            Channel::Red => Rgb([255, 0, 0]),
            Channel::Green => Rgb([0, 128, 0]),
            Channel::Blue => Rgb([0, 0, 255]),
        }
    }
}

/// Pixel counts for one channel, indexed by intensity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistogram {
    channel: Channel,
    bins: [u32; BIN_COUNT],
}

impl ChannelHistogram {
    fn empty(channel: Channel) -> Self {
        Self { channel, bins: [0; BIN_COUNT] }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn bins(&self) -> &[u32; BIN_COUNT] {
        &self.bins
    }

    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }

    pub fn max_count(&self) -> u32 {
        self.bins.iter().copied().max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistograms {
    red: ChannelHistogram,
    green: ChannelHistogram,
    blue: ChannelHistogram,
    pixel_count: u64,
}

impl ChannelHistograms {
    /// Count every pixel of `image` into 256 bins per RGB channel.
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let mut red = ChannelHistogram::empty(Channel::Red);
        let mut green = ChannelHistogram::empty(Channel::Green);
        let mut blue = ChannelHistogram::empty(Channel::Blue);

        for pixel in rgb.pixels() {
            red.bins[pixel[0] as usize] += 1;
            green.bins[pixel[1] as usize] += 1;
            blue.bins[pixel[2] as usize] += 1;
        }

        let (width, height) = rgb.dimensions();
        Self { red, green, blue, pixel_count: width as u64 * height as u64 }
    }

    pub fn get(&self, channel: Channel) -> &ChannelHistogram {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChannelHistogram> {
        [&self.red, &self.green, &self.blue].into_iter()
    }

    pub fn pixel_count(&self) -> u64 {
        self.pixel_count
    }

    /// Largest count over all three channels.
    pub fn max_count(&self) -> u32 {
        self.iter().map(ChannelHistogram::max_count).max().unwrap_or(0)
    }
}

/// Decode the image at `path` and compute its red, green and blue histograms.
pub fn compute_channel_histograms(path: &Path) -> Result<ChannelHistograms> {
    let decode_error = |message: String| HistogramError::DecodeError { path: path.to_path_buf(), message };

    let image = ImageReader::open(path)
        .map_err(|e| decode_error(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))?;

    log::debug!("Decoded {:?}: {}x{} {:?}", path, image.width(), image.height(), image.color());
    Ok(ChannelHistograms::from_image(&image))
}
