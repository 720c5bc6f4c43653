//! Per-channel intensity histograms of still images.
//!
//! - [`load_image`] decodes any format enabled on the `image` crate into RGB
//! - [`ColorHistogram::compute`] counts 256 bins per channel
//! - [`plot::render_histogram_chart`] draws the three channels as overlaid lines

pub mod plot;

pub use image::RgbImage;
pub use plot::{PlotConfig, render_histogram_chart};

use std::path::Path;

/// Number of intensity bins per channel.
pub const BINS: usize = 256;

pub type HistogramResult<T> = Result<T, HistogramError>;

#[derive(thiserror::Error, Debug)]
pub enum HistogramError {
    #[error("Could not read image from {path}: {source}")]
    ImageLoad {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Plot rendering failed: {0}")]
    PlotError(String),

    #[error("Invalid plot size {0} x {1}")]
    InvalidPlotSize(u32, u32),
}

/// Color channels in the order they are reported and plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Blue,
    Green,
    Red,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Blue, Channel::Green, Channel::Red];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Blue => "Blue",
            Channel::Green => "Green",
            Channel::Red => "Red",
        }
    }

    /// Sample index of this channel inside an `Rgb<u8>` pixel.
    pub fn rgb_index(self) -> usize {
        match self {
            Channel::Blue => 2,
            Channel::Green => 1,
            Channel::Red => 0,
        }
    }

    fn position(self) -> usize {
        match self {
            Channel::Blue => 0,
            Channel::Green => 1,
            Channel::Red => 2,
        }
    }
}

/// 256 bin counts for each of the blue, green and red channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHistogram {
    bins: [[u32; BINS]; 3],
}

impl ColorHistogram {
    pub fn compute(image: &RgbImage) -> Self {
        let counted = imageproc::stats::histogram(image);

        let mut bins = [[0u32; BINS]; 3];
        for channel in Channel::ALL {
            bins[channel.position()] = counted.channels[channel.rgb_index()];
        }

        Self { bins }
    }

    pub fn channel(&self, channel: Channel) -> &[u32; BINS] {
        &self.bins[channel.position()]
    }

    /// Sum of all bins of one channel, i.e. the pixel count of the image.
    pub fn total(&self, channel: Channel) -> u64 {
        self.channel(channel).iter().map(|&c| c as u64).sum()
    }

    /// Largest single bin across all channels.
    pub fn max_count(&self) -> u32 {
        self.bins
            .iter()
            .flat_map(|bins| bins.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

pub fn load_image(path: impl AsRef<Path>) -> HistogramResult<RgbImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| HistogramError::ImageLoad {
        path: path.display().to_string(),
        source,
    })?;

    log::debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image.to_rgb8())
}
