use crate::{BINS, Channel, ColorHistogram, HistogramError, HistogramResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;
use plotters::prelude::*;

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct PlotConfig {
    #[derivative(Default(value = "(1024, 768)"))]
    pub size: (u32, u32),

    #[derivative(Default(value = "\"Color Channel Histograms\".to_string()"))]
    pub title: String,

    #[derivative(Default(value = "\"Pixel Intensity\".to_string()"))]
    pub x_desc: String,

    #[derivative(Default(value = "\"Pixel Count\".to_string()"))]
    pub y_desc: String,
}

pub fn channel_color(channel: Channel) -> RGBColor {
    match channel {
        Channel::Blue => BLUE,
        Channel::Green => GREEN,
        Channel::Red => RED,
    }
}

/// Line points `(intensity, count)` of one channel.
pub fn channel_series(hist: &ColorHistogram, channel: Channel) -> Vec<(u32, u32)> {
    hist.channel(channel)
        .iter()
        .enumerate()
        .map(|(bin, &count)| (bin as u32, count))
        .collect()
}

/// Upper bound of the count axis. Never zero so an empty image still draws.
pub fn count_axis_max(hist: &ColorHistogram) -> u32 {
    hist.max_count().max(1)
}

/// Draw the three channel histograms over each other into an RGB image.
///
/// The intensity axis always spans `0..256`, whatever the data.
pub fn render_histogram_chart(
    hist: &ColorHistogram,
    config: &PlotConfig,
) -> HistogramResult<RgbImage> {
    let (width, height) = config.size;
    if width == 0 || height == 0 {
        return Err(HistogramError::InvalidPlotSize(width, height));
    }

    let mut buffer = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, ("sans-serif", 30).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(0u32..BINS as u32, 0u32..count_axis_max(hist))
            .map_err(plot_error)?;

        chart
            .configure_mesh()
            .x_labels(9)
            .x_desc(config.x_desc.as_str())
            .y_desc(config.y_desc.as_str())
            .axis_desc_style(("sans-serif", 18))
            .draw()
            .map_err(plot_error)?;

        for channel in Channel::ALL {
            let color = channel_color(channel);

            chart
                .draw_series(LineSeries::new(channel_series(hist, channel), &color))
                .map_err(plot_error)?
                .label(channel.name())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(plot_error)?;

        root.present().map_err(plot_error)?;
    }

    RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| HistogramError::PlotError("chart buffer size mismatch".to_string()))
}

fn plot_error(e: impl std::fmt::Display) -> HistogramError {
    HistogramError::PlotError(e.to_string())
}
