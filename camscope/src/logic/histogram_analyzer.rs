use crate::config;
use anyhow::Result;
use histogram::{ColorHistogram, PlotConfig, load_image, render_histogram_chart};
use std::path::Path;

/// Presents a computed histogram.
pub trait HistogramPlotter {
    fn plot(&mut self, hist: &ColorHistogram) -> Result<()>;
}

/// Renders the chart and shows it in a window until the user closes it.
pub struct WindowPlotter {
    config: PlotConfig,
}

impl Default for WindowPlotter {
    fn default() -> Self {
        Self {
            config: PlotConfig::default().with_size(config::PLOT_SIZE),
        }
    }
}

impl HistogramPlotter for WindowPlotter {
    fn plot(&mut self, hist: &ColorHistogram) -> Result<()> {
        let chart = render_histogram_chart(hist, &self.config)?;
        viewer::show_image(&self.config.title, &chart)?;
        Ok(())
    }
}

/// Load `image_path`, count its channel intensities and hand them to `plotter`.
///
/// An unreadable image is reported on stdout and nothing is plotted. Plotting
/// failures are logged. Neither is returned to the caller.
pub fn analyze_and_plot_histograms(
    image_path: impl AsRef<Path>,
    plotter: &mut impl HistogramPlotter,
) -> Option<ColorHistogram> {
    let image_path = image_path.as_ref();

    let image = match load_image(image_path) {
        Ok(image) => image,
        Err(e) => {
            println!("Error: Could not read image from {}", image_path.display());
            log::warn!("{e}");
            return None;
        }
    };

    let hist = ColorHistogram::compute(&image);
    log::info!(
        "{}: {}x{}, peak bin count {}",
        image_path.display(),
        image.width(),
        image.height(),
        hist.max_count()
    );

    if let Err(e) = plotter.plot(&hist) {
        log::warn!("plot histograms failed: {e}");
    }

    Some(hist)
}
