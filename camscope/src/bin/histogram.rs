use anyhow::Result;
use camscope::{
    config,
    logic::{WindowPlotter, analyze_and_plot_histograms},
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot the blue, green and red histograms of an image")]
struct Args {
    /// Path to the image file
    #[arg(default_value = config::DEFAULT_IMAGE_PATH)]
    image: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    camscope::init_logger();

    analyze_and_plot_histograms(&args.image, &mut WindowPlotter::default());
    Ok(())
}
