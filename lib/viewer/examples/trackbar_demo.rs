use anyhow::Result;
use image::{Rgb, RgbImage};
use std::time::Duration;
use viewer::{ControlSurface, ControlWindow, TrackbarSpec};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut window = ControlWindow::new();
    window.named_window("Trackbar Demo")?;
    window.create_trackbar(TrackbarSpec::new("Red", 0, 255, 128))?;
    window.create_trackbar(TrackbarSpec::new("Green", 0, 255, 64))?;
    window.create_trackbar(TrackbarSpec::new("Blue", 0, 255, 32))?;

    log::info!("drag the trackbars, press 'q' to quit");

    while window.is_open() {
        let color =
            ["Red", "Green", "Blue"].map(|name| window.trackbar_pos(name).unwrap_or(0) as u8);
        window.show(&RgbImage::from_pixel(480, 320, Rgb(color)))?;

        if window.wait_key(Duration::from_millis(10)) == Some('q') {
            break;
        }
    }

    window.destroy_all_windows();
    Ok(())
}
