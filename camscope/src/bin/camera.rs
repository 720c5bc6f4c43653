use anyhow::Result;
use camera::{CameraClient, CameraConfig, CameraIndex};
use camscope::{config, logic::CaptureLoop};
use clap::Parser;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use viewer::ControlWindow;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Preview a camera and tune white balance, exposure and focus with trackbars"
)]
struct Args {
    /// Camera device index
    #[arg(short, long, default_value_t = config::DEVICE_INDEX)]
    device: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    camscope::init_logger();
    camera::init();

    let stop_sig = Arc::new(AtomicBool::new(false));
    let stop_sig_handler = stop_sig.clone();
    ctrlc::set_handler(move || {
        log::info!("Ctrl-C received, stopping...");
        stop_sig_handler.store(true, Ordering::Relaxed);
    })?;

    let mut window = ControlWindow::new();
    let summary = CaptureLoop::new(&mut window, stop_sig).run(|| {
        CameraClient::open(CameraIndex::Index(args.device), CameraConfig::default())
    });

    log::info!(
        "capture loop finished: {:?} after {} frames",
        summary.exit,
        summary.frames
    );
    Ok(())
}
