//! camscope
//!
//! Two small desktop tools sharing one crate:
//!
//! - `camscope-histogram`: plots the blue, green and red intensity histograms
//!   of an image file
//! - `camscope-camera`: previews a camera and tunes white balance, exposure and
//!   focus with trackbars while streaming
//!
//! # Architecture
//! - [`config`]: fixed device index, window name, trackbar table and plot settings
//! - [`logic::histogram_analyzer`]: load, count, plot
//! - [`logic::capture_loop`]: the `Opening → Configuring → Streaming → Closing`
//!   state machine, generic over the capture device and the window

pub mod config;
pub mod logic;

/// Initializes the logger.
///
/// Sets up a custom logger format with timestamp, log level, file name, line number,
/// and log message. Defaults to `info` unless `RUST_LOG` says otherwise.
pub fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
