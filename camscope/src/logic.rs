//! The two workflows.

pub mod capture_loop;
pub mod histogram_analyzer;

pub use capture_loop::{CaptureLoop, CaptureSummary, ExitReason, LoopState};
pub use histogram_analyzer::{HistogramPlotter, WindowPlotter, analyze_and_plot_histograms};
