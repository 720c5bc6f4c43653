use crate::{TrackbarSpec, ViewerResult};
use image::RgbImage;
use std::time::Duration;

/// A single preview window with trackbars and keyboard input.
pub trait ControlSurface {
    fn named_window(&mut self, title: &str) -> ViewerResult<()>;

    fn create_trackbar(&mut self, spec: TrackbarSpec) -> ViewerResult<()>;

    /// Current position of a trackbar, `None` if no trackbar has that name.
    fn trackbar_pos(&self, name: &str) -> Option<i64>;

    fn show(&mut self, frame: &RgbImage) -> ViewerResult<()>;

    /// Wait up to `delay` for input and return the key pressed, if any.
    fn wait_key(&mut self, delay: Duration) -> Option<char>;

    /// False once the user closed the window.
    fn is_open(&self) -> bool;

    fn destroy_all_windows(&mut self);
}
