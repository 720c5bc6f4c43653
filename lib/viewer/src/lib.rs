//! Native windows for previewing frames and images.
//!
//! - [`ControlWindow`]: a frame preview with [`Trackbar`]s drawn below it,
//!   driven through the [`ControlSurface`] trait
//! - [`show_image`]: a window that shows one image until the user closes it

mod control_window;
mod image_window;
mod surface;
mod trackbar;

pub use control_window::ControlWindow;
pub use image::RgbImage;
pub use image_window::show_image;
pub use surface::ControlSurface;
pub use trackbar::{Trackbar, TrackbarSpec};

pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(thiserror::Error, Debug)]
pub enum ViewerError {
    #[error("Window error: {0}")]
    WindowError(#[from] minifb::Error),

    #[error("Window `{0}` has not been created")]
    NoWindow(String),

    #[error("Empty image")]
    EmptyImage,

    #[error("Fast image buffer error: {0}")]
    FastImageBufferError(#[from] fast_image_resize::ImageBufferError),

    #[error("Fast image resize error: {0}")]
    FastImageResizeError(#[from] fast_image_resize::ResizeError),
}

/// Pack RGB pixels as `0x00RRGGBB`, the layout minifb expects.
pub fn rgb_to_u32(image: &RgbImage) -> Vec<u32> {
    image
        .pixels()
        .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | (p[2] as u32))
        .collect()
}
