pub mod camera_client;
pub mod camera_property;
pub mod capture_device;

pub use camera_client::{CameraClient, CameraConfig};
pub use camera_property::{CameraProperty, PropertyRange, set_camera_properties};
pub use capture_device::CaptureDevice;
pub use image::RgbImage;
pub use nokhwa::utils::CameraIndex;

pub type CameraResult<T> = Result<T, CameraError>;

#[derive(thiserror::Error, Debug)]
pub enum CameraError {
    #[error("Failed to initialize camera: {0}")]
    InitializationError(String),

    #[error("Failed to start camera: {0}")]
    StartError(String),

    #[error("Failed to stop camera: {0}")]
    StopError(String),

    #[error("No frame available")]
    NoFrameAvailable,

    #[error("Failed to set {property}: {reason}")]
    PropertyError {
        property: &'static str,
        reason: String,
    },

    #[error("Camera error: {0}")]
    NokhwaError(#[from] nokhwa::NokhwaError),
}

pub fn init() {
    #[cfg(target_os = "macos")]
    nokhwa::nokhwa_initialize(|granted| {
        log::info!("User said {} for nokhwa", granted);
    });
}
