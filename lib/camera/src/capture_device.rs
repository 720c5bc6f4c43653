use crate::{CameraProperty, CameraResult};
use image::RgbImage;

/// An open capture session.
///
/// The session is owned by exactly one loop. [`CaptureDevice::release`]
/// consumes it, so a released session can't be written to or released again.
pub trait CaptureDevice {
    /// Write an integer value to a device property.
    ///
    /// Auto toggles and absolute values go through this same call.
    fn set_property(&mut self, property: CameraProperty, value: i64) -> CameraResult<()>;

    /// Block until the next frame is available.
    fn read_frame(&mut self) -> CameraResult<RgbImage>;

    /// Stop streaming and give the device back.
    fn release(self);
}
