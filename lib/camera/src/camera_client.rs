use crate::{CameraError, CameraProperty, CameraResult, CaptureDevice};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{CameraIndex, ControlValueSetter, RequestedFormat, RequestedFormatType, Resolution},
};

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct CameraConfig {
    #[derivative(Default(value = "None"))]
    #[setters[strip_option]]
    pub fps: Option<u32>,

    #[derivative(Default(value = "None"))]
    #[setters[strip_option]]
    pub width: Option<u32>,

    #[derivative(Default(value = "None"))]
    #[setters[strip_option]]
    pub height: Option<u32>,
}

pub struct CameraClient {
    camera: Camera,
    is_running: bool,
}

impl CameraClient {
    pub fn new(camera_index: CameraIndex, config: CameraConfig) -> CameraResult<Self> {
        let format =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);

        let mut camera = Camera::new(camera_index, format)
            .map_err(|e| CameraError::InitializationError(e.to_string()))?;

        if let Some(fps) = config.fps
            && let Err(e) = camera.set_frame_rate(fps)
        {
            log::warn!("camera set frame rate ({fps}) failed: {e}");
        }

        if let Some(w) = config.width
            && let Some(h) = config.height
            && let Err(e) = camera.set_resolution(Resolution::new(w, h))
        {
            log::warn!("camera set resolution ({w} x {h}) failed: {e}");
        }

        Ok(Self {
            camera,
            is_running: false,
        })
    }

    /// Create the client and start streaming in one step.
    pub fn open(camera_index: CameraIndex, config: CameraConfig) -> CameraResult<Self> {
        let mut client = Self::new(camera_index, config)?;
        client.start()?;
        Ok(client)
    }

    pub fn start(&mut self) -> CameraResult<()> {
        self.camera
            .open_stream()
            .map_err(|e| CameraError::StartError(e.to_string()))?;
        self.is_running = true;

        let format = self.camera.camera_format();
        log::info!(
            "camera `{}` streaming {}x{} @ {}fps",
            self.camera.info().human_name(),
            format.resolution().width(),
            format.resolution().height(),
            format.frame_rate()
        );
        Ok(())
    }

    pub fn stop(&mut self) -> CameraResult<()> {
        self.camera
            .stop_stream()
            .map_err(|e| CameraError::StopError(e.to_string()))?;
        self.is_running = false;
        Ok(())
    }

    pub fn frame(&mut self) -> CameraResult<RgbImage> {
        if !self.is_running {
            return Err(CameraError::NoFrameAvailable);
        }

        let buffer = self.camera.frame()?;
        let frame = buffer.decode_image::<RgbFormat>()?;
        if frame.is_empty() {
            return Err(CameraError::NoFrameAvailable);
        }

        Ok(frame)
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }
}

impl CaptureDevice for CameraClient {
    fn set_property(&mut self, property: CameraProperty, value: i64) -> CameraResult<()> {
        self.camera
            .set_camera_control(property.control(), ControlValueSetter::Integer(value))
            .map_err(|e| CameraError::PropertyError {
                property: property.name(),
                reason: e.to_string(),
            })
    }

    fn read_frame(&mut self) -> CameraResult<RgbImage> {
        self.frame()
    }

    fn release(mut self) {
        if let Err(e) = self.stop() {
            log::warn!("{e}");
        }
        self.is_running = false;
        log::debug!("camera released");
    }
}

impl Drop for CameraClient {
    fn drop(&mut self) {
        if self.is_running() {
            _ = self.stop();
        }
    }
}
