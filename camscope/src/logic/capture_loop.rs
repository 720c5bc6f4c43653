use crate::config::{self, SLIDERS};
use camera::{CameraResult, CaptureDevice, set_camera_properties};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use viewer::{ControlSurface, ViewerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Opening,
    Configuring,
    Streaming,
    Closing,
    Closed,
}

/// Why the loop reached [`LoopState::Closed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The device could not be opened. Nothing was configured or released.
    OpenFailed,
    /// The window or its trackbars could not be created or drawn.
    WindowFailed,
    FrameReadFailed,
    /// The quit key was pressed.
    Quit,
    WindowClosed,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSummary {
    pub exit: ExitReason,
    /// Frames read successfully while streaming.
    pub frames: u64,
}

/// Drives one capture session from open to release.
///
/// Once the device is open it is released exactly once, and the windows are
/// destroyed exactly once, whichever way streaming ends.
pub struct CaptureLoop<'a, S: ControlSurface> {
    surface: &'a mut S,
    stop_sig: Arc<AtomicBool>,
    state: LoopState,
    frames: u64,
}

impl<'a, S: ControlSurface> CaptureLoop<'a, S> {
    pub fn new(surface: &'a mut S, stop_sig: Arc<AtomicBool>) -> Self {
        Self {
            surface,
            stop_sig,
            state: LoopState::Opening,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn run<D, F>(&mut self, open: F) -> CaptureSummary
    where
        D: CaptureDevice,
        F: FnOnce() -> CameraResult<D>,
    {
        let mut device = match open() {
            Ok(device) => device,
            Err(e) => {
                println!("Error: Could not open the camera.");
                log::warn!("{e}");
                self.transition(LoopState::Closed);
                return self.summary(ExitReason::OpenFailed);
            }
        };

        self.transition(LoopState::Configuring);
        set_camera_properties(&mut device);

        let exit = match self.create_window() {
            Ok(()) => {
                println!("Press '{}' to quit.", config::QUIT_KEY);
                self.transition(LoopState::Streaming);
                self.stream(&mut device)
            }
            Err(e) => {
                log::warn!("create control window failed: {e}");
                ExitReason::WindowFailed
            }
        };

        self.transition(LoopState::Closing);
        device.release();
        self.surface.destroy_all_windows();
        self.transition(LoopState::Closed);

        self.summary(exit)
    }

    fn create_window(&mut self) -> ViewerResult<()> {
        self.surface.named_window(config::WINDOW_NAME)?;
        for slider in SLIDERS {
            self.surface.create_trackbar(slider.spec)?;
        }
        Ok(())
    }

    fn stream(&mut self, device: &mut impl CaptureDevice) -> ExitReason {
        loop {
            let frame = match device.read_frame() {
                Ok(frame) => frame,
                Err(e) => {
                    println!("Error: Failed to capture an image.");
                    log::warn!("{e}");
                    return ExitReason::FrameReadFailed;
                }
            };
            self.frames += 1;

            let values = SLIDERS.map(|slider| {
                let value = self.surface.trackbar_pos(slider.spec.name);
                (slider.property, value.unwrap_or(slider.spec.initial))
            });

            // written every frame, changed or not
            for (property, value) in values {
                if let Err(e) = device.set_property(property, value) {
                    log::debug!("ignored: {e}");
                }
            }

            if let Err(e) = self.surface.show(&frame) {
                log::warn!("show frame failed: {e}");
                return ExitReason::WindowFailed;
            }

            let exit = match self.surface.wait_key(config::KEY_WAIT) {
                Some(key) if key == config::QUIT_KEY => Some(ExitReason::Quit),
                _ if !self.surface.is_open() => Some(ExitReason::WindowClosed),
                _ if self.stop_sig.load(Ordering::Relaxed) => Some(ExitReason::Interrupted),
                _ => None,
            };

            if let Some(exit) = exit {
                println!("Quitting.");
                return exit;
            }
        }
    }

    fn transition(&mut self, next: LoopState) {
        log::debug!("capture loop: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn summary(&self, exit: ExitReason) -> CaptureSummary {
        CaptureSummary {
            exit,
            frames: self.frames,
        }
    }
}
