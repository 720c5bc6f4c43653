use camera::CameraProperty;
use std::time::Duration;
use viewer::TrackbarSpec;

/// Camera opened when no `--device` is given.
pub const DEVICE_INDEX: u32 = 2;

pub const WINDOW_NAME: &str = "Camera";

pub const QUIT_KEY: char = 'q';

/// How long each streaming iteration waits for a key press.
pub const KEY_WAIT: Duration = Duration::from_millis(1);

pub const DEFAULT_IMAGE_PATH: &str = "my_photo-3.jpg";

pub const PLOT_SIZE: (u32, u32) = (1024, 768);

/// A trackbar and the camera property it drives.
#[derive(Debug, Clone, Copy)]
pub struct SliderBinding {
    pub spec: TrackbarSpec,
    pub property: CameraProperty,
}

pub const SLIDERS: [SliderBinding; 3] = [
    SliderBinding {
        spec: TrackbarSpec::new("White Balance", 2800, 6500, 2800),
        property: CameraProperty::WhiteBalanceManual,
    },
    SliderBinding {
        spec: TrackbarSpec::new("Exposure", 1, 5000, 1),
        property: CameraProperty::ExposureAbsolute,
    },
    SliderBinding {
        spec: TrackbarSpec::new("Focus", 1, 1023, 1),
        property: CameraProperty::FocusAbsolute,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliders_fit_their_property() {
        for slider in SLIDERS {
            let range = slider.property.range();
            let spec = slider.spec;

            assert!(spec.min <= spec.initial && spec.initial <= spec.max);
            assert!(range.contains(spec.min), "{}", spec.name);
            assert!(range.contains(spec.max), "{}", spec.name);
            assert!(!slider.property.is_auto());
        }
    }
}
