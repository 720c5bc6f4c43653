use crate::CaptureDevice;
use nokhwa::utils::KnownCameraControl;

// V4L2 control ids with no named nokhwa control. nokhwa's `Exposure` and
// `Focus` resolve to V4L2_CID_EXPOSURE and V4L2_CID_FOCUS_RELATIVE.
const V4L2_CID_AUTO_WHITE_BALANCE: u128 = 0x0098_090c;
const V4L2_CID_EXPOSURE_AUTO: u128 = 0x009a_0901;
const V4L2_CID_EXPOSURE_ABSOLUTE: u128 = 0x009a_0902;
const V4L2_CID_FOCUS_ABSOLUTE: u128 = 0x009a_090a;
const V4L2_CID_FOCUS_AUTO: u128 = 0x009a_090c;

/// Inclusive value range of a camera property plus the value applied at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRange {
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

impl PropertyRange {
    const fn new(min: i64, max: i64, default: i64) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// The fixed table of controllable camera properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraProperty {
    Brightness,
    Contrast,
    Saturation,
    WhiteBalanceAuto,
    WhiteBalanceManual,
    Gamma,
    Sharpness,
    Gain,
    Hue,
    ExposureAuto,
    ExposureAbsolute,
    FocusAuto,
    FocusAbsolute,
}

impl CameraProperty {
    /// Table order, which is also the order defaults are applied in.
    pub const ALL: [CameraProperty; 13] = [
        CameraProperty::Brightness,
        CameraProperty::Contrast,
        CameraProperty::Saturation,
        CameraProperty::WhiteBalanceAuto,
        CameraProperty::WhiteBalanceManual,
        CameraProperty::Gamma,
        CameraProperty::Sharpness,
        CameraProperty::Gain,
        CameraProperty::Hue,
        CameraProperty::ExposureAuto,
        CameraProperty::ExposureAbsolute,
        CameraProperty::FocusAuto,
        CameraProperty::FocusAbsolute,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CameraProperty::Brightness => "Brightness",
            CameraProperty::Contrast => "Contrast",
            CameraProperty::Saturation => "Saturation",
            CameraProperty::WhiteBalanceAuto => "White Balance Auto",
            CameraProperty::WhiteBalanceManual => "White Balance Manual",
            CameraProperty::Gamma => "Gamma",
            CameraProperty::Sharpness => "Sharpness",
            CameraProperty::Gain => "Gain",
            CameraProperty::Hue => "Hue",
            CameraProperty::ExposureAuto => "Exposure Auto",
            CameraProperty::ExposureAbsolute => "Exposure Absolute",
            CameraProperty::FocusAuto => "Focus Auto",
            CameraProperty::FocusAbsolute => "Focus Absolute",
        }
    }

    pub fn range(self) -> PropertyRange {
        match self {
            CameraProperty::Brightness => PropertyRange::new(-64, 64, 0),
            CameraProperty::Contrast => PropertyRange::new(0, 64, 32),
            CameraProperty::Saturation => PropertyRange::new(0, 128, 64),
            CameraProperty::WhiteBalanceAuto => PropertyRange::new(0, 1, 0),
            CameraProperty::WhiteBalanceManual => PropertyRange::new(2800, 6500, 2800),
            CameraProperty::Gamma => PropertyRange::new(72, 500, 100),
            CameraProperty::Sharpness => PropertyRange::new(0, 6, 3),
            CameraProperty::Gain => PropertyRange::new(0, 100, 0),
            CameraProperty::Hue => PropertyRange::new(-40, 40, 0),
            CameraProperty::ExposureAuto => PropertyRange::new(0, 1, 0),
            CameraProperty::ExposureAbsolute => PropertyRange::new(1, 5000, 500),
            CameraProperty::FocusAuto => PropertyRange::new(0, 1, 0),
            CameraProperty::FocusAbsolute => PropertyRange::new(1, 1023, 280),
        }
    }

    /// Auto entries are on/off toggles. They are written exactly like the others.
    pub fn is_auto(self) -> bool {
        self.name().contains("Auto")
    }

    pub fn control(self) -> KnownCameraControl {
        match self {
            CameraProperty::Brightness => KnownCameraControl::Brightness,
            CameraProperty::Contrast => KnownCameraControl::Contrast,
            CameraProperty::Saturation => KnownCameraControl::Saturation,
            CameraProperty::WhiteBalanceAuto => {
                KnownCameraControl::Other(V4L2_CID_AUTO_WHITE_BALANCE)
            }
            CameraProperty::WhiteBalanceManual => KnownCameraControl::WhiteBalance,
            CameraProperty::Gamma => KnownCameraControl::Gamma,
            CameraProperty::Sharpness => KnownCameraControl::Sharpness,
            CameraProperty::Gain => KnownCameraControl::Gain,
            CameraProperty::Hue => KnownCameraControl::Hue,
            CameraProperty::ExposureAuto => KnownCameraControl::Other(V4L2_CID_EXPOSURE_AUTO),
            CameraProperty::ExposureAbsolute => {
                KnownCameraControl::Other(V4L2_CID_EXPOSURE_ABSOLUTE)
            }
            CameraProperty::FocusAuto => KnownCameraControl::Other(V4L2_CID_FOCUS_AUTO),
            CameraProperty::FocusAbsolute => KnownCameraControl::Other(V4L2_CID_FOCUS_ABSOLUTE),
        }
    }
}

/// Apply the default of every table entry once, in table order.
///
/// A write the device rejects is logged and skipped.
pub fn set_camera_properties(device: &mut impl CaptureDevice) {
    for property in CameraProperty::ALL {
        let default = property.range().default;

        if property.is_auto() {
            println!("Setting {} to {default} (On: 1, Off: 0)", property.name());
        } else {
            println!("Setting {} to default value: {default}", property.name());
        }

        if let Err(e) = device.set_property(property, default) {
            log::debug!("ignored: {e}");
        }
    }
}
