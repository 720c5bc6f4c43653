/// Name, range and initial position of a trackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackbarSpec {
    pub name: &'static str,
    pub min: i64,
    pub max: i64,
    pub initial: i64,
}

impl TrackbarSpec {
    pub const fn new(name: &'static str, min: i64, max: i64, initial: i64) -> Self {
        Self {
            name,
            min,
            max,
            initial,
        }
    }
}

/// An integer slider. Every way of moving it clamps into `[min, max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trackbar {
    name: String,
    min: i64,
    max: i64,
    value: i64,
}

impl Trackbar {
    pub fn new(spec: TrackbarSpec) -> Self {
        let (min, max) = if spec.min <= spec.max {
            (spec.min, spec.max)
        } else {
            (spec.max, spec.min)
        };

        Self {
            name: spec.name.to_string(),
            min,
            max,
            value: spec.initial.clamp(min, max),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Position along the track in `[0, 1]`.
    pub fn ratio(&self) -> f32 {
        if self.max == self.min {
            return 0.0;
        }
        (self.value - self.min) as f32 / (self.max - self.min) as f32
    }

    /// Move to a position along the track, as from a pointer drag.
    pub fn set_ratio(&mut self, ratio: f32) {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        let offset = ((self.max - self.min) as f64 * ratio as f64).round() as i64;
        self.set_value(self.min + offset);
    }
}
