/// The two named camera altitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AltitudeMode {
    /// Wide, continent-scale view
    #[default]
    High,
    /// Close, city-scale view
    Low,
}

impl AltitudeMode {
    /// Altitude fraction for this mode (1 = high/far, 0 = low/close).
    pub const fn fraction(self) -> f64 {
        match self {
            AltitudeMode::High => 1.0,
            AltitudeMode::Low => 0.0,
        }
    }

    /// Nearest mode for a continuous fraction.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction >= 0.5 {
            AltitudeMode::High
        } else {
            AltitudeMode::Low
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AltitudeMode::High => AltitudeMode::Low,
            AltitudeMode::Low => AltitudeMode::High,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AltitudeMode::High => "HIGH",
            AltitudeMode::Low => "LOW",
        }
    }
}

/// A scalar that eases toward a target: `value += (target - value) * min(1, dt * rate)`.
///
/// Never overshoots, and approaches the target monotonically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothed {
    value: f64,
    target: f64,
}

impl Smoothed {
    pub fn new(value: f64) -> Self {
        Self { value, target: value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump straight to `value` with no transition.
    pub fn snap(&mut self, value: f64) {
        self.value = value;
        self.target = value;
    }

    pub fn step(&mut self, dt: f64, rate: f64) {
        let blend = (dt * rate).clamp(0.0, 1.0);
        if blend.is_nan() {
            return;
        }
        if blend >= 1.0 {
            self.value = self.target;
        } else {
            self.value += (self.target - self.value) * blend;
        }
    }

    pub fn is_settled(&self, tolerance: f64) -> bool {
        (self.target - self.value).abs() <= tolerance
    }
}
