use std::fmt;

/// Coarse device capability tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeviceTier {
    Low,
    Mid,
    High,
}

impl DeviceTier {
    /// Lowercase form used by hosting applications.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }
}

impl fmt::Display for DeviceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device specification for the current host
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSpecInfo {
    pub tier: DeviceTier,
    pub details: HardwareDetails,
    pub detected_at: chrono::DateTime<chrono::Utc>,
}

/// Hardware details backing a tier decision
#[derive(Debug, Clone, PartialEq)]
pub struct HardwareDetails {
    /// Total memory in GB, rounded to two decimals
    pub total_memory_gb: f64,
    /// Number of logical CPU cores
    pub cpu_cores: u32,
    /// Operating system version
    pub os_version: String,
    /// Display metrics, when the hosting application runs on a display
    pub display: Option<DisplayMetrics>,
}

/// Display metrics supplied by the hosting application.
///
/// The OS query cannot see the display the application renders to, so these
/// come from the host UI layer. Headless hosts have none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Diagonal screen size in inches
    pub screen_size_inches: f64,
    /// Pixel density scale relative to the baseline DPI
    pub pixel_density: f64,
    /// Whether the device is a tablet
    pub is_tablet: bool,
}

impl DisplayMetrics {
    /// Baseline screen density, in dots per inch, that a density scale of
    /// 1.0 corresponds to.
    pub const BASELINE_DPI: f64 = 160.0;

    /// Build display metrics from raw pixel dimensions and a density scale.
    #[must_use]
    pub fn from_screen_pixels(width_px: f64, height_px: f64, scale: f64, is_tablet: bool) -> Self {
        let width_inches = width_px / (scale * Self::BASELINE_DPI);
        let height_inches = height_px / (scale * Self::BASELINE_DPI);

        Self {
            screen_size_inches: width_inches.hypot(height_inches),
            pixel_density: scale,
            is_tablet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_string_forms() {
        assert_eq!(DeviceTier::Low.as_str(), "low");
        assert_eq!(DeviceTier::Mid.as_str(), "mid");
        assert_eq!(DeviceTier::High.as_str(), "high");
        assert_eq!(DeviceTier::High.to_string(), "high");
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(DeviceTier::Low < DeviceTier::Mid);
        assert!(DeviceTier::Mid < DeviceTier::High);
    }

    #[test]
    fn test_screen_size_from_pixels() {
        // 1080x1920 at 3x density: 2.25in x 4.0in, ~4.59in diagonal
        let metrics = DisplayMetrics::from_screen_pixels(1080.0, 1920.0, 3.0, false);

        assert!(
            (metrics.screen_size_inches - 4.589).abs() < 0.01,
            "Diagonal should be ~4.59in, got {}",
            metrics.screen_size_inches
        );
        assert!((metrics.pixel_density - 3.0).abs() < f64::EPSILON);
        assert!(!metrics.is_tablet);
    }

    #[test]
    fn test_screen_size_grows_with_resolution_at_fixed_density() {
        let small = DisplayMetrics::from_screen_pixels(720.0, 1280.0, 2.0, false);
        let large = DisplayMetrics::from_screen_pixels(1440.0, 2560.0, 2.0, false);

        assert!(large.screen_size_inches > small.screen_size_inches);
    }
}
