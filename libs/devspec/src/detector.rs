use std::sync::Mutex;

use sysinfo::System;

use crate::error::DetectError;
use crate::model::{DeviceSpecInfo, DeviceTier, DisplayMetrics, HardwareDetails};
use crate::score;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Logical core count assumed when every detection path fails.
const FALLBACK_CPU_CORES: u32 = 4;

/// Detects the hardware specification of the current host
pub struct DeviceSpecDetector {
    system: Mutex<System>,
}

impl DeviceSpecDetector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new_all()),
        }
    }

    /// Detect the device specification. Never fails: hosts where collection
    /// breaks are classified as [`DeviceTier::Mid`] with zeroed details, so
    /// callers without an error channel always get a usable answer.
    pub fn detect(&self, display: Option<DisplayMetrics>) -> DeviceSpecInfo {
        match self.try_detect(display) {
            Ok(info) => info,
            Err(e) => {
                tracing::error!(error = %e, "Device spec detection failed, falling back to mid tier");
                Self::fallback_info()
            }
        }
    }

    /// Tier-only variant of [`detect`](Self::detect).
    pub fn detect_tier(&self, display: Option<DisplayMetrics>) -> DeviceTier {
        self.detect(display).tier
    }

    /// Detect the device specification, surfacing collection failures.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::SysInfoUnavailable`] when the system
    /// information handle is unusable.
    pub fn try_detect(
        &self,
        display: Option<DisplayMetrics>,
    ) -> Result<DeviceSpecInfo, DetectError> {
        let mut sys = self
            .system
            .lock()
            .map_err(|e| DetectError::SysInfoUnavailable(e.to_string()))?;

        sys.refresh_memory();
        let total_memory_gb = sys.total_memory() as f64 / BYTES_PER_GB;
        drop(sys);

        let cpu_cores = Self::cpu_cores();
        let os_version = System::os_version().unwrap_or_else(|| "unknown".to_string());

        let total_score = score::hardware_score(
            total_memory_gb,
            cpu_cores,
            display.as_ref(),
            std::env::consts::OS,
            &os_version,
        );
        let tier = score::tier_for_score(total_score);
        tracing::debug!(score = total_score, tier = %tier, "Classified device spec");

        Ok(DeviceSpecInfo {
            tier,
            details: HardwareDetails {
                total_memory_gb: round_to_hundredths(total_memory_gb),
                cpu_cores,
                os_version,
                display,
            },
            detected_at: chrono::Utc::now(),
        })
    }

    /// Core count with the staged fallback: on-demand query, then the
    /// precomputed constant, then a conservative default.
    fn cpu_cores() -> u32 {
        match cpu_info::cpu_core_count() {
            Ok(count) => count,
            Err(e) => {
                let cached = *cpu_info::CPU_CORE_COUNT;
                if cached > 0 {
                    cached
                } else {
                    tracing::warn!(
                        error = %e,
                        "CPU core detection failed, assuming {FALLBACK_CPU_CORES} cores"
                    );
                    FALLBACK_CPU_CORES
                }
            }
        }
    }

    fn fallback_info() -> DeviceSpecInfo {
        DeviceSpecInfo {
            tier: DeviceTier::Mid,
            details: HardwareDetails {
                total_memory_gb: 0.0,
                cpu_cores: FALLBACK_CPU_CORES,
                os_version: String::new(),
                display: None,
            },
            detected_at: chrono::Utc::now(),
        }
    }
}

impl Default for DeviceSpecDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_mid_tier_with_default_cores() {
        let info = DeviceSpecDetector::fallback_info();

        assert_eq!(info.tier, DeviceTier::Mid);
        assert_eq!(info.details.cpu_cores, FALLBACK_CPU_CORES);
        assert!(info.details.total_memory_gb.abs() < f64::EPSILON);
        assert!(info.details.os_version.is_empty());
        assert!(info.details.display.is_none());
    }

    #[test]
    fn test_rounding_to_hundredths() {
        assert!((round_to_hundredths(7.9999) - 8.0).abs() < f64::EPSILON);
        assert!((round_to_hundredths(6.456) - 6.46).abs() < f64::EPSILON);
    }
}
