use std::sync::{LazyLock, Mutex};

use sysinfo::System;

use crate::error::DetectionError;

/// Precomputed logical processor count, captured on first access.
///
/// This access pattern has no error channel: when detection fails it exposes
/// the sentinel `0` instead and logs the failure. Consumers that need the
/// failure surfaced should call [`cpu_core_count`].
pub static CPU_CORE_COUNT: LazyLock<u32> = LazyLock::new(|| match cpu_core_count() {
    Ok(count) => count,
    Err(e) => {
        tracing::warn!(error = %e, "CPU core count unavailable, exposing 0");
        0
    }
});

static SHARED_PROBE: LazyLock<CoreCountProbe> = LazyLock::new(CoreCountProbe::new);

/// Query the OS for the number of logical processors visible to the process.
///
/// The value is re-read from the OS on every call. The query has no side
/// effects and is safe to call repeatedly and concurrently.
///
/// # Errors
///
/// Returns [`DetectionError`] when the OS reports a non-positive processor
/// count or the underlying query cannot be performed.
pub fn cpu_core_count() -> Result<u32, DetectionError> {
    SHARED_PROBE.probe()
}

/// Probes the OS for the logical processor count.
///
/// Both module-level access patterns are thin wrappers over this probe, so
/// the query logic lives in one place.
pub struct CoreCountProbe {
    system: Mutex<System>,
}

impl CoreCountProbe {
    #[must_use]
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new_all()),
        }
    }

    /// Re-query the OS and validate the reported processor count.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::QueryFailed`] when the system handle is
    /// unusable and [`DetectionError::NoProcessorsReported`] when the OS
    /// reports zero processors.
    pub fn probe(&self) -> Result<u32, DetectionError> {
        let mut sys = self
            .system
            .lock()
            .map_err(|e| DetectionError::QueryFailed(e.to_string()))?;

        sys.refresh_cpu_all();
        Self::count_from(sys.cpus().len())
    }

    /// Validation shared by both access patterns.
    fn count_from(raw: usize) -> Result<u32, DetectionError> {
        if raw == 0 {
            return Err(DetectionError::NoProcessorsReported);
        }
        // Processor counts are always small, safe to truncate
        Ok(u32::try_from(raw).unwrap_or(u32::MAX))
    }
}

impl Default for CoreCountProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_zero_processors_is_a_detection_error() {
        let err = CoreCountProbe::count_from(0).unwrap_err();

        assert!(matches!(err, DetectionError::NoProcessorsReported));
        assert_eq!(err.code(), "CPU_DETECTION_ERROR");
    }

    #[test]
    fn test_positive_counts_pass_validation() {
        assert_eq!(CoreCountProbe::count_from(1).unwrap(), 1);
        assert_eq!(CoreCountProbe::count_from(8).unwrap(), 8);
        assert_eq!(CoreCountProbe::count_from(192).unwrap(), 192);
    }

    #[test]
    fn test_oversized_counts_saturate() {
        assert_eq!(CoreCountProbe::count_from(usize::MAX).unwrap(), u32::MAX);
    }
}
