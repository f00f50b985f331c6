/// Errors for CPU core count detection
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    /// The OS answered the query but reported a non-positive processor count.
    #[error("CPU core count detection failed: OS reported no available processors")]
    NoProcessorsReported,

    /// The underlying OS query could not be performed.
    #[error("CPU core count detection failed: {0}")]
    QueryFailed(String),
}

impl DetectionError {
    /// Stable code attached to every detection failure, for hosting
    /// applications that dispatch on codes rather than messages.
    pub const CODE: &'static str = "CPU_DETECTION_ERROR";

    #[must_use]
    pub fn code(&self) -> &'static str {
        Self::CODE
    }
}

impl From<anyhow::Error> for DetectionError {
    fn from(e: anyhow::Error) -> Self {
        Self::QueryFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_is_stable() {
        assert_eq!(DetectionError::CODE, "CPU_DETECTION_ERROR");
        assert_eq!(DetectionError::NoProcessorsReported.code(), "CPU_DETECTION_ERROR");
        assert_eq!(
            DetectionError::QueryFailed("boom".into()).code(),
            "CPU_DETECTION_ERROR"
        );
    }

    #[test]
    fn test_messages_are_descriptive() {
        let err = DetectionError::NoProcessorsReported;
        assert!(
            err.to_string().contains("no available processors"),
            "Message should describe the zero-count failure"
        );
    }

    #[test]
    fn test_foreign_errors_keep_their_message() {
        let underlying = anyhow::anyhow!("sysconf query rejected");
        let err = DetectionError::from(underlying);

        assert!(
            err.to_string().contains("sysconf query rejected"),
            "Message should include the underlying cause text"
        );
    }
}
