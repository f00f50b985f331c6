/// Errors for device specification detection
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("System information collection failed: {0}")]
    SysInfoUnavailable(String),
}
