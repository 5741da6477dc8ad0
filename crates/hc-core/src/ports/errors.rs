use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data directory unavailable")]
    DataLocalDirUnavailable,

    #[error("system config directory unavailable")]
    ConfigDirUnavailable,
}

#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("invalid config key: {0}")]
    InvalidKey(String),

    #[error("config store io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyMonitorError {
    /// The platform offers no global key monitoring in this build or session.
    #[error("global key monitoring unsupported: {0}")]
    Unsupported(String),

    #[error("input monitoring permission denied")]
    PermissionDenied,

    #[error("key monitor failed: {0}")]
    Failed(String),
}
