//! Operating system classification for platform-specific packaging.

use std::fmt;

/// Operating system families jdevtools distinguishes between.
///
/// Only Linux gets special treatment (RPM/DEB packaging plugins); the
/// remaining variants exist so the platform can be reported faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsType {
    Linux,
    Mac,
    Windows,
    Unknown,
}

impl OsType {
    /// Classify the operating system this process is running on.
    pub fn detect() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Classify an OS identifier string (case-insensitive).
    ///
    /// Accepts both Rust's `std::env::consts::OS` values and the common
    /// spellings users pass to `--os`. Anything unrecognized maps to
    /// [`OsType::Unknown`] rather than failing.
    pub fn from_identifier(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "linux" => Self::Linux,
            "macos" | "mac" | "darwin" => Self::Mac,
            "windows" => Self::Windows,
            _ => Self::Unknown,
        }
    }

    /// Get the string identifier for this OS type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Mac => "mac",
            Self::Windows => "windows",
            Self::Unknown => "unknown",
        }
    }

    /// Whether native OS packages (RPM/DEB) can be produced on this platform.
    pub fn supports_native_packaging(&self) -> bool {
        matches!(self, Self::Linux)
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
