//! Host platform detection

use std::fmt;

/// Kernel version file consulted for the WSL marker
pub const PROC_VERSION_PATH: &str = "/proc/version";

/// Platform families with distinct audio players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOs,
    Linux,
    /// Linux running under Windows Subsystem for Linux
    Wsl,
    Windows,
    Unknown,
}

impl Platform {
    /// Resolve the platform from an OS name (as in `std::env::consts::OS`)
    /// and the contents of the kernel version file, if readable.
    pub fn from_os(os: &str, proc_version: Option<&str>) -> Self {
        match os {
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            "linux" => {
                let is_wsl = proc_version
                    .map(|v| v.to_lowercase().contains("microsoft"))
                    .unwrap_or(false);
                if is_wsl {
                    Self::Wsl
                } else {
                    Self::Linux
                }
            }
            _ => Self::Unknown,
        }
    }

    /// Detect the platform this process runs on
    pub fn detect() -> Self {
        let os = std::env::consts::OS;
        let proc_version = if os == "linux" {
            std::fs::read_to_string(PROC_VERSION_PATH).ok()
        } else {
            None
        };
        Self::from_os(os, proc_version.as_deref())
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Wsl => "wsl",
            Self::Windows => "windows",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
