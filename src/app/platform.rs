/// Operating system detection
use std::fmt;

/// The operating system family the application runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    Linux,
    MacOs,
    Other,
}

impl Os {
    /// Classify an OS name such as `"Windows 11"`, `"linux"` or `"Mac OS X"`.
    ///
    /// Names containing `nix`, `nux` or `aix` (Unix, Linux, AIX) all count
    /// as Linux. Apple names are checked first because `darwin` contains
    /// `win`.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("mac") || lower.contains("darwin") {
            Os::MacOs
        } else if lower.contains("win") {
            Os::Windows
        } else if lower.contains("nix") || lower.contains("nux") || lower.contains("aix") {
            Os::Linux
        } else {
            Os::Other
        }
    }

    /// The OS this binary was built for
    pub fn current() -> Self {
        // std reports "macos" for Apple desktops
        Self::from_name(std::env::consts::OS)
    }

    pub fn is_windows(self) -> bool {
        self == Os::Windows
    }

    pub fn is_linux(self) -> bool {
        self == Os::Linux
    }

    pub fn is_mac(self) -> bool {
        self == Os::MacOs
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Os::Windows => "Windows",
            Os::Linux => "Linux",
            Os::MacOs => "macOS",
            Os::Other => "Other",
        };
        f.write_str(name)
    }
}
