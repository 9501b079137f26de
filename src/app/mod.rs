/// Application-wide configuration module
///
/// This module provides:
/// - Branding, naming and URL constants (constants.rs)
/// - Per-user config directory layout (paths.rs)
/// - Operating system detection (platform.rs)
/// - Version loading (version.rs)

pub mod constants;
pub mod paths;
pub mod platform;
pub mod version;

pub use paths::AppPaths;
pub use platform::Os;
pub use version::app_version;
