/// Application version loading
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

use super::constants::{DEFAULT_VERSION, VERSION_FILENAME};

/// The running application's version.
///
/// Uses the version compiled into the binary, then a `VERSION` file in the
/// working directory, then `1.0.0`.
pub fn app_version() -> String {
    resolve_version(option_env!("CARGO_PKG_VERSION"), Path::new(VERSION_FILENAME))
}

/// Pick the first usable version: `bundled`, then the first line of
/// `version_file`, then [`DEFAULT_VERSION`]. Blank values are skipped.
pub fn resolve_version(bundled: Option<&str>, version_file: &Path) -> String {
    if let Some(version) = bundled.map(str::trim).filter(|v| !v.is_empty()) {
        return version.to_string();
    }

    if version_file.exists() {
        match read_first_line(version_file) {
            Ok(Some(version)) => return version,
            Ok(None) => {}
            Err(err) => {
                warn!(file = %version_file.display(), error = %err, "Could not load version from VERSION file");
            }
        }
    }

    DEFAULT_VERSION.to_string()
}

fn read_first_line(path: &Path) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    BufReader::new(File::open(path)?).read_line(&mut line)?;

    let line = line.trim();
    Ok((!line.is_empty()).then(|| line.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_version_wins() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("VERSION");
        std::fs::write(&file, "9.9.9\n").unwrap();

        assert_eq!(resolve_version(Some(" 2.1.0 "), &file), "2.1.0");
    }

    #[test]
    fn test_falls_back_to_version_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("VERSION");
        std::fs::write(&file, "  3.4.5  \nignored second line\n").unwrap();

        assert_eq!(resolve_version(None, &file), "3.4.5");
        assert_eq!(resolve_version(Some("   "), &file), "3.4.5");
    }

    #[test]
    fn test_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("VERSION");
        assert_eq!(resolve_version(None, &missing), DEFAULT_VERSION);

        std::fs::write(&missing, "\n").unwrap();
        assert_eq!(resolve_version(None, &missing), DEFAULT_VERSION);

        // A directory where the file should be is a read error, not a crash
        let bogus = dir.path().join("as-dir");
        std::fs::create_dir(&bogus).unwrap();
        assert_eq!(resolve_version(None, &bogus), DEFAULT_VERSION);
    }

    #[test]
    fn test_app_version_is_package_version() {
        assert_eq!(app_version(), env!("CARGO_PKG_VERSION"));
    }
}
