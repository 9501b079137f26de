use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{
    CONFIG_DIR_NAME, CONFIG_FILENAME, PROFILES_FILENAME, SIGNATURE_IMAGES_SUBDIR,
    TRUSTED_CERTS_SUBDIR,
};
use crate::error::{Error, Result};

/// Locations of the per-user configuration files.
///
/// By default everything lives under `~/.trexo-pdf-signer/`:
/// - `config.yml`
/// - `signature-images/`
/// - `trusted-certs/`
/// - `appearance-profiles.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// Resolve the config root inside the user's home directory
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
        Ok(Self::with_root(home.join(CONFIG_DIR_NAME)))
    }

    /// Use an explicit config root instead of the home directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        AppPaths { root: root.into() }
    }

    /// Create the config root if it doesn't exist
    pub fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|source| Error::CreateDir {
            path: self.root.clone(),
            source,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILENAME)
    }

    pub fn signature_images_dir(&self) -> PathBuf {
        self.root.join(SIGNATURE_IMAGES_SUBDIR)
    }

    pub fn trusted_certs_dir(&self) -> PathBuf {
        self.root.join(TRUSTED_CERTS_SUBDIR)
    }

    pub fn profiles_file(&self) -> PathBuf {
        self.root.join(PROFILES_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths() {
        let paths = AppPaths::with_root("/home/me/.trexo-pdf-signer");

        assert_eq!(paths.config_file(), Path::new("/home/me/.trexo-pdf-signer/config.yml"));
        assert_eq!(
            paths.signature_images_dir(),
            Path::new("/home/me/.trexo-pdf-signer/signature-images")
        );
        assert_eq!(
            paths.trusted_certs_dir(),
            Path::new("/home/me/.trexo-pdf-signer/trusted-certs")
        );
        assert_eq!(
            paths.profiles_file(),
            Path::new("/home/me/.trexo-pdf-signer/appearance-profiles.json")
        );
    }

    #[test]
    fn test_from_home_uses_config_dir_name() {
        match (dirs::home_dir(), AppPaths::from_home()) {
            (Some(home), Ok(paths)) => {
                assert_eq!(paths.root(), home.join(CONFIG_DIR_NAME).as_path());
            }
            (None, Err(err)) => assert!(matches!(err, Error::NoHomeDir)),
            (home, result) => panic!("home dir {:?} but from_home gave {:?}", home, result),
        }
    }

    #[test]
    fn test_ensure_root_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths::with_root(dir.path().join("cfg"));

        paths.ensure_root().unwrap();
        assert!(paths.root().is_dir());
        // Second call is a no-op
        paths.ensure_root().unwrap();
    }
}
