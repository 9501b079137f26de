// ========== Branding ==========

pub const APP_NAME_SHORT: &str = "Trexo PDF Signer";
pub const APP_NAME_DISPLAY: &str = "Trexo PDF Signer";
pub const APP_NAME_FULL: &str = "Trexo PDF Signer by TrexoLab";
pub const APP_DESCRIPTION: &str =
    "Professional PDF signing solution for Windows Certificate Store, PKCS#11/HSM, and PFX files.";

// URLs below are spelled out with concat! so they stay plain `&str` consts
macro_rules! github_owner {
    () => {
        "trexolab-solution"
    };
}
macro_rules! github_repo {
    () => {
        "trexo-pdf-signer"
    };
}
macro_rules! github_base_url {
    () => {
        concat!("https://github.com/", github_owner!(), "/", github_repo!())
    };
}
macro_rules! github_api_base_url {
    () => {
        concat!("https://api.github.com/repos/", github_owner!(), "/", github_repo!())
    };
}

// ========== Directory & file naming ==========

pub const CONFIG_DIR_NAME: &str = ".trexo-pdf-signer";
pub const JAR_FILENAME: &str = "TrexoPDFSigner.jar";
pub const TEMP_PREFIX: &str = "trexo_";

pub const SIGNATURE_IMAGES_SUBDIR: &str = "signature-images";
pub const TRUSTED_CERTS_SUBDIR: &str = "trusted-certs";
pub const PROFILES_FILENAME: &str = "appearance-profiles.json";
pub const CONFIG_FILENAME: &str = "config.yml";

/// Version file consulted when no version was compiled in
pub const VERSION_FILENAME: &str = "VERSION";
pub const DEFAULT_VERSION: &str = "1.0.0";

// ========== Organization ==========

pub const ORG_NAME: &str = "TrexoLab";
pub const ORG_WEBSITE: &str = "https://trexolab.com";
pub const ORG_EMAIL: &str = "contact@trexolab.com";
pub const APP_AUTHOR: &str = ORG_NAME;

// ========== GitHub & product URLs ==========

pub const GITHUB_OWNER: &str = github_owner!();
pub const GITHUB_REPO: &str = github_repo!();
pub const GITHUB_BASE_URL: &str = github_base_url!();

pub const APP_WEBSITE: &str = concat!("https://", github_owner!(), ".github.io/", github_repo!(), "/");
pub const APP_GITHUB: &str = GITHUB_BASE_URL;
pub const APP_LICENSE_URL: &str = concat!(github_base_url!(), "/blob/main/LICENSE");
pub const APP_ISSUES_URL: &str = concat!(github_base_url!(), "/issues");
pub const APP_RELEASES_URL: &str = concat!(github_base_url!(), "/releases");
pub const APP_RELEASES_LATEST_URL: &str = concat!(github_base_url!(), "/releases/latest");
pub const GITHUB_API_BASE_URL: &str = github_api_base_url!();
pub const GITHUB_API_RELEASES_URL: &str = concat!(github_api_base_url!(), "/releases");

/// Bundled resource path of the application logo
pub const LOGO_PATH: &str = "/images/logo.png";

pub const TIMESTAMP_SERVER: &str = "http://timestamp.comodoca.com";

// ========== Key store identifiers ==========

pub const WIN_KEY_STORE: &str = "WINDOWS";
pub const PKCS11_KEY_STORE: &str = "PKCS11";
pub const SOFTHSM: &str = "SOFTHSM";

/// Window title: `"<short name> - v<version>"`
pub fn app_title(version: &str) -> String {
    format!("{} - v{}", APP_NAME_SHORT, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_derive_from_repository() {
        assert_eq!(GITHUB_BASE_URL, "https://github.com/trexolab-solution/trexo-pdf-signer");
        assert_eq!(APP_WEBSITE, "https://trexolab-solution.github.io/trexo-pdf-signer/");
        assert_eq!(APP_RELEASES_LATEST_URL, format!("{}/latest", APP_RELEASES_URL));
        assert_eq!(
            GITHUB_API_RELEASES_URL,
            "https://api.github.com/repos/trexolab-solution/trexo-pdf-signer/releases"
        );
        assert!(APP_ISSUES_URL.starts_with(GITHUB_BASE_URL));
        assert!(APP_LICENSE_URL.starts_with(GITHUB_BASE_URL));
    }

    #[test]
    fn test_app_title() {
        assert_eq!(app_title("2.3.1"), "Trexo PDF Signer - v2.3.1");
    }
}
