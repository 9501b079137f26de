/// Shared data structures for the signature library
///
/// These structs are the values that flow between the library
/// directory on disk and the caller (GUI or CLI).
use chrono::{DateTime, Local};
use image::DynamicImage;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A signature image that was decoded from the library directory
#[derive(Debug, Clone)]
pub struct SignatureImage {
    /// Full path to the image file, also its identity
    path: PathBuf,
    /// Decoded pixels
    image: DynamicImage,
    /// Last modification time, when the filesystem reports one
    modified: Option<DateTime<Local>>,
}

impl SignatureImage {
    pub fn new(path: PathBuf, image: DynamicImage, modified: Option<DateTime<Local>>) -> Self {
        Self {
            path,
            image,
            modified,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn modified(&self) -> Option<DateTime<Local>> {
        self.modified
    }

    /// Display name: the file name up to its last dot.
    ///
    /// A leading dot is not treated as an extension separator, so a file
    /// named `.png` keeps its whole name.
    pub fn name(&self) -> String {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match file_name.rfind('.') {
            Some(dot) if dot > 0 => file_name[..dot].to_string(),
            _ => file_name,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Serializable view without the pixel data
    pub fn summary(&self) -> SignatureSummary {
        SignatureSummary {
            name: self.name(),
            path: self.path.clone(),
            width: self.width(),
            height: self.height(),
            modified: self.modified,
        }
    }
}

/// Metadata of a signature image, suitable for JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureSummary {
    pub name: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub modified: Option<DateTime<Local>>,
}

/// A candidate file that was left out of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of scanning the library directory
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Successfully decoded images, sorted by file name
    pub images: Vec<SignatureImage>,
    /// Files that matched the name filter but could not be decoded
    pub skipped: Vec<SkippedFile>,
}
