use chrono::{DateTime, Local};
use image::DynamicImage;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use super::data::{ScanReport, SignatureImage, SkippedFile};
use crate::app::paths::AppPaths;
use crate::error::{Error, Result};
use crate::imaging::codec;

/// The SignatureLibrary manages the folder of saved signature images.
///
/// The directory itself is the source of truth: nothing is cached, every
/// listing re-reads the folder. A library is constructed once at startup
/// and shared by reference (or `Arc`) with whoever needs it.
#[derive(Debug, Clone)]
pub struct SignatureLibrary {
    dir: PathBuf,
}

impl SignatureLibrary {
    /// Open the library rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let library = SignatureLibrary { dir: dir.into() };
        library.ensure_dir()?;

        info!(dir = %library.dir.display(), "Signature library initialized");
        Ok(library)
    }

    /// Open the library in the standard location:
    /// `<config-root>/signature-images`
    pub fn open_default(paths: &AppPaths) -> Result<Self> {
        Self::open(paths.signature_images_dir())
    }

    /// Get the library directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save a signature image as PNG and return where it was stored.
    ///
    /// The name is sanitized with [`sanitize_name`] and never overwrites an
    /// existing file: `name.png` is tried first, then `name_1.png`,
    /// `name_2.png` and so on.
    ///
    /// Picking the name and creating the file are two separate steps. Two
    /// concurrent saves under the same name can pick the same path; the
    /// loser gets an `AlreadyExists` write error rather than clobbering the
    /// winner's file.
    pub fn save(&self, image: &DynamicImage, name: &str) -> Result<PathBuf> {
        if image.width() == 0 || image.height() == 0 {
            return Err(Error::InvalidArgument("image must not be empty"));
        }
        if name.is_empty() {
            return Err(Error::InvalidArgument("name must not be empty"));
        }

        // Encode before touching the disk so an encoder failure leaves nothing behind
        let png = codec::encode_png(image)?;

        self.ensure_dir()?;
        let path = self.next_free_path(&sanitize_name(name));
        write_new_file(&path, &png)?;

        info!(file = %display_file_name(&path), "Saved signature image");
        Ok(path)
    }

    /// Get all decodable signature images, sorted by file name.
    pub fn list(&self) -> Vec<SignatureImage> {
        self.scan().images
    }

    /// Scan the library directory.
    ///
    /// Only direct children whose name ends in `.png`, `.jpg` or `.jpeg`
    /// (any case) are considered. Files that fail to decode are logged and
    /// reported in [`ScanReport::skipped`]; they never abort the scan.
    pub fn scan(&self) -> ScanReport {
        let mut report = ScanReport::default();

        let entries = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(dir = %self.dir.display(), error = %err, "Failed to read signature library entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if !codec::has_image_suffix(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let path = entry.path().to_path_buf();
            match codec::decode_file(&path) {
                Ok(image) => {
                    let modified = modified_time(&entry);
                    report.images.push(SignatureImage::new(path, image, modified));
                }
                Err(err) => {
                    warn!(file = %display_file_name(&path), error = %err, "Failed to load signature image");
                    report.skipped.push(SkippedFile {
                        path,
                        reason: err.to_string(),
                    });
                }
            }
        }

        debug!(
            loaded = report.images.len(),
            skipped = report.skipped.len(),
            "Scanned signature library"
        );
        report
    }

    /// Delete a signature image from the library.
    ///
    /// Returns `true` only if the file existed inside the library directory
    /// and was removed. Paths outside the library are refused.
    pub fn delete(&self, path: &Path) -> bool {
        if !self.contains(path) {
            warn!(path = %path.display(), "Refusing to delete file outside the signature library");
            return false;
        }
        if !path.is_file() {
            debug!(path = %path.display(), "Signature image to delete does not exist");
            return false;
        }

        match fs::remove_file(path) {
            Ok(()) => {
                info!(file = %display_file_name(path), "Deleted signature image");
                true
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to delete signature image");
                false
            }
        }
    }

    /// Whether `path` sits directly inside the library directory
    fn contains(&self, path: &Path) -> bool {
        let Some(parent) = path.parent() else {
            return false;
        };
        if parent == self.dir {
            return true;
        }

        match (fs::canonicalize(parent), fs::canonicalize(&self.dir)) {
            (Ok(parent), Ok(dir)) => parent == dir,
            _ => false,
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| Error::CreateDir {
            path: self.dir.clone(),
            source,
        })
    }

    /// First unused `<stem>.png` / `<stem>_<n>.png` path
    fn next_free_path(&self, stem: &str) -> PathBuf {
        let mut path = self.dir.join(format!("{stem}.png"));
        let mut counter: u64 = 1;
        while path.exists() {
            path = self.dir.join(format!("{stem}_{counter}.png"));
            counter += 1;
        }
        path
    }
}

/// Replace every character outside `[A-Za-z0-9-_]` with `_`.
///
/// One character in, one character out, so the result has the same number
/// of characters as the input.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Create `path` (failing if it already exists) and write `bytes` to it.
/// A partially written file is removed again.
fn write_new_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_error = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(write_error)?;

    if let Err(source) = file.write_all(bytes).and_then(|()| file.sync_all()) {
        drop(file);
        if let Err(err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %err, "Failed to remove partial signature image");
        }
        return Err(write_error(source));
    }

    Ok(())
}

fn modified_time(entry: &DirEntry) -> Option<DateTime<Local>> {
    entry
        .metadata()
        .ok()
        .and_then(|meta| meta.modified().ok())
        .map(DateTime::<Local>::from)
}

fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
