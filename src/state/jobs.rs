/// Background wrappers around the signature library
///
/// Library calls are plain blocking filesystem work. A GUI event loop that
/// must stay responsive can run them through these helpers, which move the
/// work onto tokio's blocking thread pool.
use image::DynamicImage;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task;

use super::data::ScanReport;
use super::library::SignatureLibrary;
use crate::error::{Error, Result};

/// Save a signature image without blocking the caller's thread
pub async fn save_signature(
    library: Arc<SignatureLibrary>,
    image: DynamicImage,
    name: String,
) -> Result<PathBuf> {
    task::spawn_blocking(move || library.save(&image, &name))
        .await
        .map_err(|e| Error::Task(format!("Task join error: {}", e)))?
}

/// Scan the library directory without blocking the caller's thread
pub async fn scan_signatures(library: Arc<SignatureLibrary>) -> Result<ScanReport> {
    task::spawn_blocking(move || library.scan())
        .await
        .map_err(|e| Error::Task(format!("Task join error: {}", e)))
}

/// Delete a signature image without blocking the caller's thread.
/// A failed background task counts as a failed delete.
pub async fn delete_signature(library: Arc<SignatureLibrary>, path: PathBuf) -> bool {
    task::spawn_blocking(move || library.delete(&path))
        .await
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[tokio::test]
    async fn test_background_save_scan_delete() {
        let dir = tempfile::tempdir().unwrap();
        let library = Arc::new(SignatureLibrary::open(dir.path()).unwrap());
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(6, 3, Rgba([0, 0, 0, 255])));

        let path = save_signature(Arc::clone(&library), img, "initials".to_string())
            .await
            .unwrap();
        assert_eq!(path.file_name().unwrap(), "initials.png");

        let report = scan_signatures(Arc::clone(&library)).await.unwrap();
        assert_eq!(report.images.len(), 1);

        assert!(delete_signature(Arc::clone(&library), path.clone()).await);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_background_save_propagates_errors() {
        let dir = tempfile::tempdir().unwrap();
        let library = Arc::new(SignatureLibrary::open(dir.path()).unwrap());
        let img = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));

        let err = save_signature(library, img, String::new()).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
