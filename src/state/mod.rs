/// State management module
///
/// This module handles the signature image library, including:
/// - The library directory and its operations (library.rs)
/// - Shared data structures (data.rs)
/// - Background wrappers for GUI callers (jobs.rs)

pub mod data;
pub mod jobs;
pub mod library;

pub use data::{ScanReport, SignatureImage, SignatureSummary, SkippedFile};
pub use library::{sanitize_name, SignatureLibrary};
