/// Support layer of Trexo PDF Signer: the signature image library,
/// application constants and paths, and release-note styling.
pub mod app;
pub mod error;
pub mod imaging;
pub mod logging;
pub mod state;
pub mod ui;

pub use error::{Error, Result};
pub use state::{ScanReport, SignatureImage, SignatureLibrary};
