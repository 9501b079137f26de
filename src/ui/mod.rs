/// Presentation helpers
///
/// Only string-level helpers live here; rendering is left to the GUI.

pub mod release_notes;

pub use release_notes::wrap_html_with_style;
