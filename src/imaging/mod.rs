/// Image decoding and encoding module
///
/// This module handles:
/// - Recognising signature image files by name
/// - Decoding image files by content
/// - Encoding signatures as PNG

pub mod codec;
