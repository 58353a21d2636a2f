use base64::{engine::general_purpose, Engine as _};

/// Encodes raw bytes as Base64 text
///
/// RFC 4648 standard alphabet with `=` padding and no line wrapping. Pure
/// and infallible; empty input yields an empty string.
pub fn encode(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}
