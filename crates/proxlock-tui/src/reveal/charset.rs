//! Fixed alphabet for scramble substitutes.

use rand::Rng;

/// 62-symbol alphanumeric charset. Alphanumerics only, for consistent
/// glyph widths in monospace rendering.
pub const CHARSET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Draw one substitute character uniformly at random.
pub fn sample<R: Rng>(rng: &mut R) -> char {
    CHARSET[rng.gen_range(0..CHARSET.len())] as char
}

/// Whether a character belongs to the scramble alphabet.
pub fn contains(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
