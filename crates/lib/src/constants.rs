//! Constants used throughout the Credbook library.
//!
//! All lengths are counted in `char`s, not bytes.

/// Storage key under which the serialized account list is kept.
pub const STORAGE_KEY: &str = "accounts";

/// Delimiter between labels in their text form.
pub const LABEL_DELIMITER: char = ';';

/// Separator used when rendering labels back to text.
pub const LABEL_SEPARATOR: &str = "; ";

/// Labels longer than this are truncated when parsed.
pub const MAX_LABEL_LEN: usize = 50;

/// Maximum length of a valid login, measured after trimming.
pub const MAX_LOGIN_LEN: usize = 100;

/// Maximum length of a valid `LOCAL` password.
pub const MAX_PASSWORD_LEN: usize = 100;
