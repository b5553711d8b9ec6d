//! The fixed character sets that the generators draw from.
//!
//! All sets are printable ASCII, non-empty, and defined at compile time.
//! Nothing in the library mutates them.

/// The decimal digits.
pub const DIGITS: &str = "0123456789";

/// The uppercase latin letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The lowercase latin letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// A common special character set used in passwords.
/// `<` and `>` may cause issues on some systems.
pub const SPECIAL: &str = " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// All latin letters, uppercase first.
pub const ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Digits followed by all latin letters.
pub const ALPHANUMERIC: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// The union of all four classes: digits, letters and special characters.
pub const ALL: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[cfg(test)]
#[path = "tests/charset.rs"]
mod charset_test;
