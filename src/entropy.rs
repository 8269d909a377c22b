//! Entropy estimation from observed character classes.

use secrecy::{ExposeSecret, SecretString};

use crate::checks::{has_lowercase, has_number, has_symbol, has_uppercase};

/// Symbols are credited a flat pool size regardless of which ones appear.
const SYMBOL_POOL: u32 = 32;

/// Estimates password entropy in bits: `round(len * log2(charset_size))`,
/// where the charset size is the sum of the pools for each character class
/// observed (26 + 26 + 10 + 32).
///
/// Returns 0 for the empty password, and 0 if no class is detected (not
/// reachable with real input, but log2(0) must not be computed).
pub fn entropy_bits(password: &SecretString) -> u32 {
    let pwd = password.expose_secret();
    let len = pwd.chars().count();
    if len == 0 {
        return 0;
    }

    let mut charset: u32 = 0;
    if has_lowercase(pwd) {
        charset += 26;
    }
    if has_uppercase(pwd) {
        charset += 26;
    }
    if has_number(pwd) {
        charset += 10;
    }
    if has_symbol(pwd) {
        charset += SYMBOL_POOL;
    }
    if charset == 0 {
        return 0;
    }

    (len as f64 * (charset as f64).log2()).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_empty_password_has_zero_entropy() {
        assert_eq!(entropy_bits(&secret("")), 0);
    }

    #[test]
    fn test_lowercase_only() {
        // 8 * log2(26) = 37.6 -> 38
        assert_eq!(entropy_bits(&secret("abghjkmn")), 38);
    }

    #[test]
    fn test_all_four_classes() {
        // charset 94, 4 * log2(94) = 26.2 -> 26
        assert_eq!(entropy_bits(&secret("aA1!")), 26);
    }

    #[test]
    fn test_entropy_grows_with_length() {
        let short = entropy_bits(&secret("aB3!"));
        let long = entropy_bits(&secret("aB3!aB3!aB3!"));
        assert!(long > short);
    }

    #[test]
    fn test_symbol_pool_is_flat() {
        // One symbol or five symbols of the same length score the same pool.
        assert_eq!(entropy_bits(&secret("!!!!")), entropy_bits(&secret("!@#$")));
    }
}
