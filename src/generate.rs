//! Random password generation from the analyzer's charset model.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

/// Generation draws from the same four classes the analyzer scores:
/// 26 lowercase, 26 uppercase, 10 digits, 26 symbols.
const CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const DEFAULT_LENGTH: usize = 16;

/// Generates a password of `length` characters, each drawn uniformly and
/// independently from the charset using the operating system's CSPRNG.
pub fn generate_password(length: usize) -> SecretString {
    let mut rng = OsRng;
    let pwd: String = (0..length)
        .map(|_| {
            // CHARSET is non-empty, choose cannot return None.
            *CHARSET.choose(&mut rng).unwrap_or(&b'a') as char
        })
        .collect();
    SecretString::new(pwd.into())
}
