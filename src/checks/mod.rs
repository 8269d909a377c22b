//! Password rule checks
//!
//! Each check evaluates one independent boolean property of the password.

mod classes;
mod patterns;

pub use classes::{has_lowercase, has_number, has_symbol, has_uppercase};
pub use patterns::{has_blocked_sequence, has_repeated_run};

use secrecy::{ExposeSecret, SecretString};

use crate::types::CheckResult;

/// Minimum acceptable password length.
pub const MIN_LENGTH: usize = 8;

/// Evaluates all seven checks. Pure and total: defined for every input,
/// including the empty string and non-ASCII text.
pub fn run_checks(password: &SecretString) -> CheckResult {
    let pwd = password.expose_secret();

    CheckResult {
        length: pwd.chars().count() >= MIN_LENGTH,
        uppercase: has_uppercase(pwd),
        lowercase: has_lowercase(pwd),
        number: has_number(pwd),
        symbol: has_symbol(pwd),
        sequence: !has_blocked_sequence(pwd),
        repeat: !has_repeated_run(pwd),
    }
}
