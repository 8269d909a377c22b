//! Score aggregation - combines check results and length into a 0-100 score.

use secrecy::{ExposeSecret, SecretString};

use crate::types::{CheckResult, Score};

const WEIGHT_LENGTH: u32 = 20;
const WEIGHT_UPPERCASE: u32 = 15;
const WEIGHT_LOWERCASE: u32 = 15;
const WEIGHT_NUMBER: u32 = 15;
const WEIGHT_SYMBOL: u32 = 15;
const WEIGHT_SEQUENCE: u32 = 10;
const WEIGHT_REPEAT: u32 = 10;

/// Length bonuses stack on top of the base weights before clamping.
const BONUS_LENGTH_12: u32 = 10;
const BONUS_LENGTH_16: u32 = 10;

/// Computes the composite score. Deterministic and pure; flipping any single
/// failing check to passing never decreases the result.
pub fn score(checks: &CheckResult, password: &SecretString) -> Score {
    let len = password.expose_secret().chars().count();
    let mut total: u32 = 0;

    if checks.length {
        total += WEIGHT_LENGTH;
    }
    if checks.uppercase {
        total += WEIGHT_UPPERCASE;
    }
    if checks.lowercase {
        total += WEIGHT_LOWERCASE;
    }
    if checks.number {
        total += WEIGHT_NUMBER;
    }
    if checks.symbol {
        total += WEIGHT_SYMBOL;
    }
    if checks.sequence {
        total += WEIGHT_SEQUENCE;
    }
    if checks.repeat {
        total += WEIGHT_REPEAT;
    }

    if len >= 12 {
        total += BONUS_LENGTH_12;
    }
    if len >= 16 {
        total += BONUS_LENGTH_16;
    }

    Score::new(total)
}
