//! Recommendation generation - ordered advisory messages from check results.

use secrecy::{ExposeSecret, SecretString};

use crate::checks::MIN_LENGTH;
use crate::types::{CheckResult, Recommendation, Score};

/// Score at or above which the positive-feedback message is emitted.
const STRONG_FEEDBACK_SCORE: u8 = 80;
/// Below this many bits the password is flagged as low entropy.
const LOW_ENTROPY_BITS: u32 = 40;
/// Below this many bits (and at or above the low threshold) entropy is
/// flagged as moderate.
const MODERATE_ENTROPY_BITS: u32 = 60;

/// Derives the ordered recommendation list. Order is fixed: positive
/// feedback, length, character diversity, patterns, entropy. The breach
/// warning is not produced here; the orchestrator appends it when the
/// lookup resolves with a hit.
pub fn recommend(
    checks: &CheckResult,
    score: Score,
    entropy_bits: u32,
    password: &SecretString,
) -> Vec<Recommendation> {
    let len = password.expose_secret().chars().count();

    if len == 0 {
        return vec![Recommendation::EnterPassword];
    }

    let mut out = Vec::new();

    if score.value() >= STRONG_FEEDBACK_SCORE {
        out.push(Recommendation::StrongCharacteristics);
    }

    if len < MIN_LENGTH {
        out.push(Recommendation::TooShort);
    } else if len < 12 {
        out.push(Recommendation::UseLongerPassword);
    }

    if !checks.uppercase {
        out.push(Recommendation::AddUppercase);
    }
    if !checks.lowercase {
        out.push(Recommendation::AddLowercase);
    }
    if !checks.number {
        out.push(Recommendation::AddNumbers);
    }
    if !checks.symbol {
        out.push(Recommendation::AddSymbols);
    }

    if !checks.sequence {
        out.push(Recommendation::AvoidCommonSequences);
    }
    if !checks.repeat {
        out.push(Recommendation::AvoidRepeatedCharacters);
    }

    if entropy_bits < LOW_ENTROPY_BITS {
        out.push(Recommendation::LowEntropy);
    } else if entropy_bits < MODERATE_ENTROPY_BITS {
        out.push(Recommendation::ModerateEntropy);
    }

    out
}
