//! Result types shared across the analysis pipeline.

use std::fmt;

/// The seven independent properties evaluated by the rule checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Symbol,
    Sequence,
    Repeat,
}

/// Outcome of the rule checker. Exactly these seven checks are always
/// present, independent of password content, including the empty password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckResult {
    /// At least 8 characters.
    pub length: bool,
    /// At least one ASCII uppercase letter.
    pub uppercase: bool,
    /// At least one ASCII lowercase letter.
    pub lowercase: bool,
    /// At least one ASCII digit.
    pub number: bool,
    /// At least one character outside the three classes above.
    pub symbol: bool,
    /// No blocklisted substring ("qwerty", "123456", ...).
    pub sequence: bool,
    /// No character repeated 3+ times in a row.
    pub repeat: bool,
}

impl CheckResult {
    /// Iterates the checks in their canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CheckKind, bool)> {
        [
            (CheckKind::Length, self.length),
            (CheckKind::Uppercase, self.uppercase),
            (CheckKind::Lowercase, self.lowercase),
            (CheckKind::Number, self.number),
            (CheckKind::Symbol, self.symbol),
            (CheckKind::Sequence, self.sequence),
            (CheckKind::Repeat, self.repeat),
        ]
        .into_iter()
    }

    /// Number of distinct character classes present (0-4).
    pub fn class_count(&self) -> usize {
        [self.lowercase, self.uppercase, self.number, self.symbol]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// Composite password score in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u8);

impl Score {
    /// Clamps to the valid range.
    pub fn new(value: u32) -> Self {
        Score(value.min(100) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn strength(&self) -> Strength {
        Strength::from_score(*self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discrete strength label, a step function of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    /// Thresholds: 0-39 Weak, 40-69 Fair, 70-89 Good, 90-100 Strong.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0..=39 => Strength::Weak,
            40..=69 => Strength::Fair,
            70..=89 => Strength::Good,
            _ => Strength::Strong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Relative weight of a recommendation, for consumers that style output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Hint,
    Warning,
    Positive,
}

/// Advisory message derived from the analysis. Ordering within an
/// [`AnalysisResult`] is significant and fixed by priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    EnterPassword,
    StrongCharacteristics,
    TooShort,
    UseLongerPassword,
    AddUppercase,
    AddLowercase,
    AddNumbers,
    AddSymbols,
    AvoidCommonSequences,
    AvoidRepeatedCharacters,
    LowEntropy,
    ModerateEntropy,
    /// Appended asynchronously once the breach lookup resolves with a hit.
    BreachExposed {
        count: u64,
    },
}

impl Recommendation {
    pub fn severity(&self) -> Severity {
        match self {
            Recommendation::EnterPassword => Severity::Info,
            Recommendation::StrongCharacteristics => Severity::Positive,
            Recommendation::TooShort
            | Recommendation::AvoidCommonSequences
            | Recommendation::AvoidRepeatedCharacters
            | Recommendation::LowEntropy
            | Recommendation::BreachExposed { .. } => Severity::Warning,
            _ => Severity::Hint,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::EnterPassword => {
                f.write_str("Enter a password to get security recommendations")
            }
            Recommendation::StrongCharacteristics => {
                f.write_str("Great! Your password has strong security characteristics.")
            }
            Recommendation::TooShort => {
                f.write_str("Your password is too short. Use at least 8 characters.")
            }
            Recommendation::UseLongerPassword => {
                f.write_str("Consider using 12 or more characters for better security.")
            }
            Recommendation::AddUppercase => {
                f.write_str("Add uppercase letters to increase password strength.")
            }
            Recommendation::AddLowercase => {
                f.write_str("Add lowercase letters to increase password strength.")
            }
            Recommendation::AddNumbers => {
                f.write_str("Include numbers to make your password harder to guess.")
            }
            Recommendation::AddSymbols => {
                f.write_str("Add symbols (like !, @, #) to improve security.")
            }
            Recommendation::AvoidCommonSequences => {
                f.write_str("Avoid common keyboard sequences like \"qwerty\" or \"123456\".")
            }
            Recommendation::AvoidRepeatedCharacters => {
                f.write_str("Avoid repeated characters (like \"aaa\" or \"111\").")
            }
            Recommendation::LowEntropy => {
                f.write_str("Your password has low entropy. Consider making it more random.")
            }
            Recommendation::ModerateEntropy => {
                f.write_str("Your password has moderate entropy. More randomness would help.")
            }
            Recommendation::BreachExposed { count } => write!(
                f,
                "This password has been seen in {count} data breaches. Do not use it!"
            ),
        }
    }
}

/// State of the breach lookup for one analysis.
///
/// Starts at `Unknown`, moves to `Checking` when a lookup is dispatched, and
/// settles as `Found`, `Clean` or `Error`. `Error` must never be conflated
/// with `Clean`: an unavailable corpus is not a clean password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreachStatus {
    #[default]
    Unknown,
    /// Passwords under 4 characters are never sent to the range API.
    TooShortToCheck,
    Checking,
    /// Seen in this many breached accounts.
    Found(u64),
    Clean,
    Error,
}

/// Aggregate outcome of one `analyze` call.
///
/// The synchronous fields are final as soon as the call returns; `breach`
/// and the trailing `BreachExposed` recommendation are amended later via a
/// [`BreachUpdate`](crate::analyzer::BreachUpdate) carrying the same
/// `generation`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub checks: CheckResult,
    pub score: Score,
    pub strength: Strength,
    pub entropy_bits: u32,
    /// Character count of the analyzed password.
    pub length: usize,
    pub recommendations: Vec<Recommendation>,
    pub breach: BreachStatus,
    /// Monotonically increasing analysis id, used to match late breach
    /// updates to the input that produced them.
    pub generation: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_always_seven_entries() {
        let checks = CheckResult::default();
        assert_eq!(checks.iter().count(), 7);
    }

    #[test]
    fn test_class_count() {
        let checks = CheckResult {
            lowercase: true,
            number: true,
            ..Default::default()
        };
        assert_eq!(checks.class_count(), 2);
    }

    #[test]
    fn test_score_clamps_to_100() {
        assert_eq!(Score::new(140).value(), 100);
        assert_eq!(Score::new(0).value(), 0);
    }

    #[test]
    fn test_strength_boundaries() {
        assert_eq!(Score::new(0).strength(), Strength::Weak);
        assert_eq!(Score::new(39).strength(), Strength::Weak);
        assert_eq!(Score::new(40).strength(), Strength::Fair);
        assert_eq!(Score::new(69).strength(), Strength::Fair);
        assert_eq!(Score::new(70).strength(), Strength::Good);
        assert_eq!(Score::new(89).strength(), Strength::Good);
        assert_eq!(Score::new(90).strength(), Strength::Strong);
        assert_eq!(Score::new(100).strength(), Strength::Strong);
    }

    #[test]
    fn test_breach_exposed_message_includes_count() {
        let rec = Recommendation::BreachExposed { count: 3861493 };
        assert!(rec.to_string().contains("3861493"));
        assert_eq!(rec.severity(), Severity::Warning);
    }
}
