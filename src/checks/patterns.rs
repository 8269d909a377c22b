//! Pattern checks - blocklisted sequences and repeated character runs.

/// Substrings that disqualify a password regardless of everything else.
/// Deliberately a fixed blocklist, not a general sequential-run detector:
/// "87654321" is not in it and does not trip the check.
const BLOCKED_SEQUENCES: [&str; 9] = [
    "123456",
    "abcdef",
    "qwerty",
    "asdfgh",
    "zxcvbn",
    "password",
    "12345678",
    "123456789",
    "1234567890",
];

/// True if the lower-cased password contains any blocklisted substring.
pub fn has_blocked_sequence(pwd: &str) -> bool {
    let lowered = pwd.to_lowercase();
    BLOCKED_SEQUENCES.iter().any(|seq| lowered.contains(seq))
}

/// True if any character repeats 3 or more times consecutively.
pub fn has_repeated_run(pwd: &str) -> bool {
    let mut run = 0;
    let mut prev = None;
    for c in pwd.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}
