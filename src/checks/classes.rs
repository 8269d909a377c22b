//! Character-class predicates - uppercase, lowercase, digits, symbols.

/// True if any ASCII uppercase letter is present.
pub fn has_uppercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

/// True if any ASCII lowercase letter is present.
pub fn has_lowercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

/// True if any ASCII digit is present.
pub fn has_number(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

/// True if any character outside `[A-Za-z0-9]` is present. Non-ASCII
/// characters fall in this class.
pub fn has_symbol(pwd: &str) -> bool {
    pwd.chars().any(|c| !c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_detection() {
        assert!(has_uppercase("abcD"));
        assert!(!has_uppercase("abcd1!"));
    }

    #[test]
    fn test_lowercase_detection() {
        assert!(has_lowercase("ABCd"));
        assert!(!has_lowercase("ABCD1!"));
    }

    #[test]
    fn test_number_detection() {
        assert!(has_number("abc1"));
        assert!(!has_number("abcd!"));
    }

    #[test]
    fn test_symbol_detection() {
        assert!(has_symbol("abc!"));
        assert!(has_symbol("abc é"));
        assert!(!has_symbol("Abc123"));
    }

    #[test]
    fn test_empty_string_has_no_classes() {
        assert!(!has_uppercase(""));
        assert!(!has_lowercase(""));
        assert!(!has_number(""));
        assert!(!has_symbol(""));
    }
}
