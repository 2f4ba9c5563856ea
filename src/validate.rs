//! Pattern-based acceptance check for field input.

use regex::Regex;

/// Check a value against an optional field pattern.
///
/// With no pattern every value is accepted, including the empty string.
/// With a pattern the value is accepted iff a match begins at byte 0;
/// trailing input beyond the match does not invalidate. Patterns that need
/// full-string matching must carry their own `$` anchor — the default schema
/// patterns do. Empty-input handling belongs to the controller via the
/// `required` flag; it never reaches this check.
pub fn accepts(value: &str, pattern: Option<&Regex>) -> bool {
    match pattern {
        None => true,
        Some(re) => re.find(value).is_some_and(|m| m.start() == 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn no_pattern_accepts_everything() {
        assert!(accepts("", None));
        assert!(accepts("anything at all", None));
    }

    #[test]
    fn anchored_pattern_full_match() {
        let passport = re(r"^[A-Za-z0-9]{6,20}$");
        assert!(accepts("AB12345", Some(&passport)));
        assert!(!accepts("AB 12345", Some(&passport)));
        assert!(!accepts("AB1", Some(&passport)));
    }

    #[test]
    fn match_must_start_at_zero() {
        // Without a leading anchor, a later match does not count.
        let digits = re(r"\d+");
        assert!(accepts("123abc", Some(&digits)));
        assert!(!accepts("abc123", Some(&digits)));
    }

    #[test]
    fn trailing_input_beyond_match_is_ignored() {
        // Anchor-free tail: a matching prefix is enough, even with trailing
        // characters the character class would reject.
        let alnum = re(r"^[A-Za-z0-9]{6,20}");
        assert!(accepts("AB12345extra", Some(&alnum)));
        assert!(accepts("AB12345!!!", Some(&alnum)));
        assert!(!accepts("AB!12", Some(&alnum)));
    }

    #[test]
    fn letters_and_hyphen_reject_apostrophe() {
        let letters = re(r"^[A-Za-z\-]{1,}$");
        assert!(accepts("Brien", Some(&letters)));
        assert!(accepts("Smith-Jones", Some(&letters)));
        assert!(!accepts("O'Brien", Some(&letters)));
    }

    #[test]
    fn two_digit_experience() {
        let years = re(r"^\d{1,2}$");
        assert!(accepts("0", Some(&years)));
        assert!(accepts("25", Some(&years)));
        assert!(!accepts("100", Some(&years)));
        assert!(!accepts("two", Some(&years)));
    }
}
