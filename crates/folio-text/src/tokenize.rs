use regex::Regex;
use once_cell::sync::Lazy;

/// Shortest run of letters that counts as a token.
pub const MIN_TOKEN_LEN: usize = 3;

// Applied to lowercased text. Digits, punctuation and non-ASCII letters separate tokens.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z]{3,}").expect("valid token pattern"));

/// The tokens of `text`: it is lowercased first, then split into maximal runs
/// of ASCII letters at least [`MIN_TOKEN_LEN`] long, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE.find_iter(&lowered).map(|m| m.as_str().to_string()).collect()
}

pub fn tokens(text: &str) -> impl Iterator<Item = String> {
    tokenize(text).into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_drops_short_runs() {
        assert_eq!(tokenize("Do you have a Resume?"), ["you", "have", "resume"]);
    }

    #[test]
    fn digits_and_punctuation_split_runs() {
        assert_eq!(tokenize("abc123defg x-ray 3D"), ["abc", "defg", "ray"]);
        assert_eq!(tokenize("well-known"), ["well", "known"]);
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(tokenize("café naïve résumé"), ["caf", "sum"]);
    }

    #[test]
    fn unicode_lowercasing_happens_before_matching() {
        // KELVIN SIGN lowercases to ASCII 'k'.
        assert_eq!(tokenize("\u{212A}ite"), ["kite"]);
        assert_eq!(tokenize("\u{212A}ite"), tokenize(&"\u{212A}ite".to_lowercase()));
    }

    #[test]
    fn minimum_length_matches_pattern() {
        assert_eq!(tokenize("ab abc"), ["abc"]);
        assert!(tokenize("abc").iter().all(|t| t.len() >= MIN_TOKEN_LEN));
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
        assert!(tokenize("a an to 42").is_empty());
    }
}
