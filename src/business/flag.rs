//! Tri-state flag parsing
//!
//! Turns user-supplied text (CLI arguments, config values) into a
//! [`TriState`]. Matching is ASCII case-insensitive and ignores
//! surrounding whitespace.

use std::str::FromStr;

use anyhow::{bail, Error};

use super::resolver::TriState;

const TRUE_TOKENS: &[&str] = &["true", "yes", "y", "1"];
const FALSE_TOKENS: &[&str] = &["false", "no", "n", "0"];
const ABSENT_TOKENS: &[&str] = &["null", "none", "maybe", "-", ""];

impl FromStr for TriState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        if matches_any(token, TRUE_TOKENS) {
            return Ok(Self::True);
        }
        if matches_any(token, FALSE_TOKENS) {
            return Ok(Self::False);
        }
        if matches_any(token, ABSENT_TOKENS) {
            return Ok(Self::Absent);
        }

        bail!(
            "Invalid flag '{token}': expected one of {}, {} or {}",
            TRUE_TOKENS.join("/"),
            FALSE_TOKENS.join("/"),
            accepted_absent()
        )
    }
}

fn matches_any(token: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| c.eq_ignore_ascii_case(token))
}

/// Absent spellings for error messages; the empty string is shown as `""`
fn accepted_absent() -> String {
    ABSENT_TOKENS
        .iter()
        .map(|t| if t.is_empty() { "\"\"" } else { *t })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_true_spellings() {
        for text in ["true", "TRUE", "Yes", "y", "1", "  true  "] {
            assert_eq!(text.parse::<TriState>().unwrap(), TriState::True, "{text}");
        }
    }

    #[test]
    fn test_parse_false_spellings() {
        for text in ["false", "False", "NO", "n", "0", "\tno\n"] {
            assert_eq!(text.parse::<TriState>().unwrap(), TriState::False, "{text}");
        }
    }

    #[test]
    fn test_parse_absent_spellings() {
        for text in ["null", "NULL", "none", "maybe", "-", "", "   "] {
            assert_eq!(
                text.parse::<TriState>().unwrap(),
                TriState::Absent,
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_reject_unknown_token() {
        let err = "perhaps".parse::<TriState>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Invalid flag 'perhaps'"), "got: {msg}");
        assert!(msg.contains("true/yes/y/1"), "got: {msg}");
        assert!(msg.contains("null/none/maybe/-/\"\""), "got: {msg}");
    }

    #[test]
    fn test_reject_partial_match() {
        assert!("tru".parse::<TriState>().is_err());
        assert!("yess".parse::<TriState>().is_err());
        assert!("10".parse::<TriState>().is_err());
    }

    #[test]
    fn test_parsed_flag_resolves_like_option() {
        assert_eq!("yes".parse::<TriState>().unwrap().display_value().as_str(), "yes");
        assert_eq!("0".parse::<TriState>().unwrap().display_value().as_str(), "no");
        assert_eq!("".parse::<TriState>().unwrap().display_value().as_str(), "maybe");
    }
}
