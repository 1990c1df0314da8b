//! Regex pattern compilation for serial/extra patterns.
//!
//! The web API publishes patterns in the PCRE delimited form used by PHP
//! (`/^([0-9]{6})$/`). Callers may also pass bare patterns (`^[0-9]{6}$`).
//! Both compile to a [`Regex`]; anything that cannot be expressed is
//! reported as `None` and treated as unmatchable.

use regex::Regex;
use tracing::debug;

const DELIMITERS: &[char] = &['/', '#', '~', '@', '%', '!', '+'];

/// Compile a pattern, returning `None` for empty or unsupported patterns.
pub fn compile(pattern: &str) -> Option<Regex> {
    if pattern.is_empty() {
        return None;
    }

    let source = match split_delimited(pattern) {
        Some((body, modifiers)) => {
            let flags = inline_flags(modifiers)?;
            let body = body.replace("\\/", "/");
            if flags.is_empty() {
                body
            } else {
                format!("(?{flags}){body}")
            }
        }
        None => pattern.to_string(),
    };

    match Regex::new(&source) {
        Ok(regex) => Some(regex),
        Err(e) => {
            debug!(pattern, error = %e, "Pattern rejected by regex engine");
            None
        }
    }
}

/// Whether `input` matches `pattern` somewhere. Unmatchable patterns never match.
pub fn is_match(pattern: &str, input: &str) -> bool {
    compile(pattern).is_some_and(|regex| regex.is_match(input))
}

/// Split `/body/flags` into its body and modifier letters.
fn split_delimited(pattern: &str) -> Option<(&str, &str)> {
    let delimiter = pattern.chars().next()?;
    if !DELIMITERS.contains(&delimiter) {
        return None;
    }
    let close = pattern.rfind(delimiter)?;
    if close == 0 {
        return None;
    }
    let modifiers = &pattern[close + 1..];
    if !modifiers.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((&pattern[1..close], modifiers))
}

/// Map PCRE modifiers to regex inline flags.
fn inline_flags(modifiers: &str) -> Option<String> {
    let mut flags = String::new();
    for modifier in modifiers.chars() {
        match modifier {
            'i' | 'm' | 's' | 'x' | 'U' => {
                if !flags.contains(modifier) {
                    flags.push(modifier);
                }
            }
            // unicode is always on, and `$` never matches before a trailing newline
            'u' | 'D' => {}
            other => {
                debug!(modifier = %other, "Unsupported pattern modifier");
                return None;
            }
        }
    }
    Some(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimited_pattern_is_stripped() {
        assert!(is_match("/^([0-9]{6})$/", "123456"));
        assert!(!is_match("/^([0-9]{6})$/", "12345A"));
    }

    #[test]
    fn bare_pattern_is_used_as_is() {
        assert!(is_match("^[A-Z]{1}[0-9]{3}$", "Z999"));
        assert!(!is_match("^[A-Z]{1}[0-9]{3}$", "z999"));
    }

    #[test]
    fn case_insensitive_modifier() {
        assert!(is_match("/^[a-f]{2}$/i", "AB"));
        assert!(!is_match("/^[a-f]{2}$/", "AB"));
    }

    #[test]
    fn noop_modifiers_are_accepted() {
        assert!(is_match("/^[0-9]+$/uD", "42"));
    }

    #[test]
    fn unsupported_modifier_is_unmatchable() {
        assert!(compile("/^[0-9]+$/e").is_none());
        assert!(!is_match("/^[0-9]+$/e", "42"));
    }

    #[test]
    fn empty_pattern_never_matches() {
        assert!(compile("").is_none());
        assert!(!is_match("", ""));
        assert!(!is_match("", "anything"));
    }

    #[test]
    fn caret_is_not_a_delimiter() {
        assert_eq!(split_delimited("^([0-9]{4})$"), None);
    }

    #[test]
    fn other_delimiters() {
        assert!(is_match("#^[0-9]{4}$#", "1234"));
        assert!(is_match("~^a/b$~", "a/b"));
    }

    #[test]
    fn escaped_slash_inside_delimited_pattern() {
        assert!(is_match(r"/^[0-9]{2}\/[0-9]{2}$/", "12/34"));
    }

    #[test]
    fn invalid_regex_is_unmatchable() {
        assert!(compile("/^([0-9]$/").is_none());
    }
}
