//! Utility functions and types.

use std::fmt::{self, Debug};

/// Debug wrapper that keeps secrets out of logs.
///
/// Empty values print as `EMPTY`. Values shorter than 12 bytes print as `***`,
/// longer ones keep three bytes on each side, so `AKLTYzU4ZmFiNWQ3YjE` prints
/// as `AKL***YjE`. Values that can't be cut at those positions are hidden
/// entirely.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        if s.is_empty() {
            return f.write_str("EMPTY");
        }

        let tail = s.len().saturating_sub(3);
        match (s.get(..3), s.get(tail..)) {
            (Some(head), Some(rest)) if s.len() >= 12 => write!(f, "{head}***{rest}"),
            _ => f.write_str("***"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", "EMPTY"; "empty")]
    #[test_case("sts", "***"; "short")]
    #[test_case("testsecret1", "***"; "just below limit")]
    #[test_case("testsecret12", "tes***t12"; "at limit")]
    #[test_case("AKLTYzU4ZmFiNWQ3YjE", "AKL***YjE"; "access key")]
    #[test_case("ééééééééééééé", "***"; "multibyte")]
    fn test_redact(input: &str, expected: &str) {
        assert_eq!(format!("{:?}", Redact(input)), expected);
    }

    #[test]
    fn test_redact_option() {
        assert_eq!(format!("{:?}", Redact::from(&None::<String>)), "EMPTY");
        assert_eq!(
            format!("{:?}", Redact::from(&Some("short".to_string()))),
            "***"
        );
    }
}
