#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Splits a table line on any run of whitespace.
#[inline]
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parses a signed decimal integer token, allowing a leading `+`.
#[inline]
pub fn parse_integer(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_include_whitespace_only() {
        assert!(is_blank(""));
        assert!(is_blank(" \t \r"));
        assert!(!is_blank(" 0 "));
    }

    #[test]
    fn splits_on_mixed_whitespace() {
        assert_eq!(split_fields("a0\ta1  a2 class\r"), vec!["a0", "a1", "a2", "class"]);
        assert!(split_fields("   ").is_empty());
    }

    #[test]
    fn integers_parse_with_sign() {
        assert_eq!(parse_integer("1"), Some(1));
        assert_eq!(parse_integer("+0"), Some(0));
        assert_eq!(parse_integer("-3"), Some(-3));
        assert_eq!(parse_integer("1.0"), None);
        assert_eq!(parse_integer("x"), None);
    }
}
