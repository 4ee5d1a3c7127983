//! SQL utility functions

/// Escape SQL LIKE metacharacters (%, _, \) in user input
///
/// Pair with `ESCAPE '\'` in the LIKE clause.
///
/// # Example
///
/// ```
/// use staffdir_server::utils::sql::escape_like_pattern;
///
/// let pattern = format!("%{}%", escape_like_pattern("R&D_100%"));
/// assert_eq!(pattern, "%R&D\\_100\\%%");
/// ```
pub fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Build a comma separated list of `?` placeholders
pub fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern_plain() {
        assert_eq!(escape_like_pattern("Engineering"), "Engineering");
    }

    #[test]
    fn test_escape_like_pattern_metachars() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("first_name"), "first\\_name");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_like_pattern_empty() {
        assert_eq!(escape_like_pattern(""), "");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(0), "");
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?, ?, ?");
    }
}
