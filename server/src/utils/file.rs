//! File utility functions

use std::path::PathBuf;

/// Expand a path string to an absolute path.
///
/// Handles `~` and `~/path` (home directory), relative paths (resolved
/// against the current directory) and leaves absolute paths unchanged.
/// Surrounding whitespace is ignored; an empty string yields the current
/// directory.
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    }

    let expanded = if path == "~" {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from(path))
    } else if let Some(rest) = path.strip_prefix("~/") {
        match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        }
    } else {
        PathBuf::from(path)
    };

    if expanded.is_relative() {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    } else {
        expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_absolute_unchanged() {
        assert_eq!(expand_path("/srv/staffdir"), PathBuf::from("/srv/staffdir"));
    }

    #[test]
    fn test_expand_path_relative_becomes_absolute() {
        let result = expand_path("data/staffdir.json");
        assert!(result.is_absolute());
        assert!(result.ends_with("data/staffdir.json") || result.ends_with("data\\staffdir.json"));
    }

    #[test]
    fn test_expand_path_tilde() {
        let result = expand_path("~/.staffdir");
        assert!(result.is_absolute());
        assert!(!result.to_string_lossy().contains('~'));
        assert!(result.ends_with(".staffdir"));
    }

    #[test]
    fn test_expand_path_tilde_only_is_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~"), home);
        }
    }

    #[test]
    fn test_expand_path_trims_whitespace() {
        assert_eq!(expand_path("  /var/lib/staffdir  "), PathBuf::from("/var/lib/staffdir"));
    }

    #[test]
    fn test_expand_path_empty_is_cwd() {
        let result = expand_path("   ");
        assert!(result.is_absolute());
    }
}
