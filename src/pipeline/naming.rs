//! Filename sanitization and canonical naming

/// Sanitizes one piece of a filename or path
///
/// Spaces become underscores; anything outside `[A-Za-z0-9._-]` is
/// dropped.
pub fn safe_name(s: &str) -> String {
    s.trim()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}

/// Canonical PNG filename for a category image, 1-based 3-digit index
pub fn build_filename(category: &str, index: usize) -> String {
    format!("{}_{:03}.png", safe_name(category), index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_name_plain() {
        assert_eq!(safe_name("Basalt"), "Basalt");
    }

    #[test]
    fn test_safe_name_spaces_become_underscores() {
        assert_eq!(safe_name("Pillow Basalt"), "Pillow_Basalt");
    }

    #[test]
    fn test_safe_name_strips_odd_characters() {
        assert_eq!(safe_name("Tuff (welded)!"), "Tuff_welded");
        assert_eq!(safe_name("  Shale  "), "Shale");
    }

    #[test]
    fn test_build_filename_pads_to_three_digits() {
        assert_eq!(build_filename("Basalt", 1), "Basalt_001.png");
        assert_eq!(build_filename("Basalt", 42), "Basalt_042.png");
        assert_eq!(build_filename("Basalt", 137), "Basalt_137.png");
    }

    #[test]
    fn test_build_filename_sanitizes_category() {
        assert_eq!(build_filename("Pillow Basalt", 7), "Pillow_Basalt_007.png");
    }
}
