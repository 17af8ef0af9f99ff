/// Preset themes offered as one-tap buttons above the theme input.
pub const QUICK_THEMES: [&str; 6] = [
    "kindness",
    "friendship",
    "courage",
    "space adventure",
    "ocean explorers",
    "dragons",
];

/// Trim a theme typed by the reader; blank input yields `None`.
#[must_use]
pub fn normalize_theme(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_rejects_blank() {
        assert_eq!(normalize_theme("  pirates \n"), Some(String::from("pirates")));
        assert_eq!(normalize_theme(" \t "), None);
    }

    #[test]
    fn quick_themes_are_normalized() {
        for theme in QUICK_THEMES {
            assert_eq!(normalize_theme(theme).as_deref(), Some(theme));
        }
    }
}
