//! Canonical platform-name normalization.
//!
//! The questionnaire collects the main platform as free text, so the same
//! platform shows up under several spellings ("x(twitter)", "Twitter", " x ").
//! Grouping only works if all of them collapse onto one canonical key.

/// Known spellings (lower-cased, trimmed) and their canonical display names.
const SYNONYMS: &[(&str, &str)] = &[
    ("discord", "Discord"),
    ("x(twitter)", "X"),
    ("twitter", "X"),
    ("x", "X"),
    ("instagram", "Instagram"),
    ("tiktok", "TikTok"),
    ("whatsapp", "WhatsApp"),
    ("youtube", "YouTube"),
    ("facebook", "Facebook"),
    ("snapchat", "Snapchat"),
    ("linkedin", "LinkedIn"),
    ("mastodon", "Mastodon"),
];

/// Catch-all label for "no platform" answers ("aucun", "aucune", ...).
pub const NO_PLATFORM: &str = "Aucun";

/// Normalizes a free-text platform answer to its canonical display name.
///
/// Lower-cases and trims the input, then applies a fixed synonym table; any
/// answer containing "aucun" maps to [`NO_PLATFORM`]; unrecognized answers
/// fall back to title-casing the first character. Blank input yields `None`.
///
/// # Examples
///
/// ```
/// use wellviz_analysis::platform::normalize_platform;
///
/// assert_eq!(normalize_platform("Twitter").as_deref(), Some("X"));
/// assert_eq!(normalize_platform(" x ").as_deref(), Some("X"));
/// assert_eq!(normalize_platform("aucune plateforme").as_deref(), Some("Aucun"));
/// assert_eq!(normalize_platform("bluesky").as_deref(), Some("Bluesky"));
/// assert_eq!(normalize_platform("   "), None);
/// ```
#[must_use]
pub fn normalize_platform(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_lowercase();

    if let Some(&(_, canonical)) = SYNONYMS.iter().find(|&&(variant, _)| variant == lower) {
        return Some(canonical.to_string());
    }
    if lower.contains("aucun") {
        return Some(NO_PLATFORM.to_string());
    }

    // Fallback: title-case the first character, keep the rest as answered.
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twitter_variants_collapse_to_x() {
        for raw in ["Twitter", "twitter", "X(Twitter)", " x "] {
            assert_eq!(normalize_platform(raw).as_deref(), Some("X"), "input: {raw:?}");
        }
    }

    #[test]
    fn test_known_platforms_keep_display_casing() {
        assert_eq!(normalize_platform("tiktok").as_deref(), Some("TikTok"));
        assert_eq!(normalize_platform("YOUTUBE").as_deref(), Some("YouTube"));
        assert_eq!(normalize_platform("LinkedIn").as_deref(), Some("LinkedIn"));
    }

    #[test]
    fn test_aucun_token_maps_to_fixed_label() {
        assert_eq!(normalize_platform("aucun").as_deref(), Some(NO_PLATFORM));
        assert_eq!(normalize_platform("Aucune en particulier").as_deref(), Some(NO_PLATFORM));
    }

    #[test]
    fn test_unrecognized_answer_is_title_cased() {
        assert_eq!(normalize_platform("reddit").as_deref(), Some("Reddit"));
        assert_eq!(normalize_platform("beReal").as_deref(), Some("BeReal"));
    }

    #[test]
    fn test_blank_input_yields_none() {
        assert_eq!(normalize_platform(""), None);
        assert_eq!(normalize_platform("  \t"), None);
    }
}
