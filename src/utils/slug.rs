//! URL-friendly slug generation

use std::sync::LazyLock;

use regex::Regex;

// ASCII word class on purpose: accented characters are dropped, not folded
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Generate a URL-friendly slug from arbitrary text
pub fn generate_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(lowered.trim(), "");
    let hyphenated = SEPARATORS.replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_string()
}

/// Generate a league slug combining name and country
pub fn generate_league_slug(name: &str, country: &str) -> String {
    format!("{}-{}", generate_slug(name), generate_slug(country))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_slug_basic() {
        assert_eq!(generate_slug("Premier League"), "premier-league");
        assert_eq!(generate_slug("  La Liga  "), "la-liga");
    }

    #[test]
    fn test_generate_slug_special_characters() {
        assert_eq!(generate_slug("Série A!"), "srie-a");
        assert_eq!(generate_slug("FA__Cup -- 2026"), "fa-cup-2026");
        assert_eq!(generate_slug("---"), "");
    }

    #[test]
    fn test_generate_league_slug() {
        assert_eq!(
            generate_league_slug("Premier League", "England"),
            "premier-league-england"
        );
    }
}
