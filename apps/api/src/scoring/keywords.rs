//! Keyword tables for the free-text heuristics.
//!
//! All matching is substring-based against lowercased text. Tables are kept
//! lowercase so callers only lowercase the haystack.

/// Skills counted toward technical depth (+0.3 each matching skill).
pub const TECHNICAL_SKILL_KEYWORDS: &[&str] = &[
    "javascript",
    "typescript",
    "react",
    "node",
    "python",
    "java",
    "aws",
    "docker",
    "kubernetes",
];

/// Skills signalling adoption of modern technology (flat +1.0 once).
pub const MODERN_TECH_KEYWORDS: &[&str] = &[
    "react",
    "vue",
    "angular",
    "kubernetes",
    "microservices",
    "ai",
    "ml",
];

/// Words in a project description or impact that indicate innovation.
pub const INNOVATION_KEYWORDS: &[&str] = &[
    "new",
    "innovative",
    "created",
    "designed",
    "improved",
    "optimization",
];

/// Achievements that indicate communication work.
pub const COMMUNICATION_ACHIEVEMENT_KEYWORDS: &[&str] = &["presentation", "training", "workshop"];

pub const ROLE_LEAD: &str = "lead";
pub const ROLE_SENIOR: &str = "senior";
pub const ROLE_MANAGER: &str = "manager";

/// Marker a duration must contain before its leading integer is read as months.
pub const DURATION_MONTH_MARKER: &str = "month";

/// True if the lowercased `text` contains any keyword from `table`.
pub fn contains_any(text: &str, table: &[&str]) -> bool {
    let lower = text.to_lowercase();
    table.iter().any(|keyword| lower.contains(keyword))
}

/// Case-insensitive substring test for a single keyword.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.to_lowercase().contains(keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_lowercase() {
        for table in [
            TECHNICAL_SKILL_KEYWORDS,
            MODERN_TECH_KEYWORDS,
            INNOVATION_KEYWORDS,
            COMMUNICATION_ACHIEVEMENT_KEYWORDS,
        ] {
            for kw in table {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }

    #[test]
    fn test_contains_any_is_case_insensitive() {
        assert!(contains_any("Senior React Engineer", MODERN_TECH_KEYWORDS));
        assert!(contains_any("AWS", TECHNICAL_SKILL_KEYWORDS));
        assert!(!contains_any("Go", TECHNICAL_SKILL_KEYWORDS));
    }

    #[test]
    fn test_substring_semantics() {
        // "javascript" contains "java"; one skill still matches only once upstream.
        assert!(contains_any("JavaScript", &["java"]));
        // "maintained" contains "ai".
        assert!(contains_any("maintained", MODERN_TECH_KEYWORDS));
    }

    #[test]
    fn test_contains_keyword_role() {
        assert!(contains_keyword("Technical LEAD", ROLE_LEAD));
        assert!(contains_keyword("Engineering Manager", ROLE_MANAGER));
        assert!(!contains_keyword("Developer", ROLE_SENIOR));
    }
}
