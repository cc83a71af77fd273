//! Name-based PII heuristic for column redaction.
//!
//! Matching is a conservative, auditable substring check on column names;
//! it is not a privacy guarantee. False negatives and positives are a
//! documented limitation, not an error condition.

/// Placeholder substituted for values judged sensitive. Preserves the
/// structural shape of a sample without revealing content.
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// Column names (case-insensitive substrings) that suggest personally
/// identifying or sensitive fields.
const DEFAULT_PATTERNS: &[&str] = &[
    "email",
    "phone",
    "name",
    "first_name",
    "last_name",
    "address",
    "city",
    "state",
    "zip",
    "donor_id",
    "narrative",
    "salutation",
];

/// Ordered list of sensitive-column markers. Injectable so operators can
/// carry organization-specific patterns without touching inference logic.
#[derive(Debug, Clone)]
pub struct PiiPatterns {
    patterns: Vec<String>,
}

impl Default for PiiPatterns {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERNS.iter().map(|p| p.to_string()))
    }
}

impl PiiPatterns {
    pub fn new(patterns: impl IntoIterator<Item = String>) -> Self {
        Self {
            patterns: patterns
                .into_iter()
                .map(|pattern| pattern.to_lowercase())
                .collect(),
        }
    }

    /// Whether a column name suggests a sensitive field. Total over all
    /// strings; never errors.
    pub fn matches(&self, column_name: &str) -> bool {
        let lower = column_name.trim().to_lowercase();
        self.patterns.iter().any(|pattern| lower.contains(pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_default_patterns_case_insensitively() {
        let patterns = PiiPatterns::default();
        assert!(patterns.matches("email"));
        assert!(patterns.matches("Donor_Email_Address"));
        assert!(patterns.matches("  ZIP_CODE "));
        assert!(patterns.matches("donor_id"));
    }

    #[test]
    fn ignores_non_sensitive_columns() {
        let patterns = PiiPatterns::default();
        assert!(!patterns.matches("amount"));
        assert!(!patterns.matches("goal"));
        assert!(!patterns.matches(""));
    }

    #[test]
    fn custom_patterns_replace_the_default_set() {
        let patterns = PiiPatterns::new(vec!["membership".to_string()]);
        assert!(patterns.matches("Membership_Level"));
        assert!(!patterns.matches("email"));
    }
}
