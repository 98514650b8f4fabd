//! Declarative detection rules: (matcher, description, remediation) triples
//! consumed by a generic matching loop. Analyzers own their own tables;
//! nothing here is shared state.

use regex::Regex;

/// How a rule recognizes its target in the text
pub enum Matcher {
    /// Case-insensitive regex; one match per occurrence
    Pattern(Regex),
    /// Case-insensitive substring test; fires at most once per text
    Literal(&'static str),
    /// Regex match suppressed when the given literal immediately follows it
    /// (e.g. "produce results" is fine when followed by "that")
    PatternUnlessFollowedBy(Regex, &'static str),
}

/// One occurrence of a rule in the analyzed text
#[derive(Debug, Clone)]
pub struct RuleMatch {
    /// The matched text, as it appears in the input
    pub text: String,
    /// Byte offset of the match; literal rules do not report one
    pub offset: Option<usize>,
}

/// A single named detection rule
pub struct RulePattern {
    /// Rule family name, e.g. "Subject-Verb Agreement"
    pub name: &'static str,
    pub description: &'static str,
    /// Suggested correction for any occurrence
    pub remediation: &'static str,
    matcher: Matcher,
}

impl RulePattern {
    pub fn new(
        name: &'static str,
        description: &'static str,
        remediation: &'static str,
        matcher: Matcher,
    ) -> Self {
        Self {
            name,
            description,
            remediation,
            matcher,
        }
    }

    /// All occurrences of this rule in `text`, in encounter order.
    pub fn occurrences(&self, text: &str) -> Vec<RuleMatch> {
        match &self.matcher {
            Matcher::Pattern(re) => re
                .find_iter(text)
                .map(|m| RuleMatch {
                    text: m.as_str().to_string(),
                    offset: Some(m.start()),
                })
                .collect(),
            Matcher::Literal(phrase) => {
                if text.to_lowercase().contains(phrase) {
                    vec![RuleMatch {
                        text: (*phrase).to_string(),
                        offset: None,
                    }]
                } else {
                    Vec::new()
                }
            }
            Matcher::PatternUnlessFollowedBy(re, follower) => re
                .find_iter(text)
                .filter(|m| {
                    let rest = text[m.end()..].trim_start();
                    !rest.to_lowercase().starts_with(follower)
                })
                .map(|m| RuleMatch {
                    text: m.as_str().to_string(),
                    offset: Some(m.start()),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(re: &str) -> Matcher {
        Matcher::Pattern(Regex::new(re).unwrap())
    }

    #[test]
    fn positive_pattern_reports_every_occurrence() {
        let rule = RulePattern::new(
            "Pronoun Agreement",
            "Pronoun-verb agreement",
            "were",
            pattern(r"(?i)\bthey\s+was\b"),
        );
        let matches = rule.occurrences("they was here and They was there");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].text, "they was");
        assert_eq!(matches[0].offset, Some(0));
        assert_eq!(matches[1].text, "They was");
    }

    #[test]
    fn positive_literal_fires_once_without_offset() {
        let rule = RulePattern::new(
            "Verb Tense",
            "Incorrect past tense form",
            "finally ran",
            Matcher::Literal("finally run"),
        );
        let matches = rule.occurrences("We Finally RUN it. Then finally run again.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].offset, None);
    }

    #[test]
    fn negative_follower_suppresses_match() {
        let rule = RulePattern::new(
            "Verb Tense",
            "Incorrect verb tense",
            "produced results",
            Matcher::PatternUnlessFollowedBy(
                Regex::new(r"(?i)\bproduce\s+results\b").unwrap(),
                "that",
            ),
        );
        assert!(rule.occurrences("systems produce results that matter").is_empty());
        assert_eq!(rule.occurrences("the fix produce results").len(), 1);
    }

    #[test]
    fn negative_clean_text_no_matches() {
        let rule = RulePattern::new(
            "Homophone Error",
            "Wrong homophone used",
            "their",
            pattern(r"(?i)\bthere\s+project\b"),
        );
        assert!(rule.occurrences("their project shipped on time").is_empty());
    }
}
