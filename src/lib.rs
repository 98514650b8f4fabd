//! Redline: content quality analyzer for prose
//!
//! This library analyzes free-form text along four independent dimensions
//! (grammar, sentiment, readability, SEO) and merges the results into one
//! prioritized report. Callers hand a natural-language request plus the text
//! to the [`orchestrator::Orchestrator`]; it routes the request to the
//! relevant analyzers, runs each in isolation, and synthesizes the output.

pub mod analyzer;
pub mod audit;
pub mod orchestrator;
pub mod reporter;
pub mod router;
pub mod rules;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::audit::AuditEntry;

/// The four analyzer engines, in the fixed order reports are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    Grammar,
    Sentiment,
    Readability,
    Seo,
}

impl AnalyzerKind {
    /// All analyzers, in presentation order.
    pub fn all() -> [AnalyzerKind; 4] {
        [
            AnalyzerKind::Grammar,
            AnalyzerKind::Sentiment,
            AnalyzerKind::Readability,
            AnalyzerKind::Seo,
        ]
    }
}

impl std::fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzerKind::Grammar => write!(f, "grammar"),
            AnalyzerKind::Sentiment => write!(f, "sentiment"),
            AnalyzerKind::Readability => write!(f, "readability"),
            AnalyzerKind::Seo => write!(f, "seo"),
        }
    }
}

/// Severity of a grammar issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must-fix: the text is incorrect as written
    Critical,
    /// Correct but could be improved
    Minor,
}

/// An issue found by a grammar detection rule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Rule family that found this issue (e.g. "Subject-Verb Agreement")
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable description of the problem
    pub description: String,
    /// The exact text that matched
    pub matched_text: String,
    /// Suggested replacement or correction
    pub suggested_fix: String,
    pub severity: Severity,
    /// Byte offset of the match, when the rule reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<usize>,
}

/// Advisory style finding - never blocks, never critical
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSuggestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub suggested_fix: String,
    /// What improves if the suggestion is applied
    pub impact: String,
}

/// Grammar analyzer output: critical issues plus advisory style suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarReport {
    pub issues: Vec<Issue>,
    pub style_suggestions: Vec<StyleSuggestion>,
    pub summary: String,
}

/// Overall sentiment polarity. Score > 5 is positive, score < -5 negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
            Polarity::Neutral => write!(f, "neutral"),
        }
    }
}

/// Lexicon-based sentiment score
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentScore {
    pub polarity: Polarity,
    /// Accumulated signed score, rounded to two decimals
    pub score: f64,
    pub positive_terms: usize,
    pub negative_terms: usize,
    /// Every matched lexicon term, signed (+good, -bad), in encounter order
    pub matched_terms: Vec<String>,
}

/// Tone tags triggered by keyword families (a text may carry several)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneResult {
    pub tags: Vec<String>,
    pub description: String,
}

/// Emotional themes detected in the text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalImpact {
    pub themes: Vec<String>,
    pub overall_mood: String,
}

/// Sentiment analyzer output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    pub sentiment: SentimentScore,
    pub tone: ToneResult,
    pub emotional_impact: EmotionalImpact,
    pub summary: String,
}

/// Sentence complexity bucket, by average sentence length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    #[serde(rename = "simple")]
    Simple,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "complex")]
    Complex,
    #[serde(rename = "very complex")]
    VeryComplex,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Simple => write!(f, "simple"),
            Complexity::Moderate => write!(f, "moderate"),
            Complexity::Complex => write!(f, "complex"),
            Complexity::VeryComplex => write!(f, "very complex"),
        }
    }
}

/// Per-sentence statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceStats {
    /// Average sentence length in words, rounded to one decimal
    pub avg_length: f64,
    /// Number of sentences (at least 1, even for punctuation-free text)
    pub count: usize,
    pub shortest: usize,
    pub longest: usize,
    pub complexity: Complexity,
}

/// Vocabulary level bucket, by count of non-function words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyLevel {
    Simple,
    Moderate,
    Complex,
}

impl std::fmt::Display for VocabularyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VocabularyLevel::Simple => write!(f, "simple"),
            VocabularyLevel::Moderate => write!(f, "moderate"),
            VocabularyLevel::Complex => write!(f, "complex"),
        }
    }
}

/// Vocabulary statistics over lower-cased whitespace tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyStats {
    pub unique_words: usize,
    pub total_words: usize,
    /// unique / total, rounded to two decimals (0 for empty text)
    pub diversity: f64,
    /// Unique tokens outside the common function-word list - a coarse proxy
    pub complex_words: usize,
    pub level: VocabularyLevel,
}

/// How accessible the text is for its mapped audience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accessibility {
    #[serde(rename = "very easy")]
    VeryEasy,
    #[serde(rename = "easy")]
    Easy,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "challenging")]
    Challenging,
    #[serde(rename = "very challenging")]
    VeryChallenging,
}

impl std::fmt::Display for Accessibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Accessibility::VeryEasy => write!(f, "very easy"),
            Accessibility::Easy => write!(f, "easy"),
            Accessibility::Moderate => write!(f, "moderate"),
            Accessibility::Challenging => write!(f, "challenging"),
            Accessibility::VeryChallenging => write!(f, "very challenging"),
        }
    }
}

/// Audience band mapped from the grade level
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audience {
    /// e.g. "Elementary school (grades 3-5)"
    pub label: String,
    pub accessibility: Accessibility,
}

/// Readability analyzer output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityReport {
    /// Flesch-Kincaid grade level approximation, floored at 0
    pub grade_level: f64,
    pub sentence_stats: SentenceStats,
    pub vocabulary: VocabularyStats,
    pub audience: Audience,
    /// Detected readability problems, or the single "generally readable" note
    pub issues: Vec<String>,
    /// "Good" below grade 12, "Challenging" otherwise
    pub overall: String,
    pub summary: String,
}

/// One extracted keyword with its frequency
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordCount {
    pub keyword: String,
    pub frequency: usize,
}

/// Whether the text is long enough for search ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthStatus {
    #[serde(rename = "too short")]
    TooShort,
    #[serde(rename = "good")]
    Good,
}

/// Content-length check result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentLength {
    pub word_count: usize,
    pub min_recommended: usize,
    pub status: LengthStatus,
    pub recommendation: String,
}

/// SEO analyzer output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    /// Top 10 keywords ranked by frequency (ties keep first-seen order)
    pub top_keywords: Vec<KeywordCount>,
    pub unique_keywords: usize,
    /// Raw extracted keyword list, first-seen order, capped at 20
    pub keywords: Vec<String>,
    /// Most frequent keyword, or "none" when extraction found nothing
    pub primary_keyword: String,
    /// Occurrences of the primary keyword per 100 tokens, two decimals
    pub primary_keyword_density: f64,
    pub content_length: ContentLength,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    /// Composite score in [0, 100]
    pub score: u8,
    pub summary: String,
}

/// A failed analyzer invocation. The sibling analyzers still complete.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{analyzer_name} analyzer failed: {error}")]
pub struct AnalyzerFailure {
    pub analyzer_name: AnalyzerKind,
    pub error: String,
}

/// Result of one analyzer invocation: a per-analyzer report, or the failure
/// that replaced it. Serialized with an `analyzer` discriminator tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "analyzer", rename_all = "lowercase")]
pub enum AnalyzerReport {
    Grammar(GrammarReport),
    Sentiment(SentimentReport),
    Readability(ReadabilityReport),
    Seo(SeoReport),
    Failed(AnalyzerFailure),
}

impl AnalyzerReport {
    pub fn is_failed(&self) -> bool {
        matches!(self, AnalyzerReport::Failed(_))
    }
}

/// Supporting material attached to a recommendation: a sample of the
/// underlying issues or suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Evidence {
    Issue(Issue),
    Style(StyleSuggestion),
    Note(String),
}

/// One prioritized action from the synthesized report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// 1 = grammar fixes, 2 = style, 3 = readability, 4 = SEO
    pub priority: u8,
    pub category: String,
    pub action: String,
    pub evidence: Vec<Evidence>,
}

/// The unified report for one analysis request. Built once, read-only after.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizedReport {
    /// Present when audit logging is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    /// One headline line per successfully-completed analyzer
    pub key_findings: Vec<String>,
    /// Fixed-priority actions, highest priority first
    pub recommendations: Vec<Recommendation>,
    /// Every invoked analyzer's report, success or failure
    pub analyzer_reports: BTreeMap<AnalyzerKind, AnalyzerReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_entries: Option<Vec<AuditEntry>>,
}

/// Public API: analyze text with the default analyzer set and settings.
/// Programmatic consumers wanting custom timeouts or audit logging should
/// build an [`orchestrator::Orchestrator`] directly.
pub fn analyze_text(request: &str, text: &str) -> SynthesizedReport {
    orchestrator::Orchestrator::new().run(request, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzer_kind_order_is_presentation_order() {
        let kinds = AnalyzerKind::all();
        let mut sorted = kinds;
        sorted.sort();
        assert_eq!(kinds, sorted);
    }

    #[test]
    fn issue_serializes_with_type_key() {
        let issue = Issue {
            kind: "Pronoun Agreement".to_string(),
            description: "Pronoun-verb agreement".to_string(),
            matched_text: "they was".to_string(),
            suggested_fix: "were".to_string(),
            severity: Severity::Critical,
            location: Some(12),
        };
        let json = serde_json::to_string(&issue).unwrap();
        assert!(json.contains("\"type\":\"Pronoun Agreement\""));
        assert!(json.contains("\"matchedText\""));
        assert!(json.contains("\"severity\":\"critical\""));
    }

    #[test]
    fn analyzer_report_tagged_by_analyzer() {
        let report = AnalyzerReport::Failed(AnalyzerFailure {
            analyzer_name: AnalyzerKind::Seo,
            error: "boom".to_string(),
        });
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"analyzer\":\"failed\""));
        assert!(json.contains("\"analyzerName\":\"seo\""));
    }

    #[test]
    fn evidence_note_serializes_as_plain_string() {
        let e = Evidence::Note("Add subheadings".to_string());
        assert_eq!(serde_json::to_string(&e).unwrap(), "\"Add subheadings\"");
    }
}
