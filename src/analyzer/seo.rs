//! Search-optimization heuristics: keyword frequency extraction, content
//! length and structure checks, and a composite score.

use super::TextAnalyzer;
use crate::{
    AnalyzerKind, AnalyzerReport, ContentLength, KeywordCount, LengthStatus, SeoReport,
};
use regex::Regex;
use std::collections::HashMap;

/// Stop words excluded from keyword extraction
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "that", "this", "these", "those", "i",
    "you", "he", "she", "it", "we", "they", "what", "which", "who", "when", "where", "why",
    "how",
];

/// Minimum word count before content registers as long enough
const MIN_WORD_COUNT: usize = 300;

/// Keywords shorter than this are discarded
const MIN_KEYWORD_LEN: usize = 4;

/// Shown when no structural problem is detected
pub(crate) const NO_ISSUES: &str = "No major SEO issues detected";

/// Shown when no improvement suggestion applies
pub(crate) const WELL_OPTIMIZED: &str = "Content is well-optimized for SEO";

/// Rule for search-engine optimization of content
pub struct SeoAnalyzer {
    sentence_end: Regex,
    word_token: Regex,
}

/// Strip non-word characters (anything outside [A-Za-z0-9_]) from a token
fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Frequency table over cleaned tokens, preserving first-seen order
fn keyword_frequencies(text: &str) -> Vec<(String, usize)> {
    let lowered = text.to_lowercase();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for word in lowered.split_whitespace() {
        let clean = clean_token(word);
        if clean.len() < MIN_KEYWORD_LEN || STOP_WORDS.contains(&clean.as_str()) {
            continue;
        }
        let entry = counts.entry(clean.clone()).or_insert(0);
        if *entry == 0 {
            order.push(clean);
        }
        *entry += 1;
    }

    order
        .into_iter()
        .map(|k| {
            let count = counts[&k];
            (k, count)
        })
        .collect()
}

impl SeoAnalyzer {
    pub fn new() -> Self {
        Self {
            sentence_end: Regex::new(r"[.!?]").unwrap(),
            word_token: Regex::new(r"\b\w{4,}\b").unwrap(),
        }
    }

    fn keyword_density(&self, text: &str, keyword: &str) -> f64 {
        let lowered = text.to_lowercase();
        let tokens: Vec<String> = lowered.split_whitespace().map(clean_token).collect();
        if tokens.is_empty() {
            return 0.0;
        }
        let occurrences = tokens.iter().filter(|t| t.as_str() == keyword).count();
        round2(occurrences as f64 / tokens.len() as f64 * 100.0)
    }

    fn content_length(&self, text: &str) -> ContentLength {
        let word_count = text.split_whitespace().count();
        let (status, recommendation) = if word_count < MIN_WORD_COUNT {
            (
                LengthStatus::TooShort,
                format!("Expand content to at least {} words", MIN_WORD_COUNT),
            )
        } else {
            (
                LengthStatus::Good,
                "Content length is appropriate for SEO".to_string(),
            )
        };
        ContentLength {
            word_count,
            min_recommended: MIN_WORD_COUNT,
            status,
            recommendation,
        }
    }

    /// Structural issue checks. The returned list never feeds back into
    /// keyword extraction; it only drives the score and the report.
    fn detect_issues(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut issues = Vec::new();

        if !text.contains('#') {
            issues.push("No headings detected - use headings to structure content".to_string());
        }

        if !text.contains("http") && !text.contains('[') {
            issues.push(
                "No links detected - include relevant internal/external links".to_string(),
            );
        }

        let first_sentence = self
            .sentence_end
            .split(text)
            .next()
            .unwrap_or_default();
        if first_sentence.chars().count() > 160 {
            issues.push(
                "Opening text is too long - first 160 chars should be compelling".to_string(),
            );
        }

        // Weak repetition signal: the single most frequent 4+-letter token
        let mut token_counts: HashMap<&str, usize> = HashMap::new();
        let mut max_count = 0;
        for m in self.word_token.find_iter(&lowered) {
            let count = token_counts.entry(m.as_str()).or_insert(0);
            *count += 1;
            max_count = max_count.max(*count);
        }
        if !token_counts.is_empty() && max_count < 2 {
            issues.push(
                "Consider using primary keywords more frequently (2-3% density)".to_string(),
            );
        }

        if !text.contains("<meta") && !lowered.contains("description") {
            issues.push(
                "No meta description found - add one for better SERP appearance".to_string(),
            );
        }

        issues
    }

    fn suggestions(&self, text: &str, unique_keywords: usize) -> Vec<String> {
        let mut suggestions = Vec::new();

        if unique_keywords < 5 {
            suggestions.push("Use more diverse keywords (target 5+ unique keywords)".to_string());
        }

        let first_words: Vec<&str> = text.split_whitespace().take(10).collect();
        if first_words.join(" ").chars().count() < 30 {
            suggestions.push("Consider a more descriptive title (30-60 characters)".to_string());
        }

        if text.to_lowercase().contains("project") {
            suggestions.push(
                "Add internal links to related articles about project management".to_string(),
            );
        }

        if text.split_whitespace().count() > 500 {
            suggestions
                .push("Add subheadings to break up long content (every 300 words)".to_string());
        }

        if suggestions.is_empty() {
            suggestions.push(WELL_OPTIMIZED.to_string());
        }
        suggestions
    }

    /// Composite score: 50 base, content-length and density bonuses, minus 5
    /// per detected issue, clamped to [0, 100].
    fn score(&self, length: &ContentLength, density: f64, issue_count: usize) -> u8 {
        let mut score: i32 = 50;

        score += if length.status == LengthStatus::Good {
            25
        } else {
            10
        };

        if (1.0..=3.0).contains(&density) {
            score += 15;
        } else if density > 0.0 {
            score += 5;
        }

        score -= issue_count as i32 * 5;

        score.clamp(0, 100) as u8
    }
}

impl Default for SeoAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer for SeoAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Seo
    }

    fn analyze(&self, text: &str) -> AnalyzerReport {
        let frequencies = keyword_frequencies(text);
        let unique_keywords = frequencies.len();
        let keywords: Vec<String> = frequencies.iter().take(20).map(|(k, _)| k.clone()).collect();

        let mut ranked = frequencies;
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        let top_keywords: Vec<KeywordCount> = ranked
            .iter()
            .take(10)
            .map(|(keyword, frequency)| KeywordCount {
                keyword: keyword.clone(),
                frequency: *frequency,
            })
            .collect();

        let (primary_keyword, primary_keyword_density) = match top_keywords.first() {
            Some(top) => (top.keyword.clone(), self.keyword_density(text, &top.keyword)),
            None => ("none".to_string(), 0.0),
        };

        let content_length = self.content_length(text);
        let detected = self.detect_issues(text);
        let score = self.score(&content_length, primary_keyword_density, detected.len());
        let suggestions = self.suggestions(text, unique_keywords);

        let issues = if detected.is_empty() {
            vec![NO_ISSUES.to_string()]
        } else {
            detected
        };

        let focus: Vec<&str> = suggestions.iter().take(2).map(String::as_str).collect();
        let summary = format!("SEO score: {}/100. Focus on: {}", score, focus.join(", "));

        AnalyzerReport::Seo(SeoReport {
            top_keywords,
            unique_keywords,
            keywords,
            primary_keyword,
            primary_keyword_density,
            content_length,
            issues,
            suggestions,
            score,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> SeoReport {
        match SeoAnalyzer::new().analyze(text) {
            AnalyzerReport::Seo(r) => r,
            other => panic!("expected SEO report, got {:?}", other),
        }
    }

    #[test]
    fn keywords_ranked_by_frequency_ties_first_seen() {
        let report = analyze("zebra apple zebra banana apple zebra cherry");
        let ranked: Vec<(&str, usize)> = report
            .top_keywords
            .iter()
            .map(|k| (k.keyword.as_str(), k.frequency))
            .collect();
        assert_eq!(
            ranked,
            vec![("zebra", 3), ("apple", 2), ("banana", 1), ("cherry", 1)]
        );
        assert_eq!(report.primary_keyword, "zebra");
    }

    #[test]
    fn short_and_stop_words_excluded() {
        let report = analyze("the cat ran to the big dog and sat");
        // Only tokens longer than three letters and outside the stop list
        assert!(report.top_keywords.is_empty());
        assert_eq!(report.primary_keyword, "none");
        assert_eq!(report.primary_keyword_density, 0.0);
    }

    #[test]
    fn density_counts_all_tokens() {
        // "content" appears twice among 8 tokens: 25%
        let report = analyze("content is king and good content wins out");
        assert_eq!(report.primary_keyword, "content");
        assert_eq!(report.primary_keyword_density, 25.0);
    }

    #[test]
    fn content_length_status_boundary() {
        let short = analyze(&"word ".repeat(299));
        assert_eq!(short.content_length.status, LengthStatus::TooShort);
        let long = analyze(&"word ".repeat(300));
        assert_eq!(long.content_length.status, LengthStatus::Good);
    }

    #[test]
    fn positive_structural_issues_detected() {
        let report = analyze("plain prose with no markers and a description of things");
        assert!(report.issues.iter().any(|i| i.contains("No headings")));
        assert!(report.issues.iter().any(|i| i.contains("No links")));
    }

    #[test]
    fn negative_heading_and_link_markers_suppress_issues() {
        let text = "# Title\n\nSee [the docs](http://example.com) for a description.";
        let report = analyze(text);
        assert!(!report.issues.iter().any(|i| i.contains("No headings")));
        assert!(!report.issues.iter().any(|i| i.contains("No links")));
    }

    #[test]
    fn long_opening_sentence_flagged() {
        let opener = "word ".repeat(40);
        let report = analyze(&format!("{}. And then a short one.", opener.trim()));
        assert!(report
            .issues
            .iter()
            .any(|i| i.contains("Opening text is too long")));
    }

    #[test]
    fn score_clamped_to_lower_bound() {
        // Minimal text accumulates every issue yet must not go below zero
        let report = analyze("x");
        assert!(report.score <= 100);
    }

    #[test]
    fn score_formula_tracks_components() {
        // 20 repeated keywords, short content, density 100% (outside 1-3%)
        let report = analyze(&"keyword ".repeat(20));
        // 50 + 10 (too short) + 5 (density > 0) - 5 per issue
        let expected = (65 - 5 * (report.issues.len() as i32)).clamp(0, 100) as u8;
        assert_eq!(report.score, expected);
    }

    #[test]
    fn suggestions_for_thin_content() {
        let report = analyze("tiny");
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("more diverse keywords")));
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("more descriptive title")));
    }

    #[test]
    fn project_mention_suggests_internal_links() {
        let report = analyze("Our project timeline slipped by a week.");
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("internal links")));
    }

    #[test]
    fn subheading_suggestion_over_500_words() {
        let text = format!("# H\n[l](http://x) description {}", "steady keyword flow ".repeat(200));
        let report = analyze(&text);
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("subheadings")));
    }

    #[test]
    fn empty_text_degrades_to_defaults() {
        let report = analyze("");
        assert_eq!(report.primary_keyword, "none");
        assert_eq!(report.primary_keyword_density, 0.0);
        assert_eq!(report.content_length.word_count, 0);
        assert!(report.score <= 100);
    }
}
