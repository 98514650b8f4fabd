//! Lexicon-based sentiment scoring with intensity modifiers, plus tone and
//! emotional-theme detection over keyword families.

use super::TextAnalyzer;
use crate::{
    AnalyzerKind, AnalyzerReport, EmotionalImpact, Polarity, SentimentReport, SentimentScore,
    ToneResult,
};
use std::collections::HashMap;

/// Positive terms with base weights
const POSITIVE_TERMS: &[(&str, f64)] = &[
    ("good", 1.0),
    ("great", 2.0),
    ("excellent", 2.0),
    ("amazing", 2.0),
    ("wonderful", 2.0),
    ("happy", 2.0),
    ("pleased", 1.0),
    ("satisfied", 1.0),
    ("joy", 2.0),
    ("love", 2.0),
    ("brilliant", 2.0),
    ("fantastic", 2.0),
    ("perfect", 2.0),
    ("best", 2.0),
];

/// Negative terms with base weights (applied as negative contributions)
const NEGATIVE_TERMS: &[(&str, f64)] = &[
    ("bad", 1.0),
    ("terrible", 2.0),
    ("awful", 2.0),
    ("horrible", 2.0),
    ("hate", 2.0),
    ("frustrating", 2.0),
    ("frustrated", 2.0),
    ("disappointed", 2.0),
    ("sad", 2.0),
    ("ugly", 2.0),
    ("wrong", 1.0),
    ("refuse", 1.0),
    ("problem", 1.0),
    ("issue", 1.0),
    ("mistake", 1.0),
    ("bug", 1.0),
    ("fail", 2.0),
    ("failed", 2.0),
    ("incorrect", 1.0),
];

/// Multipliers applied when the immediately preceding token is a modifier
const INTENSITY_MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("really", 1.5),
    ("extremely", 2.0),
    ("absolutely", 2.0),
    ("so", 1.3),
    ("quite", 1.2),
    ("rather", 1.2),
    ("too", 1.3),
];

/// Tone tags and the substrings that trigger them
const TONE_FAMILIES: &[(&str, &[&str])] = &[
    ("frustrated", &["frustrat", "annoying", "irritating"]),
    ("pleased", &["happy", "pleased", "good"]),
    ("weary", &["tired", "exhausted", "weary"]),
    ("hurried/careless", &["mistake", "rush", "quickly"]),
    ("reflective", &["reflect", "lesson", "learn", "realize"]),
    ("regretful", &["should", "could", "should have"]),
];

/// Emotional themes and the phrases that trigger them
const THEME_FAMILIES: &[(&str, &[&str])] = &[
    (
        "struggle/adversity",
        &["didn't go as planned", "refuse to behave", "took longer"],
    ),
    (
        "self-awareness/regret",
        &["should have", "lesson", "realize", "mistake"],
    ),
    ("resolution attempt", &["in the end", "finally", "fixing"]),
];

/// Score thresholds for polarity classification
const POSITIVE_THRESHOLD: f64 = 5.0;
const NEGATIVE_THRESHOLD: f64 = -5.0;

/// Rule for emotional tone and sentiment of text
pub struct SentimentAnalyzer {
    positive: HashMap<&'static str, f64>,
    negative: HashMap<&'static str, f64>,
    modifiers: HashMap<&'static str, f64>,
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

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_TERMS.iter().copied().collect(),
            negative: NEGATIVE_TERMS.iter().copied().collect(),
            modifiers: INTENSITY_MODIFIERS.iter().copied().collect(),
        }
    }

    fn score(&self, text: &str) -> SentimentScore {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();

        let mut score = 0.0;
        let mut positive_terms = 0;
        let mut negative_terms = 0;
        let mut matched_terms = Vec::new();

        for (i, word) in words.iter().enumerate() {
            let clean = clean_token(word);

            // Modifiers only look one token back; a modifier preceding a
            // non-sentiment word has no effect
            let mut intensity = 1.0;
            if i > 0 {
                let prev = clean_token(words[i - 1]);
                if let Some(factor) = self.modifiers.get(prev.as_str()) {
                    intensity = *factor;
                }
            }

            if let Some(weight) = self.positive.get(clean.as_str()) {
                score += weight * intensity;
                positive_terms += 1;
                matched_terms.push(format!("+{}", clean));
            } else if let Some(weight) = self.negative.get(clean.as_str()) {
                score -= weight * intensity;
                negative_terms += 1;
                matched_terms.push(format!("-{}", clean));
            }
        }

        let polarity = if score > POSITIVE_THRESHOLD {
            Polarity::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Polarity::Negative
        } else {
            Polarity::Neutral
        };

        SentimentScore {
            polarity,
            score: round2(score),
            positive_terms,
            negative_terms,
            matched_terms,
        }
    }

    fn tone(&self, text: &str) -> ToneResult {
        let lowered = text.to_lowercase();
        let tags: Vec<String> = TONE_FAMILIES
            .iter()
            .filter(|(_, triggers)| triggers.iter().any(|t| lowered.contains(t)))
            .map(|(tag, _)| (*tag).to_string())
            .collect();

        let description = if tags.is_empty() {
            "neutral and factual".to_string()
        } else {
            tags.join(", ")
        };
        let tags = if tags.is_empty() {
            vec!["neutral".to_string()]
        } else {
            tags
        };

        ToneResult { tags, description }
    }

    fn emotional_impact(&self, text: &str) -> EmotionalImpact {
        let lowered = text.to_lowercase();
        let themes: Vec<String> = THEME_FAMILIES
            .iter()
            .filter(|(_, triggers)| triggers.iter().any(|t| lowered.contains(t)))
            .map(|(theme, _)| (*theme).to_string())
            .collect();

        let overall_mood = if themes.is_empty() {
            "neutral".to_string()
        } else {
            "reflective and slightly frustrated".to_string()
        };
        let themes = if themes.is_empty() {
            vec!["neutral".to_string()]
        } else {
            themes
        };

        EmotionalImpact {
            themes,
            overall_mood,
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer for SentimentAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Sentiment
    }

    fn analyze(&self, text: &str) -> AnalyzerReport {
        let sentiment = self.score(text);
        let tone = self.tone(text);
        let emotional_impact = self.emotional_impact(text);
        let summary = format!(
            "The text conveys a {} sentiment with {} tone. Overall mood: {}",
            sentiment.polarity, tone.description, emotional_impact.overall_mood
        );
        AnalyzerReport::Sentiment(SentimentReport {
            sentiment,
            tone,
            emotional_impact,
            summary,
        })
    }
}
