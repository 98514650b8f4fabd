//! Readability scoring: a whole-text Flesch-Kincaid grade approximation,
//! sentence and vocabulary statistics, audience mapping, and a handful of
//! targeted issue checks. The syllable count is a single pass over the full
//! character stream, not a per-word phonetic model.

use super::TextAnalyzer;
use crate::{
    Accessibility, AnalyzerKind, AnalyzerReport, Audience, Complexity, ReadabilityReport,
    SentenceStats, VocabularyLevel, VocabularyStats,
};
use regex::Regex;

/// Common function words; unique tokens outside this list count as "complex"
const FUNCTION_WORDS: &[&str] = &[
    "the", "a", "and", "or", "is", "are", "was", "were", "be", "been", "have", "has", "do",
    "does", "did", "will", "would", "should", "could", "can", "may", "might", "must", "i",
    "you", "he", "she", "it", "we", "they", "this", "that", "these", "those", "what", "which",
    "who", "when", "where", "why",
];

/// Shown when no readability problem is detected
pub(crate) const NO_ISSUES: &str = "Text is generally readable";

/// Rule for grade-level readability and audience fit
pub struct ReadabilityAnalyzer {
    sentence_split: Regex,
    passive_voice: Regex,
    long_word: Regex,
    run_on: Regex,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Vowel-run syllable approximation over the whole text: a vowel that does
/// not continue the previous vowel run counts one syllable; a trailing
/// literal "e" subtracts one; floored at 1.
fn count_syllables(text: &str) -> usize {
    let lowered = text.to_lowercase();
    let mut count: isize = 0;
    let mut previous_was_vowel = false;
    for c in lowered.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }
    if lowered.ends_with('e') {
        count -= 1;
    }
    count.max(1) as usize
}

impl ReadabilityAnalyzer {
    pub fn new() -> Self {
        Self {
            sentence_split: Regex::new(r"[.!?]+").unwrap(),
            passive_voice: Regex::new(r"\b(is|are|was|were)\s+\w+ed\b").unwrap(),
            long_word: Regex::new(r"\b[a-z]{15,}\b").unwrap(),
            run_on: Regex::new(r"[^.!?]{100,}[.!?]").unwrap(),
        }
    }

    fn grade_level(&self, text: &str) -> f64 {
        // Sentence count = number of terminator runs, clamped to 1
        let sentences = (self.sentence_split.split(text).count() - 1).max(1);
        let words = text.split_whitespace().count().max(1);
        let syllables = count_syllables(text);

        let grade = 0.39 * (words as f64 / sentences as f64)
            + 11.8 * (syllables as f64 / words as f64)
            - 15.59;
        round1(grade.max(0.0))
    }

    fn sentence_stats(&self, text: &str) -> SentenceStats {
        let lengths: Vec<usize> = self
            .sentence_split
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.split_whitespace().count())
            .collect();

        if lengths.is_empty() {
            // Degenerate input still reports one (empty) sentence
            return SentenceStats {
                avg_length: 0.0,
                count: 1,
                shortest: 0,
                longest: 0,
                complexity: Complexity::Simple,
            };
        }

        let avg = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
        let complexity = if avg < 10.0 {
            Complexity::Simple
        } else if avg < 15.0 {
            Complexity::Moderate
        } else if avg < 20.0 {
            Complexity::Complex
        } else {
            Complexity::VeryComplex
        };

        SentenceStats {
            avg_length: round1(avg),
            count: lengths.len(),
            shortest: *lengths.iter().min().unwrap(),
            longest: *lengths.iter().max().unwrap(),
            complexity,
        }
    }

    fn vocabulary(&self, text: &str) -> VocabularyStats {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();
        let unique: std::collections::HashSet<&str> = words.iter().copied().collect();

        let function_count = unique
            .iter()
            .filter(|w| FUNCTION_WORDS.contains(*w))
            .count();
        let complex_words = unique.len() - function_count;

        let level = if complex_words < 5 {
            VocabularyLevel::Simple
        } else if complex_words < 15 {
            VocabularyLevel::Moderate
        } else {
            VocabularyLevel::Complex
        };

        let diversity = if words.is_empty() {
            0.0
        } else {
            round2(unique.len() as f64 / words.len() as f64)
        };

        VocabularyStats {
            unique_words: unique.len(),
            total_words: words.len(),
            diversity,
            complex_words,
            level,
        }
    }

    fn audience(&self, grade_level: f64) -> Audience {
        let (label, accessibility) = if grade_level < 6.0 {
            ("Elementary school (grades 3-5)", Accessibility::VeryEasy)
        } else if grade_level < 8.0 {
            ("Middle school (grades 6-8)", Accessibility::Easy)
        } else if grade_level < 10.0 {
            ("High school (grades 9-10)", Accessibility::Moderate)
        } else if grade_level < 12.0 {
            ("High school (grades 11-12)", Accessibility::Challenging)
        } else {
            ("College/Academic", Accessibility::VeryChallenging)
        };
        Audience {
            label: label.to_string(),
            accessibility,
        }
    }

    fn issues(&self, text: &str) -> Vec<String> {
        let mut issues = Vec::new();

        let passive_count = self.passive_voice.find_iter(text).count();
        if passive_count > 3 {
            issues.push(format!(
                "Excessive passive voice ({} instances) - reduces clarity",
                passive_count
            ));
        }

        let long_words = self.long_word.find_iter(text).count();
        if long_words > 2 {
            issues.push(format!(
                "Several long/complex words ({}) - may reduce readability",
                long_words
            ));
        }

        if self.run_on.find_iter(text).count() > 2 {
            issues.push("Some very long sentences - consider breaking them up".to_string());
        }

        if text.to_lowercase().contains("refuse to behave") {
            issues.push("Vague phrases like 'refuse to behave' - be more specific".to_string());
        }

        if issues.is_empty() {
            issues.push(NO_ISSUES.to_string());
        }
        issues
    }
}

impl Default for ReadabilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer for ReadabilityAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Readability
    }

    fn analyze(&self, text: &str) -> AnalyzerReport {
        let grade_level = self.grade_level(text);
        let sentence_stats = self.sentence_stats(text);
        let vocabulary = self.vocabulary(text);
        let audience = self.audience(grade_level);
        let issues = self.issues(text);
        let overall = if grade_level < 12.0 {
            "Good".to_string()
        } else {
            "Challenging".to_string()
        };
        let summary = format!(
            "Text is suitable for {} with {} readability (Grade {})",
            audience.label, audience.accessibility, grade_level
        );
        AnalyzerReport::Readability(ReadabilityReport {
            grade_level,
            sentence_stats,
            vocabulary,
            audience,
            issues,
            overall,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> ReadabilityReport {
        match ReadabilityAnalyzer::new().analyze(text) {
            AnalyzerReport::Readability(r) => r,
            other => panic!("expected readability report, got {:?}", other),
        }
    }

    #[test]
    fn syllable_runs_counted_once() {
        // "beautiful": eau is one run, i one, u one -> 3; plus "day" -> 1
        assert_eq!(count_syllables("beautiful day"), 4);
    }

    #[test]
    fn syllable_trailing_e_subtracted() {
        assert_eq!(count_syllables("care"), 1);
        // Floor holds even when the subtraction would reach zero
        assert_eq!(count_syllables("e"), 1);
    }

    #[test]
    fn grade_level_never_negative() {
        // Short simple words drive the raw formula negative; it must clamp
        let report = analyze("A cat sat. A dog ran. It is fun.");
        assert!(report.grade_level >= 0.0);
    }

    #[test]
    fn punctuation_free_input_counts_one_sentence() {
        let report = analyze("plain words with no terminator at all");
        assert_eq!(report.sentence_stats.count, 1);
        assert_eq!(report.sentence_stats.longest, 7);
        assert_eq!(report.sentence_stats.complexity, Complexity::Simple);
    }

    #[test]
    fn empty_input_degrades_without_panicking() {
        let report = analyze("");
        assert!(report.grade_level >= 0.0);
        assert_eq!(report.sentence_stats.count, 1);
        assert_eq!(report.vocabulary.total_words, 0);
        assert_eq!(report.vocabulary.diversity, 0.0);
    }

    #[test]
    fn complexity_buckets_by_average_length() {
        let simple = analyze("Short one. Tiny two.");
        assert_eq!(simple.sentence_stats.complexity, Complexity::Simple);

        let long_sentence = "word ".repeat(25);
        let complex = analyze(&format!("{}.", long_sentence.trim()));
        assert_eq!(complex.sentence_stats.complexity, Complexity::VeryComplex);
    }

    #[test]
    fn vocabulary_counts_and_level() {
        let report = analyze("the cat and the dog");
        // unique: the, cat, and, dog; "the"/"and" are function words
        assert_eq!(report.vocabulary.unique_words, 4);
        assert_eq!(report.vocabulary.total_words, 5);
        assert_eq!(report.vocabulary.complex_words, 2);
        assert_eq!(report.vocabulary.level, VocabularyLevel::Simple);
        assert_eq!(report.vocabulary.diversity, 0.8);
    }

    #[test]
    fn audience_bands_cover_extremes() {
        let easy = ReadabilityAnalyzer::new().audience(3.0);
        assert_eq!(easy.accessibility, Accessibility::VeryEasy);
        let hard = ReadabilityAnalyzer::new().audience(14.2);
        assert_eq!(hard.accessibility, Accessibility::VeryChallenging);
        assert_eq!(hard.label, "College/Academic");
    }

    #[test]
    fn positive_vague_phrase_issue() {
        let report = analyze("The servers refuse to behave today.");
        assert!(report
            .issues
            .iter()
            .any(|i| i.contains("refuse to behave")));
    }

    #[test]
    fn positive_long_word_issue() {
        let report = analyze(
            "the implementationdetails and characterization and uncharacteristically \
             and misunderstandings keep growing",
        );
        assert!(report
            .issues
            .iter()
            .any(|i| i.contains("long/complex words")));
    }

    #[test]
    fn negative_clean_text_reports_single_note() {
        let report = analyze("The cat sat on the mat. The dog ran off.");
        assert_eq!(report.issues, vec![NO_ISSUES.to_string()]);
    }

    #[test]
    fn overall_label_tracks_grade() {
        let report = analyze("A cat sat. It is fun.");
        assert_eq!(report.overall, "Good");
    }
}
