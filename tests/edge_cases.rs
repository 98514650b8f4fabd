//! Edge case tests: degenerate inputs must not panic, and the documented
//! invariants hold for arbitrary text.

use proptest::prelude::*;
use redline::analyzer::{
    ReadabilityAnalyzer, SentimentAnalyzer, SeoAnalyzer, TextAnalyzer,
};
use redline::{analyze_text, AnalyzerReport, Polarity};

fn readability(text: &str) -> redline::ReadabilityReport {
    match ReadabilityAnalyzer::new().analyze(text) {
        AnalyzerReport::Readability(r) => r,
        _ => unreachable!(),
    }
}

fn seo(text: &str) -> redline::SeoReport {
    match SeoAnalyzer::new().analyze(text) {
        AnalyzerReport::Seo(r) => r,
        _ => unreachable!(),
    }
}

#[test]
fn empty_text_full_run_no_panic() {
    let report = analyze_text("", "");
    assert_eq!(report.analyzer_reports.len(), 4);
    assert!(report.analyzer_reports.values().all(|r| !r.is_failed()));
}

#[test]
fn whitespace_only_text_degrades() {
    let report = readability("   \n\t  ");
    assert_eq!(report.sentence_stats.count, 1);
    assert_eq!(report.vocabulary.total_words, 0);
    assert!(report.grade_level >= 0.0);
}

#[test]
fn punctuation_only_text_no_panic() {
    let report = readability("?!?!...!!");
    assert!(report.grade_level >= 0.0);
    assert!(report.sentence_stats.count >= 1);
}

#[test]
fn unicode_and_emoji_no_panic() {
    let text = "Cafés sind schön! 🎉 Результат хороший. 日本語のテキスト。";
    let report = analyze_text("review everything", text);
    assert_eq!(report.analyzer_reports.len(), 4);
    assert!(report.analyzer_reports.values().all(|r| !r.is_failed()));
}

#[test]
fn single_enormous_word_no_panic() {
    let text = "a".repeat(50_000);
    let report = seo(&text);
    assert!(report.score <= 100);
    assert_eq!(report.content_length.word_count, 1);
}

#[test]
fn no_lexicon_terms_yields_neutral_and_empty_matches() {
    let report = match SentimentAnalyzer::new().analyze("zyx qwerty plonk") {
        AnalyzerReport::Sentiment(s) => s,
        _ => unreachable!(),
    };
    assert_eq!(report.sentiment.polarity, Polarity::Neutral);
    assert!(report.sentiment.matched_terms.is_empty());
}

proptest! {
    #[test]
    fn grade_level_nonnegative_and_sentences_clamped(text in any::<String>()) {
        let report = readability(&text);
        prop_assert!(report.grade_level >= 0.0);
        prop_assert!(report.sentence_stats.count >= 1);
    }

    #[test]
    fn seo_score_stays_in_range(text in any::<String>()) {
        let report = seo(&text);
        prop_assert!(report.score <= 100);
    }

    #[test]
    fn seo_primary_keyword_density_nonnegative(text in any::<String>()) {
        let report = seo(&text);
        prop_assert!(report.primary_keyword_density >= 0.0);
        prop_assert!(!report.primary_keyword.is_empty());
    }

    #[test]
    fn analyzers_are_idempotent(text in any::<String>()) {
        let sentiment = SentimentAnalyzer::new();
        let a = serde_json::to_string(&sentiment.analyze(&text)).unwrap();
        let b = serde_json::to_string(&sentiment.analyze(&text)).unwrap();
        prop_assert_eq!(a, b);

        let s = SeoAnalyzer::new();
        let a = serde_json::to_string(&s.analyze(&text)).unwrap();
        let b = serde_json::to_string(&s.analyze(&text)).unwrap();
        prop_assert_eq!(a, b);
    }
}
