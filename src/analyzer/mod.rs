//! The four analyzer engines. Each is stateless with respect to the text it
//! receives: rule and lexicon tables are built once, per-call working state
//! lives on the stack, so a single instance can serve concurrent requests.

pub mod grammar;
pub mod readability;
pub mod sentiment;
pub mod seo;

pub use grammar::GrammarAnalyzer;
pub use readability::ReadabilityAnalyzer;
pub use sentiment::SentimentAnalyzer;
pub use seo::SeoAnalyzer;

use crate::{AnalyzerKind, AnalyzerReport};
use std::sync::Arc;

/// Trait for analyzer engines
pub trait TextAnalyzer: Send + Sync {
    /// Which of the four analyzers this is
    fn kind(&self) -> AnalyzerKind;

    /// Analyze the text. Must not fail on malformed or empty input; engines
    /// degrade (clamped counts, "none"/"neutral" defaults) instead.
    fn analyze(&self, text: &str) -> AnalyzerReport;
}

/// The default analyzer set, one engine per [`AnalyzerKind`].
pub fn default_analyzers() -> Vec<Arc<dyn TextAnalyzer>> {
    vec![
        Arc::new(GrammarAnalyzer::new()),
        Arc::new(SentimentAnalyzer::new()),
        Arc::new(ReadabilityAnalyzer::new()),
        Arc::new(SeoAnalyzer::new()),
    ]
}
