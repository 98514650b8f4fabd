//! Maps a free-text request to the analyzers it needs. Four disjoint keyword
//! families select individual analyzers; a comprehensive/vague fallback
//! selects all of them. Matching is case-insensitive substring search, so a
//! request can hit several families at once.

use crate::AnalyzerKind;

const GRAMMAR_TERMS: &[&str] = &[
    "grammar",
    "spelling",
    "punctuation",
    "correct",
    "proofread",
    "language",
];

const SENTIMENT_TERMS: &[&str] = &[
    "sentiment",
    "tone",
    "emotional",
    "mood",
    "psychology",
    "persuade",
];

const READABILITY_TERMS: &[&str] = &[
    "readability",
    "complex",
    "simple",
    "audience",
    "easy",
    "difficult",
    "understand",
];

const SEO_TERMS: &[&str] = &[
    "seo", "search", "keyword", "optimize", "marketing", "discover", "rank",
];

/// Terms that ask for the full battery; applied only when no specific family
/// matched first
const COMPREHENSIVE_TERMS: &[&str] = &[
    "comprehensive",
    "everything",
    "full",
    "complete",
    "all",
    "analyze",
    "evaluate",
    "review",
];

/// Routes analysis requests to analyzer subsets
pub struct IntentRouter;

fn matches_family(request: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| request.contains(t))
}

impl IntentRouter {
    pub fn new() -> Self {
        Self
    }

    /// Select the analyzers for `request`. Returns a deduplicated set in
    /// fixed presentation order; ambiguity is never an error, it resolves to
    /// the comprehensive set.
    pub fn route(&self, request: &str) -> Vec<AnalyzerKind> {
        let request = request.to_lowercase();
        let mut selected = Vec::new();

        if matches_family(&request, GRAMMAR_TERMS) {
            selected.push(AnalyzerKind::Grammar);
        }
        if matches_family(&request, SENTIMENT_TERMS) {
            selected.push(AnalyzerKind::Sentiment);
        }
        if matches_family(&request, READABILITY_TERMS) {
            selected.push(AnalyzerKind::Readability);
        }
        if matches_family(&request, SEO_TERMS) {
            selected.push(AnalyzerKind::Seo);
        }

        // Comprehensive fallback, and the default for fully vague requests
        if selected.is_empty() {
            selected = AnalyzerKind::all().to_vec();
        }

        selected
    }
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// True when the request carries an explicit comprehensive term. Exposed for
/// callers that want to distinguish "asked for everything" from "vague".
pub fn is_comprehensive(request: &str) -> bool {
    let request = request.to_lowercase();
    matches_family(&request, COMPREHENSIVE_TERMS)
}
