//! Report synthesis: headline findings plus a fixed-priority recommendation
//! list. Synthesis only reads completed reports, so it is indifferent to the
//! order analyzers finished in.

use crate::analyzer::{readability, seo};
use crate::{AnalyzerKind, AnalyzerReport, Evidence, Recommendation};
use std::collections::BTreeMap;

/// Evidence caps per category, matching the priority table
const GRAMMAR_EVIDENCE: usize = 3;
const STYLE_EVIDENCE: usize = 2;
const READABILITY_EVIDENCE: usize = 2;
const SEO_EVIDENCE: usize = 2;

/// One headline line per successfully-completed analyzer, in presentation
/// order. Failed analyzers contribute nothing here.
pub(crate) fn key_findings(reports: &BTreeMap<AnalyzerKind, AnalyzerReport>) -> Vec<String> {
    let mut findings = Vec::new();
    for report in reports.values() {
        match report {
            AnalyzerReport::Grammar(g) => {
                findings.push(format!(
                    "Grammar: {} critical issues found",
                    g.issues.len()
                ));
            }
            AnalyzerReport::Sentiment(s) => {
                findings.push(format!(
                    "Sentiment: {} tone detected",
                    s.sentiment.polarity
                ));
            }
            AnalyzerReport::Readability(r) => {
                findings.push(format!(
                    "Readability: Grade {} ({})",
                    r.grade_level, r.audience.accessibility
                ));
            }
            AnalyzerReport::Seo(s) => {
                findings.push(format!("SEO: Score {}/100", s.score));
            }
            AnalyzerReport::Failed(_) => {}
        }
    }
    findings
}

/// Fixed-priority recommendations: grammar fixes, then style, readability,
/// SEO. A category is omitted when its analyzer did not run, failed, or
/// produced only its "all clear" placeholder.
pub(crate) fn recommendations(
    reports: &BTreeMap<AnalyzerKind, AnalyzerReport>,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if let Some(AnalyzerReport::Grammar(g)) = reports.get(&AnalyzerKind::Grammar) {
        if !g.issues.is_empty() {
            recs.push(Recommendation {
                priority: 1,
                category: "Grammar".to_string(),
                action: format!("Fix {} critical grammar issues", g.issues.len()),
                evidence: g
                    .issues
                    .iter()
                    .take(GRAMMAR_EVIDENCE)
                    .cloned()
                    .map(Evidence::Issue)
                    .collect(),
            });
        }
        if !g.style_suggestions.is_empty() {
            recs.push(Recommendation {
                priority: 2,
                category: "Style".to_string(),
                action: "Apply style improvements".to_string(),
                evidence: g
                    .style_suggestions
                    .iter()
                    .take(STYLE_EVIDENCE)
                    .cloned()
                    .map(Evidence::Style)
                    .collect(),
            });
        }
    }

    if let Some(AnalyzerReport::Readability(r)) = reports.get(&AnalyzerKind::Readability) {
        let actionable: Vec<&String> = r
            .issues
            .iter()
            .filter(|i| i.as_str() != readability::NO_ISSUES)
            .collect();
        if !actionable.is_empty() {
            recs.push(Recommendation {
                priority: 3,
                category: "Readability".to_string(),
                action: "Improve text readability".to_string(),
                evidence: actionable
                    .into_iter()
                    .take(READABILITY_EVIDENCE)
                    .cloned()
                    .map(Evidence::Note)
                    .collect(),
            });
        }
    }

    if let Some(AnalyzerReport::Seo(s)) = reports.get(&AnalyzerKind::Seo) {
        let actionable: Vec<&String> = s
            .suggestions
            .iter()
            .filter(|s| s.as_str() != seo::WELL_OPTIMIZED)
            .collect();
        if !actionable.is_empty() {
            recs.push(Recommendation {
                priority: 4,
                category: "SEO".to_string(),
                action: "Optimize for search engines".to_string(),
                evidence: actionable
                    .into_iter()
                    .take(SEO_EVIDENCE)
                    .cloned()
                    .map(Evidence::Note)
                    .collect(),
            });
        }
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{GrammarAnalyzer, ReadabilityAnalyzer, SeoAnalyzer, TextAnalyzer};
    use crate::AnalyzerFailure;

    fn reports_for(text: &str) -> BTreeMap<AnalyzerKind, AnalyzerReport> {
        let mut reports = BTreeMap::new();
        reports.insert(
            AnalyzerKind::Grammar,
            GrammarAnalyzer::new().analyze(text),
        );
        reports.insert(
            AnalyzerKind::Readability,
            ReadabilityAnalyzer::new().analyze(text),
        );
        reports.insert(AnalyzerKind::Seo, SeoAnalyzer::new().analyze(text));
        reports
    }

    #[test]
    fn findings_skip_failed_analyzers() {
        let mut reports = reports_for("A clean sentence.");
        reports.insert(
            AnalyzerKind::Sentiment,
            AnalyzerReport::Failed(AnalyzerFailure {
                analyzer_name: AnalyzerKind::Sentiment,
                error: "boom".to_string(),
            }),
        );
        let findings = key_findings(&reports);
        assert_eq!(findings.len(), 3);
        assert!(findings.iter().all(|f| !f.contains("Sentiment")));
    }

    #[test]
    fn grammar_line_present_even_with_zero_issues() {
        let reports = reports_for("A clean sentence.");
        let findings = key_findings(&reports);
        assert!(findings.contains(&"Grammar: 0 critical issues found".to_string()));
    }

    #[test]
    fn priorities_are_ordered_and_capped() {
        let text = "they was sad. they was sad. they was sad. they was sad. \
                    At the end of the day the problems is that it was tested, \
                    it was shipped, it was praised, it was copied.";
        let reports = reports_for(text);
        let recs = recommendations(&reports);

        let priorities: Vec<u8> = recs.iter().map(|r| r.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);

        let grammar = recs.iter().find(|r| r.priority == 1).unwrap();
        assert_eq!(grammar.evidence.len(), 3);
        assert!(grammar.action.contains("5 critical grammar issues"));
    }

    #[test]
    fn placeholder_only_categories_are_omitted() {
        let reports = reports_for("A clean sentence.");
        let recs = recommendations(&reports);
        assert!(recs.iter().all(|r| r.category != "Readability"));
        assert!(recs.iter().all(|r| r.category != "Grammar"));
    }
}
