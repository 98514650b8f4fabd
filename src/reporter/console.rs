//! Console reporter with colored output

use crate::{
    AnalyzerReport, Evidence, Polarity, Recommendation, SynthesizedReport,
};
use colored::Colorize;

/// Reporter for human-readable terminal output
pub struct ConsoleReporter {
    /// Quiet mode: findings and recommendations only, no per-analyzer detail
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Suppress per-analyzer sections
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Print the full report to stdout
    pub fn report(&self, report: &SynthesizedReport) {
        println!("{}", "═".repeat(60));
        println!("{}", "COMPREHENSIVE TEXT ANALYSIS REPORT".bold());
        println!("{}", "═".repeat(60));
        if let Some(id) = &report.execution_id {
            println!("{} {}", "Execution:".dimmed(), id.dimmed());
        }

        println!();
        println!("{}", "TEXT ANALYSIS:".bold());
        if report.key_findings.is_empty() {
            println!("  {}", "No analyzer completed successfully".red());
        }
        for finding in &report.key_findings {
            println!("  {}", finding);
        }

        println!();
        println!("{}", "PRIORITIZED RECOMMENDATIONS:".bold());
        if report.recommendations.is_empty() {
            println!("  Nothing actionable - the text looks clean");
        }
        for (i, rec) in report.recommendations.iter().enumerate() {
            self.print_recommendation(i + 1, rec);
        }

        if !self.quiet {
            for analyzer_report in report.analyzer_reports.values() {
                self.print_analyzer_section(analyzer_report);
            }
        }

        // Failures are always shown, quiet or not
        for analyzer_report in report.analyzer_reports.values() {
            if let AnalyzerReport::Failed(f) = analyzer_report {
                println!();
                println!(
                    "{} {}",
                    format!("✗ {} analyzer failed:", f.analyzer_name).red().bold(),
                    f.error.red()
                );
            }
        }
        println!();
    }

    fn print_recommendation(&self, index: usize, rec: &Recommendation) {
        println!(
            "{}. {} - {}",
            index,
            rec.category.yellow().bold(),
            rec.action
        );
        for evidence in &rec.evidence {
            match evidence {
                Evidence::Issue(issue) => println!(
                    "   • {}: \"{}\" → {}",
                    issue.kind,
                    issue.matched_text,
                    issue.suggested_fix.green()
                ),
                Evidence::Style(s) => {
                    println!("   • {} ({})", s.description, s.suggested_fix)
                }
                Evidence::Note(note) => println!("   • {}", note),
            }
        }
    }

    fn print_analyzer_section(&self, report: &AnalyzerReport) {
        match report {
            AnalyzerReport::Grammar(g) => {
                self.section_header("GRAMMAR & LANGUAGE");
                println!("  {}", g.summary);
                for issue in &g.issues {
                    println!(
                        "  {} {}: \"{}\" → {}",
                        "✗".red(),
                        issue.kind,
                        issue.matched_text,
                        issue.suggested_fix.green()
                    );
                }
                for suggestion in &g.style_suggestions {
                    println!(
                        "  {} {}: {}",
                        "~".yellow(),
                        suggestion.kind,
                        suggestion.description
                    );
                }
            }
            AnalyzerReport::Sentiment(s) => {
                self.section_header("SENTIMENT & TONE");
                let polarity = match s.sentiment.polarity {
                    Polarity::Positive => "positive".green(),
                    Polarity::Negative => "negative".red(),
                    Polarity::Neutral => "neutral".normal(),
                };
                println!(
                    "  Polarity: {} (score {})",
                    polarity, s.sentiment.score
                );
                println!("  Tone: {}", s.tone.description);
                println!("  Mood: {}", s.emotional_impact.overall_mood);
                if !s.sentiment.matched_terms.is_empty() {
                    println!("  Terms: {}", s.sentiment.matched_terms.join(" "));
                }
            }
            AnalyzerReport::Readability(r) => {
                self.section_header("READABILITY");
                println!(
                    "  Grade {} ({}) - {}",
                    r.grade_level, r.audience.accessibility, r.audience.label
                );
                println!(
                    "  Sentences: {} (avg {} words, {})",
                    r.sentence_stats.count, r.sentence_stats.avg_length, r.sentence_stats.complexity
                );
                println!(
                    "  Vocabulary: {} unique / {} total ({})",
                    r.vocabulary.unique_words, r.vocabulary.total_words, r.vocabulary.level
                );
                for issue in &r.issues {
                    println!("  {} {}", "~".yellow(), issue);
                }
            }
            AnalyzerReport::Seo(s) => {
                self.section_header("SEO");
                println!("  Score: {}", self.colorize_score(s.score));
                println!(
                    "  Primary keyword: {} ({}% density)",
                    s.primary_keyword, s.primary_keyword_density
                );
                println!(
                    "  Length: {} words ({})",
                    s.content_length.word_count,
                    s.content_length.recommendation
                );
                for issue in &s.issues {
                    println!("  {} {}", "✗".red(), issue);
                }
                for suggestion in &s.suggestions {
                    println!("  {} {}", "~".yellow(), suggestion);
                }
            }
            AnalyzerReport::Failed(_) => {}
        }
    }

    fn section_header(&self, title: &str) {
        println!();
        println!("{}", "─".repeat(60));
        println!("{}", title.bold());
        println!("{}", "─".repeat(60));
    }

    fn colorize_score(&self, score: u8) -> colored::ColoredString {
        let text = format!("{}/100", score);
        match score {
            70..=100 => text.green(),
            40..=69 => text.yellow(),
            _ => text.red(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
