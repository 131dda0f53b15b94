//! Folding per-file results into per-language totals.

use std::collections::HashMap;

/// Classification result for a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileAnalysis {
    pub language: &'static str,
    pub line_count: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStats {
    pub files: u64,
    pub lines: u64,
}

impl LanguageStats {
    /// File and line shares of the given totals, in percent. A zero total yields 0.
    pub fn percentages(&self, total_files: u64, total_lines: u64) -> (f64, f64) {
        (
            safe_percentage(self.files, total_files),
            safe_percentage(self.lines, total_lines),
        )
    }
}

/// Aggregate over a whole scan. Only languages with at least one file appear in `stats`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AnalysisResults {
    pub stats: HashMap<&'static str, LanguageStats>,
    pub total_files: u64,
    pub total_lines: u64,
}

pub fn safe_percentage(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        (numerator as f64 / denominator as f64) * 100.0
    }
}

pub fn aggregate_results<I>(file_analyses: I) -> AnalysisResults
where
    I: IntoIterator<Item = FileAnalysis>,
{
    let mut stats: HashMap<&'static str, LanguageStats> = HashMap::new();
    for analysis in file_analyses {
        let entry = stats.entry(analysis.language).or_default();
        entry.files += 1;
        entry.lines += analysis.line_count;
    }

    let total_files = stats.values().map(|s| s.files).sum();
    let total_lines = stats.values().map(|s| s.lines).sum();

    AnalysisResults {
        stats,
        total_files,
        total_lines,
    }
}
