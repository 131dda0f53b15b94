//! Table rendering for [`AnalysisResults`].

use std::fmt::Write as FmtWrite;

use colored::*;

use crate::aggregate::{safe_percentage, AnalysisResults};

const MIN_NUM_WIDTH: usize = 8;
const LANGUAGE_HEADER: &str = "Language";
const TOTAL_LABEL: &str = "Total";

fn border(left: &str, mid: &str, right: &str, lang_width: usize, num_width: usize) -> String {
    let mut line = String::new();
    line.push_str(left);
    line.push_str(&"─".repeat(lang_width + 2));
    for _ in 0..4 {
        line.push_str(mid);
        line.push_str(&"─".repeat(num_width + 2));
    }
    line.push_str(right);
    line
}

fn format_pct(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Formatted numeric cells of one row: files, lines, file %, line %.
fn numeric_cells(files: u64, lines: u64, file_pct: f64, line_pct: f64) -> [String; 4] {
    [
        files.to_string(),
        lines.to_string(),
        format_pct(file_pct),
        format_pct(line_pct),
    ]
}

fn format_row(label: ColoredString, cells: &[String; 4], num_width: usize) -> String {
    format!(
        "│ {} │ {:>w$} │ {:>w$} │ {:>w$} │ {:>w$} │",
        label,
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w = num_width
    )
}

/// Render the statistics table, one row per language in lexicographic order followed by a total row.
pub fn build_report(results: &AnalysisResults) -> String {
    let mut languages: Vec<_> = results.stats.iter().collect();
    languages.sort_by(|(a, _), (b, _)| a.cmp(b));

    let lang_width = languages
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain([LANGUAGE_HEADER.len(), TOTAL_LABEL.len()])
        .max()
        .unwrap_or(LANGUAGE_HEADER.len());

    let rows: Vec<_> = languages
        .into_iter()
        .map(|(language, stats)| {
            let (file_pct, line_pct) = stats.percentages(results.total_files, results.total_lines);
            (*language, numeric_cells(stats.files, stats.lines, file_pct, line_pct))
        })
        .collect();
    let total_cells = numeric_cells(
        results.total_files,
        results.total_lines,
        safe_percentage(results.total_files, results.total_files),
        safe_percentage(results.total_lines, results.total_lines),
    );

    let num_width = rows
        .iter()
        .map(|(_, cells)| cells)
        .chain([&total_cells])
        .flat_map(|cells| cells.iter().map(|cell| cell.chars().count()))
        .chain([MIN_NUM_WIDTH])
        .max()
        .unwrap_or(MIN_NUM_WIDTH);

    let mut output = String::new();
    let _ = writeln!(output);
    let _ = writeln!(output, "{}", "Language Statistics".cyan().bold());
    let _ = writeln!(output, "{}", border("┌", "┬", "┐", lang_width, num_width));
    let _ = writeln!(
        output,
        "│ {:<lw$} │ {:>w$} │ {:>w$} │ {:>w$} │ {:>w$} │",
        LANGUAGE_HEADER,
        "Files",
        "Lines",
        "File %",
        "Line %",
        lw = lang_width,
        w = num_width
    );
    let _ = writeln!(output, "{}", border("├", "┼", "┤", lang_width, num_width));

    for (language, cells) in &rows {
        let label = format!("{:<lw$}", language, lw = lang_width).yellow().bold();
        let _ = writeln!(output, "{}", format_row(label, cells, num_width));
    }

    let _ = writeln!(output, "{}", border("├", "┼", "┤", lang_width, num_width));
    let total_label = format!("{:<lw$}", TOTAL_LABEL, lw = lang_width).green().bold();
    let _ = writeln!(output, "{}", format_row(total_label, &total_cells, num_width));
    let _ = writeln!(output, "{}", border("└", "┴", "┘", lang_width, num_width));

    output
}
