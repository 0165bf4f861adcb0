//! Text (terminal) reporter with colors and formatting

use crate::models::ScoreReport;
use anyhow::Result;

/// Grade colors (ANSI escape codes)
fn grade_color(grade: &str) -> &'static str {
    match grade {
        "A" => "\x1b[32m", // Green
        "B" => "\x1b[92m", // Light green
        "C" => "\x1b[33m", // Yellow
        "D" => "\x1b[91m", // Light red
        "F" => "\x1b[31m", // Red
        _ => "\x1b[0m",
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render report as formatted terminal output
pub fn render(report: &ScoreReport) -> Result<String> {
    let mut out = String::new();

    let grade = report.grade();
    let grade_c = grade_color(grade);
    out.push_str(&format!("\n{BOLD}Content Readiness{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {BOLD}{}/100{RESET}  Grade: {grade_c}{BOLD}{}{RESET}\n\n",
        report.overall, grade
    ));

    out.push_str(&format!("{BOLD}PILLARS{RESET}\n"));
    for pillar in &report.pillars {
        let passed = pillar.checks.iter().filter(|c| c.passed).count();
        out.push_str(&format!(
            "  {:<28} {}  {DIM}({}/{} checks){RESET}\n",
            pillar.name,
            format_score(pillar.score),
            passed,
            pillar.checks.len()
        ));
    }
    out.push('\n');

    if report.suggestions.is_empty() {
        out.push_str(&format!("{BOLD}SUGGESTIONS{RESET}\n  Nothing to improve.\n"));
    } else {
        out.push_str(&format!(
            "{BOLD}SUGGESTIONS{RESET} ({} total)\n",
            report.suggestions.len()
        ));
        for (i, s) in report.suggestions.iter().enumerate() {
            out.push_str(&format!("  {:>2}. {}\n", i + 1, s));
        }
    }

    Ok(out)
}

fn format_score(score: u32) -> String {
    let color = if score >= 80 {
        "\x1b[32m"
    } else if score >= 60 {
        "\x1b[33m"
    } else {
        "\x1b[31m"
    };
    format!("{color}{:>3}{RESET}", score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_lists_pillars_and_suggestions() {
        let report = test_report();
        let out = render(&report).expect("render text");
        for pillar in &report.pillars {
            assert!(out.contains(&pillar.name));
        }
        for s in report.suggestions.iter() {
            assert!(out.contains(s));
        }
        assert!(out.contains(&format!("{}/100", report.overall)));
    }
}
