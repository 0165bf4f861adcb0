//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Suitable for pull request comments, tickets and content briefs.

use crate::models::ScoreReport;
use anyhow::Result;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &ScoreReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');
    md.push_str(&render_pillar_table(report));
    md.push('\n');
    md.push_str(&render_checks(report));
    md.push('\n');
    md.push_str(&render_suggestions(report));

    Ok(md)
}

fn render_header(report: &ScoreReport) -> String {
    format!(
        "# Content Readiness Report\n\n**Score:** {}/100 &nbsp; **Grade:** {}\n",
        report.overall,
        report.grade()
    )
}

fn render_pillar_table(report: &ScoreReport) -> String {
    let mut md = String::from("## Pillars\n\n| Pillar | Score | Checks passed |\n|---|---:|---:|\n");
    for pillar in &report.pillars {
        let passed = pillar.checks.iter().filter(|c| c.passed).count();
        md.push_str(&format!(
            "| {} | {} | {}/{} |\n",
            pillar.name,
            pillar.score,
            passed,
            pillar.checks.len()
        ));
    }
    md
}

fn render_checks(report: &ScoreReport) -> String {
    let mut md = String::from("## Checks\n");
    for pillar in &report.pillars {
        md.push_str(&format!("\n### {}\n\n", pillar.name));
        for check in &pillar.checks {
            let icon = if check.passed { "✅" } else { "❌" };
            md.push_str(&format!(
                "- {} {} (`{}`, weight {})\n",
                icon, check.label, check.id, check.weight
            ));
        }
    }
    md
}

fn render_suggestions(report: &ScoreReport) -> String {
    if report.suggestions.is_empty() {
        return "## Suggestions\n\nNo suggestions, every check passed.\n".to_string();
    }
    let mut md = String::from("## Suggestions\n\n");
    for s in report.suggestions.iter() {
        md.push_str(&format!("- {}\n", s));
    }
    md
}
