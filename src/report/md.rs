use crate::audit::AuditDiagnostics;
use crate::scoring::weights;
use crate::types::answers::{Answer, Category};
use crate::types::report::AssessmentReport;

fn percent(fraction: Option<f64>) -> String {
    match fraction {
        Some(value) => format!("{:.0}%", value * 100.0),
        None => "n/a".to_string(),
    }
}

fn option_label(category: Category, value: &str) -> String {
    weights::options(category)
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label.to_string())
        .unwrap_or_else(|| format!("{value} (unrecognized)"))
}

fn answer_labels(category: Category, answer: &Answer) -> String {
    answer
        .values()
        .into_iter()
        .map(|value| option_label(category, value))
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_diagnostics(output: &mut String, diagnostics: &AuditDiagnostics) {
    output.push_str("## Website Audit\n\n");
    output.push_str(&format!(
        "- performance: {}\n- seo: {}\n- accessibility: {}\n\n",
        percent(diagnostics.performance),
        percent(diagnostics.seo),
        percent(diagnostics.accessibility)
    ));
}

pub fn to_markdown(report: &AssessmentReport) -> String {
    let mut output = String::new();
    output.push_str("# Visibility Report\n\n");
    output.push_str(&format!(
        "Visibility score: {}/100 ({})\n\n",
        report.state.final_score, report.state.tier
    ));
    output.push_str(&format!("**{}**\n\n{}\n\n", report.headline, report.summary));

    output.push_str("## Scores\n\n");
    output.push_str(&format!("- form: {}\n", report.state.form_score));
    match report.state.website_score {
        Some(score) => output.push_str(&format!("- website: {score}\n\n")),
        None => output.push_str("- website: not available\n\n"),
    }

    if let Some(diagnostics) = &report.diagnostics {
        push_diagnostics(&mut output, diagnostics);
    }

    output.push_str("## Answers\n\n");
    if report.answered.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for (category, answer) in report.answered.answered() {
            output.push_str(&format!(
                "- {}: {}\n",
                category,
                answer_labels(category, answer)
            ));
        }
        output.push('\n');
    }

    output.push_str("## Recommendations\n\n");
    for (index, recommendation) in report.recommendations.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, recommendation));
    }

    output
}

/// Markdown table of every category's options and weights.
pub fn weight_table(categories: &[Category]) -> String {
    let mut output = String::new();
    output.push_str("# Option Weights\n");
    for category in categories {
        output.push_str(&format!("\n## {category}\n\n| value | label | weight |\n|---|---|---|\n"));
        for option in weights::options(*category) {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                option.value, option.label, option.weight
            ));
        }
    }
    output
}
