use crate::types::report::{ScoreReport, TrustReport};
use colored::Colorize;

const BAR_WIDTH: usize = 30;

/// Text rendition of the classic three-panel dashboard: input values,
/// weights, and the final score with its sign color-coded (green positive,
/// red negative, gray zero). `colored` drops the escape codes off-tty.
pub fn to_chart(report: &ScoreReport) -> String {
    let card = &report.card;
    let pad = card
        .signals
        .iter()
        .map(|signal| signal.name.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str("Input values\n");
    for signal in &card.signals {
        output.push_str(&format!(
            "  {:<pad$}  {:>8.2}  {}\n",
            signal.name,
            signal.value,
            bar(signal.normalized)
        ));
    }

    output.push_str("\nWeights\n");
    for signal in &card.signals {
        output.push_str(&format!(
            "  {:<pad$}  {:>8}  {}\n",
            signal.name,
            format!("{:+.2}", signal.weight),
            bar(signal.weight.abs())
        ));
    }

    output.push_str("\nWeighted score\n");
    let fill = if card.output_max == 0.0 {
        0.0
    } else {
        (card.score / card.output_max).abs()
    };
    let label = format!("{:+.2}", card.score);
    let label = if card.score > 0.0 {
        label.green()
    } else if card.score < 0.0 {
        label.red()
    } else {
        label.dimmed()
    };
    output.push_str(&format!("  {:>8}  {}\n", label, bar(fill)));

    if let Some(trust) = &report.trust {
        output.push('\n');
        output.push_str(&trust_to_chart(trust));
    }

    output
}

pub fn trust_to_chart(trust: &TrustReport) -> String {
    let pad = trust
        .sources
        .iter()
        .map(|source| source.name.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str("Trust\n");
    output.push_str(&format!("  {} ({:.2})\n", trust.label, trust.score));
    for source in &trust.sources {
        output.push_str(&format!(
            "  {:<pad$}  {:>4} rating(s)  {}\n",
            source.name,
            source.count,
            bar(source.contribution)
        ));
    }
    output
}

fn bar(fraction: f64) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
