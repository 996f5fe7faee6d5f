use crate::types::report::{ScoreReport, TrustReport};

pub fn to_markdown(report: &ScoreReport) -> String {
    let card = &report.card;
    let mut output = String::new();
    output.push_str("# Niceness Report\n\n");
    output.push_str(&format!(
        "Weighted score: {:.2} (range magnitude {:.0})\n\n",
        card.score, card.output_max
    ));

    output.push_str("## Signals\n\n");
    for signal in &card.signals {
        output.push_str(&format!(
            "- {}: value {:.2}, weight {:+.2}, normalized {:.3}, contribution {:+.4}\n",
            signal.name, signal.value, signal.weight, signal.normalized, signal.contribution
        ));
    }
    output.push_str(&format!("\nTotal weight: {:.2}\n", card.total_weight));

    if let Some(trust) = &report.trust {
        output.push('\n');
        output.push_str(&trust_to_markdown(trust));
    }

    output
}

pub fn trust_to_markdown(trust: &TrustReport) -> String {
    let mut output = String::new();
    output.push_str("## Trust\n\n");
    output.push_str(&format!("Level: {} ({:.2})\n\n", trust.label, trust.score));
    for source in &trust.sources {
        output.push_str(&format!(
            "- {}: {} rating(s), contribution {:.2}\n",
            source.name, source.count, source.contribution
        ));
    }
    output
}
