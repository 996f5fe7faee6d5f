use crate::score::normalize::normalize;
use crate::types::config::{ScorerConfig, SignalConfig};
use crate::types::scoring::{ScoreCard, SignalReading};

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Combine raw signal values into a single mapped score.
///
/// `values`, `weights` and `signals` line up index-for-index; callers
/// validate the lengths. All-zero values or all-zero weights carry no
/// information and short-circuit to exactly 0.0, which also covers the
/// `Σ|w| == 0` denominator.
pub fn weighted_score(
    values: &[f64],
    weights: &[f64],
    signals: &[SignalConfig],
    scorer: &ScorerConfig,
) -> ScoreCard {
    let mut readings = Vec::with_capacity(signals.len());
    for ((signal, value), weight) in signals.iter().zip(values).zip(weights) {
        let (normalized, contribution) = if scorer.normalize {
            let normalized = normalize(*value, signal.min, signal.max, signal.inverse);
            (normalized, normalized * weight * signal.scale)
        } else {
            (*value, value * weight)
        };
        readings.push(SignalReading {
            name: signal.name.clone(),
            value: *value,
            weight: *weight,
            normalized,
            contribution,
        });
    }

    let total_weight: f64 = weights.iter().map(|weight| weight.abs()).sum();
    let no_information = values.iter().all(|value| *value == 0.0)
        || weights.iter().all(|weight| *weight == 0.0);

    let summed: f64 = readings.iter().map(|reading| reading.contribution).sum();
    let score = if no_information || total_weight == 0.0 {
        0.0
    } else if scorer.normalize {
        round2(summed / total_weight * scorer.output_max)
    } else {
        // Legacy raw mode: the weighted sum is remapped from a raw range
        // assumed equal to the output range, which with the default
        // [0, 100] is the identity. Kept for parity, not as real scaling.
        let span = scorer.output_max - scorer.output_min;
        if span == 0.0 {
            0.0
        } else {
            round2((summed - scorer.output_min) / span * scorer.output_max)
        }
    };

    ScoreCard {
        signals: readings,
        total_weight,
        output_max: scorer.output_max,
        score,
    }
}
