pub mod normalize;
pub mod trust;
pub mod weighted;

use crate::error::{NicenessError, Result};
use crate::types::config::NicenessConfig;
use crate::types::report::ScoreReport;
use chrono::Utc;

/// One evaluation request: raw signal values plus optional overrides.
/// Everything is recomputed from this on every call; nothing is retained.
#[derive(Debug, Clone, Default)]
pub struct EvalRequest {
    pub values: Vec<f64>,
    pub weights: Option<Vec<f64>>,
    pub premium: bool,
    pub counts: Option<Vec<u32>>,
}

pub fn evaluate(config: &NicenessConfig, request: &EvalRequest) -> Result<ScoreReport> {
    if request.values.len() != config.signal.len() {
        return Err(NicenessError::SignalMismatch {
            expected: config.signal.len(),
            got: request.values.len(),
        });
    }

    let mut weights = match &request.weights {
        Some(weights) => {
            if weights.len() != config.signal.len() {
                return Err(NicenessError::WeightMismatch {
                    expected: config.signal.len(),
                    got: weights.len(),
                });
            }
            weights.clone()
        }
        None => config.weights(),
    };

    // Premium damping rescales the weight before the total-weight check,
    // so a damped signal also counts for less in the denominator.
    if request.premium {
        for (weight, signal) in weights.iter_mut().zip(&config.signal) {
            if let Some(damping) = signal.premium_damping {
                *weight *= damping;
            }
        }
    }

    let card = weighted::weighted_score(&request.values, &weights, &config.signal, &config.scorer);
    tracing::debug!(
        score = card.score,
        total_weight = card.total_weight,
        premium = request.premium,
        "weighted score computed"
    );

    let trust = match &request.counts {
        Some(counts) => {
            if counts.len() != config.trust_source.len() {
                return Err(NicenessError::SourceMismatch {
                    expected: config.trust_source.len(),
                    got: counts.len(),
                });
            }
            Some(trust::trust_level(counts, &config.trust_source))
        }
        None => None,
    };

    Ok(ScoreReport {
        generated_at: Utc::now(),
        card,
        trust,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::weighted::round2;
    use crate::types::scoring::TrustLabel;

    fn request(values: &[f64], weights: &[f64]) -> EvalRequest {
        EvalRequest {
            values: values.to_vec(),
            weights: Some(weights.to_vec()),
            premium: false,
            counts: None,
        }
    }

    #[test]
    fn evaluate_uses_configured_weights_by_default() {
        let cfg = NicenessConfig::default();
        let req = EvalRequest {
            values: vec![4.0, 70.0, 4.0],
            ..EvalRequest::default()
        };
        let report = evaluate(&cfg, &req).expect("evaluation should succeed");
        assert!((report.card.score - 68.8).abs() < 1e-9);
    }

    #[test]
    fn premium_damps_only_flagged_signals() {
        let cfg = NicenessConfig::default();
        let mut req = request(&[4.0, 70.0, 4.0], &[0.3, 0.4, 0.3]);
        req.premium = true;
        let report = evaluate(&cfg, &req).expect("evaluation should succeed");

        // recompute through the documented formula with w1 damped by 0.7
        let w1: f64 = 0.3 * 0.7;
        let total = w1.abs() + 0.4_f64.abs() + 0.3_f64.abs();
        let summed = 0.75 * w1 * 1.0 + 0.85 * 0.4 * 0.7 + 0.75 * 0.3 * 1.0;
        let expected = round2(summed / total * 100.0);
        assert!((report.card.score - expected).abs() < 1e-9);

        let plain = evaluate(&cfg, &request(&[4.0, 70.0, 4.0], &[0.3, 0.4, 0.3]))
            .expect("evaluation should succeed");
        assert!(report.card.score < plain.card.score);
    }

    #[test]
    fn evaluate_rejects_value_count_mismatch() {
        let cfg = NicenessConfig::default();
        let req = request(&[4.0, 70.0], &[0.3, 0.4, 0.3]);
        let err = evaluate(&cfg, &req).expect_err("length check should fail");
        assert!(err.to_string().contains("expected 3 signal value(s)"));
    }

    #[test]
    fn evaluate_rejects_weight_count_mismatch() {
        let cfg = NicenessConfig::default();
        let req = request(&[4.0, 70.0, 4.0], &[0.3]);
        let err = evaluate(&cfg, &req).expect_err("length check should fail");
        assert!(err.to_string().contains("expected 3 weight(s)"));
    }

    #[test]
    fn evaluate_attaches_trust_when_counts_are_given() {
        let cfg = NicenessConfig::default();
        let mut req = request(&[4.0, 70.0, 4.0], &[0.3, 0.4, 0.3]);
        req.counts = Some(vec![4, 30, 3]);
        let report = evaluate(&cfg, &req).expect("evaluation should succeed");
        let trust = report.trust.expect("trust should be present");
        assert_eq!(trust.label, TrustLabel::Medium);
        assert!((trust.score - 0.27).abs() < 1e-9);
    }

    #[test]
    fn evaluate_rejects_count_mismatch() {
        let cfg = NicenessConfig::default();
        let mut req = request(&[4.0, 70.0, 4.0], &[0.3, 0.4, 0.3]);
        req.counts = Some(vec![4]);
        let err = evaluate(&cfg, &req).expect_err("length check should fail");
        assert!(err.to_string().contains("expected 3 rating count(s)"));
    }
}
