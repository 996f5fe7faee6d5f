use crate::error::{NicenessError, Result};
use crate::types::config::{NicenessConfig, TrustSourceConfig};
use crate::types::report::{TrustReading, TrustReport};
use crate::types::scoring::TrustLabel;

/// Derive a trust level from how many ratings back each source.
///
/// Each source with a nonzero count contributes
/// `(count / expected_count) * weight`; the trust score is the mean over
/// sources that have any ratings at all, 0.0 when none do.
pub fn trust_level(counts: &[u32], sources: &[TrustSourceConfig]) -> TrustReport {
    let mut rated_sources = 0u32;
    let mut sum = 0.0;
    let mut readings = Vec::with_capacity(sources.len());

    for (source, count) in sources.iter().zip(counts) {
        let contribution = if *count > 0 {
            (*count as f64 / source.expected_count as f64) * source.weight
        } else {
            0.0
        };
        if *count > 0 {
            rated_sources += 1;
            sum += contribution;
        }
        readings.push(TrustReading {
            name: source.name.clone(),
            count: *count,
            contribution,
        });
    }

    let score = if rated_sources > 0 {
        sum / rated_sources as f64
    } else {
        0.0
    };

    TrustReport {
        label: TrustLabel::from_score(score),
        score,
        sources: readings,
    }
}

/// Length-checked entry point for the `trust` subcommand.
pub fn evaluate_trust(config: &NicenessConfig, counts: &[u32]) -> Result<TrustReport> {
    if counts.len() != config.trust_source.len() {
        return Err(NicenessError::SourceMismatch {
            expected: config.trust_source.len(),
            got: counts.len(),
        });
    }
    Ok(trust_level(counts, &config.trust_source))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> Vec<TrustSourceConfig> {
        NicenessConfig::default().trust_source
    }

    #[test]
    fn reference_counts_land_on_medium() {
        let report = trust_level(&[4, 30, 3], &sources());
        assert_eq!(report.label, TrustLabel::Medium);
        assert!((report.score - 0.27).abs() < 1e-9);
        assert_eq!(report.sources.len(), 3);
        assert!((report.sources[1].contribution - 0.6).abs() < 1e-9);
    }

    #[test]
    fn no_ratings_anywhere_means_low_zero() {
        let report = trust_level(&[0, 0, 0], &sources());
        assert_eq!(report.label, TrustLabel::Low);
        assert_eq!(report.score, 0.0);
    }

    #[test]
    fn zero_count_sources_are_excluded_from_the_mean() {
        // only one rated source: 10/10 * 0.3 = 0.3, divided by 1
        let report = trust_level(&[10, 0, 0], &sources());
        assert!((report.score - 0.3).abs() < 1e-9);
        assert_eq!(report.label, TrustLabel::Medium);
    }

    #[test]
    fn well_rated_sources_reach_high() {
        let report = trust_level(&[20, 40, 20], &sources());
        assert!((report.score - (2.0 / 3.0)).abs() < 1e-9);
        assert_eq!(report.label, TrustLabel::High);
    }

    #[test]
    fn evaluate_trust_rejects_count_mismatch() {
        let cfg = NicenessConfig::default();
        let err = evaluate_trust(&cfg, &[1, 2]).expect_err("length check should fail");
        assert!(err.to_string().contains("expected 3 rating count(s)"));
    }
}
