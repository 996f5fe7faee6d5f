use crate::error::{NicenessError, Result};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Deserialize)]
pub struct NicenessConfig {
    #[serde(default)]
    pub scorer: ScorerConfig,
    #[serde(default = "default_signals")]
    pub signal: Vec<SignalConfig>,
    #[serde(default = "default_trust_sources")]
    pub trust_source: Vec<TrustSourceConfig>,
}

impl Default for NicenessConfig {
    fn default() -> Self {
        Self {
            scorer: ScorerConfig::default(),
            signal: default_signals(),
            trust_source: default_trust_sources(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScorerConfig {
    /// When false, signals are combined raw and remapped from an assumed
    /// raw range equal to the output range (the legacy unnormalized mode).
    #[serde(default = "default_normalize")]
    pub normalize: bool,
    #[serde(default)]
    pub output_min: f64,
    #[serde(default = "default_output_max")]
    pub output_max: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            output_min: 0.0,
            output_max: 100.0,
        }
    }
}

fn default_normalize() -> bool {
    true
}

fn default_output_max() -> f64 {
    100.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub weight: f64,
    /// Fixed reliability factor applied on top of the caller weight.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// When true a lower raw value scores higher (distance-style signals).
    #[serde(default)]
    pub inverse: bool,
    /// Weight multiplier applied when the premium flag is set.
    pub premium_damping: Option<f64>,
}

fn default_scale() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrustSourceConfig {
    pub name: String,
    pub expected_count: u32,
    pub weight: f64,
}

fn default_signals() -> Vec<SignalConfig> {
    vec![
        SignalConfig {
            name: "jameda".to_string(),
            min: 1.0,
            max: 5.0,
            weight: 0.3,
            scale: 1.0,
            inverse: false,
            premium_damping: Some(0.7),
        },
        SignalConfig {
            name: "nps".to_string(),
            min: -100.0,
            max: 100.0,
            weight: 0.4,
            // NPS moves faster than review averages, so it counts for less
            scale: 0.7,
            inverse: false,
            premium_damping: None,
        },
        SignalConfig {
            name: "google".to_string(),
            min: 1.0,
            max: 5.0,
            weight: 0.3,
            scale: 1.0,
            inverse: false,
            premium_damping: None,
        },
    ]
}

fn default_trust_sources() -> Vec<TrustSourceConfig> {
    vec![
        TrustSourceConfig {
            name: "jameda".to_string(),
            expected_count: 10,
            weight: 0.3,
        },
        TrustSourceConfig {
            name: "nps".to_string(),
            expected_count: 20,
            weight: 0.4,
        },
        TrustSourceConfig {
            name: "google".to_string(),
            expected_count: 10,
            weight: 0.3,
        },
    ]
}

impl NicenessConfig {
    pub fn weights(&self) -> Vec<f64> {
        self.signal.iter().map(|signal| signal.weight).collect()
    }

    /// Structural checks only. Numeric weights stay unrestricted and a
    /// degenerate `min == max` range stays legal; the scorer fails closed
    /// on those at evaluation time instead of rejecting the config.
    pub fn validate(&self) -> Result<()> {
        if self.signal.is_empty() || self.signal.len() > 3 {
            return Err(NicenessError::ConfigParse(format!(
                "between 1 and 3 signals are supported (found {})",
                self.signal.len()
            )));
        }

        let mut seen = HashSet::new();
        for signal in &self.signal {
            let name = signal.name.trim();
            if name.is_empty() {
                return Err(NicenessError::ConfigParse(
                    "signal.name must be non-empty".to_string(),
                ));
            }
            if !seen.insert(name.to_string()) {
                return Err(NicenessError::ConfigParse(format!(
                    "duplicate signal name: {name}"
                )));
            }
            if let Some(damping) = signal.premium_damping {
                if !(0.0..=1.0).contains(&damping) {
                    return Err(NicenessError::ConfigParse(format!(
                        "signal.premium_damping must be between 0.0 and 1.0 (found {damping})"
                    )));
                }
            }
        }

        let mut seen_sources = HashSet::new();
        for source in &self.trust_source {
            let name = source.name.trim();
            if name.is_empty() {
                return Err(NicenessError::ConfigParse(
                    "trust_source.name must be non-empty".to_string(),
                ));
            }
            if !seen_sources.insert(name.to_string()) {
                return Err(NicenessError::ConfigParse(format!(
                    "duplicate trust source name: {name}"
                )));
            }
            if source.expected_count == 0 {
                return Err(NicenessError::ConfigParse(format!(
                    "trust_source.expected_count must be greater than 0 for {name}"
                )));
            }
        }

        Ok(())
    }
}
