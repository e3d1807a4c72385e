use crate::report::{OverallSignal, SignalLabel};
use core_types::Factor;

/// Mean score above which the verdict is long.
pub const LONG_THRESHOLD: f64 = 0.3;
/// Mean score below which the verdict is short.
pub const SHORT_THRESHOLD: f64 = -0.3;

/// A stateless calculator that folds factor scores into one verdict.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignalAggregator;

impl SignalAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Averages the scores of `factors` and classifies the mean.
    ///
    /// Every factor counts once, so neutral readings pull the mean toward
    /// zero. An empty list yields a neutral verdict with a mean of `0.0`.
    pub fn aggregate(&self, factors: &[Factor]) -> OverallSignal {
        let total: f64 = factors.iter().map(|f| f.score).sum();
        let mean_score = total / factors.len().max(1) as f64;

        let label = if mean_score > LONG_THRESHOLD {
            SignalLabel::Long
        } else if mean_score < SHORT_THRESHOLD {
            SignalLabel::Short
        } else {
            SignalLabel::Neutral
        };

        let signal = OverallSignal {
            label,
            mean_score,
            factor_count: factors.len(),
            active_count: factors.iter().filter(|f| f.is_active()).count(),
        };
        tracing::debug!(
            label = %signal.label,
            mean_score = signal.mean_score,
            factors = signal.factor_count,
            "Signals aggregated"
        );
        signal
    }
}

/// Shorthand for `SignalAggregator::new().aggregate(factors)`.
pub fn aggregate(factors: &[Factor]) -> OverallSignal {
    SignalAggregator::new().aggregate(factors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{FactorCategory, FactorId, SignalTag, VisualType};

    fn factor(score: f64, signal: SignalTag) -> Factor {
        Factor {
            id: FactorId::TechRsi,
            name: "test".to_string(),
            description: String::new(),
            rationale: String::new(),
            value: "0".to_string(),
            signal,
            score,
            category: FactorCategory::Momentum,
            confidence: 0.5,
            visual_type: VisualType::Reversion,
        }
    }

    #[test]
    fn empty_list_is_neutral() {
        let signal = aggregate(&[]);
        assert_eq!(signal, OverallSignal::default());
        assert_eq!(signal.label.to_string(), "Alpha Neutral");
    }

    #[test]
    fn strong_agreement_goes_long() {
        let factors = [factor(0.8, SignalTag::Bullish), factor(0.6, SignalTag::Bullish)];
        let signal = aggregate(&factors);
        assert_eq!(signal.label, SignalLabel::Long);
        assert!((signal.mean_score - 0.7).abs() < 1e-12);
        assert_eq!(signal.active_count, 2);
    }

    #[test]
    fn neutral_factors_dilute_the_mean() {
        let factors = [
            factor(0.8, SignalTag::Bullish),
            factor(0.0, SignalTag::Neutral),
            factor(0.0, SignalTag::Neutral),
        ];
        let signal = aggregate(&factors);
        assert_eq!(signal.label, SignalLabel::Neutral);
        assert_eq!(signal.factor_count, 3);
        assert_eq!(signal.active_count, 1);
    }

    #[test]
    fn thresholds_are_exclusive() {
        let signal = aggregate(&[factor(-0.3, SignalTag::Bearish)]);
        assert_eq!(signal.label, SignalLabel::Neutral);

        let signal = aggregate(&[factor(-0.9, SignalTag::Bearish)]);
        assert_eq!(signal.label, SignalLabel::Short);
        assert_eq!(signal.label.as_str(), "Alpha Short");
    }
}
