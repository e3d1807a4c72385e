//! Factors adapted from the "101 Formulaic Alphas" family.

use crate::context::SeriesContext;
use crate::util::{band_signal, fixed, sign, signal_score};
use crate::FactorEvaluator;
use configuration::AnalysisParams;
use core_types::{Factor, FactorCategory, FactorId, SignalTag, VisualType};
use statistics::{correlation, delta};

/// Alpha #6: negated 10-bar correlation between open and volume.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alpha006;

impl FactorEvaluator for Alpha006 {
    fn id(&self) -> FactorId {
        FactorId::Alpha006
    }

    fn evaluate(&self, ctx: &SeriesContext<'_>, _params: &AnalysisParams) -> Option<Factor> {
        let value = -correlation(&ctx.opens, &ctx.volumes, 10);
        let signal = band_signal(value, 0.2, -0.2);

        Some(Factor {
            id: self.id(),
            name: "Alpha #006 (Corr)".to_string(),
            description: "Negative correlation between open price and volume".to_string(),
            rationale: "Corr(Open, Vol) > 0 hints at a bull trap, so the reading is inverted."
                .to_string(),
            value: fixed(value, 3),
            signal,
            score: signal_score(signal, 0.8, -0.8),
            category: FactorCategory::Alpha101,
            confidence: value.abs(),
            visual_type: VisualType::Correlation,
        })
    }
}

/// Alpha #12: bet against the last price move when volume changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alpha012;

impl FactorEvaluator for Alpha012 {
    fn id(&self) -> FactorId {
        FactorId::Alpha012
    }

    fn evaluate(&self, ctx: &SeriesContext<'_>, _params: &AnalysisParams) -> Option<Factor> {
        let delta_vol = delta(&ctx.volumes, 1);
        let delta_close = delta(&ctx.closes, 1);
        let value = sign(delta_vol) * -delta_close;

        let prev_vol = ctx.volumes.get(ctx.volumes.len().wrapping_sub(2)).copied();
        let quiet_volume = prev_vol.is_some_and(|prev| (delta_vol / prev).abs() < 0.05);
        let directional = if value > 0.0 { SignalTag::Bullish } else { SignalTag::Bearish };
        let signal = if quiet_volume { SignalTag::Neutral } else { directional };

        Some(Factor {
            id: self.id(),
            name: "Alpha #012 (Vol-Rev)".to_string(),
            description: "Volume expansion reversal".to_string(),
            rationale: "When volume jumps (Delta Vol > 0), bet on the last price move reversing."
                .to_string(),
            value: fixed(value, 2),
            signal,
            // The score follows the raw reading even when the volume filter
            // holds the signal at neutral.
            score: if value > 0.0 { 0.6 } else { -0.6 },
            category: FactorCategory::Alpha101,
            confidence: 0.6,
            visual_type: VisualType::Reversion,
        })
    }
}

/// Alpha #9 style reversal: a close under the previous five-bar low.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alpha009;

impl FactorEvaluator for Alpha009 {
    fn id(&self) -> FactorId {
        FactorId::Alpha009
    }

    fn evaluate(&self, ctx: &SeriesContext<'_>, _params: &AnalysisParams) -> Option<Factor> {
        let len = ctx.closes.len();
        if len < 6 {
            return None;
        }
        let close = ctx.last_close();
        let min5 = ctx.closes[len - 6..len - 1]
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let signal = if close < min5 { SignalTag::Bullish } else { SignalTag::Neutral };
        let delta_min = (min5 - close) / close;

        Some(Factor {
            id: self.id(),
            name: "Alpha #009 (Min Reversion)".to_string(),
            description: "Five-day low reversal".to_string(),
            rationale: "Close < Min(Close[t-1]..Close[t-5]) with DeltaMin > 0 is read as bullish."
                .to_string(),
            value: if delta_min > 0.0 {
                format!("-{}%", fixed(delta_min * 100.0, 2))
            } else {
                "0%".to_string()
            },
            signal,
            score: signal_score(signal, 0.8, 0.0),
            category: FactorCategory::Alpha101,
            confidence: if delta_min > 0.05 { 0.9 } else { 0.4 },
            visual_type: VisualType::Reversion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::PricePoint;

    fn series(closes: &[f64], volumes: &[f64]) -> Vec<PricePoint> {
        closes
            .iter()
            .zip(volumes)
            .enumerate()
            .map(|(i, (&price, &volume))| PricePoint {
                timestamp: i as i64 * 86_400_000,
                price,
                open: price * 0.99,
                high: price * 1.02,
                low: price * 0.98,
                volume,
                time: String::new(),
            })
            .collect()
    }

    #[test]
    fn alpha006_is_neutral_with_flat_volume() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + f64::from(i)).collect();
        let points = series(&closes, &[1_000.0; 40]);
        let ctx = SeriesContext::new(&points, &[]);
        let factor = Alpha006.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(factor.value, "0.000");
        assert_eq!(factor.signal, SignalTag::Neutral);
        assert_eq!(factor.score, 0.0);
        assert_eq!(factor.confidence, 0.0);
    }

    #[test]
    fn alpha006_is_bearish_when_open_tracks_volume() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + f64::from(i)).collect();
        let volumes: Vec<f64> = (0..40).map(|i| 1_000.0 + f64::from(i) * 10.0).collect();
        let points = series(&closes, &volumes);
        let ctx = SeriesContext::new(&points, &[]);
        let factor = Alpha006.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(factor.signal, SignalTag::Bearish);
        assert_eq!(factor.score, -0.8);
        assert!((factor.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn alpha012_reverses_a_rally_on_rising_volume() {
        let mut closes = vec![100.0; 39];
        closes.push(105.0);
        let mut volumes = vec![1_000.0; 39];
        volumes.push(2_000.0);
        let points = series(&closes, &volumes);
        let ctx = SeriesContext::new(&points, &[]);
        let factor = Alpha012.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(factor.value, "-5.00");
        assert_eq!(factor.signal, SignalTag::Bearish);
        assert_eq!(factor.score, -0.6);
    }

    #[test]
    fn alpha012_holds_neutral_on_quiet_volume_but_keeps_score() {
        let mut closes = vec![100.0; 39];
        closes.push(95.0);
        let mut volumes = vec![1_000.0; 39];
        volumes.push(1_010.0);
        let points = series(&closes, &volumes);
        let ctx = SeriesContext::new(&points, &[]);
        let factor = Alpha012.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(factor.signal, SignalTag::Neutral);
        assert_eq!(factor.value, "5.00");
        assert_eq!(factor.score, 0.6);
    }

    #[test]
    fn alpha012_volume_from_zero_is_directional() {
        let mut closes = vec![100.0; 39];
        closes.push(105.0);
        let mut volumes = vec![0.0; 39];
        volumes.push(500.0);
        let points = series(&closes, &volumes);
        let ctx = SeriesContext::new(&points, &[]);
        let factor = Alpha012.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(factor.value, "-5.00");
        assert_eq!(factor.signal, SignalTag::Bearish);
        assert_eq!(factor.score, -0.6);

        // 0 / 0 is NaN, which never passes the quiet-volume filter.
        let points = series(&closes, &[0.0; 40]);
        let ctx = SeriesContext::new(&points, &[]);
        let factor = Alpha012.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_ne!(factor.signal, SignalTag::Neutral);
    }

    #[test]
    fn alpha009_flags_a_new_low() {
        let mut closes = vec![100.0; 39];
        closes.push(95.0);
        let points = series(&closes, &[1_000.0; 40]);
        let ctx = SeriesContext::new(&points, &[]);
        let factor = Alpha009.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(factor.signal, SignalTag::Bullish);
        assert_eq!(factor.score, 0.8);
        assert_eq!(factor.confidence, 0.9);
        assert_eq!(factor.value, "-5.26%");
    }

    #[test]
    fn alpha009_is_neutral_above_the_low() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + f64::from(i)).collect();
        let points = series(&closes, &[1_000.0; 40]);
        let ctx = SeriesContext::new(&points, &[]);
        let factor = Alpha009.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(factor.signal, SignalTag::Neutral);
        assert_eq!(factor.score, 0.0);
        assert_eq!(factor.confidence, 0.4);
        assert_eq!(factor.value, "0%");
    }
}
