//! Classic chart indicators turned into factors.

use crate::context::SeriesContext;
use crate::util::{fixed, signal_score};
use crate::FactorEvaluator;
use configuration::AnalysisParams;
use core_types::{Factor, FactorCategory, FactorId, SignalTag, VisualType};
use statistics::{adx, bollinger, ema, rsi};

const RSI_PERIOD: usize = 14;
const BOLLINGER_PERIOD: usize = 20;
const BOLLINGER_K: f64 = 2.0;
const MACD_FAST: usize = 12;
const MACD_SLOW: usize = 26;

/// ADX trend strength with DI direction. The period comes from
/// [`AnalysisParams::adx_period`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AdxTrend;

impl FactorEvaluator for AdxTrend {
    fn id(&self) -> FactorId {
        FactorId::TechAdx
    }

    fn evaluate(&self, ctx: &SeriesContext<'_>, params: &AnalysisParams) -> Option<Factor> {
        let di = adx(ctx.points, params.adx_period);

        let signal = if di.adx > 25.0 && di.pdi > di.mdi {
            SignalTag::Bullish
        } else if di.adx > 25.0 && di.mdi > di.pdi {
            SignalTag::Bearish
        } else {
            SignalTag::Neutral
        };
        let confidence = match signal {
            SignalTag::Neutral => 0.0,
            _ => ((di.adx - 20.0) / 50.0).clamp(0.0, 1.0),
        };

        Some(Factor {
            id: self.id(),
            name: format!("ADX Trend ({})", params.adx_period),
            description: "Average directional index (trend strength)".to_string(),
            rationale: "ADX > 25 with DI+ > DI- confirms an established uptrend.".to_string(),
            value: fixed(di.adx, 1),
            signal,
            score: signal_score(signal, 0.7, -0.7),
            category: FactorCategory::Trend,
            confidence,
            visual_type: VisualType::Trend,
        })
    }
}

/// 14-period Wilder RSI read as a mean-reversion signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct RsiReversion;

impl FactorEvaluator for RsiReversion {
    fn id(&self) -> FactorId {
        FactorId::TechRsi
    }

    fn evaluate(&self, ctx: &SeriesContext<'_>, _params: &AnalysisParams) -> Option<Factor> {
        let value = rsi(ctx.points, RSI_PERIOD);
        let signal = if value < 30.0 {
            SignalTag::Bullish
        } else if value > 70.0 {
            SignalTag::Bearish
        } else {
            SignalTag::Neutral
        };

        Some(Factor {
            id: self.id(),
            name: "RSI (14)".to_string(),
            description: "Relative strength index".to_string(),
            rationale: "RSI < 30 is oversold (bullish), RSI > 70 is overbought (bearish)."
                .to_string(),
            value: fixed(value, 1),
            signal,
            score: signal_score(signal, 0.6, -0.6),
            category: FactorCategory::Momentum,
            confidence: (value - 50.0).abs() / 50.0,
            visual_type: VisualType::Reversion,
        })
    }
}

/// Position of the latest close within 20-bar, 2-sigma Bollinger bands.
#[derive(Debug, Clone, Copy, Default)]
pub struct BollingerPercentB;

impl FactorEvaluator for BollingerPercentB {
    fn id(&self) -> FactorId {
        FactorId::TechBoll
    }

    fn evaluate(&self, ctx: &SeriesContext<'_>, _params: &AnalysisParams) -> Option<Factor> {
        let bands = bollinger(&ctx.closes, BOLLINGER_PERIOD, BOLLINGER_K)?;
        let percent_b = bands.percent_b(ctx.last_close());
        let signal = if percent_b < 0.0 {
            SignalTag::Bullish
        } else if percent_b > 1.0 {
            SignalTag::Bearish
        } else {
            SignalTag::Neutral
        };

        Some(Factor {
            id: self.id(),
            name: "Bollinger %B".to_string(),
            description: "Position within the Bollinger bands".to_string(),
            rationale: "%B < 0 pierces the lower band (oversold), %B > 1 the upper band (overbought)."
                .to_string(),
            value: fixed(percent_b, 2),
            signal,
            score: signal_score(signal, 0.7, -0.7),
            category: FactorCategory::Volatility,
            confidence: ((percent_b - 0.5).abs() * 2.0).min(1.0),
            visual_type: VisualType::Breakout,
        })
    }
}

/// Snapshot MACD line: EMA(12) minus EMA(26), both run over the full series.
///
/// There is no signal line or histogram here, hence the fixed, modest
/// confidence.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacdTrend;

impl FactorEvaluator for MacdTrend {
    fn id(&self) -> FactorId {
        FactorId::TechMacd
    }

    fn evaluate(&self, ctx: &SeriesContext<'_>, _params: &AnalysisParams) -> Option<Factor> {
        let macd_line = ema(&ctx.closes, MACD_FAST) - ema(&ctx.closes, MACD_SLOW);
        let signal = if macd_line > 0.0 { SignalTag::Bullish } else { SignalTag::Bearish };

        Some(Factor {
            id: self.id(),
            name: "MACD Trend (Approx)".to_string(),
            description: "Moving average convergence divergence".to_string(),
            rationale: "MACD line > 0 reads as an uptrend, < 0 as a downtrend.".to_string(),
            value: fixed(macd_line, 2),
            signal,
            score: signal_score(signal, 0.5, -0.5),
            category: FactorCategory::Trend,
            confidence: 0.5,
            visual_type: VisualType::Trend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::PricePoint;

    fn bars(closes: &[f64]) -> Vec<PricePoint> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                timestamp: i as i64,
                price,
                open: price,
                high: price + 1.0,
                low: price - 1.0,
                volume: 1.0,
                time: String::new(),
            })
            .collect()
    }

    fn rising() -> Vec<f64> {
        (0..40).map(|i| 100.0 + f64::from(i) * 2.0).collect()
    }

    #[test]
    fn adx_uptrend_is_bullish_and_named_by_period() {
        let points = bars(&rising());
        let ctx = SeriesContext::new(&points, &[]);
        let factor = AdxTrend.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(factor.name, "ADX Trend (14)");
        assert_eq!(factor.signal, SignalTag::Bullish);
        assert_eq!(factor.score, 0.7);
        // ADX saturates at 100 on a perfectly steady trend.
        assert_eq!(factor.value, "100.0");
        assert_eq!(factor.confidence, 1.0);
    }

    #[test]
    fn adx_honours_configured_period() {
        let points = bars(&rising());
        let ctx = SeriesContext::new(&points, &[]);
        let params = AnalysisParams { adx_period: 25, ..AnalysisParams::default() };
        // 40 bars < 2 * 25: the indicator falls back to zeros.
        let factor = AdxTrend.evaluate(&ctx, &params).unwrap();
        assert_eq!(factor.name, "ADX Trend (25)");
        assert_eq!(factor.value, "0.0");
        assert_eq!(factor.signal, SignalTag::Neutral);
        assert_eq!(factor.confidence, 0.0);
    }

    #[test]
    fn adx_downtrend_is_bearish_with_scaled_confidence() {
        // Three down, one up: -DI dominates without saturating ADX.
        let mut closes = vec![200.0];
        for i in 0..59 {
            let step = if i % 2 == 0 { -3.0 } else { 1.0 };
            closes.push(closes[closes.len() - 1] + step);
        }
        let points = bars(&closes);
        let ctx = SeriesContext::new(&points, &[]);
        let factor = AdxTrend.evaluate(&ctx, &AnalysisParams::default()).unwrap();

        let di = adx(&points, 14);
        assert!(di.mdi > di.pdi);
        assert_eq!(factor.signal, SignalTag::Bearish);
        assert_eq!(factor.score, -0.7);
        assert_eq!(factor.value, "50.4");
        assert_eq!(factor.confidence, (di.adx - 20.0) / 50.0);
        assert!(factor.confidence > 0.5 && factor.confidence < 0.7);
    }

    #[test]
    fn rsi_overbought_is_bearish() {
        let points = bars(&rising());
        let ctx = SeriesContext::new(&points, &[]);
        let factor = RsiReversion.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(factor.value, "100.0");
        assert_eq!(factor.signal, SignalTag::Bearish);
        assert_eq!(factor.score, -0.6);
        assert_eq!(factor.confidence, 1.0);
    }

    #[test]
    fn close_below_lower_band_is_bullish() {
        let mut closes = vec![100.0, 101.0].repeat(20);
        closes.pop();
        closes.push(80.0);
        let points = bars(&closes);
        let ctx = SeriesContext::new(&points, &[]);
        let factor = BollingerPercentB.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(factor.signal, SignalTag::Bullish);
        assert_eq!(factor.score, 0.7);
        assert!(factor.confidence <= 1.0);
    }

    #[test]
    fn close_above_upper_band_is_bearish() {
        let mut closes = vec![100.0, 101.0].repeat(20);
        closes.pop();
        closes.push(120.0);
        let points = bars(&closes);
        let ctx = SeriesContext::new(&points, &[]);
        let factor = BollingerPercentB.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(factor.signal, SignalTag::Bearish);
        assert_eq!(factor.score, -0.7);
        assert_eq!(factor.confidence, 1.0);
    }

    #[test]
    fn macd_follows_trend_direction() {
        let points = bars(&rising());
        let ctx = SeriesContext::new(&points, &[]);
        let up = MacdTrend.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(up.signal, SignalTag::Bullish);
        assert_eq!(up.score, 0.5);
        assert_eq!(up.confidence, 0.5);

        let falling: Vec<f64> = rising().into_iter().rev().collect();
        let points = bars(&falling);
        let ctx = SeriesContext::new(&points, &[]);
        let down = MacdTrend.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(down.signal, SignalTag::Bearish);
        assert_eq!(down.score, -0.5);
    }

    #[test]
    fn flat_macd_is_never_neutral() {
        let points = bars(&[10.0; 40]);
        let ctx = SeriesContext::new(&points, &[]);
        let factor = MacdTrend.evaluate(&ctx, &AnalysisParams::default()).unwrap();
        assert_eq!(factor.value, "0.00");
        assert_ne!(factor.signal, SignalTag::Neutral);
        assert_eq!(factor.score.abs(), 0.5);
    }
}
