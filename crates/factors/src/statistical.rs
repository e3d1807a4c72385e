//! Rank, distribution-shape and volatility-regime factors.

use crate::context::SeriesContext;
use crate::util::{band_signal, fixed, signal_score};
use crate::FactorEvaluator;
use configuration::AnalysisParams;
use core_types::{Factor, FactorCategory, FactorId, SignalTag, VisualType};
use statistics::{skewness, sma, stddev, ts_rank};

/// Percentile of the latest close within the last 20 closes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsRank20;

impl FactorEvaluator for TsRank20 {
    fn id(&self) -> FactorId {
        FactorId::TsRank20
    }

    fn evaluate(&self, ctx: &SeriesContext<'_>, _params: &AnalysisParams) -> Option<Factor> {
        let rank = ts_rank(&ctx.closes, 20);
        let signal = band_signal(rank, 0.9, 0.1);
        // Score bands are wider than the signal bands.
        let score = if rank > 0.8 {
            0.7
        } else if rank < 0.2 {
            -0.7
        } else {
            0.0
        };

        Some(Factor {
            id: self.id(),
            name: "TsRank (Price, 20)".to_string(),
            description: "20-day price percentile".to_string(),
            rationale: "Rank(Price, 20) > 0.9 marks a push through the recent range high."
                .to_string(),
            value: fixed(rank, 2),
            signal,
            score,
            category: FactorCategory::Math,
            confidence: (rank - 0.5).abs() * 2.0,
            visual_type: VisualType::Breakout,
        })
    }
}

/// Skewness of the last 30 simple returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnSkew;

impl FactorEvaluator for ReturnSkew {
    fn id(&self) -> FactorId {
        FactorId::StatSkew
    }

    fn evaluate(&self, ctx: &SeriesContext<'_>, _params: &AnalysisParams) -> Option<Factor> {
        let skew = skewness(&ctx.returns, 30);
        let signal = band_signal(skew, 0.5, -0.5);

        Some(Factor {
            id: self.id(),
            name: "Return Skewness".to_string(),
            description: "Skewness of returns (tail risk)".to_string(),
            rationale: "Skew < -0.5 means frequent recent sell-offs and building downside risk."
                .to_string(),
            value: fixed(skew, 3),
            signal,
            score: signal_score(signal, 0.6, -0.9),
            category: FactorCategory::Statistical,
            confidence: skew.abs().min(1.0),
            visual_type: VisualType::Reversion,
        })
    }
}

/// Ratio of 5-bar to 20-bar close volatility, directed by the short trend.
#[derive(Debug, Clone, Copy, Default)]
pub struct VolRatio;

impl FactorEvaluator for VolRatio {
    fn id(&self) -> FactorId {
        FactorId::MathVolRatio
    }

    fn evaluate(&self, ctx: &SeriesContext<'_>, _params: &AnalysisParams) -> Option<Factor> {
        let std5 = stddev(&ctx.closes, 5);
        let std20 = stddev(&ctx.closes, 20);
        let ratio = if std20 == 0.0 { 1.0 } else { std5 / std20 };
        let trend_up = ctx.last_close() > sma(&ctx.closes, 5);

        let signal = match (ratio > 1.2, trend_up) {
            (true, true) => SignalTag::Bullish,
            (true, false) => SignalTag::Bearish,
            (false, _) => SignalTag::Neutral,
        };

        Some(Factor {
            id: self.id(),
            name: "Vol Ratio (5/20)".to_string(),
            description: "Short to long horizon volatility ratio".to_string(),
            rationale: "Std(5) / Std(20) > 1.2 signals a volatility expansion and a likely move."
                .to_string(),
            value: fixed(ratio, 2),
            signal,
            score: signal_score(signal, 0.5, -0.5),
            category: FactorCategory::Statistical,
            confidence: (ratio - 1.0).clamp(0.0, 1.0),
            visual_type: VisualType::Breakout,
        })
    }
}
