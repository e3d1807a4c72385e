//! Performance of the target relative to the reference instrument.

use crate::context::SeriesContext;
use crate::util::{band_signal, fixed, signal_score};
use crate::FactorEvaluator;
use configuration::AnalysisParams;
use core_types::{Factor, FactorCategory, FactorId, VisualType};

/// The reference series must be longer than this for the factor to apply.
pub const MIN_REFERENCE_LEN: usize = 20;

const RETURN_LAG: usize = 5;

/// Return over the last `RETURN_LAG` bars, `None` when the series is too short.
fn trailing_return(closes: &[f64]) -> Option<f64> {
    let len = closes.len();
    if len <= RETURN_LAG {
        return None;
    }
    let base = closes[len - 1 - RETURN_LAG];
    Some((closes[len - 1] - base) / base)
}

/// Five-bar excess return of the target over the reference (usually BTC).
///
/// The bars are aligned by position from the end of each series, not by
/// timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeAlpha;

impl FactorEvaluator for RelativeAlpha {
    fn id(&self) -> FactorId {
        FactorId::RelBtcAlpha
    }

    fn evaluate(&self, ctx: &SeriesContext<'_>, _params: &AnalysisParams) -> Option<Factor> {
        if ctx.reference_closes.len() <= MIN_REFERENCE_LEN {
            tracing::debug!(
                reference_len = ctx.reference_closes.len(),
                "Reference series too short, skipping relative alpha"
            );
            return None;
        }
        let alpha = trailing_return(&ctx.closes)? - trailing_return(&ctx.reference_closes)?;
        let signal = band_signal(alpha, 0.05, -0.05);

        Some(Factor {
            id: self.id(),
            name: "BTC Relative Alpha".to_string(),
            description: "Excess return over BTC (5D)".to_string(),
            rationale: "Return(Token) - Return(BTC) > 5% signals independent strength."
                .to_string(),
            value: format!("{}%", fixed(alpha * 100.0, 2)),
            signal,
            score: signal_score(signal, 0.9, -0.5),
            category: FactorCategory::Relative,
            confidence: (alpha.abs() * 10.0).min(1.0),
            visual_type: VisualType::Divergence,
        })
    }
}
