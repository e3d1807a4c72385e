use core_types::PricePoint;
use statistics::{closes, opens, simple_returns, volumes};

/// Column views of the target and reference series, computed once per
/// evaluation pass and shared by every evaluator.
#[derive(Debug, Clone)]
pub struct SeriesContext<'a> {
    pub points: &'a [PricePoint],
    pub reference: &'a [PricePoint],
    pub closes: Vec<f64>,
    pub opens: Vec<f64>,
    pub volumes: Vec<f64>,
    /// Simple returns aligned with `closes`; the first entry is `0.0`.
    pub returns: Vec<f64>,
    pub reference_closes: Vec<f64>,
}

impl<'a> SeriesContext<'a> {
    pub fn new(points: &'a [PricePoint], reference: &'a [PricePoint]) -> Self {
        let target_closes = closes(points);
        Self {
            points,
            reference,
            opens: opens(points),
            volumes: volumes(points),
            returns: simple_returns(&target_closes),
            reference_closes: closes(reference),
            closes: target_closes,
        }
    }

    /// The most recent close. `NaN` for an empty series.
    pub fn last_close(&self) -> f64 {
        self.closes.last().copied().unwrap_or(f64::NAN)
    }
}
