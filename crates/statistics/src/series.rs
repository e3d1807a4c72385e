//! Column extraction from price points.

use core_types::PricePoint;

pub fn closes(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.price).collect()
}

pub fn opens(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.open).collect()
}

pub fn volumes(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.volume).collect()
}

/// Simple period returns, aligned with the input: the first element is `0.0`.
pub fn simple_returns(closes: &[f64]) -> Vec<f64> {
    let mut returns = Vec::with_capacity(closes.len());
    if !closes.is_empty() {
        returns.push(0.0);
    }
    returns.extend(closes.windows(2).map(|w| (w[1] - w[0]) / w[0]));
    returns
}
