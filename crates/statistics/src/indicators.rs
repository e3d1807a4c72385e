//! Classic technical indicators.
//!
//! Unlike the window statistics in [`crate::moments`], several of these walk
//! the whole supplied history (EMA, RSI, ADX), so their output depends on where
//! the series starts.

use crate::moments::{sma, stddev};
use core_types::PricePoint;
use serde::{Deserialize, Serialize};
use ta::indicators::ExponentialMovingAverage;
use ta::Next;

/// Exponential moving average over the entire series.
///
/// Seeded with the first element, multiplier `k = 2 / (period + 1)`.
/// Returns `0.0` for an empty series or a zero period.
pub fn ema(series: &[f64], period: usize) -> f64 {
    let Ok(mut indicator) = ExponentialMovingAverage::new(period) else {
        return 0.0;
    };
    series.iter().fold(0.0, |_, &value| indicator.next(value))
}

/// Relative Strength Index with Wilder's smoothing, computed on `price`.
///
/// Average gain and loss are seeded from the first `period` price changes of
/// the series and then smoothed recursively over the remainder. Returns `50.0`
/// when there are fewer than `period + 1` points and `100.0` when the average
/// loss ends at zero.
pub fn rsi(points: &[PricePoint], period: usize) -> f64 {
    if period == 0 || points.len() < period + 1 {
        return 50.0;
    }
    let p = period as f64;

    let changes: Vec<f64> = points.windows(2).map(|w| w[1].price - w[0].price).collect();

    let (gains, losses) = changes[..period].iter().fold((0.0, 0.0), |(g, l), &c| {
        if c > 0.0 { (g + c, l) } else { (g, l - c) }
    });
    let mut avg_gain = gains / p;
    let mut avg_loss = losses / p;

    for &change in &changes[period..] {
        let gain = if change > 0.0 { change } else { 0.0 };
        let loss = if change < 0.0 { -change } else { 0.0 };
        avg_gain = (avg_gain * (p - 1.0) + gain) / p;
        avg_loss = (avg_loss * (p - 1.0) + loss) / p;
    }

    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Bollinger bands of the trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub lower: f64,
    /// Band width normalized by the middle band.
    pub width: f64,
}

impl BollingerBands {
    /// Position of `price` within the bands (%B). Below 0 or above 1 means the
    /// price is outside the bands.
    pub fn percent_b(&self, price: f64) -> f64 {
        (price - self.lower) / (self.upper - self.lower)
    }
}

/// Bollinger bands over the last `period` values with `k` standard deviations.
/// `None` when the series is shorter than `period`.
pub fn bollinger(series: &[f64], period: usize, k: f64) -> Option<BollingerBands> {
    if period == 0 || series.len() < period {
        return None;
    }
    let middle = sma(series, period);
    let std = stddev(series, period);
    Some(BollingerBands {
        upper: middle + std * k,
        lower: middle - std * k,
        width: (std * k * 2.0) / middle,
    })
}

/// Average Directional Index together with the latest directional indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionalIndex {
    pub adx: f64,
    /// +DI
    pub pdi: f64,
    /// -DI
    pub mdi: f64,
}

/// Wilder smoothing: SMA of the first `period` values, then
/// `(prev * (period - 1) + next) / period` for each remaining value.
fn wilder_smooth(values: &[f64], period: usize) -> Vec<f64> {
    let p = period as f64;
    let seed = values[..period].iter().sum::<f64>() / p;
    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(seed);
    for &value in &values[period..] {
        let prev = out[out.len() - 1];
        out.push((prev * (p - 1.0) + value) / p);
    }
    out
}

/// ADX with +DI / -DI over the whole series.
///
/// True range uses the previous bar's closing `price`. Returns all zeros when
/// fewer than `2 * period` bars are available.
pub fn adx(points: &[PricePoint], period: usize) -> DirectionalIndex {
    if period == 0 || points.len() < period * 2 {
        return DirectionalIndex::default();
    }

    let bars = points.len() - 1;
    let mut trs = Vec::with_capacity(bars);
    let mut plus_dm = Vec::with_capacity(bars);
    let mut minus_dm = Vec::with_capacity(bars);

    for pair in points.windows(2) {
        let (prev, bar) = (&pair[0], &pair[1]);
        let tr = (bar.high - bar.low)
            .max((bar.high - prev.price).abs())
            .max((bar.low - prev.price).abs());
        trs.push(tr);

        let up_move = bar.high - prev.high;
        let down_move = prev.low - bar.low;
        plus_dm.push(if up_move > down_move && up_move > 0.0 { up_move } else { 0.0 });
        minus_dm.push(if down_move > up_move && down_move > 0.0 { down_move } else { 0.0 });
    }

    let smoothed_tr = wilder_smooth(&trs, period);
    let smoothed_plus = wilder_smooth(&plus_dm, period);
    let smoothed_minus = wilder_smooth(&minus_dm, period);

    let mut pdi = 0.0;
    let mut mdi = 0.0;
    let mut dxs = Vec::with_capacity(smoothed_tr.len());
    for ((tr, plus), minus) in smoothed_tr.iter().zip(&smoothed_plus).zip(&smoothed_minus) {
        pdi = plus / tr * 100.0;
        mdi = minus / tr * 100.0;
        dxs.push((pdi - mdi).abs() / (pdi + mdi) * 100.0);
    }

    let adx = wilder_smooth(&dxs, period);
    DirectionalIndex {
        adx: adx[adx.len() - 1],
        pdi,
        mdi,
    }
}
