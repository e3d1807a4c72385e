//! Window statistics over plain numeric sequences.
//!
//! Every function looks at the most recent `n` observations only. When the
//! input is shorter than the window the function returns a neutral default
//! instead of failing; callers rely on that to run on short histories.

/// The last `n` elements, or `None` when the series is too short.
fn tail(series: &[f64], n: usize) -> Option<&[f64]> {
    if n == 0 || series.len() < n {
        None
    } else {
        Some(&series[series.len() - n..])
    }
}

fn mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}

/// Arithmetic mean of the last `n` elements. `0.0` when too short.
pub fn sma(series: &[f64], n: usize) -> f64 {
    tail(series, n).map(mean).unwrap_or(0.0)
}

/// Sample standard deviation (denominator `n - 1`) of the last `n` elements.
/// `0.0` when too short or when `n < 2`.
pub fn stddev(series: &[f64], n: usize) -> f64 {
    match tail(series, n) {
        Some(window) if n > 1 => {
            let m = mean(window);
            let variance =
                window.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - 1) as f64;
            variance.sqrt()
        }
        _ => 0.0,
    }
}

/// Sample covariance of the last `n` elements of two sequences.
pub fn covariance(x: &[f64], y: &[f64], n: usize) -> f64 {
    let (Some(xs), Some(ys)) = (tail(x, n), tail(y, n)) else {
        return 0.0;
    };
    if n < 2 {
        return 0.0;
    }
    let x_mean = mean(xs);
    let y_mean = mean(ys);
    let sum: f64 = xs
        .iter()
        .zip(ys)
        .map(|(a, b)| (a - x_mean) * (b - y_mean))
        .sum();
    sum / (n - 1) as f64
}

/// Pearson correlation of the last `n` elements. `0.0` if either side has no
/// variance.
pub fn correlation(x: &[f64], y: &[f64], n: usize) -> f64 {
    let std_x = stddev(x, n);
    let std_y = stddev(y, n);
    if std_x == 0.0 || std_y == 0.0 {
        return 0.0;
    }
    covariance(x, y, n) / (std_x * std_y)
}

/// Time-series rank of the latest value within its trailing window, in `(0, 1]`.
///
/// The rank is the 1-based position of the first element equal to the latest
/// value in an ascending copy of the window, so ties take the lowest rank.
/// Returns `0.5` when the series is shorter than `n`.
pub fn ts_rank(series: &[f64], n: usize) -> f64 {
    let Some(window) = tail(series, n) else {
        return 0.5;
    };
    let current = window[window.len() - 1];
    let mut sorted = window.to_vec();
    sorted.sort_by(f64::total_cmp);
    let rank = sorted
        .iter()
        .position(|v| *v == current)
        .map(|i| i + 1)
        .unwrap_or(0);
    rank as f64 / n as f64
}

/// Third standardized moment of the last `n` elements.
///
/// The deviations are scaled by the sample standard deviation while the sum of
/// cubes is divided by `n`, which is neither the textbook population nor the
/// adjusted sample estimator. Factor thresholds were tuned against exactly this
/// formula, so it must not be "corrected" in isolation.
pub fn skewness(series: &[f64], n: usize) -> f64 {
    let Some(window) = tail(series, n) else {
        return 0.0;
    };
    let m = mean(window);
    let std = stddev(series, n);
    if std == 0.0 {
        return 0.0;
    }
    window.iter().map(|x| ((x - m) / std).powi(3)).sum::<f64>() / n as f64
}

/// Latest value minus the value `lag` steps earlier. `0.0` when too short.
pub fn delta(series: &[f64], lag: usize) -> f64 {
    if series.len() <= lag {
        return 0.0;
    }
    let last = series.len() - 1;
    series[last] - series[last - lag]
}
