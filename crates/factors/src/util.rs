use core_types::SignalTag;

/// Sign of `x` as `-1`, `0` or `1`. Unlike `f64::signum`, zero maps to zero.
/// `NaN` is passed through.
pub(crate) fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

/// Fixed-point rendering that never shows a negative zero.
pub(crate) fn fixed(value: f64, decimals: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let rendered = format!("{value:.decimals$}");
    // Rounding can still produce "-0.00" for tiny negatives.
    match rendered.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => rendered,
    }
}

/// Bullish above `upper`, bearish below `lower`, neutral in between.
pub(crate) fn band_signal(value: f64, upper: f64, lower: f64) -> SignalTag {
    if value > upper {
        SignalTag::Bullish
    } else if value < lower {
        SignalTag::Bearish
    } else {
        SignalTag::Neutral
    }
}

/// Maps a signal to its score given the bullish and bearish magnitudes.
pub(crate) fn signal_score(signal: SignalTag, bullish: f64, bearish: f64) -> f64 {
    match signal {
        SignalTag::Bullish => bullish,
        SignalTag::Bearish => bearish,
        SignalTag::Neutral => 0.0,
    }
}
