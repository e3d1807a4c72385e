//! # Statistics Library
//!
//! Pure, side-effect-free numeric functions used by the factor catalog.
//!
//! ## Conventions
//!
//! - Window functions operate on the most recent `n` observations.
//! - Short input is not an error: each function documents the neutral value it
//!   returns instead (`0.0` for most, `0.5` for [`ts_rank`], `50.0` for [`rsi`]).
//! - Non-finite input is not validated and propagates through the arithmetic.

pub mod indicators;
pub mod moments;
pub mod series;

pub use indicators::{adx, bollinger, ema, rsi, BollingerBands, DirectionalIndex};
pub use moments::{correlation, covariance, delta, skewness, sma, stddev, ts_rank};
pub use series::{closes, opens, simple_returns, volumes};
