//! # AlphaDesk Signal Aggregator
//!
//! Folds a list of factor readings into a single directional verdict.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** Depends only on `core-types`. No I/O, no configuration.
//! - **Stateless Calculation:** `SignalAggregator` takes the factor list and
//!   returns an `OverallSignal`. Identical input always gives identical output.
//!
//! ## Public API
//!
//! - `SignalAggregator` / `aggregate`: the calculation.
//! - `OverallSignal`, `SignalLabel`: the result types.

pub mod engine;
pub mod report;

pub use engine::{aggregate, SignalAggregator, LONG_THRESHOLD, SHORT_THRESHOLD};
pub use report::{OverallSignal, SignalLabel};
