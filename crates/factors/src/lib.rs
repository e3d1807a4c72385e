//! # AlphaDesk Factor Library
//!
//! This crate turns a daily price series into a list of scored, labelled
//! factor readings. Each factor is a small formula over the series: a
//! "101 Formulaic Alphas" style signal, a statistical moment, a classic
//! technical indicator, or a comparison against a reference instrument.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O. Inputs are slices of `PricePoint`s plus the
//!   analysis parameters and the enabled-factor table from `configuration`.
//! - **One Evaluator Per Factor:** Every catalog entry implements the
//!   `FactorEvaluator` trait. The `FactorEngine` runs the enabled ones in
//!   catalog order over a shared `SeriesContext`.
//! - **Extensibility:** Adding a factor means adding a `FactorId` variant in
//!   `core-types`, an evaluator here, and a line in the `factory`.
//!
//! ## Public API
//!
//! - `FactorEngine` / `evaluate`: run the enabled factors over a series.
//! - `FactorEvaluator`: the trait every factor implements.
//! - `create_evaluator`: the factory from `FactorId` to evaluator.

pub mod alpha101;
pub mod context;
pub mod engine;
pub mod factory;
pub mod relative;
pub mod statistical;
pub mod technical;
mod util;

pub use alpha101::{Alpha006, Alpha009, Alpha012};
pub use context::SeriesContext;
pub use engine::{evaluate, FactorEngine, MIN_OBSERVATIONS};
pub use factory::{catalog, create_evaluator};
pub use relative::RelativeAlpha;
pub use statistical::{ReturnSkew, TsRank20, VolRatio};
pub use technical::{AdxTrend, BollingerPercentB, MacdTrend, RsiReversion};

use configuration::AnalysisParams;
use core_types::{Factor, FactorId};

/// The interface shared by every factor in the catalog.
///
/// Evaluators hold no state; the `Send + Sync` bounds let one engine be
/// shared across tasks.
pub trait FactorEvaluator: Send + Sync {
    /// The catalog entry this evaluator produces.
    fn id(&self) -> FactorId;

    /// Computes the factor over the prepared series.
    ///
    /// Returns `None` when the factor's own data requirements are not met
    /// (for example a reference series that is too short).
    fn evaluate(&self, ctx: &SeriesContext<'_>, params: &AnalysisParams) -> Option<Factor>;
}
