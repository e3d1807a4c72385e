use crate::alpha101::{Alpha006, Alpha009, Alpha012};
use crate::relative::RelativeAlpha;
use crate::statistical::{ReturnSkew, TsRank20, VolRatio};
use crate::technical::{AdxTrend, BollingerPercentB, MacdTrend, RsiReversion};
use crate::FactorEvaluator;
use core_types::FactorId;

/// Creates the evaluator registered under `id`.
///
/// The match is exhaustive, so adding a `FactorId` variant without wiring an
/// evaluator here fails to compile.
pub fn create_evaluator(id: FactorId) -> Box<dyn FactorEvaluator> {
    match id {
        FactorId::Alpha006 => Box::new(Alpha006),
        FactorId::Alpha012 => Box::new(Alpha012),
        FactorId::TsRank20 => Box::new(TsRank20),
        FactorId::StatSkew => Box::new(ReturnSkew),
        FactorId::MathVolRatio => Box::new(VolRatio),
        FactorId::TechAdx => Box::new(AdxTrend),
        FactorId::RelBtcAlpha => Box::new(RelativeAlpha),
        FactorId::TechRsi => Box::new(RsiReversion),
        FactorId::TechBoll => Box::new(BollingerPercentB),
        FactorId::Alpha009 => Box::new(Alpha009),
        FactorId::TechMacd => Box::new(MacdTrend),
    }
}

/// One evaluator per catalog entry, in catalog order.
pub fn catalog() -> Vec<Box<dyn FactorEvaluator>> {
    FactorId::ALL.into_iter().map(create_evaluator).collect()
}
