use crate::context::SeriesContext;
use crate::factory::create_evaluator;
use crate::FactorEvaluator;
use configuration::{AnalysisParams, FactorConfig};
use core_types::{Factor, PricePoint};

/// Below this many target bars no factor is evaluated at all.
pub const MIN_OBSERVATIONS: usize = 30;

/// Runs the enabled factor evaluators over a target series.
///
/// The engine is stateless between calls: the same inputs always produce the
/// same factor list, in catalog order.
pub struct FactorEngine {
    params: AnalysisParams,
    evaluators: Vec<Box<dyn FactorEvaluator>>,
}

impl FactorEngine {
    /// Builds an engine for the factors enabled in `config`.
    ///
    /// `params` are taken as given. Degenerate values such as a zero
    /// `adx_period` make the affected indicators fall back to neutral
    /// readings instead of failing the pass.
    pub fn new(params: AnalysisParams, config: &FactorConfig) -> Self {
        let evaluators = config
            .enabled_ids()
            .into_iter()
            .map(create_evaluator)
            .collect::<Vec<_>>();

        tracing::debug!(enabled = evaluators.len(), "Factor engine initialized");
        Self { params, evaluators }
    }

    /// Evaluates every enabled factor against `target`, using `reference` for
    /// the relative factors.
    ///
    /// Returns an empty list when `target` holds fewer than
    /// [`MIN_OBSERVATIONS`] bars. Factors whose own preconditions are not met
    /// are left out rather than reported as neutral.
    pub fn evaluate(&self, target: &[PricePoint], reference: &[PricePoint]) -> Vec<Factor> {
        if target.len() < MIN_OBSERVATIONS {
            tracing::debug!(
                observations = target.len(),
                required = MIN_OBSERVATIONS,
                "Not enough history to evaluate factors"
            );
            return Vec::new();
        }

        let ctx = SeriesContext::new(target, reference);
        let factors: Vec<Factor> = self
            .evaluators
            .iter()
            .filter_map(|evaluator| {
                let factor = evaluator.evaluate(&ctx, &self.params);
                match &factor {
                    Some(f) => tracing::debug!(
                        id = %f.id,
                        value = %f.value,
                        signal = %f.signal,
                        score = f.score,
                        "Factor evaluated"
                    ),
                    None => tracing::debug!(id = %evaluator.id(), "Factor not applicable"),
                }
                factor
            })
            .collect();

        tracing::info!(
            observations = target.len(),
            evaluated = factors.len(),
            active = factors.iter().filter(|f| f.is_active()).count(),
            "Factor evaluation complete"
        );
        factors
    }
}

/// One-shot convenience wrapper around [`FactorEngine`].
pub fn evaluate(
    target: &[PricePoint],
    reference: &[PricePoint],
    params: &AnalysisParams,
    config: &FactorConfig,
) -> Vec<Factor> {
    FactorEngine::new(*params, config).evaluate(target, reference)
}
