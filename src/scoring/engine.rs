//! Scoring engine.
//!
//! Composes weighted scoring rules into a single 0-100 match score with a
//! per-rule breakdown and the collected reasons and concerns.

use std::sync::Arc;

use serde::Serialize;

use super::{RuleResult, ScoringRule};
use crate::models::Product;

/// How equal scores are ordered after ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep input order (stable sort).
    #[default]
    InputOrder,
    /// Deterministic by product ID (lexicographic).
    ById,
}

/// One rule's contribution to a product's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    /// Rule name.
    pub name: &'static str,
    /// Points earned.
    pub score: f64,
    /// Maximum possible points.
    pub max_score: f64,
    /// Rule weight.
    pub weight: f64,
    /// Reason, else concern, else "Evaluated".
    pub details: String,
}

/// A product with its match score and explanations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProduct<P> {
    pub product: Product<P>,
    /// Overall match score (0-100).
    pub score: u32,
    /// Per-rule breakdown in rule order.
    pub breakdown: Vec<BreakdownEntry>,
    pub match_reasons: Vec<String>,
    pub concerns: Vec<String>,
}

impl<P> ScoredProduct<P> {
    /// Breakdown entry for the named rule.
    pub fn rule(&self, name: &str) -> Option<&BreakdownEntry> {
        self.breakdown.iter().find(|e| e.name == name)
    }
}

type Rule<A, P> = Arc<dyn ScoringRule<A, P>>;

/// An ordered set of weighted scoring rules.
///
/// # Example
/// ```
/// use gearmatch::scoring::{ScoringEngine, TieBreaker};
/// use gearmatch::scoring::rules::keyboard::{FormFactor, PrimaryUse};
///
/// let engine = ScoringEngine::new()
///     .with_rule(PrimaryUse)
///     .with_rule(FormFactor)
///     .with_final_tie_breaker(TieBreaker::ById);
/// assert_eq!(engine.len(), 2);
/// ```
pub struct ScoringEngine<A, P> {
    rules: Vec<Rule<A, P>>,
    tie_breaker: TieBreaker,
}

impl<A, P> ScoringEngine<A, P> {
    /// Creates an empty engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Appends a rule.
    pub fn with_rule<R: ScoringRule<A, P> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the ordering of equal scores.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sum of all rule weights.
    pub fn total_weight(&self) -> f64 {
        self.rules.iter().map(|r| r.weight()).sum()
    }

    /// Scores a single product.
    ///
    /// Each rule contributes `points / max_points * 100 * weight /
    /// total_weight`; the sum is rounded to the nearest integer.
    pub fn score_product(&self, answers: &A, product: &Product<P>) -> ScoredProduct<P>
    where
        P: Clone,
    {
        let total_weight = self.total_weight();
        let mut breakdown = Vec::with_capacity(self.rules.len());
        let mut match_reasons = Vec::new();
        let mut concerns = Vec::new();
        let mut weighted_sum = 0.0;

        for rule in &self.rules {
            let RuleResult {
                points,
                reason,
                concern,
            } = rule.evaluate(answers, product);

            if total_weight > 0.0 && rule.max_points() > 0.0 {
                let percentage = points / rule.max_points() * 100.0;
                weighted_sum += percentage * (rule.weight() / total_weight);
            }

            let details = reason
                .clone()
                .or_else(|| concern.clone())
                .unwrap_or_else(|| "Evaluated".to_string());

            breakdown.push(BreakdownEntry {
                name: rule.name(),
                score: points,
                max_score: rule.max_points(),
                weight: rule.weight(),
                details,
            });

            match_reasons.extend(reason);
            concerns.extend(concern);
        }

        ScoredProduct {
            product: product.clone(),
            score: weighted_sum.round().max(0.0) as u32,
            breakdown,
            match_reasons,
            concerns,
        }
    }

    /// Scores every product and sorts by score, highest first.
    pub fn score_products(&self, answers: &A, products: &[Product<P>]) -> Vec<ScoredProduct<P>>
    where
        P: Clone,
    {
        let mut scored: Vec<ScoredProduct<P>> = products
            .iter()
            .map(|p| self.score_product(answers, p))
            .collect();

        match self.tie_breaker {
            TieBreaker::InputOrder => scored.sort_by(|a, b| b.score.cmp(&a.score)),
            TieBreaker::ById => scored.sort_by(|a, b| {
                b.score
                    .cmp(&a.score)
                    .then_with(|| a.product.id.cmp(&b.product.id))
            }),
        }

        scored
    }
}

impl<A, P> Default for ScoringEngine<A, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, P> Clone for ScoringEngine<A, P> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            tie_breaker: self.tie_breaker.clone(),
        }
    }
}

impl<A, P> std::fmt::Debug for ScoringEngine<A, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringEngine")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(w={})", r.name(), r.weight()))
                    .collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, MouseAttributes};
    use proptest::prelude::*;

    type Mouse = Product<MouseAttributes>;

    /// Awards a fixed fraction of its maximum.
    #[derive(Debug)]
    struct Fixed {
        name: &'static str,
        weight: f64,
        max: f64,
        points: f64,
    }

    impl ScoringRule<(), MouseAttributes> for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }
        fn weight(&self) -> f64 {
            self.weight
        }
        fn max_points(&self) -> f64 {
            self.max
        }
        fn evaluate(&self, _answers: &(), _product: &Mouse) -> RuleResult {
            if self.points >= self.max / 2.0 {
                RuleResult::matched(self.points, format!("{} ok", self.name))
            } else {
                RuleResult::flagged(self.points, format!("{} weak", self.name))
            }
        }
    }

    /// Scores by the product's minimum price.
    #[derive(Debug)]
    struct Cheapness;

    impl ScoringRule<(), MouseAttributes> for Cheapness {
        fn name(&self) -> &'static str {
            "Cheapness"
        }
        fn weight(&self) -> f64 {
            1.0
        }
        fn max_points(&self) -> f64 {
            100.0
        }
        fn evaluate(&self, _answers: &(), product: &Mouse) -> RuleResult {
            RuleResult::new((100.0 - product.min_price()).clamp(0.0, 100.0))
        }
    }

    fn mouse(id: &str, price: f64) -> Mouse {
        Mouse::new(id, Category::Mouse).with_price(price, price)
    }

    #[test]
    fn test_weighted_normalization() {
        let engine = ScoringEngine::new()
            .with_rule(Fixed {
                name: "A",
                weight: 0.5,
                max: 25.0,
                points: 20.0,
            })
            .with_rule(Fixed {
                name: "B",
                weight: 0.25,
                max: 10.0,
                points: 4.0,
            });

        let scored = engine.score_product(&(), &mouse("m", 50.0));
        // 20/25 at weight 0.5, 4/10 at weight 0.25: 80 * 2/3 + 40 * 1/3 = 66.67
        assert_eq!(scored.score, 67);
        assert_eq!(scored.match_reasons, vec!["A ok".to_string()]);
        assert_eq!(scored.concerns, vec!["B weak".to_string()]);
        assert_eq!(scored.breakdown.len(), 2);
        assert_eq!(scored.rule("B").map(|e| e.details.as_str()), Some("B weak"));
        assert_eq!(scored.rule("A").map(|e| e.max_score), Some(25.0));
    }

    #[test]
    fn test_breakdown_details_fallback() {
        let engine = ScoringEngine::new().with_rule(Cheapness);
        let scored = engine.score_product(&(), &mouse("m", 30.0));
        assert_eq!(scored.score, 70);
        assert_eq!(scored.breakdown[0].details, "Evaluated");
        assert!(scored.match_reasons.is_empty());
    }

    #[test]
    fn test_score_products_sorted_descending() {
        let engine = ScoringEngine::new().with_rule(Cheapness);
        let products = vec![mouse("pricey", 90.0), mouse("cheap", 10.0), mouse("mid", 50.0)];

        let ranked = engine.score_products(&(), &products);
        let ids: Vec<&str> = ranked.iter().map(|s| s.product.id.as_str()).collect();
        assert_eq!(ids, vec!["cheap", "mid", "pricey"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let engine = ScoringEngine::new().with_rule(Cheapness);
        let products = vec![mouse("b", 20.0), mouse("a", 20.0)];

        let ranked = engine.score_products(&(), &products);
        assert_eq!(ranked[0].product.id, "b");
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let engine = ScoringEngine::new()
            .with_rule(Cheapness)
            .with_final_tie_breaker(TieBreaker::ById);
        let products = vec![mouse("b", 20.0), mouse("a", 20.0)];

        let ranked = engine.score_products(&(), &products);
        assert_eq!(ranked[0].product.id, "a");
    }

    #[test]
    fn test_empty_engine_and_products() {
        let engine: ScoringEngine<(), MouseAttributes> = ScoringEngine::new();
        assert!(engine.is_empty());
        assert_eq!(engine.score_product(&(), &mouse("m", 1.0)).score, 0);
        assert!(engine.score_products(&(), &[]).is_empty());
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = ScoringEngine::new().with_rule(Cheapness);
        let debug = format!("{engine:?}");
        assert!(debug.contains("Cheapness(w=1)"));
    }

    proptest! {
        #[test]
        fn prop_score_within_bounds(
            fractions in proptest::collection::vec((0.0f64..=1.0, 0.01f64..=1.0, 1.0f64..=50.0), 1..12)
        ) {
            let mut engine = ScoringEngine::new();
            for (i, (fraction, weight, max)) in fractions.iter().enumerate() {
                let name: &'static str = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"][i];
                engine = engine.with_rule(Fixed {
                    name,
                    weight: *weight,
                    max: *max,
                    points: fraction * max,
                });
            }

            let scored = engine.score_product(&(), &mouse("m", 10.0));
            prop_assert!(scored.score <= 100);
            prop_assert_eq!(scored.breakdown.len(), fractions.len());
        }
    }
}
