//! Rule-based product scoring.
//!
//! Each category has an ordered set of weighted scoring rules. A rule looks
//! at the quiz answers and one product and awards points up to its maximum,
//! optionally explaining why (a reason) or flagging a tradeoff (a concern).
//! The engine normalizes every rule to a percentage, weights it by its share
//! of the total weight and sums the contributions into a 0-100 score.
//!
//! # Usage
//!
//! ```
//! use gearmatch::scoring::rules::mouse;
//!
//! let engine = mouse::engine();
//! assert_eq!(engine.len(), 9);
//! // let ranked = engine.score_products(&answers, &products);
//! ```

mod engine;
mod format;
mod recommend;
pub mod rules;

pub use engine::{BreakdownEntry, ScoredProduct, ScoringEngine, TieBreaker};
pub use format::{format_score, match_quality, top_concerns, top_reasons};
pub use recommend::{
    apply_threshold_and_split, audio_recommendations, keyboard_recommendations,
    monitor_recommendations, mouse_recommendations, prefiltered_recommendations, recommendations,
    AppliedFilters, RecommendationOptions, RecommendationResult, Recommender, ThresholdSplit,
    FALLBACK_CONCERN,
};

use serde::Serialize;
use std::fmt::Debug;

use crate::models::Product;

/// Outcome of evaluating one rule against one product.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuleResult {
    /// Points awarded, between 0 and the rule's maximum.
    pub points: f64,
    /// Why points were awarded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// A tradeoff worth noting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concern: Option<String>,
}

impl RuleResult {
    /// A result with points and no explanation.
    pub fn new(points: f64) -> Self {
        Self {
            points,
            reason: None,
            concern: None,
        }
    }

    /// A result with points and a reason.
    pub fn matched(points: f64, reason: impl Into<String>) -> Self {
        Self::new(points).with_reason(reason)
    }

    /// A result with points and a concern.
    pub fn flagged(points: f64, concern: impl Into<String>) -> Self {
        Self::new(points).with_concern(concern)
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_concern(mut self, concern: impl Into<String>) -> Self {
        self.concern = Some(concern.into());
        self
    }
}

/// A scoring rule that evaluates how well a product fits quiz answers.
///
/// `A` is the answers type, `P` the category's core attributes.
///
/// # Points Convention
/// **Higher points = better fit.** Rules return points in
/// `0..=max_points()`; the engine relies on that range to keep scores
/// within 0-100.
pub trait ScoringRule<A, P>: Send + Sync + Debug {
    /// Rule name shown in score breakdowns (e.g., "Grip Fit").
    fn name(&self) -> &'static str;

    /// Relative importance of the rule.
    fn weight(&self) -> f64;

    /// Upper bound of the points this rule awards.
    fn max_points(&self) -> f64;

    /// Evaluates one product against the answers.
    fn evaluate(&self, answers: &A, product: &Product<P>) -> RuleResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_result_builders() {
        let r = RuleResult::matched(10.0, "Good");
        assert_eq!(r.reason.as_deref(), Some("Good"));
        assert_eq!(r.concern, None);

        let r = RuleResult::flagged(2.0, "Bad").with_reason("Partly good");
        assert_eq!(r.points, 2.0);
        assert_eq!(r.concern.as_deref(), Some("Bad"));
        assert_eq!(r.reason.as_deref(), Some("Partly good"));
    }
}
