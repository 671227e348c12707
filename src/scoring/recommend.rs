//! Recommendation pipeline: score, apply the minimum score and split into
//! top picks and alternates.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rules::{audio, keyboard, monitor, mouse};
use super::{ScoredProduct, ScoringEngine};
use crate::answers::{
    AudioAnswers, ConnectivityPreference, KeyboardAnswers, MonitorAnswers, MouseAnswers,
    WirelessChoice,
};
use crate::filtering::{apply_pre_filters, CategoryFilters};
use crate::models::{
    AudioAttributes, AudioProduct, Category, KeyboardAttributes, KeyboardProduct,
    MonitorAttributes, MonitorProduct, MouseAttributes, MouseProduct, Product,
};

/// Concern prepended to below-threshold results shown as a fallback.
pub const FALLBACK_CONCERN: &str = "Lower match score - may not be an ideal fit";

/// How many results are shown when nothing reaches the minimum score.
const FALLBACK_COUNT: usize = 5;

/// Thresholds for a recommendation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationOptions {
    /// Minimum score for a product to qualify.
    pub min_score: u32,
    /// Number of qualifying products shown as top picks.
    pub top_pick_count: usize,
}

impl Default for RecommendationOptions {
    fn default() -> Self {
        Self {
            min_score: 50,
            top_pick_count: 3,
        }
    }
}

/// Qualifying products split into top picks and the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdSplit<P> {
    pub top_picks: Vec<ScoredProduct<P>>,
    pub alternates: Vec<ScoredProduct<P>>,
}

/// Keeps products scoring at least `min_score` and splits off the first
/// `top_pick_count` as top picks.
///
/// When nothing qualifies, the best five are kept instead and each gets
/// [`FALLBACK_CONCERN`] as its first concern.
pub fn apply_threshold_and_split<P>(
    scored: Vec<ScoredProduct<P>>,
    min_score: u32,
    top_pick_count: usize,
) -> ThresholdSplit<P> {
    let has_products = !scored.is_empty();
    let mut qualifying: Vec<ScoredProduct<P>> = Vec::with_capacity(scored.len());
    let mut rest = Vec::new();
    for sp in scored {
        if sp.score >= min_score {
            qualifying.push(sp);
        } else {
            rest.push(sp);
        }
    }

    if qualifying.is_empty() && has_products {
        qualifying = rest.into_iter().take(FALLBACK_COUNT).collect();
        for sp in &mut qualifying {
            if !sp.concerns.iter().any(|c| c == FALLBACK_CONCERN) {
                sp.concerns.insert(0, FALLBACK_CONCERN.to_string());
            }
        }
    }

    let alternates = qualifying.split_off(top_pick_count.min(qualifying.len()));
    ThresholdSplit {
        top_picks: qualifying,
        alternates,
    }
}

/// Hard filters that shaped a recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilters {
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wireless: Option<bool>,
}

impl AppliedFilters {
    fn new(category: Category) -> Self {
        Self {
            category,
            price_range: None,
            wireless: None,
        }
    }
}

/// Ranked recommendations for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult<P> {
    pub top_picks: Vec<ScoredProduct<P>>,
    pub alternates: Vec<ScoredProduct<P>>,
    pub filters: AppliedFilters,
    /// Products considered, before any pre-filtering.
    pub total_evaluated: usize,
}

/// A category's answers together with its scoring rules.
pub trait Recommender: CategoryFilters {
    const CATEGORY: Category;

    /// Rule engine for this category.
    fn engine() -> ScoringEngine<Self, Self::Attributes>;

    /// Whether the answers demand a wireless product.
    fn requires_wireless(&self) -> bool {
        false
    }

    fn applied_filters(&self) -> AppliedFilters {
        AppliedFilters {
            wireless: self.requires_wireless().then_some(true),
            ..AppliedFilters::new(Self::CATEGORY)
        }
    }
}

impl Recommender for MouseAnswers {
    const CATEGORY: Category = Category::Mouse;

    fn engine() -> ScoringEngine<Self, MouseAttributes> {
        mouse::engine()
    }

    fn requires_wireless(&self) -> bool {
        self.wireless == WirelessChoice::Wireless
    }
}

impl Recommender for AudioAnswers {
    const CATEGORY: Category = Category::Audio;

    fn engine() -> ScoringEngine<Self, AudioAttributes> {
        audio::engine()
    }
}

impl Recommender for KeyboardAnswers {
    const CATEGORY: Category = Category::Keyboard;

    fn engine() -> ScoringEngine<Self, KeyboardAttributes> {
        keyboard::engine()
    }

    fn requires_wireless(&self) -> bool {
        self.connectivity == ConnectivityPreference::WirelessEssential
    }
}

impl Recommender for MonitorAnswers {
    const CATEGORY: Category = Category::Monitor;

    fn engine() -> ScoringEngine<Self, MonitorAttributes> {
        monitor::engine()
    }
}

/// Scores every supplied product with the category rules.
pub fn recommendations<A: Recommender>(
    answers: &A,
    products: &[Product<A::Attributes>],
    options: &RecommendationOptions,
) -> RecommendationResult<A::Attributes> {
    let scored = A::engine().score_products(answers, products);
    let split = apply_threshold_and_split(scored, options.min_score, options.top_pick_count);

    debug!(
        category = %A::CATEGORY,
        evaluated = products.len(),
        top_picks = split.top_picks.len(),
        alternates = split.alternates.len(),
        "Scored recommendations"
    );

    RecommendationResult {
        top_picks: split.top_picks,
        alternates: split.alternates,
        filters: answers.applied_filters(),
        total_evaluated: products.len(),
    }
}

/// Runs the category pre-filters, then scores the survivors.
///
/// `total_evaluated` still counts every supplied product.
pub fn prefiltered_recommendations<A: Recommender>(
    answers: &A,
    products: &[Product<A::Attributes>],
    options: &RecommendationOptions,
) -> RecommendationResult<A::Attributes> {
    let pre = apply_pre_filters(answers, products, A::pre_filters());
    debug!(
        category = %A::CATEGORY,
        total = pre.total,
        eliminated = pre.eliminated,
        "Applied pre-filters"
    );

    RecommendationResult {
        total_evaluated: pre.total,
        ..recommendations(answers, &pre.filtered, options)
    }
}

pub fn mouse_recommendations(
    answers: &MouseAnswers,
    products: &[MouseProduct],
    options: &RecommendationOptions,
) -> RecommendationResult<MouseAttributes> {
    recommendations(answers, products, options)
}

pub fn audio_recommendations(
    answers: &AudioAnswers,
    products: &[AudioProduct],
    options: &RecommendationOptions,
) -> RecommendationResult<AudioAttributes> {
    recommendations(answers, products, options)
}

pub fn keyboard_recommendations(
    answers: &KeyboardAnswers,
    products: &[KeyboardProduct],
    options: &RecommendationOptions,
) -> RecommendationResult<KeyboardAttributes> {
    recommendations(answers, products, options)
}

pub fn monitor_recommendations(
    answers: &MonitorAnswers,
    products: &[MonitorProduct],
    options: &RecommendationOptions,
) -> RecommendationResult<MonitorAttributes> {
    recommendations(answers, products, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{HandSize, ResolutionPreference, SizePreference};
    use crate::models::MonitorResolutionClass;

    fn scored(id: &str, score: u32) -> ScoredProduct<()> {
        ScoredProduct {
            product: Product::new(id, Category::Mouse),
            score,
            breakdown: Vec::new(),
            match_reasons: Vec::new(),
            concerns: vec!["Existing concern".to_string()],
        }
    }

    fn ids(list: &[ScoredProduct<()>]) -> Vec<&str> {
        list.iter().map(|sp| sp.product.id.as_str()).collect()
    }

    #[test]
    fn test_options_default() {
        let options = RecommendationOptions::default();
        assert_eq!(options.min_score, 50);
        assert_eq!(options.top_pick_count, 3);

        let parsed: RecommendationOptions =
            serde_json::from_value(serde_json::json!({ "minScore": 70 })).unwrap();
        assert_eq!(parsed.min_score, 70);
        assert_eq!(parsed.top_pick_count, 3);
    }

    #[test]
    fn test_split_qualifying() {
        let input = vec![
            scored("a", 90),
            scored("b", 80),
            scored("c", 60),
            scored("d", 55),
            scored("e", 40),
        ];
        let split = apply_threshold_and_split(input, 50, 3);
        assert_eq!(ids(&split.top_picks), vec!["a", "b", "c"]);
        assert_eq!(ids(&split.alternates), vec!["d"]);
        assert_eq!(split.top_picks[0].concerns, vec!["Existing concern"]);
    }

    #[test]
    fn test_fallback_when_nothing_qualifies() {
        let input: Vec<_> = (0..7).map(|i| scored(&format!("p{i}"), 40 - i)).collect();
        let split = apply_threshold_and_split(input, 50, 3);
        assert_eq!(split.top_picks.len(), 3);
        assert_eq!(split.alternates.len(), 2);
        for sp in split.top_picks.iter().chain(&split.alternates) {
            assert_eq!(sp.concerns[0], FALLBACK_CONCERN);
            assert_eq!(sp.concerns.len(), 2);
        }
    }

    #[test]
    fn test_fallback_concern_not_duplicated() {
        let mut sp = scored("a", 10);
        sp.concerns.insert(0, FALLBACK_CONCERN.to_string());
        let split = apply_threshold_and_split(vec![sp], 50, 3);
        assert_eq!(split.top_picks[0].concerns.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let split = apply_threshold_and_split(Vec::<ScoredProduct<()>>::new(), 50, 3);
        assert!(split.top_picks.is_empty());
        assert!(split.alternates.is_empty());
    }

    #[test]
    fn test_mouse_filters_report_wireless() {
        let answers = MouseAnswers::new(HandSize::Medium, WirelessChoice::Wireless);
        let result = mouse_recommendations(&answers, &[], &RecommendationOptions::default());
        assert_eq!(result.filters.category, Category::Mouse);
        assert_eq!(result.filters.wireless, Some(true));
        assert_eq!(result.total_evaluated, 0);

        let wired = MouseAnswers::new(HandSize::Medium, WirelessChoice::Wired);
        assert_eq!(wired.applied_filters().wireless, None);
    }

    #[test]
    fn test_keyboard_filters_report_wireless() {
        let essential = KeyboardAnswers::new(ConnectivityPreference::WirelessEssential);
        assert_eq!(essential.applied_filters().wireless, Some(true));
        let preferred = KeyboardAnswers::new(ConnectivityPreference::WirelessPreferred);
        assert_eq!(preferred.applied_filters().wireless, None);
    }

    #[test]
    fn test_prefiltered_counts_all_products() {
        let answers = MonitorAnswers::new(SizePreference::Any, ResolutionPreference::P1080);
        let products: Vec<MonitorProduct> = [
            ("fhd", MonitorResolutionClass::P1080),
            ("qhd", MonitorResolutionClass::P1440),
            ("uhd", MonitorResolutionClass::K4),
        ]
        .into_iter()
        .map(|(id, res)| {
            MonitorProduct::new(id, Category::Monitor).with_attributes(MonitorAttributes {
                monitor_resolution_class: res,
                ..MonitorAttributes::default()
            })
        })
        .collect();

        let options = RecommendationOptions {
            min_score: 0,
            top_pick_count: 3,
        };
        let result = prefiltered_recommendations(&answers, &products, &options);
        assert_eq!(result.total_evaluated, 3);
        let mut kept: Vec<_> = result
            .top_picks
            .iter()
            .map(|sp| sp.product.id.as_str())
            .collect();
        kept.sort_unstable();
        assert_eq!(kept, vec!["fhd", "qhd"]);

        let unfiltered = monitor_recommendations(&answers, &products, &options);
        assert_eq!(unfiltered.top_picks.len(), 3);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let answers = MouseAnswers::new(HandSize::Medium, WirelessChoice::Wireless);
        let result = mouse_recommendations(&answers, &[], &RecommendationOptions::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalEvaluated"], 0);
        assert_eq!(json["filters"]["category"], "mouse");
        assert_eq!(json["filters"]["wireless"], true);
        assert!(json["filters"].get("priceRange").is_none());
    }
}
