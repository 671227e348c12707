//! Hard pre-filters applied before scoring.
//!
//! A pre-filter eliminates products that can never satisfy an answer (a
//! wired mouse for someone who picked wireless, a headset without a mic when
//! the mic is essential). Soft preferences such as budget stay with the
//! scoring rules; only the server's candidate endpoint adds a budget ceiling.
//!
//! # Usage
//!
//! ```
//! use gearmatch::answers::{HandSize, MouseAnswers, WirelessChoice};
//! use gearmatch::filtering::{apply_pre_filters, CategoryFilters};
//! use gearmatch::models::MouseProduct;
//!
//! let answers = MouseAnswers::new(HandSize::Medium, WirelessChoice::Wireless);
//! let products: Vec<MouseProduct> = Vec::new();
//! let result = apply_pre_filters(&answers, &products, MouseAnswers::pre_filters());
//! assert_eq!(result.total, 0);
//! ```

mod audio;
mod keyboard;
mod monitor;
mod mouse;

use serde::Serialize;
use tracing::debug;

use crate::answers::{Answers, AudioAnswers, KeyboardAnswers, MonitorAnswers, MouseAnswers};
use crate::models::{
    AudioAttributes, CoreAttributes, KeyboardAttributes, MonitorAttributes, MouseAttributes,
    Product,
};

/// Default cap on candidate IDs returned by [`candidate_ids`].
pub const DEFAULT_MAX_CANDIDATES: usize = 200;

/// Largest accepted candidate cap.
pub const MAX_CANDIDATES_LIMIT: usize = 500;

/// Returns `true` to keep the product.
pub type PreFilter<A, P> = fn(&A, &Product<P>) -> bool;

/// Products that survived pre-filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct PreFilterResult<P> {
    pub filtered: Vec<Product<P>>,
    /// Number of products removed.
    pub eliminated: usize,
    /// Number of products before filtering.
    pub total: usize,
}

/// Keeps the products that pass every filter, in input order.
pub fn apply_pre_filters<A, P: Clone>(
    answers: &A,
    products: &[Product<P>],
    filters: &[PreFilter<A, P>],
) -> PreFilterResult<P> {
    let filtered: Vec<Product<P>> = products
        .iter()
        .filter(|p| filters.iter().all(|f| f(answers, p)))
        .cloned()
        .collect();

    PreFilterResult {
        eliminated: products.len() - filtered.len(),
        total: products.len(),
        filtered,
    }
}

/// Ties a category's answers to its product attributes and hard filters.
pub trait CategoryFilters: Answers + Sized + 'static {
    type Attributes: CoreAttributes + Clone + 'static;

    /// Hard filters in evaluation order.
    fn pre_filters() -> &'static [PreFilter<Self, Self::Attributes>];
}

impl CategoryFilters for MouseAnswers {
    type Attributes = MouseAttributes;

    fn pre_filters() -> &'static [PreFilter<Self, Self::Attributes>] {
        mouse::PRE_FILTERS
    }
}

impl CategoryFilters for AudioAnswers {
    type Attributes = AudioAttributes;

    fn pre_filters() -> &'static [PreFilter<Self, Self::Attributes>] {
        audio::PRE_FILTERS
    }
}

impl CategoryFilters for KeyboardAnswers {
    type Attributes = KeyboardAttributes;

    fn pre_filters() -> &'static [PreFilter<Self, Self::Attributes>] {
        keyboard::PRE_FILTERS
    }
}

impl CategoryFilters for MonitorAnswers {
    type Attributes = MonitorAttributes;

    fn pre_filters() -> &'static [PreFilter<Self, Self::Attributes>] {
        monitor::PRE_FILTERS
    }
}

/// Whether a product's price tier fits under a budget ceiling.
pub fn within_budget<P: CoreAttributes>(ceiling: Option<usize>, product: &Product<P>) -> bool {
    ceiling.map_or(true, |max| product.core_attributes.price_tier().index() <= max)
}

/// Candidate product IDs for the server's filter endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidates {
    pub candidate_ids: Vec<String>,
    pub total_products: usize,
    /// Candidates before the cap was applied.
    pub total_candidates: usize,
    pub returned_candidates: usize,
}

/// Applies the category pre-filters plus the budget ceiling and returns
/// at most `max_candidates` product IDs in catalog order.
pub fn candidate_ids<A: CategoryFilters>(
    answers: &A,
    products: &[Product<A::Attributes>],
    max_candidates: usize,
) -> Candidates {
    let ceiling = answers.budget_ceiling();
    let filters = A::pre_filters();

    let matching: Vec<&str> = products
        .iter()
        .filter(|p| filters.iter().all(|f| f(answers, p)) && within_budget(ceiling, p))
        .map(|p| p.id.as_str())
        .collect();

    let ids: Vec<String> = matching
        .iter()
        .take(max_candidates)
        .map(|id| id.to_string())
        .collect();

    debug!(
        total = products.len(),
        matching = matching.len(),
        returned = ids.len(),
        "Computed filter candidates"
    );

    Candidates {
        total_products: products.len(),
        total_candidates: matching.len(),
        returned_candidates: ids.len(),
        candidate_ids: ids,
    }
}
