//! Product search.
//!
//! Two flavours:
//! - [`keyword_search`]: every query term must appear somewhere in a
//!   product's name, brand, id or tags. Used by the search endpoint.
//! - [`SearchIndex`]: ranked, typo-tolerant search weighting matches in
//!   the name above brand and tags, for type-ahead style lookups.

use serde::Serialize;
use serde_json::Value;
use strsim::normalized_levenshtein;

use crate::models::{Category, Product};

/// Longest query (in characters) considered.
pub const MAX_QUERY_CHARS: usize = 100;

/// Shortest query the ranked index answers.
pub const MIN_QUERY_CHARS: usize = 2;

/// Default number of ranked results.
pub const DEFAULT_LIMIT: usize = 20;

const NAME_WEIGHT: f64 = 0.5;
const BRAND_WEIGHT: f64 = 0.3;
const TAGS_WEIGHT: f64 = 0.2;

/// Ranked hits below this relevance are dropped.
const MIN_RELEVANCE: f64 = 0.1;

/// Edit-distance similarity a fuzzy match needs (a 0.4 distance threshold).
const FUZZY_THRESHOLD: f64 = 0.6;

/// Fuzzy matches rank below any literal substring match.
const FUZZY_WEIGHT: f64 = 0.7;

/// Fields a product exposes to search.
pub trait Searchable {
    fn search_id(&self) -> &str;
    fn search_name(&self) -> &str;
    fn search_brand(&self) -> &str;
    fn search_tags(&self) -> Vec<&str>;

    /// Lowercased "name brand id tags" haystack.
    fn haystack(&self) -> String {
        let mut parts = vec![self.search_name(), self.search_brand(), self.search_id()];
        parts.extend(self.search_tags());
        parts.join(" ").to_lowercase()
    }
}

impl<A> Searchable for Product<A> {
    fn search_id(&self) -> &str {
        &self.id
    }

    fn search_name(&self) -> &str {
        &self.name
    }

    fn search_brand(&self) -> &str {
        &self.brand
    }

    fn search_tags(&self) -> Vec<&str> {
        self.recommendation_tags.iter().map(String::as_str).collect()
    }
}

/// Raw JSON product records, as served by the listing endpoint.
impl Searchable for Value {
    fn search_id(&self) -> &str {
        self["id"].as_str().unwrap_or_default()
    }

    fn search_name(&self) -> &str {
        self["name"].as_str().unwrap_or_default()
    }

    fn search_brand(&self) -> &str {
        self["brand"].as_str().unwrap_or_default()
    }

    fn search_tags(&self) -> Vec<&str> {
        self["recommendation_tags"]
            .as_array()
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Normalizes a raw query: trimmed, capped at [`MAX_QUERY_CHARS`],
/// lowercased.
pub fn normalize_query(raw: &str) -> String {
    raw.trim()
        .chars()
        .take(MAX_QUERY_CHARS)
        .collect::<String>()
        .to_lowercase()
}

/// Whitespace-separated terms of a normalized query.
pub fn query_terms(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}

/// Whether every term occurs in the product's haystack.
pub fn matches_terms<T: Searchable + ?Sized>(item: &T, terms: &[&str]) -> bool {
    let haystack = item.haystack();
    terms.iter().all(|term| haystack.contains(term))
}

/// Items matching every term, in input order, stopping at `limit`.
pub fn keyword_search<'a, T, I>(items: I, terms: &[&str], limit: usize) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter(|item| matches_terms(*item, terms))
        .take(limit)
        .collect()
}

/// Flattened view of a product for ranked search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableProduct {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: Category,
    /// Recommendation tags joined by spaces.
    pub tags: String,
    pub price_low: f64,
    pub price_high: f64,
}

impl<A> From<&Product<A>> for SearchableProduct {
    fn from(product: &Product<A>) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category,
            tags: product.recommendation_tags.join(" "),
            price_low: product.price_range_usd[0],
            price_high: product.price_range_usd[1],
        }
    }
}

/// A ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    pub product: &'a SearchableProduct,
    /// Weighted relevance in `0..=1`, higher is better.
    pub relevance: f64,
}

/// Ranked search over products of any category.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    products: Vec<SearchableProduct>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds products to the index.
    pub fn extend<A>(&mut self, products: &[Product<A>]) {
        self.products.extend(products.iter().map(SearchableProduct::from));
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products ranked by relevance to `query`, best first.
    ///
    /// Queries shorter than [`MIN_QUERY_CHARS`] return nothing. Equal
    /// relevance keeps index order.
    pub fn search(
        &self,
        query: &str,
        category: Option<Category>,
        limit: Option<usize>,
    ) -> Vec<SearchHit<'_>> {
        let query = normalize_query(query);
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter_map(|product| {
                let relevance = NAME_WEIGHT * field_score(&product.name, &query)
                    + BRAND_WEIGHT * field_score(&product.brand, &query)
                    + TAGS_WEIGHT * field_score(&product.tags, &query);
                (relevance >= MIN_RELEVANCE).then_some(SearchHit { product, relevance })
            })
            .collect();

        hits.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
        hits.truncate(limit.unwrap_or(DEFAULT_LIMIT));
        hits
    }
}

/// How well `query` matches one field, in `0..=1`.
///
/// Whole-field matches beat prefixes, which beat word prefixes, which beat
/// substrings. Anything else is scored by edit distance, so small typos
/// still match.
fn field_score(field: &str, query: &str) -> f64 {
    let field = field.to_lowercase();
    if field.is_empty() {
        return 0.0;
    }
    literal_score(&field, query).max(fuzzy_score(&field, query))
}

fn literal_score(field: &str, query: &str) -> f64 {
    if field == query {
        return 1.0;
    }
    if field.starts_with(query) {
        return 0.9;
    }
    if field.split_whitespace().any(|word| word.starts_with(query)) {
        return 0.8;
    }
    if field.contains(query) {
        return 0.6;
    }

    let terms = query_terms(query);
    if terms.len() < 2 {
        return 0.0;
    }
    let found = terms.iter().filter(|t| field.contains(*t)).count();
    0.5 * found as f64 / terms.len() as f64
}

/// Mean best-word similarity of the query terms, or the similarity of the
/// whole field when that is higher. Zero below [`FUZZY_THRESHOLD`].
fn fuzzy_score(field: &str, query: &str) -> f64 {
    let words: Vec<&str> = field.split_whitespace().collect();
    let terms = query_terms(query);
    if words.is_empty() || terms.is_empty() {
        return 0.0;
    }

    let matched: f64 = terms
        .iter()
        .map(|term| {
            words
                .iter()
                .map(|word| normalized_levenshtein(term, word))
                .fold(0.0, f64::max)
        })
        .filter(|&similarity| similarity >= FUZZY_THRESHOLD)
        .sum();
    let similarity = (matched / terms.len() as f64).max(normalized_levenshtein(field, query));

    if similarity >= FUZZY_THRESHOLD {
        FUZZY_WEIGHT * similarity
    } else {
        0.0
    }
}
