use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use super::{error::ApiError, state::AppState};
use crate::answers::AnswerSet;
use crate::filtering::{candidate_ids, Candidates, DEFAULT_MAX_CANDIDATES, MAX_CANDIDATES_LIMIT};
use crate::models::Category;
use crate::scoring::{prefiltered_recommendations, RecommendationOptions};
use crate::search::{keyword_search, normalize_query, query_terms};

const DEFAULT_PAGE_LIMIT: usize = 50;
const MAX_PAGE_LIMIT: usize = 100;
const DEFAULT_SEARCH_LIMIT: usize = 20;
const MAX_SEARCH_LIMIT: usize = 50;

type Params = Query<HashMap<String, String>>;

/// `GET /api/products/{category}`: one page of a category's raw records.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Params,
) -> Result<Json<Value>, ApiError> {
    let category = Category::from_plural_slug(&slug).ok_or_else(|| ApiError::InvalidCategory {
        valid: Category::ALL.iter().map(|c| c.plural_slug()).collect(),
    })?;

    let page = int_param(&params, "page", 1)
        .filter(|&p| p >= 1)
        .ok_or_else(|| ApiError::bad_request("page must be a positive integer"))?;
    let limit = int_param(&params, "limit", DEFAULT_PAGE_LIMIT)
        .filter(|l| (1..=MAX_PAGE_LIMIT).contains(l))
        .ok_or_else(|| ApiError::bad_request("limit must be between 1 and 100"))?;

    let products = state.catalog.raw(category);
    let total_products = products.len();
    let total_pages = total_products.div_ceil(limit);
    let data: Vec<&Value> = products
        .iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .collect();

    debug!(%category, page, limit, returned = data.len(), "Listed products");

    Ok(Json(json!({
        "data": data,
        "pagination": {
            "page": page,
            "limit": limit,
            "totalProducts": total_products,
            "totalPages": total_pages,
            "hasNextPage": page < total_pages,
            "hasPreviousPage": page > 1,
        },
    })))
}

/// `GET /api/search`: keyword search across one or every category.
pub async fn search_products(
    State(state): State<Arc<AppState>>,
    Query(params): Params,
) -> Result<Json<Value>, ApiError> {
    let raw_query = params
        .get("q")
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("q parameter is required"))?;

    let query = normalize_query(raw_query);
    let terms = query_terms(&query);
    if terms.is_empty() {
        return Err(ApiError::bad_request(
            "q parameter must contain searchable terms",
        ));
    }

    let category = match params.get("category").filter(|c| !c.is_empty()) {
        Some(name) => Some(name.parse::<Category>().map_err(|_| ApiError::InvalidCategory {
            valid: Category::ALL.iter().map(|c| c.as_str()).collect(),
        })?),
        None => None,
    };

    let limit = int_param(&params, "limit", DEFAULT_SEARCH_LIMIT)
        .filter(|l| (1..=MAX_SEARCH_LIMIT).contains(l))
        .ok_or_else(|| ApiError::bad_request("limit must be between 1 and 50"))?;

    let catalog = &state.catalog;
    let results = match category {
        Some(c) => keyword_search(catalog.raw(c), &terms, limit),
        None => keyword_search(catalog.all_raw(), &terms, limit),
    };

    debug!(%query, returned = results.len(), "Searched products");

    Ok(Json(json!({
        "query": query,
        "returnedResults": results.len(),
        "hasMore": results.len() >= limit,
        "category": category,
        "data": results,
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilterRequest {
    category: Category,
    answers: Map<String, Value>,
    max_candidates: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct FilterResponse {
    #[serde(flatten)]
    candidates: Candidates,
    category: Category,
}

/// `POST /api/filter`: IDs of products surviving the hard filters.
pub async fn filter_candidates(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<FilterResponse>, ApiError> {
    let request: FilterRequest = parse_body(&body)?;

    let max = match request.max_candidates {
        None => DEFAULT_MAX_CANDIDATES,
        Some(n) if (1..=MAX_CANDIDATES_LIMIT as u64).contains(&n) => n as usize,
        Some(_) => {
            return Err(ApiError::InvalidRequest {
                details: format!("maxCandidates must be between 1 and {MAX_CANDIDATES_LIMIT}"),
            })
        }
    };

    let category = request.category;
    let answers = AnswerSet::parse(category, Value::Object(request.answers))
        .map_err(|e| ApiError::answers(category, e))?;

    let catalog = &state.catalog;
    let candidates = match &answers {
        AnswerSet::Mouse(a) => candidate_ids(a, &catalog.mice, max),
        AnswerSet::Audio(a) => candidate_ids(a, &catalog.audio, max),
        AnswerSet::Keyboard(a) => candidate_ids(a, &catalog.keyboards, max),
        AnswerSet::Monitor(a) => candidate_ids(a, &catalog.monitors, max),
    };

    info!(
        %category,
        total = candidates.total_products,
        candidates = candidates.total_candidates,
        "Filtered products"
    );

    Ok(Json(FilterResponse {
        candidates,
        category,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendRequest {
    answers: Map<String, Value>,
    #[serde(flatten)]
    options: RecommendationOptions,
}

/// `POST /api/recommendations/{category}`: pre-filtered, scored and split
/// recommendations.
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let category = name
        .parse::<Category>()
        .ok()
        .or_else(|| Category::from_plural_slug(&name))
        .ok_or_else(|| ApiError::InvalidCategory {
            valid: Category::ALL.iter().map(|c| c.as_str()).collect(),
        })?;

    let request: RecommendRequest = parse_body(&body)?;
    let answers = AnswerSet::parse(category, Value::Object(request.answers))
        .map_err(|e| ApiError::answers(category, e))?;

    let catalog = &state.catalog;
    let options = &request.options;
    let response = match &answers {
        AnswerSet::Mouse(a) => {
            Json(prefiltered_recommendations(a, &catalog.mice, options)).into_response()
        }
        AnswerSet::Audio(a) => {
            Json(prefiltered_recommendations(a, &catalog.audio, options)).into_response()
        }
        AnswerSet::Keyboard(a) => {
            Json(prefiltered_recommendations(a, &catalog.keyboards, options)).into_response()
        }
        AnswerSet::Monitor(a) => {
            Json(prefiltered_recommendations(a, &catalog.monitors, options)).into_response()
        }
    };

    info!(%category, "Served recommendations");
    Ok(response)
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Parses a JSON body, separating malformed JSON from a wrong shape.
fn parse_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)?;
    serde_json::from_value(value).map_err(|e| ApiError::InvalidRequest {
        details: e.to_string(),
    })
}

/// Integer query parameter; `default` when absent or empty, `None` when
/// present but not a non-negative integer.
fn int_param(params: &HashMap<String, String>, key: &str, default: usize) -> Option<usize> {
    match params.get(key).map(|v| v.trim()) {
        None | Some("") => Some(default),
        Some(v) => v.parse().ok(),
    }
}
