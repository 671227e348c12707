//! Quiz-driven gaming peripheral recommendations.
//!
//! Turns a short questionnaire into ranked mouse, headset, keyboard and
//! monitor recommendations. Answers pass through hard pre-filters, then a
//! set of weighted rules scores every remaining product and explains the
//! result with match reasons and concerns.
//!
//! # Modules
//!
//! - **`models`**: Product records and their category-specific attributes
//! - **`answers`**: Typed, validated quiz answers per category
//! - **`quiz`**: Question sets, quiz modes and session state
//! - **`filtering`**: Hard elimination filters and budget ceilings
//! - **`scoring`**: Rule engine, per-category rules, threshold and split
//! - **`search`**: Keyword and ranked product search
//! - **`catalog`**: Loading product files from a data directory
//! - **`validation`**: Catalog and answer integrity checks
//! - **`server`**: JSON API with rate limiting and security headers
//!
//! # Example
//!
//! ```
//! use gearmatch::answers::{HandSize, MouseAnswers, WirelessChoice};
//! use gearmatch::models::{Category, MouseProduct};
//! use gearmatch::scoring::{mouse_recommendations, RecommendationOptions};
//!
//! let answers = MouseAnswers::new(HandSize::Medium, WirelessChoice::Either);
//! let products = vec![MouseProduct::new("viper-v3-pro", Category::Mouse)];
//!
//! let result = mouse_recommendations(&answers, &products, &RecommendationOptions::default());
//! assert_eq!(result.total_evaluated, 1);
//! ```

pub mod answers;
pub mod catalog;
pub mod error;
pub mod filtering;
pub mod models;
pub mod quiz;
pub mod scoring;
pub mod search;
pub mod server;
pub mod validation;

pub use error::{Error, Result};
