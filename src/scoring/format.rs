//! Display helpers for scored products.

use super::ScoredProduct;

/// Formats a score as a whole percentage, e.g. `87%`.
pub fn format_score(score: f64) -> String {
    format!("{}%", score.round())
}

/// Human-readable label for a score.
pub fn match_quality(score: f64) -> &'static str {
    if score >= 90.0 {
        "Excellent Match"
    } else if score >= 80.0 {
        "Great Match"
    } else if score >= 70.0 {
        "Good Match"
    } else if score >= 60.0 {
        "Decent Match"
    } else if score >= 50.0 {
        "Fair Match"
    } else {
        "Partial Match"
    }
}

/// Up to `count` reasons, preferring ones that are not bonus notes.
///
/// Bonus reasons are only shown when there are fewer than `count` primary
/// reasons, in which case the first `count` reasons are returned as-is.
pub fn top_reasons<P>(scored: &ScoredProduct<P>, count: usize) -> Vec<&str> {
    let primary: Vec<&str> = scored
        .match_reasons
        .iter()
        .map(String::as_str)
        .filter(|r| !r.starts_with("Bonus:"))
        .collect();

    if primary.len() >= count {
        return primary.into_iter().take(count).collect();
    }

    scored
        .match_reasons
        .iter()
        .take(count)
        .map(String::as_str)
        .collect()
}

/// The first `count` concerns.
pub fn top_concerns<P>(scored: &ScoredProduct<P>, count: usize) -> Vec<&str> {
    scored
        .concerns
        .iter()
        .take(count)
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, MouseAttributes, Product};

    fn scored(reasons: &[&str], concerns: &[&str]) -> ScoredProduct<MouseAttributes> {
        ScoredProduct {
            product: Product::new("m", Category::Mouse),
            score: 80,
            breakdown: Vec::new(),
            match_reasons: reasons.iter().map(|s| s.to_string()).collect(),
            concerns: concerns.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(87.4), "87%");
        assert_eq!(format_score(87.5), "88%");
        assert_eq!(format_score(100.0), "100%");
    }

    #[test]
    fn test_match_quality_bands() {
        assert_eq!(match_quality(95.0), "Excellent Match");
        assert_eq!(match_quality(90.0), "Excellent Match");
        assert_eq!(match_quality(85.0), "Great Match");
        assert_eq!(match_quality(70.0), "Good Match");
        assert_eq!(match_quality(60.0), "Decent Match");
        assert_eq!(match_quality(50.0), "Fair Match");
        assert_eq!(match_quality(49.9), "Partial Match");
    }

    #[test]
    fn test_top_reasons_skips_bonus_when_enough() {
        let s = scored(&["A", "Bonus: value", "B", "C", "D"], &[]);
        assert_eq!(top_reasons(&s, 3), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_top_reasons_includes_bonus_when_short() {
        let s = scored(&["Bonus: value", "A", "B"], &[]);
        assert_eq!(top_reasons(&s, 3), vec!["Bonus: value", "A", "B"]);
    }

    #[test]
    fn test_top_concerns() {
        let s = scored(&[], &["x", "y", "z"]);
        assert_eq!(top_concerns(&s, 2), vec!["x", "y"]);
        assert!(top_concerns(&scored(&[], &[]), 2).is_empty());
    }
}
