//! Built-in scoring rules per category.
//!
//! # Categories
//!
//! - **Mouse**: grip, size, weight, connection, use case, bonus, handedness,
//!   shape, genre
//! - **Audio**: form factor, primary use, microphone, comfort, budget, bonus,
//!   signature, wireless, noise
//! - **Keyboard**: primary use, layout, switches, gaming features,
//!   connectivity, priorities, budget
//! - **Monitor**: primary use, size, resolution, refresh, panel, budget,
//!   color, HDR, features, bonus, curvature
//!
//! Each category module exposes its rules as unit structs and an `engine()`
//! constructor that registers them in evaluation order.

pub mod audio;
pub mod keyboard;
pub mod monitor;
pub mod mouse;

use super::RuleResult;

/// Extra points awarded when several selections score well.
pub(crate) struct Versatility {
    /// Points a selection needs to count as a good match.
    pub threshold: f64,
    pub bonus: f64,
    pub max: f64,
    /// Appended to the best reason in parentheses.
    pub suffix: &'static str,
    /// Reason used when the best result has none.
    pub fallback: &'static str,
}

/// Best of several results; the first wins on equal points.
pub(crate) fn best(results: Vec<RuleResult>) -> RuleResult {
    let mut iter = results.into_iter();
    let Some(mut best) = iter.next() else {
        return RuleResult::default();
    };
    for current in iter {
        if current.points > best.points {
            best = current;
        }
    }
    best
}

/// Best of several results plus a versatility bonus when more than one
/// result reaches the threshold and the best is below the maximum.
///
/// The bonus result keeps the reason and drops any concern.
pub(crate) fn best_with_versatility(results: Vec<RuleResult>, v: &Versatility) -> RuleResult {
    let good_matches = results.iter().filter(|r| r.points >= v.threshold).count();
    let best = best(results);

    if good_matches > 1 && best.points < v.max {
        let reason = match best.reason.as_deref() {
            Some(r) if !r.is_empty() => format!("{r} ({})", v.suffix),
            _ => v.fallback.to_string(),
        };
        return RuleResult::matched((best.points + v.bonus).min(v.max), reason);
    }

    best
}

/// Uppercases the first character.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins display values with `sep`.
pub(crate) fn join<T: std::fmt::Display>(values: &[T], sep: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    const V: Versatility = Versatility {
        threshold: 18.0,
        bonus: 3.0,
        max: 25.0,
        suffix: "versatile for multiple grips",
        fallback: "Versatile for multiple grip styles",
    };

    #[test]
    fn test_best_keeps_first_maximum() {
        let r = best(vec![
            RuleResult::matched(10.0, "first"),
            RuleResult::matched(12.0, "second"),
            RuleResult::matched(12.0, "third"),
        ]);
        assert_eq!(r.reason.as_deref(), Some("second"));
        assert_eq!(best(Vec::new()), RuleResult::default());
    }

    #[test]
    fn test_versatility_bonus() {
        let r = best_with_versatility(
            vec![
                RuleResult::matched(22.0, "Supports palm grip well"),
                RuleResult::flagged(18.0, "meh").with_reason("Good claw"),
            ],
            &V,
        );
        assert_eq!(r.points, 25.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("Supports palm grip well (versatile for multiple grips)")
        );
        assert_eq!(r.concern, None);
    }

    #[test]
    fn test_no_bonus_for_single_good_match() {
        let r = best_with_versatility(
            vec![
                RuleResult::matched(22.0, "Supports palm grip well"),
                RuleResult::flagged(3.0, "Not ideal"),
            ],
            &V,
        );
        assert_eq!(r.points, 22.0);
    }

    #[test]
    fn test_bonus_fallback_reason() {
        let r = best_with_versatility(vec![RuleResult::new(20.0), RuleResult::new(19.0)], &V);
        assert_eq!(r.points, 23.0);
        assert_eq!(r.reason.as_deref(), Some("Versatile for multiple grip styles"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("medium"), "Medium");
        assert_eq!(capitalize(""), "");
        assert_eq!(join(&["claw", "palm"], "/"), "claw/palm");
    }
}
