//! Mouse scoring rules.
//!
//! | Rule | Weight | Max |
//! |------|--------|-----|
//! | Grip Fit | 0.20 | 25 |
//! | Size & Hand Match | 0.17 | 20 |
//! | Weight Preference | 0.17 | 20 |
//! | Connection Type | 0.13 | 15 |
//! | Use Case Fit | 0.08 | 15 |
//! | Bonus Points | 0.05 | 5 |
//! | Handedness | 0.10 | 10 |
//! | Shape Profile | 0.05 | 5 |
//! | Gaming Genre | 0.05 | 5 |

use super::{best_with_versatility, capitalize, join, Versatility};
use crate::answers::{
    GamingGenre, GripStyle, HandSize, Handedness, MouseAnswers, MouseUse, ShapePreference,
    WeightPreference, WirelessChoice,
};
use crate::models::{
    MouseAttributes, MouseBuildQuality, MouseButtonCountClass, MouseFeelTag, MouseGameFit,
    MouseGripFit, MouseHandedness, MouseProduct, MouseSensorClass, MouseShapeProfile,
    MouseSizeClass, MouseWeightClass,
};
use crate::scoring::{RuleResult, ScoringEngine, ScoringRule};

/// All mouse rules in evaluation order.
pub fn engine() -> ScoringEngine<MouseAnswers, MouseAttributes> {
    ScoringEngine::new()
        .with_rule(GripFit)
        .with_rule(SizeHandMatch)
        .with_rule(WeightMatch)
        .with_rule(ConnectionMatch)
        .with_rule(UseCaseFit)
        .with_rule(BonusPoints)
        .with_rule(HandednessMatch)
        .with_rule(ShapeProfile)
        .with_rule(GamingGenreFit)
}

// ======================== Grip ========================

/// How well the shell supports the selected grip styles.
///
/// Relaxed claw counts as support for both claw and palm positions.
#[derive(Debug, Clone, Copy)]
pub struct GripFit;

fn evaluate_grip(user: GripStyle, supported: &[MouseGripFit], safe_shape: bool) -> RuleResult {
    let target = match user {
        GripStyle::RelaxedClaw => {
            let claw = supported.contains(&MouseGripFit::Claw);
            let palm = supported.contains(&MouseGripFit::Palm);
            return match (claw, palm) {
                (true, true) => RuleResult::matched(
                    25.0,
                    "Excellent for relaxed claw grip with support for both claw and palm positions",
                ),
                (true, false) => RuleResult::matched(
                    18.0,
                    "Good claw grip support for your relaxed claw style",
                )
                .with_concern("May lack palm support for full relaxed claw comfort"),
                (false, true) => RuleResult::matched(
                    18.0,
                    "Good palm support for your relaxed claw style",
                )
                .with_concern("May lack claw support for full relaxed claw comfort"),
                (false, false) => {
                    RuleResult::flagged(5.0, "Shape may not be ideal for relaxed claw grip")
                }
            };
        }
        GripStyle::Palm => MouseGripFit::Palm,
        GripStyle::Claw => MouseGripFit::Claw,
        GripStyle::Fingertip => MouseGripFit::Fingertip,
    };

    let name = target.as_str();
    if supported.contains(&target) {
        if safe_shape {
            return RuleResult::matched(
                25.0,
                format!("Great {name} grip support with a safe, versatile shape"),
            );
        }
        return RuleResult::matched(22.0, format!("Supports {name} grip well"));
    }

    let adjacent: &[MouseGripFit] = match target {
        MouseGripFit::Palm => &[MouseGripFit::Claw],
        MouseGripFit::Claw => &[MouseGripFit::Palm, MouseGripFit::Fingertip],
        MouseGripFit::Fingertip => &[MouseGripFit::Claw],
    };
    let grips = join(supported, "/");

    if adjacent.iter().any(|g| supported.contains(g)) {
        return RuleResult::flagged(
            10.0,
            format!("Designed for {grips} grip, may require adjustment for {name}"),
        );
    }

    RuleResult::flagged(
        3.0,
        format!("Shape is optimized for {grips} grip, not ideal for {name}"),
    )
}

impl ScoringRule<MouseAnswers, MouseAttributes> for GripFit {
    fn name(&self) -> &'static str {
        "Grip Fit"
    }

    fn weight(&self) -> f64 {
        0.2
    }

    fn max_points(&self) -> f64 {
        25.0
    }

    fn evaluate(&self, answers: &MouseAnswers, product: &MouseProduct) -> RuleResult {
        let attrs = &product.core_attributes;
        let safe_shape = attrs.has_feel_tag(MouseFeelTag::SafeShape);
        let results = answers
            .grip_style
            .iter()
            .map(|&g| evaluate_grip(g, &attrs.mouse_grip_fit, safe_shape))
            .collect();

        best_with_versatility(
            results,
            &Versatility {
                threshold: 18.0,
                bonus: 3.0,
                max: 25.0,
                suffix: "versatile for multiple grips",
                fallback: "Versatile for multiple grip styles",
            },
        )
    }
}

// ======================== Size ========================

/// Mouse size class against hand size, with hand-friendly feel tags as a
/// tiebreaker.
#[derive(Debug, Clone, Copy)]
pub struct SizeHandMatch;

impl ScoringRule<MouseAnswers, MouseAttributes> for SizeHandMatch {
    fn name(&self) -> &'static str {
        "Size & Hand Match"
    }

    fn weight(&self) -> f64 {
        0.17
    }

    fn max_points(&self) -> f64 {
        20.0
    }

    fn evaluate(&self, answers: &MouseAnswers, product: &MouseProduct) -> RuleResult {
        let attrs = &product.core_attributes;
        let hand = answers.hand_size;
        let size = attrs.mouse_size_class;

        let (ideal, acceptable): (&[MouseSizeClass], &[MouseSizeClass]) = match hand {
            HandSize::Small => (&[MouseSizeClass::Small], &[MouseSizeClass::Medium]),
            HandSize::Medium => (
                &[MouseSizeClass::Medium],
                &[MouseSizeClass::Small, MouseSizeClass::Large],
            ),
            HandSize::Large => (&[MouseSizeClass::Large], &[MouseSizeClass::Medium]),
        };

        let has_matching_tag = match hand {
            HandSize::Small => attrs.has_feel_tag(MouseFeelTag::SmallHandsFriendly),
            HandSize::Large => attrs.has_feel_tag(MouseFeelTag::LargeHandsFriendly),
            HandSize::Medium => false,
        };
        let size_cap = capitalize(size.as_str());

        if ideal.contains(&size) {
            if has_matching_tag {
                return RuleResult::matched(
                    20.0,
                    format!("Perfect size for {hand} hands with confirmed fit"),
                );
            }
            return RuleResult::matched(
                18.0,
                format!("{size_cap} size works great for {hand} hands"),
            );
        }

        if acceptable.contains(&size) {
            if has_matching_tag {
                return RuleResult::matched(
                    16.0,
                    format!("{size_cap} mouse that's confirmed {hand}-hands friendly"),
                );
            }
            let feel = if hand == HandSize::Small { "large" } else { "small" };
            return RuleResult::matched(
                12.0,
                format!("{size_cap} size is workable for {hand} hands"),
            )
            .with_concern(format!("Might feel slightly {feel} for your hands"));
        }

        if has_matching_tag {
            return RuleResult::matched(
                10.0,
                format!("Despite {size} size, designed to work with {hand} hands"),
            )
            .with_concern("Size is not typical for your hand size but may still work");
        }

        let misfit = if hand == HandSize::Small {
            "too large"
        } else {
            "too small"
        };
        RuleResult::flagged(
            4.0,
            format!("{size_cap} mouse may be {misfit} for {hand} hands"),
        )
    }
}

// ======================== Weight ========================

/// Weight class against the selected weight preferences.
#[derive(Debug, Clone, Copy)]
pub struct WeightMatch;

fn weight_classes(pref: WeightPreference) -> (&'static [MouseWeightClass], &'static [MouseWeightClass]) {
    use MouseWeightClass::*;
    match pref {
        WeightPreference::Ultralight => (&[Ultralight], &[Light]),
        WeightPreference::Light => (&[Ultralight, Light], &[Mid]),
        WeightPreference::Medium => (&[Light, Mid], &[Ultralight, Heavy]),
        WeightPreference::Heavy => (&[Mid, Heavy], &[Light]),
    }
}

impl ScoringRule<MouseAnswers, MouseAttributes> for WeightMatch {
    fn name(&self) -> &'static str {
        "Weight Preference"
    }

    fn weight(&self) -> f64 {
        0.17
    }

    fn max_points(&self) -> f64 {
        20.0
    }

    fn evaluate(&self, answers: &MouseAnswers, product: &MouseProduct) -> RuleResult {
        let attrs = &product.core_attributes;
        let class = attrs.mouse_weight_class;
        let grams = attrs.mouse_weight_g;
        let display = if grams != 0.0 {
            format!("{grams}g")
        } else {
            class.to_string()
        };
        let class_cap = capitalize(class.as_str());

        for &pref in &answers.weight_preference {
            let (ideal, _) = weight_classes(pref);
            if ideal.contains(&class) {
                if pref == WeightPreference::Ultralight && grams != 0.0 && grams < 55.0 {
                    return RuleResult::matched(
                        20.0,
                        format!("Ultra-lightweight at {display} for maximum speed and control"),
                    );
                }
                return RuleResult::matched(
                    18.0,
                    format!("{class_cap} weight ({display}) matches your preference"),
                );
            }
        }

        if answers
            .weight_preference
            .iter()
            .any(|&p| weight_classes(p).1.contains(&class))
        {
            return RuleResult::matched(
                12.0,
                format!("{class_cap} weight ({display}) is close to your preferences"),
            );
        }

        RuleResult::flagged(
            4.0,
            format!("{class_cap} weight ({display}) differs from your preferences"),
        )
    }
}

// ======================== Connection ========================

/// Wireless/wired preference, with battery life noted for wireless mice.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionMatch;

impl ScoringRule<MouseAnswers, MouseAttributes> for ConnectionMatch {
    fn name(&self) -> &'static str {
        "Connection Type"
    }

    fn weight(&self) -> f64 {
        0.13
    }

    fn max_points(&self) -> f64 {
        15.0
    }

    fn evaluate(&self, answers: &MouseAnswers, product: &MouseProduct) -> RuleResult {
        let attrs = &product.core_attributes;
        let wireless = attrs.wireless;
        let wired = attrs.has_wired_mode();

        match answers.wireless {
            WirelessChoice::Either => {
                if wireless && wired {
                    RuleResult::matched(15.0, "Flexible with both wireless and wired connectivity")
                } else if wireless {
                    RuleResult::matched(13.0, "Wireless connectivity")
                } else {
                    RuleResult::matched(13.0, "Wired connectivity")
                }
            }
            WirelessChoice::Wireless => {
                if !wireless {
                    return RuleResult::flagged(
                        0.0,
                        "Wired only - does not meet your wireless preference",
                    );
                }
                let battery_note = match attrs.battery_life_hr {
                    Some(b) if b > 70.0 => format!(" with excellent {b}hr battery life"),
                    Some(b) if b != 0.0 => format!(" with {b}hr battery life"),
                    _ => String::new(),
                };
                RuleResult::matched(15.0, format!("Wireless connectivity{battery_note}"))
            }
            WirelessChoice::Wired => {
                if wired && !wireless {
                    RuleResult::matched(
                        15.0,
                        "Dedicated wired mouse for consistent, low-latency performance",
                    )
                } else if wired {
                    RuleResult::matched(
                        13.0,
                        "Supports wired connection for low-latency performance",
                    )
                } else {
                    RuleResult::flagged(5.0, "Wireless-only - no dedicated wired mode")
                }
            }
        }
    }
}

// ======================== Use case ========================

/// Game-fit tags against the selected primary uses.
#[derive(Debug, Clone, Copy)]
pub struct UseCaseFit;

fn evaluate_use(purpose: MouseUse, attrs: &MouseAttributes) -> RuleResult {
    use MouseGameFit::*;
    let game_fit = &attrs.mouse_game_fit;

    let (primary, secondary): (&[MouseGameFit], &[MouseGameFit]) = match purpose {
        MouseUse::Precision => (&[Fps], &[General]),
        MouseUse::Productivity | MouseUse::Creative => (&[Productivity], &[General]),
        MouseUse::Mixed => (&[General], &[Fps, Productivity, Moba, Mmo]),
    };

    let has_primary = primary.iter().any(|f| game_fit.contains(f));
    let has_secondary = secondary.iter().any(|f| game_fit.contains(f));
    let has_scroll_features = !attrs.mouse_scroll_features.is_empty();
    let many_buttons = matches!(
        attrs.mouse_button_count_class,
        MouseButtonCountClass::High | MouseButtonCountClass::MmoGrid
    );

    if has_primary {
        return match purpose {
            MouseUse::Precision => RuleResult::matched(
                15.0,
                "Optimized for precision work with excellent sensor and control",
            ),
            MouseUse::Productivity => {
                let mut reason = if has_scroll_features {
                    String::from("Great for productivity with enhanced scroll features")
                } else {
                    String::from("Designed for productivity workflows")
                };
                if many_buttons {
                    reason.push_str(" and extra programmable buttons");
                }
                RuleResult::matched(15.0, reason)
            }
            MouseUse::Creative => {
                let mut reason = String::from("Suitable for creative work with precise control");
                if has_scroll_features {
                    reason.push_str(" and useful scroll features");
                }
                RuleResult::matched(15.0, reason)
            }
            MouseUse::Mixed => {
                if game_fit.len() >= 3 {
                    RuleResult::matched(15.0, "Highly versatile across multiple use cases")
                } else {
                    RuleResult::matched(13.0, "Versatile all-rounder for mixed use")
                }
            }
        };
    }

    if has_secondary {
        return RuleResult::matched(
            10.0,
            format!("Works for {purpose} use, though not specifically optimized for it"),
        );
    }

    if matches!(purpose, MouseUse::Productivity | MouseUse::Creative) && many_buttons {
        return RuleResult::matched(8.0, "Extra buttons useful for productivity shortcuts")
            .with_concern("Not specifically designed for productivity workflows");
    }

    RuleResult::flagged(
        5.0,
        format!(
            "Primarily designed for {} rather than {purpose} use",
            join(game_fit, "/")
        ),
    )
}

impl ScoringRule<MouseAnswers, MouseAttributes> for UseCaseFit {
    fn name(&self) -> &'static str {
        "Use Case Fit"
    }

    fn weight(&self) -> f64 {
        0.08
    }

    fn max_points(&self) -> f64 {
        15.0
    }

    fn evaluate(&self, answers: &MouseAnswers, product: &MouseProduct) -> RuleResult {
        let results = answers
            .primary_use
            .iter()
            .map(|&u| evaluate_use(u, &product.core_attributes))
            .collect();

        best_with_versatility(
            results,
            &Versatility {
                threshold: 13.0,
                bonus: 2.0,
                max: 15.0,
                suffix: "versatile for multiple uses",
                fallback: "Versatile for multiple use cases",
            },
        )
    }
}

// ======================== Bonus ========================

/// Value pick, sensor class and build quality extras.
#[derive(Debug, Clone, Copy)]
pub struct BonusPoints;

impl ScoringRule<MouseAnswers, MouseAttributes> for BonusPoints {
    fn name(&self) -> &'static str {
        "Bonus Points"
    }

    fn weight(&self) -> f64 {
        0.05
    }

    fn max_points(&self) -> f64 {
        5.0
    }

    fn evaluate(&self, _answers: &MouseAnswers, product: &MouseProduct) -> RuleResult {
        let attrs = &product.core_attributes;
        let mut points: f64 = 0.0;
        let mut reasons = Vec::new();

        if attrs.mouse_value_pick {
            points += 2.0;
            reasons.push("excellent value");
        }

        match attrs.mouse_sensor_class {
            MouseSensorClass::Flagship => {
                points += 2.0;
                reasons.push("flagship sensor");
            }
            MouseSensorClass::Great => {
                points += 2.0;
                reasons.push("great sensor");
            }
            _ => {}
        }

        if attrs.mouse_build_quality == MouseBuildQuality::Great {
            points += 1.0;
            reasons.push("premium build quality");
        }

        let points = points.min(5.0);
        if points > 0.0 {
            RuleResult::matched(points, format!("Bonus: {}", reasons.join(", ")))
        } else {
            RuleResult::new(0.0)
        }
    }
}

// ======================== Handedness ========================

/// Shell handedness against the user's mouse hand. Unanswered counts as
/// right-handed.
#[derive(Debug, Clone, Copy)]
pub struct HandednessMatch;

impl ScoringRule<MouseAnswers, MouseAttributes> for HandednessMatch {
    fn name(&self) -> &'static str {
        "Handedness"
    }

    fn weight(&self) -> f64 {
        0.1
    }

    fn max_points(&self) -> f64 {
        10.0
    }

    fn evaluate(&self, answers: &MouseAnswers, product: &MouseProduct) -> RuleResult {
        use MouseHandedness::*;
        let shell = product.core_attributes.mouse_handedness;

        match answers.handedness {
            None => RuleResult::matched(8.0, "Compatible with standard right-handed use"),
            Some(Handedness::Right) => {
                if matches!(shell, Right | ErgoRight | Ambi) {
                    RuleResult::matched(10.0, "Suitable for right-handed use")
                } else {
                    RuleResult::flagged(
                        2.0,
                        "Left-handed ergonomic design - not suitable for right hand",
                    )
                }
            }
            Some(Handedness::Left) => {
                if matches!(shell, Left | ErgoLeft | Ambi) {
                    RuleResult::matched(10.0, "Suitable for left-handed use")
                } else {
                    RuleResult::flagged(2.0, "Right-handed design - not suitable for left hand")
                }
            }
            Some(Handedness::Ambidextrous) => {
                if shell == Ambi {
                    RuleResult::matched(10.0, "Symmetrical ambidextrous design")
                } else {
                    RuleResult::matched(
                        7.0,
                        format!(
                            "{} design works but is not symmetric",
                            shell.as_str().replacen('_', " ", 1)
                        ),
                    )
                }
            }
        }
    }
}

// ======================== Shape ========================

/// Hump profile against the preferred shapes.
#[derive(Debug, Clone, Copy)]
pub struct ShapeProfile;

fn preferred_profile(pref: ShapePreference) -> Option<MouseShapeProfile> {
    match pref {
        ShapePreference::LowHump => Some(MouseShapeProfile::LowHump),
        ShapePreference::RearHump => Some(MouseShapeProfile::RearHump),
        ShapePreference::CenterHump => Some(MouseShapeProfile::CenterHump),
        ShapePreference::ErgoHump => Some(MouseShapeProfile::ErgoHump),
        ShapePreference::Any => None,
    }
}

fn similar_profiles(profile: MouseShapeProfile) -> &'static [MouseShapeProfile] {
    use MouseShapeProfile::*;
    match profile {
        LowHump => &[MidHump],
        MidHump => &[LowHump, CenterHump],
        HighHump => &[RearHump],
        RearHump => &[HighHump, ErgoHump],
        CenterHump => &[MidHump],
        ErgoHump => &[RearHump],
    }
}

impl ScoringRule<MouseAnswers, MouseAttributes> for ShapeProfile {
    fn name(&self) -> &'static str {
        "Shape Profile"
    }

    fn weight(&self) -> f64 {
        0.05
    }

    fn max_points(&self) -> f64 {
        5.0
    }

    fn evaluate(&self, answers: &MouseAnswers, product: &MouseProduct) -> RuleResult {
        let prefs = answers.shape_profile.as_deref().unwrap_or_default();
        if prefs.is_empty() || prefs.contains(&ShapePreference::Any) {
            return RuleResult::matched(4.0, "Shape profile not specified");
        }

        let profile = product.core_attributes.mouse_shape_profile;
        let spaced = profile.as_str().replace('_', " ");
        let preferred: Vec<MouseShapeProfile> =
            prefs.iter().filter_map(|&p| preferred_profile(p)).collect();

        if preferred.contains(&profile) {
            return RuleResult::matched(
                5.0,
                format!("{} profile matches your preference", capitalize(&spaced)),
            );
        }

        if preferred
            .iter()
            .any(|&p| similar_profiles(p).contains(&profile))
        {
            return RuleResult::matched(
                3.0,
                format!("{spaced} profile is similar to your preference"),
            );
        }

        RuleResult::flagged(
            1.0,
            format!("{spaced} profile differs from your preferred shapes"),
        )
    }
}

// ======================== Genre ========================

/// Game-fit tags and button layout against the selected game genres.
#[derive(Debug, Clone, Copy)]
pub struct GamingGenreFit;

fn genre_fit(genre: GamingGenre) -> MouseGameFit {
    match genre {
        GamingGenre::Fps => MouseGameFit::Fps,
        GamingGenre::Moba => MouseGameFit::Moba,
        GamingGenre::Mmo => MouseGameFit::Mmo,
        GamingGenre::General => MouseGameFit::General,
    }
}

impl ScoringRule<MouseAnswers, MouseAttributes> for GamingGenreFit {
    fn name(&self) -> &'static str {
        "Gaming Genre"
    }

    fn weight(&self) -> f64 {
        0.05
    }

    fn max_points(&self) -> f64 {
        5.0
    }

    fn evaluate(&self, answers: &MouseAnswers, product: &MouseProduct) -> RuleResult {
        let genres = answers.gaming_genre.as_deref().unwrap_or_default();
        if genres.is_empty() {
            return RuleResult::matched(3.0, "Gaming genre not specified");
        }

        let attrs = &product.core_attributes;
        let game_fit = &attrs.mouse_game_fit;
        let matches: Vec<GamingGenre> = genres
            .iter()
            .copied()
            .filter(|&g| game_fit.contains(&genre_fit(g)))
            .collect();

        if !matches.is_empty() {
            if genres.contains(&GamingGenre::Mmo) {
                match attrs.mouse_button_count_class {
                    MouseButtonCountClass::MmoGrid => {
                        return RuleResult::matched(
                            5.0,
                            "MMO grid with 12+ buttons perfect for MMO gaming",
                        );
                    }
                    MouseButtonCountClass::High => {
                        return RuleResult::matched(4.0, "Good button count for MMO abilities");
                    }
                    _ if game_fit.contains(&MouseGameFit::Mmo) => {
                        return RuleResult::matched(4.0, "Designed for MMO gaming");
                    }
                    _ => {}
                }
            }

            if genres.contains(&GamingGenre::Fps) && game_fit.contains(&MouseGameFit::Fps) {
                return RuleResult::matched(5.0, "Optimized for FPS precision aiming");
            }

            return RuleResult::matched(
                4.0,
                format!("Well-suited for {} gaming", join(&matches, "/")),
            );
        }

        if game_fit.contains(&MouseGameFit::General) {
            return RuleResult::matched(3.0, "Versatile mouse suitable for various games");
        }

        RuleResult::flagged(
            2.0,
            format!(
                "Optimized for {} rather than {}",
                join(game_fit, "/"),
                join(genres, "/")
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ConnectionType, MouseScrollFeature, PriceTier};
    use crate::scoring::format::top_reasons;

    fn mouse(attrs: MouseAttributes) -> MouseProduct {
        MouseProduct::new("test-mouse", Category::Mouse)
            .with_name("Test Mouse")
            .with_brand("Acme")
            .with_price(99.0, 129.0)
            .with_attributes(attrs)
    }

    fn answers() -> MouseAnswers {
        MouseAnswers::new(HandSize::Medium, WirelessChoice::Either)
    }

    #[test]
    fn test_engine_weights_sum_to_one() {
        let engine = engine();
        assert_eq!(engine.len(), 9);
        assert!((engine.total_weight() - 1.0).abs() < 1e-9);
        assert_eq!(engine.rule_names()[0], "Grip Fit");
    }

    #[test]
    fn test_grip_relaxed_claw() {
        let mut a = answers();
        a.grip_style = vec![GripStyle::RelaxedClaw];

        let both = mouse(MouseAttributes {
            mouse_grip_fit: vec![MouseGripFit::Claw, MouseGripFit::Palm],
            ..MouseAttributes::default()
        });
        assert_eq!(GripFit.evaluate(&a, &both).points, 25.0);

        let claw_only = mouse(MouseAttributes {
            mouse_grip_fit: vec![MouseGripFit::Claw],
            ..MouseAttributes::default()
        });
        let r = GripFit.evaluate(&a, &claw_only);
        assert_eq!(r.points, 18.0);
        assert_eq!(
            r.concern.as_deref(),
            Some("May lack palm support for full relaxed claw comfort")
        );
    }

    #[test]
    fn test_grip_adjacent_and_mismatch() {
        let mut a = answers();
        a.grip_style = vec![GripStyle::Fingertip];

        let claw = mouse(MouseAttributes {
            mouse_grip_fit: vec![MouseGripFit::Claw],
            ..MouseAttributes::default()
        });
        let r = GripFit.evaluate(&a, &claw);
        assert_eq!(r.points, 10.0);
        assert_eq!(
            r.concern.as_deref(),
            Some("Designed for claw grip, may require adjustment for fingertip")
        );

        let palm = mouse(MouseAttributes {
            mouse_grip_fit: vec![MouseGripFit::Palm],
            ..MouseAttributes::default()
        });
        assert_eq!(GripFit.evaluate(&a, &palm).points, 3.0);
    }

    #[test]
    fn test_grip_versatility_bonus() {
        let mut a = answers();
        a.grip_style = vec![GripStyle::Palm, GripStyle::Claw];

        let product = mouse(MouseAttributes {
            mouse_grip_fit: vec![MouseGripFit::Palm, MouseGripFit::Claw],
            ..MouseAttributes::default()
        });
        let r = GripFit.evaluate(&a, &product);
        assert_eq!(r.points, 25.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("Supports palm grip well (versatile for multiple grips)")
        );
    }

    #[test]
    fn test_size_hand_match() {
        let mut a = answers();
        a.hand_size = HandSize::Small;

        let medium = mouse(MouseAttributes::default());
        let r = SizeHandMatch.evaluate(&a, &medium);
        assert_eq!(r.points, 12.0);
        assert_eq!(r.reason.as_deref(), Some("Medium size is workable for small hands"));
        assert_eq!(r.concern.as_deref(), Some("Might feel slightly large for your hands"));

        let large_tagged = mouse(MouseAttributes {
            mouse_size_class: MouseSizeClass::Large,
            mouse_feel_tags: vec![MouseFeelTag::SmallHandsFriendly],
            ..MouseAttributes::default()
        });
        assert_eq!(SizeHandMatch.evaluate(&a, &large_tagged).points, 10.0);

        let large = mouse(MouseAttributes {
            mouse_size_class: MouseSizeClass::Large,
            ..MouseAttributes::default()
        });
        let r = SizeHandMatch.evaluate(&a, &large);
        assert_eq!(r.points, 4.0);
        assert_eq!(
            r.concern.as_deref(),
            Some("Large mouse may be too large for small hands")
        );
    }

    #[test]
    fn test_weight_ultralight() {
        let mut a = answers();
        a.weight_preference = vec![WeightPreference::Ultralight];

        let product = mouse(MouseAttributes {
            mouse_weight_g: 54.0,
            mouse_weight_class: MouseWeightClass::Ultralight,
            ..MouseAttributes::default()
        });
        let r = WeightMatch.evaluate(&a, &product);
        assert_eq!(r.points, 20.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("Ultra-lightweight at 54g for maximum speed and control")
        );
    }

    #[test]
    fn test_weight_acceptable_and_miss() {
        let mut a = answers();
        a.weight_preference = vec![WeightPreference::Ultralight];

        let light = mouse(MouseAttributes::default());
        let r = WeightMatch.evaluate(&a, &light);
        assert_eq!(r.points, 12.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("Light weight (70g) is close to your preferences")
        );

        let heavy = mouse(MouseAttributes {
            mouse_weight_g: 110.5,
            mouse_weight_class: MouseWeightClass::Heavy,
            ..MouseAttributes::default()
        });
        let r = WeightMatch.evaluate(&a, &heavy);
        assert_eq!(r.points, 4.0);
        assert_eq!(
            r.concern.as_deref(),
            Some("Heavy weight (110.5g) differs from your preferences")
        );
    }

    #[test]
    fn test_connection_battery_note() {
        let mut a = answers();
        a.wireless = WirelessChoice::Wireless;

        let product = mouse(MouseAttributes {
            wireless: true,
            connection_type: vec![ConnectionType::Wireless24Dongle],
            battery_life_hr: Some(95.0),
            ..MouseAttributes::default()
        });
        let r = ConnectionMatch.evaluate(&a, &product);
        assert_eq!(r.points, 15.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("Wireless connectivity with excellent 95hr battery life")
        );

        let wired = mouse(MouseAttributes::default());
        assert_eq!(ConnectionMatch.evaluate(&a, &wired).points, 0.0);

        a.wireless = WirelessChoice::Wired;
        let r = ConnectionMatch.evaluate(&a, &product);
        assert_eq!(r.points, 5.0);
    }

    #[test]
    fn test_use_case_productivity() {
        let mut a = answers();
        a.primary_use = vec![MouseUse::Productivity];

        let product = mouse(MouseAttributes {
            mouse_game_fit: vec![MouseGameFit::Productivity],
            mouse_scroll_features: vec![MouseScrollFeature::FreeScroll],
            mouse_button_count_class: MouseButtonCountClass::High,
            ..MouseAttributes::default()
        });
        let r = UseCaseFit.evaluate(&a, &product);
        assert_eq!(r.points, 15.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("Great for productivity with enhanced scroll features and extra programmable buttons")
        );
    }

    #[test]
    fn test_use_case_mismatch() {
        let mut a = answers();
        a.primary_use = vec![MouseUse::Precision];

        let product = mouse(MouseAttributes {
            mouse_game_fit: vec![MouseGameFit::Mmo, MouseGameFit::Moba],
            ..MouseAttributes::default()
        });
        let r = UseCaseFit.evaluate(&a, &product);
        assert_eq!(r.points, 5.0);
        assert_eq!(
            r.concern.as_deref(),
            Some("Primarily designed for mmo/moba rather than precision use")
        );
    }

    #[test]
    fn test_bonus_points() {
        let product = mouse(MouseAttributes {
            mouse_value_pick: true,
            mouse_sensor_class: MouseSensorClass::Flagship,
            mouse_build_quality: MouseBuildQuality::Great,
            ..MouseAttributes::default()
        });
        let r = BonusPoints.evaluate(&answers(), &product);
        assert_eq!(r.points, 5.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("Bonus: excellent value, flagship sensor, premium build quality")
        );

        let plain = mouse(MouseAttributes::default());
        assert_eq!(BonusPoints.evaluate(&answers(), &plain), RuleResult::new(0.0));
    }

    #[test]
    fn test_handedness() {
        let mut a = answers();
        let ergo = mouse(MouseAttributes {
            mouse_handedness: MouseHandedness::ErgoRight,
            ..MouseAttributes::default()
        });
        assert_eq!(HandednessMatch.evaluate(&a, &ergo).points, 8.0);

        a.handedness = Some(Handedness::Left);
        assert_eq!(HandednessMatch.evaluate(&a, &ergo).points, 2.0);

        a.handedness = Some(Handedness::Ambidextrous);
        let r = HandednessMatch.evaluate(&a, &ergo);
        assert_eq!(r.points, 7.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("ergo right design works but is not symmetric")
        );
    }

    #[test]
    fn test_shape_profile() {
        let mut a = answers();
        let product = mouse(MouseAttributes::default());
        assert_eq!(ShapeProfile.evaluate(&a, &product).points, 4.0);

        a.shape_profile = Some(vec![ShapePreference::LowHump]);
        let r = ShapeProfile.evaluate(&a, &product);
        assert_eq!(r.points, 3.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("mid hump profile is similar to your preference")
        );

        a.shape_profile = Some(vec![ShapePreference::ErgoHump]);
        assert_eq!(ShapeProfile.evaluate(&a, &product).points, 1.0);
    }

    #[test]
    fn test_gaming_genre() {
        let mut a = answers();
        a.gaming_genre = Some(vec![GamingGenre::Mmo]);

        let grid = mouse(MouseAttributes {
            mouse_game_fit: vec![MouseGameFit::Mmo],
            mouse_button_count_class: MouseButtonCountClass::MmoGrid,
            ..MouseAttributes::default()
        });
        assert_eq!(GamingGenreFit.evaluate(&a, &grid).points, 5.0);

        a.gaming_genre = Some(vec![GamingGenre::Fps, GamingGenre::Moba]);
        let moba = mouse(MouseAttributes {
            mouse_game_fit: vec![MouseGameFit::Moba],
            ..MouseAttributes::default()
        });
        let r = GamingGenreFit.evaluate(&a, &moba);
        assert_eq!(r.points, 4.0);
        assert_eq!(r.reason.as_deref(), Some("Well-suited for moba gaming"));

        let productivity = mouse(MouseAttributes {
            mouse_game_fit: vec![MouseGameFit::Productivity],
            ..MouseAttributes::default()
        });
        let r = GamingGenreFit.evaluate(&a, &productivity);
        assert_eq!(r.points, 2.0);
        assert_eq!(
            r.concern.as_deref(),
            Some("Optimized for productivity rather than fps/moba")
        );
    }

    #[test]
    fn test_ideal_mouse_scores_high() {
        let mut a = answers();
        a.grip_style = vec![GripStyle::Claw];
        a.weight_preference = vec![WeightPreference::Light];
        a.wireless = WirelessChoice::Wireless;
        a.primary_use = vec![MouseUse::Precision];
        a.handedness = Some(Handedness::Right);
        a.gaming_genre = Some(vec![GamingGenre::Fps]);

        let product = mouse(MouseAttributes {
            price_tier: PriceTier::Premium,
            wireless: true,
            connection_type: vec![ConnectionType::Wireless24Dongle, ConnectionType::WiredUsbC],
            battery_life_hr: Some(90.0),
            mouse_grip_fit: vec![MouseGripFit::Claw, MouseGripFit::Fingertip],
            mouse_game_fit: vec![MouseGameFit::Fps],
            mouse_feel_tags: vec![MouseFeelTag::SafeShape],
            mouse_sensor_class: MouseSensorClass::Flagship,
            ..MouseAttributes::default()
        });

        let scored = engine().score_product(&a, &product);
        assert!(scored.score >= 90, "score was {}", scored.score);
        assert_eq!(top_reasons(&scored, 3).len(), 3);
        assert!(scored.concerns.is_empty());
    }
}
