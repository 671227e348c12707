//! Keyboard scoring rules.
//!
//! Seven rules weighted 0.25 / 0.20 / 0.15 / 0.15 / 0.15 / 0.10 / 0.10:
//! primary use, layout, switch feel, gaming features, connectivity,
//! priority feature and budget.

use super::{best_with_versatility, capitalize, join, Versatility};
use crate::answers::{
    ConnectivityPreference, GamingFeatureNeeds, KeyboardAnswers, KeyboardUse, LayoutPreference,
    PriorityFeature, SwitchPreference,
};
use crate::models::{
    ConnectionType, KeyboardAttributes, KeyboardFeatureTag, KeyboardFormFactor,
    KeyboardMountStyle, KeyboardProduct, KeyboardSwitchFeel, KeyboardUseFit, LatencyClass,
};
use crate::scoring::{RuleResult, ScoringEngine, ScoringRule};

/// All keyboard rules in evaluation order.
pub fn engine() -> ScoringEngine<KeyboardAnswers, KeyboardAttributes> {
    ScoringEngine::new()
        .with_rule(PrimaryUse)
        .with_rule(FormFactor)
        .with_rule(SwitchType)
        .with_rule(GamingFeatures)
        .with_rule(Connectivity)
        .with_rule(PriorityFeatureFit)
        .with_rule(BudgetMatch)
}

/// Latency assumed when no measurement exists.
const DEFAULT_LATENCY_MS: f64 = 10.0;

fn single_key_latency(attrs: &KeyboardAttributes) -> f64 {
    attrs
        .keyboard_single_key_latency_ms
        .unwrap_or(DEFAULT_LATENCY_MS)
}

// ---------------------------------------------------------------------------
// Primary use
// ---------------------------------------------------------------------------

/// Use-fit tags and lab scores against the selected uses.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryUse;

fn evaluate_use(purpose: KeyboardUse, attrs: &KeyboardAttributes) -> RuleResult {
    let gaming = attrs.keyboard_gaming_score.unwrap_or(0.0);
    let office = attrs.keyboard_office_score.unwrap_or(0.0);
    let programming = attrs.keyboard_programming_score.unwrap_or(0.0);

    match purpose {
        KeyboardUse::CompetitiveGaming => {
            let very_low_latency = attrs.latency_class == LatencyClass::VeryLow;
            if attrs.keyboard_supports_rapid_trigger && very_low_latency {
                RuleResult::matched(
                    25.0,
                    "Rapid Trigger and ultra-low latency for competitive gaming",
                )
            } else if very_low_latency && gaming >= 8.5 {
                RuleResult::matched(22.0, "Excellent gaming performance with low latency")
            } else if attrs.fits(KeyboardUseFit::CompetitiveGaming) {
                RuleResult::matched(18.0, "Designed for competitive gaming")
            } else if attrs.fits(KeyboardUseFit::CasualGaming) {
                RuleResult::flagged(12.0, "Better suited for casual gaming than competitive")
            } else {
                RuleResult::flagged(5.0, "Not optimized for competitive gaming")
            }
        }
        KeyboardUse::CasualGaming => {
            if attrs.fits(KeyboardUseFit::CasualGaming)
                || attrs.fits(KeyboardUseFit::CompetitiveGaming)
            {
                if gaming >= 8.0 && attrs.keyboard_has_rgb {
                    RuleResult::matched(25.0, "Great gaming performance with RGB customization")
                } else {
                    RuleResult::matched(22.0, "Well-suited for gaming")
                }
            } else if gaming >= 7.0 {
                RuleResult::matched(15.0, "Capable gaming performance")
            } else {
                RuleResult::flagged(8.0, "Not primarily designed for gaming")
            }
        }
        KeyboardUse::Productivity => {
            if attrs.fits(KeyboardUseFit::Office) || attrs.fits(KeyboardUseFit::Productivity) {
                let quiet = attrs.has_feature(KeyboardFeatureTag::Quiet)
                    || attrs.keyboard_typing_noise_dba.unwrap_or(100.0) < 45.0;
                if office >= 8.0 && quiet {
                    RuleResult::matched(25.0, "Excellent for office use with quiet operation")
                } else {
                    RuleResult::matched(22.0, "Well-suited for productivity work")
                }
            } else if office >= 7.5 {
                RuleResult::matched(18.0, "Good productivity keyboard")
            } else {
                RuleResult::flagged(10.0, "May not be ideal for office/productivity use")
            }
        }
        KeyboardUse::Programming => {
            if attrs.fits(KeyboardUseFit::Programming) || attrs.fits(KeyboardUseFit::Typing) {
                let good_typing = attrs.has_feature(KeyboardFeatureTag::GasketMount)
                    || attrs.has_feature(KeyboardFeatureTag::Premium);
                if programming >= 8.0 && good_typing {
                    RuleResult::matched(25.0, "Excellent typing experience for programming")
                } else {
                    RuleResult::matched(22.0, "Well-suited for programming and typing")
                }
            } else if programming >= 7.5 {
                RuleResult::matched(18.0, "Good for programming work")
            } else {
                RuleResult::flagged(
                    10.0,
                    "May not provide ideal typing experience for programming",
                )
            }
        }
    }
}

impl ScoringRule<KeyboardAnswers, KeyboardAttributes> for PrimaryUse {
    fn name(&self) -> &'static str {
        "Primary Use"
    }

    fn weight(&self) -> f64 {
        0.25
    }

    fn max_points(&self) -> f64 {
        25.0
    }

    fn evaluate(&self, answers: &KeyboardAnswers, product: &KeyboardProduct) -> RuleResult {
        let results = answers
            .primary_use
            .iter()
            .map(|&u| evaluate_use(u, &product.core_attributes))
            .collect();

        best_with_versatility(
            results,
            &Versatility {
                threshold: 18.0,
                bonus: 2.0,
                max: 25.0,
                suffix: "versatile for multiple uses",
                fallback: "Versatile for multiple uses",
            },
        )
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Layout size against the preferred layouts.
#[derive(Debug, Clone, Copy)]
pub struct FormFactor;

fn layout_matches(pref: LayoutPreference) -> &'static [KeyboardFormFactor] {
    use KeyboardFormFactor::*;
    match pref {
        LayoutPreference::FullSize => &[FullSize100Percent],
        LayoutPreference::Tkl => &[Tkl80Percent],
        LayoutPreference::Percent75 => &[Percent75, Percent96],
        LayoutPreference::Percent60To65 => &[Percent60, Percent65],
    }
}

fn layout_acceptable(pref: LayoutPreference) -> &'static [KeyboardFormFactor] {
    use KeyboardFormFactor::*;
    match pref {
        LayoutPreference::FullSize => &[Percent96],
        LayoutPreference::Tkl => &[Percent75, Percent96],
        LayoutPreference::Percent75 => &[Tkl80Percent, Percent65],
        LayoutPreference::Percent60To65 => &[Percent75],
    }
}

impl ScoringRule<KeyboardAnswers, KeyboardAttributes> for FormFactor {
    fn name(&self) -> &'static str {
        "Form Factor"
    }

    fn weight(&self) -> f64 {
        0.2
    }

    fn max_points(&self) -> f64 {
        20.0
    }

    fn evaluate(&self, answers: &KeyboardAnswers, product: &KeyboardProduct) -> RuleResult {
        let layout = product.core_attributes.keyboard_form_factor;
        let prefs = &answers.form_factor;

        if prefs.iter().any(|&p| layout_matches(p).contains(&layout)) {
            return RuleResult::matched(
                20.0,
                format!("Perfect {} layout match", layout.display_name()),
            );
        }

        if prefs.iter().any(|&p| layout_acceptable(p).contains(&layout)) {
            return RuleResult::matched(
                14.0,
                format!("Close size match with {} layout", layout.display_name()),
            )
            .with_concern("Slightly different layout than preferred");
        }

        RuleResult::flagged(
            5.0,
            format!(
                "Layout ({}) differs from your preferences",
                layout.as_str().replace('_', " ")
            ),
        )
    }
}

// ---------------------------------------------------------------------------
// Switches
// ---------------------------------------------------------------------------

/// Stock switch feel against the preference, softened by hot-swap sockets.
#[derive(Debug, Clone, Copy)]
pub struct SwitchType;

fn feel_of(pref: SwitchPreference) -> Option<KeyboardSwitchFeel> {
    match pref {
        SwitchPreference::Linear => Some(KeyboardSwitchFeel::Linear),
        SwitchPreference::Tactile => Some(KeyboardSwitchFeel::Tactile),
        SwitchPreference::Clicky => Some(KeyboardSwitchFeel::Clicky),
        SwitchPreference::NoPreference => None,
    }
}

impl ScoringRule<KeyboardAnswers, KeyboardAttributes> for SwitchType {
    fn name(&self) -> &'static str {
        "Switch Type"
    }

    fn weight(&self) -> f64 {
        0.15
    }

    fn max_points(&self) -> f64 {
        15.0
    }

    fn evaluate(&self, answers: &KeyboardAnswers, product: &KeyboardProduct) -> RuleResult {
        let attrs = &product.core_attributes;
        let feel = attrs.keyboard_switch_feel;
        let hot_swap = attrs.keyboard_hot_swappable;
        let prefs = &answers.switch_type;

        if prefs.contains(&SwitchPreference::NoPreference) {
            return if hot_swap {
                RuleResult::matched(15.0, "Hot-swappable switches let you try different types")
            } else {
                RuleResult::matched(12.0, "Comes with quality switches")
            };
        }

        if prefs.iter().any(|&p| feel_of(p) == Some(feel)) {
            return if hot_swap {
                RuleResult::matched(
                    15.0,
                    format!("{} switches with hot-swap flexibility", capitalize(feel.as_str())),
                )
            } else {
                RuleResult::matched(14.0, format!("Matches your {feel} switch preference"))
            };
        }

        if hot_swap {
            return RuleResult::matched(
                10.0,
                "Hot-swappable — can install your preferred switch type",
            )
            .with_concern(format!("Stock switches are {feel}"));
        }

        RuleResult::flagged(
            4.0,
            format!("Has {feel} switches, you preferred {}", join(prefs, " or ")),
        )
    }
}

// ---------------------------------------------------------------------------
// Gaming features
// ---------------------------------------------------------------------------

/// Rapid trigger, polling rate, latency, SOCD and analog input.
#[derive(Debug, Clone, Copy)]
pub struct GamingFeatures;

impl ScoringRule<KeyboardAnswers, KeyboardAttributes> for GamingFeatures {
    fn name(&self) -> &'static str {
        "Gaming Features"
    }

    fn weight(&self) -> f64 {
        0.15
    }

    fn max_points(&self) -> f64 {
        15.0
    }

    fn evaluate(&self, answers: &KeyboardAnswers, product: &KeyboardProduct) -> RuleResult {
        let attrs = &product.core_attributes;
        let polling = attrs.polling_rate_hz();
        let latency = single_key_latency(attrs);

        match answers.gaming_features {
            GamingFeatureNeeds::Essential => {
                let mut score: f64 = 0.0;
                let mut reasons = Vec::new();
                let mut concerns = Vec::new();

                if attrs.keyboard_supports_rapid_trigger {
                    score += 5.0;
                    reasons.push(String::from("Rapid Trigger"));
                } else {
                    concerns.push("No Rapid Trigger");
                }

                if polling >= 8000 {
                    score += 4.0;
                    reasons.push(String::from("8K polling"));
                } else if polling >= 4000 {
                    score += 2.0;
                    reasons.push(format!("{polling}Hz polling"));
                }

                if latency <= 1.0 {
                    score += 3.0;
                    reasons.push(String::from("Sub-1ms latency"));
                } else if latency <= 3.0 {
                    score += 2.0;
                }

                if attrs.keyboard_supports_socd {
                    score += 2.0;
                    reasons.push(String::from("SOCD support"));
                }
                if attrs.keyboard_supports_analog {
                    score += 1.0;
                    reasons.push(String::from("Analog input"));
                }

                let mut result = RuleResult::new(score.min(15.0));
                if !reasons.is_empty() {
                    result = result.with_reason(reasons.join(", "));
                }
                if !concerns.is_empty() && score < 10.0 {
                    result = result.with_concern(concerns.join(", "));
                }
                result
            }
            GamingFeatureNeeds::NiceToHave => {
                let mut score: f64 = 8.0;
                let mut reasons = Vec::new();

                if attrs.keyboard_supports_rapid_trigger {
                    score += 4.0;
                    reasons.push("Has Rapid Trigger");
                }
                if polling >= 1000 {
                    score += 2.0;
                    reasons.push("Good polling rate");
                }
                if latency <= 5.0 {
                    score += 1.0;
                }

                let reason = if reasons.is_empty() {
                    String::from("Solid gaming performance")
                } else {
                    reasons.join(", ")
                };
                RuleResult::matched(score.min(15.0), reason)
            }
            GamingFeatureNeeds::NotImportant => {
                RuleResult::matched(12.0, "Gaming features not a priority")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Connectivity
// ---------------------------------------------------------------------------

/// Wireless radios and wired fallback against the connectivity preference.
#[derive(Debug, Clone, Copy)]
pub struct Connectivity;

impl ScoringRule<KeyboardAnswers, KeyboardAttributes> for Connectivity {
    fn name(&self) -> &'static str {
        "Connectivity"
    }

    fn weight(&self) -> f64 {
        0.15
    }

    fn max_points(&self) -> f64 {
        15.0
    }

    fn evaluate(&self, answers: &KeyboardAnswers, product: &KeyboardProduct) -> RuleResult {
        let attrs = &product.core_attributes;
        let wireless = attrs.wireless;
        let bluetooth = attrs.has_connection(ConnectionType::Bluetooth);
        let dongle = attrs.has_connection(ConnectionType::Wireless24Dongle);
        let wired_usb = attrs.has_connection(ConnectionType::WiredUsb);

        match answers.connectivity {
            ConnectivityPreference::WirelessEssential => {
                if !wireless {
                    return RuleResult::flagged(2.0, "Wired only — no wireless option");
                }
                if dongle && bluetooth {
                    if attrs.has_feature(KeyboardFeatureTag::MultiDeviceBluetooth) {
                        return RuleResult::matched(
                            15.0,
                            "Full wireless with 2.4GHz, Bluetooth, and multi-device support",
                        );
                    }
                    return RuleResult::matched(14.0, "Dual wireless with 2.4GHz and Bluetooth");
                }
                if dongle {
                    return RuleResult::matched(12.0, "Wireless via 2.4GHz receiver");
                }
                if bluetooth {
                    return RuleResult::matched(12.0, "Wireless via Bluetooth");
                }
            }
            ConnectivityPreference::WirelessPreferred => {
                if !wireless {
                    return RuleResult::flagged(8.0, "Wired only, but you preferred wireless");
                }
                if dongle && bluetooth {
                    return RuleResult::matched(
                        15.0,
                        "Versatile wireless with 2.4GHz and Bluetooth options",
                    );
                }
                return RuleResult::matched(13.0, "Wireless capable");
            }
            ConnectivityPreference::WiredPreferred => {
                if !wireless {
                    return RuleResult::matched(
                        15.0,
                        "Reliable wired connection, no charging needed",
                    );
                }
                if wired_usb {
                    return RuleResult::matched(
                        13.0,
                        "Can be used wired, with wireless option available",
                    );
                }
                return RuleResult::flagged(8.0, "Primarily wireless keyboard");
            }
            ConnectivityPreference::NoPreference => {}
        }

        if wireless && wired_usb {
            RuleResult::matched(15.0, "Flexible wired/wireless connectivity")
        } else {
            RuleResult::matched(12.0, "Standard connectivity options")
        }
    }
}

// ---------------------------------------------------------------------------
// Priority feature
// ---------------------------------------------------------------------------

/// The feature the user cares most about: latency, typing feel,
/// customization or noise.
#[derive(Debug, Clone, Copy)]
pub struct PriorityFeatureFit;

fn evaluate_priority(priority: PriorityFeature, attrs: &KeyboardAttributes) -> RuleResult {
    match priority {
        PriorityFeature::Performance => {
            let latency = single_key_latency(attrs);
            if latency <= 1.0 {
                RuleResult::matched(10.0, "Top-tier latency performance")
            } else if latency <= 3.0 {
                RuleResult::matched(8.0, "Excellent performance")
            } else if latency <= 5.0 {
                RuleResult::matched(6.0, "Good performance")
            } else {
                RuleResult::flagged(3.0, "Higher latency than performance-focused options")
            }
        }
        PriorityFeature::TypingFeel => {
            let gasket = matches!(
                attrs.keyboard_mount_style,
                KeyboardMountStyle::Gasket | KeyboardMountStyle::DoubleGasket
            );
            let premium = attrs.has_feature(KeyboardFeatureTag::Premium)
                || attrs.has_feature(KeyboardFeatureTag::Enthusiast);

            match (gasket, premium) {
                (true, true) => RuleResult::matched(10.0, "Premium gasket-mount typing experience"),
                (true, false) => RuleResult::matched(8.0, "Gasket-mounted for better typing feel"),
                (false, true) => RuleResult::matched(7.0, "Premium build quality"),
                (false, false) => {
                    RuleResult::flagged(4.0, "Standard typing feel, not premium-focused")
                }
            }
        }
        PriorityFeature::Customization => {
            let mut score: f64 = 0.0;
            let mut reasons = Vec::new();

            if attrs.keyboard_hot_swappable {
                score += 4.0;
                reasons.push("hot-swap");
            }
            if attrs.keyboard_has_rgb {
                score += 2.0;
                reasons.push("RGB");
            }
            if attrs.has_feature(KeyboardFeatureTag::QmkVia) {
                score += 3.0;
                reasons.push("QMK/VIA");
            }
            if attrs.has_feature(KeyboardFeatureTag::OnboardMemory) {
                score += 1.0;
                reasons.push("profiles");
            }

            let mut result = RuleResult::new(score.min(10.0));
            if !reasons.is_empty() {
                result = result.with_reason(format!("Customizable: {}", reasons.join(", ")));
            }
            if score < 5.0 {
                result = result.with_concern("Limited customization options");
            }
            result
        }
        PriorityFeature::Quiet => {
            let noise = attrs.keyboard_typing_noise_dba.unwrap_or(60.0);
            if noise < 40.0 {
                RuleResult::matched(10.0, "Very quiet operation")
            } else if noise < 50.0 {
                RuleResult::matched(8.0, "Quiet typing")
            } else if noise < 55.0 {
                RuleResult::matched(5.0, "Moderate noise level")
            } else {
                RuleResult::flagged(2.0, "Louder than quiet-focused options")
            }
        }
    }
}

impl ScoringRule<KeyboardAnswers, KeyboardAttributes> for PriorityFeatureFit {
    fn name(&self) -> &'static str {
        "Priority Feature"
    }

    fn weight(&self) -> f64 {
        0.1
    }

    fn max_points(&self) -> f64 {
        10.0
    }

    fn evaluate(&self, answers: &KeyboardAnswers, product: &KeyboardProduct) -> RuleResult {
        let results = answers
            .priority_feature
            .iter()
            .map(|&p| evaluate_priority(p, &product.core_attributes))
            .collect();

        best_with_versatility(
            results,
            &Versatility {
                threshold: 7.0,
                bonus: 1.0,
                max: 10.0,
                suffix: "meets multiple priorities",
                fallback: "Meets multiple priorities",
            },
        )
    }
}

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

/// Average street price against the selected budget bands. Over-budget
/// products lose points gradually rather than being excluded.
#[derive(Debug, Clone, Copy)]
pub struct BudgetMatch;

impl ScoringRule<KeyboardAnswers, KeyboardAttributes> for BudgetMatch {
    fn name(&self) -> &'static str {
        "Budget Match"
    }

    fn weight(&self) -> f64 {
        0.1
    }

    fn max_points(&self) -> f64 {
        10.0
    }

    fn evaluate(&self, answers: &KeyboardAnswers, product: &KeyboardProduct) -> RuleResult {
        let avg = product.average_price();
        let value_pick = product.core_attributes.keyboard_value_pick;
        let bands: Vec<(f64, f64)> = answers.budget.iter().map(|b| b.price_band()).collect();

        if bands.iter().any(|&(min, max)| avg >= min && avg <= max) {
            return if value_pick {
                RuleResult::matched(10.0, "Excellent value within your budget")
            } else {
                RuleResult::matched(8.0, "Within your budget range")
            };
        }

        let lowest = bands.iter().map(|b| b.0).fold(f64::INFINITY, f64::min);
        if avg < lowest {
            return if value_pick {
                RuleResult::matched(9.0, "Great value under your budget")
            } else {
                RuleResult::matched(7.0, "Under budget — savings available")
            };
        }

        let highest = bands.iter().map(|b| b.1).fold(0.0, f64::max);
        let over = avg - highest;
        if over < 0.0 {
            return RuleResult::matched(6.0, "Between your selected budget ranges");
        }
        if over <= 50.0 {
            return RuleResult::flagged(
                5.0,
                format!("Slightly over budget (~${} more)", over.round()),
            );
        }
        RuleResult::flagged(3.0, format!("Over budget (~${} more)", over.round()))
    }
}
