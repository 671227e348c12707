//! Monitor scoring rules.
//!
//! Monitors are scored mostly from third-party lab scores (0-10 scale) and
//! measured specs rather than editorial tags.
//!
//! # Reference
//! Rule order and weights: primary use 0.25, size 0.15, resolution 0.15,
//! refresh 0.12, panel 0.08, budget 0.08, color 0.06, HDR 0.04, features
//! 0.04, bonus 0.03, curvature 0.03.

use crate::answers::{
    ColorAccuracyNeed, CurvedPreference, FeatureNeed, HdrNeed, MonitorAnswers, MonitorUse,
    PanelPreference, ResolutionPreference, SizePreference,
};
use crate::models::{
    MonitorAttributes, MonitorColorAccuracy, MonitorGSync, MonitorHdrLevel, MonitorPanelType,
    MonitorProduct, MonitorResolutionClass, MonitorSizeClass,
};
use crate::scoring::{RuleResult, ScoringEngine, ScoringRule};

/// All monitor rules in evaluation order.
pub fn engine() -> ScoringEngine<MonitorAnswers, MonitorAttributes> {
    ScoringEngine::new()
        .with_rule(PrimaryUseFit)
        .with_rule(SizeMatch)
        .with_rule(ResolutionMatch)
        .with_rule(RefreshRateMatch)
        .with_rule(PanelTypeMatch)
        .with_rule(BudgetMatch)
        .with_rule(ColorAccuracy)
        .with_rule(HdrPerformance)
        .with_rule(FeaturesMatch)
        .with_rule(BonusPoints)
        .with_rule(CurvedMatch)
}

/// Lab score, treating a missing or zero score as absent.
fn lab(score: Option<f64>) -> Option<f64> {
    score.filter(|s| *s != 0.0)
}

fn is_gaming(answers: &MonitorAnswers) -> bool {
    answers.uses(MonitorUse::Gaming) || answers.uses(MonitorUse::Mixed)
}

/// Averages per-use fit from lab scores across every selected use.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryUseFit;

/// Points for one use plus an optional reason and concern.
fn use_fit(purpose: MonitorUse, attrs: &MonitorAttributes) -> (f64, Option<&'static str>, Option<&'static str>) {
    let score = |s: Option<f64>| s.unwrap_or(0.0);

    match purpose {
        MonitorUse::Gaming => {
            let gaming = lab(attrs.monitor_pc_gaming_score)
                .or(lab(attrs.monitor_console_gaming_score))
                .unwrap_or(0.0);
            if gaming >= 8.5 {
                (25.0, Some("Excellent gaming performance"), None)
            } else if gaming >= 7.5 {
                (20.0, Some("Great gaming performance"), None)
            } else if gaming >= 6.5 {
                (15.0, None, None)
            } else {
                (8.0, None, Some("Gaming performance may be limited"))
            }
        }
        MonitorUse::ContentCreation => {
            let avg = (score(attrs.monitor_editing_score)
                + score(attrs.monitor_color_accuracy_score))
                / 2.0;
            if avg >= 8.5 {
                (25.0, Some("Excellent for content creation"), None)
            } else if avg >= 7.5 {
                (20.0, Some("Great color accuracy for editing"), None)
            } else if avg >= 6.5 {
                (15.0, None, None)
            } else {
                (
                    8.0,
                    None,
                    Some("Color accuracy may be limited for professional work"),
                )
            }
        }
        MonitorUse::Office => {
            let office = score(attrs.monitor_office_score);
            if office >= 8.0 {
                (25.0, Some("Excellent for office work"), None)
            } else if office >= 7.0 {
                (20.0, Some("Great for productivity"), None)
            } else if office >= 6.0 {
                (15.0, None, None)
            } else {
                (10.0, None, None)
            }
        }
        MonitorUse::Mixed => {
            let avg = (score(attrs.monitor_overall_score)
                + score(attrs.monitor_pc_gaming_score)
                + score(attrs.monitor_office_score)
                + score(attrs.monitor_editing_score))
                / 4.0;
            if avg >= 8.0 {
                (25.0, Some("Versatile across use cases"), None)
            } else if avg >= 7.0 {
                (20.0, Some("Good all-around performance"), None)
            } else if avg >= 6.0 {
                (15.0, None, None)
            } else {
                (10.0, None, None)
            }
        }
    }
}

impl ScoringRule<MonitorAnswers, MonitorAttributes> for PrimaryUseFit {
    fn name(&self) -> &'static str {
        "Primary Use Fit"
    }

    fn weight(&self) -> f64 {
        0.25
    }

    fn max_points(&self) -> f64 {
        25.0
    }

    fn evaluate(&self, answers: &MonitorAnswers, product: &MonitorProduct) -> RuleResult {
        let fits: Vec<_> = answers
            .primary_use
            .iter()
            .map(|&u| use_fit(u, &product.core_attributes))
            .collect();

        let points = if fits.is_empty() {
            10.0
        } else {
            let total: f64 = fits.iter().map(|f| f.0).sum();
            (total / fits.len() as f64).round().min(25.0)
        };

        RuleResult {
            points,
            reason: fits.iter().find_map(|f| f.1).map(String::from),
            concern: fits.iter().find_map(|f| f.2).map(String::from),
        }
    }
}

/// Size class against the size preference.
#[derive(Debug, Clone, Copy)]
pub struct SizeMatch;

impl ScoringRule<MonitorAnswers, MonitorAttributes> for SizeMatch {
    fn name(&self) -> &'static str {
        "Size Match"
    }

    fn weight(&self) -> f64 {
        0.15
    }

    fn max_points(&self) -> f64 {
        15.0
    }

    fn evaluate(&self, answers: &MonitorAnswers, product: &MonitorProduct) -> RuleResult {
        use MonitorSizeClass as S;

        let pref = answers.size_preference;
        let (ideal, adjacent): (&[S], &[S]) = match pref {
            SizePreference::Any => {
                return RuleResult::matched(12.0, "Size fits your flexible preference");
            }
            SizePreference::Compact => (&[S::Compact], &[S::Standard]),
            SizePreference::Standard => (&[S::Standard], &[S::Compact, S::Large]),
            SizePreference::Large => (&[S::Large], &[S::Standard, S::Ultrawide]),
            SizePreference::Ultrawide => {
                (&[S::Ultrawide, S::SuperUltrawide], &[S::Large, S::SuperUltrawide])
            }
        };

        let attrs = &product.core_attributes;
        let class = attrs.monitor_size_class;
        let inches = attrs.monitor_size_inches;
        let direction = if inches < 27.0 { "smaller" } else { "larger" };

        if ideal.contains(&class) {
            return RuleResult::matched(
                15.0,
                format!("{inches}\" is ideal for your {pref} preference"),
            );
        }
        if adjacent.contains(&class) {
            return RuleResult::matched(
                10.0,
                format!("{inches}\" is close to your {pref} preference"),
            )
            .with_concern(format!("Slightly {direction} than ideal"));
        }

        RuleResult::flagged(
            5.0,
            format!("{inches}\" may be {direction} than preferred"),
        )
    }
}

/// Resolution class against the preference, rewarding sensible size and
/// pixel-density pairings.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionMatch;

/// Panel sizes (inches) where each resolution has a comfortable density.
fn ideal_sizes(class: MonitorResolutionClass) -> &'static [f64] {
    match class {
        MonitorResolutionClass::P1080 => &[24.0, 25.0, 27.0],
        MonitorResolutionClass::P1440 => &[27.0, 28.0, 32.0],
        MonitorResolutionClass::K4 => &[27.0, 28.0, 32.0, 34.0, 38.0, 42.0, 48.0],
        MonitorResolutionClass::K5 => &[27.0, 32.0],
        MonitorResolutionClass::K8 => &[32.0, 65.0],
    }
}

impl ScoringRule<MonitorAnswers, MonitorAttributes> for ResolutionMatch {
    fn name(&self) -> &'static str {
        "Resolution Match"
    }

    fn weight(&self) -> f64 {
        0.15
    }

    fn max_points(&self) -> f64 {
        15.0
    }

    fn evaluate(&self, answers: &MonitorAnswers, product: &MonitorProduct) -> RuleResult {
        use MonitorResolutionClass as R;

        let pref = answers.resolution;
        let (wanted, adjacent): (R, &[R]) = match pref {
            ResolutionPreference::Any => {
                return RuleResult::matched(12.0, "Resolution meets your flexible preference");
            }
            ResolutionPreference::P1080 => (R::P1080, &[R::P1440]),
            ResolutionPreference::P1440 => (R::P1440, &[R::P1080, R::K4]),
            ResolutionPreference::K4 => (R::K4, &[R::P1440, R::K5]),
        };

        let attrs = &product.core_attributes;
        let res = attrs.monitor_resolution_class;
        let inches = attrs.monitor_size_inches;

        if res == wanted {
            let ideal_pairing = ideal_sizes(res)
                .iter()
                .any(|size| (inches - size).abs() <= 2.0);
            if ideal_pairing {
                return RuleResult::matched(
                    15.0,
                    format!("{res} resolution at {inches}\" is an excellent combination"),
                );
            }
            return RuleResult::matched(13.0, format!("{res} resolution as requested"));
        }

        if adjacent.contains(&res) {
            let higher = res == R::K4 || (res == R::P1440 && wanted == R::P1080);
            return if higher {
                RuleResult::matched(9.0, format!("Higher {res} resolution available"))
            } else {
                RuleResult::flagged(9.0, format!("Lower {res} resolution than preferred"))
            };
        }

        RuleResult::flagged(5.0, format!("{res} differs from your {pref} preference"))
    }
}

/// Maximum refresh rate against the refresh target; matters mostly for
/// gaming.
#[derive(Debug, Clone, Copy)]
pub struct RefreshRateMatch;

impl ScoringRule<MonitorAnswers, MonitorAttributes> for RefreshRateMatch {
    fn name(&self) -> &'static str {
        "Refresh Rate Match"
    }

    fn weight(&self) -> f64 {
        0.12
    }

    fn max_points(&self) -> f64 {
        12.0
    }

    fn evaluate(&self, answers: &MonitorAnswers, product: &MonitorProduct) -> RuleResult {
        let hz = product.core_attributes.monitor_max_refresh_hz;
        let targets = answers.refresh_rate.and_then(|p| p.targets());

        let Some((min, ideal)) = targets else {
            if !is_gaming(answers) {
                return RuleResult::matched(10.0, "Refresh rate adequate for your use case");
            }
            if hz >= 144.0 {
                return RuleResult::matched(12.0, format!("Smooth {hz}Hz for responsive gaming"));
            }
            return RuleResult::new(8.0);
        };

        // `targets` is only `Some` when a concrete preference was given.
        let pref = answers
            .refresh_rate
            .map(|p| p.as_str())
            .unwrap_or_default();

        if hz >= ideal {
            RuleResult::matched(12.0, format!("{hz}Hz exceeds your {pref} refresh rate needs"))
        } else if hz >= min {
            RuleResult::matched(10.0, format!("{hz}Hz meets your {pref} refresh rate needs"))
        } else {
            RuleResult::flagged(5.0, format!("{hz}Hz may feel less smooth for {pref} use"))
        }
    }
}

/// Panel technology against the preferred panel types.
#[derive(Debug, Clone, Copy)]
pub struct PanelTypeMatch;

impl ScoringRule<MonitorAnswers, MonitorAttributes> for PanelTypeMatch {
    fn name(&self) -> &'static str {
        "Panel Type Match"
    }

    fn weight(&self) -> f64 {
        0.08
    }

    fn max_points(&self) -> f64 {
        8.0
    }

    fn evaluate(&self, answers: &MonitorAnswers, product: &MonitorProduct) -> RuleResult {
        let Some(prefs) = answers.panel_type.as_deref() else {
            return RuleResult::matched(6.0, "Panel type fits your needs");
        };
        if prefs.contains(&PanelPreference::Any) {
            return RuleResult::matched(6.0, "Panel type fits your needs");
        }

        let panel = product.core_attributes.monitor_panel_type;
        for pref in prefs {
            match pref {
                PanelPreference::Ips if panel == MonitorPanelType::Ips => {
                    return RuleResult::matched(
                        8.0,
                        "IPS panel with great colors and viewing angles",
                    );
                }
                PanelPreference::Va if panel == MonitorPanelType::Va => {
                    return RuleResult::matched(8.0, "VA panel with deep blacks and high contrast");
                }
                PanelPreference::Oled if panel.is_oled() => {
                    return RuleResult::matched(
                        8.0,
                        "OLED panel with perfect blacks and instant response",
                    );
                }
                _ => {}
            }
        }

        if prefs.contains(&PanelPreference::Oled) && panel == MonitorPanelType::MiniLed {
            return RuleResult::matched(5.0, "Mini-LED offers HDR quality approaching OLED")
                .with_concern("Not a true OLED panel");
        }

        RuleResult::flagged(4.0, format!("{panel} differs from your preferred panel type"))
    }
}

/// Price tier against the selected budget brackets.
#[derive(Debug, Clone, Copy)]
pub struct BudgetMatch;

impl ScoringRule<MonitorAnswers, MonitorAttributes> for BudgetMatch {
    fn name(&self) -> &'static str {
        "Budget Match"
    }

    fn weight(&self) -> f64 {
        0.08
    }

    fn max_points(&self) -> f64 {
        8.0
    }

    fn evaluate(&self, answers: &MonitorAnswers, product: &MonitorProduct) -> RuleResult {
        let budgets = answers.budget.as_deref().unwrap_or_default();
        if budgets.is_empty() {
            return RuleResult::new(6.0);
        }

        let tier = product.core_attributes.price_tier;
        if let Some(budget) = budgets.iter().find(|b| b.tiers().contains(&tier)) {
            return RuleResult::matched(8.0, format!("Price fits your {budget} budget"));
        }

        let budget_selected = budgets.contains(&crate::answers::MonitorBudget::Budget);
        if budget_selected && tier.index() >= 3 {
            return RuleResult::flagged(3.0, "May exceed your budget");
        }

        RuleResult::flagged(5.0, "Price may not align with your budget preference")
    }
}

/// Gamut coverage and calibration for color-sensitive work.
#[derive(Debug, Clone, Copy)]
pub struct ColorAccuracy;

impl ScoringRule<MonitorAnswers, MonitorAttributes> for ColorAccuracy {
    fn name(&self) -> &'static str {
        "Color Accuracy"
    }

    fn weight(&self) -> f64 {
        0.06
    }

    fn max_points(&self) -> f64 {
        6.0
    }

    fn evaluate(&self, answers: &MonitorAnswers, product: &MonitorProduct) -> RuleResult {
        let needs_color =
            answers.uses(MonitorUse::ContentCreation) || answers.uses(MonitorUse::Mixed);
        let pref = answers.color_accuracy;

        if !needs_color && matches!(pref, None | Some(ColorAccuracyNeed::Basic)) {
            return RuleResult::new(5.0);
        }

        let attrs = &product.core_attributes;
        let srgb = attrs.monitor_srgb_coverage;
        let adobe = attrs.monitor_adobe_rgb_coverage.unwrap_or(0.0);
        let score = attrs.monitor_color_accuracy_score.unwrap_or(0.0);
        let tier = attrs.monitor_color_accuracy;

        match pref {
            Some(ColorAccuracyNeed::Professional) => {
                if tier == MonitorColorAccuracy::Professional || (adobe >= 90.0 && score >= 8.5) {
                    RuleResult::matched(6.0, "Professional-grade color accuracy")
                } else if tier == MonitorColorAccuracy::Great || (srgb >= 100.0 && score >= 8.0) {
                    RuleResult::matched(4.0, "Great color accuracy")
                        .with_concern("May not meet professional standards")
                } else {
                    RuleResult::flagged(
                        2.0,
                        "Color accuracy may be insufficient for professional work",
                    )
                }
            }
            Some(ColorAccuracyNeed::Standard) => {
                if srgb >= 99.0 || score >= 8.0 {
                    RuleResult::matched(6.0, "Accurate sRGB colors")
                } else if srgb >= 95.0 {
                    RuleResult::new(4.0)
                } else {
                    RuleResult::flagged(3.0, "Color accuracy is limited")
                }
            }
            _ if needs_color && score >= 8.0 => {
                RuleResult::matched(6.0, "Excellent color accuracy")
            }
            _ => RuleResult::new(4.0),
        }
    }
}

/// HDR grade and lab score when HDR matters to the user.
#[derive(Debug, Clone, Copy)]
pub struct HdrPerformance;

impl ScoringRule<MonitorAnswers, MonitorAttributes> for HdrPerformance {
    fn name(&self) -> &'static str {
        "HDR Performance"
    }

    fn weight(&self) -> f64 {
        0.04
    }

    fn max_points(&self) -> f64 {
        4.0
    }

    fn evaluate(&self, answers: &MonitorAnswers, product: &MonitorProduct) -> RuleResult {
        let attrs = &product.core_attributes;
        let level = attrs.monitor_hdr_level;
        let score = attrs.monitor_hdr_picture_score.unwrap_or(0.0);

        match answers.hdr_needs {
            None | Some(HdrNeed::NotNeeded) => RuleResult::new(3.0),
            Some(HdrNeed::Important) => {
                if level == MonitorHdrLevel::Excellent || score >= 8.5 {
                    RuleResult::matched(4.0, "Excellent HDR with true high brightness")
                } else if level == MonitorHdrLevel::Great || score >= 7.0 {
                    RuleResult::matched(3.0, "Good HDR performance")
                } else {
                    RuleResult::flagged(1.0, "HDR performance may be underwhelming")
                }
            }
            Some(HdrNeed::NiceToHave) => {
                if !attrs.monitor_hdr10 {
                    RuleResult::flagged(2.0, "No HDR support")
                } else if matches!(level, MonitorHdrLevel::Excellent | MonitorHdrLevel::Great) {
                    RuleResult::matched(4.0, "HDR support adds to the experience")
                } else {
                    RuleResult::matched(3.0, "Basic HDR support available")
                }
            }
        }
    }
}

/// USB-C, ergonomics and speakers when requested.
#[derive(Debug, Clone, Copy)]
pub struct FeaturesMatch;

impl ScoringRule<MonitorAnswers, MonitorAttributes> for FeaturesMatch {
    fn name(&self) -> &'static str {
        "Features Match"
    }

    fn weight(&self) -> f64 {
        0.04
    }

    fn max_points(&self) -> f64 {
        4.0
    }

    fn evaluate(&self, answers: &MonitorAnswers, product: &MonitorProduct) -> RuleResult {
        let Some(features) = answers.features.as_deref() else {
            return RuleResult::new(3.0);
        };
        if features.contains(&FeatureNeed::Any) {
            return RuleResult::new(3.0);
        }

        let attrs = &product.core_attributes;
        let mut matched = 0.0;
        let mut reasons = Vec::new();

        for feature in features {
            match feature {
                FeatureNeed::UsbC if attrs.monitor_usb_c_dp => {
                    matched += 1.0;
                    match attrs.monitor_usb_c_pd_watts {
                        Some(watts) if watts >= 60.0 => {
                            reasons.push(format!("USB-C with {watts}W power delivery"));
                        }
                        _ => reasons.push(String::from("USB-C connectivity")),
                    }
                }
                FeatureNeed::Ergonomics => {
                    let count = attrs.monitor_ergonomic_features.len();
                    if count >= 4 {
                        matched += 1.0;
                        reasons.push(String::from("Full ergonomic adjustability"));
                    } else if count >= 2 {
                        matched += 0.5;
                    }
                }
                FeatureNeed::Speakers if attrs.monitor_speakers => {
                    matched += 1.0;
                    reasons.push(String::from("Built-in speakers"));
                }
                _ => {}
            }
        }

        let requested = features.len();
        let ratio = if requested > 0 {
            matched / requested as f64
        } else {
            1.0
        };

        let mut result = if ratio >= 1.0 {
            RuleResult::new(4.0).with_reason(reasons.join(", "))
        } else if ratio >= 0.5 {
            let mut r = RuleResult::new(3.0);
            if let Some(first) = reasons.into_iter().next() {
                r = r.with_reason(first);
            }
            r
        } else {
            RuleResult::flagged(2.0, "Missing some requested features")
        };
        if result.reason.as_deref() == Some("") {
            result.reason = None;
        }
        result
    }
}

/// Value pick, certified VRR, strong overall score and low input lag.
#[derive(Debug, Clone, Copy)]
pub struct BonusPoints;

impl ScoringRule<MonitorAnswers, MonitorAttributes> for BonusPoints {
    fn name(&self) -> &'static str {
        "Bonus Points"
    }

    fn weight(&self) -> f64 {
        0.03
    }

    fn max_points(&self) -> f64 {
        3.0
    }

    fn evaluate(&self, answers: &MonitorAnswers, product: &MonitorProduct) -> RuleResult {
        let attrs = &product.core_attributes;
        let gaming = is_gaming(answers);
        let mut bonus: f64 = 0.0;
        let mut reasons = Vec::new();

        if attrs.monitor_value_pick {
            bonus += 1.0;
            reasons.push("Excellent value");
        }

        if gaming && attrs.monitor_vrr {
            if attrs.monitor_gsync == MonitorGSync::Certified {
                bonus += 1.0;
                reasons.push("G-SYNC certified");
            } else if attrs.monitor_freesync && attrs.monitor_gsync == MonitorGSync::Compatible {
                bonus += 0.5;
                reasons.push("VRR support");
            }
        }

        if attrs.monitor_overall_score.unwrap_or(0.0) >= 8.0 {
            bonus += 0.5;
        }

        if gaming && lab(attrs.monitor_input_lag_ms).is_some_and(|lag| lag <= 5.0) {
            bonus += 0.5;
            reasons.push("Very low input lag");
        }

        let mut result = RuleResult::new(bonus.round().min(3.0));
        if !reasons.is_empty() {
            result = result.with_reason(reasons.join(", "));
        }
        result
    }
}

/// Curved versus flat screen.
#[derive(Debug, Clone, Copy)]
pub struct CurvedMatch;

impl ScoringRule<MonitorAnswers, MonitorAttributes> for CurvedMatch {
    fn name(&self) -> &'static str {
        "Curved Preference"
    }

    fn weight(&self) -> f64 {
        0.03
    }

    fn max_points(&self) -> f64 {
        3.0
    }

    fn evaluate(&self, answers: &MonitorAnswers, product: &MonitorProduct) -> RuleResult {
        let curved = product.core_attributes.monitor_curved;
        match answers.curved {
            None | Some(CurvedPreference::Either) => RuleResult::new(2.0),
            Some(CurvedPreference::Curved) if curved => {
                RuleResult::matched(3.0, "Curved screen for immersive experience")
            }
            Some(CurvedPreference::Flat) if !curved => {
                RuleResult::matched(3.0, "Flat screen as preferred")
            }
            Some(CurvedPreference::Curved) => RuleResult::flagged(1.0, "Screen is flat"),
            Some(CurvedPreference::Flat) => RuleResult::flagged(1.0, "Screen is curved"),
        }
    }
}
