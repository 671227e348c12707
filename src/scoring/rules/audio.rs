//! Audio scoring rules for headsets, headphones, IEMs and earbuds.
//!
//! Weights sum to 1.0: form factor 0.20, primary use 0.15, microphone 0.15,
//! comfort 0.10, budget 0.10, bonus 0.05, sound signature 0.10, wireless
//! 0.08, noise environment 0.07.

use super::{best, best_with_versatility, capitalize, Versatility};
use crate::answers::{
    AudioAnswers, AudioBudget, AudioUse, FormFactorPreference, MicNeeds, NoiseEnvironment,
    SessionLength, SoundSignaturePreference, WirelessRequirement,
};
use crate::models::{
    AudioAttributes, AudioComfort, AudioImmersion, AudioIsolation, AudioMicType, AudioProduct,
    AudioRating, AudioSoundSignature, AudioType, PriceTier,
};
use crate::scoring::{RuleResult, ScoringEngine, ScoringRule};

/// All audio rules in evaluation order.
pub fn engine() -> ScoringEngine<AudioAnswers, AudioAttributes> {
    ScoringEngine::new()
        .with_rule(FormFactor)
        .with_rule(PrimaryUse)
        .with_rule(Microphone)
        .with_rule(ComfortSession)
        .with_rule(Budget)
        .with_rule(BonusPoints)
        .with_rule(SoundSignature)
        .with_rule(WirelessPreference)
        .with_rule(NoiseEnvironmentFit)
}

fn rating_points(rating: AudioRating) -> f64 {
    match rating {
        AudioRating::Great => 20.0,
        AudioRating::Good => 15.0,
        AudioRating::Ok => 10.0,
        AudioRating::Poor => 5.0,
    }
}

fn immersion_points(immersion: AudioImmersion) -> f64 {
    match immersion {
        AudioImmersion::Great => 20.0,
        AudioImmersion::Good => 15.0,
        AudioImmersion::Ok => 10.0,
    }
}

fn price_display(product: &AudioProduct) -> String {
    let [min, max] = product.price_range_usd;
    if min == max {
        format!("${min}")
    } else {
        format!("${min}-{max}")
    }
}

/// Housing type and back design against the preferred form factors.
#[derive(Debug, Clone, Copy)]
pub struct FormFactor;

fn evaluate_form_factor(pref: FormFactorPreference, attrs: &AudioAttributes) -> RuleResult {
    let kind = attrs.audio_type;
    let open = attrs.audio_open_back;

    match pref {
        FormFactorPreference::OverEar => match (kind, open) {
            (AudioType::Headset, false) => {
                return RuleResult::matched(25.0, "Over-ear headset with closed-back design");
            }
            (AudioType::Headphone, false) if attrs.audio_has_mic => {
                return RuleResult::matched(22.0, "Over-ear headphone with microphone");
            }
            (AudioType::Headphone, false) => {
                return RuleResult::matched(15.0, "Over-ear closed-back headphone")
                    .with_concern("No built-in microphone");
            }
            (AudioType::Headset, true) => {
                return RuleResult::matched(12.0, "Over-ear headset (open-back)")
                    .with_concern("Open-back design leaks sound");
            }
            _ => {}
        },
        FormFactorPreference::OverEarHeadphone => match kind {
            AudioType::Headphone if !open => {
                return RuleResult::matched(
                    25.0,
                    "Over-ear closed-back headphone for focused listening",
                );
            }
            AudioType::Headphone => {
                return RuleResult::matched(
                    20.0,
                    "Over-ear headphone with open-back design for wider soundstage",
                );
            }
            AudioType::Headset => {
                return RuleResult::matched(
                    15.0,
                    "Gaming headset (has microphone you may not need)",
                );
            }
            _ => {}
        },
        FormFactorPreference::Iem => {
            return match kind {
                AudioType::Iem => {
                    RuleResult::matched(25.0, "In-ear monitors for portable, detailed audio")
                }
                AudioType::Earbud => {
                    RuleResult::matched(20.0, "Earbuds for comfortable, portable listening")
                }
                _ => RuleResult::flagged(
                    3.0,
                    "Over-ear form factor doesn't match your IEM/earbud preference",
                ),
            };
        }
        FormFactorPreference::OpenBack => {
            if open {
                let desc = if kind == AudioType::Headset {
                    "headset"
                } else {
                    "headphone"
                };
                return RuleResult::matched(
                    25.0,
                    format!("Open-back {desc} for natural, wide soundstage"),
                );
            }
            return RuleResult::flagged(
                8.0,
                "Closed-back design doesn't provide the open soundstage you prefer",
            );
        }
    }

    RuleResult::flagged(5.0, format!("{kind} form factor differs from your preference"))
}

impl ScoringRule<AudioAnswers, AudioAttributes> for FormFactor {
    fn name(&self) -> &'static str {
        "Form Factor"
    }

    fn weight(&self) -> f64 {
        0.2
    }

    fn max_points(&self) -> f64 {
        25.0
    }

    fn evaluate(&self, answers: &AudioAnswers, product: &AudioProduct) -> RuleResult {
        best(
            answers
                .form_factor
                .iter()
                .map(|&p| evaluate_form_factor(p, &product.core_attributes))
                .collect(),
        )
    }
}

/// Competitive imaging, immersion and mic quality against the selected uses.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryUse;

fn evaluate_use(purpose: AudioUse, attrs: &AudioAttributes) -> RuleResult {
    let competitive = attrs.audio_competitive_fps;
    let immersion = attrs.audio_immersion;

    match purpose {
        AudioUse::Competitive => match competitive {
            AudioRating::Great => RuleResult::matched(
                20.0,
                "Excellent positional audio and imaging for competitive play",
            ),
            AudioRating::Good => {
                RuleResult::matched(15.0, "Good competitive audio with clear positioning")
            }
            AudioRating::Ok => RuleResult::flagged(
                10.0,
                "Adequate but not optimized for competitive audio",
            ),
            AudioRating::Poor => {
                RuleResult::flagged(5.0, "May lack precision needed for competitive play")
            }
        },
        AudioUse::Immersive => {
            let signature = attrs.audio_sound_signature;
            let sig_bonus = if matches!(
                signature,
                AudioSoundSignature::Warm | AudioSoundSignature::Bassy | AudioSoundSignature::VShaped
            ) {
                2.0
            } else {
                0.0
            };
            let base = immersion_points(immersion);
            let points = (base + sig_bonus).min(20.0);

            match immersion {
                AudioImmersion::Great if sig_bonus > 0.0 => RuleResult::matched(
                    points,
                    format!("Excellent immersion with {signature} sound signature"),
                ),
                AudioImmersion::Great => RuleResult::matched(
                    points,
                    "Excellent immersive audio quality with engaging presentation",
                ),
                AudioImmersion::Good => {
                    RuleResult::matched(points, "Good immersive audio for engaging experiences")
                }
                AudioImmersion::Ok => RuleResult::flagged(
                    base,
                    "May not provide the immersive experience you're looking for",
                ),
            }
        }
        AudioUse::Mixed => {
            if competitive == AudioRating::Good && immersion == AudioImmersion::Good {
                return RuleResult::matched(
                    18.0,
                    "Well-balanced for both competitive and immersive use",
                );
            }
            // Immersion has no poor grade.
            let comp_great = competitive == AudioRating::Great;
            if comp_great || (immersion == AudioImmersion::Great && competitive != AudioRating::Poor)
            {
                let reason = if comp_great {
                    "Excellent competitive audio, good for immersion too"
                } else {
                    "Excellent immersion, capable for competitive use"
                };
                return RuleResult::matched(16.0, reason);
            }

            let avg = ((rating_points(competitive) + immersion_points(immersion)) / 2.0).round();
            let result = RuleResult::matched(avg, "Usable for mixed purposes");
            if avg < 12.0 {
                result.with_concern("May not excel at either competitive or immersive use")
            } else {
                result
            }
        }
        AudioUse::Streaming => match attrs.audio_mic_quality {
            Some(AudioRating::Great) => RuleResult::matched(
                20.0,
                "Excellent microphone quality for streaming and content creation",
            ),
            Some(AudioRating::Good) => RuleResult::matched(16.0, "Good microphone for streaming"),
            _ if !attrs.audio_has_mic => RuleResult::flagged(
                3.0,
                "No microphone included - you'll need a separate mic for streaming",
            ),
            quality => {
                let points = if quality == Some(AudioRating::Ok) {
                    10.0
                } else {
                    5.0
                };
                RuleResult::flagged(points, "Microphone quality may not meet streaming standards")
            }
        },
    }
}

impl ScoringRule<AudioAnswers, AudioAttributes> for PrimaryUse {
    fn name(&self) -> &'static str {
        "Primary Use"
    }

    fn weight(&self) -> f64 {
        0.15
    }

    fn max_points(&self) -> f64 {
        20.0
    }

    fn evaluate(&self, answers: &AudioAnswers, product: &AudioProduct) -> RuleResult {
        let results = answers
            .primary_use
            .iter()
            .map(|&u| evaluate_use(u, &product.core_attributes))
            .collect();

        best_with_versatility(
            results,
            &Versatility {
                threshold: 15.0,
                bonus: 2.0,
                max: 20.0,
                suffix: "versatile for multiple uses",
                fallback: "Versatile for multiple use cases",
            },
        )
    }
}

/// Microphone presence and quality against how much the user needs one.
#[derive(Debug, Clone, Copy)]
pub struct Microphone;

impl ScoringRule<AudioAnswers, AudioAttributes> for Microphone {
    fn name(&self) -> &'static str {
        "Microphone"
    }

    fn weight(&self) -> f64 {
        0.15
    }

    fn max_points(&self) -> f64 {
        20.0
    }

    fn evaluate(&self, answers: &AudioAnswers, product: &AudioProduct) -> RuleResult {
        let attrs = &product.core_attributes;
        let has_mic = attrs.audio_has_mic;
        let quality = attrs.audio_mic_quality;

        match answers.mic_needs {
            MicNeeds::Essential => {
                if !has_mic {
                    return RuleResult::flagged(0.0, "No microphone - you'll need a separate mic");
                }
                match quality {
                    Some(AudioRating::Great) => {
                        let reason = match attrs.audio_mic_type {
                            AudioMicType::DetachableBoom => {
                                "Excellent microphone quality with detachable boom mic"
                            }
                            AudioMicType::FixedBoom => "Excellent microphone quality with boom mic",
                            _ => "Excellent microphone quality",
                        };
                        RuleResult::matched(20.0, reason)
                    }
                    Some(AudioRating::Good) => {
                        RuleResult::matched(16.0, "Good microphone for voice chat and calls")
                    }
                    Some(AudioRating::Ok) => {
                        RuleResult::matched(10.0, "Includes microphone for basic voice chat")
                            .with_concern("Microphone quality is adequate but not exceptional")
                    }
                    _ => RuleResult::flagged(6.0, "Microphone quality may not meet your needs"),
                }
            }
            MicNeeds::NiceToHave => {
                if !has_mic {
                    return RuleResult::matched(
                        12.0,
                        "No built-in mic, but you indicated it's not essential",
                    );
                }
                match quality {
                    Some(q @ (AudioRating::Great | AudioRating::Good)) => RuleResult::matched(
                        20.0,
                        format!("Bonus: includes {q} quality microphone"),
                    ),
                    _ => RuleResult::matched(15.0, "Includes microphone for convenience"),
                }
            }
            MicNeeds::NotNeeded => {
                if has_mic {
                    RuleResult::matched(18.0, "Includes microphone (can be removed/ignored)")
                } else {
                    RuleResult::matched(
                        20.0,
                        "No microphone - clean design focused on audio quality",
                    )
                }
            }
        }
    }
}

/// Comfort grade against the longest selected session length.
#[derive(Debug, Clone, Copy)]
pub struct ComfortSession;

fn comfort_requirements(
    session: SessionLength,
) -> (&'static [AudioComfort], &'static [AudioComfort]) {
    use AudioComfort::*;
    match session {
        SessionLength::Short => (&[Great, Good, Ok], &[Poor]),
        SessionLength::Medium => (&[Great, Good], &[Ok]),
        SessionLength::Long => (&[Great], &[Good]),
        SessionLength::AllDay => (&[Great], &[]),
    }
}

fn evaluate_comfort(session: SessionLength, attrs: &AudioAttributes) -> RuleResult {
    let comfort = attrs.audio_comfort;
    let weight = attrs.audio_weight_g.filter(|w| *w != 0.0);
    let (ideal, acceptable) = comfort_requirements(session);
    let comfort_cap = capitalize(comfort.as_str());

    if ideal.contains(&comfort) {
        let points = match comfort {
            AudioComfort::Great => 15.0,
            AudioComfort::Good => 13.0,
            _ => 11.0,
        };
        let reason = match (session, comfort) {
            (SessionLength::AllDay, AudioComfort::Great) => match weight {
                Some(w) if w < 300.0 => {
                    format!("Exceptional comfort for all-day use at only {w}g")
                }
                _ => String::from("Exceptional comfort designed for extended all-day sessions"),
            },
            (SessionLength::Long, AudioComfort::Great) => {
                String::from("Excellent comfort for long sessions")
            }
            _ => format!("{comfort_cap} comfort suits {session} sessions"),
        };
        return RuleResult::matched(points, reason);
    }

    if acceptable.contains(&comfort) {
        let result = RuleResult::matched(
            9.0,
            format!("{comfort_cap} comfort is workable for {session} sessions"),
        );
        if matches!(session, SessionLength::Long | SessionLength::AllDay) {
            return result.with_concern(format!(
                "{comfort_cap} comfort may cause fatigue in very long sessions"
            ));
        }
        return result;
    }

    if session == SessionLength::AllDay {
        let points = if comfort == AudioComfort::Good { 7.0 } else { 4.0 };
        let heavy_note = match weight {
            Some(w) if w > 400.0 => format!(" ({w}g may feel heavy)"),
            _ => String::new(),
        };
        return RuleResult::flagged(
            points,
            format!("{comfort_cap} comfort may not hold up for all-day use{heavy_note}"),
        );
    }

    RuleResult::flagged(
        5.0,
        format!("{comfort_cap} comfort may not suit {session} sessions"),
    )
}

impl ScoringRule<AudioAnswers, AudioAttributes> for ComfortSession {
    fn name(&self) -> &'static str {
        "Comfort & Session"
    }

    fn weight(&self) -> f64 {
        0.1
    }

    fn max_points(&self) -> f64 {
        15.0
    }

    fn evaluate(&self, answers: &AudioAnswers, product: &AudioProduct) -> RuleResult {
        match answers.longest_session() {
            Some(session) => evaluate_comfort(session, &product.core_attributes),
            None => RuleResult::new(10.0),
        }
    }
}

/// Price tier against the selected budget brackets.
#[derive(Debug, Clone, Copy)]
pub struct Budget;

fn budget_tiers(budget: AudioBudget) -> (&'static [PriceTier], &'static [PriceTier]) {
    use PriceTier as T;
    match budget {
        AudioBudget::Budget => (&[T::Budget], &[T::Midrange]),
        AudioBudget::MidRange => (&[T::Midrange, T::UpperMidrange], &[T::Budget, T::Premium]),
        AudioBudget::Premium => (&[T::UpperMidrange, T::Premium], &[T::Midrange, T::Flagship]),
        AudioBudget::NoLimit => (
            &[T::Premium, T::Flagship],
            &[T::UpperMidrange, T::Midrange, T::Budget],
        ),
    }
}

impl ScoringRule<AudioAnswers, AudioAttributes> for Budget {
    fn name(&self) -> &'static str {
        "Budget"
    }

    fn weight(&self) -> f64 {
        0.1
    }

    fn max_points(&self) -> f64 {
        15.0
    }

    fn evaluate(&self, answers: &AudioAnswers, product: &AudioProduct) -> RuleResult {
        let tier = product.core_attributes.price_tier;
        let price = price_display(product);

        for &budget in &answers.budget {
            if budget_tiers(budget).0.contains(&tier) {
                let reason = match (budget, tier) {
                    (AudioBudget::NoLimit, PriceTier::Flagship | PriceTier::Premium) => {
                        format!("Premium option at {price} with top-tier features")
                    }
                    (AudioBudget::Budget, PriceTier::Budget) => {
                        format!("Budget-friendly at {price}")
                    }
                    _ => format!("Good value at {price} matching your budget"),
                };
                return RuleResult::matched(15.0, reason);
            }
        }

        for &budget in &answers.budget {
            if budget_tiers(budget).1.contains(&tier) {
                return match (budget, tier) {
                    (AudioBudget::Budget, PriceTier::Midrange) => {
                        RuleResult::matched(10.0, format!("Mid-range pricing at {price}"))
                            .with_concern("Slightly above budget tier but may offer better value")
                    }
                    (AudioBudget::NoLimit, _) => {
                        RuleResult::matched(12.0, format!("Priced at {price}"))
                    }
                    _ => RuleResult::matched(
                        10.0,
                        format!("{price} is near your budget preferences"),
                    ),
                };
            }
        }

        let only_budget = answers.budget == [AudioBudget::Budget];
        if only_budget && matches!(tier, PriceTier::Premium | PriceTier::Flagship) {
            return RuleResult::flagged(
                3.0,
                format!("{price} significantly exceeds your budget preference"),
            );
        }

        RuleResult::flagged(
            5.0,
            format!("{price} ({tier}) may not align with your budget preferences"),
        )
    }
}

/// Value pick, battery life and EQ extras.
#[derive(Debug, Clone, Copy)]
pub struct BonusPoints;

impl ScoringRule<AudioAnswers, AudioAttributes> for BonusPoints {
    fn name(&self) -> &'static str {
        "Bonus Points"
    }

    fn weight(&self) -> f64 {
        0.05
    }

    fn max_points(&self) -> f64 {
        5.0
    }

    fn evaluate(&self, _answers: &AudioAnswers, product: &AudioProduct) -> RuleResult {
        let attrs = &product.core_attributes;
        let mut points: f64 = 0.0;
        let mut reasons = Vec::new();

        if attrs.audio_value_pick {
            points += 2.0;
            reasons.push(String::from("excellent value"));
        }
        if let Some(battery) = attrs.battery_life_hr.filter(|b| attrs.wireless && *b > 30.0) {
            points += 2.0;
            reasons.push(format!("{battery}hr battery life"));
        }
        if attrs.eq_support {
            points += 1.0;
            reasons.push(String::from("EQ customization"));
        }

        let points = points.min(5.0);
        if points > 0.0 {
            RuleResult::matched(points, format!("Bonus: {}", reasons.join(", ")))
        } else {
            RuleResult::new(0.0)
        }
    }
}

/// Tuning against the preferred sound signatures.
#[derive(Debug, Clone, Copy)]
pub struct SoundSignature;

fn signature_of(pref: SoundSignaturePreference) -> AudioSoundSignature {
    match pref {
        SoundSignaturePreference::Neutral => AudioSoundSignature::Neutral,
        SoundSignaturePreference::Warm => AudioSoundSignature::Warm,
        SoundSignaturePreference::VShaped => AudioSoundSignature::VShaped,
        SoundSignaturePreference::Bright => AudioSoundSignature::Bright,
    }
}

fn similar_signatures(pref: SoundSignaturePreference) -> &'static [AudioSoundSignature] {
    use AudioSoundSignature::*;
    match pref {
        SoundSignaturePreference::Neutral => &[Bright],
        SoundSignaturePreference::Warm => &[Bassy, VShaped],
        SoundSignaturePreference::VShaped => &[Bassy, Warm],
        SoundSignaturePreference::Bright => &[Neutral],
    }
}

impl ScoringRule<AudioAnswers, AudioAttributes> for SoundSignature {
    fn name(&self) -> &'static str {
        "Sound Signature"
    }

    fn weight(&self) -> f64 {
        0.1
    }

    fn max_points(&self) -> f64 {
        10.0
    }

    fn evaluate(&self, answers: &AudioAnswers, product: &AudioProduct) -> RuleResult {
        let prefs = answers.sound_signature.as_deref().unwrap_or_default();
        if prefs.is_empty() {
            return RuleResult::matched(7.0, "Sound signature preference not specified");
        }

        let signature = product.core_attributes.audio_sound_signature;
        let dashed = signature.as_str().replace('_', "-");

        if prefs.iter().any(|&p| signature_of(p) == signature) {
            return RuleResult::matched(
                10.0,
                format!("{} sound signature matches your preference", capitalize(&dashed)),
            );
        }

        if prefs
            .iter()
            .any(|&p| similar_signatures(p).contains(&signature))
        {
            return RuleResult::matched(
                7.0,
                format!("{dashed} sound signature is similar to your preferences"),
            );
        }

        RuleResult::flagged(
            4.0,
            format!("{dashed} sound signature differs from your preferences"),
        )
    }
}

/// Wireless and wired availability against the connectivity preference.
#[derive(Debug, Clone, Copy)]
pub struct WirelessPreference;

impl ScoringRule<AudioAnswers, AudioAttributes> for WirelessPreference {
    fn name(&self) -> &'static str {
        "Wireless Preference"
    }

    fn weight(&self) -> f64 {
        0.08
    }

    fn max_points(&self) -> f64 {
        8.0
    }

    fn evaluate(&self, answers: &AudioAnswers, product: &AudioProduct) -> RuleResult {
        let Some(pref) = answers.wireless_preference else {
            return RuleResult::matched(6.0, "Wireless preference not specified");
        };

        let attrs = &product.core_attributes;
        let wireless = attrs.wireless;
        let wired = attrs.has_wired_mode();

        match pref {
            WirelessRequirement::WirelessRequired => {
                if wireless {
                    RuleResult::matched(8.0, "Wireless connectivity as required")
                } else {
                    RuleResult::flagged(0.0, "Wired only - does not meet wireless requirement")
                }
            }
            WirelessRequirement::WirelessPreferred => {
                if wireless {
                    RuleResult::matched(8.0, "Wireless connectivity available")
                } else if wired {
                    RuleResult::matched(
                        5.0,
                        "Wired connection (wireless preferred but not required)",
                    )
                } else {
                    RuleResult::flagged(3.0, "Limited connectivity options")
                }
            }
            WirelessRequirement::WiredPreferred => match (wired, wireless) {
                (true, false) => {
                    RuleResult::matched(8.0, "Dedicated wired connection for reliability")
                }
                (true, true) => {
                    RuleResult::matched(7.0, "Wired option available (also has wireless)")
                }
                _ => RuleResult::flagged(3.0, "Wireless only - no wired option"),
            },
            WirelessRequirement::Either => {
                if wireless {
                    RuleResult::matched(7.0, "Wireless connectivity")
                } else {
                    RuleResult::matched(7.0, "Wired connectivity")
                }
            }
        }
    }
}

/// Isolation, ANC and back design against the listening environment.
#[derive(Debug, Clone, Copy)]
pub struct NoiseEnvironmentFit;

impl ScoringRule<AudioAnswers, AudioAttributes> for NoiseEnvironmentFit {
    fn name(&self) -> &'static str {
        "Noise Environment"
    }

    fn weight(&self) -> f64 {
        0.07
    }

    fn max_points(&self) -> f64 {
        7.0
    }

    fn evaluate(&self, answers: &AudioAnswers, product: &AudioProduct) -> RuleResult {
        let Some(env) = answers.noise_environment else {
            return RuleResult::matched(5.0, "Noise environment not specified");
        };

        let attrs = &product.core_attributes;
        let isolation = attrs.audio_isolation;
        let anc = attrs.audio_anc;
        let open = attrs.audio_open_back;

        match env {
            NoiseEnvironment::Quiet => {
                if open {
                    RuleResult::matched(7.0, "Open-back design ideal for quiet listening spaces")
                } else {
                    RuleResult::matched(6.0, "Suitable for quiet environments")
                }
            }
            NoiseEnvironment::Moderate => {
                if anc {
                    RuleResult::matched(7.0, "ANC helps in moderate noise environments")
                } else if isolation == AudioIsolation::High {
                    RuleResult::matched(6.0, "Good passive isolation for moderate noise")
                } else if isolation == AudioIsolation::Medium {
                    RuleResult::matched(5.0, "Moderate isolation suits your environment")
                } else if open {
                    RuleResult::flagged(3.0, "Open-back design may let in ambient noise")
                } else {
                    RuleResult::new(4.0)
                }
            }
            NoiseEnvironment::Noisy => {
                if anc {
                    RuleResult::matched(7.0, "Active noise cancellation for noisy environments")
                } else {
                    match isolation {
                        AudioIsolation::High => {
                            RuleResult::matched(6.0, "High passive isolation for noisy spaces")
                        }
                        AudioIsolation::Medium => {
                            RuleResult::flagged(4.0, "Medium isolation may not fully block noise")
                        }
                        AudioIsolation::Low => RuleResult::flagged(
                            2.0,
                            "Low isolation not ideal for noisy environments",
                        ),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ConnectionType};

    fn product(attrs: AudioAttributes) -> AudioProduct {
        AudioProduct::new("test-headset", Category::Audio)
            .with_name("Test Headset")
            .with_price(99.0, 99.0)
            .with_attributes(attrs)
    }

    fn answers() -> AudioAnswers {
        AudioAnswers::new(MicNeeds::Essential)
    }

    #[test]
    fn test_engine_weights_sum_to_one() {
        let engine = engine();
        assert_eq!(engine.len(), 9);
        assert!((engine.total_weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_form_factor_best_of_preferences() {
        let mut a = answers();
        a.form_factor = vec![FormFactorPreference::Iem, FormFactorPreference::OverEar];

        let headset = product(AudioAttributes::default());
        let r = FormFactor.evaluate(&a, &headset);
        assert_eq!(r.points, 25.0);
        assert_eq!(r.reason.as_deref(), Some("Over-ear headset with closed-back design"));

        a.form_factor = vec![FormFactorPreference::OpenBack];
        let r = FormFactor.evaluate(&a, &headset);
        assert_eq!(r.points, 8.0);
    }

    #[test]
    fn test_form_factor_fallthrough() {
        let mut a = answers();
        a.form_factor = vec![FormFactorPreference::OverEar];
        let iem = product(AudioAttributes {
            audio_type: AudioType::Iem,
            ..AudioAttributes::default()
        });
        let r = FormFactor.evaluate(&a, &iem);
        assert_eq!(r.points, 5.0);
        assert_eq!(r.concern.as_deref(), Some("iem form factor differs from your preference"));
    }

    #[test]
    fn test_primary_use_immersive_signature_bonus() {
        let mut a = answers();
        a.primary_use = vec![AudioUse::Immersive];
        let warm = product(AudioAttributes {
            audio_immersion: AudioImmersion::Good,
            audio_sound_signature: AudioSoundSignature::Warm,
            ..AudioAttributes::default()
        });
        assert_eq!(PrimaryUse.evaluate(&a, &warm).points, 17.0);

        let great = product(AudioAttributes {
            audio_immersion: AudioImmersion::Great,
            audio_sound_signature: AudioSoundSignature::VShaped,
            ..AudioAttributes::default()
        });
        let r = PrimaryUse.evaluate(&a, &great);
        assert_eq!(r.points, 20.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("Excellent immersion with v_shaped sound signature")
        );
    }

    #[test]
    fn test_primary_use_mixed_average() {
        let mut a = answers();
        a.primary_use = vec![AudioUse::Mixed];
        let attrs = AudioAttributes {
            audio_competitive_fps: AudioRating::Ok,
            audio_immersion: AudioImmersion::Good,
            ..AudioAttributes::default()
        };
        let r = PrimaryUse.evaluate(&a, &product(attrs));
        assert_eq!(r.points, 13.0);
        assert_eq!(r.reason.as_deref(), Some("Usable for mixed purposes"));
        assert_eq!(r.concern, None);
    }

    #[test]
    fn test_primary_use_versatility() {
        let mut a = answers();
        a.primary_use = vec![AudioUse::Competitive, AudioUse::Streaming];
        let attrs = AudioAttributes {
            audio_competitive_fps: AudioRating::Good,
            audio_mic_quality: Some(AudioRating::Good),
            ..AudioAttributes::default()
        };
        let r = PrimaryUse.evaluate(&a, &product(attrs));
        assert_eq!(r.points, 18.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("Good microphone for streaming (versatile for multiple uses)")
        );
    }

    #[test]
    fn test_streaming_without_mic() {
        let mut a = answers();
        a.primary_use = vec![AudioUse::Streaming];
        let attrs = AudioAttributes {
            audio_has_mic: false,
            audio_mic_type: AudioMicType::None,
            audio_mic_quality: None,
            ..AudioAttributes::default()
        };
        assert_eq!(PrimaryUse.evaluate(&a, &product(attrs)).points, 3.0);
    }

    #[test]
    fn test_microphone_needs() {
        let great = product(AudioAttributes {
            audio_mic_quality: Some(AudioRating::Great),
            ..AudioAttributes::default()
        });
        let r = Microphone.evaluate(&answers(), &great);
        assert_eq!(r.points, 20.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("Excellent microphone quality with detachable boom mic")
        );

        let a = AudioAnswers::new(MicNeeds::NiceToHave);
        let r = Microphone.evaluate(&a, &great);
        assert_eq!(r.reason.as_deref(), Some("Bonus: includes great quality microphone"));

        let no_mic = product(AudioAttributes {
            audio_has_mic: false,
            audio_mic_quality: None,
            ..AudioAttributes::default()
        });
        assert_eq!(Microphone.evaluate(&answers(), &no_mic).points, 0.0);
        let a = AudioAnswers::new(MicNeeds::NotNeeded);
        assert_eq!(Microphone.evaluate(&a, &no_mic).points, 20.0);
    }

    #[test]
    fn test_comfort_uses_longest_session() {
        let mut a = answers();
        a.session_length = vec![SessionLength::Short, SessionLength::AllDay];

        let heavy = product(AudioAttributes {
            audio_comfort: AudioComfort::Good,
            audio_weight_g: Some(420.0),
            ..AudioAttributes::default()
        });
        let r = ComfortSession.evaluate(&a, &heavy);
        assert_eq!(r.points, 7.0);
        assert_eq!(
            r.concern.as_deref(),
            Some("Good comfort may not hold up for all-day use (420g may feel heavy)")
        );

        let light = product(AudioAttributes {
            audio_comfort: AudioComfort::Great,
            audio_weight_g: Some(250.0),
            ..AudioAttributes::default()
        });
        let r = ComfortSession.evaluate(&a, &light);
        assert_eq!(r.points, 15.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("Exceptional comfort for all-day use at only 250g")
        );
    }

    #[test]
    fn test_comfort_acceptable_for_long() {
        let mut a = answers();
        a.session_length = vec![SessionLength::Long];
        let r = ComfortSession.evaluate(&a, &product(AudioAttributes::default()));
        assert_eq!(r.points, 9.0);
        assert_eq!(r.reason.as_deref(), Some("Good comfort is workable for long sessions"));
        assert!(r.concern.is_some());
    }

    #[test]
    fn test_budget_tiers() {
        let mut a = answers();
        a.budget = vec![AudioBudget::Budget];

        let mid = product(AudioAttributes::default());
        let r = Budget.evaluate(&a, &mid);
        assert_eq!(r.points, 10.0);
        assert_eq!(r.reason.as_deref(), Some("Mid-range pricing at $99"));

        let flagship = product(AudioAttributes {
            price_tier: PriceTier::Flagship,
            ..AudioAttributes::default()
        })
        .with_price(349.0, 399.0);
        let r = Budget.evaluate(&a, &flagship);
        assert_eq!(r.points, 3.0);
        assert_eq!(
            r.concern.as_deref(),
            Some("$349-399 significantly exceeds your budget preference")
        );

        a.budget = vec![AudioBudget::MidRange];
        let lower = product(AudioAttributes {
            price_tier: PriceTier::LowerMidrange,
            ..AudioAttributes::default()
        });
        let r = Budget.evaluate(&a, &lower);
        assert_eq!(r.points, 5.0);
        assert_eq!(
            r.concern.as_deref(),
            Some("$99 (lower_midrange) may not align with your budget preferences")
        );
    }

    #[test]
    fn test_bonus_points() {
        let attrs = AudioAttributes {
            wireless: true,
            connection_type: vec![ConnectionType::Wireless24Dongle],
            battery_life_hr: Some(60.0),
            eq_support: true,
            audio_value_pick: true,
            ..AudioAttributes::default()
        };
        let r = BonusPoints.evaluate(&answers(), &product(attrs));
        assert_eq!(r.points, 5.0);
        assert_eq!(
            r.reason.as_deref(),
            Some("Bonus: excellent value, 60hr battery life, EQ customization")
        );
    }

    #[test]
    fn test_sound_signature() {
        let mut a = answers();
        assert_eq!(
            SoundSignature
                .evaluate(&a, &product(AudioAttributes::default()))
                .points,
            7.0
        );

        a.sound_signature = Some(vec![SoundSignaturePreference::Warm]);
        let bassy = product(AudioAttributes {
            audio_sound_signature: AudioSoundSignature::Bassy,
            ..AudioAttributes::default()
        });
        assert_eq!(SoundSignature.evaluate(&a, &bassy).points, 7.0);

        a.sound_signature = Some(vec![SoundSignaturePreference::VShaped]);
        let v = product(AudioAttributes {
            audio_sound_signature: AudioSoundSignature::VShaped,
            ..AudioAttributes::default()
        });
        let r = SoundSignature.evaluate(&a, &v);
        assert_eq!(r.reason.as_deref(), Some("V-shaped sound signature matches your preference"));

        let mid = product(AudioAttributes {
            audio_sound_signature: AudioSoundSignature::MidForward,
            ..AudioAttributes::default()
        });
        let r = SoundSignature.evaluate(&a, &mid);
        assert_eq!(r.points, 4.0);
        assert_eq!(
            r.concern.as_deref(),
            Some("mid-forward sound signature differs from your preferences")
        );
    }

    #[test]
    fn test_wireless_preference() {
        let mut a = answers();
        let wired = product(AudioAttributes::default());
        let hybrid = product(AudioAttributes {
            wireless: true,
            connection_type: vec![ConnectionType::Bluetooth, ConnectionType::Wired35mm],
            ..AudioAttributes::default()
        });

        a.wireless_preference = Some(WirelessRequirement::WirelessRequired);
        assert_eq!(WirelessPreference.evaluate(&a, &wired).points, 0.0);

        a.wireless_preference = Some(WirelessRequirement::WiredPreferred);
        assert_eq!(WirelessPreference.evaluate(&a, &wired).points, 8.0);
        assert_eq!(WirelessPreference.evaluate(&a, &hybrid).points, 7.0);
    }

    #[test]
    fn test_noise_environment() {
        let mut a = answers();
        let open = product(AudioAttributes {
            audio_open_back: true,
            audio_isolation: AudioIsolation::Low,
            ..AudioAttributes::default()
        });

        a.noise_environment = Some(NoiseEnvironment::Quiet);
        assert_eq!(NoiseEnvironmentFit.evaluate(&a, &open).points, 7.0);

        a.noise_environment = Some(NoiseEnvironment::Moderate);
        assert_eq!(NoiseEnvironmentFit.evaluate(&a, &open).points, 3.0);

        a.noise_environment = Some(NoiseEnvironment::Noisy);
        let r = NoiseEnvironmentFit.evaluate(&a, &open);
        assert_eq!(r.points, 2.0);

        let anc = product(AudioAttributes {
            audio_anc: true,
            ..AudioAttributes::default()
        });
        assert_eq!(NoiseEnvironmentFit.evaluate(&a, &anc).points, 7.0);
    }
}
