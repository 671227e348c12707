//! Question sets per category.

use super::{DefaultAnswer, Question, QuestionCategory, QuizAnswers, QuizOption};
use crate::models::Category;

use DefaultAnswer::{Many, One};
use QuestionCategory::{Advanced, Core, Standard};

/// Questions for `category` in quiz order.
pub fn questions(category: Category) -> &'static [Question] {
    match category {
        Category::Mouse => &MOUSE,
        Category::Audio => &AUDIO,
        Category::Keyboard => &KEYBOARD,
        Category::Monitor => &MONITOR,
    }
}

const fn opt(id: &'static str, title: &'static str) -> QuizOption {
    QuizOption { id, title }
}

/// Selected values for `key`, empty when unanswered.
fn selected<'a>(answers: &'a QuizAnswers, key: &str) -> &'a [String] {
    answers
        .get(key)
        .map(|a| a.as_slice())
        .unwrap_or_default()
}

fn selects(answers: &QuizAnswers, key: &str, values: &[&str]) -> bool {
    selected(answers, key)
        .iter()
        .any(|v| values.contains(&v.as_str()))
}

/// True unless every selection for `key` equals `value`.
fn not_only(answers: &QuizAnswers, key: &str, value: &str) -> bool {
    let chosen = selected(answers, key);
    chosen.is_empty() || !chosen.iter().all(|v| v == value)
}

fn grip_answered(a: &QuizAnswers) -> bool {
    !selected(a, "grip-style").is_empty()
}

fn aims_for_precision(a: &QuizAnswers) -> bool {
    selects(a, "primary-use", &["precision", "mixed"])
}

fn not_iem_only(a: &QuizAnswers) -> bool {
    not_only(a, "form-factor", "iem")
}

fn wants_gaming_switches(a: &QuizAnswers) -> bool {
    selects(a, "primary-use", &["competitive-gaming", "casual-gaming"])
        || selects(a, "priority-feature", &["performance"])
        || selects(a, "gaming-features", &["essential", "nice-to-have"])
}

fn has_media_room(a: &QuizAnswers) -> bool {
    not_only(a, "form-factor", "60-65-percent")
}

fn cares_about_keycaps(a: &QuizAnswers) -> bool {
    selects(a, "budget", &["premium", "enthusiast"])
        || selects(a, "priority-feature", &["typing-feel"])
}

fn plays_games(a: &QuizAnswers) -> bool {
    selects(a, "primary-use", &["gaming", "mixed"])
}

fn edits_color(a: &QuizAnswers) -> bool {
    selects(a, "primary-use", &["content-creation", "mixed"])
}

fn watches_hdr(a: &QuizAnswers) -> bool {
    selects(a, "primary-use", &["gaming", "content-creation"])
}

static MOUSE: [Question; 9] = [
    Question {
        id: "hand-size",
        title: "What's your hand size?",
        category: Core,
        importance: 9,
        multi_select: false,
        default: None,
        options: &[opt("small", "Small"), opt("medium", "Medium"), opt("large", "Large")],
        show_when: None,
    },
    Question {
        id: "grip-style",
        title: "How do you grip your mouse?",
        category: Core,
        importance: 10,
        multi_select: true,
        default: None,
        options: &[
            opt("palm", "Palm Grip"),
            opt("claw", "Claw Grip"),
            opt("fingertip", "Fingertip Grip"),
            opt("relaxed-claw", "Relaxed Claw"),
        ],
        show_when: None,
    },
    Question {
        id: "wireless",
        title: "Wireless or wired?",
        category: Core,
        importance: 7,
        multi_select: false,
        default: None,
        options: &[
            opt("wireless", "Wireless"),
            opt("wired", "Wired"),
            opt("either", "No Preference"),
        ],
        show_when: None,
    },
    Question {
        id: "weight-preference",
        title: "What weight do you prefer?",
        category: Standard,
        importance: 8,
        multi_select: true,
        default: Some(Many(&["light", "medium"])),
        options: &[
            opt("ultralight", "Ultralight"),
            opt("light", "Light"),
            opt("medium", "Medium"),
            opt("heavy", "Heavy"),
        ],
        show_when: None,
    },
    Question {
        id: "primary-use",
        title: "What's your primary use?",
        category: Standard,
        importance: 6,
        multi_select: true,
        default: Some(Many(&["mixed"])),
        options: &[
            opt("precision", "Precision Work"),
            opt("productivity", "Productivity"),
            opt("creative", "Creative Work"),
            opt("mixed", "Mixed Use"),
        ],
        show_when: None,
    },
    Question {
        id: "handedness",
        title: "Which hand do you use for your mouse?",
        category: Standard,
        importance: 8,
        multi_select: false,
        default: Some(One("right")),
        options: &[
            opt("right", "Right-handed"),
            opt("left", "Left-handed"),
            opt("ambidextrous", "Either/Both"),
        ],
        show_when: None,
    },
    Question {
        id: "shape-profile",
        title: "What mouse shape profile do you prefer?",
        category: Advanced,
        importance: 7,
        multi_select: true,
        default: Some(Many(&["any"])),
        options: &[
            opt("low_hump", "Low / Flat"),
            opt("rear_hump", "Rear Hump"),
            opt("center_hump", "Center Hump"),
            opt("ergo_hump", "Ergonomic"),
            opt("any", "No Preference"),
        ],
        show_when: Some(grip_answered),
    },
    Question {
        id: "gaming-genre",
        title: "What games do you mainly play?",
        category: Advanced,
        importance: 5,
        multi_select: true,
        default: Some(Many(&["general"])),
        options: &[
            opt("fps", "FPS / Shooters"),
            opt("moba", "MOBA / RTS"),
            opt("mmo", "MMO / RPG"),
            opt("general", "Various / Casual"),
        ],
        show_when: Some(aims_for_precision),
    },
    Question {
        id: "button-needs",
        title: "How many buttons do you need?",
        category: Advanced,
        importance: 4,
        multi_select: true,
        default: Some(Many(&["standard"])),
        options: &[
            opt("minimal", "Minimal (2-3)"),
            opt("standard", "Standard (4-6)"),
            opt("many", "Many (7+)"),
            opt("mmo_grid", "MMO Grid (12+)"),
        ],
        show_when: None,
    },
];

static AUDIO: [Question; 8] = [
    Question {
        id: "primary-use",
        title: "What's your main use case?",
        category: Core,
        importance: 10,
        multi_select: true,
        default: None,
        options: &[
            opt("competitive", "Precision Audio"),
            opt("immersive", "Immersive Listening"),
            opt("mixed", "Mixed Use"),
            opt("streaming", "Streaming / Content"),
        ],
        show_when: None,
    },
    Question {
        id: "form-factor",
        title: "What form factor do you prefer?",
        category: Core,
        importance: 9,
        multi_select: true,
        default: None,
        options: &[
            opt("over-ear", "Over-Ear Headset"),
            opt("over-ear-headphone", "Over-Ear Headphones"),
            opt("iem", "IEMs / Earbuds"),
            opt("open-back", "Open-Back"),
        ],
        show_when: None,
    },
    Question {
        id: "mic-needs",
        title: "How important is the microphone?",
        category: Core,
        importance: 7,
        multi_select: false,
        default: None,
        options: &[
            opt("essential", "Essential"),
            opt("nice-to-have", "Nice to Have"),
            opt("not-needed", "Not Needed"),
        ],
        show_when: None,
    },
    Question {
        id: "session-length",
        title: "How long are your listening sessions?",
        category: Standard,
        importance: 6,
        multi_select: true,
        default: Some(Many(&["medium"])),
        options: &[
            opt("short", "1-2 Hours"),
            opt("medium", "3-5 Hours"),
            opt("long", "6+ Hours"),
            opt("all-day", "All Day"),
        ],
        show_when: None,
    },
    Question {
        id: "budget",
        title: "What's your budget range?",
        category: Standard,
        importance: 5,
        multi_select: true,
        default: Some(Many(&["mid-range"])),
        options: &[
            opt("budget", "Budget Friendly"),
            opt("mid-range", "Mid-Range"),
            opt("premium", "Premium"),
            opt("no-limit", "Best of the Best"),
        ],
        show_when: None,
    },
    Question {
        id: "sound-signature",
        title: "What sound signature do you prefer?",
        category: Standard,
        importance: 8,
        multi_select: true,
        default: Some(Many(&["neutral"])),
        options: &[
            opt("neutral", "Neutral / Balanced"),
            opt("warm", "Warm"),
            opt("v_shaped", "V-Shaped / Fun"),
            opt("bright", "Bright / Detailed"),
        ],
        show_when: None,
    },
    Question {
        id: "wireless-preference",
        title: "Do you need wireless connectivity?",
        category: Standard,
        importance: 6,
        multi_select: false,
        default: Some(One("either")),
        options: &[
            opt("wireless-required", "Wireless Only"),
            opt("wireless-preferred", "Prefer Wireless"),
            opt("wired-preferred", "Prefer Wired"),
            opt("either", "No Preference"),
        ],
        show_when: None,
    },
    Question {
        id: "noise-environment",
        title: "What's your listening environment?",
        category: Advanced,
        importance: 5,
        multi_select: false,
        default: Some(One("quiet")),
        options: &[
            opt("quiet", "Quiet / Home Office"),
            opt("moderate", "Moderate / Shared Space"),
            opt("noisy", "Noisy / Office"),
        ],
        // IEMs already isolate well.
        show_when: Some(not_iem_only),
    },
];

static KEYBOARD: [Question; 10] = [
    Question {
        id: "primary-use",
        title: "What's your primary use case?",
        category: Core,
        importance: 10,
        multi_select: true,
        default: None,
        options: &[
            opt("competitive-gaming", "Competitive Gaming"),
            opt("casual-gaming", "Casual Gaming"),
            opt("productivity", "Productivity / Office"),
            opt("programming", "Programming / Typing"),
        ],
        show_when: None,
    },
    Question {
        id: "form-factor",
        title: "What size keyboard do you prefer?",
        category: Core,
        importance: 9,
        multi_select: true,
        default: None,
        options: &[
            opt("full-size", "Full-Size (100%)"),
            opt("tkl", "TKL (80%)"),
            opt("75-percent", "75% / Compact"),
            opt("60-65-percent", "60-65%"),
        ],
        show_when: None,
    },
    Question {
        id: "switch-type",
        title: "What switch feel do you prefer?",
        category: Core,
        importance: 8,
        multi_select: true,
        default: None,
        options: &[
            opt("linear", "Linear"),
            opt("tactile", "Tactile"),
            opt("clicky", "Clicky"),
            opt("no-preference", "No Preference"),
        ],
        show_when: None,
    },
    Question {
        id: "gaming-features",
        title: "How important are gaming features?",
        category: Standard,
        importance: 7,
        multi_select: false,
        default: Some(One("nice-to-have")),
        options: &[
            opt("essential", "Essential"),
            opt("nice-to-have", "Nice to Have"),
            opt("not-important", "Not Important"),
        ],
        show_when: None,
    },
    Question {
        id: "connectivity",
        title: "Wireless or wired?",
        category: Standard,
        importance: 6,
        multi_select: false,
        default: Some(One("no-preference")),
        options: &[
            opt("wireless-essential", "Wireless Essential"),
            opt("wireless-preferred", "Wireless Preferred"),
            opt("wired-preferred", "Wired Preferred"),
            opt("no-preference", "No Preference"),
        ],
        show_when: None,
    },
    Question {
        id: "priority-feature",
        title: "What's most important to you?",
        category: Standard,
        importance: 5,
        multi_select: true,
        default: Some(Many(&["typing-feel"])),
        options: &[
            opt("performance", "Raw Performance"),
            opt("typing-feel", "Typing Feel"),
            opt("customization", "Customization"),
            opt("quiet", "Quiet Operation"),
        ],
        show_when: None,
    },
    Question {
        id: "budget",
        title: "What's your budget range?",
        category: Standard,
        importance: 5,
        multi_select: true,
        default: Some(Many(&["mid-range"])),
        options: &[
            opt("budget", "Budget"),
            opt("mid-range", "Mid-Range"),
            opt("premium", "Premium"),
            opt("enthusiast", "Enthusiast"),
        ],
        show_when: None,
    },
    Question {
        id: "switch-technology",
        title: "What switch technology interests you?",
        category: Standard,
        importance: 6,
        multi_select: true,
        default: Some(Many(&["any"])),
        options: &[
            opt("mechanical", "Mechanical"),
            opt("magnetic", "Magnetic / Hall Effect"),
            opt("optical", "Optical"),
            opt("any", "No Preference"),
        ],
        show_when: Some(wants_gaming_switches),
    },
    Question {
        id: "media-controls",
        title: "Do you want dedicated media controls?",
        category: Advanced,
        importance: 3,
        multi_select: false,
        default: Some(One("nice-to-have")),
        options: &[
            opt("essential", "Essential"),
            opt("nice-to-have", "Nice to Have"),
            opt("not-needed", "Not Needed"),
        ],
        // 60-65% boards have no room for a media cluster.
        show_when: Some(has_media_room),
    },
    Question {
        id: "keycap-material",
        title: "Do you have a keycap material preference?",
        category: Advanced,
        importance: 3,
        multi_select: false,
        default: Some(One("any")),
        options: &[opt("pbt", "PBT"), opt("abs", "ABS"), opt("any", "No Preference")],
        show_when: Some(cares_about_keycaps),
    },
];

static MONITOR: [Question; 10] = [
    Question {
        id: "primary-use",
        title: "What will you primarily use this monitor for?",
        category: Core,
        importance: 10,
        multi_select: true,
        default: None,
        options: &[
            opt("gaming", "Gaming"),
            opt("content-creation", "Content Creation"),
            opt("office", "Office/Productivity"),
            opt("mixed", "Mixed/General"),
        ],
        show_when: None,
    },
    Question {
        id: "size-preference",
        title: "What screen size are you looking for?",
        category: Core,
        importance: 9,
        multi_select: false,
        default: None,
        options: &[
            opt("compact", "24-25\""),
            opt("standard", "27\""),
            opt("large", "32\""),
            opt("ultrawide", "34\"+ Ultrawide"),
            opt("any", "No Preference"),
        ],
        show_when: None,
    },
    Question {
        id: "resolution",
        title: "What resolution do you need?",
        category: Core,
        importance: 8,
        multi_select: false,
        default: None,
        options: &[
            opt("1080p", "1080p (Full HD)"),
            opt("1440p", "1440p (QHD)"),
            opt("4k", "4K (UHD)"),
            opt("any", "No Preference"),
        ],
        show_when: None,
    },
    Question {
        id: "refresh-rate",
        title: "How important is refresh rate?",
        category: Standard,
        importance: 8,
        multi_select: false,
        default: Some(One("standard")),
        options: &[
            opt("basic", "60-75Hz"),
            opt("standard", "120-165Hz"),
            opt("high", "240Hz+"),
            opt("any", "No Preference"),
        ],
        show_when: Some(plays_games),
    },
    Question {
        id: "panel-type",
        title: "Do you have a panel type preference?",
        category: Standard,
        importance: 7,
        multi_select: true,
        default: Some(Many(&["any"])),
        options: &[
            opt("ips", "IPS"),
            opt("va", "VA"),
            opt("oled", "OLED/QD-OLED"),
            opt("any", "No Preference"),
        ],
        show_when: None,
    },
    Question {
        id: "budget",
        title: "What's your budget range?",
        category: Standard,
        importance: 6,
        multi_select: true,
        default: Some(Many(&["mid-range"])),
        options: &[
            opt("budget", "Under $300"),
            opt("mid-range", "$300-600"),
            opt("premium", "$600-1000"),
            opt("enthusiast", "$1000+"),
        ],
        show_when: None,
    },
    Question {
        id: "curved",
        title: "Curved or flat screen?",
        category: Standard,
        importance: 4,
        multi_select: false,
        default: Some(One("either")),
        options: &[opt("flat", "Flat"), opt("curved", "Curved"), opt("either", "Either")],
        show_when: None,
    },
    Question {
        id: "color-accuracy",
        title: "How important is color accuracy?",
        category: Advanced,
        importance: 7,
        multi_select: false,
        default: Some(One("standard")),
        options: &[
            opt("basic", "Basic"),
            opt("standard", "Good sRGB"),
            opt("professional", "Professional"),
        ],
        show_when: Some(edits_color),
    },
    Question {
        id: "hdr-needs",
        title: "How important is HDR?",
        category: Advanced,
        importance: 5,
        multi_select: false,
        default: Some(One("nice-to-have")),
        options: &[
            opt("not-needed", "Not Important"),
            opt("nice-to-have", "Nice to Have"),
            opt("important", "Important"),
        ],
        show_when: Some(watches_hdr),
    },
    Question {
        id: "features",
        title: "What features matter to you?",
        category: Advanced,
        importance: 5,
        multi_select: true,
        default: Some(Many(&["any"])),
        options: &[
            opt("usb-c", "USB-C with Power Delivery"),
            opt("ergonomics", "Full Ergonomic Stand"),
            opt("speakers", "Built-in Speakers"),
            opt("any", "No Specific Needs"),
        ],
        show_when: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::answers::{OneOrMany, MULTI_SELECT_KEYS};

    fn answers(pairs: &[(&str, OneOrMany<String>)]) -> QuizAnswers {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_question_ids_unique() {
        for category in Category::ALL {
            let ids: HashSet<_> = questions(category).iter().map(|q| q.id).collect();
            assert_eq!(ids.len(), questions(category).len(), "{category}");
        }
    }

    #[test]
    fn test_defaults_are_valid_options() {
        for category in Category::ALL {
            for q in questions(category) {
                let Some(default) = q.default else { continue };
                for value in default.to_answer().as_slice() {
                    assert!(q.has_option(value), "{}: {value}", q.id);
                }
                assert_eq!(q.multi_select, matches!(default, Many(_)), "{}", q.id);
            }
        }
    }

    #[test]
    fn test_multi_select_questions_are_query_lists() {
        for category in Category::ALL {
            for q in questions(category).iter().filter(|q| q.multi_select) {
                assert!(MULTI_SELECT_KEYS.contains(&q.id), "{}", q.id);
            }
        }
    }

    #[test]
    fn test_core_questions_have_no_default() {
        for category in Category::ALL {
            for q in questions(category).iter().filter(|q| q.category == Core) {
                assert!(q.default.is_none(), "{}", q.id);
            }
        }
    }

    #[test]
    fn test_audio_noise_hidden_for_iem_only() {
        let q = &AUDIO[7];
        assert_eq!(q.id, "noise-environment");
        assert!(q.is_shown(&QuizAnswers::new()));
        assert!(!q.is_shown(&answers(&[("form-factor", vec!["iem"].into())])));
        assert!(q.is_shown(&answers(&[("form-factor", vec!["iem", "over-ear"].into())])));
    }

    #[test]
    fn test_keyboard_switch_technology_condition() {
        let q = &KEYBOARD[7];
        assert_eq!(q.id, "switch-technology");
        assert!(!q.is_shown(&QuizAnswers::new()));
        assert!(q.is_shown(&answers(&[("gaming-features", "nice-to-have".into())])));
        assert!(q.is_shown(&answers(&[("primary-use", vec!["casual-gaming"].into())])));
        assert!(!q.is_shown(&answers(&[
            ("primary-use", vec!["programming"].into()),
            ("gaming-features", "not-important".into()),
        ])));
    }

    #[test]
    fn test_monitor_refresh_condition() {
        let q = &MONITOR[3];
        assert_eq!(q.id, "refresh-rate");
        assert!(q.is_shown(&answers(&[("primary-use", vec!["mixed"].into())])));
        assert!(!q.is_shown(&answers(&[("primary-use", vec!["office"].into())])));
    }
}
