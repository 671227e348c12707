//! Mouse quiz answers.

use serde::{Deserialize, Serialize};

use super::{Answers, OneOrMany};
use crate::models::wire_enum;
use crate::validation::{require_selection, ValidationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MouseAnswers {
    pub hand_size: HandSize,
    pub grip_style: Vec<GripStyle>,
    pub weight_preference: Vec<WeightPreference>,
    pub wireless: WirelessChoice,
    pub primary_use: Vec<MouseUse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handedness: Option<Handedness>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_profile: Option<Vec<ShapePreference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gaming_genre: Option<Vec<GamingGenre>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_needs: Option<OneOrMany<ButtonNeeds>>,
}

impl MouseAnswers {
    /// Minimal answer set used as a starting point in tests and tools.
    pub fn new(hand_size: HandSize, wireless: WirelessChoice) -> Self {
        Self {
            hand_size,
            grip_style: vec![GripStyle::Palm],
            weight_preference: vec![WeightPreference::Light],
            wireless,
            primary_use: vec![MouseUse::Mixed],
            handedness: None,
            shape_profile: None,
            gaming_genre: None,
            button_needs: None,
        }
    }
}

impl Answers for MouseAnswers {
    fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        require_selection("grip-style", &self.grip_style, &mut errors);
        require_selection("weight-preference", &self.weight_preference, &mut errors);
        require_selection("primary-use", &self.primary_use, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn budget_ceiling(&self) -> Option<usize> {
        None
    }
}

wire_enum! {
    pub enum HandSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

wire_enum! {
    pub enum GripStyle {
        Palm => "palm",
        Claw => "claw",
        Fingertip => "fingertip",
        RelaxedClaw => "relaxed-claw",
    }
}

wire_enum! {
    pub enum WeightPreference {
        Ultralight => "ultralight",
        Light => "light",
        Medium => "medium",
        Heavy => "heavy",
    }
}

wire_enum! {
    pub enum WirelessChoice {
        Wireless => "wireless",
        Wired => "wired",
        Either => "either",
    }
}

wire_enum! {
    pub enum MouseUse {
        Precision => "precision",
        Productivity => "productivity",
        Creative => "creative",
        Mixed => "mixed",
    }
}

wire_enum! {
    pub enum Handedness {
        Right => "right",
        Left => "left",
        Ambidextrous => "ambidextrous",
    }
}

wire_enum! {
    pub enum ShapePreference {
        LowHump => "low_hump",
        RearHump => "rear_hump",
        CenterHump => "center_hump",
        ErgoHump => "ergo_hump",
        Any => "any",
    }
}

wire_enum! {
    pub enum GamingGenre {
        Fps => "fps",
        Moba => "moba",
        Mmo => "mmo",
        General => "general",
    }
}

wire_enum! {
    pub enum ButtonNeeds {
        Minimal => "minimal",
        Standard => "standard",
        Many => "many",
        MmoGrid => "mmo_grid",
    }
}
