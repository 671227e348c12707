//! Keyboard quiz answers.

use serde::{Deserialize, Serialize};

use super::{combine_ceilings, Answers};
use crate::models::wire_enum;
use crate::validation::{require_selection, ValidationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct KeyboardAnswers {
    pub primary_use: Vec<KeyboardUse>,
    pub form_factor: Vec<LayoutPreference>,
    pub switch_type: Vec<SwitchPreference>,
    pub gaming_features: GamingFeatureNeeds,
    pub connectivity: ConnectivityPreference,
    pub priority_feature: Vec<PriorityFeature>,
    pub budget: Vec<KeyboardBudget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_technology: Option<Vec<SwitchTechnology>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_controls: Option<MediaControlNeeds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keycap_material: Option<KeycapPreference>,
}

impl KeyboardAnswers {
    pub fn new(connectivity: ConnectivityPreference) -> Self {
        Self {
            primary_use: vec![KeyboardUse::CasualGaming],
            form_factor: vec![LayoutPreference::Tkl],
            switch_type: vec![SwitchPreference::NoPreference],
            gaming_features: GamingFeatureNeeds::NiceToHave,
            connectivity,
            priority_feature: vec![PriorityFeature::TypingFeel],
            budget: vec![KeyboardBudget::MidRange],
            switch_technology: None,
            media_controls: None,
            keycap_material: None,
        }
    }
}

impl Answers for KeyboardAnswers {
    fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        require_selection("primary-use", &self.primary_use, &mut errors);
        require_selection("form-factor", &self.form_factor, &mut errors);
        require_selection("switch-type", &self.switch_type, &mut errors);
        require_selection("priority-feature", &self.priority_feature, &mut errors);
        require_selection("budget", &self.budget, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn budget_ceiling(&self) -> Option<usize> {
        combine_ceilings(self.budget.iter().map(|b| b.tier_ceiling()))
    }
}

wire_enum! {
    pub enum KeyboardUse {
        CompetitiveGaming => "competitive-gaming",
        CasualGaming => "casual-gaming",
        Productivity => "productivity",
        Programming => "programming",
    }
}

wire_enum! {
    pub enum LayoutPreference {
        FullSize => "full-size",
        Tkl => "tkl",
        Percent75 => "75-percent",
        Percent60To65 => "60-65-percent",
    }
}

wire_enum! {
    pub enum SwitchPreference {
        Linear => "linear",
        Tactile => "tactile",
        Clicky => "clicky",
        NoPreference => "no-preference",
    }
}

wire_enum! {
    pub enum GamingFeatureNeeds {
        Essential => "essential",
        NiceToHave => "nice-to-have",
        NotImportant => "not-important",
    }
}

wire_enum! {
    pub enum ConnectivityPreference {
        WirelessEssential => "wireless-essential",
        WirelessPreferred => "wireless-preferred",
        WiredPreferred => "wired-preferred",
        NoPreference => "no-preference",
    }
}

wire_enum! {
    pub enum PriorityFeature {
        Performance => "performance",
        TypingFeel => "typing-feel",
        Customization => "customization",
        Quiet => "quiet",
    }
}

wire_enum! {
    pub enum KeyboardBudget {
        Budget => "budget",
        MidRange => "mid-range",
        Premium => "premium",
        Enthusiast => "enthusiast",
    }
}

impl KeyboardBudget {
    /// Highest price tier index this selection admits.
    pub fn tier_ceiling(self) -> Option<usize> {
        match self {
            KeyboardBudget::Budget => Some(1),
            KeyboardBudget::MidRange => Some(3),
            KeyboardBudget::Premium => Some(4),
            KeyboardBudget::Enthusiast => None,
        }
    }

    /// Average street price band in USD.
    pub fn price_band(self) -> (f64, f64) {
        match self {
            KeyboardBudget::Budget => (0.0, 100.0),
            KeyboardBudget::MidRange => (100.0, 175.0),
            KeyboardBudget::Premium => (175.0, 250.0),
            KeyboardBudget::Enthusiast => (250.0, 1000.0),
        }
    }
}

wire_enum! {
    pub enum SwitchTechnology {
        Mechanical => "mechanical",
        Magnetic => "magnetic",
        Optical => "optical",
        Any => "any",
    }
}

wire_enum! {
    pub enum MediaControlNeeds {
        Essential => "essential",
        NiceToHave => "nice-to-have",
        NotNeeded => "not-needed",
    }
}

wire_enum! {
    pub enum KeycapPreference {
        Pbt => "pbt",
        Abs => "abs",
        Any => "any",
    }
}
