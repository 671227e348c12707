//! Audio quiz answers.

use serde::{Deserialize, Serialize};

use super::{combine_ceilings, Answers};
use crate::models::wire_enum;
use crate::validation::{require_selection, ValidationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AudioAnswers {
    pub primary_use: Vec<AudioUse>,
    pub form_factor: Vec<FormFactorPreference>,
    pub mic_needs: MicNeeds,
    pub session_length: Vec<SessionLength>,
    pub budget: Vec<AudioBudget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_signature: Option<Vec<SoundSignaturePreference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wireless_preference: Option<WirelessRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_environment: Option<NoiseEnvironment>,
}

impl AudioAnswers {
    pub fn new(mic_needs: MicNeeds) -> Self {
        Self {
            primary_use: vec![AudioUse::Mixed],
            form_factor: vec![FormFactorPreference::OverEar],
            mic_needs,
            session_length: vec![SessionLength::Medium],
            budget: vec![AudioBudget::MidRange],
            sound_signature: None,
            wireless_preference: None,
            noise_environment: None,
        }
    }

    /// Longest selected listening session.
    pub fn longest_session(&self) -> Option<SessionLength> {
        self.session_length.iter().copied().max_by_key(|s| s.rank())
    }
}

impl Answers for AudioAnswers {
    fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        require_selection("primary-use", &self.primary_use, &mut errors);
        require_selection("form-factor", &self.form_factor, &mut errors);
        require_selection("session-length", &self.session_length, &mut errors);
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
    pub enum AudioUse {
        Competitive => "competitive",
        Immersive => "immersive",
        Mixed => "mixed",
        Streaming => "streaming",
    }
}

wire_enum! {
    pub enum FormFactorPreference {
        OverEar => "over-ear",
        OverEarHeadphone => "over-ear-headphone",
        Iem => "iem",
        OpenBack => "open-back",
    }
}

wire_enum! {
    pub enum MicNeeds {
        Essential => "essential",
        NiceToHave => "nice-to-have",
        NotNeeded => "not-needed",
    }
}

wire_enum! {
    pub enum SessionLength {
        Short => "short",
        Medium => "medium",
        Long => "long",
        AllDay => "all-day",
    }
}

impl SessionLength {
    fn rank(self) -> u8 {
        match self {
            SessionLength::Short => 0,
            SessionLength::Medium => 1,
            SessionLength::Long => 2,
            SessionLength::AllDay => 3,
        }
    }
}

wire_enum! {
    pub enum AudioBudget {
        Budget => "budget",
        MidRange => "mid-range",
        Premium => "premium",
        NoLimit => "no-limit",
    }
}

impl AudioBudget {
    /// Highest price tier index this selection admits.
    pub fn tier_ceiling(self) -> Option<usize> {
        match self {
            AudioBudget::Budget => Some(1),
            AudioBudget::MidRange => Some(3),
            AudioBudget::Premium => Some(4),
            AudioBudget::NoLimit => None,
        }
    }
}

wire_enum! {
    pub enum SoundSignaturePreference {
        Neutral => "neutral",
        Warm => "warm",
        VShaped => "v_shaped",
        Bright => "bright",
    }
}

wire_enum! {
    pub enum WirelessRequirement {
        WirelessRequired => "wireless-required",
        WirelessPreferred => "wireless-preferred",
        WiredPreferred => "wired-preferred",
        Either => "either",
    }
}

wire_enum! {
    pub enum NoiseEnvironment {
        Quiet => "quiet",
        Moderate => "moderate",
        Noisy => "noisy",
    }
}
