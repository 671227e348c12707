//! Monitor quiz answers.

use serde::{Deserialize, Serialize};

use super::{combine_ceilings, Answers};
use crate::models::{wire_enum, PriceTier};
use crate::validation::{require_selection, ValidationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MonitorAnswers {
    pub primary_use: Vec<MonitorUse>,
    pub size_preference: SizePreference,
    pub resolution: ResolutionPreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_rate: Option<RefreshPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_type: Option<Vec<PanelPreference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Vec<MonitorBudget>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curved: Option<CurvedPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_accuracy: Option<ColorAccuracyNeed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdr_needs: Option<HdrNeed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<FeatureNeed>>,
}

impl MonitorAnswers {
    pub fn new(size_preference: SizePreference, resolution: ResolutionPreference) -> Self {
        Self {
            primary_use: vec![MonitorUse::Mixed],
            size_preference,
            resolution,
            refresh_rate: None,
            panel_type: None,
            budget: None,
            curved: None,
            color_accuracy: None,
            hdr_needs: None,
            features: None,
        }
    }

    pub fn uses(&self, purpose: MonitorUse) -> bool {
        self.primary_use.contains(&purpose)
    }
}

impl Answers for MonitorAnswers {
    fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        require_selection("primary-use", &self.primary_use, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn budget_ceiling(&self) -> Option<usize> {
        let budget = self.budget.as_deref().unwrap_or_default();
        combine_ceilings(budget.iter().map(|b| b.tier_ceiling()))
    }
}

wire_enum! {
    pub enum MonitorUse {
        Gaming => "gaming",
        ContentCreation => "content-creation",
        Office => "office",
        Mixed => "mixed",
    }
}

wire_enum! {
    pub enum SizePreference {
        Compact => "compact",
        Standard => "standard",
        Large => "large",
        Ultrawide => "ultrawide",
        Any => "any",
    }
}

wire_enum! {
    pub enum ResolutionPreference {
        P1080 => "1080p",
        P1440 => "1440p",
        K4 => "4k",
        Any => "any",
    }
}

wire_enum! {
    pub enum RefreshPreference {
        Basic => "basic",
        Standard => "standard",
        High => "high",
        Any => "any",
    }
}

impl RefreshPreference {
    /// `(minimum, ideal)` refresh rate in Hz.
    pub fn targets(self) -> Option<(f64, f64)> {
        match self {
            RefreshPreference::Basic => Some((60.0, 75.0)),
            RefreshPreference::Standard => Some((120.0, 165.0)),
            RefreshPreference::High => Some((240.0, 360.0)),
            RefreshPreference::Any => None,
        }
    }
}

wire_enum! {
    pub enum PanelPreference {
        Ips => "ips",
        Va => "va",
        Oled => "oled",
        Any => "any",
    }
}

wire_enum! {
    pub enum MonitorBudget {
        Budget => "budget",
        MidRange => "mid-range",
        Premium => "premium",
        Enthusiast => "enthusiast",
    }
}

impl MonitorBudget {
    /// Highest price tier index this selection admits.
    pub fn tier_ceiling(self) -> Option<usize> {
        match self {
            MonitorBudget::Budget => Some(1),
            MonitorBudget::MidRange => Some(3),
            MonitorBudget::Premium => Some(4),
            MonitorBudget::Enthusiast => None,
        }
    }

    /// Price tiers that fit this budget.
    pub fn tiers(self) -> &'static [PriceTier] {
        match self {
            MonitorBudget::Budget => &[PriceTier::Budget, PriceTier::LowerMidrange],
            MonitorBudget::MidRange => &[
                PriceTier::LowerMidrange,
                PriceTier::Midrange,
                PriceTier::UpperMidrange,
            ],
            MonitorBudget::Premium => &[PriceTier::UpperMidrange, PriceTier::Premium],
            MonitorBudget::Enthusiast => &[PriceTier::Premium, PriceTier::Flagship],
        }
    }
}

wire_enum! {
    pub enum CurvedPreference {
        Flat => "flat",
        Curved => "curved",
        Either => "either",
    }
}

wire_enum! {
    pub enum ColorAccuracyNeed {
        Basic => "basic",
        Standard => "standard",
        Professional => "professional",
    }
}

wire_enum! {
    pub enum HdrNeed {
        NotNeeded => "not-needed",
        NiceToHave => "nice-to-have",
        Important => "important",
    }
}

wire_enum! {
    pub enum FeatureNeed {
        UsbC => "usb-c",
        Ergonomics => "ergonomics",
        Speakers => "speakers",
        Any => "any",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_minimal() {
        let answers: MonitorAnswers = serde_json::from_value(json!({
            "primary-use": ["gaming", "content-creation"],
            "size-preference": "standard",
            "resolution": "1440p",
        }))
        .unwrap();

        assert!(answers.uses(MonitorUse::ContentCreation));
        assert!(!answers.uses(MonitorUse::Office));
        assert_eq!(answers.refresh_rate, None);
        assert_eq!(answers.budget_ceiling(), None);
        assert!(answers.validate().is_ok());
    }

    #[test]
    fn test_budget_ceiling_and_tiers() {
        let mut answers = MonitorAnswers::new(SizePreference::Any, ResolutionPreference::K4);
        answers.budget = Some(vec![MonitorBudget::Budget]);
        assert_eq!(answers.budget_ceiling(), Some(1));
        assert!(MonitorBudget::MidRange
            .tiers()
            .contains(&PriceTier::UpperMidrange));
    }

    #[test]
    fn test_refresh_targets() {
        assert_eq!(RefreshPreference::High.targets(), Some((240.0, 360.0)));
        assert_eq!(RefreshPreference::Any.targets(), None);
    }
}
