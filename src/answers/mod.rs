//! Typed quiz answers.
//!
//! Answers arrive as JSON objects keyed by question id (`hand-size`,
//! `grip-style`, ...). Single-choice questions carry a string, multi-select
//! questions an array of option ids. Unknown keys are ignored, unknown option
//! ids are rejected.
//!
//! | Category | Struct | Required keys |
//! |----------|--------|---------------|
//! | Mouse | [`MouseAnswers`] | hand-size, grip-style, weight-preference, wireless, primary-use |
//! | Audio | [`AudioAnswers`] | primary-use, form-factor, mic-needs, session-length, budget |
//! | Keyboard | [`KeyboardAnswers`] | primary-use, form-factor, switch-type, gaming-features, connectivity, priority-feature, budget |
//! | Monitor | [`MonitorAnswers`] | primary-use, size-preference, resolution |

mod audio;
mod keyboard;
mod monitor;
mod mouse;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::models::Category;
use crate::validation::ValidationResult;

pub use audio::{
    AudioAnswers, AudioBudget, AudioUse, FormFactorPreference, MicNeeds, NoiseEnvironment,
    SessionLength, SoundSignaturePreference, WirelessRequirement,
};
pub use keyboard::{
    ConnectivityPreference, GamingFeatureNeeds, KeyboardAnswers, KeyboardBudget, KeyboardUse,
    KeycapPreference, LayoutPreference, MediaControlNeeds, PriorityFeature, SwitchPreference,
    SwitchTechnology,
};
pub use monitor::{
    ColorAccuracyNeed, CurvedPreference, FeatureNeed, HdrNeed, MonitorAnswers, MonitorBudget,
    MonitorUse, PanelPreference, RefreshPreference, ResolutionPreference, SizePreference,
};
pub use mouse::{
    ButtonNeeds, GamingGenre, GripStyle, HandSize, Handedness, MouseAnswers, MouseUse,
    ShapePreference, WeightPreference, WirelessChoice,
};

/// Query keys whose values are comma-separated lists.
pub const MULTI_SELECT_KEYS: &[&str] = &[
    "grip-style",
    "weight-preference",
    "primary-use",
    "shape-profile",
    "gaming-genre",
    "button-needs",
    "form-factor",
    "session-length",
    "budget",
    "sound-signature",
    "switch-type",
    "priority-feature",
    "switch-technology",
    "panel-type",
    "features",
];

/// Completeness checks beyond what deserialization enforces.
pub trait Answers {
    /// Reports every required multi-select answer that has no selection.
    fn validate(&self) -> ValidationResult;

    /// Highest acceptable price tier index, `None` for no ceiling.
    fn budget_ceiling(&self) -> Option<usize>;
}

/// A single value or a list of values.
///
/// Used for questions that are multi-select in the quiz but stored as a
/// single choice in older links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(v) => std::slice::from_ref(v),
            OneOrMany::Many(v) => v,
        }
    }
}

impl<T: PartialEq> OneOrMany<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(String::from).collect())
    }
}

/// Validated answers for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnswerSet {
    Mouse(MouseAnswers),
    Audio(AudioAnswers),
    Keyboard(KeyboardAnswers),
    Monitor(MonitorAnswers),
}

impl AnswerSet {
    /// Deserializes and validates answers for `category`.
    pub fn parse(category: Category, value: Value) -> Result<Self> {
        let set = match category {
            Category::Mouse => AnswerSet::Mouse(serde_json::from_value(value)?),
            Category::Audio => AnswerSet::Audio(serde_json::from_value(value)?),
            Category::Keyboard => AnswerSet::Keyboard(serde_json::from_value(value)?),
            Category::Monitor => AnswerSet::Monitor(serde_json::from_value(value)?),
        };
        set.validate().map_err(Error::InvalidAnswers)?;
        Ok(set)
    }

    pub fn category(&self) -> Category {
        match self {
            AnswerSet::Mouse(_) => Category::Mouse,
            AnswerSet::Audio(_) => Category::Audio,
            AnswerSet::Keyboard(_) => Category::Keyboard,
            AnswerSet::Monitor(_) => Category::Monitor,
        }
    }

    fn inner(&self) -> &dyn Answers {
        match self {
            AnswerSet::Mouse(a) => a,
            AnswerSet::Audio(a) => a,
            AnswerSet::Keyboard(a) => a,
            AnswerSet::Monitor(a) => a,
        }
    }
}

impl Answers for AnswerSet {
    fn validate(&self) -> ValidationResult {
        self.inner().validate()
    }

    fn budget_ceiling(&self) -> Option<usize> {
        self.inner().budget_ceiling()
    }
}

/// Converts URL query pairs into an answers object.
///
/// Keys listed in [`MULTI_SELECT_KEYS`] are split on commas with empty
/// pieces dropped; other values stay strings. A repeated key keeps its last
/// value.
pub fn query_to_answers<I, K, V>(pairs: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    let mut obj = Map::new();
    for (key, value) in pairs {
        let key = key.into();
        let value = value.as_ref();
        let entry = if MULTI_SELECT_KEYS.contains(&key.as_str()) {
            Value::Array(
                value
                    .split(',')
                    .filter(|s| !s.is_empty())
                    .map(|s| Value::String(s.to_string()))
                    .collect(),
            )
        } else {
            Value::String(value.to_string())
        };
        obj.insert(key, entry);
    }
    Value::Object(obj)
}

/// Ceiling for a set of budget selections: `None` if there are no
/// selections or any selection is unbounded, otherwise the largest bounded
/// index.
pub(crate) fn combine_ceilings<I>(ceilings: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<usize>>,
{
    let mut max = None;
    for ceiling in ceilings {
        let c = ceiling?;
        max = Some(max.map_or(c, |m: usize| m.max(c)));
    }
    max
}
