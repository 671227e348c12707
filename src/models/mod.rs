//! Product domain models.
//!
//! Provides the catalog data types for every peripheral category. Field and
//! value names mirror the JSON product files one-to-one so records load
//! without any mapping layer.
//!
//! # Category Mappings
//!
//! | Category | URL slug | Data file | Attributes |
//! |----------|----------|-----------|------------|
//! | Mouse | `mice` | `mice.json` | [`MouseAttributes`] |
//! | Audio | `audio` | `audio.json` | [`AudioAttributes`] |
//! | Keyboard | `keyboards` | `keyboards.json` | [`KeyboardAttributes`] |
//! | Monitor | `monitors` | `monitors.json` | [`MonitorAttributes`] |

/// Declares a closed value set with its wire spelling.
///
/// Generates the enum (serde-renamed to the wire string), an `ALL` list in
/// declaration order, `as_str()` and `Display`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant),+
        }

        impl $name {
            /// Every value in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire spelling of this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use wire_enum;

mod audio;
mod keyboard;
mod monitor;
mod mouse;
mod product;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use audio::{
    AudioAttributes, AudioComfort, AudioDriverType, AudioImmersion, AudioIsolation, AudioMicType,
    AudioNeedsAmp, AudioRating, AudioSoundSignature, AudioType, AudioVirtualSurround,
    AudioWirelessCodec,
};
pub use keyboard::{
    KeyboardAttributes, KeyboardBuildQuality, KeyboardCaseMaterial, KeyboardFeatureTag,
    KeyboardFormFactor, KeyboardKeycapMaterial, KeyboardKeycapProfile, KeyboardMountStyle,
    KeyboardOutputType, KeyboardSwitchFeel, KeyboardSwitchType, KeyboardUseFit,
};
pub use monitor::{
    MonitorAspectRatio, MonitorAttributes, MonitorColorAccuracy, MonitorConnectivity,
    MonitorErgonomicFeature, MonitorFeatureTag, MonitorGSync, MonitorHdrLevel, MonitorPanelType,
    MonitorRefreshClass, MonitorResolutionClass, MonitorSizeClass, MonitorUseFit,
};
pub use mouse::{
    MouseAttributes, MouseBuildQuality, MouseButtonCountClass, MouseCoating, MouseFeelTag,
    MouseFeetQuality, MouseGameFit, MouseGripFit, MouseHandedness, MouseScrollFeature,
    MouseSensorClass, MouseShapeProfile, MouseSizeClass, MouseWeightClass,
};
pub use product::{
    Availability, ConnectionType, CoreAttributes, DataConfidence, DataQuality, LatencyClass,
    PlatformFit, PollingRate, PriceTier, PrimarySourceType, Product, SoftwareSupport,
};

pub type MouseProduct = Product<MouseAttributes>;
pub type AudioProduct = Product<AudioAttributes>;
pub type KeyboardProduct = Product<KeyboardAttributes>;
pub type MonitorProduct = Product<MonitorAttributes>;

/// Peripheral category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Mouse,
    Audio,
    Keyboard,
    Monitor,
}

impl Category {
    /// All categories in catalog order.
    pub const ALL: [Category; 4] = [
        Category::Mouse,
        Category::Keyboard,
        Category::Audio,
        Category::Monitor,
    ];

    /// Singular identifier used in product records and the search API.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mouse => "mouse",
            Category::Audio => "audio",
            Category::Keyboard => "keyboard",
            Category::Monitor => "monitor",
        }
    }

    /// Plural slug used by the listing endpoint.
    pub fn plural_slug(self) -> &'static str {
        match self {
            Category::Mouse => "mice",
            Category::Audio => "audio",
            Category::Keyboard => "keyboards",
            Category::Monitor => "monitors",
        }
    }

    /// Name of the JSON data file holding this category.
    pub fn file_name(self) -> &'static str {
        match self {
            Category::Mouse => "mice.json",
            Category::Audio => "audio.json",
            Category::Keyboard => "keyboards.json",
            Category::Monitor => "monitors.json",
        }
    }

    /// Resolves a plural listing slug (`mice`, `keyboards`, ...).
    pub fn from_plural_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.plural_slug() == slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| crate::error::Error::UnknownCategory(s.to_string()))
    }
}
