//! Audio attributes: headsets, headphones, IEMs and earbuds.

use serde::{Deserialize, Serialize};

use super::product::{
    Availability, ConnectionType, CoreAttributes, LatencyClass, PlatformFit, PriceTier,
    SoftwareSupport,
};

/// Core attributes of an audio record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioAttributes {
    pub price_tier: PriceTier,
    pub platform_fit: Vec<PlatformFit>,
    pub connection_type: Vec<ConnectionType>,
    pub wireless: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_life_hr: Option<f64>,
    pub latency_class: LatencyClass,
    pub software_support: SoftwareSupport,
    pub eq_support: bool,
    pub availability_class: Availability,

    pub audio_type: AudioType,
    pub audio_open_back: bool,
    pub audio_has_mic: bool,
    pub audio_mic_type: AudioMicType,
    /// Voice quality; absent when the product has no microphone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_mic_quality: Option<AudioRating>,
    pub audio_sound_signature: AudioSoundSignature,
    /// Positional audio and imaging for competitive shooters.
    pub audio_competitive_fps: AudioRating,
    pub audio_immersion: AudioImmersion,
    pub audio_isolation: AudioIsolation,
    pub audio_anc: bool,
    pub audio_comfort: AudioComfort,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_weight_g: Option<f64>,
    pub audio_needs_amp: AudioNeedsAmp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_impedance_ohm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_sensitivity_db: Option<f64>,
    pub audio_driver_type: AudioDriverType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_wireless_codec_support: Option<Vec<AudioWirelessCodec>>,
    pub audio_virtual_surround: Vec<AudioVirtualSurround>,
    pub audio_repairability: AudioRating,
    pub audio_value_pick: bool,
}

impl AudioAttributes {
    /// Whether any cabled connection is offered.
    pub fn has_wired_mode(&self) -> bool {
        self.connection_type.iter().any(|c| c.is_wired())
    }
}

impl Default for AudioAttributes {
    fn default() -> Self {
        Self {
            price_tier: PriceTier::default(),
            platform_fit: vec![PlatformFit::Pc],
            connection_type: vec![ConnectionType::Wired35mm],
            wireless: false,
            battery_life_hr: None,
            latency_class: LatencyClass::default(),
            software_support: SoftwareSupport::default(),
            eq_support: false,
            availability_class: Availability::default(),
            audio_type: AudioType::Headset,
            audio_open_back: false,
            audio_has_mic: true,
            audio_mic_type: AudioMicType::DetachableBoom,
            audio_mic_quality: Some(AudioRating::Ok),
            audio_sound_signature: AudioSoundSignature::Neutral,
            audio_competitive_fps: AudioRating::Good,
            audio_immersion: AudioImmersion::Good,
            audio_isolation: AudioIsolation::Medium,
            audio_anc: false,
            audio_comfort: AudioComfort::Good,
            audio_weight_g: None,
            audio_needs_amp: AudioNeedsAmp::No,
            audio_impedance_ohm: None,
            audio_sensitivity_db: None,
            audio_driver_type: AudioDriverType::Dynamic,
            audio_wireless_codec_support: None,
            audio_virtual_surround: Vec::new(),
            audio_repairability: AudioRating::Ok,
            audio_value_pick: false,
        }
    }
}

impl CoreAttributes for AudioAttributes {
    fn price_tier(&self) -> PriceTier {
        self.price_tier
    }

    fn is_wireless(&self) -> bool {
        self.wireless
    }
}

wire_enum! {
    pub enum AudioType {
        Headset => "headset",
        Headphone => "headphone",
        Iem => "iem",
        Earbud => "earbud",
    }
}

wire_enum! {
    pub enum AudioMicType {
        None => "none",
        Integrated => "integrated",
        DetachableBoom => "detachable_boom",
        FixedBoom => "fixed_boom",
        Inline => "inline",
    }
}

wire_enum! {
    /// Four-step quality scale shared by mic quality, competitive imaging and
    /// repairability.
    pub enum AudioRating {
        Poor => "poor",
        Ok => "ok",
        Good => "good",
        Great => "great",
    }
}

wire_enum! {
    pub enum AudioSoundSignature {
        Neutral => "neutral",
        Warm => "warm",
        Bright => "bright",
        VShaped => "v_shaped",
        Bassy => "bassy",
        MidForward => "mid_forward",
    }
}

wire_enum! {
    pub enum AudioImmersion {
        Ok => "ok",
        Good => "good",
        Great => "great",
    }
}

wire_enum! {
    pub enum AudioIsolation {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

wire_enum! {
    pub enum AudioComfort {
        Poor => "poor",
        Ok => "ok",
        Good => "good",
        Great => "great",
    }
}

wire_enum! {
    pub enum AudioNeedsAmp {
        No => "no",
        Maybe => "maybe",
        Yes => "yes",
    }
}

wire_enum! {
    pub enum AudioDriverType {
        Dynamic => "dynamic",
        Planar => "planar",
        BalancedArmature => "balanced_armature",
        Hybrid => "hybrid",
        Electrostatic => "electrostatic",
        Unknown => "unknown",
    }
}

wire_enum! {
    pub enum AudioWirelessCodec {
        Sbc => "sbc",
        Aac => "aac",
        Aptx => "aptx",
        AptxAdaptive => "aptx_adaptive",
        AptxLl => "aptx_ll",
        Ldac => "ldac",
        Lc3 => "lc3",
    }
}

wire_enum! {
    pub enum AudioVirtualSurround {
        None => "none",
        DolbyAtmos => "dolby_atmos",
        DtsHeadphoneX => "dts_headphone_x",
        Sonic => "sonic",
        SteelseriesSpatial => "steelseries_spatial",
        VendorSpecific => "vendor_specific",
    }
}
