//! Keyboard attributes.

use serde::{Deserialize, Serialize};

use super::product::{
    Availability, ConnectionType, CoreAttributes, LatencyClass, PlatformFit, PollingRate,
    PriceTier, SoftwareSupport,
};

/// Core attributes of a keyboard record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardAttributes {
    pub price_tier: PriceTier,
    pub platform_fit: Vec<PlatformFit>,
    pub connection_type: Vec<ConnectionType>,
    pub wireless: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_life_hr: Option<f64>,
    pub latency_class: LatencyClass,
    pub software_support: SoftwareSupport,
    pub availability_class: Availability,

    pub keyboard_form_factor: KeyboardFormFactor,
    pub keyboard_switch_type: KeyboardSwitchType,
    pub keyboard_switch_feel: KeyboardSwitchFeel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_switch_name: Option<String>,
    pub keyboard_output_type: KeyboardOutputType,
    pub keyboard_hot_swappable: bool,
    pub keyboard_case_material: KeyboardCaseMaterial,
    pub keyboard_mount_style: KeyboardMountStyle,
    pub keyboard_keycap_material: KeyboardKeycapMaterial,
    pub keyboard_keycap_profile: KeyboardKeycapProfile,
    pub keyboard_polling_rate_max_hz: PollingRate,
    pub keyboard_build_quality: KeyboardBuildQuality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_weight_g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_height_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_width_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_depth_mm: Option<f64>,
    /// Measured single keypress latency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_single_key_latency_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_multi_key_latency_ms: Option<f64>,
    /// Typing noise in dBA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_typing_noise_dba: Option<f64>,
    /// Lab scores on a 0-10 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_gaming_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_office_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_programming_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_raw_performance_score: Option<f64>,
    pub keyboard_has_rgb: bool,
    pub keyboard_has_per_key_rgb: bool,
    pub keyboard_shine_through_keycaps: bool,
    pub keyboard_has_knob: bool,
    pub keyboard_macro_key_count: u32,
    pub keyboard_supports_rapid_trigger: bool,
    pub keyboard_supports_socd: bool,
    pub keyboard_supports_analog: bool,
    pub keyboard_has_onboard_memory: bool,
    pub keyboard_nkro: bool,
    pub keyboard_feature_tags: Vec<KeyboardFeatureTag>,
    pub keyboard_use_fit: Vec<KeyboardUseFit>,
    pub keyboard_value_pick: bool,
}

impl KeyboardAttributes {
    pub fn has_feature(&self, tag: KeyboardFeatureTag) -> bool {
        self.keyboard_feature_tags.contains(&tag)
    }

    pub fn fits(&self, use_fit: KeyboardUseFit) -> bool {
        self.keyboard_use_fit.contains(&use_fit)
    }

    pub fn has_connection(&self, connection: ConnectionType) -> bool {
        self.connection_type.contains(&connection)
    }

    /// Polling rate in Hz.
    pub fn polling_rate_hz(&self) -> u32 {
        self.keyboard_polling_rate_max_hz.hz()
    }
}

impl Default for KeyboardAttributes {
    fn default() -> Self {
        Self {
            price_tier: PriceTier::default(),
            platform_fit: vec![PlatformFit::Pc],
            connection_type: vec![ConnectionType::WiredUsb],
            wireless: false,
            battery_life_hr: None,
            latency_class: LatencyClass::default(),
            software_support: SoftwareSupport::default(),
            availability_class: Availability::default(),
            keyboard_form_factor: KeyboardFormFactor::Tkl80Percent,
            keyboard_switch_type: KeyboardSwitchType::Mechanical,
            keyboard_switch_feel: KeyboardSwitchFeel::Linear,
            keyboard_switch_name: None,
            keyboard_output_type: KeyboardOutputType::NonAdjustable,
            keyboard_hot_swappable: false,
            keyboard_case_material: KeyboardCaseMaterial::Plastic,
            keyboard_mount_style: KeyboardMountStyle::Tray,
            keyboard_keycap_material: KeyboardKeycapMaterial::Abs,
            keyboard_keycap_profile: KeyboardKeycapProfile::Oem,
            keyboard_polling_rate_max_hz: PollingRate::Hz1000,
            keyboard_build_quality: KeyboardBuildQuality::Good,
            keyboard_weight_g: None,
            keyboard_height_mm: None,
            keyboard_width_mm: None,
            keyboard_depth_mm: None,
            keyboard_single_key_latency_ms: None,
            keyboard_multi_key_latency_ms: None,
            keyboard_typing_noise_dba: None,
            keyboard_gaming_score: None,
            keyboard_office_score: None,
            keyboard_programming_score: None,
            keyboard_raw_performance_score: None,
            keyboard_has_rgb: false,
            keyboard_has_per_key_rgb: false,
            keyboard_shine_through_keycaps: false,
            keyboard_has_knob: false,
            keyboard_macro_key_count: 0,
            keyboard_supports_rapid_trigger: false,
            keyboard_supports_socd: false,
            keyboard_supports_analog: false,
            keyboard_has_onboard_memory: false,
            keyboard_nkro: true,
            keyboard_feature_tags: Vec::new(),
            keyboard_use_fit: Vec::new(),
            keyboard_value_pick: false,
        }
    }
}

impl CoreAttributes for KeyboardAttributes {
    fn price_tier(&self) -> PriceTier {
        self.price_tier
    }

    fn is_wireless(&self) -> bool {
        self.wireless
    }
}

wire_enum! {
    pub enum KeyboardFormFactor {
        Percent60 => "60_percent",
        Percent65 => "65_percent",
        Percent75 => "75_percent",
        Tkl80Percent => "tkl_80_percent",
        Percent96 => "96_percent",
        FullSize100Percent => "full_size_100_percent",
        Alice => "alice",
        Ortholinear => "ortholinear",
        Split => "split",
    }
}

impl KeyboardFormFactor {
    /// Human-readable layout name, e.g. `tkl 80 %`.
    pub fn display_name(self) -> String {
        self.as_str().replace('_', " ").replacen("percent", "%", 1)
    }
}

wire_enum! {
    pub enum KeyboardSwitchType {
        Mechanical => "mechanical",
        MagneticHallEffect => "magnetic_hall_effect",
        MagneticTmr => "magnetic_tmr",
        Optical => "optical",
        Scissor => "scissor",
        Membrane => "membrane",
        RubberDome => "rubber_dome",
    }
}

wire_enum! {
    pub enum KeyboardSwitchFeel {
        Linear => "linear",
        Tactile => "tactile",
        Clicky => "clicky",
    }
}

wire_enum! {
    pub enum KeyboardOutputType {
        NonAdjustable => "non_adjustable",
        AdjustableActuation => "adjustable_actuation",
        Analog => "analog",
    }
}

wire_enum! {
    pub enum KeyboardCaseMaterial {
        Plastic => "plastic",
        Aluminum => "aluminum",
        ZincAlloy => "zinc_alloy",
        Polycarbonate => "polycarbonate",
        Mixed => "mixed",
    }
}

wire_enum! {
    pub enum KeyboardMountStyle {
        Tray => "tray",
        Gasket => "gasket",
        DoubleGasket => "double_gasket",
        TopMount => "top_mount",
        IntegratedPlate => "integrated_plate",
        Plate => "plate",
        Unknown => "unknown",
    }
}

wire_enum! {
    pub enum KeyboardKeycapMaterial {
        Pbt => "pbt",
        Abs => "abs",
        Pom => "pom",
        Unknown => "unknown",
    }
}

wire_enum! {
    pub enum KeyboardKeycapProfile {
        Oem => "oem",
        Cherry => "cherry",
        Ksa => "ksa",
        Xda => "xda",
        Dsa => "dsa",
        Sa => "sa",
        Mt3 => "mt3",
        LowProfile => "low_profile",
        Unknown => "unknown",
    }
}

wire_enum! {
    pub enum KeyboardBuildQuality {
        Ok => "ok",
        Good => "good",
        Great => "great",
        Excellent => "excellent",
    }
}

wire_enum! {
    pub enum KeyboardFeatureTag {
        HotSwappable => "hot_swappable",
        RapidTrigger => "rapid_trigger",
        Socd => "socd",
        AnalogOutput => "analog_output",
        AdjustableActuation => "adjustable_actuation",
        RgbPerKey => "rgb_per_key",
        RgbUnderglow => "rgb_underglow",
        ShineThroughKeycaps => "shine_through_keycaps",
        Knob => "knob",
        MacroKeys => "macro_keys",
        VolumeWheel => "volume_wheel",
        LowProfile => "low_profile",
        GasketMount => "gasket_mount",
        PreLubed => "pre_lubed",
        QmkVia => "qmk_via",
        OnboardMemory => "onboard_memory",
        Dks => "dks",
        ModTap => "mod_tap",
        MultiDeviceBluetooth => "multi_device_bluetooth",
        Wireless24Ghz => "2_4ghz_wireless",
        UsbC => "usb_c",
        GamingGradeLatency => "gaming_grade_latency",
        Quiet => "quiet",
        Split => "split",
        Ergonomic => "ergonomic",
        ValuePick => "value_pick",
        Premium => "premium",
        Enthusiast => "enthusiast",
    }
}

wire_enum! {
    pub enum KeyboardUseFit {
        CompetitiveGaming => "competitive_gaming",
        CasualGaming => "casual_gaming",
        Office => "office",
        Programming => "programming",
        Typing => "typing",
        Productivity => "productivity",
        Portable => "portable",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_factor_display_name() {
        assert_eq!(KeyboardFormFactor::Tkl80Percent.display_name(), "tkl 80 %");
        assert_eq!(KeyboardFormFactor::FullSize100Percent.display_name(), "full size 100 %");
        assert_eq!(KeyboardFormFactor::Alice.display_name(), "alice");
    }

    #[test]
    fn test_polling_rate_hz() {
        let mut attrs = KeyboardAttributes::default();
        assert_eq!(attrs.polling_rate_hz(), 1000);
        attrs.keyboard_polling_rate_max_hz = PollingRate::Hz8000;
        assert_eq!(attrs.polling_rate_hz(), 8000);
    }

    #[test]
    fn test_feature_tag_numeric_wire_name() {
        let tag: KeyboardFeatureTag = serde_json::from_str("\"2_4ghz_wireless\"").unwrap();
        assert_eq!(tag, KeyboardFeatureTag::Wireless24Ghz);
    }
}
