//! Mouse attributes.

use serde::{Deserialize, Serialize};

use super::product::{
    Availability, ConnectionType, CoreAttributes, LatencyClass, PlatformFit, PollingRate,
    PriceTier, SoftwareSupport,
};

/// Core attributes of a mouse record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MouseAttributes {
    pub price_tier: PriceTier,
    pub platform_fit: Vec<PlatformFit>,
    pub connection_type: Vec<ConnectionType>,
    pub wireless: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_life_hr: Option<f64>,
    pub latency_class: LatencyClass,
    pub software_support: SoftwareSupport,
    pub availability_class: Availability,

    pub mouse_handedness: MouseHandedness,
    /// Weight in grams.
    pub mouse_weight_g: f64,
    pub mouse_weight_class: MouseWeightClass,
    pub mouse_length_mm: f64,
    pub mouse_width_mm: f64,
    pub mouse_height_mm: f64,
    pub mouse_size_class: MouseSizeClass,
    pub mouse_shape_profile: MouseShapeProfile,
    /// Grip styles the shape supports well.
    pub mouse_grip_fit: Vec<MouseGripFit>,
    /// Use cases where the mouse excels.
    pub mouse_game_fit: Vec<MouseGameFit>,
    pub mouse_button_count: u32,
    pub mouse_button_count_class: MouseButtonCountClass,
    pub mouse_scroll_features: Vec<MouseScrollFeature>,
    /// Maximum polling rate, stored as a string enum ("1000", "8000", ...).
    pub mouse_polling_rate_max_hz: PollingRate,
    pub mouse_sensor_class: MouseSensorClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouse_click_latency_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouse_sensor_latency_ms: Option<f64>,
    pub mouse_build_quality: MouseBuildQuality,
    pub mouse_feet_quality: MouseFeetQuality,
    pub mouse_coating: MouseCoating,
    pub mouse_feel_tags: Vec<MouseFeelTag>,
    pub mouse_value_pick: bool,
}

impl MouseAttributes {
    /// Whether the feel tags include `tag`.
    pub fn has_feel_tag(&self, tag: MouseFeelTag) -> bool {
        self.mouse_feel_tags.contains(&tag)
    }

    /// Whether a cabled USB mode is available.
    pub fn has_wired_mode(&self) -> bool {
        self.connection_type
            .iter()
            .any(|c| matches!(c, ConnectionType::WiredUsb | ConnectionType::WiredUsbC))
    }
}

impl Default for MouseAttributes {
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
            mouse_handedness: MouseHandedness::Right,
            mouse_weight_g: 70.0,
            mouse_weight_class: MouseWeightClass::Light,
            mouse_length_mm: 122.0,
            mouse_width_mm: 64.0,
            mouse_height_mm: 40.0,
            mouse_size_class: MouseSizeClass::Medium,
            mouse_shape_profile: MouseShapeProfile::MidHump,
            mouse_grip_fit: vec![MouseGripFit::Palm],
            mouse_game_fit: vec![MouseGameFit::General],
            mouse_button_count: 5,
            mouse_button_count_class: MouseButtonCountClass::Medium,
            mouse_scroll_features: Vec::new(),
            mouse_polling_rate_max_hz: PollingRate::Hz1000,
            mouse_sensor_class: MouseSensorClass::Good,
            mouse_click_latency_ms: None,
            mouse_sensor_latency_ms: None,
            mouse_build_quality: MouseBuildQuality::Good,
            mouse_feet_quality: MouseFeetQuality::Good,
            mouse_coating: MouseCoating::Matte,
            mouse_feel_tags: Vec::new(),
            mouse_value_pick: false,
        }
    }
}

impl CoreAttributes for MouseAttributes {
    fn price_tier(&self) -> PriceTier {
        self.price_tier
    }

    fn is_wireless(&self) -> bool {
        self.wireless
    }
}

wire_enum! {
    /// Ergonomic handedness of the shell.
    pub enum MouseHandedness {
        Right => "right",
        Ambi => "ambi",
        Left => "left",
        ErgoRight => "ergo_right",
        ErgoLeft => "ergo_left",
    }
}

wire_enum! {
    /// Weight bucket. `Medium` appears in some records alongside `Mid`.
    pub enum MouseWeightClass {
        Ultralight => "ultralight",
        Light => "light",
        Mid => "mid",
        Medium => "medium",
        Heavy => "heavy",
    }
}

wire_enum! {
    pub enum MouseSizeClass {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

wire_enum! {
    /// Hump height and placement.
    pub enum MouseShapeProfile {
        LowHump => "low_hump",
        MidHump => "mid_hump",
        HighHump => "high_hump",
        RearHump => "rear_hump",
        CenterHump => "center_hump",
        ErgoHump => "ergo_hump",
    }
}

wire_enum! {
    pub enum MouseGripFit {
        Palm => "palm",
        Claw => "claw",
        Fingertip => "fingertip",
    }
}

wire_enum! {
    pub enum MouseGameFit {
        Fps => "fps",
        Moba => "moba",
        Mmo => "mmo",
        General => "general",
        Productivity => "productivity",
    }
}

wire_enum! {
    pub enum MouseSensorClass {
        Basic => "basic",
        BudgetOk => "budget_ok",
        Good => "good",
        Great => "great",
        Flagship => "flagship",
    }
}

wire_enum! {
    pub enum MouseBuildQuality {
        Ok => "ok",
        Good => "good",
        Great => "great",
    }
}

wire_enum! {
    pub enum MouseFeetQuality {
        Basic => "basic",
        Ok => "ok",
        Good => "good",
        Great => "great",
    }
}

wire_enum! {
    pub enum MouseCoating {
        Matte => "matte",
        Glossy => "glossy",
        Rubberized => "rubberized",
        Mixed => "mixed",
    }
}

wire_enum! {
    /// Subjective feel descriptors.
    pub enum MouseFeelTag {
        SafeShape => "safe_shape",
        NicheShape => "niche_shape",
        Grippy => "grippy",
        Slippery => "slippery",
        LargeHandsFriendly => "large_hands_friendly",
        SmallHandsFriendly => "small_hands_friendly",
        ThumbRest => "thumb_rest",
        FeatureRich => "feature_rich",
        MultiDevice => "multi_device",
        Productivity => "productivity",
        WorksOnGlass => "works_on_glass",
        PremiumFeel => "premium_feel",
        Moddable => "moddable",
        Portable => "portable",
        SilentClicks => "silent_clicks",
        Ergonomic => "ergonomic",
        Vertical => "vertical",
        Honeycomb => "honeycomb",
        MmoButtons => "mmo_buttons",
        EsportsShape => "esports_shape",
        AdjustableWeight => "adjustable_weight",
        Trackball => "trackball",
        Stationary => "stationary",
        MacOptimized => "mac_optimized",
        TouchGestures => "touch_gestures",
        Basic => "basic",
        HotSwapSwitches => "hot_swap_switches",
        ErgoRight => "ergo_right",
        MmoFriendly => "mmo_friendly",
        Casual => "casual",
        LightClicks => "light_clicks",
        Fast => "fast",
        Competitive => "competitive",
        Ultralight => "ultralight",
        NoSoftware => "no_software",
        Driverless => "driverless",
        FingertipOnly => "fingertip_only",
        Rgb => "rgb",
        Versatile => "versatile",
        FreeScroll => "free_scroll",
    }
}

wire_enum! {
    pub enum MouseScrollFeature {
        TiltLeftRight => "tilt_left_right",
        Tilt => "tilt",
        FreeScroll => "free_scroll",
        InfiniteScroll => "infinite_scroll",
        OpticalScroll => "optical_scroll",
        SmartReel => "smart_reel",
        ThumbWheel => "thumb_wheel",
        TouchScroll => "touch_scroll",
    }
}

wire_enum! {
    pub enum MouseButtonCountClass {
        Low => "low",
        Medium => "medium",
        High => "high",
        MmoGrid => "mmo_grid",
    }
}
