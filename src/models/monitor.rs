//! Monitor attributes.
//!
//! Monitors carry far more measured data than the other categories: lab
//! scores on a 0-10 scale, gamut coverage percentages, brightness and
//! connectivity. Monitors have no wireless mode.

use serde::{Deserialize, Serialize};

use super::product::{Availability, CoreAttributes, PlatformFit, PriceTier};

/// Core attributes of a monitor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorAttributes {
    pub price_tier: PriceTier,
    pub platform_fit: Vec<PlatformFit>,
    pub availability_class: Availability,

    // Size & shape
    pub monitor_size_inches: f64,
    pub monitor_size_class: MonitorSizeClass,
    pub monitor_curved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_curve_radius_mm: Option<f64>,

    // Panel & resolution
    pub monitor_panel_type: MonitorPanelType,
    /// Native resolution, e.g. `2560x1440`.
    pub monitor_resolution: String,
    pub monitor_resolution_class: MonitorResolutionClass,
    pub monitor_ppi: f64,
    pub monitor_aspect_ratio: MonitorAspectRatio,
    pub monitor_color_depth: u32,

    // Refresh
    pub monitor_native_refresh_hz: f64,
    pub monitor_max_refresh_hz: f64,
    pub monitor_refresh_class: MonitorRefreshClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_max_refresh_dp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_max_refresh_hdmi: Option<f64>,

    // Response & gaming
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_response_time_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_input_lag_ms: Option<f64>,
    pub monitor_vrr: bool,
    pub monitor_freesync: bool,
    pub monitor_gsync: MonitorGSync,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_vrr_min_hz: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_vrr_max_hz: Option<f64>,

    // Picture
    /// Native contrast; `null` for panels reported as infinite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_contrast_ratio: Option<f64>,
    pub monitor_infinite_contrast: bool,
    pub monitor_local_dimming: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_peak_brightness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_sdr_brightness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_min_brightness: Option<f64>,

    // HDR
    pub monitor_hdr10: bool,
    pub monitor_dolby_vision: bool,
    pub monitor_hdr_level: MonitorHdrLevel,

    // Color
    /// sRGB coverage percentage.
    pub monitor_srgb_coverage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_adobe_rgb_coverage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_dci_p3_coverage: Option<f64>,
    pub monitor_color_accuracy: MonitorColorAccuracy,
    pub monitor_factory_calibrated: bool,

    // Ergonomics
    pub monitor_height_adjust: bool,
    pub monitor_tilt: bool,
    pub monitor_swivel: bool,
    pub monitor_pivot: bool,
    pub monitor_vesa: bool,
    pub monitor_ergonomic_features: Vec<MonitorErgonomicFeature>,

    // Connectivity
    pub monitor_displayport_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_displayport_version: Option<String>,
    pub monitor_hdmi_count: u32,
    pub monitor_hdmi_2_1: bool,
    pub monitor_usb_c_dp: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_usb_c_pd_watts: Option<f64>,
    pub monitor_usb_hub_ports: u32,
    pub monitor_kvm: bool,
    pub monitor_speakers: bool,
    pub monitor_audio_out: bool,
    pub monitor_connectivity: Vec<MonitorConnectivity>,

    // Lab scores (0-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_overall_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_pc_gaming_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_console_gaming_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_office_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_editing_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_response_time_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_sdr_picture_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_hdr_picture_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_color_accuracy_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_brightness_score: Option<f64>,

    // Classification
    pub monitor_use_fit: Vec<MonitorUseFit>,
    pub monitor_feature_tags: Vec<MonitorFeatureTag>,
    pub monitor_value_pick: bool,
}

impl Default for MonitorAttributes {
    fn default() -> Self {
        Self {
            price_tier: PriceTier::default(),
            platform_fit: vec![PlatformFit::Pc],
            availability_class: Availability::default(),
            monitor_size_inches: 27.0,
            monitor_size_class: MonitorSizeClass::Standard,
            monitor_curved: false,
            monitor_curve_radius_mm: None,
            monitor_panel_type: MonitorPanelType::Ips,
            monitor_resolution: "2560x1440".to_string(),
            monitor_resolution_class: MonitorResolutionClass::P1440,
            monitor_ppi: 109.0,
            monitor_aspect_ratio: MonitorAspectRatio::Wide16x9,
            monitor_color_depth: 8,
            monitor_native_refresh_hz: 144.0,
            monitor_max_refresh_hz: 144.0,
            monitor_refresh_class: MonitorRefreshClass::Hz144,
            monitor_max_refresh_dp: None,
            monitor_max_refresh_hdmi: None,
            monitor_response_time_ms: None,
            monitor_input_lag_ms: None,
            monitor_vrr: true,
            monitor_freesync: true,
            monitor_gsync: MonitorGSync::Compatible,
            monitor_vrr_min_hz: None,
            monitor_vrr_max_hz: None,
            monitor_contrast_ratio: Some(1000.0),
            monitor_infinite_contrast: false,
            monitor_local_dimming: false,
            monitor_peak_brightness: None,
            monitor_sdr_brightness: None,
            monitor_min_brightness: None,
            monitor_hdr10: false,
            monitor_dolby_vision: false,
            monitor_hdr_level: MonitorHdrLevel::None,
            monitor_srgb_coverage: 99.0,
            monitor_adobe_rgb_coverage: None,
            monitor_dci_p3_coverage: None,
            monitor_color_accuracy: MonitorColorAccuracy::Good,
            monitor_factory_calibrated: false,
            monitor_height_adjust: true,
            monitor_tilt: true,
            monitor_swivel: false,
            monitor_pivot: false,
            monitor_vesa: true,
            monitor_ergonomic_features: vec![
                MonitorErgonomicFeature::HeightAdjust,
                MonitorErgonomicFeature::Tilt,
                MonitorErgonomicFeature::VesaMount,
            ],
            monitor_displayport_count: 1,
            monitor_displayport_version: None,
            monitor_hdmi_count: 2,
            monitor_hdmi_2_1: false,
            monitor_usb_c_dp: false,
            monitor_usb_c_pd_watts: None,
            monitor_usb_hub_ports: 0,
            monitor_kvm: false,
            monitor_speakers: false,
            monitor_audio_out: true,
            monitor_connectivity: vec![
                MonitorConnectivity::Displayport14,
                MonitorConnectivity::Hdmi20,
            ],
            monitor_overall_score: None,
            monitor_pc_gaming_score: None,
            monitor_console_gaming_score: None,
            monitor_office_score: None,
            monitor_editing_score: None,
            monitor_response_time_score: None,
            monitor_sdr_picture_score: None,
            monitor_hdr_picture_score: None,
            monitor_color_accuracy_score: None,
            monitor_brightness_score: None,
            monitor_use_fit: vec![MonitorUseFit::General],
            monitor_feature_tags: Vec::new(),
            monitor_value_pick: false,
        }
    }
}

impl CoreAttributes for MonitorAttributes {
    fn price_tier(&self) -> PriceTier {
        self.price_tier
    }

    fn is_wireless(&self) -> bool {
        false
    }
}

wire_enum! {
    pub enum MonitorPanelType {
        Ips => "IPS",
        Va => "VA",
        Tn => "TN",
        Oled => "OLED",
        QdOled => "QD-OLED",
        MiniLed => "Mini-LED",
    }
}

impl MonitorPanelType {
    /// Whether the panel is self-emissive (OLED or QD-OLED).
    pub fn is_oled(self) -> bool {
        matches!(self, MonitorPanelType::Oled | MonitorPanelType::QdOled)
    }
}

wire_enum! {
    /// Ordered from smallest to widest.
    pub enum MonitorSizeClass {
        Compact => "compact",
        Standard => "standard",
        Large => "large",
        Ultrawide => "ultrawide",
        SuperUltrawide => "super_ultrawide",
    }
}

wire_enum! {
    /// Ordered from lowest to highest pixel count.
    pub enum MonitorResolutionClass {
        P1080 => "1080p",
        P1440 => "1440p",
        K4 => "4k",
        K5 => "5k",
        K8 => "8k",
    }
}

wire_enum! {
    pub enum MonitorRefreshClass {
        Hz60 => "60hz",
        Hz75 => "75hz",
        Hz120 => "120hz",
        Hz144 => "144hz",
        Hz165 => "165hz",
        Hz240 => "240hz",
        Hz360Plus => "360hz_plus",
    }
}

wire_enum! {
    pub enum MonitorAspectRatio {
        Wide16x9 => "16:9",
        Ultrawide21x9 => "21:9",
        SuperUltrawide32x9 => "32:9",
        Wide16x10 => "16:10",
        Tall3x2 => "3:2",
    }
}

wire_enum! {
    pub enum MonitorUseFit {
        PcGaming => "pc_gaming",
        ConsoleGaming => "console_gaming",
        ContentCreation => "content_creation",
        Office => "office",
        General => "general",
    }
}

wire_enum! {
    pub enum MonitorHdrLevel {
        None => "none",
        Basic => "basic",
        Good => "good",
        Great => "great",
        Excellent => "excellent",
    }
}

wire_enum! {
    pub enum MonitorColorAccuracy {
        Basic => "basic",
        Good => "good",
        Great => "great",
        Professional => "professional",
    }
}

wire_enum! {
    pub enum MonitorGSync {
        None => "none",
        Compatible => "compatible",
        Certified => "certified",
    }
}

wire_enum! {
    pub enum MonitorErgonomicFeature {
        HeightAdjust => "height_adjust",
        Tilt => "tilt",
        Swivel => "swivel",
        Pivot => "pivot",
        VesaMount => "vesa_mount",
    }
}

wire_enum! {
    pub enum MonitorConnectivity {
        Displayport12 => "displayport_1_2",
        Displayport14 => "displayport_1_4",
        Displayport21 => "displayport_2_1",
        Hdmi20 => "hdmi_2_0",
        Hdmi21 => "hdmi_2_1",
        UsbC => "usb_c",
        Thunderbolt => "thunderbolt",
    }
}

wire_enum! {
    pub enum MonitorFeatureTag {
        Gaming => "gaming",
        Esports => "esports",
        ContentCreation => "content_creation",
        ColorAccurate => "color_accurate",
        Hdr => "hdr",
        Curved => "curved",
        Ultrawide => "ultrawide",
        FastResponse => "fast_response",
        HighRefresh => "high_refresh",
        FourK => "4k",
        Oled => "oled",
        ValuePick => "value_pick",
        UsbCHub => "usb_c_hub",
        Kvm => "kvm",
        Speakers => "speakers",
        Gsync => "gsync",
        Freesync => "freesync",
        LowInputLag => "low_input_lag",
        Professional => "professional",
        Portable => "portable",
    }
}
