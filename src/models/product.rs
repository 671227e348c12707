//! Product model shared by every peripheral category.
//!
//! A product carries the catalog fields common to all categories plus a
//! category-specific `core_attributes` block that the scoring rules and
//! pre-filters read.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Category;

/// A catalog product with category-specific core attributes `A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product<A> {
    /// Unique product identifier (slug).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Product category.
    pub category: Category,
    /// Typical street price range `[min, max]` in USD.
    pub price_range_usd: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_url: Option<String>,
    /// Retailer name to URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer_urls: Option<BTreeMap<String, String>>,
    /// Free-form tags used by search and display.
    pub recommendation_tags: Vec<String>,
    /// Provenance of the attribute data.
    pub data_quality: DataQuality,
    /// Third-party lab scores keyed by test name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtings_scores: Option<BTreeMap<String, f64>>,
    /// Category-specific attributes.
    pub core_attributes: A,
}

impl<A: Default> Product<A> {
    /// Creates a product with default attributes and empty catalog fields.
    pub fn new(id: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            brand: String::new(),
            category,
            price_range_usd: [0.0, 0.0],
            image_url: None,
            product_url: None,
            manufacturer_url: None,
            retailer_urls: None,
            recommendation_tags: Vec::new(),
            data_quality: DataQuality::default(),
            rtings_scores: None,
            core_attributes: A::default(),
        }
    }
}

impl<A> Product<A> {
    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Sets the price range in USD.
    pub fn with_price(mut self, min: f64, max: f64) -> Self {
        self.price_range_usd = [min, max];
        self
    }

    /// Adds a recommendation tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.recommendation_tags.push(tag.into());
        self
    }

    /// Replaces the core attributes.
    pub fn with_attributes(mut self, attributes: A) -> Self {
        self.core_attributes = attributes;
        self
    }

    /// Mean of the price range.
    pub fn average_price(&self) -> f64 {
        (self.price_range_usd[0] + self.price_range_usd[1]) / 2.0
    }

    /// Lowest listed price.
    pub fn min_price(&self) -> f64 {
        self.price_range_usd[0]
    }
}

/// Provenance metadata for a product record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataQuality {
    pub data_confidence: DataConfidence,
    pub primary_source_type: PrimarySourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_verified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Price bucket, ordered from cheapest to most expensive.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Budget,
    LowerMidrange,
    #[default]
    Midrange,
    UpperMidrange,
    Premium,
    Flagship,
}

impl PriceTier {
    /// All tiers in ascending order.
    pub const ALL: [PriceTier; 6] = [
        PriceTier::Budget,
        PriceTier::LowerMidrange,
        PriceTier::Midrange,
        PriceTier::UpperMidrange,
        PriceTier::Premium,
        PriceTier::Flagship,
    ];

    /// Position in the ascending tier order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriceTier::Budget => "budget",
            PriceTier::LowerMidrange => "lower_midrange",
            PriceTier::Midrange => "midrange",
            PriceTier::UpperMidrange => "upper_midrange",
            PriceTier::Premium => "premium",
            PriceTier::Flagship => "flagship",
        }
    }

    /// Resolves a tier by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platforms where the product works out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformFit {
    Pc,
    Playstation,
    Xbox,
    Switch,
    Mobile,
    Mac,
}

/// Supported connection methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    WiredUsb,
    #[serde(rename = "wired_3_5mm")]
    Wired35mm,
    WiredUsbC,
    #[serde(rename = "wireless_2_4_dongle")]
    Wireless24Dongle,
    Bluetooth,
}

impl ConnectionType {
    /// Whether this is a cabled connection.
    pub fn is_wired(self) -> bool {
        matches!(
            self,
            ConnectionType::WiredUsb | ConnectionType::Wired35mm | ConnectionType::WiredUsbC
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatencyClass {
    VeryLow,
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoftwareSupport {
    None,
    #[default]
    Basic,
    Good,
    Great,
}

/// Availability at normal pricing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Easy,
    Sometimes,
    Hard,
    LimitedRelease,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataConfidence {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimarySourceType {
    LabTest,
    CommunityPoll,
    ExpertJudgment,
    Manufacturer,
    #[default]
    Mixed,
}

wire_enum! {
    /// Maximum USB polling rate in Hz, spelled as a string in the data files.
    pub enum PollingRate {
        Hz125 => "125",
        Hz500 => "500",
        Hz1000 => "1000",
        Hz2000 => "2000",
        Hz4000 => "4000",
        Hz8000 => "8000",
    }
}

impl PollingRate {
    /// Rate in Hz.
    pub fn hz(self) -> u32 {
        match self {
            PollingRate::Hz125 => 125,
            PollingRate::Hz500 => 500,
            PollingRate::Hz1000 => 1000,
            PollingRate::Hz2000 => 2000,
            PollingRate::Hz4000 => 4000,
            PollingRate::Hz8000 => 8000,
        }
    }
}

/// Access to the attributes every category shares.
///
/// Pre-filters and the budget ceiling are written against this trait so they
/// work for any category.
pub trait CoreAttributes {
    /// Price bucket of the product.
    fn price_tier(&self) -> PriceTier;

    /// Whether the product supports a wireless connection.
    fn is_wireless(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MouseAttributes;

    #[test]
    fn test_product_builder() {
        let product: Product<MouseAttributes> = Product::new("viper-v3", Category::Mouse)
            .with_name("Viper V3 Pro")
            .with_brand("Razer")
            .with_price(140.0, 160.0)
            .with_tag("esports");

        assert_eq!(product.id, "viper-v3");
        assert_eq!(product.brand, "Razer");
        assert_eq!(product.category, Category::Mouse);
        assert_eq!(product.recommendation_tags, vec!["esports".to_string()]);
        assert!((product.average_price() - 150.0).abs() < 1e-9);
        assert!((product.min_price() - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_price_tier_order() {
        assert!(PriceTier::Budget < PriceTier::LowerMidrange);
        assert!(PriceTier::Premium < PriceTier::Flagship);
        assert_eq!(PriceTier::Budget.index(), 0);
        assert_eq!(PriceTier::Premium.index(), 4);
        assert_eq!(PriceTier::ALL.len(), 6);
        assert_eq!(PriceTier::UpperMidrange.to_string(), "upper_midrange");
        assert_eq!(PriceTier::from_name("flagship"), Some(PriceTier::Flagship));
        assert_eq!(PriceTier::from_name("luxury"), None);
    }

    #[test]
    fn test_connection_type_wire_names() {
        let json = serde_json::to_string(&ConnectionType::Wireless24Dongle).unwrap();
        assert_eq!(json, "\"wireless_2_4_dongle\"");
        let parsed: ConnectionType = serde_json::from_str("\"wired_3_5mm\"").unwrap();
        assert_eq!(parsed, ConnectionType::Wired35mm);
        assert!(parsed.is_wired());
        assert!(!ConnectionType::Bluetooth.is_wired());
    }
}
