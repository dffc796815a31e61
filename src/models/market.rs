use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceTrend {
    Rising,
    Stable,
    Declining,
}

impl PriceTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTrend::Rising => "Rising",
            PriceTrend::Stable => "Stable",
            PriceTrend::Declining => "Declining",
        }
    }
}

impl std::fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Price point at one nearby wholesale market
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MandiPrice {
    pub name: String,
    pub distance_km: u32,
    pub current_price: u32,
    pub expected_trend: PriceTrend,
}

/// Government-guaranteed floor price and its validity window.
/// Absent entirely for crops without an MSP; absence is "not applicable",
/// not zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MspInfo {
    pub current: u32,
    pub applicable_from: String,
    pub applicable_to: String,
}

/// Price outlook and selling guidance for one crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketGuidance {
    pub current_local_price: u32,
    pub projected_price: u32,
    pub best_selling_time: String,
    pub nearby_mandis: Vec<MandiPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msp_info: Option<MspInfo>,
}
