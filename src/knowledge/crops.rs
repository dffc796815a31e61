use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Agronomic and market constants for one crop.
///
/// Prices are Rs/quintal, yield kg/acre, water liters/acre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropProfile {
    pub growth_days: i64,
    pub expected_yield_kg_per_acre: u32,
    pub water_liters_per_acre: u32,
    pub local_price: u32,
    pub projected_price: u32,
    pub district_mandi_price: u32,
    pub state_mandi_price: u32,
    #[serde(default)]
    pub msp: Option<u32>,
    #[serde(default)]
    pub perishable: bool,
    #[serde(default)]
    pub mechanized_harvest: bool,
}

impl CropProfile {
    /// Fallback profile for crops absent from the table
    pub fn fallback() -> Self {
        Self {
            growth_days: 120,
            expected_yield_kg_per_acre: 1500,
            water_liters_per_acre: 25_000,
            local_price: 1800,
            projected_price: 1900,
            district_mandi_price: 1780,
            state_mandi_price: 1850,
            msp: None,
            perishable: false,
            mechanized_harvest: false,
        }
    }
}

pub(crate) fn builtin() -> BTreeMap<String, CropProfile> {
    let mut crops = BTreeMap::new();

    crops.insert(
        "wheat".to_string(),
        CropProfile {
            growth_days: 120,
            expected_yield_kg_per_acre: 1800,
            water_liters_per_acre: 25_000,
            local_price: 2200,
            projected_price: 2350,
            district_mandi_price: 2180,
            state_mandi_price: 2220,
            msp: Some(2125),
            perishable: false,
            mechanized_harvest: true,
        },
    );

    crops.insert(
        "rice".to_string(),
        CropProfile {
            growth_days: 110,
            expected_yield_kg_per_acre: 2200,
            // Paddy irrigation needs far more standing water
            water_liters_per_acre: 50_000,
            local_price: 2100,
            projected_price: 2180,
            district_mandi_price: 2090,
            state_mandi_price: 2120,
            msp: Some(2060),
            perishable: false,
            mechanized_harvest: true,
        },
    );

    crops.insert(
        "potato".to_string(),
        CropProfile {
            growth_days: 90,
            expected_yield_kg_per_acre: 15_000,
            water_liters_per_acre: 25_000,
            local_price: 1200,
            projected_price: 950,
            district_mandi_price: 1150,
            state_mandi_price: 1250,
            msp: None,
            perishable: true,
            mechanized_harvest: false,
        },
    );

    crops
}
