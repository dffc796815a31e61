use crate::knowledge::CropProfile;
use crate::models::{MandiPrice, MarketGuidance, MspInfo, PriceTrend};

/// MSP validity window published with the current season's floor prices
const MSP_APPLICABLE_FROM: &str = "October 2024";
const MSP_APPLICABLE_TO: &str = "September 2025";

const DISTRICT_MANDI_KM: u32 = 15;
const STATE_MARKET_KM: u32 = 35;

/// Derive price outlook and selling guidance from crop constants.
///
/// Purely table-driven: two calls with the same crop produce identical
/// output. MSP info appears only for crops with a floor price set.
pub fn advise(crop: &CropProfile, state: &str, district: &str) -> MarketGuidance {
    let district_trend = if crop.perishable {
        PriceTrend::Declining
    } else {
        PriceTrend::Rising
    };

    let best_selling_time = if crop.perishable {
        "Immediately after harvest"
    } else {
        "2-4 weeks after harvest"
    };

    MarketGuidance {
        current_local_price: crop.local_price,
        projected_price: crop.projected_price,
        best_selling_time: best_selling_time.to_string(),
        nearby_mandis: vec![
            MandiPrice {
                name: format!("{} Main Mandi", district),
                distance_km: DISTRICT_MANDI_KM,
                current_price: crop.district_mandi_price,
                expected_trend: district_trend,
            },
            MandiPrice {
                name: format!("{} State Agricultural Market", state),
                distance_km: STATE_MARKET_KM,
                current_price: crop.state_mandi_price,
                expected_trend: PriceTrend::Stable,
            },
        ],
        msp_info: crop.msp.map(|amount| MspInfo {
            current: amount,
            applicable_from: MSP_APPLICABLE_FROM.to_string(),
            applicable_to: MSP_APPLICABLE_TO.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;

    #[test]
    fn wheat_guidance_is_table_driven() {
        let kb = KnowledgeBase::builtin();
        let wheat = kb.crop_profile("wheat").unwrap();
        let guidance = advise(wheat, "Punjab", "Ludhiana");

        assert_eq!(guidance.current_local_price, 2200);
        assert_eq!(guidance.projected_price, 2350);
        assert_eq!(guidance.best_selling_time, "2-4 weeks after harvest");

        let msp = guidance.msp_info.expect("wheat carries an MSP");
        assert_eq!(msp.current, 2125);

        assert_eq!(guidance.nearby_mandis.len(), 2);
        assert_eq!(guidance.nearby_mandis[0].name, "Ludhiana Main Mandi");
        assert_eq!(guidance.nearby_mandis[0].current_price, 2180);
        assert_eq!(guidance.nearby_mandis[0].expected_trend, PriceTrend::Rising);
        assert_eq!(
            guidance.nearby_mandis[1].name,
            "Punjab State Agricultural Market"
        );
        assert_eq!(guidance.nearby_mandis[1].current_price, 2220);
        assert_eq!(guidance.nearby_mandis[1].expected_trend, PriceTrend::Stable);
    }

    #[test]
    fn potato_has_no_msp_and_declining_district_trend() {
        let kb = KnowledgeBase::builtin();
        let potato = kb.crop_profile("potato").unwrap();
        let guidance = advise(potato, "West Bengal", "Hooghly");

        assert!(guidance.msp_info.is_none());
        assert_eq!(guidance.best_selling_time, "Immediately after harvest");
        assert_eq!(
            guidance.nearby_mandis[0].expected_trend,
            PriceTrend::Declining
        );
    }

    #[test]
    fn advise_is_idempotent() {
        let kb = KnowledgeBase::builtin();
        let rice = kb.crop_profile("rice").unwrap();
        let a = serde_json::to_string(&advise(rice, "Kerala", "Palakkad")).unwrap();
        let b = serde_json::to_string(&advise(rice, "Kerala", "Palakkad")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_crop_gets_generic_prices() {
        let guidance = advise(&CropProfile::fallback(), "Assam", "Jorhat");
        assert_eq!(guidance.current_local_price, 1800);
        assert_eq!(guidance.projected_price, 1900);
        assert_eq!(guidance.nearby_mandis[0].current_price, 1780);
        assert_eq!(guidance.nearby_mandis[1].current_price, 1850);
        assert!(guidance.msp_info.is_none());
    }
}
