use chrono::{Duration, NaiveDate};
use serde::Deserialize;

use crate::models::{
    DiseaseRisk, FarmAssistance, HarvestPlan, IrrigationPlan, IrrigationTime, MandiPrice,
    MarketGuidance, PriceTrend, WeatherOutlook, WeatherSuitability,
};

/// Assistance record as a remote collaborator may return it: any section
/// can be missing. Normalization fills the gaps with a fixed default
/// record so callers always render a complete shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssistanceDraft {
    #[serde(default)]
    pub weather: Option<WeatherOutlook>,
    #[serde(default)]
    pub diseases: Option<Vec<DiseaseRisk>>,
    #[serde(default)]
    pub irrigation: Option<IrrigationPlan>,
    #[serde(default)]
    pub harvest: Option<HarvestPlan>,
    #[serde(default)]
    pub market: Option<MarketGuidance>,
}

/// Complete a draft against the fixed default record.
///
/// Sections present in the draft pass through untouched; this runs at the
/// collaborator boundary and never second-guesses what the collaborator
/// did produce.
pub fn complete_or_default(
    draft: AssistanceDraft,
    district: &str,
    today: NaiveDate,
) -> FarmAssistance {
    FarmAssistance {
        weather: draft
            .weather
            .unwrap_or(WeatherOutlook { days: Vec::new() }),
        diseases: draft.diseases.unwrap_or_default(),
        irrigation: draft.irrigation.unwrap_or_else(|| IrrigationPlan {
            frequency_days: 3,
            water_liters_per_acre: 25_000,
            best_time: IrrigationTime::EarlyMorning,
            next_date: today,
            reason: "Based on crop requirements".to_string(),
        }),
        harvest: draft.harvest.unwrap_or_else(|| HarvestPlan {
            optimal_date: today + Duration::days(90),
            expected_yield_kg_per_acre: 1500,
            quality_factors: vec![
                "Maturity".to_string(),
                "Color".to_string(),
                "Size".to_string(),
            ],
            harvesting_method: "Manual harvesting".to_string(),
            weather_suitability: WeatherSuitability::Good,
        }),
        market: draft.market.unwrap_or_else(|| MarketGuidance {
            current_local_price: 1500,
            projected_price: 1600,
            best_selling_time: "2-4 weeks after harvest".to_string(),
            nearby_mandis: vec![MandiPrice {
                name: format!("{} Market", district),
                distance_km: 15,
                current_price: 1500,
                expected_trend: PriceTrend::Stable,
            }],
            msp_info: None,
        }),
    }
}
