use serde::{Deserialize, Serialize};

use super::{DiseaseRisk, HarvestPlan, IrrigationPlan, MarketGuidance, WeatherOutlook};

/// Complete assistance record assembled from the four derivation stages.
///
/// A fresh value per request; it has no identity or lifecycle beyond the
/// request that produced it. Callers render its fields directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmAssistance {
    pub weather: WeatherOutlook,
    pub diseases: Vec<DiseaseRisk>,
    pub irrigation: IrrigationPlan,
    pub harvest: HarvestPlan,
    pub market: MarketGuidance,
}
