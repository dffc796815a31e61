pub mod disease;
pub mod forecaster;
pub mod market;
pub mod normalize;
pub mod schedule;

pub use normalize::{complete_or_default, AssistanceDraft};

use chrono::{NaiveDate, Utc};
use rand::Rng;

use crate::knowledge::KnowledgeBase;
use crate::models::{FarmAssistance, FarmProfile, WeatherSuitability};

/// Default forecast horizon in days
pub const DEFAULT_FORECAST_DAYS: u32 = 14;

/// The farm recommendation engine: weather synthesis, disease assessment,
/// schedule planning and market guidance over a knowledge base.
///
/// Holds no state across calls; every invocation derives a fresh record
/// from its inputs plus the supplied randomness, so concurrent use needs
/// no coordination.
pub struct Engine {
    knowledge: KnowledgeBase,
    forecast_days: u32,
}

impl Engine {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            knowledge,
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }

    pub fn with_forecast_days(mut self, days: u32) -> Self {
        self.forecast_days = days;
        self
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Generate a full assistance record for `input`, starting the outlook
    /// today with fresh randomness.
    pub fn recommend(&self, input: &FarmProfile) -> FarmAssistance {
        self.recommend_with(input, Utc::now().date_naive(), &mut rand::thread_rng())
    }

    /// Reproducible variant: explicit clock and random source.
    pub fn recommend_with<R: Rng>(
        &self,
        input: &FarmProfile,
        today: NaiveDate,
        rng: &mut R,
    ) -> FarmAssistance {
        let baseline = self.knowledge.baseline_for(&input.state);
        let outlook = forecaster::forecast(baseline, today, self.forecast_days, rng);
        tracing::debug!(
            days = outlook.days.len(),
            "synthesized outlook for {}, {}",
            input.district,
            input.state
        );

        // An empty outlook has no aggregates; fall back to the baseline
        // midpoint and the humidity draw midpoint so downstream stages see
        // finite values.
        let avg_temperature = outlook
            .average_temperature()
            .unwrap_or((baseline.min_temp_c + baseline.max_temp_c) / 2.0);
        let avg_humidity = outlook.average_humidity().unwrap_or(75.0);

        let diseases = disease::assess(
            &self.knowledge,
            &input.crop_name,
            input.soil_ph,
            avg_temperature,
            avg_humidity,
        );
        tracing::debug!(
            candidates = diseases.len(),
            avg_temperature,
            avg_humidity,
            "assessed disease risk for {}",
            input.crop_name
        );

        let crop = self.knowledge.crop_profile_or_fallback(&input.crop_name);
        let irrigation = schedule::plan_irrigation(&outlook, &crop, today);
        let harvest =
            schedule::plan_harvest(&crop, input.planting_date, WeatherSuitability::Good);
        let market = market::advise(&crop, &input.state, &input.district);

        FarmAssistance {
            weather: outlook,
            diseases,
            irrigation,
            harvest,
            market,
        }
    }
}
