use chrono::{Duration, NaiveDate};

use crate::knowledge::CropProfile;
use crate::models::{
    HarvestPlan, IrrigationPlan, IrrigationTime, WeatherOutlook, WeatherSuitability,
};

/// Precipitation above this within the lookahead postpones irrigation
const RAIN_DELAY_THRESHOLD_MM: f64 = 5.0;
const RAIN_DELAY_LOOKAHEAD_DAYS: usize = 3;

/// Derive irrigation timing from the near-term forecast.
///
/// Expected rain inside the lookahead stretches the cycle from 2 to 4 days
/// and pushes the next watering out accordingly.
pub fn plan_irrigation(
    outlook: &WeatherOutlook,
    crop: &CropProfile,
    today: NaiveDate,
) -> IrrigationPlan {
    let rain_ahead =
        outlook.rain_expected_within(RAIN_DELAY_LOOKAHEAD_DAYS, RAIN_DELAY_THRESHOLD_MM);

    let frequency_days: u32 = if rain_ahead { 4 } else { 2 };
    let reason = if rain_ahead {
        "Delayed due to expected rainfall"
    } else {
        "Standard irrigation schedule for current growth stage"
    };

    IrrigationPlan {
        frequency_days,
        water_liters_per_acre: crop.water_liters_per_acre,
        best_time: IrrigationTime::EarlyMorning,
        next_date: today + Duration::days(i64::from(frequency_days)),
        reason: reason.to_string(),
    }
}

/// Derive the harvest window and expected yield from crop constants.
///
/// `suitability` is caller context; the engine passes its qualitative
/// default.
pub fn plan_harvest(
    crop: &CropProfile,
    planting_date: NaiveDate,
    suitability: WeatherSuitability,
) -> HarvestPlan {
    let harvesting_method = if crop.mechanized_harvest {
        "Combine harvester for efficiency"
    } else {
        "Manual harvesting for best quality"
    };

    HarvestPlan {
        optimal_date: planting_date + Duration::days(crop.growth_days),
        expected_yield_kg_per_acre: crop.expected_yield_kg_per_acre,
        quality_factors: vec![
            "Moisture content of grains".to_string(),
            "Color and size uniformity".to_string(),
            "Freedom from disease symptoms".to_string(),
            "Maturity level".to_string(),
        ],
        harvesting_method: harvesting_method.to_string(),
        weather_suitability: suitability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherDay;

    fn day(offset: i64, precip: f64) -> WeatherDay {
        WeatherDay {
            date: today() + Duration::days(offset),
            min_temp_c: 20.0,
            max_temp_c: 30.0,
            precipitation_mm: precip,
            humidity_percent: 70.0,
            wind_speed_kmh: 10.0,
            is_anomaly: false,
            description: String::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn rain_in_first_three_days_delays_irrigation() {
        let outlook = WeatherOutlook {
            days: vec![day(0, 1.0), day(1, 20.0), day(2, 0.0)],
        };
        let plan = plan_irrigation(&outlook, &CropProfile::fallback(), today());

        assert_eq!(plan.frequency_days, 4);
        assert_eq!(plan.next_date, today() + Duration::days(4));
        assert!(plan.reason.contains("rainfall"));
    }

    #[test]
    fn dry_window_keeps_standard_schedule() {
        let outlook = WeatherOutlook {
            days: vec![day(0, 1.0), day(1, 2.0), day(2, 4.0), day(3, 30.0)],
        };
        let plan = plan_irrigation(&outlook, &CropProfile::fallback(), today());

        assert_eq!(plan.frequency_days, 2);
        assert_eq!(plan.next_date, today() + Duration::days(2));
        assert_eq!(plan.best_time, IrrigationTime::EarlyMorning);
        assert!(plan.reason.contains("Standard"));
    }

    #[test]
    fn rice_harvest_scenario() {
        let kb = crate::knowledge::KnowledgeBase::builtin();
        let rice = kb.crop_profile("rice").unwrap();
        let planted = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let plan = plan_harvest(rice, planted, WeatherSuitability::Good);

        assert_eq!(
            plan.optimal_date,
            NaiveDate::from_ymd_opt(2024, 9, 19).unwrap()
        );
        assert_eq!(plan.expected_yield_kg_per_acre, 2200);
        assert_eq!(plan.harvesting_method, "Combine harvester for efficiency");
    }

    #[test]
    fn harvest_date_is_after_planting_for_all_known_crops() {
        let kb = crate::knowledge::KnowledgeBase::builtin();
        let planted = today();
        for name in ["wheat", "rice", "potato", "unknown"] {
            let profile = kb.crop_profile_or_fallback(name);
            let plan = plan_harvest(&profile, planted, WeatherSuitability::Good);
            assert!(plan.optimal_date > planted, "crop {}", name);
        }
    }

    #[test]
    fn unknown_crop_harvests_manually_with_default_yield() {
        let plan = plan_harvest(&CropProfile::fallback(), today(), WeatherSuitability::Good);
        assert_eq!(plan.expected_yield_kg_per_acre, 1500);
        assert_eq!(plan.optimal_date, today() + Duration::days(120));
        assert_eq!(plan.harvesting_method, "Manual harvesting for best quality");
    }
}
