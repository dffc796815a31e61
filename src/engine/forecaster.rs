use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::knowledge::RegionalBaseline;
use crate::models::{WeatherAdvisory, WeatherDay, WeatherOutlook};

/// Chance that any given day deviates from the regional baseline
const ANOMALY_PROBABILITY: f64 = 0.2;

/// Synthesize an N-day outlook around a regional baseline.
///
/// Each day draws its own anomaly indicator; anomalous days widen the
/// temperature range by ±5°C and amplify precipitation fivefold plus a
/// random burst. Two calls with different RNG state produce different
/// outlooks; a seeded RNG reproduces a run exactly.
pub fn forecast<R: Rng>(
    baseline: RegionalBaseline,
    start: NaiveDate,
    days: u32,
    rng: &mut R,
) -> WeatherOutlook {
    let mut out = Vec::with_capacity(days as usize);

    for offset in 0..days {
        let date = start + Duration::days(i64::from(offset));
        let is_anomaly = rng.gen_bool(ANOMALY_PROBABILITY);

        let mut min_temp = baseline.min_temp_c + rng.gen_range(-3.0..3.0);
        let mut max_temp = baseline.max_temp_c + rng.gen_range(-3.0..3.0);
        if is_anomaly {
            min_temp -= 5.0;
            max_temp += 5.0;
        }

        let precipitation = if is_anomaly {
            baseline.precipitation_mm * 5.0 + rng.gen_range(0.0..20.0)
        } else {
            (baseline.precipitation_mm + rng.gen_range(-2.0..3.0)).max(0.0)
        };

        let humidity: f64 = (60.0_f64 + rng.gen_range(0.0..30.0)).round();
        let wind_speed = round1(5.0 + rng.gen_range(0.0..15.0));

        let min_temp = round1(min_temp);
        let max_temp = round1(max_temp);
        let precipitation = round1(precipitation);

        let advisory = WeatherAdvisory::classify(precipitation, max_temp, min_temp);

        out.push(WeatherDay {
            date,
            min_temp_c: min_temp,
            max_temp_c: max_temp,
            precipitation_mm: precipitation,
            humidity_percent: humidity,
            wind_speed_kmh: wind_speed,
            is_anomaly,
            description: advisory.message().to_string(),
        });
    }

    WeatherOutlook { days: out }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
