use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One forecasted day in a regional outlook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherDay {
    pub date: NaiveDate,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub precipitation_mm: f64,
    pub humidity_percent: f64,
    pub wind_speed_kmh: f64,
    pub is_anomaly: bool,
    pub description: String,
}

impl WeatherDay {
    /// Midpoint of the day's temperature range
    pub fn mean_temp_c(&self) -> f64 {
        (self.min_temp_c + self.max_temp_c) / 2.0
    }
}

/// Day-level advisory derived from forecasted conditions.
///
/// Classification is by priority, first match wins:
/// heavy rain > moderate rain > heat > frost > clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherAdvisory {
    HeavyRain,
    ModerateRain,
    Heat,
    Frost,
    Clear,
}

impl WeatherAdvisory {
    pub fn classify(precipitation_mm: f64, max_temp_c: f64, min_temp_c: f64) -> Self {
        if precipitation_mm > 15.0 {
            WeatherAdvisory::HeavyRain
        } else if precipitation_mm > 5.0 {
            WeatherAdvisory::ModerateRain
        } else if max_temp_c > 35.0 {
            WeatherAdvisory::Heat
        } else if min_temp_c < 15.0 {
            WeatherAdvisory::Frost
        } else {
            WeatherAdvisory::Clear
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            WeatherAdvisory::HeavyRain => "Heavy rainfall expected. Consider drainage for fields.",
            WeatherAdvisory::ModerateRain => "Light to moderate rainfall expected.",
            WeatherAdvisory::Heat => "Unusually hot conditions. Ensure adequate irrigation.",
            WeatherAdvisory::Frost => "Cooler than normal. Watch for frost-sensitive crops.",
            WeatherAdvisory::Clear => "Clear skies with moderate temperature.",
        }
    }
}

impl std::fmt::Display for WeatherAdvisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Ordered multi-day outlook, day 0 nearest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherOutlook {
    pub days: Vec<WeatherDay>,
}

impl WeatherOutlook {
    /// Mean of the daily temperature midpoints, `None` for an empty outlook
    pub fn average_temperature(&self) -> Option<f64> {
        if self.days.is_empty() {
            return None;
        }
        let sum: f64 = self.days.iter().map(|d| d.mean_temp_c()).sum();
        Some(sum / self.days.len() as f64)
    }

    /// Mean daily humidity, `None` for an empty outlook
    pub fn average_humidity(&self) -> Option<f64> {
        if self.days.is_empty() {
            return None;
        }
        let sum: f64 = self.days.iter().map(|d| d.humidity_percent).sum();
        Some(sum / self.days.len() as f64)
    }

    /// Whether any of the next `days` entries carries precipitation above `threshold_mm`
    pub fn rain_expected_within(&self, days: usize, threshold_mm: f64) -> bool {
        self.days
            .iter()
            .take(days)
            .any(|d| d.precipitation_mm > threshold_mm)
    }
}
