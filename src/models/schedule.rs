use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrrigationTime {
    EarlyMorning,
    LateEvening,
    Night,
}

impl IrrigationTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationTime::EarlyMorning => "Early Morning",
            IrrigationTime::LateEvening => "Late Evening",
            IrrigationTime::Night => "Night",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "earlymorning" | "early morning" => Some(IrrigationTime::EarlyMorning),
            "lateevening" | "late evening" => Some(IrrigationTime::LateEvening),
            "night" => Some(IrrigationTime::Night),
            _ => None,
        }
    }
}

impl std::fmt::Display for IrrigationTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Irrigation timing and volume guidance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationPlan {
    pub frequency_days: u32,
    pub water_liters_per_acre: u32,
    pub best_time: IrrigationTime,
    pub next_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherSuitability {
    Ideal,
    Good,
    Average,
    Poor,
}

impl WeatherSuitability {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherSuitability::Ideal => "Ideal",
            WeatherSuitability::Good => "Good",
            WeatherSuitability::Average => "Average",
            WeatherSuitability::Poor => "Poor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ideal" => Some(WeatherSuitability::Ideal),
            "good" => Some(WeatherSuitability::Good),
            "average" => Some(WeatherSuitability::Average),
            "poor" => Some(WeatherSuitability::Poor),
            _ => None,
        }
    }
}

impl std::fmt::Display for WeatherSuitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Harvest timing and yield guidance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestPlan {
    pub optimal_date: NaiveDate,
    pub expected_yield_kg_per_acre: u32,
    pub quality_factors: Vec<String>,
    pub harvesting_method: String,
    pub weather_suitability: WeatherSuitability,
}
