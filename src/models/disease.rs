use serde::{Deserialize, Serialize};

/// Qualitative disease likelihood. Variant order defines the total order
/// used for sorting: Low < Medium < High < VeryHigh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            "veryhigh" | "very high" => Some(RiskLevel::VeryHigh),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One candidate disease for a crop, from the knowledge table.
/// `risk_level` is the only field the assessor adjusts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseRisk {
    pub name: String,
    pub risk_level: RiskLevel,
    pub symptoms: Vec<String>,
    pub preventive_measures: Vec<String>,
    pub treatment_options: Vec<String>,
    pub optimal_conditions: String,
}
