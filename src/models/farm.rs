use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Caller-supplied farm description the engine works from.
///
/// Inputs are taken as given: pH, dates and land size are not range-checked
/// here. Unknown crops and states degrade to documented defaults downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmProfile {
    pub crop_name: String,
    pub state: String,
    pub district: String,
    pub soil_ph: f64,
    pub planting_date: NaiveDate,
    pub land_size_acres: f64,
}
