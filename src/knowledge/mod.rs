pub mod crops;
pub mod diseases;
pub mod regions;

pub use crops::CropProfile;
pub use regions::RegionalBaseline;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::DiseaseRisk;

/// Static reference data the engine consults: crop constants, candidate
/// disease lists, regional weather baselines.
///
/// Configuration, not behavior. A YAML file with the same shape can extend
/// or replace individual entries without touching engine logic; lookups are
/// case-insensitive on crop and state names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    crops: BTreeMap<String, CropProfile>,
    #[serde(default)]
    diseases: BTreeMap<String, Vec<DiseaseRisk>>,
    #[serde(default)]
    regions: BTreeMap<String, RegionalBaseline>,
}

impl KnowledgeBase {
    /// The built-in tables
    pub fn builtin() -> Self {
        Self {
            crops: crops::builtin(),
            diseases: diseases::builtin(),
            regions: regions::builtin(),
        }
    }

    /// Built-in tables, with entries from `path` (if given) layered on top
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut base = Self::builtin();
        if let Some(path) = path {
            let raw = std::fs::read_to_string(path)?;
            let overrides: KnowledgeBase = serde_yaml::from_str(&raw)?;
            tracing::debug!(
                crops = overrides.crops.len(),
                diseases = overrides.diseases.len(),
                regions = overrides.regions.len(),
                "loaded knowledge overrides from {}",
                path.display()
            );
            base.merge(overrides);
        }
        Ok(base)
    }

    fn merge(&mut self, other: KnowledgeBase) {
        for (name, profile) in other.crops {
            self.crops.insert(name.to_lowercase(), profile);
        }
        for (name, list) in other.diseases {
            self.diseases.insert(name.to_lowercase(), list);
        }
        for (name, baseline) in other.regions {
            self.regions.insert(name.to_lowercase(), baseline);
        }
    }

    pub fn crop_profile(&self, crop_name: &str) -> Option<&CropProfile> {
        self.crops.get(&crop_name.to_lowercase())
    }

    /// Profile for `crop_name`, or the documented fallback constants
    pub fn crop_profile_or_fallback(&self, crop_name: &str) -> CropProfile {
        match self.crop_profile(crop_name) {
            Some(profile) => profile.clone(),
            None => {
                tracing::warn!("unknown crop '{}', using fallback profile", crop_name);
                CropProfile::fallback()
            }
        }
    }

    /// Candidate diseases for `crop_name`; empty for unknown crops
    pub fn diseases_for(&self, crop_name: &str) -> &[DiseaseRisk] {
        self.diseases
            .get(&crop_name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weather baseline for `state`, defaulting for unlisted states
    pub fn baseline_for(&self, state: &str) -> RegionalBaseline {
        self.regions
            .get(&state.to_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Crop names covered by the table, in stable order
    pub fn crop_names(&self) -> impl Iterator<Item = &str> {
        self.crops.keys().map(String::as_str)
    }
}
