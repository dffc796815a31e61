use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Seasonal baseline the weather synthesizer jitters around
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegionalBaseline {
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub precipitation_mm: f64,
}

impl Default for RegionalBaseline {
    fn default() -> Self {
        Self {
            min_temp_c: 20.0,
            max_temp_c: 30.0,
            precipitation_mm: 2.0,
        }
    }
}

pub(crate) fn builtin() -> BTreeMap<String, RegionalBaseline> {
    let mut regions = BTreeMap::new();

    // Northern wheat belt: cooler, dry
    for state in ["punjab", "haryana"] {
        regions.insert(
            state.to_string(),
            RegionalBaseline {
                min_temp_c: 18.0,
                max_temp_c: 28.0,
                precipitation_mm: 2.0,
            },
        );
    }

    // Southern states: warmer
    regions.insert(
        "tamil nadu".to_string(),
        RegionalBaseline {
            min_temp_c: 24.0,
            max_temp_c: 34.0,
            precipitation_mm: 2.0,
        },
    );

    // Kerala is both warm and wet
    regions.insert(
        "kerala".to_string(),
        RegionalBaseline {
            min_temp_c: 24.0,
            max_temp_c: 34.0,
            precipitation_mm: 8.0,
        },
    );

    regions.insert(
        "west bengal".to_string(),
        RegionalBaseline {
            min_temp_c: 20.0,
            max_temp_c: 30.0,
            precipitation_mm: 8.0,
        },
    );

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn northern_states_share_cooler_baseline() {
        let regions = builtin();
        for state in ["punjab", "haryana"] {
            let b = &regions[state];
            assert_eq!(b.min_temp_c, 18.0);
            assert_eq!(b.max_temp_c, 28.0);
            assert_eq!(b.precipitation_mm, 2.0);
        }
    }

    #[test]
    fn kerala_is_warm_and_wet() {
        let regions = builtin();
        let kerala = &regions["kerala"];
        assert_eq!(kerala.max_temp_c, 34.0);
        assert_eq!(kerala.precipitation_mm, 8.0);
    }

    #[test]
    fn default_baseline() {
        let b = RegionalBaseline::default();
        assert_eq!(b.min_temp_c, 20.0);
        assert_eq!(b.max_temp_c, 30.0);
        assert_eq!(b.precipitation_mm, 2.0);
    }
}
