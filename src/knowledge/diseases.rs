use std::collections::BTreeMap;

use crate::models::{DiseaseRisk, RiskLevel};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn builtin() -> BTreeMap<String, Vec<DiseaseRisk>> {
    let mut diseases = BTreeMap::new();
    diseases.insert("wheat".to_string(), wheat());
    diseases.insert("rice".to_string(), rice());
    diseases.insert("potato".to_string(), potato());
    diseases
}

fn wheat() -> Vec<DiseaseRisk> {
    vec![
        DiseaseRisk {
            name: "Leaf Rust (Puccinia triticina)".to_string(),
            risk_level: RiskLevel::High,
            symptoms: strings(&[
                "Small, round to oval orange-brown pustules on leaves",
                "Yellow halos around pustules",
                "Leaf discoloration and drying",
                "Reduced photosynthesis",
            ]),
            preventive_measures: strings(&[
                "Plant resistant varieties",
                "Early sowing to escape high disease pressure",
                "Balanced fertilization (avoid excess nitrogen)",
                "Crop rotation with non-host crops",
            ]),
            treatment_options: strings(&[
                "Fungicides containing propiconazole or tebuconazole",
                "Apply at first sign of disease",
                "Follow recommended spray intervals",
            ]),
            optimal_conditions: "Temperature 15-25°C with high humidity above 80%"
                .to_string(),
        },
        DiseaseRisk {
            name: "Powdery Mildew (Blumeria graminis)".to_string(),
            risk_level: RiskLevel::Medium,
            symptoms: strings(&[
                "White to gray powdery patches on leaves and stems",
                "Yellowing of affected tissues",
                "Reduced photosynthesis",
                "Premature senescence",
            ]),
            preventive_measures: strings(&[
                "Use resistant varieties",
                "Avoid dense planting",
                "Balance nitrogen fertilization",
                "Maintain field sanitation",
            ]),
            treatment_options: strings(&[
                "Sulfur-based fungicides",
                "Triazole fungicides",
                "Application at early disease stage",
            ]),
            optimal_conditions:
                "Cool (15-22°C) temperatures with moderate humidity, shaded conditions"
                    .to_string(),
        },
        DiseaseRisk {
            name: "Stem Rust (Puccinia graminis)".to_string(),
            risk_level: RiskLevel::Medium,
            symptoms: strings(&[
                "Reddish-brown oval-shaped pustules on stems and leaves",
                "Tearing of the epidermis",
                "Weakening of stems leading to lodging",
                "Shriveled grains",
            ]),
            preventive_measures: strings(&[
                "Grow resistant varieties",
                "Elimination of alternate hosts (barberry)",
                "Early planting",
                "Proper field spacing",
            ]),
            treatment_options: strings(&[
                "Triazole fungicides",
                "Strobilurin fungicides",
                "Carboxamide fungicides",
            ]),
            optimal_conditions:
                "Warm temperatures (18-30°C) with high humidity and wet conditions"
                    .to_string(),
        },
    ]
}

fn rice() -> Vec<DiseaseRisk> {
    vec![DiseaseRisk {
        name: "Blast (Magnaporthe oryzae)".to_string(),
        risk_level: RiskLevel::High,
        symptoms: strings(&[
            "Diamond-shaped lesions on leaves",
            "Gray centers with brown margins",
            "Neck and panicle infection",
            "Empty or partially filled grains",
        ]),
        preventive_measures: strings(&[
            "Resistant varieties",
            "Balanced fertilization",
            "Proper water management",
            "Field sanitation",
        ]),
        treatment_options: strings(&[
            "Triazole fungicides",
            "Strobilurin fungicides",
            "Silicon supplements",
        ]),
        optimal_conditions: "High humidity (>90%) with temperatures between 24-28°C"
            .to_string(),
    }]
}

fn potato() -> Vec<DiseaseRisk> {
    vec![DiseaseRisk {
        name: "Late Blight (Phytophthora infestans)".to_string(),
        risk_level: RiskLevel::VeryHigh,
        symptoms: strings(&[
            "Dark, water-soaked spots on leaves",
            "White fuzzy growth on leaf undersides",
            "Rapid wilting and browning",
            "Tuber rot with reddish-brown discoloration",
        ]),
        preventive_measures: strings(&[
            "Plant certified disease-free seed potatoes",
            "Resistant varieties",
            "Proper hilling to protect tubers",
            "Adequate plant spacing",
        ]),
        treatment_options: strings(&[
            "Mancozeb fungicides",
            "Metalaxyl + mancozeb combinations",
            "Copper-based products",
        ]),
        optimal_conditions: "Cool (10-20°C), wet conditions with high humidity".to_string(),
    }]
}
