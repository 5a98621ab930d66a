use serde::{Deserialize, Serialize};

/// Standard four-bucket BMI banding, serialized with the report's Arabic
/// labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "نقص في الوزن")]
    Underweight,
    #[serde(rename = "وزن طبيعي")]
    Normal,
    #[serde(rename = "زيادة في الوزن")]
    Overweight,
    #[serde(rename = "سمنة")]
    Obese,
}

impl BmiCategory {
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "نقص في الوزن",
            BmiCategory::Normal => "وزن طبيعي",
            BmiCategory::Overweight => "زيادة في الوزن",
            BmiCategory::Obese => "سمنة",
        }
    }
}

/// Computed body-mass index plus its category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

/// `weight / (height in meters)^2`. Total for validated demographics; the
/// normalizer guarantees a strictly positive height.
pub fn compute(weight_kg: f64, height_cm: f64) -> BmiResult {
    let meters = height_cm / 100.0;
    let value = weight_kg / (meters * meters);

    let category = if value < 18.5 {
        BmiCategory::Underweight
    } else if value < 25.0 {
        BmiCategory::Normal
    } else if value < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    BmiResult { value, category }
}
