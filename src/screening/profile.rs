use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Respondent gender as collected by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "ذكر")]
    Male,
    #[serde(rename = "أنثى")]
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "ذكر",
            Gender::Female => "أنثى",
        }
    }
}

/// Declared dietary pattern. The wire values are the Arabic literals the
/// questionnaire form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietType {
    #[serde(rename = "غير نباتي")]
    NonVegetarian,
    #[serde(rename = "نباتي")]
    Vegetarian,
    #[serde(rename = "نباتي مع أسماك")]
    Pescatarian,
    #[serde(rename = "نباتي مع منتجات ألبان")]
    VegetarianWithDairy,
    #[serde(rename = "مختلط")]
    Mixed,
}

impl DietType {
    pub fn label(self) -> &'static str {
        match self {
            DietType::NonVegetarian => "غير نباتي",
            DietType::Vegetarian => "نباتي",
            DietType::Pescatarian => "نباتي مع أسماك",
            DietType::VegetarianWithDairy => "نباتي مع منتجات ألبان",
            DietType::Mixed => "مختلط",
        }
    }

    /// Diets that exclude meat entirely, with or without fish.
    pub fn excludes_meat(self) -> bool {
        matches!(self, DietType::Vegetarian | DietType::Pescatarian)
    }
}

/// Four-step intake frequency shared by the vegetables/fruits and
/// dairy/meat questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntakeFrequency {
    #[serde(rename = "نادراً")]
    Rarely,
    #[serde(rename = "أحياناً")]
    Sometimes,
    #[serde(rename = "بانتظام")]
    Regularly,
    #[serde(rename = "كثيراً")]
    Often,
}

impl IntakeFrequency {
    pub fn label(self) -> &'static str {
        match self {
            IntakeFrequency::Rarely => "نادراً",
            IntakeFrequency::Sometimes => "أحياناً",
            IntakeFrequency::Regularly => "بانتظام",
            IntakeFrequency::Often => "كثيراً",
        }
    }

    /// The low end of the scale counts as a risk signal everywhere the rule
    /// table references intake frequency.
    pub fn is_low(self) -> bool {
        matches!(self, IntakeFrequency::Rarely | IntakeFrequency::Sometimes)
    }
}

/// Context qualifying the reported daily sun exposure hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SunContext {
    #[serde(rename = "العمل في الخارج")]
    OutdoorWork,
    #[serde(rename = "المشي اليومي")]
    DailyWalk,
    #[serde(rename = "الرياضة الخارجية")]
    OutdoorSports,
    #[serde(rename = "محدود (داخل المباني معظم الوقت)")]
    MostlyIndoors,
}

impl SunContext {
    pub fn label(self) -> &'static str {
        match self {
            SunContext::OutdoorWork => "العمل في الخارج",
            SunContext::DailyWalk => "المشي اليومي",
            SunContext::OutdoorSports => "الرياضة الخارجية",
            SunContext::MostlyIndoors => "محدود (داخل المباني معظم الوقت)",
        }
    }
}

/// Five-step physical activity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[serde(rename = "خامل")]
    Sedentary,
    #[serde(rename = "خفيف")]
    Light,
    #[serde(rename = "معتدل")]
    Moderate,
    #[serde(rename = "نشط")]
    Active,
    #[serde(rename = "رياضي محترف")]
    Athlete,
}

impl ActivityLevel {
    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "خامل",
            ActivityLevel::Light => "خفيف",
            ActivityLevel::Moderate => "معتدل",
            ActivityLevel::Active => "نشط",
            ActivityLevel::Athlete => "رياضي محترف",
        }
    }
}

/// Self-reported sleep quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SleepQuality {
    #[serde(rename = "سيئة جداً")]
    VeryPoor,
    #[serde(rename = "سيئة")]
    Poor,
    #[serde(rename = "متوسطة")]
    Average,
    #[serde(rename = "جيدة")]
    Good,
    #[serde(rename = "ممتازة")]
    Excellent,
}

impl SleepQuality {
    pub fn label(self) -> &'static str {
        match self {
            SleepQuality::VeryPoor => "سيئة جداً",
            SleepQuality::Poor => "سيئة",
            SleepQuality::Average => "متوسطة",
            SleepQuality::Good => "جيدة",
            SleepQuality::Excellent => "ممتازة",
        }
    }
}

/// Self-reported daily stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StressLevel {
    #[serde(rename = "منخفض")]
    Low,
    #[serde(rename = "متوسط")]
    Medium,
    #[serde(rename = "عالي")]
    High,
}

impl StressLevel {
    pub fn label(self) -> &'static str {
        match self {
            StressLevel::Low => "منخفض",
            StressLevel::Medium => "متوسط",
            StressLevel::High => "عالي",
        }
    }
}

/// Daily meal structure collected alongside the questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealsInfo {
    #[serde(default)]
    pub count: u8,
    #[serde(default)]
    pub breakfast: bool,
    #[serde(default)]
    pub lunch: bool,
    #[serde(default)]
    pub dinner: bool,
    #[serde(default)]
    pub snacks: Vec<String>,
}

/// Sleep hours plus subjective quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepInfo {
    pub hours: f64,
    pub quality: SleepQuality,
}

/// Tag collection that arrives either as a JSON array or as the
/// comma-joined string the original questionnaire form produces.
/// "no symptoms" / "no chronic diseases" placeholders collapse to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TagList(pub Vec<String>);

impl TagList {
    pub fn into_set(self) -> BTreeSet<String> {
        self.0.into_iter().collect()
    }
}

impl<'de> Deserialize<'de> for TagList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Joined(String),
            Items(Vec<String>),
        }

        let tags = match Repr::deserialize(deserializer)? {
            Repr::Joined(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty() && !tag.starts_with("لا توجد"))
                .map(str::to_string)
                .collect(),
            Repr::Items(items) => items
                .into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty() && !tag.starts_with("لا توجد"))
                .collect(),
        };

        Ok(TagList(tags))
    }
}

/// Raw questionnaire payload exactly as submitted over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub age: i64,
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
    pub sun_exposure: f64,
    pub activity_level: ActivityLevel,
    pub diet_type: DietType,
    #[serde(default)]
    pub symptoms: TagList,
    #[serde(default)]
    pub chronic_diseases: TagList,
    #[serde(default)]
    pub medications: String,
    pub vegetables_fruits: IntakeFrequency,
    pub dairy_meat: IntakeFrequency,
    #[serde(default)]
    pub supplements: String,
    #[serde(default)]
    pub meals_info: MealsInfo,
    pub sun_context: SunContext,
    #[serde(default)]
    pub physical_activities: Vec<String>,
    #[serde(default)]
    pub exercise_duration: u32,
    pub sleep_info: SleepInfo,
    pub stress_level: StressLevel,
    #[serde(default)]
    pub meal_components: Vec<String>,
    #[serde(default)]
    pub cooking_methods: Vec<String>,
}

/// Demographic input that failed validation, surfaced before any scoring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ValidationError {
    fn not_positive(field: &'static str) -> Self {
        Self {
            field,
            reason: "must be strictly positive",
        }
    }
}

/// Canonical validated profile. Immutable once constructed; all rule
/// predicates read from this record only.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub age: i64,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sun_exposure_hours: f64,
    pub sun_context: SunContext,
    pub activity_level: ActivityLevel,
    pub sleep_hours: f64,
    pub sleep_quality: SleepQuality,
    pub stress_level: StressLevel,
    pub physical_activities: Vec<String>,
    pub exercise_duration_minutes: u32,
    pub meals: MealsInfo,
    pub diet_type: DietType,
    pub vegetables_fruits: IntakeFrequency,
    pub dairy_meat: IntakeFrequency,
    pub meal_components: BTreeSet<String>,
    pub cooking_methods: BTreeSet<String>,
    pub symptoms: BTreeSet<String>,
    pub chronic_diseases: BTreeSet<String>,
    pub medications: String,
    pub supplements: String,
}

impl ProfileSubmission {
    /// Validate demographics and shape the raw answers into a [`Profile`].
    ///
    /// Checks run in documented order (age, then weight, then height) and
    /// the first violation wins; no scoring happens on a rejected payload.
    pub fn validate(self) -> Result<Profile, ValidationError> {
        if self.age <= 0 {
            return Err(ValidationError::not_positive("age"));
        }
        if self.weight <= 0.0 {
            return Err(ValidationError::not_positive("weight"));
        }
        if self.height <= 0.0 {
            return Err(ValidationError::not_positive("height"));
        }

        Ok(Profile {
            age: self.age,
            gender: self.gender,
            weight_kg: self.weight,
            height_cm: self.height,
            sun_exposure_hours: self.sun_exposure,
            sun_context: self.sun_context,
            activity_level: self.activity_level,
            sleep_hours: self.sleep_info.hours,
            sleep_quality: self.sleep_info.quality,
            stress_level: self.stress_level,
            physical_activities: self.physical_activities,
            exercise_duration_minutes: self.exercise_duration,
            meals: self.meals_info,
            diet_type: self.diet_type,
            vegetables_fruits: self.vegetables_fruits,
            dairy_meat: self.dairy_meat,
            meal_components: self.meal_components.into_iter().collect(),
            cooking_methods: self.cooking_methods.into_iter().collect(),
            symptoms: self.symptoms.into_set(),
            chronic_diseases: self.chronic_diseases.into_set(),
            medications: self.medications,
            supplements: self.supplements,
        })
    }
}

impl Profile {
    /// Substring test against every reported symptom tag. The original
    /// questionnaire joined symptoms into one comma-separated string before
    /// matching, so needles like "ضعف العضلات" must hit inside the longer
    /// selectable tag "ضعف العضلات أو آلامها".
    pub fn symptom_like(&self, needle: &str) -> bool {
        self.symptoms.iter().any(|tag| tag.contains(needle))
    }

    /// Exact meal-component tag membership.
    pub fn has_meal_component(&self, tag: &str) -> bool {
        self.meal_components.contains(tag)
    }

    /// Substring test against every meal-component tag.
    pub fn meal_component_like(&self, needle: &str) -> bool {
        self.meal_components.iter().any(|tag| tag.contains(needle))
    }
}
