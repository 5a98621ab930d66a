use serde::{Deserialize, Serialize};

use super::super::profile::{DietType, Profile, SunContext};

/// The fixed 20-nutrient catalogue, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    VitaminD,
    VitaminA,
    VitaminE,
    VitaminK,
    VitaminC,
    VitaminB1,
    VitaminB2,
    VitaminB3,
    VitaminB6,
    VitaminB12,
    Folate,
    Iron,
    Calcium,
    Magnesium,
    Zinc,
    Selenium,
    Copper,
    Manganese,
    Potassium,
    Iodine,
}

impl Nutrient {
    pub const ALL: [Nutrient; 20] = [
        Nutrient::VitaminD,
        Nutrient::VitaminA,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::VitaminC,
        Nutrient::VitaminB1,
        Nutrient::VitaminB2,
        Nutrient::VitaminB3,
        Nutrient::VitaminB6,
        Nutrient::VitaminB12,
        Nutrient::Folate,
        Nutrient::Iron,
        Nutrient::Calcium,
        Nutrient::Magnesium,
        Nutrient::Zinc,
        Nutrient::Selenium,
        Nutrient::Copper,
        Nutrient::Manganese,
        Nutrient::Potassium,
        Nutrient::Iodine,
    ];

    /// Display name as it appears in the generated report.
    pub fn display_name(self) -> &'static str {
        match self {
            Nutrient::VitaminD => "فيتامين D (كالسيفيرول)",
            Nutrient::VitaminA => "فيتامين A (ريتينول)",
            Nutrient::VitaminE => "فيتامين E (توكوفيرول)",
            Nutrient::VitaminK => "فيتامين K",
            Nutrient::VitaminC => "فيتامين C (حمض الأسكوربيك)",
            Nutrient::VitaminB1 => "فيتامين B1 (ثيامين)",
            Nutrient::VitaminB2 => "فيتامين B2 (ريبوفلافين)",
            Nutrient::VitaminB3 => "فيتامين B3 (نياسين)",
            Nutrient::VitaminB6 => "فيتامين B6 (بيريدوكسين)",
            Nutrient::VitaminB12 => "فيتامين B12 (كوبالامين)",
            Nutrient::Folate => "حمض الفوليك",
            Nutrient::Iron => "الحديد",
            Nutrient::Calcium => "الكالسيوم",
            Nutrient::Magnesium => "المغنيسيوم",
            Nutrient::Zinc => "الزنك",
            Nutrient::Selenium => "السيلينيوم",
            Nutrient::Copper => "النحاس",
            Nutrient::Manganese => "المنغنيز",
            Nutrient::Potassium => "البوتاسيوم",
            Nutrient::Iodine => "اليود",
        }
    }
}

/// How a nutrient's true-predicate count reduces to a status tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierPolicy {
    /// Three or more signals is a severe deficiency, exactly two a
    /// deficiency. Used by the four-predicate rules (D, A, B12, iron,
    /// calcium).
    SeverityTiered,
    /// Two or more signals is a deficiency; no severe tier.
    TwoFactor,
}

/// Named boolean risk signal over a validated profile.
pub struct RiskPredicate {
    pub name: &'static str,
    check: fn(&Profile) -> bool,
}

impl RiskPredicate {
    fn new(name: &'static str, check: fn(&Profile) -> bool) -> Self {
        Self { name, check }
    }

    pub fn holds(&self, profile: &Profile) -> bool {
        (self.check)(profile)
    }
}

/// One nutrient's ordered predicate list plus its reduction policy.
pub struct NutrientRule {
    pub nutrient: Nutrient,
    pub policy: TierPolicy,
    pub predicates: Vec<RiskPredicate>,
}

/// A nutrient referenced without a configured rule. Only reachable when a
/// hand-built catalogue is incomplete; the standard catalogue is covered by
/// tests and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no rule configured for nutrient {0:?}")]
pub struct ConfigurationError(pub Nutrient);

/// Read-only rule table mapping every nutrient to its risk predicates.
pub struct RuleCatalog {
    rules: Vec<NutrientRule>,
}

// Lifestyle signals shared by several nutrients. A single questionnaire
// answer is allowed to drive multiple independent nutrient flags.
fn low_vegetables_fruits(profile: &Profile) -> bool {
    profile.vegetables_fruits.is_low()
}

fn low_dairy_meat(profile: &Profile) -> bool {
    profile.dairy_meat.is_low()
}

fn vegetarian_diet(profile: &Profile) -> bool {
    profile.diet_type == DietType::Vegetarian
}

impl RuleCatalog {
    /// The standard catalogue, ported predicate-for-predicate from the
    /// questionnaire's scoring rules.
    ///
    /// Several symptom needles ("مشاكل في الرؤية", "جفاف الجلد",
    /// "تشقق زوايا الفم", "تشنجات عضلية", "فقر الدم", "ضعف العظام") do not
    /// appear in the standard selectable symptom vocabulary, so those
    /// predicates only fire for free-form symptom tags. Kept as-is.
    pub fn standard() -> Self {
        let rules = vec![
            NutrientRule {
                nutrient: Nutrient::VitaminD,
                policy: TierPolicy::SeverityTiered,
                predicates: vec![
                    RiskPredicate::new("minimal_sun_exposure", |p| p.sun_exposure_hours < 0.5),
                    RiskPredicate::new("low_dairy_meat", low_dairy_meat),
                    RiskPredicate::new("mostly_indoors", |p| {
                        p.sun_context == SunContext::MostlyIndoors
                    }),
                    RiskPredicate::new("muscle_weakness_or_pain", |p| {
                        p.symptom_like("ضعف العضلات أو آلامها")
                    }),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::VitaminA,
                policy: TierPolicy::SeverityTiered,
                predicates: vec![
                    RiskPredicate::new("low_vegetables_fruits", low_vegetables_fruits),
                    RiskPredicate::new("vision_problems", |p| p.symptom_like("مشاكل في الرؤية")),
                    RiskPredicate::new("dry_skin", |p| p.symptom_like("جفاف الجلد")),
                    RiskPredicate::new("no_fresh_produce_components", |p| {
                        !p.has_meal_component("خضروات طازجة") && !p.has_meal_component("فواكه")
                    }),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::VitaminE,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("low_vegetables_fruits", low_vegetables_fruits),
                    RiskPredicate::new("no_vegetable_oils", |p| {
                        !p.meal_component_like("زيوت نباتية")
                    }),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::VitaminK,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("low_vegetables_fruits", low_vegetables_fruits),
                    RiskPredicate::new("no_fresh_vegetables", |p| {
                        !p.meal_component_like("خضروات طازجة")
                    }),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::VitaminC,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("low_vegetables_fruits", low_vegetables_fruits),
                    RiskPredicate::new("no_fruit_or_fresh_vegetable_components", |p| {
                        !p.has_meal_component("فواكه") && !p.has_meal_component("خضروات طازجة")
                    }),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::VitaminB1,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("vegetarian_diet", vegetarian_diet),
                    RiskPredicate::new("no_whole_grains_or_legumes", |p| {
                        !p.has_meal_component("حبوب كاملة") && !p.has_meal_component("بقوليات")
                    }),
                    RiskPredicate::new("fatigue", |p| p.symptom_like("التعب والإرهاق")),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::VitaminB2,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("low_dairy_meat", low_dairy_meat),
                    RiskPredicate::new("cracked_mouth_corners", |p| {
                        p.symptom_like("تشقق زوايا الفم")
                    }),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::VitaminB3,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("vegetarian_diet", vegetarian_diet),
                    RiskPredicate::new("headache", |p| p.symptom_like("الصداع")),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::VitaminB6,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("low_vegetables_fruits", low_vegetables_fruits),
                    RiskPredicate::new("muscle_cramps", |p| p.symptom_like("تشنجات عضلية")),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::VitaminB12,
                policy: TierPolicy::SeverityTiered,
                predicates: vec![
                    RiskPredicate::new("meat_free_diet", |p| p.diet_type.excludes_meat()),
                    RiskPredicate::new("low_dairy_meat", low_dairy_meat),
                    RiskPredicate::new("fatigue", |p| p.symptom_like("التعب والإرهاق")),
                    RiskPredicate::new("dizziness", |p| p.symptom_like("الدوخة")),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::Folate,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("low_vegetables_fruits", low_vegetables_fruits),
                    RiskPredicate::new("no_vegetable_components", |p| {
                        !p.meal_component_like("خضروات")
                    }),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::Iron,
                policy: TierPolicy::SeverityTiered,
                predicates: vec![
                    RiskPredicate::new("vegetarian_diet", vegetarian_diet),
                    RiskPredicate::new("pale_skin", |p| p.symptom_like("شحوب الجلد")),
                    RiskPredicate::new("fatigue", |p| p.symptom_like("التعب والإرهاق")),
                    RiskPredicate::new("low_dairy_meat", low_dairy_meat),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::Calcium,
                policy: TierPolicy::SeverityTiered,
                predicates: vec![
                    RiskPredicate::new("low_dairy_meat", low_dairy_meat),
                    RiskPredicate::new("vegetarian_diet", vegetarian_diet),
                    RiskPredicate::new("muscle_weakness_or_pain", |p| {
                        p.symptom_like("ضعف العضلات أو آلامها")
                    }),
                    RiskPredicate::new("no_dairy_components", |p| {
                        !p.meal_component_like("منتجات ألبان")
                    }),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::Magnesium,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("muscle_weakness", |p| p.symptom_like("ضعف العضلات")),
                    RiskPredicate::new("muscle_cramps", |p| p.symptom_like("تشنجات عضلية")),
                    RiskPredicate::new("low_vegetables_fruits", low_vegetables_fruits),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::Zinc,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("slow_wound_healing", |p| {
                        p.symptom_like("بطء التئام الجروح")
                    }),
                    RiskPredicate::new("low_dairy_meat", low_dairy_meat),
                    RiskPredicate::new("hair_loss", |p| p.symptom_like("تساقط الشعر")),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::Selenium,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("vegetarian_diet", vegetarian_diet),
                    RiskPredicate::new("no_fish_components", |p| !p.meal_component_like("أسماك")),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::Copper,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("anemia", |p| p.symptom_like("فقر الدم")),
                    RiskPredicate::new("weak_bones", |p| p.symptom_like("ضعف العظام")),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::Manganese,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("no_whole_grains_or_nuts", |p| {
                        !p.has_meal_component("حبوب كاملة") && !p.has_meal_component("مكسرات")
                    }),
                    RiskPredicate::new("low_vegetables_fruits", low_vegetables_fruits),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::Potassium,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("low_vegetables_fruits", low_vegetables_fruits),
                    RiskPredicate::new("muscle_weakness", |p| p.symptom_like("ضعف العضلات")),
                ],
            },
            NutrientRule {
                nutrient: Nutrient::Iodine,
                policy: TierPolicy::TwoFactor,
                predicates: vec![
                    RiskPredicate::new("low_dairy_meat", low_dairy_meat),
                    RiskPredicate::new("no_fish_components", |p| !p.meal_component_like("أسماك")),
                ],
            },
        ];

        Self { rules }
    }

    pub fn rules(&self) -> &[NutrientRule] {
        &self.rules
    }

    pub fn rule(&self, nutrient: Nutrient) -> Result<&NutrientRule, ConfigurationError> {
        self.rules
            .iter()
            .find(|rule| rule.nutrient == nutrient)
            .ok_or(ConfigurationError(nutrient))
    }

    /// Assert every catalogued nutrient has a rule, in catalogue order.
    pub fn verify_complete(&self) -> Result<(), ConfigurationError> {
        for nutrient in Nutrient::ALL {
            self.rule(nutrient)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_covers_all_nutrients_in_order() {
        let catalog = RuleCatalog::standard();
        assert_eq!(catalog.rules().len(), Nutrient::ALL.len());
        let order: Vec<Nutrient> = catalog.rules().iter().map(|rule| rule.nutrient).collect();
        assert_eq!(order, Nutrient::ALL);
        catalog.verify_complete().expect("catalog is complete");
    }

    #[test]
    fn tiered_rules_carry_four_predicates() {
        let catalog = RuleCatalog::standard();
        for rule in catalog.rules() {
            match rule.policy {
                TierPolicy::SeverityTiered => assert_eq!(
                    rule.predicates.len(),
                    4,
                    "{:?} should have four predicates",
                    rule.nutrient
                ),
                TierPolicy::TwoFactor => assert!(
                    (1..=3).contains(&rule.predicates.len()),
                    "{:?} should have one to three predicates",
                    rule.nutrient
                ),
            }
        }
    }

    #[test]
    fn missing_rule_is_a_configuration_error() {
        let catalog = RuleCatalog { rules: Vec::new() };
        let err = catalog
            .rule(Nutrient::VitaminD)
            .err()
            .expect("missing rule surfaces");
        assert_eq!(err, ConfigurationError(Nutrient::VitaminD));
        assert!(catalog.verify_complete().is_err());
    }
}
