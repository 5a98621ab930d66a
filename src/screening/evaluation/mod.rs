mod catalog;

pub use catalog::{
    ConfigurationError, Nutrient, NutrientRule, RiskPredicate, RuleCatalog, TierPolicy,
};

use serde::{Deserialize, Serialize};

use super::profile::Profile;

/// Per-nutrient status tier, serialized with the report's Arabic labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutrientStatus {
    #[serde(rename = "طبيعي")]
    Normal,
    #[serde(rename = "نقص")]
    Deficient,
    #[serde(rename = "نقص شديد")]
    SeverelyDeficient,
}

impl NutrientStatus {
    pub fn label(self) -> &'static str {
        match self {
            NutrientStatus::Normal => "طبيعي",
            NutrientStatus::Deficient => "نقص",
            NutrientStatus::SeverelyDeficient => "نقص شديد",
        }
    }

    pub fn is_deficient(self) -> bool {
        !matches!(self, NutrientStatus::Normal)
    }
}

impl TierPolicy {
    /// Reduce a true-predicate count to a status tier.
    pub fn reduce(self, matched: usize) -> NutrientStatus {
        match self {
            TierPolicy::SeverityTiered => {
                if matched >= 3 {
                    NutrientStatus::SeverelyDeficient
                } else if matched == 2 {
                    NutrientStatus::Deficient
                } else {
                    NutrientStatus::Normal
                }
            }
            TierPolicy::TwoFactor => {
                if matched >= 2 {
                    NutrientStatus::Deficient
                } else {
                    NutrientStatus::Normal
                }
            }
        }
    }
}

/// Evaluation result for one nutrient, carrying the names of the predicates
/// that fired so reports and tests can audit the signal trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutrientFinding {
    pub nutrient: Nutrient,
    pub status: NutrientStatus,
    pub matched: Vec<&'static str>,
}

/// Stateless evaluator applying the rule catalogue to validated profiles.
///
/// Every predicate is total over a well-formed [`Profile`], so evaluation
/// has no failure mode; each nutrient is scored independently even where
/// rules read the same lifestyle answer.
pub struct RiskEvaluator {
    catalog: RuleCatalog,
}

impl RiskEvaluator {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Self {
        Self::new(RuleCatalog::standard())
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Score every catalogued nutrient, in catalogue order.
    pub fn evaluate(&self, profile: &Profile) -> Vec<NutrientFinding> {
        self.catalog
            .rules()
            .iter()
            .map(|rule| {
                let matched: Vec<&'static str> = rule
                    .predicates
                    .iter()
                    .filter(|predicate| predicate.holds(profile))
                    .map(|predicate| predicate.name)
                    .collect();

                NutrientFinding {
                    nutrient: rule.nutrient,
                    status: rule.policy.reduce(matched.len()),
                    matched,
                }
            })
            .collect()
    }
}
