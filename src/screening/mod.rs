pub mod bmi;
pub mod evaluation;
pub mod profile;
pub mod report;

pub use bmi::{BmiCategory, BmiResult};
pub use evaluation::{
    ConfigurationError, Nutrient, NutrientFinding, NutrientStatus, RiskEvaluator, RuleCatalog,
    TierPolicy,
};
pub use profile::{Profile, ProfileSubmission, ValidationError};
pub use report::{NutrientAssessment, Report};

/// Facade running the full pipeline: validate, score every nutrient,
/// classify BMI, and compose the report.
pub struct ScreeningEngine {
    evaluator: RiskEvaluator,
}

impl ScreeningEngine {
    pub fn new(evaluator: RiskEvaluator) -> Self {
        Self { evaluator }
    }

    pub fn standard() -> Self {
        Self::new(RiskEvaluator::standard())
    }

    pub fn catalog(&self) -> &RuleCatalog {
        self.evaluator.catalog()
    }

    /// Score one submission. Deterministic; identical submissions produce
    /// identical reports.
    pub fn score(&self, submission: ProfileSubmission) -> Result<Report, ValidationError> {
        let profile = submission.validate()?;
        let findings = self.evaluator.evaluate(&profile);
        Ok(report::compose(&profile, findings))
    }
}
