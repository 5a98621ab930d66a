mod advice;

use serde::Serialize;
use std::fmt::Write as _;

use super::bmi::{self, BmiResult};
use super::evaluation::{NutrientFinding, NutrientStatus};
use super::profile::Profile;

/// One row of the nutrient table presented to the caller. Field names match
/// the questionnaire service's original JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutrientAssessment {
    pub name: &'static str,
    pub status: NutrientStatus,
    pub recommendations: String,
}

/// Complete screening report for one submission. Assembled fresh per
/// request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub bmi: BmiResult,
    pub nutrient_assessments: Vec<NutrientAssessment>,
    pub general_analysis: String,
    pub general_recommendations: String,
}

/// Attach advisory text to each finding and assemble the report.
pub fn compose(profile: &Profile, findings: Vec<NutrientFinding>) -> Report {
    let bmi = bmi::compute(profile.weight_kg, profile.height_cm);

    let nutrient_assessments = findings
        .into_iter()
        .map(|finding| NutrientAssessment {
            name: finding.nutrient.display_name(),
            status: finding.status,
            recommendations: advice::recommendation(finding.nutrient, finding.status, profile),
        })
        .collect();

    Report {
        bmi,
        nutrient_assessments,
        general_analysis: general_analysis(profile, bmi),
        general_recommendations: general_recommendations().to_string(),
    }
}

fn general_analysis(profile: &Profile, bmi: BmiResult) -> String {
    format!(
        "### التحليل العام للحالة الصحية\n\
         - مؤشر كتلة الجسم: {:.1} ({})\n\
         - العمر: {} سنة\n\
         - الجنس: {}\n\
         \n\
         ### تحليل نمط الحياة\n\
         - مستوى النشاط البدني: {}\n\
         - التعرض للشمس: {} ساعات يومياً\n\
         - جودة النوم: {}\n\
         - مستوى التوتر: {}\n\
         \n\
         ### تحليل النظام الغذائي\n\
         - نوع النظام: {}\n\
         - تناول الخضروات والفواكه: {}\n\
         - تناول البروتينات: {}",
        bmi.value,
        bmi.category.label(),
        profile.age,
        profile.gender.label(),
        profile.activity_level.label(),
        profile.sun_exposure_hours,
        profile.sleep_quality.label(),
        profile.stress_level.label(),
        profile.diet_type.label(),
        profile.vegetables_fruits.label(),
        profile.dairy_meat.label(),
    )
}

/// Fixed general guidance block, independent of the profile.
fn general_recommendations() -> &'static str {
    "### التوصيات العامة\n\
     1. تنظيم الوجبات الغذائية وتنويع مصادر الغذاء\n\
     2. تناول 5 حصص من الخضروات والفواكه يومياً\n\
     3. شرب 8-10 أكواب من الماء يومياً\n\
     4. ممارسة الرياضة لمدة 30 دقيقة على الأقل يومياً\n\
     5. الحصول على قسط كافٍ من النوم (7-9 ساعات)\n\
     6. تقليل مستويات التوتر من خلال ممارسة تمارين الاسترخاء\n\
     7. تناول وجبات متوازنة تشمل جميع العناصر الغذائية\n\
     8. المحافظة على وزن صحي ومؤشر كتلة جسم مثالي"
}

impl Report {
    /// Plain-text rendering used by the CLI and the screening archive.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# تقرير التحليل الصحي والغذائي");
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.general_analysis);
        let _ = writeln!(out);
        let _ = writeln!(out, "### تحليل الفيتامينات والمعادن");
        for assessment in &self.nutrient_assessments {
            let _ = writeln!(
                out,
                "- {}: {}",
                assessment.name,
                assessment.status.label()
            );
            for line in assessment.recommendations.lines() {
                let _ = writeln!(out, "  {}", line.trim());
            }
        }
        let _ = writeln!(out);
        let _ = write!(out, "{}", self.general_recommendations);
        out
    }
}
