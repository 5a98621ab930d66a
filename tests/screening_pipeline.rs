//! End-to-end specifications for the screening pipeline: raw submission
//! JSON in, validated profile, 20 nutrient assessments and report out.

use nutriscan::screening::{
    Nutrient, NutrientStatus, ProfileSubmission, RiskEvaluator, ScreeningEngine,
};

fn submission(value: serde_json::Value) -> ProfileSubmission {
    serde_json::from_value(value).expect("valid submission payload")
}

fn baseline() -> serde_json::Value {
    serde_json::json!({
        "age": 32,
        "gender": "أنثى",
        "weight": 58.0,
        "height": 164.0,
        "sun_exposure": 2.0,
        "activity_level": "نشط",
        "diet_type": "غير نباتي",
        "symptoms": "لا توجد أعراض",
        "chronic_diseases": "لا توجد أمراض مزمنة",
        "medications": "",
        "vegetables_fruits": "بانتظام",
        "dairy_meat": "بانتظام",
        "supplements": "",
        "meals_info": {"count": 3, "breakfast": true, "lunch": true, "dinner": true, "snacks": ["صباحية"]},
        "sun_context": "الرياضة الخارجية",
        "physical_activities": ["جري", "يوغا"],
        "exercise_duration": 60,
        "sleep_info": {"hours": 8.0, "quality": "جيدة"},
        "stress_level": "منخفض",
        "meal_components": [
            "خضروات طازجة", "فواكه", "لحوم حمراء", "دواجن", "أسماك",
            "بقوليات", "حبوب كاملة", "منتجات ألبان", "مكسرات وبذور", "زيوت نباتية"
        ],
        "cooking_methods": ["شوي", "طهي بالبخار", "طازج"]
    })
}

#[test]
fn every_valid_profile_yields_twenty_ordered_assessments() {
    let engine = ScreeningEngine::standard();
    let report = engine.score(submission(baseline())).expect("scores");

    assert_eq!(report.nutrient_assessments.len(), 20);
    let names: Vec<&str> = report
        .nutrient_assessments
        .iter()
        .map(|assessment| assessment.name)
        .collect();
    let expected: Vec<&str> = Nutrient::ALL
        .iter()
        .map(|nutrient| nutrient.display_name())
        .collect();
    assert_eq!(names, expected);

    for assessment in &report.nutrient_assessments {
        assert!(matches!(
            assessment.status,
            NutrientStatus::Normal | NutrientStatus::Deficient | NutrientStatus::SeverelyDeficient
        ));
    }
}

#[test]
fn identical_submissions_serialize_to_identical_reports() {
    let engine = ScreeningEngine::standard();
    let first = engine.score(submission(baseline())).expect("scores");
    let second = engine.score(submission(baseline())).expect("scores");

    let first_bytes = serde_json::to_vec(&first).expect("serializes");
    let second_bytes = serde_json::to_vec(&second).expect("serializes");
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn validation_failures_name_the_offending_field_in_order() {
    let engine = ScreeningEngine::standard();

    let mut raw = baseline();
    raw["age"] = serde_json::json!(0);
    let err = engine
        .score(submission(raw))
        .expect_err("age=0 must be rejected");
    assert_eq!(err.field, "age");

    let mut raw = baseline();
    raw["weight"] = serde_json::json!(-1.0);
    let err = engine
        .score(submission(raw))
        .expect_err("negative weight must be rejected");
    assert_eq!(err.field, "weight");

    // Valid age and weight must not mask the height violation.
    let mut raw = baseline();
    raw["height"] = serde_json::json!(0.0);
    let err = engine
        .score(submission(raw))
        .expect_err("height=0 must be rejected");
    assert_eq!(err.field, "height");
}

#[test]
fn worst_case_vegetarian_profile_flags_the_expected_nutrients() {
    let mut raw = baseline();
    raw["diet_type"] = serde_json::json!("نباتي");
    raw["vegetables_fruits"] = serde_json::json!("نادراً");
    raw["dairy_meat"] = serde_json::json!("نادراً");
    raw["sun_exposure"] = serde_json::json!(0.1);
    raw["sun_context"] = serde_json::json!("محدود (داخل المباني معظم الوقت)");
    raw["symptoms"] = serde_json::json!(
        "التعب والإرهاق, الدوخة, شحوب الجلد, ضعف العضلات أو آلامها, بطء التئام الجروح, تساقط الشعر"
    );
    raw["meal_components"] = serde_json::json!([]);

    let engine = ScreeningEngine::standard();
    let report = engine.score(submission(raw)).expect("scores");

    let status_of = |nutrient: Nutrient| {
        report
            .nutrient_assessments
            .iter()
            .find(|assessment| assessment.name == nutrient.display_name())
            .map(|assessment| assessment.status)
            .expect("nutrient present")
    };

    assert_eq!(
        status_of(Nutrient::VitaminD),
        NutrientStatus::SeverelyDeficient
    );
    assert_eq!(
        status_of(Nutrient::VitaminB12),
        NutrientStatus::SeverelyDeficient
    );
    assert_eq!(
        status_of(Nutrient::Iron),
        NutrientStatus::SeverelyDeficient
    );
    assert_eq!(
        status_of(Nutrient::Calcium),
        NutrientStatus::SeverelyDeficient
    );
    assert_eq!(status_of(Nutrient::VitaminC), NutrientStatus::Deficient);
    assert_eq!(status_of(Nutrient::Zinc), NutrientStatus::Deficient);
    assert_eq!(status_of(Nutrient::Selenium), NutrientStatus::Deficient);
    assert_eq!(status_of(Nutrient::Iodine), NutrientStatus::Deficient);
    // Copper's needles are absent from the questionnaire vocabulary, so it
    // stays normal even on the worst questionnaire-built profile.
    assert_eq!(status_of(Nutrient::Copper), NutrientStatus::Normal);
}

#[test]
fn shared_vegetable_predicate_flips_across_nutrients_together() {
    let shared = [
        Nutrient::VitaminC,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::Folate,
        Nutrient::Potassium,
        Nutrient::VitaminB6,
        Nutrient::Magnesium,
    ];

    let evaluator = RiskEvaluator::standard();

    let regular = submission(baseline()).validate().expect("valid profile");
    let mut raw = baseline();
    raw["vegetables_fruits"] = serde_json::json!("نادراً");
    let rare = submission(raw).validate().expect("valid profile");

    let regular_findings = evaluator.evaluate(&regular);
    let rare_findings = evaluator.evaluate(&rare);

    for nutrient in shared {
        let before = regular_findings
            .iter()
            .find(|finding| finding.nutrient == nutrient)
            .expect("nutrient present")
            .matched
            .contains(&"low_vegetables_fruits");
        let after = rare_findings
            .iter()
            .find(|finding| finding.nutrient == nutrient)
            .expect("nutrient present")
            .matched
            .contains(&"low_vegetables_fruits");

        assert!(!before, "{nutrient:?} flagged at بانتظام");
        assert!(after, "{nutrient:?} did not flag at نادراً");
    }
}
