use super::super::evaluation::{Nutrient, NutrientStatus};
use super::super::profile::Profile;

/// Advisory text for one nutrient assessment.
///
/// Most nutrients carry a fixed dietary-sources line. Iron and calcium
/// switch to actionable guidance once their own status is deficient; B12
/// switches on the respondent's diet (any meat-free diet gets the
/// supplement variant regardless of tier, mirroring the questionnaire's
/// original guidance).
pub(super) fn recommendation(nutrient: Nutrient, status: NutrientStatus, profile: &Profile) -> String {
    match nutrient {
        Nutrient::VitaminD => {
            "التعرض للشمس 15-20 دقيقة يومياً، تناول الأسماك الدهنية، صفار البيض، زيت كبد السمك"
                .to_string()
        }
        Nutrient::VitaminA => "تناول الجزر، البطاطا الحلوة، السبانخ، المشمش، الكبد".to_string(),
        Nutrient::VitaminE => "تناول المكسرات، البذور، الأفوكادو، زيت الزيتون، السبانخ".to_string(),
        Nutrient::VitaminK => "تناول الخضروات الورقية الخضراء، البروكلي، الملفوف".to_string(),
        Nutrient::VitaminC => "تناول الحمضيات، الفلفل، الطماطم، البروكلي، الفراولة".to_string(),
        Nutrient::VitaminB1 => "تناول الحبوب الكاملة، البقوليات، المكسرات، اللحوم".to_string(),
        Nutrient::VitaminB2 => {
            "تناول منتجات الألبان، البيض، اللحوم، الخضروات الورقية".to_string()
        }
        Nutrient::VitaminB3 => "تناول اللحوم، الأسماك، البذور، الفول السوداني".to_string(),
        Nutrient::VitaminB6 => "تناول الموز، البطاطا، الدجاج، الأسماك، الحمص".to_string(),
        Nutrient::VitaminB12 => b12_recommendation(profile),
        Nutrient::Folate => "تناول الخضروات الورقية، البقوليات، الحبوب المدعمة".to_string(),
        Nutrient::Iron => iron_recommendation(status),
        Nutrient::Calcium => calcium_recommendation(status),
        Nutrient::Magnesium => {
            "تناول المكسرات، البذور، البقوليات، الخضروات الورقية الداكنة".to_string()
        }
        Nutrient::Zinc => "تناول المحار، اللحوم، البذور، المكسرات".to_string(),
        Nutrient::Selenium => {
            "تناول المكسرات البرازيلية، الأسماك، البيض، الحبوب الكاملة".to_string()
        }
        Nutrient::Copper => "تناول الكبد، المحار، المكسرات، البذور".to_string(),
        Nutrient::Manganese => "تناول المكسرات، الحبوب الكاملة، البقوليات، الشاي".to_string(),
        Nutrient::Potassium => "تناول الموز، البطاطا، الخضروات الورقية، الحمضيات".to_string(),
        Nutrient::Iodine => {
            "استخدام الملح المدعم باليود، تناول الأعشاب البحرية، الأسماك".to_string()
        }
    }
}

fn b12_recommendation(profile: &Profile) -> String {
    if profile.diet_type.excludes_meat() {
        [
            "- تناول مكملات B12 بانتظام (1000 ميكروغرام يومياً)",
            "- إضافة الأطعمة المدعمة بفيتامين B12",
            "- متابعة مستويات B12 في الدم بشكل دوري",
        ]
        .join("\n")
    } else {
        "الحفاظ على تناول اللحوم والأسماك والبيض بانتظام".to_string()
    }
}

fn iron_recommendation(status: NutrientStatus) -> String {
    if status.is_deficient() {
        [
            "- تناول اللحوم الحمراء 2-3 مرات أسبوعياً",
            "- دمج مصادر فيتامين C مع الأطعمة الغنية بالحديد",
            "- تجنب شرب الشاي والقهوة مع الوجبات",
            "- استشارة الطبيب لتقييم الحاجة للمكملات",
        ]
        .join("\n")
    } else {
        "الحفاظ على النظام الغذائي المتوازن الحالي".to_string()
    }
}

fn calcium_recommendation(status: NutrientStatus) -> String {
    if status.is_deficient() {
        [
            "- زيادة تناول منتجات الألبان قليلة الدسم",
            "- تناول الخضروات الورقية الداكنة",
            "- إضافة السردين والسلمون مع العظام",
            "- النظر في تناول مكملات الكالسيوم مع فيتامين D",
        ]
        .join("\n")
    } else {
        "الاستمرار في تناول المصادر الجيدة للكالسيوم في النظام الغذائي الحالي".to_string()
    }
}
