//! Editable marketing copy shown on the public page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The singleton site-content record.
///
/// Every field is optional and omitted when absent: a save replaces the stored
/// record wholesale, so reading it back yields exactly what was submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    // Hero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_subtitle: Option<String>,

    // Principles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principles_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principles_subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principles_axis1_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principles_axis1_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principles_axis2_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principles_axis2_content: Option<String>,

    // Youth agenda
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youth_agenda_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youth_agenda_subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housing_problem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housing_solution1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housing_solution2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs_problem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs_solution1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs_solution2: Option<String>,

    // Biography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography_subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography_text1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography_text2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography_text3: Option<String>,

    // Contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_subtitle: Option<String>,

    // Footer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_whatsapp: Option<String>,

    /// Keys the admin panel sends that this struct does not name.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

impl SiteContent {
    /// Copy served before anything has been saved.
    pub fn default_content() -> Self {
        Self {
            hero_video: text("https://player.vimeo.com/video/1133168419?badge=0&autopause=0&player_id=0&app_id=58479&title=0&byline=0&portrait=0"),
            hero_title: text("صوت من عندكم...\\nمستقبل ليكم.\\nحامد بندق"),
            hero_subtitle: text("من بورسعيد... لبورسعيد، نبني مستقبل شبابنا سوا"),

            principles_title: text("ليه احنا مختلفين؟"),
            principles_subtitle: text("بورسعيد تستحق سياسة نظيفة ونائب تلاقيه في الشارع مش في المكتب بس"),
            principles_axis1_title: text("نزاهة حقيقية"),
            principles_axis1_content: text("القلوب ما تنشتريش، لكن العقول نقدر نكسبها. مفيش فلوس مشبوهة - حملتنا ببرنامج واضح وتمويل شفاف. النائب اللي بيبدأ بالفلوس هيخدم الفلوس، احنا بنبدأ بيكم وهنخدمكم."),
            principles_axis2_title: text("معاكم على طول"),
            principles_axis2_content: text("مش هتلاقوني قاعد في مكتب مستني تيجوا - أنا هكون في الشارع وبينكم. منصة رقمية للمتابعة: كل شكوى بتاخد رقم والرد خلال 48 ساعة. التواصل حق مش فضل."),

            youth_agenda_title: text("برنامجنا للشباب"),
            youth_agenda_subtitle: text("مش كلام فاضي - حلول حقيقية لمشاكل حقيقية"),
            housing_problem: text("شباب بورسعيد محتاج بيت يعيش فيه، مش مجرد اجتماعات ووعود"),
            housing_solution1: text("قانون حقيقي: تخصيص إجباري لأراضي جديدة مخصصة للشباب فقط"),
            housing_solution2: text("رقابة فعّالة: مساءلة المسؤولين عن تأخير تسليم الوحدات"),
            jobs_problem: text("خريجين كتير ووظائف قليلة - والموجود مش بيليق بطموح شبابنا"),
            jobs_solution1: text("Port Said Tech-Port: إلزام الشركات بـ500 وظيفة نوعية سنوياً (برمجة، لوجستيات، صيانة)"),
            jobs_solution2: text("تدريب هادف: ربط البرامج باحتياجات السوق الحقيقية"),

            biography_title: text("مين هو حامد بندق؟"),
            biography_subtitle: text("واحد منكم... وليكم"),
            biography_text1: text("رائد أعمال بورسعيدي، عنده خبرة في الأعمال والمسؤولية المجتمعية. مش بس كلام - ده واحد اشتغل وبنى وساعد."),
            biography_text2: text("من خلال شغله في الاستيراد والتصدير والصناعة، عايش واقع الاقتصاد البورسعيدي وفاهم تحديات الشباب في الشغل والحياة."),
            biography_text3: text("الفرق معانا: مش هتيجي تقابلني في مكتب مقفول، هتلاقيني في الشارع وبينكم. التواصل مش منّة، ده حق ليكم عليّا."),

            contact_title: text("تعالى نتكلم"),
            contact_subtitle: text("حملتنا بتعتمد على طاقتكم وأفكاركم، مش على الفلوس"),

            footer_phone: text("+20 XXX XXX XXXX"),
            footer_email: text("info@hamedbondo.eg"),
            footer_facebook: text("https://facebook.com/hamedbondo"),
            footer_whatsapp: text("https://wa.me/20XXXXXXXXXX"),

            extra: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_object_round_trips_exactly() {
        let submitted = json!({ "heroTitle": "X" });
        let content: SiteContent = serde_json::from_value(submitted.clone()).unwrap();
        assert_eq!(serde_json::to_value(&content).unwrap(), submitted);
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let submitted = json!({ "heroTitle": "X", "campaignSlogan": "Y" });
        let content: SiteContent = serde_json::from_value(submitted.clone()).unwrap();
        assert_eq!(content.extra.get("campaignSlogan"), Some(&json!("Y")));
        assert_eq!(serde_json::to_value(&content).unwrap(), submitted);
    }

    #[test]
    fn test_default_content_is_complete() {
        let value = serde_json::to_value(SiteContent::default_content()).unwrap();
        let fields = value.as_object().unwrap();
        assert_eq!(fields.len(), 28);
        assert!(fields.contains_key("principlesAxis1Title"));
        assert!(fields.contains_key("footerWhatsapp"));
    }
}
