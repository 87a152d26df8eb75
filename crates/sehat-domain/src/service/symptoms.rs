//! Keyword-based symptom classifier
//!
//! Free text is lower-cased and tested against five fixed keyword sets in a
//! fixed order. Matching is naive substring matching: "start" inside an
//! unrelated word still triggers the battery advisory. That is inherited
//! behavior, kept as-is.

use sehat_types::Language;

/// Symptom categories in fixed check order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymptomCategory {
    EngineNoise,
    Brakes,
    Accident,
    BodyDamage,
    Battery,
}

const ENGINE_KEYWORDS: &[&str] = &["awaz", "sound", "noise", "khat"];
const BRAKE_KEYWORDS: &[&str] = &["brake", "jam", "ruk", "squeak"];
const ACCIDENT_KEYWORDS: &[&str] = &["accident", "thuk", "crash", "takkar"];
const BODY_KEYWORDS: &[&str] = &["dent", "pichak", "body", "scrach", "scratch", "paint"];
const BATTERY_KEYWORDS: &[&str] = &["battery", "start", "current"];

impl SymptomCategory {
    /// Check order is fixed; advisories are reported in this order, not in
    /// order of appearance in the text.
    pub const ALL: [SymptomCategory; 5] = [
        SymptomCategory::EngineNoise,
        SymptomCategory::Brakes,
        SymptomCategory::Accident,
        SymptomCategory::BodyDamage,
        SymptomCategory::Battery,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            SymptomCategory::EngineNoise => ENGINE_KEYWORDS,
            SymptomCategory::Brakes => BRAKE_KEYWORDS,
            SymptomCategory::Accident => ACCIDENT_KEYWORDS,
            SymptomCategory::BodyDamage => BODY_KEYWORDS,
            SymptomCategory::Battery => BATTERY_KEYWORDS,
        }
    }

    /// Fixed advisory text for this category in the given language
    pub fn advisory(self, lang: Language) -> &'static str {
        match (self, lang) {
            (SymptomCategory::EngineNoise, Language::English) => {
                "Engine/Mounting: Potential issue with engine belts or mountings detected."
            }
            (SymptomCategory::EngineNoise, Language::Hindi) => {
                "इंजन/माउंटिंग: इंजन बेल्ट या माउंटिंग में खराबी की संभावना है।"
            }
            (SymptomCategory::Brakes, Language::English) => {
                "Braking System: Brake pads are worn out. Immediate replacement recommended."
            }
            (SymptomCategory::Brakes, Language::Hindi) => {
                "ब्रेकिंग सिस्टम: ब्रेक पैड्स घिस चुके हैं। इन्हें तुरंत बदलना बेहतर होगा।"
            }
            (SymptomCategory::Accident, Language::English) => {
                "Structural Alert: Accident history detected. Chassis alignment check is mandatory."
            }
            (SymptomCategory::Accident, Language::Hindi) => {
                "स्ट्रक्चरल अलर्ट: एक्सीडेंट की वजह से चेसिस एलाइनमेंट चेक करवाना अनिवार्य है।"
            }
            (SymptomCategory::BodyDamage, Language::English) => {
                "Body Work: Dents/scratches found. Repainting needed to prevent rusting."
            }
            (SymptomCategory::BodyDamage, Language::Hindi) => {
                "बॉडी वर्क: डेंट/स्क्रैच पाए गए हैं। जंग से बचने के लिए पेंटिंग की जरूरत है।"
            }
            (SymptomCategory::Battery, Language::English) => {
                "Electrical: Alternator or battery voltage appears weak."
            }
            (SymptomCategory::Battery, Language::Hindi) => {
                "इलेक्ट्रिकल: अल्टरनेटर या बैटरी वोल्टेज कमजोर लग रहा है।"
            }
        }
    }
}

/// Generic message used when no keyword set matched
pub fn fallback_message(lang: Language) -> &'static str {
    match lang {
        Language::English => "Analysis complete based on your inputs.",
        Language::Hindi => "आपके द्वारा दी गई जानकारी का विश्लेषण पूरा हुआ।",
    }
}

/// Detect symptom categories in free text, in fixed check order
pub fn detect_symptoms(text: &str) -> Vec<SymptomCategory> {
    let text = text.to_lowercase();
    SymptomCategory::ALL
        .into_iter()
        .filter(|category| category.keywords().iter().any(|kw| text.contains(kw)))
        .collect()
}

/// Advisory lines for free text; exactly one fallback line when nothing matched
pub fn analyze_symptoms(text: &str, lang: Language) -> Vec<String> {
    let hits = detect_symptoms(text);
    if hits.is_empty() {
        vec![fallback_message(lang).to_string()]
    } else {
        hits.into_iter().map(|c| c.advisory(lang).to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brake_and_accident_in_fixed_order() {
        let advisories = analyze_symptoms("brake noise and small accident", Language::English);
        let brake = SymptomCategory::Brakes.advisory(Language::English);
        let accident = SymptomCategory::Accident.advisory(Language::English);
        let brake_pos = advisories.iter().position(|a| a == brake).unwrap();
        let accident_pos = advisories.iter().position(|a| a == accident).unwrap();
        assert!(brake_pos < accident_pos);
        // "noise" also hits the engine set, and comes first in check order
        assert_eq!(
            advisories[0],
            SymptomCategory::EngineNoise.advisory(Language::English)
        );
        // No duplicates
        let mut deduped = advisories.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), advisories.len());
    }

    #[test]
    fn test_no_keyword_returns_generic_fallback() {
        let advisories = analyze_symptoms("everything looks fine", Language::English);
        assert_eq!(advisories, vec![fallback_message(Language::English).to_string()]);

        let advisories = analyze_symptoms("everything looks fine", Language::Hindi);
        assert_eq!(advisories, vec![fallback_message(Language::Hindi).to_string()]);
    }

    #[test]
    fn test_hinglish_keywords() {
        let hits = detect_symptoms("gaadi me takkar ke baad khat khat awaz aati hai");
        assert_eq!(
            hits,
            vec![SymptomCategory::EngineNoise, SymptomCategory::Accident]
        );
    }

    #[test]
    fn test_substring_match_inside_unrelated_word() {
        // Naive substring matching: "start" inside "restarted" still counts
        let hits = detect_symptoms("we restarted the trip yesterday");
        assert_eq!(hits, vec![SymptomCategory::Battery]);
        // ... and "dent" inside "accident" triggers the body set too
        let hits = detect_symptoms("accident last year");
        assert_eq!(
            hits,
            vec![SymptomCategory::Accident, SymptomCategory::BodyDamage]
        );
    }

    #[test]
    fn test_case_insensitive() {
        let hits = detect_symptoms("BRAKE Squeak");
        assert_eq!(hits, vec![SymptomCategory::Brakes]);
    }

    #[test]
    fn test_category_never_duplicated() {
        let hits = detect_symptoms("brake brake brake squeak");
        assert_eq!(hits, vec![SymptomCategory::Brakes]);
    }

    #[test]
    fn test_advisory_language_selection() {
        let en = analyze_symptoms("battery is weak", Language::English);
        let hi = analyze_symptoms("battery is weak", Language::Hindi);
        assert_eq!(en.len(), 1);
        assert_eq!(hi.len(), 1);
        assert_ne!(en[0], hi[0]);
    }
}
