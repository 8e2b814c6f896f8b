use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages offered for both the native and the target side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "English")]
    English,
    #[serde(rename = "Chinese (Simplified)")]
    ChineseSimplified,
    #[serde(rename = "Spanish")]
    Spanish,
    #[serde(rename = "French")]
    French,
    #[serde(rename = "German")]
    German,
    #[serde(rename = "Italian")]
    Italian,
    #[serde(rename = "Japanese")]
    Japanese,
    #[serde(rename = "Korean")]
    Korean,
    #[serde(rename = "Russian")]
    Russian,
    #[serde(rename = "Portuguese")]
    Portuguese,
    #[serde(rename = "Arabic")]
    Arabic,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::ChineseSimplified,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Russian,
        Language::Portuguese,
        Language::Arabic,
    ];

    /// Display name, also used verbatim inside prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::ChineseSimplified => "Chinese (Simplified)",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Russian => "Russian",
            Language::Portuguese => "Portuguese",
            Language::Arabic => "Arabic",
        }
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::ChineseSimplified => "zh",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Russian => "ru",
            Language::Portuguese => "pt",
            Language::Arabic => "ar",
        }
    }

}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language '{0}'")]
pub struct UnknownLanguage(pub String);

/// Parse from a display name, an English short name or an ISO code
impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| {
                lang.as_str().to_lowercase() == needle
                    || lang.code() == needle
                    || (*lang == Language::ChineseSimplified && needle == "chinese")
            })
            .ok_or_else(|| UnknownLanguage(s.trim().to_string()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Language::ChineseSimplified).unwrap();
        assert_eq!(json, "\"Chinese (Simplified)\"");

        let lang: Language = serde_json::from_str("\"Portuguese\"").unwrap();
        assert_eq!(lang, Language::Portuguese);
    }

    #[test]
    fn test_parse_accepts_names_and_codes() {
        assert_eq!("ja".parse(), Ok(Language::Japanese));
        assert_eq!("  german ".parse(), Ok(Language::German));
        assert_eq!("Chinese".parse(), Ok(Language::ChineseSimplified));
        assert_eq!(
            "Chinese (Simplified)".parse(),
            Ok(Language::ChineseSimplified)
        );
    }

    #[test]
    fn test_parse_unknown_language() {
        let err = " klingon ".parse::<Language>().unwrap_err();
        assert_eq!(err, UnknownLanguage("klingon".to_string()));
        assert_eq!(err.to_string(), "unknown language 'klingon'");
    }
}
