//! Supported response languages

use serde::{Deserialize, Serialize};

/// Locale of user-facing response messages.
///
/// Keyword matching in the parser is locale-blind; this only selects the
/// language of synthesized replies. Russian is the default because the
/// majority of the club's members speak it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ru-RU")]
    Russian,
    #[serde(rename = "en-US")]
    English,
    #[serde(rename = "th-TH")]
    Thai,
}

impl Language {
    /// All supported locale tags, in schema-enum order
    pub const TAGS: [&'static str; 3] = ["ru-RU", "en-US", "th-TH"];

    /// The IETF tag for this language
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Russian => "ru-RU",
            Language::English => "en-US",
            Language::Thai => "th-TH",
        }
    }

    /// Parse an IETF tag, `None` for unsupported locales
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ru-RU" => Some(Language::Russian),
            "en-US" => Some(Language::English),
            "th-TH" => Some(Language::Thai),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        for tag in Language::TAGS {
            assert_eq!(Language::from_tag(tag).unwrap().tag(), tag);
        }
        assert!(Language::from_tag("de-DE").is_none());
    }

    #[test]
    fn serde_uses_ietf_tags() {
        let json = serde_json::to_string(&Language::Thai).unwrap();
        assert_eq!(json, "\"th-TH\"");
        let back: Language = serde_json::from_str("\"ru-RU\"").unwrap();
        assert_eq!(back, Language::Russian);
    }
}
