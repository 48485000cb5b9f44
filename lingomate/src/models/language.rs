use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages offered in the target-language selector, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[default]
    English,
    Spanish,
    French,
    Urdu,
    #[serde(rename = "Roman Urdu")]
    RomanUrdu,
    Japanese,
    Arabic,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 7] = [
        TargetLanguage::English,
        TargetLanguage::Spanish,
        TargetLanguage::French,
        TargetLanguage::Urdu,
        TargetLanguage::RomanUrdu,
        TargetLanguage::Japanese,
        TargetLanguage::Arabic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::English => "English",
            TargetLanguage::Spanish => "Spanish",
            TargetLanguage::French => "French",
            TargetLanguage::Urdu => "Urdu",
            TargetLanguage::RomanUrdu => "Roman Urdu",
            TargetLanguage::Japanese => "Japanese",
            TargetLanguage::Arabic => "Arabic",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
