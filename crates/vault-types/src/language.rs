use serde::Serialize;

/// A language offered in the translation pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

pub const DEFAULT_LANGUAGE: &str = "hi";

pub const INDIAN_LANGUAGES: &[Language] = &[
    Language { code: "hi", name: "Hindi", native_name: "हिन्दी" },
    Language { code: "bn", name: "Bengali", native_name: "বাংলা" },
    Language { code: "te", name: "Telugu", native_name: "తెలుగు" },
    Language { code: "mr", name: "Marathi", native_name: "मराठी" },
    Language { code: "ta", name: "Tamil", native_name: "தமிழ்" },
    Language { code: "gu", name: "Gujarati", native_name: "ગુજરાતી" },
    Language { code: "ur", name: "Urdu", native_name: "اردو" },
    Language { code: "kn", name: "Kannada", native_name: "ಕನ್ನಡ" },
    Language { code: "ml", name: "Malayalam", native_name: "മലയാളം" },
    Language { code: "or", name: "Odia", native_name: "ଓଡ଼ିଆ" },
    Language { code: "pa", name: "Punjabi", native_name: "ਪੰਜਾਬੀ" },
    Language { code: "as", name: "Assamese", native_name: "অসমীয়া" },
];

impl Language {
    pub fn find(code: &str) -> Option<&'static Language> {
        INDIAN_LANGUAGES.iter().find(|l| l.code == code)
    }

    /// Picker label, e.g. "Hindi (हिन्दी)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.native_name)
    }
}

/// Display name for a code, or the code itself when it is not in the table
pub fn display_name(code: &str) -> &str {
    Language::find(code).map(|l| l.name).unwrap_or(code)
}
