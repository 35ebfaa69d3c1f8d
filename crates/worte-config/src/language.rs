/// A language the speech service can be asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language {
        code: "ru",
        name: "Russisch",
    },
    Language {
        code: "de",
        name: "Deutsch",
    },
    Language {
        code: "en",
        name: "Englisch",
    },
];

impl Language {
    pub fn find(code: &str) -> Option<Language> {
        let code = code.trim();
        LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_codes_case_insensitively() {
        assert_eq!(Language::find("DE").map(|l| l.name), Some("Deutsch"));
        assert_eq!(Language::find(" ru ").map(|l| l.code), Some("ru"));
        assert!(Language::find("fr").is_none());
    }
}
