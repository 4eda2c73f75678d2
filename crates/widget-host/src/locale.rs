//! Content locale of the item being edited

use crate::{Error, Result};
use std::str::FromStr;

/// Language/region variant of a content item, e.g. `en` or `en_GB`.
///
/// `Display` renders the full form (`en_GB`), [`ContentLocale::language`]
/// only the lower-case language code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentLocale {
    language: String,
    country: Option<String>,
}

impl ContentLocale {
    /// Create a locale from a language code alone.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            country: None,
        }
    }

    /// Add a country code.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into().to_ascii_uppercase());
        self
    }

    /// Lower-case language code, e.g. `en`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Upper-case country code, if any.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

impl Default for ContentLocale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl FromStr for ContentLocale {
    type Err = Error;

    /// Accepts `en`, `en_GB` and `en-GB`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidLocale {
            value: s.to_string(),
        };
        let mut parts = s.trim().splitn(2, ['_', '-']);
        let language = parts.next().filter(|l| is_code(l)).ok_or_else(invalid)?;
        let locale = Self::new(language);
        match parts.next() {
            None => Ok(locale),
            Some(country) if is_code(country) => Ok(locale.with_country(country)),
            Some(_) => Err(invalid()),
        }
    }
}

fn is_code(s: &str) -> bool {
    (2..=3).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic())
}

impl std::fmt::Display for ContentLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{}", self.language, country),
            None => write!(f, "{}", self.language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_only() {
        let locale: ContentLocale = "en".parse().unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.country(), None);
        assert_eq!(locale.to_string(), "en");
    }

    #[test]
    fn test_parse_with_country() {
        let locale: ContentLocale = "nb-no".parse().unwrap();
        assert_eq!(locale.language(), "nb");
        assert_eq!(locale.country(), Some("NO"));
        assert_eq!(locale.to_string(), "nb_NO");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<ContentLocale>().is_err());
        assert!("english".parse::<ContentLocale>().is_err());
        assert!("en_".parse::<ContentLocale>().is_err());
    }
}
