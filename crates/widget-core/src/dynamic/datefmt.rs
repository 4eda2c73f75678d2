//! Date patterns for `__NOW[...]`
//!
//! Patterns use the classic letter vocabulary: runs of a pattern letter
//! select a field and its width (`d MMM yyyy`, `EEEE HH.mm`), text inside
//! single quotes is literal and `''` is a quote character. Month and day
//! names follow the content locale.
//!
//! The `__NOW[...]` grammar does not admit `'`, so quoted literals only
//! apply when [`format_date`] is called directly.
//!
//! `z` renders the numeric offset (`+01:00`), not a zone name.

use crate::{Error, Result};
use chrono::{DateTime, Datelike, FixedOffset, Locale, Timelike};
use widget_host::ContentLocale;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Field { letter: char, width: usize },
    Literal(String),
}

/// Render `now` according to `pattern`.
///
/// Unknown pattern letters and unterminated quotes are errors.
pub fn format_date(
    now: &DateTime<FixedOffset>,
    pattern: &str,
    locale: &ContentLocale,
) -> Result<String> {
    let tokens = tokenize(pattern)?;
    let locale = chrono_locale(locale);
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(&text),
            Token::Field { letter, width } => {
                out.push_str(&render_field(now, letter, width, locale, pattern)?)
            }
        }
    }
    Ok(out)
}

fn tokenize(pattern: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                tokens.push(Token::Literal("'".to_string()));
                continue;
            }
            let mut literal = String::new();
            loop {
                match chars.next() {
                    Some('\'') if chars.peek() == Some(&'\'') => {
                        chars.next();
                        literal.push('\'');
                    }
                    Some('\'') => break,
                    Some(c) => literal.push(c),
                    None => return Err(Error::date_format(pattern, "unterminated quote")),
                }
            }
            tokens.push(Token::Literal(literal));
        } else if ch.is_ascii_alphabetic() {
            let mut width = 1;
            while chars.peek() == Some(&ch) {
                chars.next();
                width += 1;
            }
            tokens.push(Token::Field { letter: ch, width });
        } else {
            tokens.push(Token::Literal(ch.to_string()));
        }
    }
    Ok(tokens)
}

fn pad(value: impl std::fmt::Display, width: usize) -> String {
    format!("{:0>width$}", value.to_string(), width = width)
}

fn render_field(
    now: &DateTime<FixedOffset>,
    letter: char,
    width: usize,
    locale: Locale,
    pattern: &str,
) -> Result<String> {
    let localized = |spec: &str| now.format_localized(spec, locale).to_string();
    let text = match letter {
        'G' => (if now.year() > 0 { "AD" } else { "BC" }).to_string(),
        'y' | 'Y' => {
            let year = if letter == 'y' { now.year() } else { now.iso_week().year() };
            if width == 2 {
                pad(year.rem_euclid(100), 2)
            } else {
                pad(year, width)
            }
        }
        'M' | 'L' => match width {
            1 | 2 => pad(now.month(), width),
            3 => localized("%b"),
            _ => localized("%B"),
        },
        'w' => pad(now.iso_week().week(), width),
        'W' => {
            let day = i64::from(now.day());
            let first_weekday =
                (i64::from(now.weekday().num_days_from_monday()) - (day - 1)).rem_euclid(7);
            pad((day - 1 + first_weekday) / 7 + 1, width)
        }
        'D' => pad(now.ordinal(), width),
        'd' => pad(now.day(), width),
        'F' => pad((now.day() - 1) / 7 + 1, width),
        'E' => {
            if width >= 4 {
                localized("%A")
            } else {
                localized("%a")
            }
        }
        'u' => pad(now.weekday().number_from_monday(), width),
        'a' => localized("%p"),
        'H' => pad(now.hour(), width),
        'k' => pad(if now.hour() == 0 { 24 } else { now.hour() }, width),
        'K' => pad(now.hour() % 12, width),
        'h' => pad(now.hour12().1, width),
        'm' => pad(now.minute(), width),
        's' => pad(now.second(), width),
        'S' => pad(now.timestamp_subsec_millis(), width),
        'z' => now.format("%:z").to_string(),
        'Z' => now.format("%z").to_string(),
        'X' => {
            let offset = now.offset().local_minus_utc();
            if offset == 0 {
                "Z".to_string()
            } else {
                match width {
                    1 => format!("{}{:02}", if offset < 0 { '-' } else { '+' }, offset.abs() / 3600),
                    2 => now.format("%z").to_string(),
                    _ => now.format("%:z").to_string(),
                }
            }
        }
        other => {
            return Err(Error::date_format(
                pattern,
                format!("illegal pattern character '{}'", other),
            ));
        }
    };
    Ok(text)
}

/// Map a content locale onto chrono's locale tables.
fn chrono_locale(locale: &ContentLocale) -> Locale {
    if let Some(country) = locale.country()
        && let Ok(exact) = Locale::try_from(format!("{}_{}", locale.language(), country).as_str())
    {
        return exact;
    }
    match locale.language() {
        "en" => Locale::en_US,
        "no" | "nb" => Locale::nb_NO,
        "nn" => Locale::nn_NO,
        "sv" => Locale::sv_SE,
        "da" => Locale::da_DK,
        "fi" => Locale::fi_FI,
        "is" => Locale::is_IS,
        "de" => Locale::de_DE,
        "fr" => Locale::fr_FR,
        "es" => Locale::es_ES,
        "it" => Locale::it_IT,
        "nl" => Locale::nl_NL,
        "pt" => Locale::pt_PT,
        "pl" => Locale::pl_PL,
        "ru" => Locale::ru_RU,
        _ => Locale::POSIX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn fixed_now() -> DateTime<FixedOffset> {
        // Tuesday 5 March 2024, 09:07:03.042 at UTC+01:00
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, 9, 7, 3)
            .unwrap()
            + chrono::Duration::milliseconds(42)
    }

    #[rstest]
    #[case("yyyy", "2024")]
    #[case("yy", "24")]
    #[case("d MMM yyyy", "5 Mar 2024")]
    #[case("dd.MM.yyyy", "05.03.2024")]
    #[case("EEEE d MMMM", "Tuesday 5 March")]
    #[case("EEE", "Tue")]
    #[case("HH.mm.ss.SSS", "09.07.03.042")]
    #[case("h a", "9 AM")]
    #[case("k K", "9 9")]
    #[case("D w u F", "65 10 2 1")]
    #[case("'Week' w", "Week 10")]
    #[case("'o''clock' ''", "o'clock '")]
    #[case("Z", "+0100")]
    #[case("z", "+01:00")]
    #[case("G", "AD")]
    #[case("X", "+01")]
    #[case("XXX", "+01:00")]
    fn test_english_patterns(#[case] pattern: &str, #[case] expected: &str) {
        let locale = ContentLocale::new("en");
        assert_eq!(format_date(&fixed_now(), pattern, &locale).unwrap(), expected);
    }

    #[test]
    fn test_norwegian_month_names() {
        let locale = ContentLocale::new("no");
        assert_eq!(format_date(&fixed_now(), "MMMM", &locale).unwrap(), "mars");
    }

    #[rstest]
    #[case("yyyy-qq")]
    #[case("'unterminated")]
    #[case("numeric2")]
    fn test_malformed_patterns(#[case] pattern: &str) {
        let err = format_date(&fixed_now(), pattern, &ContentLocale::new("en")).unwrap_err();
        assert!(matches!(err, Error::DateFormat { .. }));
    }

    #[test]
    fn test_unknown_language_uses_posix_names() {
        let locale = ContentLocale::new("xx");
        assert_eq!(format_date(&fixed_now(), "MMM", &locale).unwrap(), "Mar");
    }
}
