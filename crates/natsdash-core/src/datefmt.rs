//! Locale-aware date formatting.
//!
//! A thin layer over chrono's locale tables: this module picks the locale
//! and the pattern, chrono does all calendar and naming work. Invalid
//! locales and patterns are rejected up front instead of producing
//! half-formatted output.

use std::fmt::{self, Write};

use chrono::{DateTime, Locale, TimeZone};
use thiserror::Error;

/// Locale used when none is given.
pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("invalid date pattern '{0}'")]
    InvalidPattern(String),
}

/// Formatting directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// The locale's own short date representation (`%x`).
    #[default]
    Date,
    /// The locale's date and time representation (`%c`).
    DateTime,
    /// A strftime pattern; month and weekday names follow the locale.
    Pattern(String),
}

impl DateStyle {
    fn pattern(&self) -> &str {
        match self {
            Self::Date => "%x",
            Self::DateTime => "%c",
            Self::Pattern(p) => p,
        }
    }
}

/// Options for [`format_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// BCP 47-style tag such as `en-US` or `de_DE`.
    pub locale: String,
    pub style: DateStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
            style: DateStyle::default(),
        }
    }
}

impl FormatOptions {
    pub fn for_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: DateStyle) -> Self {
        self.style = style;
        self
    }
}

/// Format `date` with the locale and style from `options`.
pub fn format_date<Tz>(date: &DateTime<Tz>, options: &FormatOptions) -> Result<String, FormatError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let locale = resolve_locale(&options.locale)?;
    let pattern = options.style.pattern();
    if pattern.is_empty() {
        return Err(FormatError::InvalidPattern(String::new()));
    }

    // chrono reports unknown specifiers as a fmt::Error at render time.
    let mut out = String::new();
    write!(out, "{}", date.format_localized(pattern, locale))
        .map_err(|_| FormatError::InvalidPattern(pattern.to_owned()))?;
    Ok(out)
}

/// Format `date` as a short `en-US` date.
pub fn format_date_default<Tz>(date: &DateTime<Tz>) -> Result<String, FormatError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format_date(date, &FormatOptions::default())
}

/// Region picked for a bare language tag when `{lang}_{LANG}` isn't a
/// locale of its own.
const DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("en", "US"),
    ("zh", "CN"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("sv", "SE"),
    ("da", "DK"),
    ("cs", "CZ"),
    ("el", "GR"),
    ("he", "IL"),
    ("uk", "UA"),
    ("hi", "IN"),
    ("vi", "VN"),
    ("nb", "NO"),
    ("ar", "SA"),
];

/// Map a BCP 47-ish tag onto one of chrono's locales.
///
/// Separators and case are normalized (`en-us` becomes `en_US`), a script
/// subtag is ignored (`zh-Hans-CN` becomes `zh_CN`), and a bare language
/// picks a default region (`en` becomes `en_US`, `de` becomes `de_DE`).
fn resolve_locale(tag: &str) -> Result<Locale, FormatError> {
    let tag = tag.trim().replace('-', "_");
    let mut parts = tag.split('_');
    let lang = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = parts
        .find(|p| p.len() == 2 || (p.len() == 3 && p.bytes().all(|b| b.is_ascii_digit())))
        .map(str::to_ascii_uppercase);

    let candidates = match region {
        Some(region) => vec![format!("{lang}_{region}")],
        None => {
            let mut c: Vec<String> = DEFAULT_REGIONS
                .iter()
                .filter(|(l, _)| *l == lang)
                .map(|(l, r)| format!("{l}_{r}"))
                .collect();
            c.push(format!("{lang}_{}", lang.to_ascii_uppercase()));
            c.push(lang.clone());
            c
        }
    };

    candidates
        .iter()
        .find_map(|c| Locale::try_from(c.as_str()).ok())
        .ok_or(FormatError::UnknownLocale(tag))
}
