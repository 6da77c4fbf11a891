//! Locale resolution for break iterators.
//!
//! Accepts both BCP-47 (`en-US`) and POSIX (`en_US.UTF-8@euro`) spellings,
//! since callers arriving from the old bridge API almost always hold the
//! latter.

use glint_core::error::SegmentError;
use icu::locale::{locale, Locale};

/// Parse a locale tag, tolerating POSIX decorations.
pub fn parse(tag: &str) -> Result<Locale, SegmentError> {
    normalize(tag)
        .parse::<Locale>()
        .map_err(|_| SegmentError::IllegalLocale(tag.to_string()))
}

/// The process default locale.
///
/// Resolved from `LC_ALL`, `LC_CTYPE`, then `LANG`; falls back to `en-US`
/// when none of them carries a usable tag.
pub fn default_locale() -> Locale {
    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        let Ok(value) = std::env::var(key) else {
            continue;
        };
        if value.is_empty() || value == "C" || value == "POSIX" {
            continue;
        }
        if let Ok(parsed) = parse(&value) {
            return parsed;
        }
    }
    locale!("en-US")
}

/// Strip the encoding/modifier suffix and swap separators:
/// `en_US.UTF-8@euro` becomes `en-US`.
fn normalize(tag: &str) -> String {
    let base = tag.split(['.', '@']).next().unwrap_or(tag);
    base.replace('_', "-")
}
