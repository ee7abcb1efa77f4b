//! Parsing of the registry's free-text responses.
//!
//! A typical body looks like `Kamol - (arabcha) mukammal, yetuk`. The stripping
//! order is fixed: the `"<name> -"` prefix, then the first parenthesized origin
//! token, then leading dashes, then surrounding whitespace.

use super::LookupResult;
use crate::core::config::LookupConfig;

/// Text conventions of the registry, taken from [`LookupConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFormat {
    pub not_found_marker: String,
    pub default_origin: String,
    pub no_meaning_text: String,
}

impl From<&LookupConfig> for ResponseFormat {
    fn from(config: &LookupConfig) -> Self {
        Self {
            not_found_marker: config.not_found_marker.clone(),
            default_origin: config.default_origin.clone(),
            no_meaning_text: config.no_meaning_text.clone(),
        }
    }
}

impl Default for ResponseFormat {
    fn default() -> Self {
        Self::from(&LookupConfig::default())
    }
}

/// Parse a registry response body for `name`.
///
/// Returns `None` for an empty body or one containing the not-found marker
/// (case-insensitive), regardless of anything else in it.
pub fn parse_lookup_response(
    name: &str,
    body: &str,
    format: &ResponseFormat,
) -> Option<LookupResult> {
    let content = body.trim();
    if content.is_empty()
        || content
            .to_lowercase()
            .contains(&format.not_found_marker.to_lowercase())
    {
        return None;
    }

    let origin_token = find_origin_token(content);
    let origin = origin_token
        .map(|(_, inner)| inner.to_string())
        .unwrap_or_else(|| format.default_origin.clone());

    let without_name = content.replacen(&format!("{name} -"), "", 1);
    let without_origin = match origin_token {
        Some((token, _)) => without_name.replacen(token, "", 1),
        None => without_name,
    };
    let meaning = without_origin.trim_start_matches('-').trim();

    Some(LookupResult {
        meaning: if meaning.is_empty() {
            format.no_meaning_text.clone()
        } else {
            meaning.to_string()
        },
        origin,
    })
}

/// First `(...)` group with a non-empty body free of `)`.
///
/// Returns the whole token including parentheses and its inner text.
fn find_origin_token(content: &str) -> Option<(&str, &str)> {
    content.match_indices('(').find_map(|(open, _)| {
        let inner_start = open + 1;
        let close = inner_start + content[inner_start..].find(')')?;
        (close > inner_start).then(|| (&content[open..=close], &content[inner_start..close]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str, body: &str) -> Option<LookupResult> {
        parse_lookup_response(name, body, &ResponseFormat::default())
    }

    #[test]
    fn extracts_origin_and_meaning() {
        let result = parse("Kamol", "Kamol - (arabcha) mukammal, yetuk").unwrap();
        assert_eq!(result.origin, "arabcha");
        assert_eq!(result.meaning, "mukammal, yetuk");
    }

    #[test]
    fn not_found_marker_wins_over_content() {
        assert!(parse("Olbira", "Olbira - (arabcha) TOPILMADI").is_none());
        assert!(parse("Olbira", "Ism Topilmadi").is_none());
    }

    #[test]
    fn blank_body_is_not_found() {
        assert!(parse("Kamol", "   \n").is_none());
    }

    #[test]
    fn missing_origin_uses_sentinel() {
        let result = parse("Nodira", "Nodira - noyob, kamyob").unwrap();
        assert_eq!(result.origin, "Ma'lumot bazasi");
        assert_eq!(result.meaning, "noyob, kamyob");
    }

    #[test]
    fn empty_remainder_uses_canned_meaning() {
        let result = parse("Zebo", "Zebo - (forscha)").unwrap();
        assert_eq!(result.origin, "forscha");
        assert_eq!(result.meaning, ResponseFormat::default().no_meaning_text);
    }

    #[test]
    fn leading_dashes_stripped_only_after_prefix_and_origin() {
        // name prefix absent: the dash run at the very start is removed
        let result = parse("Laylo", "-- (arabcha) tun").unwrap();
        assert_eq!(result.meaning, "tun");

        // whitespace before the dash keeps the dash
        let result = parse("Laylo", "Laylo - (arabcha) - tun").unwrap();
        assert_eq!(result.meaning, "- tun");
    }

    #[test]
    fn empty_parentheses_are_skipped() {
        let result = parse("Aziz", "Aziz - () (arabcha) qadrli").unwrap();
        assert_eq!(result.origin, "arabcha");
        assert_eq!(result.meaning, "()  qadrli");
    }

    #[test]
    fn unclosed_parenthesis_degrades() {
        let result = parse("Aziz", "Aziz - (arabcha qadrli").unwrap();
        assert_eq!(result.origin, "Ma'lumot bazasi");
        assert_eq!(result.meaning, "(arabcha qadrli");
    }
}
